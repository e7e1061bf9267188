//! 心愿单浏览器适配层
//!
//! 把宿主页面的 DOM 与 `localStorage` 接到 `wishlist_shared` 的核心逻辑上：
//! - `web::page`: 从页面提取商品信息并定位切换按钮
//! - `web::button`: DOM 按钮的状态渲染
//! - `web::storage`: `localStorage` 键值存储
//! - `config`: 从宿主读取运行时配置

mod config;
mod logging;

// 原生 Web API 封装模块
pub(crate) mod web {
    pub mod button;
    pub mod page;
    pub mod storage;

    pub use button::DomButton;
    pub use storage::LocalStorage;
}

pub use config::{CONFIG_GLOBAL, load_config};
pub use web::{DomButton, LocalStorage};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event};
use wishlist_shared::{
    ToggleController, WishlistConfig, WishlistError, WishlistErrorKind, WishlistStore,
};

// Use lol_alloc as the global allocator for smaller WASM size
#[cfg(target_arch = "wasm32")]
use lol_alloc::{AssumeSingleThreaded, FreeListAllocator};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: AssumeSingleThreaded<FreeListAllocator> =
    unsafe { AssumeSingleThreaded::new(FreeListAllocator::new()) };

// =========================================================
// JsValue <-> WishlistError
// =========================================================

pub(crate) fn from_js(kind: WishlistErrorKind, value: JsValue) -> WishlistError {
    let message = value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| e.message().into()))
        .unwrap_or_else(|| format!("{:?}", value));
    WishlistError::new(kind, message)
}

pub(crate) fn to_js(err: WishlistError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

// =========================================================
// 入口
// =========================================================

/// 模块实例化时自动执行：安装日志与 panic hook，并在 DOM 就绪后挂载
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    logging::init();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("无法获取 window 对象"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("无法获取 document 对象"))?;
    let config = load_config(&window);

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once_into_js(move || {
            if let Err(e) = mount(&doc, &config) {
                log::error!("wishlist mount failed: {:?}", e);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        mount(&document, &config)?;
    }
    Ok(())
}

/// 在页面上挂载心愿单按钮
///
/// 返回是否绑定了点击事件。页面没有按钮、或缺少标题/价格/图片时返回 `Ok(false)`，
/// 按钮保持原样不响应。
pub fn mount(document: &Document, config: &WishlistConfig) -> Result<bool, JsValue> {
    let Some(element) = web::page::find_button(document, config) else {
        return Ok(false);
    };
    let Some(item) = web::page::scan_item(document, config) else {
        log::debug!("wishlist: page markup incomplete, button left inert");
        return Ok(false);
    };

    let storage = LocalStorage::open().map_err(to_js)?;
    let controller = ToggleController::new(WishlistStore::new(storage, &config.storage_key), item);
    let button = DomButton::new(element.clone(), &config.active_class);

    controller.sync_button(&button).map_err(to_js)?;

    let on_click = Closure::<dyn FnMut(Event) -> Result<(), JsValue>>::new(move |event: Event| {
        event.prevent_default();
        controller.toggle(&button).map(|_| ()).map_err(to_js)
    });
    element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    // 监听器与页面同生命周期
    on_click.forget();

    Ok(true)
}
