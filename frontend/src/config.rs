//! 运行时配置加载
//!
//! 宿主页面可在加载 wasm 之前设置 `window.WISHLIST_CONFIG = { ... }` 覆盖默认值，
//! 读不到或格式不对时使用默认配置。

use wasm_bindgen::JsValue;
use web_sys::Window;
use wishlist_shared::WishlistConfig;

pub const CONFIG_GLOBAL: &str = "WISHLIST_CONFIG";

pub fn load_config(window: &Window) -> WishlistConfig {
    let target: &JsValue = window;
    let value = match js_sys::Reflect::get(target, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(value) => value,
        Err(_) => return WishlistConfig::default(),
    };
    from_value(value)
}

/// 把 JS 对象转换为配置，`undefined` / `null` 视为未配置
pub fn from_value(value: JsValue) -> WishlistConfig {
    if value.is_undefined() || value.is_null() {
        return WishlistConfig::default();
    }

    match serde_wasm_bindgen::from_value::<WishlistConfig>(value) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Invalid {}: {}, using defaults", CONFIG_GLOBAL, e);
            WishlistConfig::default()
        }
    }
}
