//! 页面扫描
//!
//! 只读取 DOM，不做任何修改。

use web_sys::{Document, Element};
use wishlist_shared::{WishlistConfig, WishlistItem};

/// 取第一个匹配的元素；选择器非法时视为不存在
fn select(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(e) => {
            log::warn!("wishlist: invalid selector {:?}: {:?}", selector, e);
            None
        }
    }
}

/// 定位心愿单切换按钮
pub fn find_button(document: &Document, config: &WishlistConfig) -> Option<Element> {
    select(document, &config.button_selector)
}

/// 提取当前页面的商品
///
/// 标题、价格、图片任一缺失（包括图片没有 `src` 属性）时返回 `None`。
pub fn scan_item(document: &Document, config: &WishlistConfig) -> Option<WishlistItem> {
    let title = select(document, &config.title_selector)?;
    let price = select(document, &config.price_selector)?;
    let image = select(document, &config.image_selector)?;
    let img_src = image.get_attribute("src")?;

    Some(WishlistItem::from_page_text(
        &title.text_content().unwrap_or_default(),
        &price.text_content().unwrap_or_default(),
        &img_src,
        &config.price_prefix,
    ))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document_with(html: &str) -> Document {
        let document = web_sys::window().unwrap().document().unwrap();
        document.body().unwrap().set_inner_html(html);
        document
    }

    #[wasm_bindgen_test]
    fn scans_product_page() {
        let document = document_with(
            r#"
            <h1 class="title">
                Linen Shirt
            </h1>
            <div class="clothing-item"><img src="/img/linen.png"></div>
            <div class="clothing-info"><ul><li>Price: $29.99 </li><li>Size: M</li></ul></div>
            <div class="wishlist">Add to Wish List</div>
            "#,
        );
        let config = WishlistConfig::default();

        assert!(find_button(&document, &config).is_some());
        let item = scan_item(&document, &config).unwrap();
        assert_eq!(item, WishlistItem::new("Linen Shirt", "$29.99", "/img/linen.png"));
    }

    #[wasm_bindgen_test]
    fn missing_parts_yield_nothing() {
        let config = WishlistConfig::default();

        let document = document_with(
            r#"<h1 class="title">Shirt</h1>
            <div class="clothing-item"><img src="/a.png"></div>
            <div class="wishlist"></div>"#,
        );
        assert!(scan_item(&document, &config).is_none());

        let document = document_with(
            r#"<h1 class="title">Shirt</h1>
            <div class="clothing-item"><img></div>
            <div class="clothing-info"><ul><li>Price: $1</li></ul></div>"#,
        );
        assert!(scan_item(&document, &config).is_none());
        assert!(find_button(&document, &config).is_none());
    }

    #[wasm_bindgen_test]
    fn invalid_selector_is_absent() {
        let document = document_with(r#"<div class="wishlist"></div>"#);
        let config = WishlistConfig {
            button_selector: "[[[".to_string(),
            ..WishlistConfig::default()
        };
        assert!(find_button(&document, &config).is_none());
    }
}
