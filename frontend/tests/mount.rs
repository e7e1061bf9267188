#![cfg(target_arch = "wasm32")]

use serde_json::{Value, json};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};
use wishlist_frontend::{LocalStorage, mount};
use wishlist_shared::{KeyValueStorage, WishlistConfig};

wasm_bindgen_test_configure!(run_in_browser);

const PRODUCT_PAGE: &str = r#"
    <h1 class="title"> Shirt </h1>
    <div class="clothing-item"><img src="/img/shirt.png"></div>
    <div class="clothing-info"><ul><li>Price: $10</li><li>Colour: blue</li></ul></div>
    <div class="wishlist">Add to Wish List</div>
"#;

const SHIRT: &str = r#"[{"name":"Shirt","price":"$10","imgSrc":"/img/shirt.png"}]"#;

// =========================================================
// Helpers
// =========================================================

fn setup(html: &str, key: &str, stored: Option<&str>) -> (Document, WishlistConfig) {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().set_inner_html(html);

    let storage = LocalStorage::open().unwrap();
    storage.delete(key).unwrap();
    if let Some(raw) = stored {
        storage.set(key, raw).unwrap();
    }

    let config = WishlistConfig {
        storage_key: key.to_string(),
        ..WishlistConfig::default()
    };
    (document, config)
}

fn button(document: &Document) -> HtmlElement {
    document
        .query_selector(".wishlist")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn stored(key: &str) -> Option<Value> {
    LocalStorage::open()
        .unwrap()
        .get(key)
        .unwrap()
        .map(|raw| serde_json::from_str(&raw).unwrap())
}

// =========================================================
// Tests
// =========================================================

#[wasm_bindgen_test]
fn click_adds_item() {
    let key = "wishlist-test:add";
    let (document, config) = setup(PRODUCT_PAGE, key, Some("[]"));

    assert!(mount(&document, &config).unwrap());
    assert_eq!(button(&document).text_content().unwrap(), "Add to Wish List");

    button(&document).click();

    assert_eq!(
        stored(key),
        Some(json!([{ "name": "Shirt", "price": "$10", "imgSrc": "/img/shirt.png" }]))
    );
    let btn = button(&document);
    assert_eq!(btn.text_content().unwrap(), "Remove from Wish List");
    assert!(btn.class_list().contains("in-wishlist"));
}

#[wasm_bindgen_test]
fn click_removes_item() {
    let key = "wishlist-test:remove";
    let (document, config) = setup(PRODUCT_PAGE, key, Some(SHIRT));

    assert!(mount(&document, &config).unwrap());
    let btn = button(&document);
    assert_eq!(btn.text_content().unwrap(), "Remove from Wish List");
    assert!(btn.class_list().contains("in-wishlist"));

    btn.click();

    assert_eq!(stored(key), Some(json!([])));
    assert_eq!(btn.text_content().unwrap(), "Add to Wish List");
    assert!(!btn.class_list().contains("in-wishlist"));
}

#[wasm_bindgen_test]
fn double_click_is_net_noop() {
    let key = "wishlist-test:double";
    let (document, config) = setup(PRODUCT_PAGE, key, None);

    mount(&document, &config).unwrap();
    let btn = button(&document);
    btn.click();
    btn.click();

    assert_eq!(stored(key), Some(json!([])));
    assert_eq!(btn.text_content().unwrap(), "Add to Wish List");
}

#[wasm_bindgen_test]
fn missing_price_leaves_button_inert() {
    let key = "wishlist-test:inert";
    let html = r#"
        <h1 class="title">Shirt</h1>
        <div class="clothing-item"><img src="/img/shirt.png"></div>
        <div class="wishlist">Add to Wish List</div>
    "#;
    let (document, config) = setup(html, key, Some("[]"));

    assert!(!mount(&document, &config).unwrap());
    button(&document).click();

    assert_eq!(stored(key), Some(json!([])));
    assert_eq!(button(&document).text_content().unwrap(), "Add to Wish List");
}

#[wasm_bindgen_test]
fn page_without_button_is_noop() {
    let key = "wishlist-test:no-button";
    let (document, config) = setup(r#"<h1 class="title">Shirt</h1>"#, key, None);

    assert!(!mount(&document, &config).unwrap());
    assert_eq!(stored(key), None);
}

#[wasm_bindgen_test]
fn corrupted_store_recovers_on_click() {
    let key = "wishlist-test:corrupted";
    let (document, config) = setup(PRODUCT_PAGE, key, Some("{broken"));

    assert!(mount(&document, &config).unwrap());
    assert_eq!(button(&document).text_content().unwrap(), "Add to Wish List");

    button(&document).click();
    assert_eq!(stored(key), Some(serde_json::from_str::<Value>(SHIRT).unwrap()));
}
