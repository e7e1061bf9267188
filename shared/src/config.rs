//! 运行时配置
//!
//! 宿主页面可以覆盖任意字段，未提供的字段使用默认值（与现有商品页面的标记一致）。

use crate::{DEFAULT_ACTIVE_CLASS, DEFAULT_PRICE_PREFIX, DEFAULT_STORAGE_KEY};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WishlistConfig {
    /// 存储心愿单的键
    pub storage_key: String,
    /// 切换按钮（取第一个匹配）
    pub button_selector: String,
    pub title_selector: String,
    /// 价格文本所在元素
    pub price_selector: String,
    pub image_selector: String,
    /// 价格文本中需要去掉的标签前缀
    pub price_prefix: String,
    /// 商品在心愿单中时按钮带有的样式类
    pub active_class: String,
}

impl Default for WishlistConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            button_selector: ".wishlist".to_string(),
            title_selector: ".title".to_string(),
            price_selector: ".clothing-info ul li:first-child".to_string(),
            image_selector: ".clothing-item img".to_string(),
            price_prefix: DEFAULT_PRICE_PREFIX.to_string(),
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
        }
    }
}
