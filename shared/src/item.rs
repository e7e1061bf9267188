//! 领域模型
//!
//! `Wishlist` 的唯一性（同一 `imgSrc` 至多一条）只由 [`Wishlist::toggle`] 维护，
//! 存储层不做任何约束。

use crate::{LABEL_ADD, LABEL_REMOVE};
use serde::{Deserialize, Serialize};

// =========================================================
// WishlistItem
// =========================================================

/// 心愿单中的单个商品
///
/// `img_src` 同时作为商品的身份标识。`price` 为不透明文本，不做数值解析。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub name: String,
    pub price: String,
    #[serde(rename = "imgSrc")]
    pub img_src: String,
}

impl WishlistItem {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        img_src: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            img_src: img_src.into(),
        }
    }

    /// 从页面上读取到的原始文本构造商品
    ///
    /// - 标题去除首尾空白
    /// - 价格文本去掉第一次出现的 `price_prefix`，再去除首尾空白
    /// - 图片地址原样保留
    pub fn from_page_text(
        title_text: &str,
        price_text: &str,
        img_src: &str,
        price_prefix: &str,
    ) -> Self {
        let price = if price_prefix.is_empty() {
            price_text.to_string()
        } else {
            price_text.replacen(price_prefix, "", 1)
        };

        Self {
            name: title_text.trim().to_string(),
            price: price.trim().to_string(),
            img_src: img_src.to_string(),
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.img_src
    }
}

// =========================================================
// Membership / ButtonState
// =========================================================

/// 商品相对于心愿单的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Absent,
    Present,
}

impl Membership {
    pub fn button_state(self) -> ButtonState {
        match self {
            Membership::Absent => ButtonState {
                label: LABEL_ADD,
                in_wishlist: false,
            },
            Membership::Present => ButtonState {
                label: LABEL_REMOVE,
                in_wishlist: true,
            },
        }
    }
}

/// 按钮应呈现的视觉状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub label: &'static str,
    /// 是否带有激活样式类
    pub in_wishlist: bool,
}

/// 一次切换实际执行的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

impl ToggleOutcome {
    pub fn membership(self) -> Membership {
        match self {
            ToggleOutcome::Added => Membership::Present,
            ToggleOutcome::Removed => Membership::Absent,
        }
    }

    pub fn verb(self) -> &'static str {
        match self {
            ToggleOutcome::Added => "added to",
            ToggleOutcome::Removed => "removed from",
        }
    }
}

// =========================================================
// Wishlist
// =========================================================

/// 有序的心愿单，保持插入顺序
///
/// 序列化为裸 JSON 数组。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist(Vec<WishlistItem>);

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[WishlistItem] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 线性查找第一条 `imgSrc` 相同的记录
    pub fn position(&self, img_src: &str) -> Option<usize> {
        self.0.iter().position(|i| i.img_src == img_src)
    }

    pub fn membership(&self, img_src: &str) -> Membership {
        if self.position(img_src).is_some() {
            Membership::Present
        } else {
            Membership::Absent
        }
    }

    /// 切换商品：已存在则移除第一条匹配项，否则追加到末尾
    pub fn toggle(&mut self, item: &WishlistItem) -> ToggleOutcome {
        match self.position(item.id()) {
            Some(index) => {
                self.0.remove(index);
                ToggleOutcome::Removed
            }
            None => {
                self.0.push(item.clone());
                ToggleOutcome::Added
            }
        }
    }
}

impl From<Vec<WishlistItem>> for Wishlist {
    fn from(items: Vec<WishlistItem>) -> Self {
        Self(items)
    }
}

impl From<Wishlist> for Vec<WishlistItem> {
    fn from(list: Wishlist) -> Self {
        list.0
    }
}
