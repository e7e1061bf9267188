//! 心愿单核心逻辑
//!
//! 不依赖任何浏览器 API：
//! - `item`: 领域模型（`WishlistItem` / `Wishlist` / `Membership`）
//! - `store`: 键值存储抽象与心愿单读写
//! - `controller`: 切换控制器（按钮状态 + 存储变更）
//! - `config`: 页面选择器与存储键配置
//! - `error`: 统一错误类型

pub mod config;
pub mod controller;
pub mod error;
pub mod item;
pub mod store;

pub use config::WishlistConfig;
pub use controller::{ToggleController, WishlistButton};
pub use error::{WishlistError, WishlistErrorKind, WishlistResult};
pub use item::{ButtonState, Membership, ToggleOutcome, Wishlist, WishlistItem};
pub use store::{KeyValueStorage, MemoryStorage, WishlistStore};

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const DEFAULT_STORAGE_KEY: &str = "wishlist";
pub const DEFAULT_PRICE_PREFIX: &str = "Price:";
pub const DEFAULT_ACTIVE_CLASS: &str = "in-wishlist";

pub const LABEL_ADD: &str = "Add to Wish List";
pub const LABEL_REMOVE: &str = "Remove from Wish List";
