//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 实现 `KeyValueStorage`。与静默失败的写法不同，这里的
//! 读写错误（配额超限、存储被禁用）都会以 `WishlistError` 返回给调用方。

use crate::from_js;
use wishlist_shared::{KeyValueStorage, WishlistError, WishlistErrorKind, WishlistResult};

/// 浏览器 LocalStorage
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    /// 获取当前窗口的 LocalStorage
    ///
    /// # 返回
    /// - `Err(Unavailable)` 如果没有 window，或浏览器禁止访问 LocalStorage
    pub fn open() -> WishlistResult<Self> {
        let window =
            web_sys::window().ok_or_else(|| WishlistError::unavailable("无法获取 window 对象"))?;
        let inner = window
            .local_storage()
            .map_err(|e| from_js(WishlistErrorKind::Unavailable, e).in_op("storage.open"))?
            .ok_or_else(|| WishlistError::unavailable("localStorage is disabled"))?;
        Ok(Self { inner })
    }

    /// 删除存储的键值对
    pub fn delete(&self, key: &str) -> WishlistResult<()> {
        self.inner
            .remove_item(key)
            .map_err(|e| from_js(WishlistErrorKind::Storage, e).in_op_with("storage.delete", key))
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> WishlistResult<Option<String>> {
        self.inner
            .get_item(key)
            .map_err(|e| from_js(WishlistErrorKind::Storage, e).in_op_with("storage.get", key))
    }

    fn set(&self, key: &str, value: &str) -> WishlistResult<()> {
        self.inner
            .set_item(key, value)
            .map_err(|e| from_js(WishlistErrorKind::Storage, e).in_op_with("storage.set", key))
    }
}
