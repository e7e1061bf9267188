//! 心愿单存储
//!
//! `KeyValueStorage` 是对浏览器 `localStorage` 这类字符串键值存储的抽象，
//! `WishlistStore` 在其之上负责整份心愿单的读取与覆盖写入。

use crate::error::{WishlistError, WishlistResult};
use crate::item::Wishlist;
use std::cell::RefCell;
use std::collections::HashMap;

// =========================================================
// 抽象接口定义
// =========================================================

/// 字符串键值存储
pub trait KeyValueStorage {
    /// 读取值，键不存在时返回 `Ok(None)`
    fn get(&self, key: &str) -> WishlistResult<Option<String>>;
    /// 无条件覆盖写入
    fn set(&self, key: &str, value: &str) -> WishlistResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get(&self, key: &str) -> WishlistResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> WishlistResult<()> {
        (**self).set(key, value)
    }
}

// =========================================================
// 内存实现 (MemoryStorage)
// =========================================================

/// 内存中的键值存储，用于测试及非浏览器宿主
#[derive(Debug, Default)]
pub struct MemoryStorage {
    map: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置一个原始字符串值
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// 直接读取原始字符串（绕过反序列化）
    pub fn raw(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> WishlistResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> WishlistResult<()> {
        self.map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =========================================================
// WishlistStore
// =========================================================

/// 整份心愿单的读写
///
/// 每次读取都是完整反序列化，每次写入都是完整覆盖，后写者胜出。
pub struct WishlistStore<S: KeyValueStorage> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> WishlistStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// 读取心愿单
    ///
    /// 未存储（或存储为空字符串）时返回空列表。存储内容无法解析时记录错误日志并
    /// 返回空列表：损坏的数据对调用方而言等同于空数据。
    ///
    /// 底层存储本身的读取失败不会被吞掉，原样向上传播。
    pub fn load(&self) -> WishlistResult<Wishlist> {
        let raw = self
            .storage
            .get(self.key())
            .map_err(|e| e.in_op_with("store.load", self.key()))?;

        let raw = match raw {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(Wishlist::new()),
        };

        match parse_wishlist(&raw) {
            Ok(list) => Ok(list),
            Err(e) => {
                log::error!("Error parsing wishlist from storage: {}", e);
                Ok(Wishlist::new())
            }
        }
    }

    /// 序列化并覆盖写入整份心愿单
    pub fn save(&self, list: &Wishlist) -> WishlistResult<()> {
        let raw = serde_json::to_string(list)
            .map_err(|e| WishlistError::from(e).in_op("store.save"))?;
        self.storage
            .set(self.key(), &raw)
            .map_err(|e| e.in_op_with("store.save", self.key()))
    }
}

/// 解析为完整的类型化列表，任何一条记录不合法都视为整体失败
fn parse_wishlist(raw: &str) -> WishlistResult<Wishlist> {
    serde_json::from_str::<Wishlist>(raw)
        .map_err(|e| WishlistError::from(e).in_op("store.parse"))
}
