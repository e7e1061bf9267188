use crate::error::WishlistResult;
use crate::item::{ButtonState, Membership, ToggleOutcome, WishlistItem};
use crate::store::{KeyValueStorage, WishlistStore};


// =========================================================
// 按钮抽象
// =========================================================

/// 心愿单切换按钮
///
/// 浏览器中由 DOM 元素实现，测试中由记录型替身实现。
pub trait WishlistButton {
    fn render(&self, state: ButtonState) -> WishlistResult<()>;
}

impl<B: WishlistButton + ?Sized> WishlistButton for &B {
    fn render(&self, state: ButtonState) -> WishlistResult<()> {
        (**self).render(state)
    }
}

// =========================================================
// ToggleController
// =========================================================

/// 单个商品的心愿单切换控制器
///
/// 特点：
/// 1. 不依赖浏览器，存储与按钮均通过 trait 注入。
/// 2. 每次操作都完整读取、完整写回心愿单，不缓存。
/// 3. 先写存储、再更新按钮：写入失败时按钮保持切换前的状态。
pub struct ToggleController<S: KeyValueStorage> {
    store: WishlistStore<S>,
    item: WishlistItem,
}

impl<S: KeyValueStorage> ToggleController<S> {
    pub fn new(store: WishlistStore<S>, item: WishlistItem) -> Self {
        Self { store, item }
    }

    pub fn item(&self) -> &WishlistItem {
        &self.item
    }

    pub fn store(&self) -> &WishlistStore<S> {
        &self.store
    }

    /// 当前商品是否在心愿单中
    pub fn membership(&self) -> WishlistResult<Membership> {
        Ok(self.store.load()?.membership(self.item.id()))
    }

    /// 页面就绪时同步按钮的初始状态
    pub fn sync_button<B: WishlistButton>(&self, button: &B) -> WishlistResult<Membership> {
        let membership = self.membership()?;
        button.render(membership.button_state())?;
        Ok(membership)
    }

    /// 切换当前商品
    pub fn toggle<B: WishlistButton>(&self, button: &B) -> WishlistResult<ToggleOutcome> {
        let mut list = self.store.load()?;
        let outcome = list.toggle(&self.item);

        self.store
            .save(&list)
            .map_err(|e| e.in_op_with("controller.toggle", self.item.id()))?;
        button.render(outcome.membership().button_state())?;

        log::info!("{} {} wishlist.", self.item.name, outcome.verb());
        Ok(outcome)
    }
}
