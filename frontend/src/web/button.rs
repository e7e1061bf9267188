use crate::from_js;
use web_sys::Element;
use wishlist_shared::{ButtonState, WishlistButton, WishlistErrorKind, WishlistResult};

/// 页面上的心愿单按钮
///
/// 渲染时只修改按钮的文本和一个样式类。
#[derive(Clone)]
pub struct DomButton {
    element: Element,
    active_class: String,
}

impl DomButton {
    pub fn new(element: Element, active_class: impl Into<String>) -> Self {
        Self {
            element,
            active_class: active_class.into(),
        }
    }
}

impl WishlistButton for DomButton {
    fn render(&self, state: ButtonState) -> WishlistResult<()> {
        self.element.set_text_content(Some(state.label));

        let classes = self.element.class_list();
        let res = if state.in_wishlist {
            classes.add_1(&self.active_class)
        } else {
            classes.remove_1(&self.active_class)
        };
        res.map_err(|e| {
            from_js(WishlistErrorKind::Dom, e).in_op_with("button.render", self.active_class.as_str())
        })
    }
}
