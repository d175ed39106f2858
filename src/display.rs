// ./src/display.rs

use std::cell::RefCell;
use std::rc::Rc;

/// The page region a fetch result is written into.
///
/// Methods take `&self`: the region belongs to the page and is mutated in
/// place, the same way a DOM node is, from a single thread.
pub trait DisplayTarget {
    fn set_text(&self, text: &str);
    fn show(&self);
}

impl<T: DisplayTarget + ?Sized> DisplayTarget for Rc<T> {
    fn set_text(&self, text: &str) {
        (**self).set_text(text)
    }

    fn show(&self) {
        (**self).show()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

/// Snapshot of a [`MemoryTarget`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetState {
    pub text: String,
    pub visibility: Visibility,
    /// Number of text writes, useful to tell "written once" from "written twice".
    pub writes: usize,
}

/// In-memory display region. Hidden and empty until first written.
#[derive(Debug, Default)]
pub struct MemoryTarget {
    state: RefCell<TargetState>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().visibility == Visibility::Shown
    }

    pub fn snapshot(&self) -> TargetState {
        self.state.borrow().clone()
    }
}

impl DisplayTarget for MemoryTarget {
    fn set_text(&self, text: &str) {
        let mut state = self.state.borrow_mut();
        state.text.clear();
        state.text.push_str(text);
        state.writes += 1;
    }

    fn show(&self) {
        self.state.borrow_mut().visibility = Visibility::Shown;
    }
}

#[cfg(test)]
mod tests {
    use super::{DisplayTarget, MemoryTarget, Visibility};
    use std::rc::Rc;

    #[test]
    fn starts_hidden_and_empty() {
        let target = MemoryTarget::new();
        let state = target.snapshot();
        assert_eq!(state.visibility, Visibility::Hidden);
        assert_eq!(state.text, "");
        assert_eq!(state.writes, 0);
    }

    #[test]
    fn writes_replace_previous_text() {
        let target = MemoryTarget::new();
        target.set_text("first");
        target.set_text("second");
        assert_eq!(target.text(), "second");
        assert_eq!(target.snapshot().writes, 2);
        assert!(!target.is_visible());
    }

    #[test]
    fn shared_handle_mutates_the_same_region() {
        let target = Rc::new(MemoryTarget::new());
        let handle = Rc::clone(&target);
        handle.set_text("hi");
        handle.show();
        assert_eq!(target.text(), "hi");
        assert!(target.is_visible());
    }
}
