use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Holds a resource (listener, timer) for the lifetime of the calling
/// component. The resource is dropped when the component unmounts.
pub fn use_scoped<T: 'static>(init: impl FnOnce() -> Option<T>) -> ScopedSlot<T> {
    let slot = use_hook(|| ScopedSlot(Rc::new(RefCell::new(init()))));
    let on_drop = slot.clone();
    use_drop(move || {
        on_drop.release();
    });
    slot
}

pub struct ScopedSlot<T>(Rc<RefCell<Option<T>>>);

impl<T> Clone for ScopedSlot<T> {
    fn clone(&self) -> Self {
        ScopedSlot(self.0.clone())
    }
}

impl<T> ScopedSlot<T> {
    pub fn release(&self) -> Option<T> {
        self.0.borrow_mut().take()
    }
}
