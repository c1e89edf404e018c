use super::action::Action;
use super::reducer::reduce;
use super::view_state::ViewState;
use leptos::prelude::*;
use std::cell::RefCell;

/// Holder of the single [`ViewState`]; every change goes through [`reduce`].
pub trait ViewStore {
    fn dispatch(&self, action: Action);

    /// Read without subscribing to changes
    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R;
}

/// The app keeps its state in a signal so the view re-renders on dispatch
impl ViewStore for RwSignal<ViewState> {
    fn dispatch(&self, action: Action) {
        self.update(|state| {
            let current = std::mem::take(state);
            *state = reduce(current, action);
        });
    }

    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        self.with_untracked(f)
    }
}

impl ViewStore for RefCell<ViewState> {
    fn dispatch(&self, action: Action) {
        let current = self.take();
        *self.borrow_mut() = reduce(current, action);
    }

    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.borrow())
    }
}
