//! Typing debounce for the catalog search box.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared counter of scheduled reloads. Each new schedule, an immediate
/// search or an unmount moves it forward, so older tickets go stale.
#[derive(Clone, Debug, Default)]
pub struct Debounce {
    seq: Arc<AtomicU64>,
}

/// Handed to a pending timer; holds its own reference to the counter so it
/// stays readable after the page that issued it is gone.
#[derive(Clone, Debug)]
pub struct DebounceTicket {
    seq: Arc<AtomicU64>,
    issued: u64,
}

impl Debounce {
    pub fn schedule(&self) -> DebounceTicket {
        let issued = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        DebounceTicket {
            seq: self.seq.clone(),
            issued,
        }
    }

    /// Invalidate every pending ticket
    pub fn cancel(&self) {
        self.seq.fetch_add(1, Ordering::SeqCst);
    }
}

impl DebounceTicket {
    pub fn is_current(&self) -> bool {
        self.seq.load(Ordering::SeqCst) == self.issued
    }

    /// Run `f` only if nothing newer was scheduled or cancelled meanwhile
    pub fn fire(self, f: impl FnOnce()) -> bool {
        if self.is_current() {
            f();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_only_latest_keystroke_reloads() {
        let debounce = Debounce::default();
        let reloads = Cell::new(0);

        let first = debounce.schedule();
        let second = debounce.schedule();

        assert!(!first.fire(|| reloads.set(reloads.get() + 1)));
        assert!(second.fire(|| reloads.set(reloads.get() + 1)));
        assert_eq!(reloads.get(), 1);
    }

    #[test]
    fn test_immediate_search_cancels_pending_timer() {
        let debounce = Debounce::default();
        let pending = debounce.schedule();

        // Enter, the search button, category or sort
        debounce.cancel();

        assert!(!pending.is_current());
        assert!(!pending.fire(|| panic!("cancelled timer must not reload")));
    }

    #[test]
    fn test_timer_after_unmount_is_noop() {
        let debounce = Debounce::default();
        let pending = debounce.schedule();

        // page cleanup cancels, then the page's handle is dropped
        debounce.cancel();
        drop(debounce);

        assert!(!pending.fire(|| panic!("unmounted page must not reload")));
    }

    #[test]
    fn test_schedule_after_cancel_is_live() {
        let debounce = Debounce::default();
        debounce.cancel();
        let ticket = debounce.schedule();
        assert!(ticket.is_current());
    }
}
