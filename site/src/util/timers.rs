//! Cancellable one-shot timers keyed by `TimerSlot`.
//!
//! A `gloo_timers` `Timeout` cancels itself when dropped, so replacing or
//! removing a slot's entry is the cancellation. Browser-only: the page runs
//! on a single thread, hence the thread-local table.

use std::cell::RefCell;
use std::collections::HashMap;

use gloo_timers::callback::Timeout;

use crate::state::effect::TimerSlot;

thread_local! {
    static PENDING: RefCell<HashMap<TimerSlot, Timeout>> = RefCell::new(HashMap::new());
}

/// Run `callback` after `delay_ms`, cancelling whatever was pending in `slot`.
pub fn schedule(slot: TimerSlot, delay_ms: u32, callback: impl FnOnce() + 'static) {
    let timeout = Timeout::new(delay_ms, callback);
    // Drop the replaced timer outside the borrow.
    let replaced = PENDING.with_borrow_mut(|pending| pending.insert(slot, timeout));
    drop(replaced);
}

pub fn cancel(slot: TimerSlot) {
    let removed = PENDING.with_borrow_mut(|pending| pending.remove(&slot));
    drop(removed);
}

/// Cancel every pending timer, e.g. on page teardown.
pub fn cancel_all() {
    let drained: Vec<Timeout> = PENDING.with_borrow_mut(|pending| pending.drain().map(|(_, t)| t).collect());
    drop(drained);
}
