//! Soft time-window penalty kernel.
//!
//! The entire cost model for late arrivals: a fixed intercept plus linear
//! terms in the delay and in the customer's importance.

use std::cell::RefCell;

use rustc_hash::FxHashMap;

const INTERCEPT: f64 = 5.42;
const DELAY_WEIGHT: f64 = 0.98;
const IMPORTANCE_WEIGHT: f64 = 452.25;

/// The kernel is cheap, but route evaluation hits the same (delay,
/// importance) pairs over and over during a construction; a small memo
/// keeps it off the profile.
const MEMO_CAPACITY: usize = 128;

thread_local! {
    static MEMO: RefCell<FxHashMap<(u64, u64), f64>> = RefCell::new(FxHashMap::default());
}

/// Delay cost of arriving `delay` time units after closing at a customer of
/// the given importance.  Zero when the arrival is on time.
pub fn predict(delay: f64, importance: f64) -> f64 {
    if delay <= 0.0 {
        return 0.0;
    }
    MEMO.with(|memo| {
        let key = (delay.to_bits(), importance.to_bits());
        let mut memo = memo.borrow_mut();
        if let Some(&cost) = memo.get(&key) {
            return cost;
        }
        let cost = INTERCEPT + DELAY_WEIGHT * delay + IMPORTANCE_WEIGHT * importance;
        if memo.len() >= MEMO_CAPACITY {
            memo.clear();
        }
        memo.insert(key, cost);
        cost
    })
}
