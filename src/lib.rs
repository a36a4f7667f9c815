#![doc(test(attr(deny(warnings))))]

//! Budget Tracker records income and expense entries, persists them as JSON
//! and reports totals, balance and the expense ratio through a small shell.

pub mod cli;
pub mod errors;
pub mod utils;

pub use tracker_core as ledger;
pub use tracker_domain as domain;

/// Initializes global tracing. Safe to call more than once.
pub fn init() {
    utils::init_tracing();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
