#![doc(test(attr(deny(warnings))))]

//! Subtrack Core offers the subscription roster, lifecycle calculations, and
//! persistence primitives that power the client-tracking CLI.

pub mod cli;
pub mod core;
pub mod errors;
pub mod report;
pub mod storage;
pub mod subscription;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Subtrack Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
