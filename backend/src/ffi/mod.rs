//! FFI boundary (PyO3)
//!
//! Minimal Python-facing surface over the fee engine, for host presentation
//! layers that embed the core rather than link it natively.

pub mod quoter;
