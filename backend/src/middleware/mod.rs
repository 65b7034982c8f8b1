//! Request middleware.
//!
//! Purpose: request lifecycle concerns such as trace-identifier propagation.

pub mod trace;

pub use trace::Trace;
