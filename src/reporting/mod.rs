//! Run reporting and diagnostics

pub mod logging;
