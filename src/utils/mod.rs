//! # Utility Modules
//!
//! - **Constants** (`constant`) - Application-wide configuration constants

pub mod constant;
