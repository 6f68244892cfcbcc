//! # HTTP Request Handlers
//!
//! - **Home** (`home`) - The single exposed route

mod home;

pub use home::*;
