//! # Services
//!
//! - **Store** (`store`) - Document store handle construction and handshake

pub mod store;
