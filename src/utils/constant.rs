//! # Application Constants

use std::time::Duration;

/// Fixed acknowledgment returned by `GET /` when the store handle is ready.
pub const WELCOME_MESSAGE: &str = "Your API is officially talking to Firebase!";

/// Default listen address when `BIND_ADDR` is not set.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Server selection timeout applied when the connection string does not
/// specify one. Without it the driver waits 30 seconds before reporting an
/// unreachable endpoint.
pub const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);
