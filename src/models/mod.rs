mod credential;
mod state;

pub use credential::ServiceCredential;
pub use state::{AppState, StoreState};
