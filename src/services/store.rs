//! # Document Store Handle
//!
//! Long-lived handle to the remote document store, built once at startup
//! from the loaded credential. The driver connects lazily, so [`connect`]
//! only validates the connection string and builds the client; the actual
//! network handshake happens in [`ping`].
//!
//! [`connect`]: DocStore::connect
//! [`ping`]: DocStore::ping

use mongodb::{Client, Database, bson::doc, options::ClientOptions};
use secrecy::ExposeSecret;
use tracing::info;

use crate::error::ServiceInitError;
use crate::models::ServiceCredential;
use crate::utils::constant::SERVER_SELECTION_TIMEOUT;

/// Authenticated connection context to the remote document store.
#[derive(Debug)]
pub struct DocStore {
    client: Client,
    db: Database,
    app_id: String,
}

impl DocStore {
    /// Builds the client from a loaded credential.
    ///
    /// A `database_override` from configuration takes precedence over the
    /// database named in the credential. A default server selection timeout
    /// is applied unless the connection string sets its own.
    pub async fn connect(
        credential: &ServiceCredential,
        database_override: Option<&str>,
    ) -> Result<Self, ServiceInitError> {
        let options = client_options_for(credential).await?;
        let client = Client::with_options(options).map_err(ServiceInitError::Client)?;

        let database = database_override.unwrap_or(&credential.database);
        let db = client.database(database);

        info!(app_id = %credential.app_id, database, "Document store client built");

        Ok(Self {
            client,
            db,
            app_id: credential.app_id.clone(),
        })
    }

    /// Performs the one outbound handshake that confirms the credential is
    /// accepted and the endpoint is reachable.
    pub async fn ping(&self) -> Result<(), ServiceInitError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(ServiceInitError::Handshake)?;
        Ok(())
    }

    /// Identity the handle is bound to.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Name of the selected database.
    pub fn database_name(&self) -> &str {
        self.db.name()
    }
}

/// Parses the credential's connection string into client options. The driver
/// `app_name` is always the credential's bound identity, even when the URI
/// carries its own `appName`; the handle reports exactly one identity to the
/// remote service.
async fn client_options_for(
    credential: &ServiceCredential,
) -> Result<ClientOptions, ServiceInitError> {
    let mut options = ClientOptions::parse(credential.uri.expose_secret())
        .await
        .map_err(ServiceInitError::InvalidUri)?;
    options
        .server_selection_timeout
        .get_or_insert(SERVER_SELECTION_TIMEOUT);
    options.app_name = Some(credential.app_id.clone());
    Ok(options)
}
