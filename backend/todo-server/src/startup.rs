use crate::error::Result as ServerErrorResult;

use todo_db::{ConnectionProvider, ensure_schema};

use log::{error, warn};

/// Run the schema initializer before serving.
///
/// A failure is logged and startup continues, so the server may come up
/// unable to serve until the store is reachable. With `strict` the failure
/// is returned instead.
pub async fn initialize_schema(provider: &ConnectionProvider, strict: bool) -> ServerErrorResult<()> {
    match ensure_schema(provider).await {
        Ok(()) => Ok(()),
        Err(e) if strict => {
            error!("Schema initialization failed: {}", e);
            Err(e.into())
        }
        Err(e) => {
            error!("Schema initialization failed: {}", e);
            warn!("Continuing startup without a verified schema");
            Ok(())
        }
    }
}
