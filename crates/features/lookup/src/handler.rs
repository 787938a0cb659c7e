use crate::dispatcher::dispatch;
use crate::error::LookupError;
use crate::formatter::format;
use crate::normalizer::normalize;
use crate::store::WordStore;
use serde_json::Value;
use tracing::{error, info, instrument, warn};
use whub_domain::response::{HandlerResponse, ResultEnvelope};

/// Normalizes, dispatches and formats one request.
///
/// # Errors
/// * [`LookupError::InvalidQuery`] before any store access.
/// * [`LookupError::StorageUnavailable`] when the store fails.
pub async fn lookup<S: WordStore>(
    store: &S,
    payload: &Value,
) -> Result<ResultEnvelope, LookupError> {
    let query = normalize(payload)?;
    let items = dispatch(store, &query).await?;
    Ok(format(items, &query))
}

/// Answers one request with a complete `{statusCode, body, headers}` response.
///
/// Validation failures become `400` with their message; every other failure
/// becomes a generic `500` and is only detailed in the logs.
#[instrument(skip_all)]
pub async fn handle<S: WordStore>(store: &S, payload: &Value) -> HandlerResponse {
    info!(%payload, "Function called with args");

    match lookup(store, payload).await {
        Ok(envelope) => {
            let (query_type, total) = (envelope.query.query_type, envelope.result.total);
            info!(%query_type, total, "Lookup done");
            HandlerResponse::ok(envelope)
        }
        Err(LookupError::InvalidQuery { message, .. }) => {
            warn!(%message, "Rejected lookup");
            HandlerResponse::bad_request(message)
        }
        Err(e) => {
            error!(error = %e, "Lookup failed");
            HandlerResponse::unexpected()
        }
    }
}
