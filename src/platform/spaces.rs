use crate::platform::{models::Space, ApiError, ApiTransport};
use reqwest::Method;
use tracing::instrument;

/// Fetch a space by name, including the organization that owns it.
///
/// Not-found resolves to `None`, same contract as organization lookup.
///
/// # Errors
/// Failures other than not-found propagate unchanged.
#[instrument(skip(api))]
pub async fn get(api: &ApiTransport, name: &str) -> Result<Option<Space>, ApiError> {
    match api
        .request(Method::GET, &format!("/spaces/{name}"), None)
        .await
    {
        Ok(body) => Ok(Some(serde_json::from_value(body)?)),
        Err(ApiError::NotFound) => Ok(None),
        Err(err) => Err(err),
    }
}
