use crate::platform::{
    models::{App, NewAppRequest},
    ApiError, ApiTransport,
};
use reqwest::Method;
use tracing::instrument;

/// Fetch an app by name.
///
/// # Errors
/// Returns [`ApiError::NotFound`] when the app does not exist; other failures
/// propagate unchanged.
#[instrument(skip(api))]
pub async fn get(api: &ApiTransport, name: &str) -> Result<App, ApiError> {
    let body = api.request(Method::GET, &format!("/apps/{name}"), None).await?;

    Ok(serde_json::from_value(body)?)
}

/// Create an app from the resolved attribute set.
///
/// Organization apps are submitted to the organization-scoped collection,
/// personal apps to `/apps`.
///
/// # Errors
/// Returns [`ApiError::Unprocessable`] when the API rejects the attributes
/// (e.g. the name is already taken); other failures propagate unchanged.
#[instrument(skip(api))]
pub async fn create(api: &ApiTransport, request: &NewAppRequest) -> Result<App, ApiError> {
    let body = serde_json::to_value(request)?;

    let response = api
        .request(Method::POST, request.collection_path(), Some(&body))
        .await?;

    Ok(serde_json::from_value(response)?)
}
