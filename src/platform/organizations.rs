use crate::platform::{
    models::{App, Organization},
    ApiError, ApiTransport,
};
use reqwest::Method;
use tracing::instrument;

/// Fetch the organization owning `app`.
///
/// A missing organization is a valid state (personal app) and resolves to
/// `None` rather than an error.
///
/// # Errors
/// Failures other than not-found propagate unchanged.
#[instrument(skip(api, app), fields(app = %app.name))]
pub async fn for_app(api: &ApiTransport, app: &App) -> Result<Option<Organization>, ApiError> {
    match api
        .request(Method::GET, &format!("/organizations/{}", app.owner.id), None)
        .await
    {
        Ok(body) => Ok(Some(serde_json::from_value(body)?)),
        Err(ApiError::NotFound) => Ok(None),
        Err(err) => Err(err),
    }
}
