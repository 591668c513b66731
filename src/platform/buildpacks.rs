use crate::platform::{
    models::{App, BuildpackInstallation},
    ApiError, ApiTransport,
};
use reqwest::Method;
use serde_json::{json, Value};
use tracing::instrument;

/// Copy the source app's buildpack list onto the destination app.
///
/// An empty source list is a no-op; otherwise the destination's installations
/// are replaced with the same ordered list of buildpack URLs.
///
/// # Errors
/// Transport and decode failures propagate unchanged.
#[instrument(skip(api, old_app, new_app), fields(from = %old_app.name, to = %new_app.name))]
pub async fn replicate(api: &ApiTransport, old_app: &App, new_app: &App) -> Result<(), ApiError> {
    let body = api
        .request(
            Method::GET,
            &format!("/apps/{}/buildpack-installations", old_app.name),
            None,
        )
        .await?;

    let installations: Vec<BuildpackInstallation> = serde_json::from_value(body)?;

    if installations.is_empty() {
        return Ok(());
    }

    let updates: Vec<Value> = installations
        .iter()
        .map(|installation| json!({"buildpack": installation.buildpack.url}))
        .collect();

    api.request(
        Method::PUT,
        &format!("/apps/{}/buildpack-installations", new_app.name),
        Some(&json!({"updates": updates})),
    )
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use secrecy::SecretString;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn transport(server: &MockServer) -> Result<ApiTransport> {
        Ok(ApiTransport::new(
            "forklift-test/0.1",
            &server.uri(),
            SecretString::from("t0ken".to_string()),
        )?)
    }

    fn app(name: &str) -> Result<App> {
        Ok(serde_json::from_value(json!({
            "name": name,
            "region": {"name": "us"},
            "stack": {"name": "cedar"},
            "tier": "production",
            "owner": {"id": "owner-1"}
        }))?)
    }

    #[tokio::test]
    async fn replicate_is_a_noop_for_empty_source_list() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/apps/sushi/buildpack-installations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/apps/sushi-copy/buildpack-installations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let api = transport(&server)?;
        replicate(&api, &app("sushi")?, &app("sushi-copy")?).await?;
        Ok(())
    }

    #[tokio::test]
    async fn replicate_puts_urls_in_original_order() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/apps/sushi/buildpack-installations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"buildpack": {"url": "https://buildpacks.example.com/nodejs"}},
                {"buildpack": {"url": "https://buildpacks.example.com/ruby"}}
            ])))
            .mount(&server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/apps/sushi-copy/buildpack-installations"))
            .and(body_json(json!({
                "updates": [
                    {"buildpack": "https://buildpacks.example.com/nodejs"},
                    {"buildpack": "https://buildpacks.example.com/ruby"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let api = transport(&server)?;
        replicate(&api, &app("sushi")?, &app("sushi-copy")?).await?;
        Ok(())
    }
}
