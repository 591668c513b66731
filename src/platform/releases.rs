use crate::platform::{
    models::{App, Release, Slug},
    ApiError, ApiTransport,
};
use reqwest::Method;
use serde_json::json;
use tracing::instrument;

/// Range header asking the platform for releases ordered newest-first.
const DESC_VERSION_RANGE: &str = "version ..; order=desc;";

/// Fetch the app's releases newest-first and select the most recent one that
/// carries a slug. Config-only releases are skipped, so the result is not
/// simply the newest release.
///
/// # Errors
/// Transport and decode failures propagate unchanged.
#[instrument(skip(api, app), fields(app = %app.name))]
pub async fn last_with_slug(api: &ApiTransport, app: &App) -> Result<Option<Release>, ApiError> {
    let body = api
        .request_with_headers(
            Method::GET,
            &format!("/apps/{}/releases", app.name),
            None,
            &[("Range", DESC_VERSION_RANGE)],
        )
        .await?;

    let releases: Vec<Release> = serde_json::from_value(body)?;

    Ok(releases.into_iter().find(|release| release.slug.is_some()))
}

/// Resolve the full slug record referenced by a release.
///
/// # Errors
/// Transport and decode failures propagate unchanged.
#[instrument(skip(api, app), fields(app = %app.name))]
pub async fn slug(api: &ApiTransport, app: &App, id: &str) -> Result<Slug, ApiError> {
    let body = api
        .request(Method::GET, &format!("/apps/{}/slugs/{id}", app.name), None)
        .await?;

    Ok(serde_json::from_value(body)?)
}

/// Create a release on `app` referencing an existing slug.
///
/// # Errors
/// Transport failures propagate unchanged.
#[instrument(skip(api, app), fields(app = %app.name))]
pub async fn create(
    api: &ApiTransport,
    app: &App,
    slug_id: &str,
    description: &str,
) -> Result<(), ApiError> {
    let body = json!({
        "slug": slug_id,
        "description": description
    });

    api.request(Method::POST, &format!("/apps/{}/releases", app.name), Some(&body))
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
    use wiremock::matchers::{body_json, header, method, path};
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

    fn sample_app() -> Result<App> {
        Ok(serde_json::from_value(json!({
            "name": "sushi",
            "region": {"name": "us"},
            "stack": {"name": "cedar"},
            "tier": "production",
            "owner": {"id": "owner-1"}
        }))?)
    }

    #[tokio::test]
    async fn last_with_slug_skips_slugless_releases() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/apps/sushi/releases"))
            .and(header("Range", DESC_VERSION_RANGE))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"version": 5},
                {"version": 4, "slug": {"id": "slug-2"}},
                {"version": 3, "slug": {"id": "slug-1"}}
            ])))
            .mount(&server)
            .await;

        let api = transport(&server)?;
        let release = last_with_slug(&api, &sample_app()?)
            .await?
            .expect("a slugged release exists");
        assert_eq!(release.version, 4);
        assert_eq!(release.slug.map(|s| s.id).as_deref(), Some("slug-2"));
        Ok(())
    }

    #[tokio::test]
    async fn last_with_slug_returns_none_when_nothing_deployable() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/apps/sushi/releases"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"version": 2},
                {"version": 1}
            ])))
            .mount(&server)
            .await;

        let api = transport(&server)?;
        let release = last_with_slug(&api, &sample_app()?).await?;
        assert!(release.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn slug_resolves_full_record() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/apps/sushi/slugs/slug-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "slug-2",
                "commit": "0123456789abcdef"
            })))
            .mount(&server)
            .await;

        let api = transport(&server)?;
        let slug = slug(&api, &sample_app()?, "slug-2").await?;
        assert_eq!(slug.id, "slug-2");
        assert_eq!(slug.commit.as_deref(), Some("0123456789abcdef"));
        Ok(())
    }

    #[tokio::test]
    async fn create_posts_slug_and_description() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/apps/sushi/releases"))
            .and(body_json(json!({
                "slug": "slug-2",
                "description": "Forked from wasabi"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"version": 1})))
            .mount(&server)
            .await;

        let api = transport(&server)?;
        create(&api, &sample_app()?, "slug-2", "Forked from wasabi").await?;
        Ok(())
    }
}
