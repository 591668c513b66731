//! The fork procedure.
//!
//! A single linear pipeline with one awaited remote call at a time:
//! lookup → organization/space resolution → create → release location →
//! slug copy → buildpack replication. Two fatal short-circuits (source app
//! not found, destination name taken) and one domain-error exit (no
//! deployable release); no retries, no rollback.

pub mod error;
pub mod new_app;

pub use self::error::ForkError;

use crate::platform::{
    apps, buildpacks,
    models::App,
    organizations, releases, spaces, ApiError, ApiTransport,
};
use std::io::{self, Write};
use tracing::instrument;

/// 422 message the platform returns for a duplicate app name.
const NAME_TAKEN_MESSAGE: &str = "Name is already taken";

/// Inputs for a single fork run.
#[derive(Debug, Clone)]
pub struct ForkRequest {
    /// Source app name.
    pub from: String,
    /// Destination app name.
    pub to: String,
    /// Optional region override for the destination app.
    pub region: Option<String>,
    /// Optional destination space name.
    pub space: Option<String>,
}

/// Run the fork pipeline. Progress is streamed to stdout as each step
/// completes, so partial progress stays visible when a later step fails.
///
/// # Errors
/// Returns [`ForkError::AppNotFound`], [`ForkError::NameTaken`],
/// [`ForkError::SpaceNotFound`] or [`ForkError::NoRelease`] for the
/// user-reportable exits; any other API failure passes through unchanged.
#[instrument(skip(api))]
pub async fn run(api: &ApiTransport, request: &ForkRequest) -> Result<App, ForkError> {
    let source = apps::get(api, &request.from).await.map_err(|err| match err {
        ApiError::NotFound => ForkError::AppNotFound {
            name: request.from.clone(),
        },
        other => ForkError::Api(other),
    })?;

    progress(&format!("Forking {}... ", source.name));

    let organization = organizations::for_app(api, &source).await?;

    let requested_space = request.space.as_deref().filter(|name| !name.is_empty());
    let space = match requested_space {
        Some(name) => Some(spaces::get(api, name).await?.ok_or_else(|| {
            ForkError::SpaceNotFound {
                name: name.to_string(),
            }
        })?),
        None => None,
    };

    let attributes = new_app::resolve(
        &source,
        &request.to,
        request.region.as_deref(),
        organization.as_ref(),
        space.as_ref(),
    );

    let new_app = apps::create(api, &attributes).await.map_err(|err| match err {
        ApiError::Unprocessable { ref message } if message == NAME_TAKEN_MESSAGE => {
            ForkError::NameTaken {
                name: attributes.name.clone(),
            }
        }
        other => ForkError::Api(other),
    })?;

    let mut done = format!("done. Forked to {}", new_app.name);
    if let Some(organization) = &attributes.organization {
        done.push_str(&format!(" in org {organization}"));
    }
    if let Some(space) = &attributes.space {
        done.push_str(&format!(" in space {space}"));
    }
    println!("{done}");

    let release = releases::last_with_slug(api, &source).await?;
    let slug_ref = release
        .and_then(|release| release.slug)
        .ok_or_else(|| ForkError::NoRelease {
            name: source.name.clone(),
        })?;
    let slug = releases::slug(api, &source, &slug_ref.id).await?;

    match &slug.commit {
        Some(commit) => progress(&format!(
            "Deploying {} to {}... ",
            short_commit(commit),
            new_app.name
        )),
        None => progress(&format!("Deploying to {}... ", new_app.name)),
    }

    releases::create(api, &new_app, &slug.id, &format!("Forked from {}", source.name)).await?;
    println!("done");

    buildpacks::replicate(api, &source, &new_app).await?;

    Ok(new_app)
}

/// Write a progress fragment and flush, so the text is visible before the
/// next remote call suspends (and before the process exits on failure).
fn progress(text: &str) {
    print!("{text}");
    let _ = io::stdout().flush();
}

fn short_commit(commit: &str) -> &str {
    commit.get(..7).unwrap_or(commit)
}
