//! Attribute resolution for the app to be created.
//!
//! The rules, in order:
//!
//! 1. Base attributes come from the source app; an explicit region override
//!    wins over the source region.
//! 2. An owning organization carries the source app's space name forward and
//!    sets the organization attribute.
//! 3. An explicitly requested space supersedes all of the above: its name
//!    replaces any carried-forward space, its owning organization replaces
//!    the app's (the API rejects an organization/space mismatch), and the
//!    region is cleared so the space's own default region applies.

use crate::platform::models::{App, NewAppRequest, Organization, Space};

/// Compute the attribute set for the new app from the already-resolved
/// context. `organization` is the source app's owning organization, if any;
/// `space` is the explicitly requested destination space, already resolved.
#[must_use]
pub fn resolve(
    source: &App,
    name: &str,
    region: Option<&str>,
    organization: Option<&Organization>,
    space: Option<&Space>,
) -> NewAppRequest {
    let mut request = NewAppRequest {
        name: name.to_string(),
        region: Some(region.unwrap_or(&source.region.name).to_string()),
        stack: source.stack.name.clone(),
        tier: source.tier.clone(),
        organization: None,
        space: None,
    };

    if let Some(organization) = organization {
        // space is only a valid attribute for organization apps
        if let Some(space) = &source.space {
            request.space = Some(space.name.clone());
        }
        request.organization = Some(organization.name.clone());
    }

    if let Some(space) = space {
        request.space = Some(space.name.clone());
        request.organization = Some(space.organization.name.clone());
        // A space implies its own default region; a conflicting region is
        // rejected by the API.
        request.region = None;
    }

    request
}
