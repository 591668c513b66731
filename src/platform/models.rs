//! Typed views of the platform API resources.
//!
//! Each remote call returns a fresh snapshot; nothing here is mutated in
//! place, and instances live only for the duration of a single fork run.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct App {
    pub name: String,
    pub region: Region,
    pub stack: Stack,
    pub tier: String,
    pub owner: Owner,
    #[serde(default)]
    pub space: Option<SpaceRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Region {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stack {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpaceRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Organization {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Space {
    pub name: String,
    pub organization: Organization,
}

/// A deployment event. The platform lists releases newest-first when asked
/// for descending version order; `slug` is absent for config-only releases.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub version: u64,
    #[serde(default)]
    pub slug: Option<SlugRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlugRef {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Slug {
    pub id: String,
    #[serde(default)]
    pub commit: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildpackInstallation {
    pub buildpack: BuildpackRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildpackRef {
    pub url: String,
}

/// Attribute set for the app to be created. Built fresh per fork run and
/// submitted as the create request body; optional fields are dropped from
/// the wire body entirely when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewAppRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub stack: String,
    pub tier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<String>,
}

impl NewAppRequest {
    /// Collection endpoint the create request must be submitted to.
    /// Organization apps go to the organization-scoped collection.
    #[must_use]
    pub fn collection_path(&self) -> &'static str {
        if self.organization.is_some() {
            "/organizations/apps"
        } else {
            "/apps"
        }
    }
}
