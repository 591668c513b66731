//! # Forklift
//!
//! `forklift` forks a hosted application into a new one through the platform
//! HTTP API: it looks up the source app, resolves its organization and
//! (optionally) a destination space, creates the new app with the inherited
//! attributes, copies the most recent deployable slug, and replicates the
//! buildpack configuration.
//!
//! ## Layers
//!
//! - [`platform`] — typed client for the platform API. A single
//!   [`platform::ApiTransport`] executes JSON requests and classifies
//!   failures once into [`platform::ApiError`]; per-resource modules
//!   deserialize into typed models.
//! - [`fork`] — the fork procedure: a strictly sequential pipeline with one
//!   awaited remote call at a time, the attribute-resolution rules for the
//!   new app, and the user-facing progress text.
//! - [`cli`] — clap command surface, dispatch, and action execution.

pub mod cli;
pub mod fork;
pub mod platform;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
