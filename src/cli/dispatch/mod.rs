use crate::cli::{actions::Action, globals::GlobalArgs};
use anyhow::{Context, Result};
use secrecy::SecretString;

/// Turn parsed matches into an action plus the global connection arguments.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<(Action, GlobalArgs)> {
    let from = matches
        .get_one::<String>("from")
        .cloned()
        .context("missing required argument: <FROM>")?;

    let to = matches
        .get_one::<String>("to")
        .cloned()
        .context("missing required argument: <NEWNAME>")?;

    let region = matches.get_one::<String>("region").cloned();

    // An empty --space means "no space requested"
    let space = matches
        .get_one::<String>("space")
        .cloned()
        .filter(|name| !name.is_empty());

    let api_url = matches
        .get_one::<String>("api-url")
        .cloned()
        .context("missing required argument: --api-url")?;

    let api_token = matches
        .get_one::<String>("api-token")
        .cloned()
        .context("missing required argument: --api-token")?;

    let mut globals = GlobalArgs::new(api_url);
    globals.set_token(SecretString::from(api_token));

    Ok((
        Action::Fork {
            from,
            to,
            region,
            space,
        },
        globals,
    ))
}
