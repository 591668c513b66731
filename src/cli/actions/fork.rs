use crate::cli::{actions::Action, globals::GlobalArgs};
use crate::fork::{self, ForkRequest};
use crate::platform::ApiTransport;
use anyhow::Result;

/// Handle the fork action
///
/// # Errors
/// Returns an error for non-user-facing failures; user errors are printed
/// and terminate the process with a non-zero status.
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<()> {
    match action {
        Action::Fork {
            from,
            to,
            region,
            space,
        } => {
            let api = ApiTransport::new(
                crate::APP_USER_AGENT,
                &globals.api_url,
                globals.api_token.clone(),
            )?;

            let request = ForkRequest {
                from,
                to,
                region,
                space,
            };

            match fork::run(&api, &request).await {
                Ok(_app) => Ok(()),
                Err(err) if err.is_user_error() => {
                    eprintln!("{err}");
                    std::process::exit(1);
                }
                Err(err) => Err(err.into()),
            }
        }
    }
}
