use anyhow::Result;
use forklift::cli::{actions, actions::Action, start};

#[tokio::main]
async fn main() -> Result<()> {
    let (action, globals) = start()?;

    match action {
        Action::Fork { .. } => actions::fork::handle(action, &globals).await?,
    }

    Ok(())
}
