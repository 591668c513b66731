use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    Command::new("forklift")
        .about("Fork a hosted application: configuration, latest slug and buildpacks")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("from")
                .help("Name of the app to fork")
                .value_name("FROM")
                .required(true),
        )
        .arg(
            Arg::new("to")
                .help("Name of the app to create")
                .value_name("NEWNAME")
                .required(true),
        )
        .arg(
            Arg::new("region")
                .short('r')
                .long("region")
                .help("Region for the new app (defaults to the source app's region)")
                .value_name("REGION"),
        )
        .arg(
            Arg::new("space")
                .short('s')
                .long("space")
                .help("Space to create the new app in (implies the space's org and region)")
                .value_name("SPACE"),
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .help("Platform API base URL, example: https://api.example.com")
                .env("FORKLIFT_API_URL")
                .required(true),
        )
        .arg(
            Arg::new("api-token")
                .long("api-token")
                .help("Platform API bearer token")
                .env("FORKLIFT_API_TOKEN")
                .required(true),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("FORKLIFT_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
}
