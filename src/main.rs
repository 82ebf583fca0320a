use clap::{Arg, Command};
use log::LevelFilter;
use std::process;

use mailgrade::config::{Config, DEFAULT_CONFIG_PATH};
use mailgrade::server;
use mailgrade::EmailVerifier;

#[tokio::main]
async fn main() {
    let matches = Command::new("mailgrade")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Heuristic email-quality scoring service")
        .long_about(
            "Scores email addresses for lead-generation pipelines: syntax, \
             disposable providers, role-based mailboxes, domain typos, and \
             professional local-part structure, combined into a 0-100 score \
             and a deliverability verdict.",
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value(DEFAULT_CONFIG_PATH),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Generate a default configuration file")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("test-config")
                .long("test-config")
                .help("Validate configuration and print the effective settings")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .value_name("EMAIL")
                .help("Score a single address, print the JSON result, and exit")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(generate_path) = matches.get_one::<String>("generate-config") {
        if let Err(e) = Config::generate_default(generate_path) {
            eprintln!("Error generating configuration: {e}");
            process::exit(1);
        }
        println!("Default configuration written to {generate_path}");
        return;
    }

    if let Some(email) = matches.get_one::<String>("check") {
        let verifier = EmailVerifier::new();
        match verifier.verify(email) {
            Some(result) => match serde_json::to_string_pretty(&result) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Error serializing result: {e}");
                    process::exit(1);
                }
            },
            None => {
                eprintln!("Email is required");
                process::exit(1);
            }
        }
        return;
    }

    let config_path = matches.get_one::<String>("config").unwrap();
    let config = match Config::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            process::exit(1);
        }
    };

    if matches.get_flag("test-config") {
        println!("Configuration OK: listening on {}", config.listen_addr());
        return;
    }

    if let Err(e) = server::run(&config).await {
        log::error!("Server error: {e}");
        process::exit(1);
    }
}
