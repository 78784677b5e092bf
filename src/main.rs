use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::process::ExitCode;
use vlsm_planner::cli::{run, Cli};
use vlsm_planner::config::Config;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config.log_config);
    log::info!("#Start main()");

    match run(cli, &config) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {e}", "Error:".red());
            ExitCode::FAILURE
        }
    }
}

/// Initialise log4rs from `path`, or log warnings to stderr without it.
fn init_logging(path: &str) {
    if log4rs::init_file(path, Default::default()).is_ok() {
        return;
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();
    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn));

    match config {
        Ok(config) => {
            if log4rs::init_config(config).is_ok() {
                log::debug!("log config {path} not loaded, using stderr");
            }
        }
        Err(e) => eprintln!("Error building log config: {e}"),
    }
}
