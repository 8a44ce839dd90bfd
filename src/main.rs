use clap::Parser;
use log::{error, info};
use std::process::ExitCode;

use voc2list::{process_dataset, Args};

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match args.to_list_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if !config.pascal_root.exists() {
        error!(
            "The specified pascal_root does not exist: {}",
            config.pascal_root.display()
        );
        return ExitCode::FAILURE;
    }

    info!("Starting list generation...");
    match process_dataset(&config) {
        Ok(summaries) => {
            info!("Generated {} list files.", summaries.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to create list files: {}", e);
            ExitCode::FAILURE
        }
    }
}
