use std::process::ExitCode;

use common::utility::init_logging;
use game::{config::GameConfig, entrypoint};
use tracing::{error, info, Level};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match GameConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_logging(Level::WARN);
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logging(config.log_level);

    match entrypoint::play(config).await {
        Ok(summary) => {
            info!("Finished: {:?}", summary.state);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Match aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}
