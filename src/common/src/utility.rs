use tokio::sync::broadcast;
use tracing::{error, info, Level};

/// Init logging to stderr, ignore error if already set.
/// Stdout is reserved for the game itself.
pub fn init_logging(max_level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_line_number(true)
        .with_file(true)
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Broadcast channel that fires once on Ctrl-C.
pub fn create_shutdown_channel() -> broadcast::Receiver<()> {
    let (shutdown_sender, shutdown_receiver) = broadcast::channel::<()>(1);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        info!("signal received, stopping match");
        // No receivers left means the match already finished
        let _ = shutdown_sender.send(());
    });
    shutdown_receiver
}
