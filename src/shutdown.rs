//! Signal handling for graceful shutdown.

use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Returns a token that is cancelled on Ctrl+C (and SIGTERM on Unix).
pub fn shutdown_on_signal() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();

    tokio::spawn(async move {
        if let Err(e) = wait_for_signal().await {
            error!("Failed to install shutdown signal handler: {e}");
            return;
        }
        info!("Received shutdown signal");
        trigger.cancel();
    });

    token
}

#[cfg(unix)]
async fn wait_for_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result,
        _ = terminate.recv() => Ok(()),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}
