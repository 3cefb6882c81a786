use std::net::SocketAddr;

use tokio::net::TcpListener;
use trivia_core::errors::{ExError, ExErrorKind};

use crate::routes::build_router;
use crate::state::AppState;

/// Bind `addr` and serve until Ctrl-C
///
/// # Errors
///
/// * `Io` - the address cannot be bound or the server fails
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<(), ExError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| io_error("bind", e))?;
    let local = listener.local_addr().map_err(|e| io_error("bind", e))?;
    tracing::info!(%local, "trivia api listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| io_error("serve", e))?;

    tracing::info!("trivia api stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "could not install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}

fn io_error(op: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(op)
        .with_message(err.to_string())
}
