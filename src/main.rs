use std::sync::Arc;

use tokio::signal;

use dotenvy::dotenv;

use qr_mail_relay::app::create_app;
use qr_mail_relay::config::{listen_port, SmtpConfig};
use qr_mail_relay::email::SmtpMailer;
use qr_mail_relay::state::SharedAppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt::init();

  let smtp_config = SmtpConfig::from_env();
  let mailer = SmtpMailer::new(smtp_config)?;
  let state = SharedAppState::new(Arc::new(mailer));
  let app = create_app(state);

  let port = listen_port();
  let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

  println!("Server running on port {}", port);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  println!("Received termination signal, shutting down gracefully...");
}
