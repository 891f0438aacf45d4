use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
  pub from_email: String,
  pub accept_invalid_certs: bool,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      username: "".to_string(),
      password: "".to_string(),
      from_email: "".to_string(),
      accept_invalid_certs: true,
    }
  }
}

impl SmtpConfig {
  /// Reads SMTP settings from the process environment.
  ///
  /// Missing credentials are not a startup error: the service comes up and
  /// the gap surfaces as a failed submission on the first request. A warning
  /// is logged so operators notice before that happens.
  pub fn from_env() -> Self {
    let username = env::var("EMAIL_USER").unwrap_or_default();
    let password = env::var("EMAIL_PASS").unwrap_or_default();

    if username.is_empty() || password.is_empty() {
      tracing::warn!("EMAIL_USER or EMAIL_PASS is not set; email submission will fail");
    }

    SmtpConfig {
      host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
      port: env::var("SMTP_PORT")
        .unwrap_or_else(|_| "587".to_string())
        .parse()
        .unwrap_or(587),
      from_email: username.clone(),
      username,
      password,
      accept_invalid_certs: env::var("SMTP_ACCEPT_INVALID_CERTS")
        .map(|v| v != "false" && v != "0")
        .unwrap_or(true),
    }
  }
}

pub fn listen_port() -> u16 {
  env::var("PORT")
    .unwrap_or_else(|_| "3000".to_string())
    .parse()
    .unwrap_or(3000)
}
