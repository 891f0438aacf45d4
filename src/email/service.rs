use crate::config::SmtpConfig;
use crate::email::types::OutgoingEmail;
use anyhow::Result;
use async_trait::async_trait;
use lettre::{
  message::{header::ContentType, Attachment, MultiPart, SinglePart},
  transport::smtp::{
    authentication::Credentials,
    client::{Tls, TlsParameters},
  },
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use std::time::Duration;

/// Every upload is relayed under this name, whatever the caller named it.
pub const ATTACHMENT_FILENAME: &str = "qr_code.png";

/// The original deployment had no timeout at all, so a hung provider stalled
/// the request forever. 30s bounds that.
const SMTP_TIMEOUT: Duration = Duration::from_secs(30);

#[async_trait]
pub trait Mailer: Send + Sync {
  /// Submits one message. Returns the transport's acceptance response on
  /// success, for logging.
  async fn send(&self, email: &OutgoingEmail) -> Result<String>;
}

pub struct SmtpMailer {
  config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
  pub fn new(config: SmtpConfig) -> Result<Self> {
    let creds = Credentials::new(config.username.clone(), config.password.clone());

    let transporter = if config.host == "localhost" || config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
        .credentials(creds)
        .port(config.port)
        .timeout(Some(SMTP_TIMEOUT))
        .build()
    } else {
      let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        .credentials(creds)
        .port(config.port)
        .timeout(Some(SMTP_TIMEOUT));

      if config.accept_invalid_certs {
        let tls = TlsParameters::builder(config.host.clone())
          .dangerous_accept_invalid_certs(true)
          .build()?;
        builder = builder.tls(Tls::Required(tls));
      }

      builder.build()
    };

    Ok(SmtpMailer { config, transporter })
  }

  fn build_message(&self, email: &OutgoingEmail) -> Result<Message> {
    // The uploaded bytes go out verbatim. The content type is assumed, never
    // sniffed.
    let attachment = Attachment::new(ATTACHMENT_FILENAME.to_string())
      .body(email.attachment.clone(), ContentType::parse("image/png")?);

    let message = Message::builder()
      .from(self.config.from_email.parse()?)
      .to(email.to.parse()?)
      .subject(&email.subject)
      .multipart(
        MultiPart::mixed()
          .singlepart(SinglePart::plain(email.text.clone()))
          .singlepart(attachment),
      )?;

    Ok(message)
  }
}

#[async_trait]
impl Mailer for SmtpMailer {
  async fn send(&self, email: &OutgoingEmail) -> Result<String> {
    let message = self.build_message(email)?;
    let response = self.transporter.send(message).await?;

    Ok(format!(
      "{} {}",
      response.code(),
      response.message().collect::<Vec<&str>>().join(" ")
    ))
  }
}
