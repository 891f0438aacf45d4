//! Outbound email relay.
//!
//! Wraps lettre's async SMTP transport behind a small `Mailer` trait so the
//! HTTP layer can be tested against a fake transport.

mod service;
mod types;

pub use service::{Mailer, SmtpMailer, ATTACHMENT_FILENAME};
pub use types::OutgoingEmail;
