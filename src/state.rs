use std::sync::Arc;

use anyhow::Result;

use crate::email::{Mailer, OutgoingEmail};

pub trait AppState: Clone + Send + Sync + 'static {
  fn send_email(&self, email: OutgoingEmail) -> impl std::future::Future<Output = Result<String>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub mailer: Arc<dyn Mailer>,
}

impl SharedAppState {
  pub fn new(mailer: Arc<dyn Mailer>) -> Self {
    Self { mailer }
  }
}

impl AppState for SharedAppState {
  async fn send_email(&self, email: OutgoingEmail) -> Result<String> {
    self.mailer.send(&email).await
  }
}
