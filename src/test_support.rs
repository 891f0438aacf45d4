use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use tower::ServiceExt;

use crate::{
  app::create_app,
  email::{Mailer, OutgoingEmail},
  state::SharedAppState,
};

pub const BOUNDARY: &str = "test-boundary";

/// In-memory stand-in for the SMTP transport. Records every submission so
/// tests can assert on what would have been sent.
pub struct FakeMailer {
  sent: Mutex<Vec<OutgoingEmail>>,
  fail_with: Option<String>,
}

impl FakeMailer {
  pub fn accepting() -> Arc<Self> {
    Arc::new(FakeMailer {
      sent: Mutex::new(Vec::new()),
      fail_with: None,
    })
  }

  pub fn rejecting(message: &str) -> Arc<Self> {
    Arc::new(FakeMailer {
      sent: Mutex::new(Vec::new()),
      fail_with: Some(message.to_string()),
    })
  }

  pub fn sent_emails(&self) -> Vec<OutgoingEmail> {
    self.sent.lock().expect("lock sent emails").clone()
  }
}

#[async_trait]
impl Mailer for FakeMailer {
  async fn send(&self, email: &OutgoingEmail) -> Result<String> {
    if let Some(message) = &self.fail_with {
      return Err(anyhow!("{}", message));
    }
    self.sent.lock().expect("lock sent emails").push(email.clone());
    Ok("250 2.0.0 OK".to_string())
  }
}

pub fn app_with_mailer(mailer: Arc<FakeMailer>) -> Router {
  create_app(SharedAppState::new(mailer))
}

pub fn multipart_body(text_fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
  let mut body = Vec::new();

  for (name, value) in text_fields {
    body.extend_from_slice(
      format!(
        "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
        BOUNDARY, name, value
      )
      .as_bytes(),
    );
  }

  if let Some((name, bytes)) = file {
    body.extend_from_slice(
      format!(
        "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"upload.png\"\r\nContent-Type: application/octet-stream\r\n\r\n",
        BOUNDARY, name
      )
      .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(b"\r\n");
  }

  body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
  body
}

pub async fn post_multipart(app: Router, uri: &str, body: Vec<u8>) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", format!("multipart/form-data; boundary={}", BOUNDARY))
    .body(Body::from(body))
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("GET")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
