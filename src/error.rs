use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};

/// Plain-text error response. The endpoint contract is string bodies
/// ("Missing required fields: ...", "Failed to send email: ..."), so no
/// JSON envelope here.
#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    (self.status_code, self.message).into_response()
  }
}

impl From<axum::extract::multipart::MultipartError> for AppError {
  fn from(error: axum::extract::multipart::MultipartError) -> Self {
    tracing::error!("Multipart error: {:?}", error);
    AppError::bad_request(format!("Invalid multipart form data: {}", error))
  }
}
