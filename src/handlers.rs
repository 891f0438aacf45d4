use axum::extract::{
  multipart::{Field, Multipart},
  State,
};

use crate::{
  email::OutgoingEmail,
  state::{AppState, SharedAppState},
  AppError,
};

pub async fn health_handler() -> &'static str {
  "Server is running"
}

/// Relays one multipart form submission as an email.
///
/// Expects text parts `to`, `subject`, `text` and one file part `image`.
/// Field presence is validated before file presence, so a request missing
/// both reports the field error.
pub async fn send_email_handler(
  State(state): State<SharedAppState>,
  mut multipart: Multipart,
) -> Result<String, AppError> {
  let mut to: Option<String> = None;
  let mut subject: Option<String> = None;
  let mut text: Option<String> = None;
  let mut attachment: Option<Vec<u8>> = None;

  while let Some(field) = multipart.next_field().await? {
    let name = field.name().unwrap_or_default().to_string();
    match name.as_str() {
      "to" => read_text_field(&mut to, &name, field).await?,
      "subject" => read_text_field(&mut subject, &name, field).await?,
      "text" => read_text_field(&mut text, &name, field).await?,
      "image" => {
        if attachment.is_some() {
          return Err(AppError::bad_request("Duplicate field: image"));
        }
        attachment = Some(field.bytes().await?.to_vec());
      }
      // Unknown parts are ignored.
      _ => {}
    }
  }

  let (to, subject, text) = match (to, subject, text) {
    (Some(to), Some(subject), Some(text))
      if !to.is_empty() && !subject.is_empty() && !text.is_empty() =>
    {
      (to, subject, text)
    }
    _ => return Err(AppError::bad_request("Missing required fields: to, subject, or text")),
  };

  let Some(attachment) = attachment else {
    return Err(AppError::bad_request("No file uploaded"));
  };

  let email = OutgoingEmail::new(to, subject, text, attachment);
  match state.send_email(email).await {
    Ok(accepted) => {
      tracing::info!("Email sent: {}", accepted);
      Ok("Email sent successfully".to_string())
    }
    Err(error) => {
      tracing::error!("Error sending email: {:#}", error);
      Err(AppError::internal_server_error(format!("Failed to send email: {}", error)))
    }
  }
}

/// A repeated text field is the multipart analogue of a field supplied as an
/// array; it is rejected rather than silently coerced.
async fn read_text_field(slot: &mut Option<String>, name: &str, field: Field<'_>) -> Result<(), AppError> {
  if slot.is_some() {
    return Err(AppError::bad_request(format!("Duplicate field: {}", name)));
  }
  *slot = Some(field.text().await?);
  Ok(())
}
