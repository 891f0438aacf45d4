/// One outgoing message. Built per request, handed to the transport,
/// dropped after the response is sent. Nothing is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
  pub to: String,
  pub subject: String,
  pub text: String,
  pub attachment: Vec<u8>,
}

impl OutgoingEmail {
  pub fn new(to: String, subject: String, text: String, attachment: Vec<u8>) -> Self {
    OutgoingEmail {
      to,
      subject,
      text,
      attachment,
    }
  }
}
