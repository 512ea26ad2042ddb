//! Email request

/// A single email to be delivered, unpacked from one inbound message.
///
/// Constructed by a [`RequestParser`](crate::domain::dispatch::parser::RequestParser)
/// and read-only afterwards; never persisted or reused across messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailRequest {
    /// The recipient's email address
    pub recipient: String,

    /// The subject of the email
    pub subject: String,

    /// The HTML body of the email
    pub html_body: String,

    /// The plain text body, for clients that do not render HTML
    pub plain_text: String,
}

impl EmailRequest {
    /// Whether this request carries enough information to attempt delivery.
    ///
    /// Only non-emptiness of the recipient is checked; address syntax is
    /// left to the sending transport.
    pub fn is_sendable(&self) -> bool {
        !self.recipient.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_with_recipient_is_sendable() {
        let request = EmailRequest {
            recipient: "test@example.com".to_string(),
            ..Default::default()
        };

        assert!(request.is_sendable());
    }

    #[test]
    fn test_request_without_recipient_is_not_sendable() {
        let request = EmailRequest::default();

        assert!(!request.is_sendable());
    }

    #[test]
    fn test_recipient_syntax_is_not_validated() {
        let request = EmailRequest {
            recipient: "not-an-email".to_string(),
            ..Default::default()
        };

        assert!(request.is_sendable());
    }
}
