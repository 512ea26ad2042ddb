//! JSON wire codec for inbound email requests

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::dispatch::{
    errors::ParseError, parser::RequestParser, EmailRequest, InboundMessage,
};

/// On-the-wire shape of an email request.
///
/// The producer is a .NET service bus publisher, so both camelCase and
/// PascalCase field names are accepted. Every field may be omitted; the
/// handler's sendability check catches a missing recipient.
#[derive(Debug, Deserialize)]
struct EmailRequestWire {
    #[serde(default, alias = "To")]
    to: String,

    #[serde(default, alias = "Subject")]
    subject: String,

    #[serde(default, rename = "htmlBody", alias = "HtmlBody")]
    html_body: String,

    #[serde(default, rename = "plainText", alias = "PlainText")]
    plain_text: String,
}

impl From<EmailRequestWire> for EmailRequest {
    fn from(wire: EmailRequestWire) -> Self {
        EmailRequest {
            recipient: wire.to,
            subject: wire.subject,
            html_body: wire.html_body,
            plain_text: wire.plain_text,
        }
    }
}

/// JSON implementation of [`RequestParser`].
///
/// An empty payload or a JSON `null` is the absent request; anything else
/// must decode as an [`EmailRequestWire`] document.
#[derive(Debug, Default, Clone)]
pub struct JsonRequestParser;

impl JsonRequestParser {
    /// Create a new JSON request parser
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RequestParser for JsonRequestParser {
    async fn parse(&self, message: &InboundMessage) -> Result<Option<EmailRequest>, ParseError> {
        if message.payload().is_empty() {
            return Ok(None);
        }

        let wire: Option<EmailRequestWire> = serde_json::from_slice(message.payload())
            .map_err(|err| ParseError::Malformed(err.to_string()))?;

        Ok(wire.map(EmailRequest::from))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    async fn parse(payload: &[u8]) -> Result<Option<EmailRequest>, ParseError> {
        JsonRequestParser::new()
            .parse(&InboundMessage::new(payload.to_vec()))
            .await
    }

    #[tokio::test]
    async fn test_parses_camel_case_payload() -> TestResult {
        let payload = br#"{
            "to": "test@example.com",
            "subject": "Welcome",
            "htmlBody": "<p>Hello</p>",
            "plainText": "Hello"
        }"#;

        let request = parse(payload).await?.unwrap();

        assert_eq!(request.recipient, "test@example.com");
        assert_eq!(request.subject, "Welcome");
        assert_eq!(request.html_body, "<p>Hello</p>");
        assert_eq!(request.plain_text, "Hello");

        Ok(())
    }

    #[tokio::test]
    async fn test_parses_pascal_case_payload() -> TestResult {
        let payload = br#"{
            "To": "test@example.com",
            "Subject": "Welcome",
            "HtmlBody": "<p>Hello</p>",
            "PlainText": "Hello"
        }"#;

        let request = parse(payload).await?.unwrap();

        assert_eq!(request.recipient, "test@example.com");
        assert_eq!(request.subject, "Welcome");

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_fields_default_to_empty() -> TestResult {
        let request = parse(br#"{"subject": "Welcome"}"#).await?.unwrap();

        assert_eq!(request.recipient, "");
        assert!(!request.is_sendable());

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_payload_is_the_absent_request() -> TestResult {
        assert_eq!(parse(b"").await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_null_payload_is_the_absent_request() -> TestResult {
        assert_eq!(parse(b"null").await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_payload_is_a_parse_error() {
        let result = parse(b"{not json").await;

        assert!(matches!(result, Err(ParseError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_unknown_fields_are_ignored() -> TestResult {
        let request = parse(br#"{"to": "test@example.com", "cc": "x@example.com"}"#)
            .await?
            .unwrap();

        assert_eq!(request.recipient, "test@example.com");

        Ok(())
    }
}
