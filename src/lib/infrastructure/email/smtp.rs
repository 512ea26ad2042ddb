//! SMTP email sender implementation

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use lettre::{
    message::MultiPart,
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    Message, SmtpTransport, Transport,
};

use crate::domain::dispatch::{errors::SendError, sender::EmailSender, EmailRequest};

/// SMTP configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct SMTPConfig {
    /// The SMTP host
    #[clap(long, env = "SMTP_HOST")]
    pub host: String,

    /// The SMTP port
    #[clap(long, env = "SMTP_PORT")]
    pub port: u16,

    /// The SMTP username
    #[clap(long, env = "SMTP_USER")]
    pub username: String,

    /// The SMTP password
    #[clap(long, env = "SMTP_PASSWORD")]
    pub password: String,

    /// The sender email address
    #[clap(long, env = "SMTP_SENDER")]
    pub sender: String,

    /// Verify the TLS certificate
    #[clap(long, env = "SMTP_VERIFY_TLS", default_value = "true")]
    pub verify_tls: bool,

    /// Enable STARTTLS (TLS upgrade on connection)
    #[clap(long, env = "SMTP_STARTTLS", default_value = "true")]
    pub starttls: bool,
}

/// SMTP mailer
#[derive(Debug, Default, Clone)]
pub struct SMTPMailer {
    config: SMTPConfig,
}

impl SMTPMailer {
    /// Create a new SMTP mailer
    pub fn new(config: SMTPConfig) -> Self {
        Self { config }
    }

    /// Build the SMTP transport from the configuration
    pub fn mailer(&self) -> Result<SmtpTransport> {
        let creds = Credentials::new(self.config.username.clone(), self.config.password.clone());

        let relay = if self.config.starttls {
            SmtpTransport::starttls_relay(&self.config.host)?
        } else {
            SmtpTransport::relay(&self.config.host)?
        };

        Ok(relay
            .credentials(creds)
            .port(self.config.port)
            .tls(Tls::Opportunistic(
                TlsParameters::builder(self.config.host.to_string())
                    .dangerous_accept_invalid_certs(!self.config.verify_tls)
                    .build()?,
            ))
            .build())
    }

    fn envelope(&self, request: &EmailRequest) -> Result<Message, SendError> {
        Message::builder()
            .from(
                self.config
                    .sender
                    .parse()
                    .map_err(|e| SendError::InvalidEnvelope(format!("sender: {e}")))?,
            )
            .to(request
                .recipient
                .parse()
                .map_err(|e| SendError::InvalidEnvelope(format!("recipient: {e}")))?)
            .subject(request.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                request.plain_text.clone(),
                request.html_body.clone(),
            ))
            .map_err(|e| SendError::InvalidEnvelope(e.to_string()))
    }
}

#[async_trait]
impl EmailSender for SMTPMailer {
    async fn send(&self, request: &EmailRequest) -> Result<bool, SendError> {
        let email = self.envelope(request)?;

        let transport = self
            .mailer()
            .map_err(SendError::UnknownError)?;

        match transport.send(&email) {
            // The server took the message but answered outside the 2xx
            // range; treat that as a decline rather than a transport fault.
            Ok(response) => Ok(response.is_positive()),
            Err(e) => Err(SendError::UnknownError(e.into())),
        }
    }
}
