//! Email notification service using lettre

use std::time::Duration;

use lettre::{
    Message, SmtpTransport, Transport, message::header,
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub from_address: String,
    /// Staff mailbox receiving inquiry notifications. Falls back to
    /// `smtp_username` when empty.
    pub contact_address: String,
    pub company_name: String,
    pub contact_phone: String,
    pub contact_phone_2: String,
    pub timeout_secs: u64,
    /// Also send the visitor a thank-you message after each inquiry.
    pub auto_reply: bool,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: "localhost".to_owned(),
            smtp_port: 587,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: "noreply@corpsite.localhost".to_owned(),
            contact_address: String::new(),
            company_name: "Corpsite".to_owned(),
            contact_phone: String::new(),
            contact_phone_2: String::new(),
            timeout_secs: 10,
            auto_reply: false,
        }
    }
}

/// Email service for sending notifications
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from: String,
    timeout: Duration,
    pub(crate) staff_address: String,
    pub(crate) company_name: String,
    pub(crate) contact_phones: [String; 2],
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);

        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection"
            );

            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .timeout(Some(timeout))
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "Email service initialized with authentication and STARTTLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::starttls_relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .timeout(Some(timeout))
                .build()
        };

        let staff_address = if config.contact_address.is_empty() {
            config.smtp_username.clone()
        } else {
            config.contact_address.clone()
        };

        Ok(Self {
            mailer,
            from: config.from_address.clone(),
            timeout,
            staff_address,
            company_name: config.company_name.clone(),
            contact_phones: [config.contact_phone.clone(), config.contact_phone_2.clone()],
        })
    }

    /// Sends a plain-text message in a single SMTP session.
    ///
    /// The blocking transport runs on the blocking pool and the whole
    /// exchange is bounded by the configured timeout.
    pub async fn send_plain(
        &self,
        to: impl Into<String>,
        subject: impl Into<String>,
        plain: impl Into<String>,
    ) -> anyhow::Result<()> {
        let to = to.into();
        let subject = subject.into();
        let plain = plain.into();

        tracing::debug!(to = %to, subject = %subject, "Sending email text plain");

        let message = Message::builder()
            .from(self.from.parse()?)
            .to(to.parse()?)
            .subject(subject)
            .header(header::ContentType::TEXT_PLAIN)
            .body(plain)?;

        let mailer = self.mailer.clone();
        let task = tokio::task::spawn_blocking(move || mailer.send(&message));

        match tokio::time::timeout(self.timeout, task).await {
            Ok(joined) => {
                joined??;
            }
            Err(_) => anyhow::bail!("smtp session timed out after {:?}", self.timeout),
        }

        Ok(())
    }
}
