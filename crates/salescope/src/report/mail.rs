//! Mail delivery collaborator.
//!
//! Sends the finished report as a multipart message with the metrics file
//! and both chart images attached. The production transport speaks plain
//! SMTP to a configured host and port; an unreachable server fails the
//! delivery stage loudly rather than being swallowed.

use std::fs;
use std::path::Path;

use lettre::message::header::ContentType;
use lettre::message::{Attachment, Message, MultiPart, SinglePart};
use lettre::{SmtpTransport, Transport};

use crate::error::{Result, SalescopeError};

use super::charts::{DISTRIBUTION_FILE, TREND_FILE};
use super::document::capitalize;
use super::engine::METRICS_FILE;

/// Files attached to the report mail, with their content types.
const ATTACHMENTS: [(&str, &str); 3] = [
    (METRICS_FILE, "text/csv"),
    (TREND_FILE, "image/png"),
    (DISTRIBUTION_FILE, "image/png"),
];

/// Delivers a month's report artifacts to a recipient.
pub trait MailTransport: Send + Sync {
    /// Send the report for `month`, attaching artifacts from `report_dir`.
    fn send(&self, month: &str, report_dir: &Path, recipient: &str, sender: &str) -> Result<()>;
}

/// SMTP transport over plain TCP.
pub struct SmtpMailer {
    host: String,
    port: u16,
}

impl SmtpMailer {
    /// Create a mailer for the given SMTP endpoint.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl MailTransport for SmtpMailer {
    fn send(&self, month: &str, report_dir: &Path, recipient: &str, sender: &str) -> Result<()> {
        let month_name = capitalize(month);

        let body = SinglePart::builder()
            .header(ContentType::TEXT_PLAIN)
            .body(format!(
                "Please find attached the {month_name} sales report."
            ));
        let mut multipart = MultiPart::mixed().singlepart(body);

        for (name, mime) in ATTACHMENTS {
            let path = report_dir.join(name);
            let bytes = fs::read(&path).map_err(|e| {
                SalescopeError::Delivery(format!(
                    "missing attachment '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            let content_type = ContentType::parse(mime)
                .map_err(|e| SalescopeError::Delivery(format!("bad content type '{mime}': {e}")))?;
            multipart = multipart.singlepart(Attachment::new(name.to_string()).body(bytes, content_type));
        }

        let message = Message::builder()
            .from(sender.parse().map_err(|e| {
                SalescopeError::Delivery(format!("invalid sender address '{sender}': {e}"))
            })?)
            .to(recipient.parse().map_err(|e| {
                SalescopeError::Delivery(format!("invalid recipient address '{recipient}': {e}"))
            })?)
            .subject(format!("{month_name} Sales Report"))
            .multipart(multipart)
            .map_err(|e| SalescopeError::Delivery(format!("failed to build message: {e}")))?;

        let mailer = SmtpTransport::builder_dangerous(&self.host)
            .port(self.port)
            .build();

        mailer
            .send(&message)
            .map_err(|e| SalescopeError::Delivery(format!("SMTP send failed: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attachment_is_delivery_error() {
        let dir = tempfile::tempdir().unwrap();
        let mailer = SmtpMailer::new("localhost", 1025);

        // No artifacts were written, so the send fails before any network use
        let err = mailer
            .send("january", dir.path(), "to@example.com", "from@example.com")
            .unwrap_err();
        assert!(matches!(err, SalescopeError::Delivery(_)));
    }
}
