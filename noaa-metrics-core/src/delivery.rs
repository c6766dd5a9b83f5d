use crate::error::MetricsError;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart};
use lettre::{Message, SmtpTransport, Transport};

/// A rendered report addressed to its recipients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingReport {
    pub recipients: Vec<String>,
    pub subject: String,
    pub filename: String,
    pub body: String,
}

pub trait Mailer {
    fn send(&self, report: &OutgoingReport) -> Result<(), MetricsError>;
}

/// Submits reports to an SMTP relay, normally the local MTA.
///
/// Plain-text connection, no authentication.
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    from: String,
    host: String,
    port: u16,
}

impl SmtpMailer {
    pub fn new(from: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            from: from.into(),
            host: host.into(),
            port,
        }
    }

    fn build_message(&self, report: &OutgoingReport) -> Result<Message, MetricsError> {
        let from: Mailbox = self
            .from
            .parse()
            .map_err(|e| MetricsError::delivery(format!("invalid sender '{}'", self.from), e))?;

        let mut builder = Message::builder().from(from).subject(&report.subject);
        for recipient in &report.recipients {
            let to: Mailbox = recipient.parse().map_err(|e| {
                MetricsError::delivery(format!("invalid recipient '{recipient}'"), e)
            })?;
            builder = builder.to(to);
        }

        let attachment =
            Attachment::new(report.filename.clone()).body(report.body.clone(), ContentType::TEXT_PLAIN);

        builder
            .multipart(MultiPart::mixed().singlepart(attachment))
            .map_err(|e| MetricsError::delivery("failed to build message", e))
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, report: &OutgoingReport) -> Result<(), MetricsError> {
        let message = self.build_message(report)?;

        let transport = SmtpTransport::builder_dangerous(&self.host)
            .port(self.port)
            .build();

        transport.send(&message).map_err(|e| {
            MetricsError::delivery(format!("SMTP relay {}:{} rejected message", self.host, self.port), e)
        })?;

        tracing::info!(
            recipients = report.recipients.len(),
            filename = %report.filename,
            "report delivered"
        );
        Ok(())
    }
}
