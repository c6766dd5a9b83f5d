use noaa_metrics_core::MetricsError;
use noaa_metrics_core::delivery::{Mailer, OutgoingReport};
use std::sync::Mutex;

/// Keeps every report handed to it instead of talking to an SMTP relay.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutgoingReport>>,
    fail_with: Option<String>,
}

impl RecordingMailer {
    pub fn failing(message: &str) -> Self {
        Self {
            sent: Mutex::default(),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn sent(&self) -> Vec<OutgoingReport> {
        self.sent.lock().unwrap().clone()
    }
}

impl Mailer for RecordingMailer {
    fn send(&self, report: &OutgoingReport) -> Result<(), MetricsError> {
        if let Some(message) = &self.fail_with {
            return Err(MetricsError::delivery(
                message.clone(),
                std::io::Error::other("relay refused connection"),
            ));
        }
        self.sent.lock().unwrap().push(report.clone());
        Ok(())
    }
}
