//! Outbound admin notifications.
//!
//! One email per new complaint, sent through a configured SMTP relay.
//! Delivery is best effort: a failed send is a reported outcome, never an
//! error that reaches the submit caller, and there are no retries.

use async_trait::async_trait;
use lettre::{
    message::Mailbox, transport::smtp::authentication::Credentials, AsyncSmtpTransport,
    AsyncTransport, Message, Tokio1Executor,
};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use grievance_core::config::MailerConfig;
use grievance_core::types::Complaint;

/// Notifier setup errors, surfaced at process start
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Invalid mailbox address: {0}")]
    Address(String),

    #[error("SMTP transport setup failed: {0}")]
    Transport(String),
}

/// Outcome of a notification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// The relay accepted the message
    Delivered,
    /// The send failed; the reason is logged and reported upward
    Failed { reason: String },
}

impl NotifyOutcome {
    /// Whether the message was accepted by the relay
    pub fn delivered(&self) -> bool {
        matches!(self, NotifyOutcome::Delivered)
    }
}

/// Admin notification channel.
#[async_trait]
pub trait AdminNotifier: Send + Sync {
    /// Tell the administrator about a newly submitted complaint. Must not
    /// fail: delivery problems are folded into the returned outcome.
    async fn notify_new_complaint(&self, complaint: &Complaint) -> NotifyOutcome;
}

/// SMTP-backed notifier using the lettre async transport.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    recipient: Mailbox,
}

impl SmtpNotifier {
    /// Build the notifier from mailer configuration
    pub fn new(config: &MailerConfig) -> Result<Self, NotifyError> {
        let credentials = Credentials::new(config.username.clone(), config.password.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| NotifyError::Transport(e.to_string()))?
            .credentials(credentials)
            .timeout(Some(Duration::from_secs(config.timeout_secs)))
            .build();

        let sender: Mailbox = config
            .username
            .parse()
            .map_err(|_| NotifyError::Address(config.username.clone()))?;
        let recipient: Mailbox = config
            .recipient
            .parse()
            .map_err(|_| NotifyError::Address(config.recipient.clone()))?;

        Ok(Self {
            transport,
            sender,
            recipient,
        })
    }

    fn subject(complaint: &Complaint) -> String {
        format!("[GRIEVANCE PORTAL] New Complaint: {}", complaint.title)
    }

    fn body(complaint: &Complaint) -> String {
        format!(
            "Description: {}\nSeverity: {}\n\nGo to your admin panel to respond.",
            complaint.description,
            complaint.severity_label()
        )
    }
}

#[async_trait]
impl AdminNotifier for SmtpNotifier {
    async fn notify_new_complaint(&self, complaint: &Complaint) -> NotifyOutcome {
        let email = match Message::builder()
            .from(self.sender.clone())
            .to(self.recipient.clone())
            .subject(Self::subject(complaint))
            .body(Self::body(complaint))
        {
            Ok(email) => email,
            Err(e) => {
                warn!(complaint_id = %complaint.id, error = %e, "failed to build notification email");
                return NotifyOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        match self.transport.send(email).await {
            Ok(_) => {
                info!(complaint_id = %complaint.id, "admin notification sent");
                NotifyOutcome::Delivered
            }
            Err(e) => {
                warn!(complaint_id = %complaint.id, error = %e, "admin notification failed");
                NotifyOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
