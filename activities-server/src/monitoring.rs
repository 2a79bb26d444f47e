use chrono::Local;
use colored::*;
use tokio::sync::mpsc;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogMessage {
    SignedUp { activity: String, email: String },
    Unregistered { activity: String, email: String },
    Rejected { message: String },
}

#[derive(Clone)]
pub struct MonitoringLayer {
    tx: mpsc::Sender<LogMessage>,
}

impl MonitoringLayer {
    pub fn new(tx: mpsc::Sender<LogMessage>) -> Self {
        Self { tx }
    }

    pub async fn log_signed_up(&self, activity: &str, email: &str) {
        let _ = self
            .tx
            .send(LogMessage::SignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            })
            .await;
    }

    pub async fn log_unregistered(&self, activity: &str, email: &str) {
        let _ = self
            .tx
            .send(LogMessage::Unregistered {
                activity: activity.to_string(),
                email: email.to_string(),
            })
            .await;
    }

    pub async fn log_rejected(&self, message: String) {
        let _ = self.tx.send(LogMessage::Rejected { message }).await;
    }
}

pub async fn spawn_monitoring_display(mut rx: mpsc::Receiver<LogMessage>) {
    tokio::spawn(async move {
        info!("");
        info!("{}", "📋 Signup Log:".bold());
        info!("{}", "─".repeat(80).dimmed());

        while let Some(log) = rx.recv().await {
            let timestamp = Local::now().format("%H:%M:%S%.3f");

            match log {
                LogMessage::SignedUp { activity, email } => {
                    info!(
                        "{} {} {} joined {}",
                        timestamp.to_string().dimmed(),
                        "✅".green(),
                        email.bold(),
                        activity.cyan()
                    );
                }
                LogMessage::Unregistered { activity, email } => {
                    info!(
                        "{} {} {} left {}",
                        timestamp.to_string().dimmed(),
                        "👋".yellow(),
                        email.bold(),
                        activity.cyan()
                    );
                }
                LogMessage::Rejected { message } => {
                    info!(
                        "{} {} {}",
                        timestamp.to_string().dimmed(),
                        "❌".red(),
                        message.red()
                    );
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_layer_forwards_events() {
        let (tx, mut rx) = mpsc::channel(8);
        let layer = MonitoringLayer::new(tx);

        layer.log_signed_up("Chess Club", "a@mergington.edu").await;
        layer.log_unregistered("Chess Club", "a@mergington.edu").await;
        layer.log_rejected("Activity not found: Knitting".to_string()).await;

        assert_eq!(
            rx.recv().await,
            Some(LogMessage::SignedUp {
                activity: "Chess Club".to_string(),
                email: "a@mergington.edu".to_string(),
            })
        );
        assert!(matches!(rx.recv().await, Some(LogMessage::Unregistered { .. })));
        assert!(matches!(rx.recv().await, Some(LogMessage::Rejected { .. })));
    }

    #[tokio::test]
    async fn test_closed_channel_is_ignored() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let layer = MonitoringLayer::new(tx);

        layer.log_signed_up("Chess Club", "a@mergington.edu").await;
    }
}
