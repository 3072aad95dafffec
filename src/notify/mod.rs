pub mod telegram;

pub use telegram::TelegramNotifier;

use anyhow::Result;

/// Outbound channel for human-readable failure/success messages.
///
/// Implementations must tolerate concurrent calls from multiple in-flight
/// fetches; no ordering is guaranteed between them.
#[async_trait::async_trait]
pub trait AlertSink: Send + Sync {
    async fn alert(&self, message: &str) -> Result<()>;
}

/// Sink that drops everything. For wiring a scraper without Telegram.
pub struct NoopAlerts;

#[async_trait::async_trait]
impl AlertSink for NoopAlerts {
    async fn alert(&self, _message: &str) -> Result<()> {
        Ok(())
    }
}
