use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use super::AlertSink;
use crate::scrape::types::NormalizedRecord;

const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Telegram Bot API notifier.
///
/// Credentials come from `NOTIF_BOT_TOKEN` / `NOTIF_CHAT_ID`. When either is
/// missing the notifier is disabled: sends log a debug line and succeed, so
/// a missing bot never breaks an ingestion run.
pub struct TelegramNotifier {
    /// (bot token, chat id); `None` disables the notifier.
    credentials: Option<(String, String)>,
    client: Client,
    timeout: Duration,
    api_base: String,
}

impl TelegramNotifier {
    pub fn from_env() -> Self {
        let token = std::env::var("NOTIF_BOT_TOKEN").ok();
        let chat_id = std::env::var("NOTIF_CHAT_ID").ok();
        Self {
            credentials: token.zip(chat_id),
            client: Client::new(),
            timeout: Duration::from_secs(10),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Builder for tests/tools.
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            credentials: Some((bot_token.into(), chat_id.into())),
            client: Client::new(),
            timeout: Duration::from_secs(10),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Point at a different Bot API host (tests).
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.credentials.is_some()
    }

    /// Send a plain-text message to the configured chat.
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let Some((token, chat_id)) = &self.credentials else {
            tracing::debug!("telegram disabled (no NOTIF_BOT_TOKEN / NOTIF_CHAT_ID)");
            return Ok(());
        };

        let url = format!("{}/bot{}/sendMessage", self.api_base, token);
        let body = serde_json::json!({
            "chat_id": chat_id,
            "text": text,
            "parse_mode": "Markdown",
        });

        self.client
            .post(&url)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .context("telegram sendMessage post")?
            .error_for_status()
            .context("telegram sendMessage non-2xx")?;
        Ok(())
    }

    /// Export a record batch to the chat as a JSON file attachment.
    pub async fn send_records_document(
        &self,
        records: &[NormalizedRecord],
        name: &str,
    ) -> Result<()> {
        let Some((token, chat_id)) = &self.credentials else {
            tracing::debug!("telegram disabled (no NOTIF_BOT_TOKEN / NOTIF_CHAT_ID)");
            return Ok(());
        };

        let json_bytes = serde_json::to_vec_pretty(records).context("serialize records")?;
        let url = format!("{}/bot{}/sendDocument", self.api_base, token);
        let form = Form::new().text("chat_id", chat_id.clone()).part(
            "document",
            Part::bytes(json_bytes)
                .file_name(format!("{name}.json"))
                .mime_str("application/json")
                .context("document mime")?,
        );

        self.client
            .post(&url)
            .timeout(self.timeout)
            .multipart(form)
            .send()
            .await
            .context("telegram sendDocument post")?
            .error_for_status()
            .context("telegram sendDocument non-2xx")?;

        tracing::info!(count = records.len(), name, "records exported to telegram");
        Ok(())
    }
}

#[async_trait::async_trait]
impl AlertSink for TelegramNotifier {
    async fn alert(&self, message: &str) -> Result<()> {
        self.send_message(&format!("*ERROR NOTIFICATION*\n\n{message}"))
            .await
    }
}
