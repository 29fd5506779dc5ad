use crate::alerts::{AlertSource, DateWindow};
use crate::error::Result;
use crate::llm::LanguageModel;
use crate::prompt::analysis_prompt;
use crate::reformat::reformat;
use crate::summary::summarize_alerts;
use chrono::NaiveDate;
use std::sync::Arc;

/// Default look-back used when a caller gives no day count.
pub const DEFAULT_DAYS: i64 = 7;

/// Fetches recent alerts and asks the model for a written analysis of them.
#[derive(Clone)]
pub struct AlertAnalyzer {
    alerts: Arc<dyn AlertSource>,
    model: Arc<dyn LanguageModel>,
}

impl AlertAnalyzer {
    pub fn new(alerts: Arc<dyn AlertSource>, model: Arc<dyn LanguageModel>) -> Self {
        Self { alerts, model }
    }

    /// Analyze the last `days` days, ending on today's local date.
    pub async fn analyze(&self, days: i64) -> Result<String> {
        self.analyze_on(days, chrono::Local::now().date_naive()).await
    }

    pub async fn analyze_on(&self, days: i64, today: NaiveDate) -> Result<String> {
        let window = DateWindow::ending_on(today, days)?;
        let alerts = self.alerts.fetch_alerts(&window).await?;
        log::info!(
            "Fetched {} alerts for {} .. {}",
            alerts.len(),
            window.start,
            window.end
        );

        let summary = summarize_alerts(&alerts);
        let prompt = analysis_prompt(days, &summary);
        let raw = self.model.generate(&prompt).await?;

        Ok(reformat(&raw))
    }
}
