//! The poll loop driving the alert-processing pipeline.

use std::future::Future;
use std::time::Duration;

use alert_feed::{Alert, FeedClient, FeedError};
use chrono::{DateTime, Utc};
use futures::FutureExt;
use region_data::{classify, DatasetCache, RefreshOutcome};
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::audit::AuditLog;
use crate::config::MonitorConfig;
use crate::dedup::SeenAlerts;
use crate::error::MonitorError;
use crate::formatting::format_alert;
use crate::notifier::Notifier;
use crate::sender::MessageSender;

/// Result of one poll cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The reference dataset is not available yet; nothing was processed.
    NotReady,
    /// No active alert (or a malformed payload treated as none).
    Idle,
    /// An active alert was rejected by the acceptance filter.
    Skipped { id: String, reason: String },
    /// An alert was classified, formatted, and fanned out.
    Notified {
        id: String,
        delivered: usize,
        failed: usize,
    },
}

/// The alert monitor: owns the pipeline state and drives the poll loop.
pub struct Monitor<S> {
    feed: FeedClient,
    cache: DatasetCache,
    notifier: Notifier<S>,
    seen: SeenAlerts,
    audit: Option<AuditLog>,
    region_of_interest: String,
    test_markers: Vec<String>,
    poll_interval: Duration,
}

impl<S: MessageSender> Monitor<S> {
    /// Assemble a monitor from its collaborators and configuration.
    pub fn new(
        feed: FeedClient,
        cache: DatasetCache,
        notifier: Notifier<S>,
        config: &MonitorConfig,
    ) -> Self {
        Self {
            feed,
            cache,
            notifier,
            seen: SeenAlerts::new(),
            audit: config.audit_path.as_ref().map(AuditLog::new),
            region_of_interest: config.region_of_interest.clone(),
            test_markers: config.test_markers.clone(),
            poll_interval: config.poll_interval,
        }
    }

    /// Check whether an active alert should be processed this cycle.
    fn should_process(&self, alert: &Alert) -> Result<(), String> {
        if !alert.matches_region(&self.region_of_interest) {
            return Err(format!(
                "outside region of interest {}",
                self.region_of_interest
            ));
        }
        if self.seen.seen(&alert.id) {
            return Err("already processed".to_string());
        }
        if alert.is_test(&self.test_markers) {
            return Err("test alert".to_string());
        }
        Ok(())
    }

    /// Run one fetch-and-process pass.
    ///
    /// Malformed feed payloads are treated as "no alert"; transport errors
    /// propagate to the loop's cycle-level catch.
    pub async fn run_cycle(&mut self, now: DateTime<Utc>) -> Result<CycleOutcome, MonitorError> {
        if self.cache.maybe_refresh(now).await == RefreshOutcome::Updated {
            self.notifier
                .notify_operator(
                    "*Dataset update*\r\nThe region reference dataset has been updated.",
                )
                .await;
        }

        let dataset = match self.cache.dataset() {
            Some(dataset) => dataset,
            None => {
                warn!("Reference dataset not available yet, skipping cycle");
                return Ok(CycleOutcome::NotReady);
            }
        };

        let alert = match self.feed.fetch_active().await {
            Ok(Some(alert)) => alert,
            Ok(None) => return Ok(CycleOutcome::Idle),
            Err(e @ (FeedError::Malformed(_) | FeedError::MissingId)) => {
                debug!("Ignoring malformed feed payload: {}", e);
                return Ok(CycleOutcome::Idle);
            }
            Err(e) => return Err(e.into()),
        };

        if let Err(reason) = self.should_process(&alert) {
            debug!(id = %alert.id, "Skipping alert: {}", reason);
            return Ok(CycleOutcome::Skipped {
                id: alert.id,
                reason,
            });
        }

        self.seen.mark_seen(alert.id.clone());

        let grouped = classify(dataset, &alert.places);
        let message = format_alert(&alert.title, &grouped);

        let outcomes = self.notifier.notify_all(&message).await;
        let delivered = outcomes.iter().filter(|o| o.delivered()).count();
        let failed = outcomes.len() - delivered;

        if let Some(audit) = &self.audit {
            if let Err(e) = audit.append(&alert) {
                warn!("Failed to append audit record: {}", e);
            }
        }

        info!(id = %alert.id, delivered, failed, "Processed alert");
        Ok(CycleOutcome::Notified {
            id: alert.id,
            delivered,
            failed,
        })
    }

    /// Run the poll loop until the shutdown future completes.
    ///
    /// Cycles start at a fixed target interval: the loop sleeps off whatever
    /// time the cycle left over, and starts the next cycle immediately (with
    /// a warning) when a cycle overruns. A cycle failure is logged, escalated
    /// to the operator channel, and never terminates the loop. Shutdown is
    /// honored between cycles and during the sleep, so in-flight delivery
    /// attempts run to completion.
    pub async fn run<F>(mut self, shutdown: F) -> Result<(), MonitorError>
    where
        F: Future<Output = ()> + Send,
    {
        info!(
            interval = ?self.poll_interval,
            recipients = self.notifier.recipient_count(),
            "Starting alert monitor loop"
        );
        self.notifier
            .notify_operator("*Monitor started*\r\nThe alert monitor is up and polling.")
            .await;

        tokio::pin!(shutdown);

        loop {
            let cycle_start = Instant::now();

            if let Err(e) = self.run_cycle(Utc::now()).await {
                error!("Cycle failed: {}", e);
                self.notifier
                    .notify_operator(&format!("*Error Alert*\r\n{}", e))
                    .await;
            }

            let elapsed = cycle_start.elapsed();
            if elapsed < self.poll_interval {
                tokio::select! {
                    biased;

                    () = &mut shutdown => {
                        info!("Shutdown signal received, stopping monitor");
                        return Ok(());
                    }

                    () = tokio::time::sleep(self.poll_interval - elapsed) => {}
                }
            } else {
                warn!(
                    ?elapsed,
                    interval = ?self.poll_interval,
                    "Cycle overran the poll interval, starting next cycle immediately"
                );
                if (&mut shutdown).now_or_never().is_some() {
                    info!("Shutdown signal received, stopping monitor");
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sender::NoOpSender;
    use alert_feed::FeedConfig;
    use region_data::DatasetConfig;
    use std::fs;
    use std::path::Path;
    use wa_gateway::GatewayConfig;

    const DATASET_BODY: &str = r#"{"areas": {"Center": ["Tel Aviv", "Holon"]}}"#;

    fn test_config(data_dir: &Path) -> MonitorConfig {
        MonitorConfig {
            gateway: GatewayConfig::new("1", "t"),
            feed: FeedConfig::new("http://127.0.0.1:59999/alerts.json"),
            dataset: DatasetConfig::new("http://127.0.0.1:59999/regions.json", data_dir),
            recipients: vec!["group@g.us".to_string()],
            operator: "operator@c.us".to_string(),
            region_of_interest: "*".to_string(),
            test_markers: vec!["בדיקה".to_string()],
            poll_interval: Duration::from_secs(1),
            audit_path: None,
        }
    }

    fn make_monitor(config: &MonitorConfig) -> Monitor<NoOpSender> {
        let feed = FeedClient::new(config.feed.clone()).unwrap();
        let cache = DatasetCache::new(config.dataset.clone()).unwrap();
        let notifier = Notifier::new(
            NoOpSender,
            config.recipients.clone(),
            config.operator.clone(),
        );
        Monitor::new(feed, cache, notifier, config)
    }

    fn make_alert(id: &str, places: &[&str]) -> Alert {
        let payload = serde_json::json!({
            "id": id,
            "title": "Rocket fire",
            "data": places,
        })
        .to_string();
        Alert::parse(&payload).unwrap()
    }

    #[test]
    fn test_should_process_accepts_fresh_alert() {
        let dir = tempfile::tempdir().unwrap();
        let monitor = make_monitor(&test_config(dir.path()));

        let alert = make_alert("1", &["Tel Aviv"]);
        assert!(monitor.should_process(&alert).is_ok());
    }

    #[test]
    fn test_should_process_rejects_other_regions() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path());
        config.region_of_interest = "Tel Aviv".to_string();
        let monitor = make_monitor(&config);

        let matching = make_alert("1", &["Tel Aviv"]);
        let elsewhere = make_alert("2", &["Haifa"]);
        assert!(monitor.should_process(&matching).is_ok());
        assert!(monitor.should_process(&elsewhere).is_err());
    }

    #[test]
    fn test_should_process_rejects_seen_alert() {
        let dir = tempfile::tempdir().unwrap();
        let mut monitor = make_monitor(&test_config(dir.path()));

        let alert = make_alert("1", &["Tel Aviv"]);
        assert!(monitor.should_process(&alert).is_ok());
        monitor.seen.mark_seen("1");
        assert_eq!(
            monitor.should_process(&alert).unwrap_err(),
            "already processed"
        );
    }

    #[test]
    fn test_should_process_rejects_test_alert() {
        let dir = tempfile::tempdir().unwrap();
        let monitor = make_monitor(&test_config(dir.path()));

        let drill = make_alert("1", &["בדיקה מחזורית"]);
        assert_eq!(monitor.should_process(&drill).unwrap_err(), "test alert");
    }

    #[tokio::test]
    async fn test_cycle_is_noop_without_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let mut monitor = make_monitor(&test_config(dir.path()));
        // No local dataset copy and an unreachable dataset host.
        let outcome = monitor.run_cycle(Utc::now()).await.unwrap();
        assert_eq!(outcome, CycleOutcome::NotReady);
    }

    #[tokio::test]
    async fn test_cycle_propagates_feed_transport_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        fs::write(&config.dataset.data_path, DATASET_BODY).unwrap();
        let mut monitor = make_monitor(&config);

        // Dataset loaded, but nothing listens on the feed port.
        let result = monitor.run_cycle(Utc::now()).await;
        assert!(matches!(result, Err(MonitorError::Feed(_))));
    }
}
