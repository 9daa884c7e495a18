//! Periodic sheet refresh
//!
//! A [`RefreshScheduler`] owns a background worker that ingests the level
//! source once on start and then once per interval. Results arrive as
//! [`RefreshEvent`]s which the UI thread polls without blocking. Dropping the
//! scheduler cancels the schedule; a fetch already in flight runs to
//! completion and its result is discarded.

use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, TryRecvError, channel};
use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::ingest::{Ingested, LevelSource, LoadError};

/// Default time between refreshes (5 minutes)
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Callback run on the worker thread after each event is queued
pub type Notify = Box<dyn Fn() + Send>;

/// Progress of one refresh cycle
#[derive(Debug, Clone)]
pub enum RefreshEvent {
    /// An ingestion pass has begun
    Started,
    /// Ingestion succeeded
    Loaded(Ingested),
    /// Ingestion failed; nothing to apply
    Failed(LoadError),
}

/// Handle to the scheduled refresh task. The schedule lives as long as the handle.
pub struct RefreshScheduler {
    /// Receiver for refresh results
    rx: Receiver<RefreshEvent>,
    /// Sender to request an immediate refresh; dropping it stops the worker
    trigger_tx: Sender<()>,
    interval: Duration,
}

impl RefreshScheduler {
    /// Start refreshing `source` every `interval`, beginning immediately
    pub fn start(source: Box<dyn LevelSource>, interval: Duration) -> Self {
        Self::start_with_notify(source, interval, None)
    }

    /// Like [`RefreshScheduler::start`], calling `notify` after every event
    /// (used to wake the GUI event loop)
    pub fn start_with_notify(
        source: Box<dyn LevelSource>,
        interval: Duration,
        notify: Option<Notify>,
    ) -> Self {
        let (event_tx, event_rx) = channel();
        let (trigger_tx, trigger_rx) = channel::<()>();

        info!(
            "[nikki] Refreshing {} every {}s",
            source.describe(),
            interval.as_secs()
        );

        thread::spawn(move || {
            refresh_loop(source, interval, event_tx, trigger_rx, notify);
        });

        Self {
            rx: event_rx,
            trigger_tx,
            interval,
        }
    }

    /// Next queued event, if any (non-blocking)
    pub fn try_next(&self) -> Option<RefreshEvent> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// All events queued since the last poll
    pub fn poll(&self) -> Vec<RefreshEvent> {
        std::iter::from_fn(|| self.try_next()).collect()
    }

    /// Wait up to `timeout` for the next event
    pub fn next_timeout(&self, timeout: Duration) -> Option<RefreshEvent> {
        self.rx.recv_timeout(timeout).ok()
    }

    /// Wait for the current cycle to finish with a `Loaded` or `Failed` event
    pub fn wait_for_result(&self, timeout: Duration) -> Option<RefreshEvent> {
        let deadline = std::time::Instant::now() + timeout;
        loop {
            let remaining = deadline.checked_duration_since(std::time::Instant::now())?;
            match self.next_timeout(remaining)? {
                RefreshEvent::Started => continue,
                event => return Some(event),
            }
        }
    }

    /// Request a refresh now instead of waiting for the next tick
    pub fn refresh_now(&self) {
        let _ = self.trigger_tx.send(());
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// Worker loop: one pass now, then one per tick or manual trigger
fn refresh_loop(
    source: Box<dyn LevelSource>,
    interval: Duration,
    tx: Sender<RefreshEvent>,
    trigger_rx: Receiver<()>,
    notify: Option<Notify>,
) {
    let send = |event: RefreshEvent| -> bool {
        let delivered = tx.send(event).is_ok();
        if let Some(notify) = &notify {
            notify();
        }
        delivered
    };

    loop {
        if !send(RefreshEvent::Started) {
            break;
        }

        let event = match source.fetch() {
            Ok(ingested) => {
                info!(
                    "[nikki] Loaded {} levels from {}",
                    ingested.levels.len(),
                    source.describe()
                );
                RefreshEvent::Loaded(ingested)
            }
            Err(e) => {
                warn!("[nikki] Refresh from {} failed: {}", source.describe(), e);
                RefreshEvent::Failed(e)
            }
        };

        if !send(event) {
            break;
        }

        match trigger_rx.recv_timeout(interval) {
            Ok(()) => {
                // Collapse repeated clicks into a single pass
                while trigger_rx.try_recv().is_ok() {}
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    debug!("[nikki] Refresh worker for {} stopped", source.describe());
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::domain::{Level, LevelKey, Rewards};

    /// Source that counts its fetches and fails every other one
    struct CountingSource {
        fetches: Arc<AtomicUsize>,
    }

    impl LevelSource for CountingSource {
        fn describe(&self) -> String {
            "counting".to_string()
        }

        fn fetch(&self) -> Result<Ingested, LoadError> {
            let n = self.fetches.fetch_add(1, Ordering::SeqCst) + 1;
            if n % 2 == 0 {
                return Err(LoadError::Fetch("even fetch".to_string()));
            }
            Ok(Ingested::from_levels(vec![Level {
                id: 1,
                key: LevelKey::new("Mira Level 1"),
                level: "Mira Level 1".to_string(),
                title: None,
                rewards: Rewards::new(),
                required: None,
            }]))
        }
    }

    fn counting() -> (Box<dyn LevelSource>, Arc<AtomicUsize>) {
        let fetches = Arc::new(AtomicUsize::new(0));
        let source = CountingSource {
            fetches: Arc::clone(&fetches),
        };
        (Box::new(source), fetches)
    }

    #[test]
    fn test_first_pass_runs_immediately() {
        let (source, fetches) = counting();
        let scheduler = RefreshScheduler::start(source, Duration::from_secs(3600));

        assert!(matches!(
            scheduler.next_timeout(Duration::from_secs(5)),
            Some(RefreshEvent::Started)
        ));
        assert!(matches!(
            scheduler.next_timeout(Duration::from_secs(5)),
            Some(RefreshEvent::Loaded(_))
        ));
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_repeats_on_interval_and_reports_failures() {
        let (source, _fetches) = counting();
        let scheduler = RefreshScheduler::start(source, Duration::from_millis(20));

        let first = scheduler.wait_for_result(Duration::from_secs(5));
        let second = scheduler.wait_for_result(Duration::from_secs(5));
        assert!(matches!(first, Some(RefreshEvent::Loaded(_))));
        assert!(matches!(second, Some(RefreshEvent::Failed(LoadError::Fetch(_)))));
    }

    #[test]
    fn test_refresh_now_skips_the_wait() {
        let (source, fetches) = counting();
        let scheduler = RefreshScheduler::start(source, Duration::from_secs(3600));
        assert!(scheduler.wait_for_result(Duration::from_secs(5)).is_some());

        scheduler.refresh_now();
        assert!(scheduler.wait_for_result(Duration::from_secs(5)).is_some());
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_drop_cancels_schedule() {
        let (source, fetches) = counting();
        let scheduler = RefreshScheduler::start(source, Duration::from_millis(10));
        assert!(scheduler.wait_for_result(Duration::from_secs(5)).is_some());
        drop(scheduler);

        thread::sleep(Duration::from_millis(100));
        let after_drop = fetches.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(100));
        assert_eq!(fetches.load(Ordering::SeqCst), after_drop);
    }

    #[test]
    fn test_notify_called_per_event() {
        let (source, _fetches) = counting();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let scheduler = RefreshScheduler::start_with_notify(
            source,
            Duration::from_secs(3600),
            Some(Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })),
        );

        assert!(scheduler.wait_for_result(Duration::from_secs(5)).is_some());

        // The worker notifies right after queueing, so allow it to catch up
        for _ in 0..100 {
            if calls.load(Ordering::SeqCst) >= 2 {
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
