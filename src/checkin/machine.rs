//! Check-in state machine.
//!
//! ```text
//! Idle --start--> Scanning --task result--> Complete
//!  ^                 |                         |
//!  +-----cancel------+                         |
//!  +-----------------reset---------------------+
//! ```
//!
//! `start` spawns a task that waits out the scan duration, runs the verifier
//! (bounded by the verify timeout) and sends back a [`CheckinOutcome`]. The UI
//! calls [`CheckinMachine::poll`] once per frame to pick it up.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use super::permission::PermissionStatus;
use super::verifier::{CheckinOutcome, Verifier};
use crate::config::CheckinConfig;
use crate::error::{AppError, Result};

/// Which check-in screen owns the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckinKind {
    Qr,
    Face,
}

impl CheckinKind {
    pub fn name(&self) -> &'static str {
        match self {
            CheckinKind::Qr => "QR",
            CheckinKind::Face => "face",
        }
    }
}

/// Check-in progress.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CheckinState {
    #[default]
    Idle,
    Scanning {
        started: Instant,
    },
    Complete(CheckinOutcome),
}

pub struct CheckinMachine {
    kind: CheckinKind,
    state: CheckinState,
    scan_duration: Duration,
    verify_timeout: Duration,
    task: Option<JoinHandle<()>>,
    rx: Option<mpsc::UnboundedReceiver<CheckinOutcome>>,
}

impl CheckinMachine {
    pub fn new(kind: CheckinKind, config: &CheckinConfig) -> Self {
        Self {
            kind,
            state: CheckinState::Idle,
            scan_duration: config.scan_duration(),
            verify_timeout: config.verify_timeout(),
            task: None,
            rx: None,
        }
    }

    pub fn kind(&self) -> CheckinKind {
        self.kind
    }

    pub fn state(&self) -> &CheckinState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, CheckinState::Idle)
    }

    pub fn is_scanning(&self) -> bool {
        matches!(self.state, CheckinState::Scanning { .. })
    }

    /// Outcome of the finished scan, if any.
    pub fn outcome(&self) -> Option<&CheckinOutcome> {
        match &self.state {
            CheckinState::Complete(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn scan_duration(&self) -> Duration {
        self.scan_duration
    }

    /// Begin scanning.
    pub fn start<V: Verifier>(&mut self, handle: &Handle, permission: PermissionStatus, verifier: V) -> Result<()> {
        if permission != PermissionStatus::Granted {
            return Err(AppError::PermissionDenied);
        }
        if !self.is_idle() {
            return Err(AppError::invalid_transition(format!(
                "{} check-in can only start from idle",
                self.kind.name()
            )));
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let scan_duration = self.scan_duration;
        let verify_timeout = self.verify_timeout;

        let task = handle.spawn(async move {
            tokio::time::sleep(scan_duration).await;
            let outcome = tokio::time::timeout(verify_timeout, verifier.verify())
                .await
                .unwrap_or(CheckinOutcome::TimedOut);
            let _ = tx.send(outcome);
        });

        self.task = Some(task);
        self.rx = Some(rx);
        self.state = CheckinState::Scanning { started: Instant::now() };
        info!("Started {} check-in ({} ms)", self.kind.name(), scan_duration.as_millis());
        Ok(())
    }

    /// Pick up the verification result if it has arrived.
    ///
    /// Returns the outcome on the frame the machine enters `Complete`.
    pub fn poll(&mut self) -> Result<Option<CheckinOutcome>> {
        let Some(rx) = self.rx.as_mut() else {
            return Ok(None);
        };

        match rx.try_recv() {
            Ok(outcome) => {
                self.release();
                match &outcome {
                    CheckinOutcome::Verified { subject } => {
                        info!("{} check-in verified for {}", self.kind.name(), subject)
                    }
                    CheckinOutcome::NoMatch { reason } => {
                        warn!("{} check-in rejected: {}", self.kind.name(), reason)
                    }
                    CheckinOutcome::TimedOut => warn!("{} check-in timed out", self.kind.name()),
                }
                self.state = CheckinState::Complete(outcome.clone());
                Ok(Some(outcome))
            }
            Err(mpsc::error::TryRecvError::Empty) => Ok(None),
            Err(mpsc::error::TryRecvError::Disconnected) => {
                self.release();
                self.state = CheckinState::Idle;
                Err(AppError::TaskFailed(format!(
                    "{} verification stopped without a result",
                    self.kind.name()
                )))
            }
        }
    }

    /// Abort a running scan. Returns `true` if a scan was cancelled.
    pub fn cancel(&mut self) -> bool {
        if !self.is_scanning() {
            return false;
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.rx = None;
        self.state = CheckinState::Idle;
        info!("Cancelled {} check-in", self.kind.name());
        true
    }

    /// Return to idle from any state ("Scan Again" / "Try Again").
    pub fn reset(&mut self) {
        if !self.cancel() {
            debug!("Reset {} check-in", self.kind.name());
            self.state = CheckinState::Idle;
        }
    }

    /// Fraction of the scan duration elapsed, in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        match &self.state {
            CheckinState::Idle => 0.0,
            CheckinState::Scanning { started } => {
                if self.scan_duration.is_zero() {
                    return 1.0;
                }
                let elapsed = now.saturating_duration_since(*started);
                (elapsed.as_secs_f32() / self.scan_duration.as_secs_f32()).clamp(0.0, 1.0)
            }
            CheckinState::Complete(_) => 1.0,
        }
    }

    fn release(&mut self) {
        self.rx = None;
        self.task = None;
    }
}

impl Drop for CheckinMachine {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkin::verifier::{FACE_SUBJECT, FaceVerifier, QR_SUBJECT, QrVerifier};

    struct Stalled;

    impl Verifier for Stalled {
        fn verify(self) -> impl std::future::Future<Output = CheckinOutcome> + Send {
            std::future::pending()
        }
    }

    struct Panics;

    impl Verifier for Panics {
        async fn verify(self) -> CheckinOutcome {
            panic!("sensor exploded")
        }
    }

    fn machine(kind: CheckinKind) -> CheckinMachine {
        CheckinMachine::new(kind, &CheckinConfig::default())
    }

    async fn advance(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_face_scan_completes_after_duration() {
        let mut m = machine(CheckinKind::Face);
        m.start(&Handle::current(), PermissionStatus::Granted, FaceVerifier)
            .unwrap();
        assert!(m.is_scanning());

        advance(2990).await;
        assert_eq!(m.poll().unwrap(), None);
        assert!(m.is_scanning());

        advance(20).await;
        let outcome = m.poll().unwrap();
        assert_eq!(
            outcome,
            Some(CheckinOutcome::Verified {
                subject: FACE_SUBJECT.to_string()
            })
        );
        assert!(m.outcome().is_some_and(CheckinOutcome::is_verified));
        assert_eq!(m.poll().unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_qr_scan_invalid_payload_is_rejected() {
        let mut m = machine(CheckinKind::Qr);
        m.start(&Handle::current(), PermissionStatus::Granted, QrVerifier::new("wifi:guest"))
            .unwrap();

        advance(3010).await;
        assert!(matches!(m.poll().unwrap(), Some(CheckinOutcome::NoMatch { .. })));

        m.reset();
        assert!(m.is_idle());

        m.start(&Handle::current(), PermissionStatus::Granted, QrVerifier::new("attendance:42"))
            .unwrap();
        advance(3010).await;
        assert_eq!(
            m.poll().unwrap(),
            Some(CheckinOutcome::Verified {
                subject: QR_SUBJECT.to_string()
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_late_completion() {
        let mut m = machine(CheckinKind::Face);
        m.start(&Handle::current(), PermissionStatus::Granted, FaceVerifier)
            .unwrap();

        advance(1000).await;
        assert!(m.cancel());
        assert!(m.is_idle());

        advance(10_000).await;
        assert_eq!(m.poll().unwrap(), None);
        assert!(m.is_idle());
        assert!(!m.cancel());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_verifier_times_out() {
        let mut m = machine(CheckinKind::Face);
        m.start(&Handle::current(), PermissionStatus::Granted, Stalled)
            .unwrap();

        advance(3000 + 4990).await;
        assert_eq!(m.poll().unwrap(), None);

        advance(20).await;
        assert_eq!(m.poll().unwrap(), Some(CheckinOutcome::TimedOut));
    }

    #[tokio::test(start_paused = true)]
    async fn test_panicking_verifier_reports_task_failure() {
        let mut m = machine(CheckinKind::Face);
        m.start(&Handle::current(), PermissionStatus::Granted, Panics)
            .unwrap();

        advance(3010).await;
        assert!(matches!(m.poll(), Err(AppError::TaskFailed(_))));
        assert!(m.is_idle());
    }

    #[tokio::test]
    async fn test_start_requires_permission() {
        let mut m = machine(CheckinKind::Qr);
        for status in [PermissionStatus::Pending, PermissionStatus::Denied] {
            let err = m
                .start(&Handle::current(), status, QrVerifier::new("class"))
                .unwrap_err();
            assert!(matches!(err, AppError::PermissionDenied));
        }
        assert!(m.is_idle());
    }

    #[tokio::test]
    async fn test_start_twice_is_rejected() {
        let mut m = machine(CheckinKind::Face);
        m.start(&Handle::current(), PermissionStatus::Granted, FaceVerifier)
            .unwrap();
        let err = m
            .start(&Handle::current(), PermissionStatus::Granted, FaceVerifier)
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidTransition(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_tracks_elapsed_time() {
        let mut m = machine(CheckinKind::Face);
        assert_eq!(m.progress(Instant::now()), 0.0);

        m.start(&Handle::current(), PermissionStatus::Granted, FaceVerifier)
            .unwrap();
        let started = Instant::now();
        let half = m.progress(started + Duration::from_millis(1500));
        assert!((half - 0.5).abs() < 0.01);
        assert_eq!(m.progress(started + Duration::from_secs(10)), 1.0);
    }
}
