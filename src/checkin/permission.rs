//! Camera permission gate.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Answer to the camera permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionStatus {
    /// Not answered yet (unrequested or in flight).
    #[default]
    Pending,
    Granted,
    /// Terminal for the screen; the only way out is back.
    Denied,
}

/// Source of camera permission answers.
pub trait CameraPermission: Send + Sync + 'static {
    /// Ask the platform for camera access. May block.
    fn request(&self) -> bool;
}

/// Camera that answers the prompt from configuration.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedCamera {
    pub granted: bool,
}

impl CameraPermission for SimulatedCamera {
    fn request(&self) -> bool {
        self.granted
    }
}

/// Tracks one outstanding permission request for a screen.
#[derive(Debug, Default)]
pub struct PermissionGate {
    status: PermissionStatus,
    rx: Option<mpsc::UnboundedReceiver<bool>>,
}

impl PermissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> PermissionStatus {
        self.status
    }

    /// A request has been made and not answered yet.
    pub fn is_pending(&self) -> bool {
        self.rx.is_some()
    }

    /// Start an asynchronous permission request. Any earlier request is dropped.
    pub fn request(&mut self, handle: &Handle, camera: Arc<dyn CameraPermission>, delay: Duration) {
        let (tx, rx) = mpsc::unbounded_channel();
        self.rx = Some(rx);
        self.status = PermissionStatus::Pending;

        handle.spawn(async move {
            tokio::time::sleep(delay).await;
            let granted = tokio::task::spawn_blocking(move || camera.request())
                .await
                .unwrap_or(false);
            let _ = tx.send(granted);
        });
    }

    /// Pick up the answer if it has arrived.
    pub fn poll(&mut self) -> PermissionStatus {
        if let Some(rx) = self.rx.as_mut() {
            match rx.try_recv() {
                Ok(granted) => {
                    self.status = if granted {
                        info!("Camera permission granted");
                        PermissionStatus::Granted
                    } else {
                        warn!("Camera permission denied");
                        PermissionStatus::Denied
                    };
                    self.rx = None;
                }
                Err(mpsc::error::TryRecvError::Empty) => {}
                Err(mpsc::error::TryRecvError::Disconnected) => {
                    warn!("Camera permission request dropped");
                    self.status = PermissionStatus::Denied;
                    self.rx = None;
                }
            }
        }
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn settle(gate: &mut PermissionGate) -> PermissionStatus {
        for _ in 0..50 {
            if !gate.is_pending() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
            gate.poll();
        }
        gate.status()
    }

    #[tokio::test]
    async fn test_granted_camera() {
        let mut gate = PermissionGate::new();
        assert_eq!(gate.poll(), PermissionStatus::Pending);

        gate.request(
            &Handle::current(),
            Arc::new(SimulatedCamera { granted: true }),
            Duration::ZERO,
        );
        assert_eq!(settle(&mut gate).await, PermissionStatus::Granted);
    }

    #[test]
    fn test_unrequested_gate_is_not_pending() {
        let mut gate = PermissionGate::new();
        assert!(!gate.is_pending());
        gate.poll();
        assert!(!gate.is_pending());
    }

    #[tokio::test]
    async fn test_denied_camera() {
        let mut gate = PermissionGate::new();
        gate.request(
            &Handle::current(),
            Arc::new(SimulatedCamera { granted: false }),
            Duration::ZERO,
        );
        assert_eq!(settle(&mut gate).await, PermissionStatus::Denied);
    }
}
