//! Simulated attendance check-in (QR scan and face recognition).
//!
//! Nothing here touches a real camera. A [`PermissionGate`] stands in for the
//! platform permission prompt, and a [`CheckinMachine`] drives the scan
//! through an asynchronous [`Verifier`] task.

mod machine;
mod permission;
mod verifier;

pub use machine::{CheckinKind, CheckinMachine, CheckinState};
pub use permission::{CameraPermission, PermissionGate, PermissionStatus, SimulatedCamera};
pub use verifier::{
    CheckinOutcome, FACE_SUBJECT, FaceVerifier, QR_SUBJECT, QrVerifier, Verifier, validate_qr_payload,
};
