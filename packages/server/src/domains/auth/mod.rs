// Shared-password credential and session gate
pub mod gate;

pub use gate::{AuthGate, GateDecision};
