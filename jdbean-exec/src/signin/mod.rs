//! The check-in sequence: primary multi-step protocol, retry loop, and the
//! single-shot fallback.

pub mod classify;
pub mod fallback;
mod sequencer;
pub mod steps;

pub use sequencer::SignInSequencer;
