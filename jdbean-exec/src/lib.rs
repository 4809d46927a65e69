#![forbid(unsafe_code)]

//! Session validation and the retrying check-in sequencer.
//!
//! Everything network-facing goes through the [`executor::HttpClient`] trait so
//! tests can script the upstream.

pub mod endpoints;
pub mod executor;
pub mod retry;
pub mod session;
pub mod signin;

pub use crate::executor::{
    HttpClient, HttpError, HttpRequestParts, HttpResponseParts, ReqwestHttpClient, SessionClient,
};
pub use crate::retry::RetrySchedule;
pub use crate::session::is_authenticated;
pub use crate::signin::SignInSequencer;
