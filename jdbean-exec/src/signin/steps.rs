//! Declarative step list for the primary check-in sequence.
//!
//! Step order and pacing mirror what the web client does; the server appears
//! to depend on the warm-up and simplified trigger happening before the
//! canonical call.

/// One step of the primary sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInStep {
    /// GET the bean landing page; response ignored beyond status.
    WarmUp,
    /// POST `queryBeanIndex`; short-circuits the attempt when the check-in
    /// already happened today.
    StatusQuery,
    /// Fire-and-forget GET of the simplified trigger; warms server-side state.
    SimpleTrigger,
    /// The canonical form-encoded `signBeanIndex` POST; its response decides
    /// the attempt.
    CanonicalTrigger,
}

impl SignInStep {
    /// Soft steps may fail (transport or parse) without aborting the attempt.
    pub fn is_soft(self) -> bool {
        !matches!(self, SignInStep::CanonicalTrigger)
    }

    /// Bounds (ms) of the pause after this step, jittered to mimic human
    /// pacing.
    pub fn pause_after_ms(self) -> (u64, u64) {
        match self {
            SignInStep::WarmUp | SignInStep::StatusQuery => (1000, 2000),
            SignInStep::SimpleTrigger => (1000, 1000),
            SignInStep::CanonicalTrigger => (0, 0),
        }
    }
}

pub const PRIMARY_SEQUENCE: [SignInStep; 4] = [
    SignInStep::WarmUp,
    SignInStep::StatusQuery,
    SignInStep::SimpleTrigger,
    SignInStep::CanonicalTrigger,
];
