mod credentials;
mod outcome;

pub use credentials::{CredentialSet, WELL_KNOWN_AUTH_COOKIES};
pub use outcome::{ActionOutcome, BonusKind};
