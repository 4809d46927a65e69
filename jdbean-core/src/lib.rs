#![forbid(unsafe_code)]

pub mod error;
pub mod parser;
pub mod types;

pub use crate::error::ParseError;
pub use crate::parser::{parse_cookie_input, parse_cookie_string, parse_cookie_table, CookieFormat};
pub use crate::types::{ActionOutcome, BonusKind, CredentialSet};
