use crate::error::ParseError;
use crate::types::CredentialSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieFormat {
    /// Tab-separated table as copied from the browser devtools cookie pane.
    Table,
    /// `name=value; name2=value2` string as sent in a `Cookie` header.
    HeaderString,
}

impl CookieFormat {
    /// Heuristic: devtools tables always contain a TAB; header strings never
    /// do.
    pub fn detect(input: &str) -> CookieFormat {
        if input.contains('\t') {
            CookieFormat::Table
        } else {
            CookieFormat::HeaderString
        }
    }
}

/// Parse cookie text in either supported format, detecting which one.
pub fn parse_cookie_input(input: &str) -> Result<CredentialSet, ParseError> {
    match CookieFormat::detect(input) {
        CookieFormat::Table => parse_cookie_table(input),
        CookieFormat::HeaderString => parse_cookie_string(input),
    }
}

/// Parse a devtools cookie table: one cookie per line, columns separated by
/// TAB, the first two columns being name and value. Extra columns (domain,
/// path, expiry, ...) are ignored, as are blank or truncated lines.
pub fn parse_cookie_table(input: &str) -> Result<CredentialSet, ParseError> {
    let pairs = input.lines().filter_map(|line| {
        let mut cols = line.trim().split('\t');
        let name = cols.next()?.trim();
        let value = cols.next()?.trim();
        Some((name, value))
    });
    non_empty(CredentialSet::from_pairs(pairs))
}

/// Parse a `name=value; name2=value2` cookie-header string. Values may contain
/// `=`; only the first one separates name from value.
pub fn parse_cookie_string(input: &str) -> Result<CredentialSet, ParseError> {
    let pairs = input.split(';').filter_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        Some((name.trim(), value.trim()))
    });
    non_empty(CredentialSet::from_pairs(pairs))
}

fn non_empty(set: CredentialSet) -> Result<CredentialSet, ParseError> {
    if set.is_empty() {
        Err(ParseError::NoCookies)
    } else {
        Ok(set)
    }
}
