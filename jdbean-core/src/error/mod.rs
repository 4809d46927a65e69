use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no usable cookies found in input (expected a devtools cookie table or a `name=value; ...` string)")]
    NoCookies,
}
