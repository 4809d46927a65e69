pub mod client;
pub mod http;

pub use client::SessionClient;
pub use http::{HttpClient, HttpError, HttpRequestParts, HttpResponseParts, ReqwestHttpClient};
