use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use jdbean_core::CredentialSet;
use url::Url;

use crate::endpoints::{PageContext, BROWSER_HEADERS};
use crate::executor::http::{HttpClient, HttpError, HttpRequestParts, HttpResponseParts};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// An HTTP session carrying the fixed browser header set plus the current
/// cookie mapping.
pub struct SessionClient {
    http: Arc<dyn HttpClient>,
    timeout: Duration,
    cookie_header: String,
}

impl SessionClient {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self {
            http,
            timeout: DEFAULT_TIMEOUT,
            cookie_header: String::new(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the attached cookies wholesale. Must be called before every
    /// validation or sign-in run so nothing leaks across runs.
    pub fn set_credentials(&mut self, credentials: &CredentialSet) {
        self.cookie_header = credentials.to_cookie_header();
    }

    pub async fn get(
        &self,
        url: &str,
        page: PageContext,
    ) -> Result<HttpResponseParts, HttpError> {
        let req = HttpRequestParts {
            method: "GET".to_string(),
            url: parse_url(url)?,
            headers: self.headers_for(page),
            body: Vec::new(),
        };
        self.http.send(req, self.timeout).await
    }

    /// POST an `application/x-www-form-urlencoded` body.
    pub async fn post_form(
        &self,
        url: &str,
        page: PageContext,
        fields: &[(&str, &str)],
    ) -> Result<HttpResponseParts, HttpError> {
        let mut headers = self.headers_for(page);
        headers.insert(
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        );
        let req = HttpRequestParts {
            method: "POST".to_string(),
            url: parse_url(url)?,
            headers,
            body: encode_form(fields).into_bytes(),
        };
        self.http.send(req, self.timeout).await
    }

    fn headers_for(&self, page: PageContext) -> BTreeMap<String, String> {
        let mut headers: BTreeMap<String, String> = BROWSER_HEADERS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        headers.insert("Referer".to_string(), page.referer.to_string());
        headers.insert("Origin".to_string(), page.origin.to_string());
        if !self.cookie_header.is_empty() {
            headers.insert("Cookie".to_string(), self.cookie_header.clone());
        }
        headers
    }
}

fn parse_url(url: &str) -> Result<Url, HttpError> {
    Url::parse(url).map_err(|e| HttpError::Other(format!("invalid url {url}: {e}")))
}

fn encode_form(fields: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (name, value) in fields {
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str(&urlencoding::encode(name));
        out.push('=');
        out.push_str(&urlencoding::encode(value));
    }
    out
}
