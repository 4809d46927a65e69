#![allow(dead_code)]

use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use jdbean_core::parse_cookie_string;
use jdbean_exec::{HttpClient, HttpError, HttpRequestParts, HttpResponseParts, SessionClient};

pub fn ok(status: u16, body: &str) -> Result<HttpResponseParts, HttpError> {
    Ok(HttpResponseParts {
        status,
        headers: BTreeMap::new(),
        body: body.as_bytes().to_vec(),
    })
}

/// Fake transport that routes requests by endpoint and `functionId`, records
/// every request, and serves canonical-trigger responses from a queue (the
/// last entry is reused once the queue runs down to one).
pub struct ScriptedHttpClient {
    pub status_response: Result<HttpResponseParts, HttpError>,
    pub sign_responses: Mutex<VecDeque<Result<HttpResponseParts, HttpError>>>,
    pub fallback_response: Result<HttpResponseParts, HttpError>,
    pub home_response: Result<HttpResponseParts, HttpError>,
    pub islogin_response: Result<HttpResponseParts, HttpError>,
    pub warmup_response: Result<HttpResponseParts, HttpError>,
    pub requests: Mutex<Vec<String>>,
}

impl Default for ScriptedHttpClient {
    fn default() -> Self {
        Self {
            status_response: ok(200, "{}"),
            sign_responses: Mutex::new(VecDeque::new()),
            fallback_response: ok(200, "{}"),
            home_response: ok(302, ""),
            islogin_response: ok(200, r#"{"islogin":"0"}"#),
            warmup_response: ok(200, ""),
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl ScriptedHttpClient {
    pub fn queue_sign(&self, resp: Result<HttpResponseParts, HttpError>) {
        self.sign_responses.lock().unwrap().push_back(resp);
    }

    pub fn count(&self, label: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.as_str() == label)
            .count()
    }

    pub fn request_labels(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn label(req: &HttpRequestParts) -> &'static str {
        if req.method == "POST" {
            let body = String::from_utf8_lossy(&req.body).into_owned();
            if body.contains("functionId=queryBeanIndex") {
                "status-query"
            } else if body.contains("functionId=signBeanIndex") {
                "canonical-trigger"
            } else if body.contains("functionId=signBeanAct") {
                "fallback-trigger"
            } else {
                "post-other"
            }
        } else {
            let url = req.url.as_str();
            if url.contains("signIndex.action") {
                "warm-up"
            } else if url.contains("functionId=signBeanIndex") {
                "simple-trigger"
            } else if url.contains("newhome") {
                "account-home"
            } else if url.contains("islogin") {
                "islogin"
            } else {
                "get-other"
            }
        }
    }
}

#[async_trait]
impl HttpClient for ScriptedHttpClient {
    async fn send(
        &self,
        req: HttpRequestParts,
        _timeout: Duration,
    ) -> Result<HttpResponseParts, HttpError> {
        let label = Self::label(&req);
        self.requests.lock().unwrap().push(label.to_string());
        match label {
            "status-query" => self.status_response.clone(),
            "canonical-trigger" => {
                let mut queue = self.sign_responses.lock().unwrap();
                if queue.len() > 1 {
                    queue.pop_front().unwrap()
                } else {
                    queue.front().cloned().unwrap_or_else(|| ok(200, "{}"))
                }
            }
            "fallback-trigger" => self.fallback_response.clone(),
            "account-home" => self.home_response.clone(),
            "islogin" => self.islogin_response.clone(),
            "warm-up" => self.warmup_response.clone(),
            _ => ok(200, ""),
        }
    }
}

/// A session client over the scripted transport with plausible credentials
/// attached.
pub fn session_client(http: Arc<ScriptedHttpClient>) -> SessionClient {
    let mut client = SessionClient::new(http);
    client.set_credentials(&parse_cookie_string("pt_key=test_key; pt_pin=test_user").unwrap());
    client
}
