//! Executes the core's plain-data requests over HTTP.

use anyhow::Context;
use todo_core::{HttpMethod, HttpRequest, HttpResponse};

pub struct Transport {
    agent: ureq::Agent,
}

impl Transport {
    pub fn new() -> Self {
        // 4xx/5xx come back as data; the core decides what they mean.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    pub fn execute(&self, req: HttpRequest) -> anyhow::Result<HttpResponse> {
        tracing::debug!(method = %req.method, url = %req.path, "sending request");
        let body = req.body.unwrap_or_default();
        let result = match req.method {
            HttpMethod::Get => self.agent.get(&req.path).call(),
            HttpMethod::Delete => self.agent.delete(&req.path).call(),
            HttpMethod::Post => self
                .agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            HttpMethod::Patch => self
                .agent
                .patch(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
        };
        let mut response =
            result.with_context(|| format!("request to {} failed", req.path))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .context("failed to read response body")?;
        tracing::debug!(status, "response received");
        Ok(HttpResponse::new(status, body))
    }
}
