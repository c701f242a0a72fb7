use std::time::Duration;

use reqwest::{Client, Method, Response};
use tracing::{debug, warn};

use crate::error::{Error, Result};

pub(crate) mod content_type;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// One shared connection handle per client; each call still issues a single request.
pub(crate) fn build_client(base_url: &str, timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder()
        .http1_only()
        .user_agent(APP_USER_AGENT)
        .gzip(true);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|error| Error::configuration(base_url, error.to_string()))
}

pub(crate) fn transport_error(method: Method, url: &str, source: reqwest::Error) -> Error {
    warn!(target: "twdb", %method, url, error = %source, "request failed");
    Error::Transport {
        method,
        url: url.to_string(),
        source,
    }
}

pub(crate) const UNREADABLE_BODY: &str = "<unreadable body>";

/// Turn an unexpected response into an error, keeping the body for diagnostics.
pub(crate) async fn status_error(method: Method, url: &str, response: Response) -> Error {
    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(error) => {
            debug!(target: "twdb", %method, url, %error, "unable to read error response body");
            UNREADABLE_BODY.to_string()
        }
    };
    warn!(target: "twdb", %method, url, %status, "unexpected response status");
    Error::Status {
        method,
        url: url.to_string(),
        status,
        body,
    }
}
