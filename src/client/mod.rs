//! HTTP client for the `/nanopublication` resource of a TWDB server.

mod urls;


use reqwest::{Client, Method, StatusCode, Url, header};
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::content_type::{accept, content_type};
use crate::http::{build_client, status_error, transport_error};
use crate::nanopub::{Nanopublication, RdfFormat};

pub use self::urls::nanopublication_url;

#[derive(Clone, Debug)]
pub struct TwdbClient {
    collection_url: String,
    format: RdfFormat,
    http: Client,
}

impl TwdbClient {
    /// Client for `base_url` with the default settings.
    pub fn new(base_url: &str) -> Result<TwdbClient> {
        TwdbClient::from_config(&ClientConfig {
            server_base_url: base_url.to_string(),
            ..ClientConfig::default()
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<TwdbClient> {
        let base_url = config.server_base_url.as_str();
        validate_base_url(base_url)?;
        Ok(TwdbClient {
            collection_url: urls::collection_url(base_url),
            format: config.format,
            http: build_client(base_url, config.timeout())?,
        })
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    pub fn format(&self) -> RdfFormat {
        self.format
    }

    /// Fetch a nanopublication by URI. `Ok(None)` means the server has no such nanopublication.
    pub async fn get_nanopublication(&self, uri: &str) -> Result<Option<Nanopublication>> {
        let url = self.nanopublication_url(uri)?;
        debug!(target: "twdb", %url, "GET nanopublication");
        let response = self
            .http
            .get(&url)
            .header(header::ACCEPT, accept(self.format))
            .send()
            .await
            .map_err(|source| transport_error(Method::GET, &url, source))?;
        match response.status() {
            StatusCode::OK => {
                let body = response
                    .bytes()
                    .await
                    .map_err(|source| transport_error(Method::GET, &url, source))?;
                Nanopublication::parse(&body, self.format).map(Some)
            }
            StatusCode::NOT_FOUND => {
                info!(target: "twdb", uri, "nanopublication not found");
                Ok(None)
            }
            _ => Err(status_error(Method::GET, &url, response).await),
        }
    }

    /// Upload a nanopublication to the collection root. The server reads the
    /// nanopublication URI from the document itself.
    pub async fn put_nanopublication(&self, nanopublication: &Nanopublication) -> Result<()> {
        let body = nanopublication.serialize(self.format)?;
        let url = self.collection_url.as_str();
        debug!(target: "twdb", url, uri = nanopublication.uri(), "PUT nanopublication");
        let response = self
            .http
            .put(url)
            .header(header::CONTENT_TYPE, content_type(self.format))
            .body(body)
            .send()
            .await
            .map_err(|source| transport_error(Method::PUT, url, source))?;
        if !response.status().is_success() {
            return Err(status_error(Method::PUT, url, response).await);
        }
        Ok(())
    }

    /// Delete a nanopublication by URI. Returns `false` if it did not exist.
    pub async fn delete_nanopublication(&self, uri: &str) -> Result<bool> {
        let url = self.nanopublication_url(uri)?;
        debug!(target: "twdb", %url, "DELETE nanopublication");
        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|source| transport_error(Method::DELETE, &url, source))?;
        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => {
                info!(target: "twdb", uri, "nanopublication not found");
                Ok(false)
            }
            _ => Err(status_error(Method::DELETE, &url, response).await),
        }
    }

    fn nanopublication_url(&self, uri: &str) -> Result<String> {
        if uri.is_empty() {
            return Err(Error::EmptyIdentifier);
        }
        Ok(nanopublication_url(&self.collection_url, uri))
    }
}

/// The base URL is used as a plain prefix, so it must already be in its final shape.
fn validate_base_url(base_url: &str) -> Result<()> {
    if base_url.is_empty() {
        return Err(Error::configuration(base_url, "must not be empty"));
    }
    let url =
        Url::parse(base_url).map_err(|error| Error::configuration(base_url, error.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::configuration(base_url, "scheme must be http or https"));
    }
    if base_url.ends_with('/') {
        return Err(Error::configuration(base_url, "must not end with a slash"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(Error::configuration(
            base_url,
            "must not carry a query or fragment",
        ));
    }
    Ok(())
}
