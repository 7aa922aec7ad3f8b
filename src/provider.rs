use anyhow::{Context, Result};
use bytes::Bytes;
use checkin_core::HttpRequest;
use http::{Request, Response};

/// Outbound HTTP for the proxy process.
#[derive(Clone, Debug)]
pub struct Provider {
    client: reqwest::Client,
}

impl Provider {
    /// Create a provider with a shared HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend cannot be initialised.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("checkin/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("building http client")?;
        Ok(Self { client })
    }
}

impl HttpRequest for Provider {
    async fn fetch(&self, request: Request<Bytes>) -> Result<Response<Bytes>> {
        let (parts, body) = request.into_parts();

        // errors must not carry the endpoint, it may hold credentials
        let response = self
            .client
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers)
            .body(body)
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("sending request")?;

        let mut builder = Response::builder().status(response.status());
        if let Some(headers) = builder.headers_mut() {
            headers.extend(response.headers().clone());
        }
        let body = response
            .bytes()
            .await
            .map_err(reqwest::Error::without_url)
            .context("reading response body")?;

        builder.body(body).context("building response")
    }
}
