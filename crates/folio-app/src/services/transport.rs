//! Contact form submission transport
//!
//! The trait separates the submission round trip from the form controller;
//! the engine only learns "delivered with status N" or "could not be
//! sent". Any HTTP response, 2xx or not, is a delivery; only transport-level
//! failures surface as errors.

use folio_core::prelude::*;
use folio_core::types::FormValues;
use url::Url;

use crate::page::FormEndpoint;

/// Receipt for a delivered submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub status: u16,
}

impl SubmitReceipt {
    /// HTTP-level success: any 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Form submission operations
#[trait_variant::make(Transport: Send)]
pub trait LocalTransport {
    /// Send the field set to the endpoint the form is configured with.
    ///
    /// Returns `Ok` for every HTTP response regardless of status; `Err`
    /// only when the request could not be sent or received.
    async fn submit(&self, endpoint: &FormEndpoint, values: &FormValues) -> Result<SubmitReceipt>;
}

/// Transport over an HTTP client
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    async fn submit(&self, endpoint: &FormEndpoint, values: &FormValues) -> Result<SubmitReceipt> {
        let url = Url::parse(&endpoint.action)
            .map_err(|e| Error::invalid_endpoint(format!("{}: {e}", endpoint.action)))?;
        let method = reqwest::Method::from_bytes(endpoint.method.to_uppercase().as_bytes())
            .map_err(|_| Error::invalid_endpoint(format!("method {}", endpoint.method)))?;

        debug!(%url, method = %method, "submitting contact form");

        let response = self
            .client
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(values)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        Ok(SubmitReceipt {
            status: response.status().as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_success_range() {
        assert!(SubmitReceipt { status: 200 }.is_success());
        assert!(SubmitReceipt { status: 204 }.is_success());
        assert!(!SubmitReceipt { status: 302 }.is_success());
        assert!(!SubmitReceipt { status: 500 }.is_success());
    }
}
