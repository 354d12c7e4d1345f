//! Transport primitives for document submissions.
//!
//! The module exposes [`DocumentTransport`] so downstream crates can swap in custom
//! HTTP clients without the submitter knowing anything beyond "POST these bytes, get a
//! status and a body back". The crate's default implementation wraps [`ReqwestClient`]
//! behind the `reqwest` feature.

// std
use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")] use reqwest::header::CONTENT_TYPE;
// self
use crate::{_prelude::*, error::TransmissionError};

/// Boxed future returned by [`DocumentTransport::post_json`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<TransportResponse, TransmissionError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of delivering a JSON request body.
///
/// This trait is the submitter's only dependency on an HTTP stack. Implementations must
/// issue a `POST` with `Content-Type: application/json`, return the endpoint's status
/// and raw body without interpreting either, and surface network failures as
/// [`TransmissionError::Network`]. Implementations must be `Send + Sync + 'static` so a
/// submitter can be shared across tasks without extra wrappers.
pub trait DocumentTransport
where
	Self: 'static + Send + Sync,
{
	/// Posts a JSON body to `url` and resolves with the endpoint's status and body.
	fn post_json(&self, url: &Url, body: Vec<u8>) -> TransportFuture<'_>;
}

/// Raw response surfaced by a [`DocumentTransport`].
///
/// Status interpretation (success vs. rejection) belongs to the submitter; the
/// transport only reports what the endpoint answered.
#[derive(Clone, Debug)]
pub struct TransportResponse {
	/// HTTP status code returned by the endpoint.
	pub status: u16,
	/// Raw response body.
	pub body: Vec<u8>,
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
/// Pass a custom [`ReqwestClient`] to reuse connection pools or proxy settings from the
/// embedding application.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl DocumentTransport for ReqwestTransport {
	fn post_json(&self, url: &Url, body: Vec<u8>) -> TransportFuture<'_> {
		let request =
			self.0.post(url.clone()).header(CONTENT_TYPE, "application/json").body(body);

		Box::pin(async move {
			let response = request.send().await.map_err(TransmissionError::from)?;
			let status = response.status().as_u16();
			let body = response.bytes().await.map_err(TransmissionError::from)?.to_vec();

			Ok(TransportResponse { status, body })
		})
	}
}
