//! Client-level error types shared across the gate, envelope, and submission pipeline.

// self
use crate::{
	_prelude::*,
	document::{DocType, DocumentFormat},
};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
///
/// Every failure keeps its kind so callers can decide between retry and abort:
/// [`Error::Transmission`] and [`Error::Cancelled`] are retryable from the caller's side,
/// while [`Error::UnsupportedFormat`] and [`Error::Encoding`] are fatal for the given
/// document. The client itself never retries.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem raised at construction time.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// The document's type maps to a format this client cannot build a request for.
	#[error("Document type `{doc_type}` uses the unsupported `{format}` format.")]
	UnsupportedFormat {
		/// Document type whose format lookup failed.
		doc_type: DocType,
		/// Format the type resolved to.
		format: DocumentFormat,
	},
	/// Document or request body could not be serialized.
	#[error(transparent)]
	Encoding(#[from] EncodingError),
	/// Transport failure (network or non-2xx response).
	#[error(transparent)]
	Transmission(#[from] TransmissionError),
	/// The submission was cancelled while waiting for a rate permit.
	#[error("Submission was cancelled while waiting for a rate permit.")]
	Cancelled,
}

/// Configuration and validation failures raised at construction time.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Gate capacity must allow at least one request per window.
	#[error("Rate gate capacity must be a positive number of requests.")]
	NonPositiveCapacity,
	/// The refill window must be a non-zero duration.
	#[error("Rate gate window must be a non-zero duration.")]
	ZeroWindow,
	/// The documents-creation endpoint URL could not be parsed.
	#[error("Documents-creation endpoint URL is invalid.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// Serialization failures raised while building the request body.
#[derive(Debug, ThisError)]
pub enum EncodingError {
	/// The document could not be serialized to its canonical JSON form.
	#[error("Document could not be serialized to JSON.")]
	Document {
		/// Underlying serializer failure.
		#[source]
		source: serde_json::Error,
	},
	/// The request envelope could not be serialized.
	#[error("Request envelope could not be serialized to JSON.")]
	Envelope {
		/// Underlying serializer failure.
		#[source]
		source: serde_json::Error,
	},
}

/// Transport-level failures surfaced by the documents endpoint.
#[derive(Debug, ThisError)]
pub enum TransmissionError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the documents endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// The endpoint answered with a non-success status.
	#[error("Documents endpoint rejected the request with HTTP {status}.")]
	Status {
		/// HTTP status code returned by the endpoint.
		status: u16,
		/// Response body, decoded lossily for diagnostics.
		body: String,
	},
}
impl TransmissionError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransmissionError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
