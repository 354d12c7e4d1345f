//! Rate-gated submission pipeline for the documents-creation endpoint.
//!
//! [`Submitter::submit`] is safe to call from any number of concurrent tasks; the
//! shared [`RateGate`] bounds how many submissions reach the wire per window, blocking
//! surplus callers instead of rejecting them. A single call moves strictly forward
//! through acquire, format dispatch, encoding, and send; any failure is surfaced
//! as-is and never retried here.

// self
use crate::{
	_prelude::*,
	document::Document,
	envelope::Envelope,
	error::{ConfigError, EncodingError, TransmissionError},
	gate::RateGate,
	obs::{self, SubmitOutcome, SubmitSpan},
	transport::DocumentTransport,
};
#[cfg(feature = "reqwest")] use crate::transport::ReqwestTransport;

/// Fixed documents-creation endpoint of the production registry.
pub const DOCUMENTS_CREATE_URL: &str = "https://ismp.crpt.ru/api/v3/lk/documents/create";

#[cfg(feature = "reqwest")]
/// Submitter specialized for the crate's default reqwest transport.
pub type ReqwestSubmitter = Submitter<ReqwestTransport>;

/// Submits signed documents to the registry under fixed-window rate control.
///
/// The submitter owns the admission gate, the transport handle, and the endpoint URL.
/// It is intentionally fire-and-forget: a successful call means the endpoint accepted
/// the request with a 2xx status, and the response body is discarded. Retry policy,
/// response interpretation, and signature computation are caller concerns.
///
/// A permit is consumed the moment a call passes the gate and is never refunded, even
/// when the call later fails at format dispatch, encoding, or on the wire. The gate
/// meters attempts, not successes.
pub struct Submitter<T>
where
	T: ?Sized + DocumentTransport,
{
	/// Transport used for every outbound request.
	pub transport: Arc<T>,
	/// Admission gate bounding attempts per window.
	pub gate: RateGate,
	endpoint: Url,
}
impl<T> Submitter<T>
where
	T: ?Sized + DocumentTransport,
{
	/// Creates a submitter that reuses a caller-provided transport.
	///
	/// Must be called from within a Tokio runtime; the gate spawns its refill task
	/// here. Fails fast when `capacity` is zero or `window` is empty.
	pub fn with_transport(
		transport: impl Into<Arc<T>>,
		window: Duration,
		capacity: usize,
	) -> Result<Self> {
		let endpoint = Url::parse(DOCUMENTS_CREATE_URL)
			.map_err(|e| ConfigError::InvalidEndpoint { source: e })?;

		Ok(Self { transport: transport.into(), gate: RateGate::new(window, capacity)?, endpoint })
	}

	/// Replaces the documents-creation endpoint; mainly useful against mock servers.
	pub fn with_endpoint(mut self, endpoint: Url) -> Self {
		self.endpoint = endpoint;

		self
	}

	/// Returns the endpoint this submitter posts to.
	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}

	/// Submits one signed document, waiting on the gate when the window is exhausted.
	///
	/// `signature` is the caller's pre-computed detached signature; it is encoded
	/// verbatim and never validated here. See [`Error`](crate::error::Error) for the
	/// failure taxonomy; none of the failures are retried internally.
	pub async fn submit<P>(&self, document: &Document<P>, signature: &str) -> Result<()>
	where
		P: Serialize + Sync,
	{
		let doc_type = document.doc_type;
		let span = SubmitSpan::new(doc_type, "submit");

		obs::record_submit_outcome(doc_type, SubmitOutcome::Attempt);

		let result = span
			.instrument(async move {
				self.gate.acquire().await?;

				let envelope = Envelope::seal(document, signature)?;
				let body = serde_json::to_vec(&envelope)
					.map_err(|e| EncodingError::Envelope { source: e })?;
				let response = self.transport.post_json(&self.endpoint, body).await?;

				if !(200..300).contains(&response.status) {
					return Err(TransmissionError::Status {
						status: response.status,
						body: String::from_utf8_lossy(&response.body).into_owned(),
					}
					.into());
				}

				Ok(())
			})
			.await;

		match &result {
			Ok(_) => obs::record_submit_outcome(doc_type, SubmitOutcome::Success),
			Err(_) => obs::record_submit_outcome(doc_type, SubmitOutcome::Failure),
		}

		result
	}
}
#[cfg(feature = "reqwest")]
impl Submitter<ReqwestTransport> {
	/// Creates a submitter backed by a fresh reqwest client.
	///
	/// Use [`Submitter::with_transport`] to reuse an existing [`ReqwestClient`] or to
	/// plug in a custom transport.
	pub fn new(window: Duration, capacity: usize) -> Result<Self> {
		Self::with_transport(ReqwestTransport::default(), window, capacity)
	}
}
impl<T> Debug for Submitter<T>
where
	T: ?Sized + DocumentTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Submitter")
			.field("endpoint", &self.endpoint.as_str())
			.field("capacity", &self.gate.capacity())
			.field("window", &self.gate.window())
			.finish()
	}
}
