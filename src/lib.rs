//! Rate-gated client for the CRPT/ISMP document-registration API—typed document payloads,
//! fixed-window request throttling, and a pluggable transport seam in one crate.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod document;
pub mod envelope;
pub mod error;
pub mod gate;
pub mod obs;
pub mod submit;
pub mod transport;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::submit::{ReqwestSubmitter, Submitter};

	/// Builds a reqwest-backed submitter pointed at a test endpoint instead of the production
	/// documents-creation URL.
	pub fn build_test_submitter(
		endpoint: Url,
		window: Duration,
		capacity: usize,
	) -> ReqwestSubmitter {
		Submitter::new(window, capacity)
			.expect("Failed to build reqwest submitter for tests.")
			.with_endpoint(endpoint)
	}
}

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
		time::Duration,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use httpmock as _;
