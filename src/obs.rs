//! Optional observability helpers for the submission pipeline.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `ismp_client.submit` with the
//!   `doc_type` and `stage` (call site) fields.
//! - Enable `metrics` to increment the `ismp_client_submit_total` counter for every
//!   attempt/success/failure, labeled by `doc_type` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubmitOutcome {
	/// Entry to the submission pipeline.
	Attempt,
	/// The endpoint accepted the request.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl SubmitOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			SubmitOutcome::Attempt => "attempt",
			SubmitOutcome::Success => "success",
			SubmitOutcome::Failure => "failure",
		}
	}
}
impl Display for SubmitOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
