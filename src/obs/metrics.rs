// self
use crate::{document::DocType, obs::SubmitOutcome};

/// Records a submission outcome via the global metrics recorder (when enabled).
pub fn record_submit_outcome(doc_type: DocType, outcome: SubmitOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"ismp_client_submit_total",
			"doc_type" => doc_type.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (doc_type, outcome);
	}
}
