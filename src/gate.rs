//! Fixed-window admission gate bounding outbound request attempts.

// crates.io
use tokio::{
	sync::Semaphore,
	task::JoinHandle,
	time::{self, MissedTickBehavior},
};
// self
use crate::{_prelude::*, error::ConfigError};

/// Counting admission gate that allows at most `capacity` acquisitions per refill window.
///
/// The gate is a fixed-window limiter: a background task resets the permit pool to full
/// capacity once per window, regardless of how many permits were consumed. Permits never
/// accumulate across windows, and a burst at the very end of one window followed by
/// another at the start of the next is legal, so up to `2 x capacity` calls may pass in
/// a short span straddling a window boundary. That looseness is part of the contract;
/// this is deliberately not a token-bucket or sliding-window limiter.
///
/// [`RateGate::acquire`] never rejects a caller: it waits until the next refill when the
/// pool is exhausted. There is no non-blocking variant and no fairness guarantee among
/// waiters. The refill task runs for the lifetime of the gate; [`RateGate::shutdown`]
/// stops it early and fails all current and future waiters with [`Error::Cancelled`].
#[derive(Debug)]
pub struct RateGate {
	permits: Arc<Semaphore>,
	capacity: usize,
	window: Duration,
	refill: JoinHandle<()>,
}
impl RateGate {
	/// Creates a gate with a full permit pool and spawns its refill task.
	///
	/// Must be called from within a Tokio runtime. Fails fast with
	/// [`ConfigError`](crate::error::ConfigError) when `capacity` is zero or `window` is
	/// empty.
	pub fn new(window: Duration, capacity: usize) -> Result<Self> {
		if capacity == 0 {
			return Err(ConfigError::NonPositiveCapacity.into());
		}
		if window.is_zero() {
			return Err(ConfigError::ZeroWindow.into());
		}

		let permits = Arc::new(Semaphore::new(capacity));
		let refill = tokio::spawn(refill_loop(permits.clone(), capacity, window));

		Ok(Self { permits, capacity, window, refill })
	}

	/// Consumes one permit, waiting for the next refill when the pool is exhausted.
	///
	/// Permits are consumed permanently; only the refill task restores them. Returns
	/// [`Error::Cancelled`] when the gate has been shut down while waiting.
	pub async fn acquire(&self) -> Result<()> {
		match self.permits.acquire().await {
			Ok(permit) => {
				permit.forget();

				Ok(())
			},
			Err(_) => Err(Error::Cancelled),
		}
	}

	/// Stops the refill task and fails all current and future waiters with
	/// [`Error::Cancelled`].
	///
	/// Idempotent. The gate keeps honoring already-granted permits; it only stops
	/// admitting new work.
	pub fn shutdown(&self) {
		self.permits.close();
		self.refill.abort();
	}

	/// Returns the configured per-window capacity.
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Returns the configured refill window.
	pub fn window(&self) -> Duration {
		self.window
	}

	/// Returns the number of permits currently available.
	pub fn available(&self) -> usize {
		self.permits.available_permits()
	}
}
impl Drop for RateGate {
	fn drop(&mut self) {
		self.refill.abort();
	}
}

/// Resets the pool to full capacity once per window.
///
/// The reset is idempotent, not additive: only the missing permits are released, so the
/// pool never exceeds `capacity`. A concurrent `acquire` between the read and the
/// release can only leave the pool below capacity, never above it.
async fn refill_loop(permits: Arc<Semaphore>, capacity: usize, window: Duration) {
	let mut tick = time::interval(window);

	tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
	// The first tick of an interval completes immediately; the pool starts full.
	tick.tick().await;

	loop {
		tick.tick().await;

		let missing = capacity.saturating_sub(permits.available_permits());

		if missing > 0 {
			permits.add_permits(missing);
		}
	}
}
