// std
use std::{sync::Arc, time::Duration};
// crates.io
use tokio::time::{Instant, timeout};
// self
use ismp_client::{error::Error, gate::RateGate};

const WINDOW: Duration = Duration::from_secs(1);

#[tokio::test(start_paused = true)]
async fn full_capacity_is_available_immediately_after_construction() {
	let gate = RateGate::new(WINDOW, 3).expect("Gate fixture should build successfully.");

	for _ in 0..3 {
		timeout(Duration::from_millis(10), gate.acquire())
			.await
			.expect("Acquire within capacity should not block.")
			.expect("Acquire within capacity should succeed.");
	}

	assert!(
		timeout(Duration::from_millis(10), gate.acquire()).await.is_err(),
		"Acquire beyond capacity must block until the next refill.",
	);
}

#[tokio::test(start_paused = true)]
async fn exhausted_gate_unblocks_at_the_next_refill() {
	let gate = RateGate::new(WINDOW, 5).expect("Gate fixture should build successfully.");

	for _ in 0..5 {
		timeout(Duration::from_millis(10), gate.acquire())
			.await
			.expect("Acquire within capacity should not block.")
			.expect("Acquire within capacity should succeed.");
	}

	let start = Instant::now();

	gate.acquire().await.expect("Blocked acquire should succeed after the refill.");

	assert!(
		start.elapsed() >= Duration::from_millis(900),
		"Sixth acquire should have waited roughly one full window, waited {:?}.",
		start.elapsed(),
	);
}

#[tokio::test(start_paused = true)]
async fn refill_resets_to_capacity_and_never_accumulates() {
	let gate = RateGate::new(Duration::from_millis(100), 2)
		.expect("Gate fixture should build successfully.");

	gate.acquire().await.expect("First acquire should succeed immediately.");

	// Several idle windows pass; the pool must sit at capacity, not capacity per window.
	tokio::time::sleep(Duration::from_millis(350)).await;

	assert_eq!(gate.available(), 2, "Refill must reset to capacity, never above it.");

	for _ in 0..2 {
		timeout(Duration::from_millis(10), gate.acquire())
			.await
			.expect("Acquire within capacity should not block.")
			.expect("Acquire within capacity should succeed.");
	}

	assert!(
		timeout(Duration::from_millis(10), gate.acquire()).await.is_err(),
		"Permits from prior windows must not carry over.",
	);
}

#[tokio::test(start_paused = true)]
async fn shutdown_unblocks_parked_waiters_with_cancelled() {
	let gate =
		Arc::new(RateGate::new(WINDOW, 1).expect("Gate fixture should build successfully."));

	gate.acquire().await.expect("First acquire should succeed immediately.");

	let waiter = {
		let gate = gate.clone();

		tokio::spawn(async move { gate.acquire().await })
	};

	// Let the waiter park on the exhausted gate before shutting down.
	tokio::time::sleep(Duration::from_millis(10)).await;
	gate.shutdown();

	let err = waiter
		.await
		.expect("Waiter task should not panic.")
		.expect_err("Parked waiter should be unblocked with a cancellation.");

	assert!(matches!(err, Error::Cancelled));
}

#[tokio::test(start_paused = true)]
async fn concurrent_waiters_all_pass_across_refills() {
	let gate = Arc::new(
		RateGate::new(Duration::from_millis(100), 2)
			.expect("Gate fixture should build successfully."),
	);
	let waiters: Vec<_> = (0..6)
		.map(|_| {
			let gate = gate.clone();

			tokio::spawn(async move { gate.acquire().await })
		})
		.collect();

	for waiter in waiters {
		waiter
			.await
			.expect("Waiter task should not panic.")
			.expect("Every waiter should eventually pass the gate.");
	}
}
