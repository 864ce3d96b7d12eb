//! Deterministic scheduler driven by a manually advanced clock.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::{Scheduler, TimerId};

#[derive(Debug, Default)]
struct Inner {
	now: Duration,
	next_id: u64,
	pending: Vec<(TimerId, Duration)>,
}

/// Virtual-clock scheduler for tests.
///
/// Clones share one clock, so a test can keep a handle while the
/// controller owns another. Advancing the clock collects the timers whose
/// deadlines passed; the test feeds those ids back through
/// [`Controller::timer_fired`](crate::Controller::timer_fired), standing
/// in for the host event loop.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
	inner: Rc<RefCell<Inner>>,
}

impl ManualScheduler {
	/// Creates a scheduler with the clock at zero.
	pub fn new() -> Self {
		Self::default()
	}

	/// Moves the clock forward, returning fired timers in deadline order.
	pub fn advance(&self, by: Duration) -> Vec<TimerId> {
		let mut inner = self.inner.borrow_mut();
		inner.now += by;
		let now = inner.now;
		let mut fired: Vec<(TimerId, Duration)> =
			inner.pending.iter().copied().filter(|(_, deadline)| *deadline <= now).collect();
		inner.pending.retain(|(_, deadline)| *deadline > now);
		fired.sort_by_key(|(_, deadline)| *deadline);
		fired.into_iter().map(|(id, _)| id).collect()
	}

	/// Number of timers still pending.
	pub fn pending(&self) -> usize {
		self.inner.borrow().pending.len()
	}
}

impl Scheduler for ManualScheduler {
	fn schedule(&mut self, after: Duration) -> TimerId {
		let mut inner = self.inner.borrow_mut();
		let id = TimerId::from_raw(inner.next_id);
		inner.next_id += 1;
		let deadline = inner.now + after;
		inner.pending.push((id, deadline));
		id
	}

	fn cancel(&mut self, id: TimerId) {
		self.inner.borrow_mut().pending.retain(|(pending, _)| *pending != id);
	}
}
