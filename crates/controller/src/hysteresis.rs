//! Timed disambiguation windows.
//!
//! A channel being "armed" means a recent event is still allowed to
//! reinterpret a later one: a second Escape toggles dispatch, a key
//! following a naked modifier inherits its flag. The window closes only
//! when its timer fires — there is no polling.

use std::time::Duration;

use tracing::debug;

use crate::scheduler::{Scheduler, TimerId};

/// The two disambiguation channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Channel {
	/// Double-escape enable/disable toggle.
	Escape,
	/// Modifier-flag supplement for the key after a naked modifier.
	Modifier,
}

/// Debounce state shared by the two channels.
///
/// At most one channel is armed at a time: arming the other while one is
/// open is a no-op, re-arming the open one restarts its window.
#[derive(Debug)]
pub(crate) struct Hysteresis {
	window: Duration,
	armed: Option<(Channel, TimerId)>,
}

impl Hysteresis {
	pub(crate) fn new(window: Duration) -> Self {
		Self { window, armed: None }
	}

	pub(crate) fn set_window(&mut self, window: Duration) {
		self.window = window;
	}

	/// Arms a channel, restarting the window if that channel is already
	/// armed.
	pub(crate) fn arm<S: Scheduler>(&mut self, channel: Channel, scheduler: &mut S) {
		match self.armed {
			Some((active, _)) if active != channel => return,
			Some((_, timer)) => scheduler.cancel(timer),
			None => {}
		}
		let timer = scheduler.schedule(self.window);
		debug!(?channel, "hysteresis armed");
		self.armed = Some((channel, timer));
	}

	/// True while the channel's window is open.
	pub(crate) fn is_armed(&self, channel: Channel) -> bool {
		matches!(self.armed, Some((active, _)) if active == channel)
	}

	/// Handles a timer expiry. Stale ids — cancelled timers, or timers
	/// superseded by a re-arm — are ignored.
	pub(crate) fn timer_fired(&mut self, id: TimerId) {
		if matches!(self.armed, Some((_, timer)) if timer == id) {
			debug!("hysteresis window elapsed");
			self.armed = None;
		}
	}

	/// Cancels any open window.
	pub(crate) fn cancel<S: Scheduler>(&mut self, scheduler: &mut S) {
		if let Some((_, timer)) = self.armed.take() {
			scheduler.cancel(timer);
		}
	}
}

#[cfg(test)]
mod tests;
