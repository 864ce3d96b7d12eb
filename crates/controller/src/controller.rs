//! The event controller: gates, repairs, and dispatches raw key events.

use std::time::Duration;

use tracing::debug;

use crate::event::{EventPhase, NormalizedEvent, RawKeyEvent};
use crate::hysteresis::{Channel, Hysteresis};
use crate::keycodes;
use crate::scheduler::{Scheduler, TimerId};

/// Default disambiguation window.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(250);

/// Host-engine quirk switches.
///
/// The controller is engine-agnostic; hosts that know their engine's
/// misbehaviors opt into the corresponding repairs here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Quirks {
	/// Discard key-press events whose character and key codes disagree.
	/// Some engines (WebKit 3.x era) deliver such events as spurious
	/// duplicates of the preceding key-down.
	pub char_key_mismatch: bool,
}

type Receiver = Box<dyn FnMut(&NormalizedEvent)>;

/// Converts raw host key events into normalized, token-ready events.
///
/// One instance per attachment; all state — the scratch event, the
/// enabled flag, the disambiguation windows — lives here. Hosts call
/// [`key_down`](Self::key_down) and [`key_press`](Self::key_press) in
/// arrival order and report timer expiry through
/// [`timer_fired`](Self::timer_fired). Handlers return `true` when the
/// event was dispatched and the host should suppress its default action.
pub struct Controller<S: Scheduler> {
	scheduler: S,
	receiver: Option<Receiver>,
	evt: NormalizedEvent,
	quirks: Quirks,
	attached: bool,
	disabled: bool,
	hysteresis: Hysteresis,
	/// Key code of the previous key-down.
	prev_code: Option<u32>,
	/// Copy of `prev_code` taken at key-down time for the key-press that
	/// follows it.
	prev_for_press: Option<u32>,
	/// Key code the last accepted key-down handled.
	key_down_code: Option<u32>,
}

impl<S: Scheduler> Controller<S> {
	/// Creates a detached controller with the default window.
	pub fn new(scheduler: S) -> Self {
		Self {
			scheduler,
			receiver: None,
			evt: NormalizedEvent::blank(),
			quirks: Quirks::default(),
			attached: false,
			disabled: false,
			hysteresis: Hysteresis::new(DEFAULT_WINDOW),
			prev_code: None,
			prev_for_press: None,
			key_down_code: None,
		}
	}

	/// Sets the receiver for accepted events, replacing any previous one.
	pub fn register(&mut self, receiver: impl FnMut(&NormalizedEvent) + 'static) {
		self.receiver = Some(Box::new(receiver));
	}

	/// Sets the disambiguation window for both channels.
	pub fn set_window(&mut self, window: Duration) {
		self.hysteresis.set_window(window);
	}

	/// Opts into host-engine quirk repairs.
	pub fn set_quirks(&mut self, quirks: Quirks) {
		self.quirks = quirks;
	}

	/// Suppresses dispatch without detaching. Same flag the double-escape
	/// gesture toggles.
	pub fn disable(&mut self) {
		self.disabled = true;
	}

	/// Resumes dispatch.
	pub fn enable(&mut self) {
		self.disabled = false;
	}

	/// Whether dispatch is currently enabled.
	pub fn is_enabled(&self) -> bool {
		!self.disabled
	}

	/// Binds to the host event source: events are processed from now on.
	pub fn attach(&mut self) {
		self.attached = true;
	}

	/// Unbinds from the host event source. Idempotent; cancels any open
	/// disambiguation window so nothing fires after detach.
	pub fn detach(&mut self) {
		self.attached = false;
		self.hysteresis.cancel(&mut self.scheduler);
		self.prev_code = None;
		self.prev_for_press = None;
		self.key_down_code = None;
	}

	/// Whether the controller is attached.
	pub fn is_attached(&self) -> bool {
		self.attached
	}

	/// Reports that a scheduled timer fired. Stale ids are ignored.
	pub fn timer_fired(&mut self, id: TimerId) {
		self.hysteresis.timer_fired(id);
	}

	/// Processes a raw key-down event.
	///
	/// Key-down carries the special keys and every Ctrl/Alt combination;
	/// plain printable keys fall through to the key-press phase.
	pub fn key_down(&mut self, raw: RawKeyEvent) -> bool {
		if !self.attached {
			return false;
		}

		let prev_code = self.prev_code;
		self.prev_for_press = prev_code;
		self.prev_code = Some(raw.key_code);
		self.key_down_code = None;

		// A naked modifier press is never forwarded; it opens the window
		// that lets the next key inherit the flag the host may drop.
		if keycodes::is_modifier(raw.key_code) {
			self.hysteresis.arm(Channel::Modifier, &mut self.scheduler);
			return false;
		}
		if raw.key_code == keycodes::MODIFIER_CLUSTER {
			return false;
		}

		if self.apply_escape_hysteresis(raw.key_code, prev_code) {
			return false;
		}

		if self.disabled {
			return false;
		}

		// Without Ctrl/Alt, anything outside the special table arrives
		// again as a key-press carrying the printable character.
		if !raw.alt && !raw.ctrl && keycodes::name_for(raw.key_code).is_none() {
			return false;
		}

		self.key_down_code = Some(raw.key_code);
		self.evt.reset_from(&raw, EventPhase::KeyDown);
		self.apply_modifier_hysteresis(prev_code);
		self.dispatch();
		true
	}

	/// Processes a raw key-press event.
	///
	/// Accepts printable text and discards everything the key-down phase
	/// already covered or that the host engine emits spuriously.
	pub fn key_press(&mut self, raw: RawKeyEvent) -> bool {
		if !self.attached || self.disabled {
			return false;
		}

		let key_down_code = self.key_down_code.take();
		let prev_code = self.prev_for_press.take();

		if raw.alt || raw.ctrl {
			return false;
		}
		// Keys like F1 reach this phase with an explicit zero char code.
		if raw.char_code == Some(0) {
			return false;
		}

		let char_code = raw.char_code.unwrap_or(raw.key_code);

		// The "f2/q problem": a key-press echoing the key code the
		// preceding key-down already handled.
		if key_down_code == Some(raw.key_code) {
			return false;
		}

		if self.quirks.char_key_mismatch && raw.char_code != Some(raw.key_code) {
			return false;
		}

		// Space arrives as the (32, 0) key-down, already dispatched as
		// SPC; the (0, 32) key-press half is dropped.
		if raw.char_code == Some(keycodes::SPACE) {
			return false;
		}

		// Some engines deliver modifier releases, Escape and Tab as
		// their own key-press events; all are key-down territory.
		if raw.key_code != 0
			&& matches!(
				raw.key_code,
				keycodes::SHIFT | keycodes::CTRL | keycodes::ALT | keycodes::ESC | keycodes::TAB
			) {
			return false;
		}

		self.evt.reset_from(&raw, EventPhase::KeyPress);
		self.evt.is_text = true;
		self.evt.char_code = Some(char_code);
		self.evt.chr = char::from_u32(char_code);
		self.apply_modifier_hysteresis(prev_code);
		self.dispatch();
		true
	}

	/// Double-escape handling. Returns true when the event was consumed
	/// by the toggle; arming alone leaves the event to normal processing,
	/// so a lone Escape still dispatches.
	fn apply_escape_hysteresis(&mut self, key_code: u32, prev_code: Option<u32>) -> bool {
		if key_code != keycodes::ESC {
			return false;
		}
		if prev_code == Some(keycodes::ESC) && self.hysteresis.is_armed(Channel::Escape) {
			self.disabled = !self.disabled;
			debug!(enabled = !self.disabled, "double escape toggled dispatch");
			return true;
		}
		self.hysteresis.arm(Channel::Escape, &mut self.scheduler);
		false
	}

	/// Forces the modifier flag onto the scratch event when the
	/// immediately preceding key-down was that modifier and its window is
	/// still open. Repairs hosts that drop the flag from the companion
	/// key's event; only a single modifier can be supplemented this way.
	fn apply_modifier_hysteresis(&mut self, prev_code: Option<u32>) {
		if !self.hysteresis.is_armed(Channel::Modifier) {
			return;
		}
		match prev_code {
			Some(keycodes::SHIFT) => self.evt.modifiers.shift = true,
			Some(keycodes::CTRL) => self.evt.modifiers.ctrl = true,
			Some(keycodes::ALT) => self.evt.modifiers.alt = true,
			_ => {}
		}
	}

	fn dispatch(&mut self) {
		if tracing::enabled!(tracing::Level::DEBUG) {
			debug!(token = %self.evt.token(), phase = ?self.evt.phase, "dispatching key event");
		}
		if let Some(receiver) = self.receiver.as_mut() {
			receiver(&self.evt);
		}
	}
}

impl<S: Scheduler> Drop for Controller<S> {
	fn drop(&mut self) {
		self.hysteresis.cancel(&mut self.scheduler);
	}
}
