//! Raw and normalized key events.

use chord_parser::{KeyToken, Modifiers};

use crate::keycodes;

/// Hardware phase that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventPhase {
	/// Key-down: special keys and any Ctrl/Alt combination.
	KeyDown,
	/// Key-press: printable text input.
	KeyPress,
}

/// One raw key event as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawKeyEvent {
	/// Raw key code.
	pub key_code: u32,
	/// Character code; `None` when the host engine does not set one at
	/// all (some engines only report key codes).
	pub char_code: Option<u32>,
	/// Whether Ctrl was reported held.
	pub ctrl: bool,
	/// Whether Alt was reported held.
	pub alt: bool,
	/// Whether Shift was reported held.
	pub shift: bool,
}

impl RawKeyEvent {
	/// Event carrying only a key code, no character information.
	pub fn key(key_code: u32) -> Self {
		Self {
			key_code,
			char_code: None,
			ctrl: false,
			alt: false,
			shift: false,
		}
	}

	/// Returns a copy with Ctrl reported held.
	pub fn ctrl(self) -> Self {
		Self { ctrl: true, ..self }
	}

	/// Returns a copy with Alt reported held.
	pub fn alt(self) -> Self {
		Self { alt: true, ..self }
	}

	/// Returns a copy with Shift reported held.
	pub fn shift(self) -> Self {
		Self { shift: true, ..self }
	}

	/// Returns a copy with the given character code.
	pub fn with_char(self, char_code: u32) -> Self {
		Self {
			char_code: Some(char_code),
			..self
		}
	}
}

/// Normalized key event handed to the registered receiver.
///
/// The controller owns a single scratch instance and overwrites it on
/// every accepted event, so receivers must finish with the reference —
/// or copy it — before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedEvent {
	/// Modifier flags, after any hysteresis supplement.
	pub modifiers: Modifiers,
	/// Raw key code from the hardware event.
	pub key_code: u32,
	/// Raw character code, present only for text events.
	pub char_code: Option<u32>,
	/// Resolved printable character, if any.
	pub chr: Option<char>,
	/// True for printable text, false for special keys.
	pub is_text: bool,
	/// Hardware phase that produced the event.
	pub phase: EventPhase,
}

impl NormalizedEvent {
	pub(crate) fn blank() -> Self {
		Self {
			modifiers: Modifiers::NONE,
			key_code: 0,
			char_code: None,
			chr: None,
			is_text: false,
			phase: EventPhase::KeyDown,
		}
	}

	/// Overwrites the scratch state from a raw event.
	pub(crate) fn reset_from(&mut self, raw: &RawKeyEvent, phase: EventPhase) {
		self.modifiers = Modifiers {
			ctrl: raw.ctrl,
			alt: raw.alt,
			shift: raw.shift,
		};
		self.key_code = raw.key_code;
		self.char_code = None;
		self.chr = None;
		self.is_text = false;
		self.phase = phase;
	}

	/// Canonical token text for this event.
	///
	/// Letters are always lowercased whether Shift is held or not; the
	/// shift state lives in the `S-` prefix. Agrees with the descriptor
	/// grammar for every token either side can produce.
	pub fn token(&self) -> KeyToken {
		let symbol = if let Some(chr) = self.chr {
			chr.to_lowercase().to_string()
		} else if let Some(name) = keycodes::name_for(self.key_code) {
			name.to_string()
		} else {
			let code = if self.key_code != 0 {
				self.key_code
			} else {
				self.char_code.unwrap_or(0)
			};
			char::from_u32(code).map(|c| c.to_lowercase().to_string()).unwrap_or_default()
		};
		KeyToken::compose(self.modifiers, &symbol)
	}
}
