//! Hardware key code wire table.
//!
//! Fixed mapping between raw key codes and the symbolic names used in key
//! tokens, with its inverse. This table is part of the compatibility
//! contract with existing binding declarations: entries are never renamed
//! or renumbered.

/// Shift key code.
pub const SHIFT: u32 = 16;
/// Ctrl key code.
pub const CTRL: u32 = 17;
/// Alt key code.
pub const ALT: u32 = 18;
/// Tab key code.
pub const TAB: u32 = 9;
/// Escape key code.
pub const ESC: u32 = 27;
/// Space key code.
pub const SPACE: u32 = 32;

/// Legacy Firefox artifact occasionally emitted for ctrl+alt+shift.
pub(crate) const MODIFIER_CLUSTER: u32 = 224;

const TABLE: &[(u32, &str)] = &[
	(CTRL, "CTRL"),
	(SHIFT, "SHIFT"),
	(ALT, "ALT"),
	(TAB, "TAB"),
	(ESC, "ESC"),
	(SPACE, "SPC"),
	(13, "RET"),
	(8, "BACKSPACE"),
	(46, "DEL"),
	(37, "LEFT"),
	(38, "UP"),
	(39, "RIGHT"),
	(40, "DOWN"),
	(36, "HOME"),
	(35, "END"),
	(33, "PGUP"),
	(34, "PGDOWN"),
	(112, "F1"),
	(113, "F2"),
	(114, "F3"),
	(115, "F4"),
	(116, "F5"),
	(117, "F6"),
	(118, "F7"),
	(119, "F8"),
	(120, "F9"),
	(121, "F10"),
	(122, "F11"),
	(123, "F12"),
];

/// Symbolic name for a special key code.
pub fn name_for(code: u32) -> Option<&'static str> {
	TABLE.iter().find(|(c, _)| *c == code).map(|(_, name)| *name)
}

/// Inverse lookup: key code for a symbolic name.
pub fn code_for(name: &str) -> Option<u32> {
	TABLE.iter().find(|(_, n)| *n == name).map(|(c, _)| *c)
}

/// True for the three naked modifier key codes.
pub fn is_modifier(code: u32) -> bool {
	matches!(code, SHIFT | CTRL | ALT)
}
