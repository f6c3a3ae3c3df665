// Copyright 2025 Irreducible Inc.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	/// Thrown by the text-only entry points when handed anything but text.
	#[error("expected text input, but received {found}")]
	InvalidInputType { found: &'static str },
	/// Thrown when a character of text input does not fit in a single byte.
	#[error("character {character:?} at position {position} is outside the range 0..=255")]
	Encoding { character: char, position: usize },
}
