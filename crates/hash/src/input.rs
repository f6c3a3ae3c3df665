// Copyright 2025 Irreducible Inc.

//! Tagged input accepted by the text-oriented entry points.
//!
//! Text is hashed with a narrow encoding: every character must have a code point in `0..=255`
//! and contributes exactly that one byte. This is *not* UTF-8; `"é"` hashes as the single byte
//! `0xe9`. Raw bytes never go through this conversion.

use std::borrow::Cow;

use rmd160_utils::ensure;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
	Text(&'a str),
	Bytes(&'a [u8]),
}

impl<'a> Input<'a> {
	/// Short name of the variant, used in error messages.
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::Text(_) => "text",
			Self::Bytes(_) => "bytes",
		}
	}

	/// The bytes this input contributes to a hash.
	pub fn to_bytes(&self) -> Result<Cow<'a, [u8]>, Error> {
		match *self {
			Self::Text(text) => narrow_bytes(text),
			Self::Bytes(bytes) => Ok(Cow::Borrowed(bytes)),
		}
	}
}

impl<'a> From<&'a str> for Input<'a> {
	fn from(text: &'a str) -> Self {
		Self::Text(text)
	}
}

impl<'a> From<&'a String> for Input<'a> {
	fn from(text: &'a String) -> Self {
		Self::Text(text)
	}
}

impl<'a> From<&'a [u8]> for Input<'a> {
	fn from(bytes: &'a [u8]) -> Self {
		Self::Bytes(bytes)
	}
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
	fn from(bytes: &'a [u8; N]) -> Self {
		Self::Bytes(bytes)
	}
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
	fn from(bytes: &'a Vec<u8>) -> Self {
		Self::Bytes(bytes)
	}
}

/// Encode `text` one byte per character.
///
/// ASCII text is returned borrowed. Fails on the first character above `U+00FF`.
pub fn narrow_bytes(text: &str) -> Result<Cow<'_, [u8]>, Error> {
	if text.is_ascii() {
		return Ok(Cow::Borrowed(text.as_bytes()));
	}

	let mut bytes = Vec::with_capacity(text.len());
	for (position, character) in text.chars().enumerate() {
		ensure!(u32::from(character) <= 0xff, Error::Encoding { character, position });
		bytes.push(character as u8);
	}
	Ok(Cow::Owned(bytes))
}
