// Copyright 2023-2025 Irreducible Inc.

//! One-shot entry points.

use tracing::{debug, instrument};

use crate::{Error, Input, Ripemd160, DIGEST_SIZE};

/// RIPEMD-160 of `data`.
pub fn digest(data: &[u8]) -> [u8; DIGEST_SIZE] {
	Ripemd160::with_prefix(data).digest()
}

/// Lowercase hex RIPEMD-160 of `data`.
pub fn hexdigest(data: &[u8]) -> String {
	Ripemd160::with_prefix(data).hexdigest()
}

/// Hash text and return the lowercase hex digest.
///
/// Only text is accepted; it is encoded one byte per character (see [`crate::input`]). Raw
/// bytes are rejected with [`Error::InvalidInputType`], use [`hexdigest`] for those.
///
/// ```
/// assert_eq!(
/// 	rmd160_hash::hash("hello world").unwrap(),
/// 	"98c615784ccb5fe5936fbc0cbe9dfdb408d92f0f"
/// );
/// assert!(rmd160_hash::hash(b"hello world").is_err());
/// ```
///
/// Values that are neither text nor bytes do not convert into [`Input`] at all:
///
/// ```compile_fail
/// let _ = rmd160_hash::hash(123);
/// ```
#[instrument(skip_all, level = "debug")]
pub fn hash<'a>(input: impl Into<Input<'a>>) -> Result<String, Error> {
	match input.into() {
		text @ Input::Text(_) => {
			let bytes = text
				.to_bytes()
				.inspect_err(|err| debug!(%err, "rejecting text input"))?;
			Ok(hexdigest(&bytes))
		}
		other => {
			let found = other.type_name();
			debug!(found, "rejecting non-text input");
			Err(Error::InvalidInputType { found })
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_hash_matches_streaming_text_path() {
		let text = "na\u{ef}ve caf\u{e9}";
		let expected = Ripemd160::from_text(text).unwrap().hexdigest();
		assert_eq!(hash(text).unwrap(), expected);
		let narrow = [b'n', b'a', 0xef, b'v', b'e', b' ', b'c', b'a', b'f', 0xe9];
		assert_eq!(hash(text).unwrap(), hexdigest(&narrow));
	}

	#[test]
	fn test_hash_reports_encoding_error() {
		assert_eq!(
			hash("\u{3a9}"),
			Err(Error::Encoding {
				character: '\u{3a9}',
				position: 0,
			})
		);
	}
}
