// Copyright 2025 Irreducible Inc.

use std::{cmp, fmt};

use digest::{
	consts::{U20, U64},
	core_api::BlockSizeUser,
	FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update,
};
use static_assertions::assert_impl_all;
use tracing::{debug, trace};

use super::{
	compression::{compress, compress_blocks, State},
	constants::{BLOCK_SIZE, DIGEST_SIZE, INITIAL_STATE},
};
use crate::{input::narrow_bytes, Error};

const PADDING_START: u8 = 0x80;
/// Bytes taken by the message bit length at the end of the last block.
const LENGTH_SIZE: usize = 8;

/// Streaming RIPEMD-160 hasher.
///
/// Input is buffered until a whole block is available and compressed right away. Reading the
/// digest works on a copy of the state, so it can be taken at any point, any number of times,
/// and more data may be fed afterwards. Cloning gives an independent hasher that continues from
/// the same point.
#[derive(Clone)]
pub struct Ripemd160 {
	state: State,
	buffer: [u8; BLOCK_SIZE],
	/// Invariant: `filled_bytes` is always strictly less than `BLOCK_SIZE`.
	filled_bytes: usize,
	/// Total input length in bytes, modulo 2^64.
	total_len: u64,
}

assert_impl_all!(Ripemd160: Send, Sync, Clone);

impl Default for Ripemd160 {
	fn default() -> Self {
		Self::new()
	}
}

impl Ripemd160 {
	pub const fn new() -> Self {
		Self {
			state: INITIAL_STATE,
			buffer: [0; BLOCK_SIZE],
			filled_bytes: 0,
			total_len: 0,
		}
	}

	/// Create a hasher which has already absorbed `data`.
	pub fn with_prefix(data: &[u8]) -> Self {
		let mut hasher = Self::new();
		hasher.update(data);
		hasher
	}

	/// Create a hasher which has already absorbed the narrow encoding of `text`.
	pub fn from_text(text: &str) -> Result<Self, Error> {
		let mut hasher = Self::new();
		hasher.update_text(text)?;
		Ok(hasher)
	}

	/// Number of bytes absorbed so far, modulo 2^64.
	pub fn bytes_hashed(&self) -> u64 {
		self.total_len
	}

	pub fn update(&mut self, mut data: &[u8]) {
		self.total_len = self.total_len.wrapping_add(data.len() as u64);

		if self.filled_bytes != 0 {
			let to_copy = cmp::min(data.len(), BLOCK_SIZE - self.filled_bytes);
			self.buffer[self.filled_bytes..self.filled_bytes + to_copy]
				.copy_from_slice(&data[..to_copy]);
			data = &data[to_copy..];
			self.filled_bytes += to_copy;

			if self.filled_bytes == BLOCK_SIZE {
				self.state = compress(self.state, &self.buffer);
				self.filled_bytes = 0;
			}
		}

		let (blocks, remaining) = data.split_at(data.len() - data.len() % BLOCK_SIZE);
		if !blocks.is_empty() {
			self.state = compress_blocks(self.state, bytemuck::cast_slice(blocks));
		}

		self.buffer[self.filled_bytes..self.filled_bytes + remaining.len()]
			.copy_from_slice(remaining);
		self.filled_bytes += remaining.len();
	}

	/// Absorb the narrow encoding of `text`.
	///
	/// On failure nothing is absorbed.
	pub fn update_text(&mut self, text: &str) -> Result<(), Error> {
		let bytes = narrow_bytes(text).inspect_err(|err| debug!(%err, "rejecting text input"))?;
		self.update(&bytes);
		Ok(())
	}

	/// Apply padding and the length block to a copy of the state.
	fn finalize_state(&self) -> State {
		let mut tail = [0u8; 2 * BLOCK_SIZE];
		tail[..self.filled_bytes].copy_from_slice(&self.buffer[..self.filled_bytes]);
		tail[self.filled_bytes] = PADDING_START;

		let tail_len = if self.filled_bytes + 1 + LENGTH_SIZE <= BLOCK_SIZE {
			BLOCK_SIZE
		} else {
			2 * BLOCK_SIZE
		};
		let bit_len = self.total_len.wrapping_mul(8);
		tail[tail_len - LENGTH_SIZE..tail_len].copy_from_slice(&bit_len.to_le_bytes());

		trace!(bytes_hashed = self.total_len, tail_blocks = tail_len / BLOCK_SIZE, "finalizing");
		compress_blocks(self.state, bytemuck::cast_slice(&tail[..tail_len]))
	}

	/// The digest of everything absorbed so far. Does not modify the hasher.
	pub fn digest(&self) -> [u8; DIGEST_SIZE] {
		let mut out = [0u8; DIGEST_SIZE];
		for (chunk, word) in out.chunks_exact_mut(4).zip(self.finalize_state()) {
			chunk.copy_from_slice(&word.to_le_bytes());
		}
		out
	}

	/// Lowercase hex encoding of [`Self::digest`].
	pub fn hexdigest(&self) -> String {
		hex::encode(self.digest())
	}
}

impl fmt::Debug for Ripemd160 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Ripemd160 { ... }")
	}
}

impl HashMarker for Ripemd160 {}

impl Update for Ripemd160 {
	fn update(&mut self, data: &[u8]) {
		Ripemd160::update(self, data);
	}
}

impl OutputSizeUser for Ripemd160 {
	type OutputSize = U20;
}

impl BlockSizeUser for Ripemd160 {
	type BlockSize = U64;
}

impl FixedOutput for Ripemd160 {
	fn finalize_into(self, out: &mut Output<Self>) {
		out.copy_from_slice(&self.digest());
	}
}

impl Reset for Ripemd160 {
	fn reset(&mut self) {
		*self = Self::new();
	}
}

impl FixedOutputReset for Ripemd160 {
	fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
		out.copy_from_slice(&self.digest());
		Reset::reset(self);
	}
}
