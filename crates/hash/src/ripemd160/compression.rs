// Copyright 2025 Irreducible Inc.

use tracing::instrument;

use super::constants::{
	BLOCK_SIZE, BLOCK_WORDS, K_LEFT, K_RIGHT, MSG_ORDER_LEFT, MSG_ORDER_RIGHT, ROUNDS,
	SHIFTS_LEFT, SHIFTS_RIGHT, STATE_WORDS,
};

/// The 160-bit chaining value as five 32-bit words `(h0, .., h4)`.
pub type State = [u32; STATE_WORDS];

/// Boolean function applied to `(b, c, d)` at every step of a round.
pub type RoundFunction = fn(u32, u32, u32) -> u32;

#[inline(always)]
fn f1(x: u32, y: u32, z: u32) -> u32 {
	x ^ y ^ z
}

#[inline(always)]
fn f2(x: u32, y: u32, z: u32) -> u32 {
	(x & y) | (!x & z)
}

#[inline(always)]
fn f3(x: u32, y: u32, z: u32) -> u32 {
	(x | !y) ^ z
}

#[inline(always)]
fn f4(x: u32, y: u32, z: u32) -> u32 {
	(x & z) | (y & !z)
}

#[inline(always)]
fn f5(x: u32, y: u32, z: u32) -> u32 {
	x ^ (y | !z)
}

pub const FUNCTIONS_LEFT: [RoundFunction; ROUNDS] = [f1, f2, f3, f4, f5];
pub const FUNCTIONS_RIGHT: [RoundFunction; ROUNDS] = [f5, f4, f3, f2, f1];

/// Sixteen steps of one line, starting from `h`.
#[inline(always)]
fn line_round(
	h: State,
	f: RoundFunction,
	k: u32,
	x: &[u32; BLOCK_WORDS],
	order: &[usize; BLOCK_WORDS],
	shifts: &[u32; BLOCK_WORDS],
) -> State {
	let [mut a, mut b, mut c, mut d, mut e] = h;
	for step in 0..BLOCK_WORDS {
		let t = a
			.wrapping_add(f(b, c, d))
			.wrapping_add(x[order[step]])
			.wrapping_add(k)
			.rotate_left(shifts[step])
			.wrapping_add(e);
		(a, b, c, d, e) = (e, t, b, c.rotate_left(10), d);
	}
	[a, b, c, d, e]
}

/// Absorb one 64-byte block into the chaining value.
pub fn compress(h: State, block: &[u8; BLOCK_SIZE]) -> State {
	let mut x = [0u32; BLOCK_WORDS];
	for (word, chunk) in x.iter_mut().zip(block.chunks_exact(4)) {
		*word = u32::from_le_bytes(chunk.try_into().expect("chunk is 4 bytes"));
	}

	let mut left = h;
	let mut right = h;
	for round in 0..ROUNDS {
		left = line_round(
			left,
			FUNCTIONS_LEFT[round],
			K_LEFT[round],
			&x,
			&MSG_ORDER_LEFT[round],
			&SHIFTS_LEFT[round],
		);
		right = line_round(
			right,
			FUNCTIONS_RIGHT[round],
			K_RIGHT[round],
			&x,
			&MSG_ORDER_RIGHT[round],
			&SHIFTS_RIGHT[round],
		);
	}

	[
		h[1].wrapping_add(left[2]).wrapping_add(right[3]),
		h[2].wrapping_add(left[3]).wrapping_add(right[4]),
		h[3].wrapping_add(left[4]).wrapping_add(right[0]),
		h[4].wrapping_add(left[0]).wrapping_add(right[1]),
		h[0].wrapping_add(left[1]).wrapping_add(right[2]),
	]
}

/// Absorb whole blocks in order.
#[instrument(skip_all, level = "trace", fields(n_blocks = blocks.len()))]
pub fn compress_blocks(h: State, blocks: &[[u8; BLOCK_SIZE]]) -> State {
	blocks.iter().fold(h, compress)
}
