// Copyright 2025 Irreducible Inc.

//! Fixed tables of RIPEMD-160.
//!
//! Everything here is derived at compile time from a handful of seeds: the message word
//! permutation `RHO`, the right line's starting permutation `PI`, the base rotation amounts and
//! the integers whose square and cube roots give the additive constants.

use hex_literal::hex;

/// Size of a message block in bytes.
pub const BLOCK_SIZE: usize = 64;
/// Size of the digest in bytes.
pub const DIGEST_SIZE: usize = 20;
/// Number of 32-bit words in the chaining value.
pub const STATE_WORDS: usize = 5;
/// Number of 32-bit words in a message block.
pub const BLOCK_WORDS: usize = 16;
pub const ROUNDS: usize = 5;

/// Chaining value before any block has been absorbed.
pub const INITIAL_STATE: [u32; STATE_WORDS] =
	words_le(hex!("0123456789ABCDEFFEDCBA9876543210F0E1D2C3"));

/// The permutation `ρ` applied to the message word order between consecutive rounds.
pub const RHO: [usize; BLOCK_WORDS] = [7, 4, 13, 1, 10, 6, 15, 3, 12, 0, 9, 5, 2, 14, 11, 8];

/// The permutation `π(i) = 9i + 5 (mod 16)` starting the right line.
pub const PI: [usize; BLOCK_WORDS] = pi();

/// Message word order of the left line, one row per round.
pub const MSG_ORDER_LEFT: [[usize; BLOCK_WORDS]; ROUNDS] = round_orders(identity());
/// Message word order of the right line, one row per round.
pub const MSG_ORDER_RIGHT: [[usize; BLOCK_WORDS]; ROUNDS] = round_orders(PI);

/// Rotation amount per message word, one row per round.
const BASE_SHIFTS: [[u32; BLOCK_WORDS]; ROUNDS] = [
	[11, 14, 15, 12, 5, 8, 7, 9, 11, 13, 14, 15, 6, 7, 9, 8],
	[12, 13, 11, 15, 6, 9, 9, 7, 12, 15, 11, 13, 7, 8, 7, 7],
	[13, 15, 14, 11, 7, 7, 6, 8, 13, 14, 13, 12, 5, 5, 6, 9],
	[14, 11, 12, 14, 8, 6, 5, 5, 15, 12, 15, 14, 9, 9, 8, 6],
	[15, 12, 13, 13, 9, 5, 8, 6, 14, 11, 12, 11, 8, 6, 5, 5],
];

/// Rotation amount used at each step of the left line.
pub const SHIFTS_LEFT: [[u32; BLOCK_WORDS]; ROUNDS] = step_shifts(&MSG_ORDER_LEFT);
/// Rotation amount used at each step of the right line.
pub const SHIFTS_RIGHT: [[u32; BLOCK_WORDS]; ROUNDS] = step_shifts(&MSG_ORDER_RIGHT);

/// Additive constants of the left line: `0` then `2^30·√k` for `k = 2, 3, 5, 7`.
pub const K_LEFT: [u32; ROUNDS] = [
	0,
	root_constant(2, 2),
	root_constant(3, 2),
	root_constant(5, 2),
	root_constant(7, 2),
];

/// Additive constants of the right line: `2^30·∛k` for `k = 2, 3, 5, 7` then `0`.
pub const K_RIGHT: [u32; ROUNDS] = [
	root_constant(2, 3),
	root_constant(3, 3),
	root_constant(5, 3),
	root_constant(7, 3),
	0,
];

const fn words_le(bytes: [u8; 4 * STATE_WORDS]) -> [u32; STATE_WORDS] {
	let mut words = [0; STATE_WORDS];
	let mut i = 0;
	while i < STATE_WORDS {
		words[i] = u32::from_le_bytes([
			bytes[4 * i],
			bytes[4 * i + 1],
			bytes[4 * i + 2],
			bytes[4 * i + 3],
		]);
		i += 1;
	}
	words
}

const fn identity() -> [usize; BLOCK_WORDS] {
	let mut out = [0; BLOCK_WORDS];
	let mut i = 0;
	while i < BLOCK_WORDS {
		out[i] = i;
		i += 1;
	}
	out
}

const fn pi() -> [usize; BLOCK_WORDS] {
	let mut out = [0; BLOCK_WORDS];
	let mut i = 0;
	while i < BLOCK_WORDS {
		out[i] = (9 * i + 5) % BLOCK_WORDS;
		i += 1;
	}
	out
}

/// Row `r` is `ρ^r` composed with `base`.
const fn round_orders(base: [usize; BLOCK_WORDS]) -> [[usize; BLOCK_WORDS]; ROUNDS] {
	let mut out = [[0; BLOCK_WORDS]; ROUNDS];
	out[0] = base;
	let mut round = 1;
	while round < ROUNDS {
		let mut i = 0;
		while i < BLOCK_WORDS {
			out[round][i] = RHO[out[round - 1][i]];
			i += 1;
		}
		round += 1;
	}
	out
}

const fn step_shifts(orders: &[[usize; BLOCK_WORDS]; ROUNDS]) -> [[u32; BLOCK_WORDS]; ROUNDS] {
	let mut out = [[0; BLOCK_WORDS]; ROUNDS];
	let mut round = 0;
	while round < ROUNDS {
		let mut i = 0;
		while i < BLOCK_WORDS {
			out[round][i] = BASE_SHIFTS[round][orders[round][i]];
			i += 1;
		}
		round += 1;
	}
	out
}

/// `floor(2^30 · k^(1/n))`, computed exactly as the largest `x` with `x^n <= k · 2^(30n)`.
const fn root_constant(k: u128, n: u32) -> u32 {
	let target = k << (30 * n);
	let mut lo: u128 = 0;
	let mut hi: u128 = 1 << 32;
	while hi - lo > 1 {
		let mid = (lo + hi) / 2;
		if mid.pow(n) <= target {
			lo = mid;
		} else {
			hi = mid;
		}
	}
	lo as u32
}
