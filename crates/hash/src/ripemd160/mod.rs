// Copyright 2025 Irreducible Inc.

//! This module implements [RIPEMD-160](https://homes.esat.kuleuven.be/~bosselae/ripemd160.html)

mod compression;
pub mod constants;
mod digest;
#[cfg(test)]
mod tests;

pub use compression::{
	compress, compress_blocks, RoundFunction, State, FUNCTIONS_LEFT, FUNCTIONS_RIGHT,
};
pub use constants::{BLOCK_SIZE, DIGEST_SIZE};
pub use self::digest::Ripemd160;
