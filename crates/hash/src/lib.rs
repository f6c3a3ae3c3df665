// Copyright 2023-2025 Irreducible Inc.

//! The RIPEMD-160 hash function.
//!
//! [`Ripemd160`] is a streaming hasher that also implements the [`digest`] traits, and
//! [`digest()`], [`hexdigest`] and [`hash`] cover the one-shot cases.

pub mod error;
pub mod hasher;
pub mod input;
pub mod ripemd160;

pub use ::digest;
pub use error::Error;
pub use hasher::*;
pub use input::Input;
pub use ripemd160::*;
