// Copyright 2025 Irreducible Inc.

use digest::Digest;
use proptest::prelude::*;

use crate::ripemd160::{constants::DIGEST_SIZE, Ripemd160};

proptest! {
	#[test]
	fn test_ripemd160_vs_reference(
		input in prop::collection::vec(any::<u8>(), 0..=2048),
	) {
		let expected = ripemd::Ripemd160::digest(&input);
		let streamed = Ripemd160::with_prefix(&input).digest();
		prop_assert_eq!(streamed.as_slice(), expected.as_slice());
		let generic = <Ripemd160 as Digest>::digest(&input);
		prop_assert_eq!(generic.as_slice(), expected.as_slice());
	}

	#[test]
	fn test_chunking_does_not_change_digest(
		input in prop::collection::vec(any::<u8>(), 0..=512),
		cuts in prop::collection::vec(any::<prop::sample::Index>(), 0..8),
	) {
		let mut cuts = cuts
			.into_iter()
			.map(|cut| cut.index(input.len() + 1))
			.collect::<Vec<_>>();
		cuts.sort_unstable();

		let mut hasher = Ripemd160::new();
		let mut start = 0;
		for cut in cuts {
			hasher.update(&input[start..cut]);
			start = cut;
		}
		hasher.update(&input[start..]);

		prop_assert_eq!(hasher.bytes_hashed(), input.len() as u64);
		prop_assert_eq!(hasher.digest(), Ripemd160::with_prefix(&input).digest());
	}

	#[test]
	fn test_clone_is_independent(
		prefix in prop::collection::vec(any::<u8>(), 0..=200),
		x in prop::collection::vec(any::<u8>(), 1..=100),
		y in prop::collection::vec(any::<u8>(), 1..=100),
	) {
		prop_assume!(x != y);

		let mut original = Ripemd160::with_prefix(&prefix);
		let mut copy = original.clone();
		original.update(&x);
		copy.update(&y);

		let expected_copy = Ripemd160::with_prefix(&[prefix.as_slice(), y.as_slice()].concat()).digest();
		prop_assert_eq!(copy.digest(), expected_copy);
		prop_assert_ne!(original.digest(), copy.digest());
	}

	#[test]
	fn test_digest_is_repeatable(
		input in prop::collection::vec(any::<u8>(), 0..=300),
	) {
		let hasher = Ripemd160::with_prefix(&input);
		let first = hasher.digest();
		prop_assert_eq!(first.len(), DIGEST_SIZE);
		prop_assert_eq!(hasher.digest(), first);
		prop_assert_eq!(hasher.hexdigest().len(), 2 * DIGEST_SIZE);
		prop_assert_eq!(hasher.bytes_hashed(), input.len() as u64);
	}

	#[test]
	fn test_update_after_digest(
		a in prop::collection::vec(any::<u8>(), 0..=150),
		b in prop::collection::vec(any::<u8>(), 0..=150),
	) {
		let mut hasher = Ripemd160::with_prefix(&a);
		let _ = hasher.digest();
		hasher.update(&b);
		prop_assert_eq!(hasher.digest(), Ripemd160::with_prefix(&[a, b].concat()).digest());
	}
}

#[test]
fn test_reset_and_finalize_reset() {
	let mut hasher = Ripemd160::with_prefix(b"abc");
	let out: [u8; DIGEST_SIZE] = Digest::finalize_reset(&mut hasher).into();
	assert_eq!(out, Ripemd160::with_prefix(b"abc").digest());
	assert_eq!(hasher.bytes_hashed(), 0);
	assert_eq!(hasher.digest(), Ripemd160::new().digest());

	Digest::update(&mut hasher, b"xyz");
	Digest::reset(&mut hasher);
	assert_eq!(hasher.digest(), Ripemd160::default().digest());
}

#[test]
fn test_generic_digest_usage() {
	fn digest_generic<D: Digest>(data: &[u8]) -> Vec<u8> {
		D::new().chain_update(data).finalize().to_vec()
	}

	assert_eq!(
		digest_generic::<Ripemd160>(b"message digest"),
		digest_generic::<ripemd::Ripemd160>(b"message digest")
	);
	assert_eq!(<Ripemd160 as Digest>::output_size(), DIGEST_SIZE);
}
