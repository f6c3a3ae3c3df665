// Copyright 2024-2025 Irreducible Inc.

#[cfg(feature = "bail_panic")]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		panic!("{}", $err);
	};
}

#[cfg(not(feature = "bail_panic"))]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		return Err($err.into());
	};
}

#[macro_export]
macro_rules! ensure {
	($cond:expr, $err:expr) => {
		if !$cond {
			$crate::bail!($err);
		}
	};
}

#[cfg(all(test, not(feature = "bail_panic")))]
mod tests {
	#[derive(Debug, PartialEq, Eq)]
	struct TooLarge(u32);

	fn check(value: u32) -> Result<u32, TooLarge> {
		crate::ensure!(value <= 0xFF, TooLarge(value));
		Ok(value)
	}

	#[test]
	fn test_ensure_returns_error() {
		assert_eq!(check(7), Ok(7));
		assert_eq!(check(0x100), Err(TooLarge(0x100)));
	}
}
