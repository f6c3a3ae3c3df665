// Copyright 2024 Irreducible Inc.

/// Read boolean flag from the environment variable.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	match std::env::var(flag) {
		Ok(val) => ["1", "on", "ON", "true", "TRUE", "yes", "YES"].contains(&val.as_str()),
		Err(_) => false,
	}
}

/// Read an optional string value from the environment, treating an empty value as unset.
pub fn env_value(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|val| !val.is_empty())
}
