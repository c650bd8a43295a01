pub fn validate_name(name: &str) -> bool {
    // Must be non-empty after trimming terminal whitespace
    !name.trim().is_empty()
}
