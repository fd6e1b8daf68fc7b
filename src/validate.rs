/// Longest observation text the booking form will persist.
pub const OBSERVATIONS_MAX_CHARS: usize = 1000;

/// Validate a national ID: 6-17 characters, letters and digits only
/// (the reference pattern is `^[a-zA-Z0-9]{6,17}$`).
pub fn validate_national_id(id: &str) -> Option<&'static str> {
    let ok = (6..=17).contains(&id.len()) && id.bytes().all(|b| b.is_ascii_alphanumeric());
    if ok {
        None
    } else {
        Some("Invalid National ID format")
    }
}

/// Clip free-text observations to [`OBSERVATIONS_MAX_CHARS`] characters.
/// Silent normalization, not an error.
pub fn clip_observations(text: &str) -> String {
    match text.char_indices().nth(OBSERVATIONS_MAX_CHARS) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Split the packed `"<name>%<flagUrl>"` nationality value on the first `%`.
/// A value with no separator yields an empty flag URL.
pub fn split_nationality(packed: &str) -> (&str, &str) {
    packed.split_once('%').unwrap_or((packed, ""))
}
