use crate::error::InvalidName;

pub const MAX_NAME_LEN: usize = 80;

const ALLOWED_PUNCTUATION: &str = "-&()',.+/";

// Unicode White_Space plus the information separators U+001C..=U+001F
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || is_space(c) || ALLOWED_PUNCTUATION.contains(c)
}

/// Trims `raw` and checks it against the item name rules.
///
/// Length is counted in characters, not bytes.
pub fn validate_item_name(raw: &str) -> Result<String, InvalidName> {
    let cleaned = raw.trim_matches(is_space);

    if cleaned.is_empty() {
        return Err(InvalidName::Empty);
    }
    if cleaned.chars().count() > MAX_NAME_LEN {
        return Err(InvalidName::TooLong { max: MAX_NAME_LEN });
    }
    if !cleaned.chars().all(is_allowed) {
        return Err(InvalidName::InvalidCharacters);
    }

    Ok(cleaned.to_string())
}
