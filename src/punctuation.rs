//! Separating a token's alphanumeric core from its punctuation.
//!
//! Punctuation in record descriptions is practically always a suffix
//! (`hello,`, `store.`, `you?`), so callers rebuild a token as
//! `core + punctuation`. Tokens with punctuation in the middle
//! (`life-saving`) come back out as `lifesaving-`.

/// Returns the ASCII letters and digits of `token`, in order.
pub fn strip_punctuation(token: &str) -> String {
    token.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Returns every character of `token` that is not an ASCII letter or digit, in order.
pub fn extract_punctuation(token: &str) -> String {
    token
        .chars()
        .filter(|c| !c.is_ascii_alphanumeric())
        .collect()
}

/// Both halves at once: `(core, punctuation)`.
pub fn split_token(token: &str) -> (String, String) {
    let mut core = String::with_capacity(token.len());
    let mut punctuation = String::new();
    for c in token.chars() {
        if c.is_ascii_alphanumeric() {
            core.push(c);
        } else {
            punctuation.push(c);
        }
    }
    (core, punctuation)
}
