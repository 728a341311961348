/// Whether every space-separated word of `description` starts with an
/// uppercase ASCII letter.
///
/// Only such descriptions are corrected; anything else is assumed to be
/// cased correctly already. Consecutive spaces produce an empty word,
/// which fails the check.
pub fn is_fully_capitalized(description: &str) -> bool {
    description
        .split(' ')
        .all(|word| word.chars().next().map_or(false, |c| c.is_ascii_uppercase()))
}
