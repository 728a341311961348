pub(crate) fn uppercase_first_letter(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
    }
}

pub(crate) fn join_with_spaces<I>(iter: I) -> String
where
    I: Iterator + Clone,
    I::Item: AsRef<str>,
{
    let length: usize = iter
        .clone()
        .map(|item| item.as_ref().len() + 1)
        .sum::<usize>()
        .saturating_sub(1);
    let mut string = String::with_capacity(length);

    for (index, item) in iter.enumerate() {
        if index > 0 {
            string.push(' ');
        }
        string.push_str(item.as_ref());
    }
    string
}

/// Whether a token closes a sentence, i.e. its last character is `.`, `?` or `!`.
pub(crate) fn ends_sentence(token: &str) -> bool {
    matches!(token.chars().last(), Some('.') | Some('?') | Some('!'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_only_the_first_letter() {
        assert_eq!(uppercase_first_letter("cat"), "Cat");
        assert_eq!(uppercase_first_letter("CAT"), "CAT");
        assert_eq!(uppercase_first_letter("hello,"), "Hello,");
        assert_eq!(uppercase_first_letter(""), "");
    }

    #[test]
    fn joins_with_single_spaces() {
        let words = vec!["Hello,", "charlie.", "Welcome"];
        assert_eq!(join_with_spaces(words.iter()), "Hello, charlie. Welcome");
        assert_eq!(join_with_spaces(Vec::<String>::new().iter()), "");
    }

    #[test]
    fn sentence_ends_on_terminal_punctuation_only() {
        assert!(ends_sentence("charlie."));
        assert!(ends_sentence("you?"));
        assert!(ends_sentence("now!"));
        assert!(!ends_sentence("hello,"));
        assert!(!ends_sentence("e.g"));
        assert!(!ends_sentence(""));
    }
}
