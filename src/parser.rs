use std::fmt;

use futures::future::join_all;

use crate::resolver::{Resolver, WordResult};
use crate::utils::{ends_sentence, join_with_spaces};

/// One [`WordResult`] per space-separated word of a description, in order.
pub struct PendingDescription {
    words: Vec<WordResult>,
}

impl PendingDescription {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Wait for every word, then join them with single spaces.
    ///
    /// Lookups run concurrently, but words keep their original order.
    pub async fn resolve(self) -> String {
        let words = join_all(self.words).await;
        join_with_spaces(words.iter()).trim().to_owned()
    }
}

impl fmt::Debug for PendingDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingDescription")
            .field("words", &self.words.len())
            .finish()
    }
}

/// Lowercase `description` and decide the casing of each word, tracking
/// where sentences start. Nothing is awaited here.
pub fn parse_description(description: &str, resolver: &Resolver) -> PendingDescription {
    let mut sentence_start = true;
    let mut words = Vec::new();

    for word in description.split(' ') {
        let word = word.to_lowercase();
        words.push(resolver.resolve_word(&word, sentence_start));
        sentence_start = ends_sentence(&word);
    }

    PendingDescription { words }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{LexiconGateway, StaticLexicon};
    use crate::overrides::OverrideTable;

    fn resolver() -> Resolver {
        let lexicon: StaticLexicon = vec![
            ("manhattan", "Manhattan"),
            ("europe", "Europe"),
            ("welcome", "welcome"),
        ]
        .into_iter()
        .collect();
        Resolver::new(OverrideTable::builtin(), LexiconGateway::with_lexicon(lexicon))
    }

    async fn corrected(description: &str) -> String {
        parse_description(description, &resolver()).resolve().await
    }

    #[tokio::test]
    async fn cases_a_single_sentence() {
        assert_eq!(corrected("heLLo WELcoMe tO manhattan").await, "Hello welcome to Manhattan");
    }

    #[tokio::test]
    async fn starts_a_new_sentence_after_terminal_punctuation() {
        assert_eq!(
            corrected("hello, charlie. welcome to europe").await,
            "Hello, charlie. Welcome to Europe"
        );
        assert_eq!(corrected("WHY? BECAUSE! OK.").await, "Why? Because! Ok.");
    }

    #[tokio::test]
    async fn uses_table_and_single_letter_rules() {
        assert_eq!(
            corrected("JOHN AND I GET DISCOUNTS WITH MY AAA AND AARP CARDS").await,
            "John and I get discounts with my aaa and AARP cards"
        );
        assert_eq!(corrected("ER VISIT. ER IS FULL").await, "ER visit. ER is full");
        assert_eq!(corrected("ER, GED. OK").await, "Er, GED. Ok");
    }

    #[test]
    fn one_result_per_word() {
        let resolver = resolver();
        assert_eq!(parse_description("Go To The Store.", &resolver).len(), 4);
        assert_eq!(parse_description("Word", &resolver).len(), 1);
        assert_eq!(parse_description("Two  Spaces", &resolver).len(), 3);
    }
}
