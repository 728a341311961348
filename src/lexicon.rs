use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace};

use crate::errors::LexiconError;

/// A word-lookup source that knows how words are canonically written.
#[async_trait]
pub trait Lexicon: Send + Sync {
    /// Candidate surface forms for a bare lowercase word, best first.
    /// An empty list means the word is unknown.
    async fn lookup(&self, word: &str) -> Result<Vec<String>, LexiconError>;
}

/// In-memory lexicon, mostly useful for tests and for running without a database.
#[derive(Debug, Clone, Default)]
pub struct StaticLexicon {
    entries: HashMap<String, Vec<String>>,
}

impl StaticLexicon {
    /// A lexicon that knows no words at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert<W, I, S>(&mut self, word: W, candidates: I) -> &mut Self
    where
        W: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .insert(word.into(), candidates.into_iter().map(Into::into).collect());
        self
    }
}

impl<'a> std::iter::FromIterator<(&'a str, &'a str)> for StaticLexicon {
    /// Builds a lexicon with a single candidate per word.
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut lexicon = StaticLexicon::empty();
        for (word, surface) in iter {
            lexicon.insert(word, Some(surface));
        }
        lexicon
    }
}

#[async_trait]
impl Lexicon for StaticLexicon {
    async fn lookup(&self, word: &str) -> Result<Vec<String>, LexiconError> {
        Ok(self.entries.get(word).cloned().unwrap_or_default())
    }
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Upper bound for a single lookup. A lookup that takes longer leaves the word unchanged.
    pub lookup_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            lookup_timeout: Duration::from_secs(2),
        }
    }
}

/// Fallback casing lookup that never fails.
///
/// Any error, timeout, or miss from the underlying [`Lexicon`] resolves
/// to the word as given. Cloning is cheap; clones share the lexicon.
#[derive(Clone)]
pub struct LexiconGateway {
    lexicon: Arc<dyn Lexicon>,
    config: GatewayConfig,
}

impl fmt::Debug for LexiconGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexiconGateway")
            .field("config", &self.config)
            .finish()
    }
}

impl LexiconGateway {
    pub fn new(lexicon: Arc<dyn Lexicon>, config: GatewayConfig) -> Self {
        Self { lexicon, config }
    }

    pub fn with_lexicon<L: Lexicon + 'static>(lexicon: L) -> Self {
        Self::new(Arc::new(lexicon), GatewayConfig::default())
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Canonical casing of `word` followed by `punctuation`.
    ///
    /// Picks the first candidate that lowercases to exactly `word`, so a
    /// lexicon answering with a related but different word (`toilet` for
    /// `john`) is ignored.
    pub async fn resolve_canonical_casing(&self, word: &str, punctuation: &str) -> String {
        let cased = self.find_casing(word).await;
        let mut result = cased.unwrap_or_else(|| word.to_owned());
        result.push_str(punctuation);
        result
    }

    async fn find_casing(&self, word: &str) -> Option<String> {
        if word.is_empty() {
            return None;
        }

        let lookup = self.lexicon.lookup(word);
        let candidates = match tokio::time::timeout(self.config.lookup_timeout, lookup).await {
            Ok(Ok(candidates)) => candidates,
            Ok(Err(err)) => {
                debug!(word, error = %err, "lexicon lookup failed, keeping word unchanged");
                return None;
            }
            Err(_) => {
                debug!(
                    word,
                    timeout_ms = self.config.lookup_timeout.as_millis() as u64,
                    "lexicon lookup timed out, keeping word unchanged"
                );
                return None;
            }
        };

        let found = candidates
            .into_iter()
            .find(|candidate| candidate.to_lowercase() == word);
        trace!(word, found = ?found, "lexicon lookup");
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingLexicon;

    #[async_trait]
    impl Lexicon for FailingLexicon {
        async fn lookup(&self, _word: &str) -> Result<Vec<String>, LexiconError> {
            Err(LexiconError::Malformed {
                file: "data.noun".to_owned(),
                reason: "truncated line".to_owned(),
            })
        }
    }

    struct SlowLexicon;

    #[async_trait]
    impl Lexicon for SlowLexicon {
        async fn lookup(&self, word: &str) -> Result<Vec<String>, LexiconError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(vec![word.to_uppercase()])
        }
    }

    fn gateway() -> LexiconGateway {
        let mut lexicon: StaticLexicon = vec![("africa", "Africa"), ("dog", "dog")]
            .into_iter()
            .collect();
        lexicon.insert("john", vec!["toilet", "can", "John"]);
        lexicon.insert("bill", vec!["measure", "bill"]);
        LexiconGateway::with_lexicon(lexicon)
    }

    #[tokio::test]
    async fn restores_proper_noun_casing() {
        let gateway = gateway();
        assert_eq!(gateway.resolve_canonical_casing("africa", "").await, "Africa");
        assert_eq!(gateway.resolve_canonical_casing("africa", ",").await, "Africa,");
    }

    #[tokio::test]
    async fn keeps_common_words_lowercase() {
        assert_eq!(gateway().resolve_canonical_casing("dog", ".").await, "dog.");
    }

    #[tokio::test]
    async fn skips_unrelated_candidates() {
        let gateway = gateway();
        assert_eq!(gateway.resolve_canonical_casing("john", "").await, "John");
        assert_eq!(gateway.resolve_canonical_casing("bill", "?").await, "bill?");
    }

    #[tokio::test]
    async fn unknown_words_are_unchanged() {
        assert_eq!(gateway().resolve_canonical_casing("zzyzx", "!").await, "zzyzx!");
        assert_eq!(gateway().resolve_canonical_casing("", "...").await, "...");
    }

    #[tokio::test]
    async fn failures_degrade_to_the_original_word() {
        let gateway = LexiconGateway::with_lexicon(FailingLexicon);
        assert_eq!(gateway.resolve_canonical_casing("europe", ",").await, "europe,");
    }

    #[tokio::test]
    async fn slow_lookups_time_out() {
        let gateway = LexiconGateway::new(
            Arc::new(SlowLexicon),
            GatewayConfig {
                lookup_timeout: Duration::from_millis(20),
            },
        );
        assert_eq!(gateway.resolve_canonical_casing("nasa", "").await, "nasa");
    }
}
