use std::sync::Arc;

use futures::future::{self, BoxFuture, FutureExt};

use crate::lexicon::LexiconGateway;
use crate::overrides::{Override, OverrideTable};
use crate::punctuation::split_token;
use crate::utils::uppercase_first_letter;

/// Final casing of one word, pending until any lexicon lookup completes.
///
/// Words decided from the override table or sentence position are
/// already-completed futures, so every word goes through the same join.
pub type WordResult = BoxFuture<'static, String>;

/// How a single word gets its casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Casing is known without asking the lexicon.
    Immediate(String),
    /// Ask the lexicon for `word`, then append `punctuation`.
    Lookup { word: String, punctuation: String },
}

/// Per-word casing decisions against an override table, with a lexicon as
/// the last resort.
#[derive(Debug, Clone)]
pub struct Resolver {
    overrides: Arc<OverrideTable>,
    gateway: LexiconGateway,
}

impl Resolver {
    pub fn new(overrides: OverrideTable, gateway: LexiconGateway) -> Self {
        Self::with_shared_overrides(Arc::new(overrides), gateway)
    }

    pub fn with_shared_overrides(overrides: Arc<OverrideTable>, gateway: LexiconGateway) -> Self {
        Self { overrides, gateway }
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    pub fn gateway(&self) -> &LexiconGateway {
        &self.gateway
    }

    /// Decide the casing of a lowercased `token` (trailing punctuation
    /// included). The first matching rule wins:
    ///
    /// 1. at a sentence start, a word stored in the table as an acronym is
    ///    fully uppercased, as long as nothing is attached to it (`er` gives
    ///    `ER`, but `er,` gives `Er,`);
    /// 2. any other sentence start gets its first letter uppercased;
    /// 3. a single letter other than `a` is uppercased (`i` → `I`);
    /// 4. a word in the table takes the stored form;
    /// 5. everything else is looked up in the lexicon.
    ///
    /// An acronym missing from the table that starts a sentence therefore
    /// comes out as `Hiv`, not `HIV`. Add it to the table to fix that.
    pub fn decide(&self, token: &str, is_sentence_start: bool) -> Resolution {
        let entry = self.overrides.lookup(token);

        if is_sentence_start {
            return match entry {
                Some(Override::Acronym(surface)) if surface == token.to_uppercase() => {
                    Resolution::Immediate(surface.to_owned())
                }
                _ => Resolution::Immediate(uppercase_first_letter(token)),
            };
        }

        let (word, punctuation) = split_token(token);

        if is_single_letter(&word) {
            return Resolution::Immediate(token.to_uppercase());
        }

        match entry {
            Some(entry) => {
                Resolution::Immediate(format!("{}{}", entry.surface(), punctuation))
            }
            None => Resolution::Lookup { word, punctuation },
        }
    }

    /// Like [`decide`](Self::decide), but as a future for the final string.
    /// Lookups are not started until the result is polled.
    pub fn resolve_word(&self, token: &str, is_sentence_start: bool) -> WordResult {
        match self.decide(token, is_sentence_start) {
            Resolution::Immediate(cased) => future::ready(cased).boxed(),
            Resolution::Lookup { word, punctuation } => {
                let gateway = self.gateway.clone();
                async move { gateway.resolve_canonical_casing(&word, &punctuation).await }.boxed()
            }
        }
    }
}

fn is_single_letter(word: &str) -> bool {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_ascii_alphabetic() && !c.eq_ignore_ascii_case(&'a'),
        _ => false,
    }
}
