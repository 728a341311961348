//! Sentence casing for shouted or title-cased record descriptions.
//!
//! Input is a file of `identifier,description` records separated by
//! carriage returns. Descriptions in which every word starts with an
//! uppercase letter (`GO TO THE STORE.`, `Welcome To Manhattan`) are
//! rewritten in sentence case; everything else is left alone.
//!
//! Each word is cased by the first matching rule: acronyms from an
//! override table at the start of a sentence, first-letter capitals at
//! the start of a sentence, the pronoun `I` and other single letters,
//! the override table, and finally a [`Lexicon`] lookup that knows how
//! proper nouns are written.
//!
//! ```
//! use recase::{correct_text, LexiconGateway, OverrideTable, Resolver, StaticLexicon};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let lexicon: StaticLexicon = vec![("europe", "Europe")].into_iter().collect();
//! let resolver = Resolver::new(OverrideTable::builtin(), LexiconGateway::with_lexicon(lexicon));
//!
//! let output = correct_text("1,HELLO, CHARLIE. WELCOME TO EUROPE\r2,Leave me", &resolver)
//!     .await
//!     .unwrap();
//! assert_eq!(output, "1,\"Hello, charlie. Welcome to Europe\"\r2,\"Leave me\"");
//! # }
//! ```

mod classifier;
mod corrector;
mod errors;
mod lexicon;
mod overrides;
mod parser;
mod punctuation;
mod records;
mod resolver;
mod utils;
mod wordnet;

pub use classifier::is_fully_capitalized;
pub use corrector::{correct_file, correct_text};
pub use errors::{
    CorrectionError, LexiconError, OverrideLoadingError, OverrideSavingError, RecordError,
};
pub use lexicon::{GatewayConfig, Lexicon, LexiconGateway, StaticLexicon};
pub use overrides::{Override, OverrideTable};
pub use parser::{parse_description, PendingDescription};
pub use punctuation::{extract_punctuation, split_token, strip_punctuation};
pub use records::{
    records, split_ids_and_descriptions, split_record, Description, Record, RECORD_DELIMITER,
};
pub use resolver::{Resolution, Resolver, WordResult};
pub use wordnet::WordNet;
