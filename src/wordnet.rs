//! [`Lexicon`] backed by a local WordNet database.
//!
//! Only the plain-text database files are needed (`index.noun`,
//! `data.noun`, and their verb/adj/adv siblings, as shipped in the
//! `dict/` directory of WordNet 3.x). Index files are parsed once, on
//! first lookup. Synset lines are read on demand by byte offset.

use std::collections::HashMap;
use std::io::{ErrorKind, SeekFrom};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncSeekExt, BufReader};
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::errors::LexiconError;
use crate::lexicon::Lexicon;

lazy_static! {
    // adjective position markers: `galore(ip)`, `elect(p)`, `former(a)`
    static ref ADJECTIVE_MARKER: Regex = Regex::new(r"\((a|p|ip)\)$").unwrap();
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Pos {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl Pos {
    const ALL: [Pos; 4] = [Pos::Noun, Pos::Verb, Pos::Adjective, Pos::Adverb];

    fn suffix(self) -> &'static str {
        match self {
            Pos::Noun => "noun",
            Pos::Verb => "verb",
            Pos::Adjective => "adj",
            Pos::Adverb => "adv",
        }
    }
}

/// First synset of a lemma within one part of speech.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct SynsetRef {
    pos: Pos,
    offset: u64,
}

type Index = HashMap<String, SynsetRef>;

#[derive(Debug)]
pub struct WordNet {
    dir: PathBuf,
    index: OnceCell<Index>,
}

impl WordNet {
    /// Use the database in `dir`. Nothing is read until the first lookup.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            index: OnceCell::new(),
        }
    }

    async fn index(&self) -> Result<&Index, LexiconError> {
        self.index.get_or_try_init(|| self.load_index()).await
    }

    async fn load_index(&self) -> Result<Index, LexiconError> {
        let mut index = Index::new();

        for &pos in Pos::ALL.iter() {
            let path = self.dir.join(format!("index.{}", pos.suffix()));
            let contents = match tokio::fs::read_to_string(&path).await {
                Ok(contents) => contents,
                Err(err) if err.kind() == ErrorKind::NotFound && pos != Pos::Noun => {
                    debug!(path = %path.display(), "wordnet index file missing, skipping");
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            for line in contents.lines().filter(|line| !line.starts_with(' ')) {
                let (lemma, offset) = parse_index_line(line).ok_or_else(|| LexiconError::Malformed {
                    file: path.display().to_string(),
                    reason: format!("bad index line {:?}", line),
                })?;
                // earlier parts of speech win
                index.entry(lemma).or_insert(SynsetRef { pos, offset });
            }
        }

        info!(dir = %self.dir.display(), lemmas = index.len(), "loaded wordnet index");
        Ok(index)
    }

    async fn read_synset_words(&self, synset: SynsetRef) -> Result<Vec<String>, LexiconError> {
        let path = self.dir.join(format!("data.{}", synset.pos.suffix()));
        let mut file = File::open(&path).await?;
        file.seek(SeekFrom::Start(synset.offset)).await?;

        let mut line = String::new();
        BufReader::new(file).read_line(&mut line).await?;

        parse_data_line(&line).ok_or_else(|| LexiconError::Malformed {
            file: path.display().to_string(),
            reason: format!("bad synset at offset {}", synset.offset),
        })
    }
}

#[async_trait]
impl Lexicon for WordNet {
    async fn lookup(&self, word: &str) -> Result<Vec<String>, LexiconError> {
        let synset = match self.index().await?.get(word) {
            Some(&synset) => synset,
            None => return Ok(Vec::new()),
        };
        self.read_synset_words(synset).await
    }
}

/// `lemma pos synset_cnt p_cnt [ptr_symbol...] sense_cnt tagsense_cnt synset_offset...`
fn parse_index_line(line: &str) -> Option<(String, u64)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let lemma = *fields.first()?;
    let p_cnt: usize = fields.get(3)?.parse().ok()?;
    let offset = fields.get(4 + p_cnt + 2)?.parse().ok()?;
    Some((lemma.to_owned(), offset))
}

/// `synset_offset lex_filenum ss_type w_cnt word lex_id [word lex_id...] ...`
fn parse_data_line(line: &str) -> Option<Vec<String>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let w_cnt = usize::from_str_radix(fields.get(3)?, 16).ok()?;
    (0..w_cnt)
        .map(|i| fields.get(4 + i * 2).map(|word| surface_form(word)))
        .collect()
}

fn surface_form(word: &str) -> String {
    ADJECTIVE_MARKER.replace(word, "").replace('_', " ")
}
