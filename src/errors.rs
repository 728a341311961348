use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error(
        "malformed record on line {line} ({content:?}): no comma found, \
         make sure there are no empty lines in your data file"
    )]
    Malformed { line: usize, content: String },
}

#[derive(Error, Debug)]
pub enum OverrideLoadingError {
    #[error("cannot read override table from file: {0}")]
    ReadFile(#[from] std::io::Error),
    #[error("malformed override table file: {0}")]
    Deserialize(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum OverrideSavingError {
    #[error("cannot write override table into file: {0}")]
    WriteFile(#[from] std::io::Error),
    #[error("can't serialize override table: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("cannot read lexicon database: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed lexicon entry in {file}: {reason}")]
    Malformed { file: String, reason: String },
}

#[derive(Error, Debug)]
pub enum CorrectionError {
    #[error("cannot read input file: {0}")]
    ReadInput(#[source] std::io::Error),
    #[error("cannot write output file: {0}")]
    WriteOutput(#[source] std::io::Error),
    #[error(transparent)]
    Record(#[from] RecordError),
}
