use lazy_static::lazy_static;
use regex::Regex;

use crate::classifier::is_fully_capitalized;
use crate::errors::RecordError;
use crate::parser::{parse_description, PendingDescription};
use crate::resolver::Resolver;

/// Records are separated by carriage returns, not line feeds.
pub const RECORD_DELIMITER: char = '\r';

lazy_static! {
    // identifier up to the first comma, description is everything after it
    static ref RECORD: Regex = Regex::new(r"(?s)^([^,]*),(.*)$").unwrap();
}

#[derive(Debug)]
pub enum Description {
    /// Passed through as-is.
    Literal(String),
    /// Being corrected.
    Pending(PendingDescription),
}

impl Description {
    pub async fn resolve(self) -> String {
        match self {
            Description::Literal(description) => description,
            Description::Pending(pending) => pending.resolve().await,
        }
    }
}

#[derive(Debug)]
pub struct Record {
    pub id: String,
    pub description: Description,
}

/// Split one record into its identifier and its description, with every
/// double quote removed from the description. `line` is 1-based and only
/// used for error reporting.
pub fn split_record(record: &str, line: usize) -> Result<(&str, String), RecordError> {
    let captures = RECORD.captures(record).ok_or_else(|| RecordError::Malformed {
        line,
        content: record.to_owned(),
    })?;

    let id = captures.get(1).map_or("", |m| m.as_str());
    let description = captures.get(2).map_or("", |m| m.as_str()).replace('"', "");
    Ok((id, description))
}

/// Iterate over the records of `data`. A delimiter at the very end starts
/// an empty, and therefore malformed, last record.
pub fn records(data: &str) -> impl Iterator<Item = &str> {
    data.split(RECORD_DELIMITER)
}

/// Split `data` into records, starting the correction of every fully
/// capitalized description.
///
/// The first record without a comma aborts the whole batch.
pub fn split_ids_and_descriptions(
    data: &str,
    resolver: &Resolver,
) -> Result<Vec<Record>, RecordError> {
    records(data)
        .enumerate()
        .map(|(index, record)| -> Result<Record, RecordError> {
            let (id, description) = split_record(record, index + 1)?;
            let description = if is_fully_capitalized(&description) {
                Description::Pending(parse_description(&description, resolver))
            } else {
                Description::Literal(description)
            };

            Ok(Record {
                id: id.to_owned(),
                description,
            })
        })
        .collect()
}
