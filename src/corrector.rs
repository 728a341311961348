use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::errors::{CorrectionError, RecordError};
use crate::records::{split_ids_and_descriptions, RECORD_DELIMITER};
use crate::resolver::Resolver;

/// Correct every record of `data` and render the output file contents:
/// `id,"description"` records joined by carriage returns.
///
/// Descriptions are awaited one record at a time so their words never mix;
/// within a description, lexicon lookups run concurrently.
pub async fn correct_text(data: &str, resolver: &Resolver) -> Result<String, RecordError> {
    let records = split_ids_and_descriptions(data, resolver)?;

    let mut output = String::with_capacity(data.len() + records.len() * 3);
    for (index, record) in records.into_iter().enumerate() {
        if index > 0 {
            output.push(RECORD_DELIMITER);
        }
        let description = record.description.resolve().await;
        output.push_str(&record.id);
        output.push_str(",\"");
        output.push_str(&description);
        output.push('"');
    }

    Ok(output)
}

/// Read `input`, correct it, and write the result to `output`.
///
/// Nothing is written if any record is malformed.
pub async fn correct_file<P, Q>(
    input: P,
    output: Q,
    resolver: &Resolver,
) -> Result<(), CorrectionError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let started = Instant::now();
    let (input, output) = (input.as_ref(), output.as_ref());

    let data = tokio::fs::read_to_string(input)
        .await
        .map_err(CorrectionError::ReadInput)?;
    info!(path = %input.display(), bytes = data.len(), "read record file");

    let corrected = correct_text(&data, resolver).await?;

    tokio::fs::write(output, corrected)
        .await
        .map_err(CorrectionError::WriteOutput)?;
    info!(
        path = %output.display(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "file written"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{LexiconGateway, StaticLexicon};
    use crate::overrides::OverrideTable;

    fn resolver() -> Resolver {
        let lexicon: StaticLexicon = vec![("manhattan", "Manhattan")].into_iter().collect();
        Resolver::new(OverrideTable::builtin(), LexiconGateway::with_lexicon(lexicon))
    }

    #[tokio::test]
    async fn quotes_every_description() {
        let output = correct_text("1,go to the store.\r2,\"hello, are you?\"", &resolver())
            .await
            .unwrap();
        assert_eq!(output, "1,\"go to the store.\"\r2,\"hello, are you?\"");
    }

    #[tokio::test]
    async fn corrects_only_capitalized_descriptions() {
        let output = correct_text("10,WELCOME TO MANHATTAN\r11,Welcome to NYC", &resolver())
            .await
            .unwrap();
        assert_eq!(output, "10,\"Welcome to Manhattan\"\r11,\"Welcome to NYC\"");
    }

    #[tokio::test]
    async fn malformed_records_fail_the_batch() {
        let err = correct_text("1,ok\rbroken", &resolver()).await.unwrap_err();
        assert!(matches!(err, RecordError::Malformed { line: 2, .. }));
    }
}
