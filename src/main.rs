use std::path::Path;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Error};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use tracing::{error, info, warn, Level};

use recase::{
    correct_file, GatewayConfig, Lexicon, LexiconGateway, OverrideTable, Resolver, StaticLexicon,
    WordNet,
};

#[tokio::main]
async fn main() {
    let matches = App::new("recase")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Aleksei Voronov <despawn@gmail.com>")
        .about("Restore sentence casing in shouted record descriptions.")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .global(true)
                .help("More log output; repeat for more detail."),
        )
        .subcommand(
            SubCommand::with_name("correct")
                .about("Correct the descriptions of a carriage-return separated record file")
                .arg(
                    Arg::with_name("input")
                        .short("i")
                        .long("input")
                        .value_name("FILE")
                        .help("File with `id,description` records.")
                        .takes_value(true)
                        .required(true),
                )
                .arg(
                    Arg::with_name("output")
                        .short("o")
                        .long("output")
                        .value_name("FILE")
                        .help("File into which the corrected records will be written.")
                        .takes_value(true)
                        .required(true),
                )
                .arg(
                    Arg::with_name("overrides")
                        .long("overrides")
                        .value_name("FILE")
                        .help("JSON override table to use instead of the built-in one.")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("wordnet")
                        .long("wordnet")
                        .value_name("DIR")
                        .help("WordNet database directory used to look up proper nouns.")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("timeout")
                        .long("timeout-ms")
                        .value_name("MILLIS")
                        .help("Give up on a single word lookup after this long.")
                        .takes_value(true)
                        .default_value("2000"),
                ),
        )
        .subcommand(
            SubCommand::with_name("overrides")
                .about("Write the built-in override table as JSON, to use as a starting point")
                .arg(
                    Arg::with_name("output")
                        .short("o")
                        .long("output")
                        .value_name("FILE")
                        .help("File into which the override table will be written.")
                        .takes_value(true)
                        .required(true),
                ),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    let result = match matches.subcommand() {
        ("correct", Some(matches)) => do_correct(matches).await,
        ("overrides", Some(matches)) => do_overrides(matches),
        _ => Ok(()),
    };

    if let Err(err) = result {
        error!("{:#}", err);
        eprintln!("error: {:#}", err);
        process::exit(1);
    }
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

async fn do_correct(matches: &ArgMatches<'_>) -> Result<(), Error> {
    // required arguments
    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();

    let overrides = match matches.value_of("overrides") {
        Some(path) => OverrideTable::load_from_file(path)
            .with_context(|| format!("loading override table {}", path))?,
        None => OverrideTable::builtin(),
    };
    info!(entries = overrides.len(), "override table ready");

    let lexicon: Arc<dyn Lexicon> = match matches.value_of("wordnet") {
        Some(dir) if Path::new(dir).is_dir() => Arc::new(WordNet::new(dir)),
        Some(dir) => anyhow::bail!("wordnet database directory does not exist: {}", dir),
        None => {
            warn!("no --wordnet database given, words outside the override table are unchanged");
            Arc::new(StaticLexicon::empty())
        }
    };

    let timeout: u64 = matches
        .value_of("timeout")
        .unwrap_or("2000")
        .parse()
        .context("--timeout-ms must be a number of milliseconds")?;
    let config = GatewayConfig {
        lookup_timeout: Duration::from_millis(timeout),
    };

    let resolver = Resolver::new(overrides, LexiconGateway::new(lexicon, config));
    correct_file(input, output, &resolver).await?;

    Ok(())
}

fn do_overrides(matches: &ArgMatches<'_>) -> Result<(), Error> {
    let output = matches.value_of("output").unwrap_or_default();
    OverrideTable::builtin()
        .save_to_file(output)
        .with_context(|| format!("writing override table {}", output))?;

    Ok(())
}
