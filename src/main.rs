use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vigenere::analysis::{self, Analysis};
use vigenere::config::AnalysisConfig;
use vigenere::decode::decode_with_key;
use vigenere::ic::KeyLengthResult;
use vigenere::key::Key;
use vigenere::observer::TracingObserver;
use vigenere::text::Ciphertext;

/// Breaks a Vigenere cipher over English text
#[derive(Parser)]
#[command(name = "vigenere", version, about)]
struct Opts {
    /// File holding the ciphertext, read from stdin when omitted
    file: Option<PathBuf>,

    /// Skip the key length estimate and use this one
    #[arg(short = 'l', long)]
    key_length: Option<usize>,

    /// Decode with a known key instead of recovering one
    #[arg(short, long, conflicts_with = "key_length")]
    key: Option<Key>,

    /// Longest key length to try
    #[arg(long)]
    max_key_length: Option<usize>,

    /// TOML file with analysis thresholds
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// -v for IC and MIC tables, -vv for every shift tried
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let level = match opts.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let mut config = match &opts.config {
        Some(path) => AnalysisConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    if opts.max_key_length.is_some() {
        config.max_key_length = opts.max_key_length;
    }

    let input = read_input(opts.file.as_ref())?;
    let ciphertext = Ciphertext::from_raw(&input)?;
    tracing::info!("Encoded string: {}", ciphertext.as_str());

    let mut observer = TracingObserver::default();
    let analysis = match (opts.key, opts.key_length) {
        (Some(key), _) => Analysis {
            key_length: KeyLengthResult::Found(key.len()),
            plaintext: decode_with_key(ciphertext.as_bytes(), &key),
            key,
        },
        (None, Some(key_length)) => {
            analysis::break_vigenere_with_key_length(&ciphertext, key_length, &mut observer)?
        }
        (None, None) => analysis::break_vigenere(&ciphertext, &config, &mut observer),
    };

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_analysis(&analysis);
    }

    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            eprintln!("Please enter the text to decode:");
            io::stderr().flush()?;
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn print_analysis(analysis: &Analysis) {
    match analysis.key_length {
        KeyLengthResult::Found(key_length) => println!("Key length: {}", key_length),
        KeyLengthResult::Exhausted(key_length) => {
            println!("Key length: {} (low confidence)", key_length)
        }
    }
    println!("Key: {}", analysis.key);
    println!("Decoded string:\n{}", analysis.plaintext);
}
