//! Print the word layout of a bit-field width list.
//!
//! Usage:
//!   word_align --word-size 32 1 31 3 29 5 27
//!   word_align -w 8 --file widths.txt
//!   echo "4 4 8" | word_align -w 8
//!
//! Widths may be separated by whitespace or commas. With neither positional
//! widths nor `--file`, widths are read from stdin.
//!
//! Exit code 1 if the layout is misaligned or cannot be computed.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};
use std::path::PathBuf;

use wordlayout::WordLayout;

/// Compute how bit fields fall onto fixed-size words
#[derive(Parser)]
#[command(name = "word_align")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Word size in bits
    #[arg(short, long, env = "WORD_ALIGN_WORD_SIZE")]
    word_size: u64,

    /// Read widths from a file instead of the command line
    #[arg(short, long, conflicts_with = "widths")]
    file: Option<PathBuf>,

    /// Print the layout as JSON
    #[arg(long)]
    json: bool,

    /// Field widths in bits, in field order
    widths: Vec<u32>,
}

fn parse_widths(src: &str) -> Result<Vec<u32>> {
    src.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .with_context(|| format!("invalid field width {:?}", s))
        })
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let widths = if let Some(path) = &cli.file {
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        parse_widths(&src).with_context(|| format!("in {}", path.display()))?
    } else if cli.widths.is_empty() {
        let mut src = String::new();
        io::stdin().read_to_string(&mut src)?;
        parse_widths(&src).context("in <stdin>")?
    } else {
        cli.widths.clone()
    };

    let layout = WordLayout::compute(cli.word_size, &widths)
        .with_context(|| format!("cannot lay out {} field(s)", widths.len()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
    } else {
        println!("{}", layout);
    }

    if !layout.is_aligned() {
        let words: Vec<String> = layout
            .misaligned_words()
            .iter()
            .map(|k| k.to_string())
            .collect();
        eprintln!("word_align: fields straddle the end of word(s) {}", words.join(", "));
        std::process::exit(1);
    }
    Ok(())
}
