use std::cmp::Reverse;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordfreq_rs::Coordinator;

/// Count word frequencies in a text with a parallel map/shuffle/reduce
/// pipeline and print the most frequent words.
#[derive(Parser, Debug)]
#[command(name = "wordfreq")]
struct Cli {
    /// Input text file, or `-` to read from stdin
    input: PathBuf,

    /// Number of concurrent workers for the map and reduce phases
    #[arg(short, long, default_value_t = num_cpus::get())]
    workers: usize,

    /// How many of the most frequent words to print
    #[arg(short = 'n', long, default_value_t = 10)]
    top: usize,

    /// Case-fold the text before counting
    #[arg(long)]
    lowercase: bool,
}

/// Acquires the whole text up front. The pipeline is never invoked when
/// acquisition fails; the error propagates and nothing is rendered.
async fn acquire_text(input: &Path) -> anyhow::Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read text from stdin")?;
        Ok(text)
    } else {
        tokio::fs::read_to_string(input)
            .await
            .with_context(|| format!("failed to read text from `{}`", input.display()))
    }
}

fn render_top_words(counts: Vec<(String, u64)>, top: usize) {
    let mut sorted = counts;
    sorted.sort_unstable_by_key(|&(_, count)| Reverse(count));
    sorted.truncate(top);

    let Some(&(_, max_count)) = sorted.first() else {
        println!("(no words)");
        return;
    };
    let width = sorted
        .iter()
        .map(|(word, _)| word.chars().count())
        .max()
        .unwrap_or(0);
    for (word, count) in &sorted {
        let bar = "#".repeat((count * 40 / max_count.max(1)) as usize);
        println!("{word:<width$}  {bar:<40}  {count}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let text = acquire_text(&cli.input).await?;
    let text = if cli.lowercase {
        text.to_lowercase()
    } else {
        text
    };

    let mut coordinator = Coordinator::new(cli.workers);
    let counts = coordinator.run(&text).await?;
    info!(distinct = counts.len(), "pipeline finished");

    render_top_words(counts.into_iter().collect(), cli.top);
    Ok(())
}
