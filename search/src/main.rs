use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use search::assistant::{assistant_index, run_pipeline, SAMPLE_QUERIES};
use search::config::CorpusArgs;
use search::open_index;
use search::repl::{json_hits, run_repl, write_hits};
use std::io::{self, Write};
use tfidf_core::SynonymTable;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Rank a directory of documents against free-text queries with TF-IDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for queries until `exit`
    Repl {
        #[command(flatten)]
        corpus: CorpusArgs,
    },
    /// Rank the corpus against a single query
    Query {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// Print hits as a JSON array
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Query text
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Synonym-expanded search over the built-in health articles
    Assistant {
        /// Query text; runs the sample queries when omitted
        query: Vec<String>,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Repl { corpus } => {
            let settings = corpus.resolve()?;
            let index = open_index(&settings)?;
            let stdin = io::stdin();
            run_repl(&index, stdin.lock(), io::stdout().lock(), settings.limit)?;
        }
        Commands::Query { corpus, json, query } => {
            let settings = corpus.resolve()?;
            let index = open_index(&settings)?;
            let query = query.join(" ");
            let result = index.search(&query);
            let mut out = io::stdout().lock();
            if json {
                let hits = json_hits(&index, &result, settings.limit);
                writeln!(out, "{}", serde_json::to_string_pretty(&hits)?)?;
            } else {
                write_hits(&index, &result, settings.limit, &mut out)?;
            }
        }
        Commands::Assistant { query } => {
            let index = assistant_index()?;
            let expander = SynonymTable::assistant();
            let queries: Vec<String> = if query.is_empty() {
                SAMPLE_QUERIES.iter().map(|q| q.to_string()).collect()
            } else {
                vec![query.join(" ")]
            };
            if queries.iter().all(|q| q.trim().is_empty()) {
                bail!("assistant query is empty");
            }
            let mut out = io::stdout().lock();
            for q in &queries {
                writeln!(out, "\n{}", "=".repeat(50))?;
                run_pipeline(&index, &expander, q, &mut out)?;
            }
        }
    }
    Ok(())
}
