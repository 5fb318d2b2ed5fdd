mod discovery;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use codeqa_assistant::{build_messages, ChatClient, ChatConfig};
use codeqa_core::{Corpus, CorpusMode, Retriever, ScoredResult};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "codeqa")]
#[command(about = "Answer questions about a code base with BM25 retrieval and a chat model", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CorpusArgs {
    /// Directory to search for source files
    #[arg(long)]
    root: PathBuf,
    /// Number of ranked documents to keep per question
    #[arg(long, default_value_t = 20)]
    top_n: usize,
    /// Index whole files only, without extracted function/class definitions
    #[arg(long, default_value_t = false)]
    files_only: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank files and definitions for a query and print them
    Search {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// Print results (with content) as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
        query: String,
    },
    /// Retrieve context for each question and ask the chat model
    Ask {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// Chat model name
        #[arg(long, default_value = codeqa_assistant::client::DEFAULT_MODEL)]
        model: String,
        /// Base URL of the OpenAI-compatible API
        #[arg(long, env = "OPENAI_BASE_URL", default_value = codeqa_assistant::client::DEFAULT_BASE_URL)]
        base_url: String,
        #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
        api_key: String,
        /// Request timeout seconds
        #[arg(long, default_value_t = 60)]
        timeout_secs: u64,
        #[arg(required = true)]
        questions: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { corpus, json, query } => {
            let retriever = build_retriever(&corpus)?;
            let results = retriever.search(&query, corpus.top_n)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print_results(&results);
            }
            Ok(())
        }
        Commands::Ask { corpus, model, base_url, api_key, timeout_secs, questions } => {
            let retriever = build_retriever(&corpus)?;
            let config = ChatConfig { api_key, base_url, model, timeout: Duration::from_secs(timeout_secs) };
            let client = ChatClient::new(config)?;
            for question in &questions {
                ask(&retriever, &client, question, corpus.top_n).await?;
            }
            Ok(())
        }
    }
}

fn build_retriever(args: &CorpusArgs) -> Result<Retriever> {
    let files = discovery::find_code_files(&args.root);
    tracing::info!(root = %args.root.display(), files = files.len(), "found code files");

    let mode = if args.files_only { CorpusMode::Files } else { CorpusMode::FilesAndDefinitions };
    let corpus = Corpus::build(&files, mode)
        .with_context(|| format!("indexing {}", args.root.display()))?;
    Ok(Retriever::new(corpus)?)
}

async fn ask(retriever: &Retriever, client: &ChatClient, question: &str, top_n: usize) -> Result<()> {
    let start = Instant::now();
    tracing::info!(question, "searching for the most relevant files");
    let results = retriever.search(question, top_n)?;
    println!("Results:");
    print_results(&results);

    let messages = build_messages(&results, question);
    let answer = client
        .complete(&messages)
        .await
        .with_context(|| format!("asking {} about {question:?}", client.model()))?;
    println!("For the following question:");
    println!("{question}");
    println!("The response is:");
    println!("{answer}");
    println!("Time taken: {:.3}s", start.elapsed().as_secs_f64());
    println!("-----------------------------------");
    Ok(())
}

fn print_results(results: &[ScoredResult]) {
    for hit in results {
        println!("{} - Score: {}", hit.identifier, hit.score);
    }
}
