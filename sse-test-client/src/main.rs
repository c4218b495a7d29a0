use anyhow::Result;
use clap::Parser;
use colored::*;

mod api_client;
mod output;
mod scenarios;
mod sequence;
mod sse_client;

use api_client::ApiClient;
use output::print_test_summary;
use scenarios::AskInput;

#[derive(Parser)]
#[command(name = "sse-test-client")]
#[command(about = "Ask endpoint integration testing tool")]
struct Cli {
    /// Base URL of the backend (e.g., http://localhost:8000)
    #[arg(long)]
    base_url: String,

    /// Question sent to /ask and /ask/stream
    #[arg(long, default_value = "Madde 1 neyi düzenler?")]
    question: String,

    /// Language hint echoed back by the backend
    #[arg(long, default_value = "auto")]
    lang: String,

    /// Number of passages to retrieve
    #[arg(long, default_value_t = 6)]
    top_k: i64,

    /// Test scenario to run
    #[arg(long, value_enum, default_value = "all")]
    scenario: ScenarioChoice,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

#[derive(clap::ValueEnum, Clone)]
enum ScenarioChoice {
    /// Check GET /health
    Health,
    /// Check POST /ask
    Ask,
    /// Check the event order of GET /ask/stream
    Stream,
    /// Run every scenario
    All,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    let base_url = cli.base_url.trim_end_matches('/').to_string();
    let api_client = ApiClient::new(reqwest::Client::new(), base_url.clone());
    let input = AskInput {
        question: &cli.question,
        lang: &cli.lang,
        top_k: cli.top_k,
    };

    println!("\n{}", "=== TEST PHASE ===".bright_white().bold());

    let mut results = Vec::new();

    match cli.scenario {
        ScenarioChoice::Health => {
            results.push(scenarios::test_health(&api_client).await);
        }
        ScenarioChoice::Ask => {
            results.push(scenarios::test_ask(&api_client, &input).await);
        }
        ScenarioChoice::Stream => {
            results.push(scenarios::test_stream(&base_url, &input, cli.verbose).await);
        }
        ScenarioChoice::All => {
            results.push(scenarios::test_health(&api_client).await);
            results.push(scenarios::test_ask(&api_client, &input).await);
            results.push(scenarios::test_stream(&base_url, &input, cli.verbose).await);
        }
    }

    println!("\n{}", "=== RESULTS ===".bright_white().bold());
    print_test_summary(&results);

    let all_passed = results.iter().all(|r| r.passed);

    if all_passed {
        println!("\n{}", "All tests passed! ✓".bright_green().bold());
    } else {
        println!("\n{}", "Some tests failed! ✗".bright_red().bold());
    }

    std::process::exit(if all_passed { 0 } else { 1 });
}
