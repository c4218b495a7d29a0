use colored::*;
use std::time::{Duration, Instant};

use crate::api_client::ApiClient;
use crate::output::{print_event, TestResult};
use crate::sequence::verify_sequence;
use crate::sse_client::Connection;

/// Upper bound for a whole answer stream, tokens are paced by the server.
const STREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// What to ask in the `ask` and `stream` scenarios.
pub struct AskInput<'a> {
    pub question: &'a str,
    pub lang: &'a str,
    pub top_k: i64,
}

pub async fn test_health(api_client: &ApiClient) -> TestResult {
    let scenario = "health";
    let start = Instant::now();
    println!("\n{} Checking /health...", "→".blue());

    let body = match api_client.health().await {
        Ok(body) => body,
        Err(e) => return TestResult::fail(scenario, format!("{:#}", e), start.elapsed()),
    };

    if body["status"] == "ok" && body["version"].is_string() {
        TestResult::pass(
            scenario,
            format!("version {}", body["version"]),
            start.elapsed(),
        )
    } else {
        TestResult::fail(
            scenario,
            format!("unexpected health body: {}", body),
            start.elapsed(),
        )
    }
}

pub async fn test_ask(api_client: &ApiClient, input: &AskInput<'_>) -> TestResult {
    let scenario = "ask";
    let start = Instant::now();
    println!("\n{} Posting to /ask...", "→".blue());

    let body = match api_client
        .ask(input.question, input.lang, input.top_k)
        .await
    {
        Ok(body) => body,
        Err(e) => return TestResult::fail(scenario, format!("{:#}", e), start.elapsed()),
    };

    if !body["answer"].is_string() {
        return TestResult::fail(scenario, format!("missing answer: {}", body), start.elapsed());
    }
    let citations = match body["citations"].as_array() {
        Some(citations) => citations.len(),
        None => {
            return TestResult::fail(
                scenario,
                format!("missing citations: {}", body),
                start.elapsed(),
            )
        }
    };
    if body["lang"] != input.lang {
        return TestResult::fail(
            scenario,
            format!("lang {} was not echoed, got {}", input.lang, body["lang"]),
            start.elapsed(),
        );
    }

    TestResult::pass(
        scenario,
        format!("{} citation(s), lang echoed", citations),
        start.elapsed(),
    )
}

pub async fn test_stream(base_url: &str, input: &AskInput<'_>, verbose: bool) -> TestResult {
    let scenario = "stream";
    let start = Instant::now();
    println!("\n{} Consuming /ask/stream...", "→".blue());

    let mut connection =
        match Connection::establish(base_url, input.question, input.lang, input.top_k).await {
            Ok(connection) => connection,
            Err(e) => return TestResult::fail(scenario, format!("{:#}", e), start.elapsed()),
        };

    let events = match connection.collect_until_end(STREAM_TIMEOUT).await {
        Ok(events) => events,
        Err(e) => return TestResult::fail(scenario, format!("{:#}", e), start.elapsed()),
    };

    if verbose {
        for event in &events {
            print_event(start, event);
        }
    }

    match verify_sequence(&events) {
        Ok(summary) => TestResult::pass(
            scenario,
            format!(
                "{} tokens, {} citation(s), final: {}",
                summary.tokens, summary.citations, summary.answer
            ),
            start.elapsed(),
        ),
        Err(message) => TestResult::fail(scenario, message, start.elapsed()),
    }
}
