use serde_json::Value;

use crate::sse_client::{Event, END_EVENT};

const CITATION_FIELDS: [&str; 4] = ["title", "section", "date", "page"];

/// What a well-formed answer stream carried.
#[derive(Debug, PartialEq, Eq)]
pub struct StreamSummary {
    pub tokens: usize,
    pub citations: usize,
    pub answer: String,
}

/// Checks that `events` follow `token* citations final end`.
///
/// The `final` payload must equal the concatenated token payloads with trailing
/// whitespace removed, and `end` must carry `done`.
pub fn verify_sequence(events: &[Event]) -> Result<StreamSummary, String> {
    let tokens: Vec<&Event> = events
        .iter()
        .take_while(|e| e.event_type == "token")
        .collect();
    let rest = &events[tokens.len()..];

    let names: Vec<&str> = rest.iter().map(|e| e.event_type.as_str()).collect();
    if names != ["citations", "final", END_EVENT] {
        return Err(format!(
            "expected citations, final, end after {} tokens, got {:?}",
            tokens.len(),
            names
        ));
    }

    let citations = check_citations(&rest[0].data)?;

    let streamed: String = tokens.iter().map(|e| e.data.as_str()).collect();
    let answer = rest[1].data.clone();
    if streamed.trim_end() != answer.trim_end() {
        return Err(format!(
            "final answer {:?} does not match streamed tokens {:?}",
            answer, streamed
        ));
    }

    if rest[2].data != "done" {
        return Err(format!("end event carried {:?} instead of \"done\"", rest[2].data));
    }

    Ok(StreamSummary {
        tokens: tokens.len(),
        citations,
        answer,
    })
}

fn check_citations(data: &str) -> Result<usize, String> {
    let value: Value =
        serde_json::from_str(data).map_err(|e| format!("citations are not JSON: {}", e))?;
    let items = value
        .as_array()
        .ok_or_else(|| format!("citations are not a JSON array: {}", data))?;

    for item in items {
        for field in CITATION_FIELDS {
            if !item.get(field).is_some_and(Value::is_string) {
                return Err(format!("citation is missing {:?}: {}", field, item));
            }
        }
    }

    Ok(items.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CITATIONS: &str =
        r#"[{"title":"Demo Kanun","section":"Madde 1","date":"2025-01-01","page":"§1"}]"#;

    fn stream(tokens: &[&str], trailing: &[(&str, &str)]) -> Vec<Event> {
        tokens
            .iter()
            .map(|t| Event::new("token", *t))
            .chain(trailing.iter().map(|(name, data)| Event::new(*name, *data)))
            .collect()
    }

    #[test]
    fn accepts_well_formed_stream() {
        let events = stream(
            &["Demo ", "SSE: ", "çalışıyor. "],
            &[
                ("citations", CITATIONS),
                ("final", "Demo SSE: çalışıyor."),
                ("end", "done"),
            ],
        );

        let summary = verify_sequence(&events).unwrap();

        assert_eq!(
            summary,
            StreamSummary {
                tokens: 3,
                citations: 1,
                answer: "Demo SSE: çalışıyor.".to_string(),
            }
        );
    }

    #[test]
    fn rejects_missing_end() {
        let events = stream(
            &["Demo "],
            &[("citations", CITATIONS), ("final", "Demo")],
        );

        let err = verify_sequence(&events).unwrap_err();

        assert!(err.contains("expected citations, final, end"), "{err}");
    }

    #[test]
    fn rejects_token_after_citations() {
        let events = stream(
            &["Demo "],
            &[
                ("citations", CITATIONS),
                ("token", "late "),
                ("final", "Demo"),
                ("end", "done"),
            ],
        );

        assert!(verify_sequence(&events).is_err());
    }

    #[test]
    fn rejects_final_that_differs_from_tokens() {
        let events = stream(
            &["Demo "],
            &[
                ("citations", CITATIONS),
                ("final", "Something else"),
                ("end", "done"),
            ],
        );

        let err = verify_sequence(&events).unwrap_err();

        assert!(err.contains("does not match"), "{err}");
    }

    #[test]
    fn rejects_incomplete_citation() {
        let events = stream(
            &[],
            &[
                ("citations", r#"[{"title":"Demo Kanun"}]"#),
                ("final", ""),
                ("end", "done"),
            ],
        );

        let err = verify_sequence(&events).unwrap_err();

        assert!(err.contains("section"), "{err}");
    }

    #[test]
    fn rejects_wrong_end_payload() {
        let events = stream(
            &["a "],
            &[("citations", "[]"), ("final", "a"), ("end", "finished")],
        );

        let err = verify_sequence(&events).unwrap_err();

        assert!(err.contains("done"), "{err}");
    }
}
