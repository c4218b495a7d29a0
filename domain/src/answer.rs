use crate::error::Error;
use crate::question::Question;
use log::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const DEMO_ANSWER: &str =
    "Demo: Backend çalışıyor. RAG ekleyince cevaplar yalnızca kurum içi belgelere dayanacak.";

const DEMO_STREAM_ANSWER: &str =
    "Demo SSE: Akış çalışıyor. RAG entegre edildiğinde yanıtlar iç dokümanlardan üretilecek.";

/// A reference to the source document section an answer relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "title": "Demo Kanun",
    "section": "Madde 1",
    "date": "2025-01-01",
    "page": "§1"
}))]
pub struct Citation {
    pub title: String,
    pub section: String,
    /// ISO-8601 style date of the cited document.
    pub date: String,
    pub page: String,
}

/// Answer text together with the citations backing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub citations: Vec<Citation>,
}

impl Answer {
    /// Whitespace delimited words of the answer, in order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }

    /// Citations as a JSON array. Non-ASCII characters are written literally.
    pub fn citations_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(&self.citations)?)
    }
}

/// Answers a question for the synchronous endpoint.
pub fn answer(question: &Question) -> Answer {
    debug!(
        "Answering question (top_k: {}, lang: {}, session: {:?})",
        question.top_k, question.lang, question.session_id
    );

    Answer {
        text: DEMO_ANSWER.to_string(),
        citations: demo_citations(),
    }
}

/// Answers a question for the streaming endpoint.
pub fn stream_answer(question: &Question) -> Answer {
    debug!(
        "Answering streamed question (top_k: {}, lang: {})",
        question.top_k, question.lang
    );

    Answer {
        text: DEMO_STREAM_ANSWER.to_string(),
        citations: demo_citations(),
    }
}

fn demo_citations() -> Vec<Citation> {
    vec![Citation {
        title: "Demo Kanun".to_string(),
        section: "Madde 1".to_string(),
        date: "2025-01-01".to_string(),
        page: "§1".to_string(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_is_fixed_regardless_of_question() {
        let first = answer(&Question::new("Madde 1 ne diyor?"));
        let second = answer(&Question::new("").with_top_k(-10).with_lang("xx"));

        assert_eq!(first, second);
        assert_eq!(first.text, DEMO_ANSWER);
        assert_eq!(first.citations.len(), 1);
    }

    #[test]
    fn stream_answer_has_eleven_words() {
        let answer = stream_answer(&Question::new("x"));

        let words: Vec<&str> = answer.words().collect();
        assert_eq!(words.len(), 11);
        assert_eq!(words.first(), Some(&"Demo"));
        assert_eq!(words.last(), Some(&"üretilecek."));
    }

    #[test]
    fn citations_json_keeps_non_ascii_characters() {
        let answer = stream_answer(&Question::new("x"));

        let json = answer.citations_json().unwrap();
        assert_eq!(
            json,
            r#"[{"title":"Demo Kanun","section":"Madde 1","date":"2025-01-01","page":"§1"}]"#
        );
    }

    #[test]
    fn citations_json_round_trips_into_citations() {
        let answer = answer(&Question::new("x"));

        let parsed: Vec<Citation> = serde_json::from_str(&answer.citations_json().unwrap()).unwrap();
        assert_eq!(parsed, answer.citations);
    }
}
