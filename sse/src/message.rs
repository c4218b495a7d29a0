use axum::response::sse::Event;
use domain::{error::Error, Answer};

/// Data carried by the terminating `end` event.
pub const END_DATA: &str = "done";

/// Trait for getting the SSE event type name
pub trait EventType {
    fn event_type(&self) -> &'static str;
}

/// One event of a streamed answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerEvent {
    /// A single word of the answer followed by one space.
    Token(String),
    /// JSON encoded array of citations.
    Citations(String),
    /// The complete answer text.
    Final(String),
    End,
}

impl EventType for AnswerEvent {
    fn event_type(&self) -> &'static str {
        match self {
            AnswerEvent::Token(_) => "token",
            AnswerEvent::Citations(_) => "citations",
            AnswerEvent::Final(_) => "final",
            AnswerEvent::End => "end",
        }
    }
}

impl AnswerEvent {
    pub fn token(word: &str) -> Self {
        AnswerEvent::Token(format!("{word} "))
    }

    pub fn is_token(&self) -> bool {
        matches!(self, AnswerEvent::Token(_))
    }

    /// The `data` field payload.
    pub fn data(&self) -> &str {
        match self {
            AnswerEvent::Token(data) | AnswerEvent::Citations(data) | AnswerEvent::Final(data) => {
                data
            }
            AnswerEvent::End => END_DATA,
        }
    }

    /// Builds the axum event, which frames as `event: <name>\ndata: <payload>\n\n`.
    pub fn into_event(self) -> Event {
        Event::default().event(self.event_type()).data(self.data())
    }

    /// The full ordered event sequence for an answer.
    pub fn sequence(answer: &Answer) -> Result<Vec<AnswerEvent>, Error> {
        let mut events: Vec<AnswerEvent> = answer.words().map(AnswerEvent::token).collect();
        events.push(AnswerEvent::Citations(answer.citations_json()?));
        events.push(AnswerEvent::Final(answer.text.clone()));
        events.push(AnswerEvent::End);
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{answer, Citation, Question};

    fn names(events: &[AnswerEvent]) -> Vec<&'static str> {
        events.iter().map(|e| e.event_type()).collect()
    }

    #[test]
    fn sequence_is_tokens_then_citations_final_end() {
        let answer = answer::stream_answer(&Question::new("x"));
        let events = AnswerEvent::sequence(&answer).unwrap();

        let word_count = answer.words().count();
        assert_eq!(events.len(), word_count + 3);
        assert!(events[..word_count].iter().all(AnswerEvent::is_token));
        assert_eq!(names(&events[word_count..]), vec!["citations", "final", "end"]);
    }

    #[test]
    fn token_data_is_word_with_trailing_space() {
        let answer = answer::stream_answer(&Question::new("x"));
        let events = AnswerEvent::sequence(&answer).unwrap();

        assert_eq!(events[0], AnswerEvent::Token("Demo ".to_string()));
        assert_eq!(events[1].data(), "SSE: ");
    }

    #[test]
    fn trailing_events_carry_citations_answer_and_done() {
        let answer = answer::stream_answer(&Question::new("x"));
        let events = AnswerEvent::sequence(&answer).unwrap();
        let n = events.len();

        let citations: Vec<Citation> = serde_json::from_str(events[n - 3].data()).unwrap();
        assert_eq!(citations, answer.citations);
        assert!(events[n - 3].data().contains('§'));
        assert_eq!(events[n - 2].data(), answer.text);
        assert_eq!(events[n - 1].data(), "done");
    }

    #[test]
    fn empty_answer_still_terminates() {
        let answer = Answer {
            text: "   ".to_string(),
            citations: vec![],
        };
        let events = AnswerEvent::sequence(&answer).unwrap();

        assert_eq!(names(&events), vec!["citations", "final", "end"]);
        assert_eq!(events[0].data(), "[]");
    }
}
