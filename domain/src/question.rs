use crate::error::Error;

/// Number of passages a future retriever should consider when a caller does not say.
pub const DEFAULT_TOP_K: i64 = 6;

/// Language tag meaning "answer in the language of the question".
pub const DEFAULT_LANG: &str = "auto";

/// A question as received from a client.
///
/// None of the fields are validated: `text` may be empty, `top_k` carries no range and
/// `lang` is an opaque tag that is echoed back verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub top_k: i64,
    pub session_id: Option<String>,
    pub lang: String,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            top_k: DEFAULT_TOP_K,
            session_id: None,
            lang: DEFAULT_LANG.to_string(),
        }
    }

    pub fn with_top_k(mut self, top_k: i64) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_session_id(mut self, session_id: Option<String>) -> Self {
        self.session_id = session_id;
        self
    }
}

/// Parses a textual `top_k` value such as a query string parameter.
///
/// Surrounding whitespace and a leading sign are accepted. No bounds are enforced.
pub fn parse_top_k(raw: &str) -> Result<i64, Error> {
    raw.trim().parse::<i64>().map_err(|err| {
        Error::invalid(format!("top_k must be an integer, got {raw:?}")).with_source(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainErrorKind, InternalErrorKind};

    #[test]
    fn new_question_uses_defaults() {
        let question = Question::new("Madde 1 ne diyor?");

        assert_eq!(question.top_k, DEFAULT_TOP_K);
        assert_eq!(question.lang, "auto");
        assert_eq!(question.session_id, None);
    }

    #[test]
    fn builders_override_defaults() {
        let question = Question::new("")
            .with_top_k(-3)
            .with_lang("not-a-language")
            .with_session_id(Some("abc".to_string()));

        assert_eq!(question.text, "");
        assert_eq!(question.top_k, -3);
        assert_eq!(question.lang, "not-a-language");
        assert_eq!(question.session_id.as_deref(), Some("abc"));
    }

    #[test]
    fn parse_top_k_accepts_signed_and_padded_integers() {
        assert_eq!(parse_top_k("3").unwrap(), 3);
        assert_eq!(parse_top_k(" 12 ").unwrap(), 12);
        assert_eq!(parse_top_k("-1").unwrap(), -1);
        assert_eq!(parse_top_k("+1000000").unwrap(), 1_000_000);
    }

    #[test]
    fn parse_top_k_rejects_non_numeric_input() {
        for raw in ["abc", "", "3.5", "6e2"] {
            let err = parse_top_k(raw).unwrap_err();
            match err.error_kind {
                DomainErrorKind::Internal(InternalErrorKind::Invalid(message)) => {
                    assert!(message.contains("top_k"), "unexpected message: {message}");
                }
                other => panic!("unexpected error kind for {raw:?}: {other:?}"),
            }
        }
    }
}
