use domain::{Answer, Citation};
use serde::Serialize;
use utoipa::ToSchema;

/// Answer to a question together with the citations backing it.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct AskResponse {
    pub(crate) answer: String,
    pub(crate) citations: Vec<Citation>,
    /// The `lang` value of the request, echoed verbatim.
    pub(crate) lang: String,
}

impl AskResponse {
    pub(crate) fn new(answer: Answer, lang: String) -> Self {
        Self {
            answer: answer.text,
            citations: answer.citations,
            lang,
        }
    }
}
