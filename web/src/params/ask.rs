use domain::error::Error as DomainError;
use domain::question::{self, DEFAULT_LANG, DEFAULT_TOP_K};
use domain::Question;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// JSON body of `POST /ask`.
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = json!({"question": "Madde 1 neyi düzenler?", "top_k": 6, "lang": "tr"}))]
pub(crate) struct AskParams {
    pub(crate) question: String,
    /// Number of passages to retrieve. Not range checked.
    #[serde(default = "default_top_k")]
    #[schema(default = 6)]
    pub(crate) top_k: i64,
    #[serde(default)]
    pub(crate) session_id: Option<String>,
    /// Opaque language tag, echoed back in the response.
    #[serde(default = "default_lang")]
    #[schema(default = "auto")]
    pub(crate) lang: String,
}

fn default_top_k() -> i64 {
    DEFAULT_TOP_K
}

fn default_lang() -> String {
    DEFAULT_LANG.to_string()
}

impl From<AskParams> for Question {
    fn from(params: AskParams) -> Self {
        Question::new(params.question)
            .with_top_k(params.top_k)
            .with_lang(params.lang)
            .with_session_id(params.session_id)
    }
}

/// Query string of `GET /ask/stream`.
///
/// Every value arrives as text; `top_k` is parsed when converting into a [`Question`].
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct StreamParams {
    /// The question to answer. Defaults to an empty string.
    pub(crate) question: Option<String>,
    /// Opaque language tag. Defaults to `auto`.
    pub(crate) lang: Option<String>,
    /// Integer number of passages to retrieve. Defaults to `6`.
    pub(crate) top_k: Option<String>,
}

impl TryFrom<StreamParams> for Question {
    type Error = DomainError;

    fn try_from(params: StreamParams) -> Result<Self, Self::Error> {
        let top_k = match params.top_k.as_deref() {
            Some(raw) => question::parse_top_k(raw)?,
            None => DEFAULT_TOP_K,
        };

        Ok(Question::new(params.question.unwrap_or_default())
            .with_top_k(top_k)
            .with_lang(params.lang.unwrap_or_else(default_lang)))
    }
}
