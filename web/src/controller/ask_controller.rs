use crate::params::ask::AskParams;
use crate::response::ask::AskResponse;
use axum::Json;
use domain::{answer as AnswerApi, Question};
use log::*;

/// POST ask a question and receive the whole answer at once
#[utoipa::path(
    post,
    path = "/ask",
    request_body = AskParams,
    responses(
        (status = 200, description = "Successfully answered the question", body = AskResponse),
        (status = 400, description = "Request body is not valid JSON"),
        (status = 415, description = "Request body is not declared as JSON"),
        (status = 422, description = "Request body does not match the expected schema"),
    )
)]
pub async fn ask(Json(params): Json<AskParams>) -> Json<AskResponse> {
    debug!("POST ask, question: {:?}", params.question);

    let question = Question::from(params);
    let answer = AnswerApi::answer(&question);

    Json(AskResponse::new(answer, question.lang))
}
