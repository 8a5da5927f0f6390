use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{
    get_conn,
    models::{Choice, Question},
    PgPool,
};
use errors::Error;

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct ResultsResponse {
    pub id: i32,
    pub question_text: String,
    pub choices: Vec<Choice>,
}

pub async fn results(pool: Data<PgPool>, params: Path<i32>) -> Result<Json<ResultsResponse>, Error> {
    let question_id = params.into_inner();
    let now = Utc::now();
    let conn = get_conn(&pool)?;

    let res = block(move || -> Result<(Question, Vec<Choice>), Error> {
        let question = Question::find_visible(&conn, question_id, now)?;
        let choices = Choice::find_by_question_id(&conn, question.id)?;

        Ok((question, choices))
    })
    .await?;

    let (question, choices) = res?;

    Ok(Json(ResultsResponse {
        id: question.id,
        question_text: question.question_text,
        choices,
    }))
}
