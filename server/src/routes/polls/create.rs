use actix_web::{
    web::{block, Data, Json},
    Result,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use db::{
    get_conn,
    models::{Choice, Question},
    PgPool,
};
use errors::Error;

use crate::validate::validate;

#[derive(Clone, Deserialize, Serialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = "1", message = "question_text is required"))]
    question_text: String,
    pub_date: Option<DateTime<Utc>>,
    #[serde(default)]
    choices: Vec<String>,
}

pub async fn create(
    pool: Data<PgPool>,
    params: Json<CreateQuestionRequest>,
) -> Result<Json<Question>, Error> {
    validate(&params)?;

    let now = Utc::now();
    let conn = get_conn(&pool)?;
    let params = params.into_inner();

    let res = block(move || -> Result<Question, Error> {
        let question = Question::create(
            &conn,
            params.question_text.clone(),
            params.pub_date.unwrap_or(now),
        )?;

        for choice_text in params.choices {
            Choice::create(&conn, question.id, choice_text)?;
        }

        Ok(question)
    })
    .await?;
    let question = res?;

    Ok(Json(question))
}
