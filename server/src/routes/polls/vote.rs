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

#[derive(Clone, Deserialize, Serialize)]
pub struct VoteRequest {
    pub choice_id: i32,
}

pub async fn vote(
    pool: Data<PgPool>,
    params: Path<i32>,
    body: Json<VoteRequest>,
) -> Result<Json<Choice>, Error> {
    let question_id = params.into_inner();
    let choice_id = body.choice_id;
    let now = Utc::now();
    let conn = get_conn(&pool)?;

    let res = block(move || {
        // the question must be visible before any of its choices can take a vote
        let question = Question::find_visible(&conn, question_id, now)?;

        Choice::add_vote(&conn, question.id, choice_id)
    })
    .await?;
    let choice = res?;

    Ok(Json(choice))
}
