use actix_web::{
    web::{block, Data, Json},
    Result,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{get_conn, models::Question, PgPool};
use errors::Error;

pub const NO_POLLS_MESSAGE: &str = "No polls are available.";

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct IndexResponse {
    pub questions: Vec<Question>,
    pub message: Option<String>,
}

pub async fn index(pool: Data<PgPool>) -> Result<Json<IndexResponse>, Error> {
    let now = Utc::now();
    let conn = get_conn(&pool)?;

    let res = block(move || Question::published(&conn, now)).await?;
    let questions = res?;

    let message = if questions.is_empty() {
        Some(NO_POLLS_MESSAGE.to_string())
    } else {
        None
    };

    Ok(Json(IndexResponse { questions, message }))
}
