use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};
use chrono::Utc;

use db::{get_conn, models::Question, PgPool};
use errors::Error;

pub async fn detail(pool: Data<PgPool>, params: Path<i32>) -> Result<Json<Question>, Error> {
    let question_id = params.into_inner();
    let now = Utc::now();
    let conn = get_conn(&pool)?;

    let res = block(move || Question::find_visible(&conn, question_id, now)).await?;
    let question = res?;

    Ok(Json(question))
}
