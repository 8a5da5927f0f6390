use chrono::{DateTime, Utc};
use diesel::{self, ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::Question;
use crate::schema::choices;

#[derive(Associations, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
#[belongs_to(Question)]
pub struct Choice {
    pub id: i32,
    pub question_id: i32,
    pub choice_text: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "choices"]
pub struct NewChoice {
    pub question_id: i32,
    pub choice_text: String,
}

impl Choice {
    pub fn create(
        conn: &PgConnection,
        question_id: i32,
        choice_text: String,
    ) -> Result<Choice, Error> {
        let choice = diesel::insert_into(choices::table)
            .values(NewChoice {
                question_id,
                choice_text,
            })
            .get_result(conn)?;

        Ok(choice)
    }

    pub fn find_by_question_id(
        conn: &PgConnection,
        question_id: i32,
    ) -> Result<Vec<Choice>, Error> {
        use choices::dsl::{choices as choices_table, id, question_id as question_id_field};

        let results = choices_table
            .filter(question_id_field.eq(question_id))
            .order(id)
            .get_results(conn)?;

        Ok(results)
    }

    /// Adds one vote to a choice. Filtering on both ids means a choice id
    /// belonging to a different question comes back as NotFound rather
    /// than counting against the wrong question.
    pub fn add_vote(conn: &PgConnection, question_id: i32, choice_id: i32) -> Result<Choice, Error> {
        use choices::dsl::{choices as choices_table, id, question_id as question_id_field, votes};

        let choice = diesel::update(
            choices_table
                .filter(id.eq(choice_id))
                .filter(question_id_field.eq(question_id)),
        )
        .set(votes.eq(votes + 1))
        .get_result(conn)?;

        Ok(choice)
    }
}
