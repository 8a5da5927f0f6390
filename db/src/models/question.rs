use chrono::{DateTime, Duration, Utc};
use diesel::{self, ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::{choices, questions};

#[derive(Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "questions"]
pub struct NewQuestion {
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    pub fn create(
        conn: &PgConnection,
        question_text: String,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error> {
        let question = diesel::insert_into(questions::table)
            .values(NewQuestion {
                question_text,
                pub_date,
            })
            .get_result(conn)?;

        Ok(question)
    }

    /// Questions published no later than `now` that have at least one
    /// choice, newest first. Questions without choices never appear.
    pub fn published(conn: &PgConnection, now: DateTime<Utc>) -> Result<Vec<Question>, Error> {
        use diesel::dsl::exists;

        let results = questions::table
            .filter(questions::pub_date.le(now))
            .filter(exists(
                choices::table.filter(choices::question_id.eq(questions::id)),
            ))
            .order(questions::pub_date.desc())
            .load::<Question>(conn)?;

        Ok(results)
    }

    /// Looks up a single question under the same visibility rules as
    /// `published`. A future pub_date, a missing row, and a question with
    /// no choices all come back as diesel's NotFound.
    pub fn find_visible(
        conn: &PgConnection,
        question_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Question, Error> {
        use diesel::dsl::exists;

        let question = questions::table
            .filter(questions::id.eq(question_id))
            .filter(questions::pub_date.le(now))
            .filter(exists(
                choices::table.filter(choices::question_id.eq(questions::id)),
            ))
            .first(conn)?;

        Ok(question)
    }

    /// True when the question was published within the last day. The
    /// future does not count as recent, and neither does exactly one
    /// day ago.
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now && self.pub_date > now - Duration::days(1)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};

    use super::Question;

    fn question_published_at(pub_date: DateTime<Utc>) -> Question {
        Question {
            id: 1,
            question_text: "What's new?".to_string(),
            pub_date,
            created_at: pub_date,
            updated_at: pub_date,
        }
    }

    #[test]
    fn test_was_published_recently_with_future_question() {
        let now = Utc::now();
        let question = question_published_at(now + Duration::days(30));

        assert_eq!(question.was_published_recently(now), false);
    }

    #[test]
    fn test_was_published_recently_with_old_question() {
        let now = Utc::now();
        let question = question_published_at(now - Duration::days(30) - Duration::seconds(1));

        assert_eq!(question.was_published_recently(now), false);
    }

    #[test]
    fn test_was_published_recently_with_recent_question() {
        let now = Utc::now();
        let question = question_published_at(
            now - Duration::hours(23) - Duration::minutes(59) - Duration::seconds(59),
        );

        assert_eq!(question.was_published_recently(now), true);
    }

    #[test]
    fn test_was_published_recently_at_exact_day_boundary() {
        let now = Utc::now();
        let question = question_published_at(now - Duration::days(1));

        assert_eq!(question.was_published_recently(now), false);
    }

    #[test]
    fn test_was_published_recently_right_now() {
        let now = Utc::now();
        let question = question_published_at(now);

        assert_eq!(question.was_published_recently(now), true);
    }
}
