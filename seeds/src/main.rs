use chrono::{Duration, Utc};
use dotenv::dotenv;

use db::{
    get_conn,
    models::{Choice, Question},
    new_pool,
};

fn main() {
    dotenv().ok();

    let pool = new_pool();
    let conn = get_conn(&pool).unwrap();

    let seeds: Vec<(&str, i64, Vec<&str>)> = vec![
        (
            "What's new?",
            -1,
            vec!["Not much", "The sky", "Just hacking again"],
        ),
        (
            "What's your favourite editor?",
            -7,
            vec!["vim", "emacs", "something else entirely"],
        ),
        // future-dated on purpose, stays hidden until the date passes
        ("Attending the next meetup?", 14, vec!["Yes", "No"]),
    ];

    for (question_text, offset_days, choice_texts) in seeds {
        let question = Question::create(
            &conn,
            question_text.to_string(),
            Utc::now() + Duration::days(offset_days),
        )
        .unwrap();

        for choice_text in choice_texts {
            Choice::create(&conn, question.id, choice_text.to_string()).unwrap();
        }
    }
}
