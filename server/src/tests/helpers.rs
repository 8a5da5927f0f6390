#[cfg(test)]
pub mod tests {
    use actix_http::Request;
    use actix_service::Service;
    use actix_web::{dev::ServiceResponse, error::Error, test, App};
    use chrono::{Duration, Utc};
    use serde::{de::DeserializeOwned, Serialize};

    use db::models::{Choice, Question};
    use db::Connection;

    use crate::routes::routes;

    pub async fn get_service() -> impl Service<Request, Response = ServiceResponse, Error = Error>
    {
        test::init_service(App::new().data(db::new_pool()).configure(routes)).await
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = get_service().await;
        let req = test::TestRequest::get().uri(route);

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        });

        (status, json_body)
    }

    /// Helper for HTTP POST integration tests
    pub async fn test_post<T: Serialize, R>(route: &str, params: T) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = get_service().await;
        let req = test::TestRequest::post().set_json(&params).uri(route);

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        });

        (status, json_body)
    }

    /// Inserts a question published `offset_days` from now with a single
    /// choice, so it is visible once the offset is in the past.
    pub fn create_question(conn: &Connection, text: &str, offset_days: i64) -> Question {
        let question = Question::create(
            conn,
            text.to_string(),
            Utc::now() + Duration::days(offset_days),
        )
        .unwrap();

        Choice::create(conn, question.id, "test".to_string()).unwrap();

        question
    }

    /// Same as `create_question`, but without any choices, which keeps the
    /// question out of every view.
    pub fn create_question_no_choice(conn: &Connection, text: &str, offset_days: i64) -> Question {
        Question::create(
            conn,
            text.to_string(),
            Utc::now() + Duration::days(offset_days),
        )
        .unwrap()
    }
}
