use std::collections::HashMap;

use axum::{
    extract::{Form, FromRequest, Request},
    http::header,
    Extension, Json,
};
use serde_json::{Map, Value};

use super::ScreeningHandlerState;
use crate::domain::models::AnswerQueryResponse;
use crate::screening::answer_for;
use crate::shared::errors::ServiceError;
use crate::shared::logging::log_chat_answer;

fn is_form(request: &Request) -> bool {
    request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

/// Body as a JSON object, whether it was sent as JSON or urlencoded.
/// Anything unreadable becomes `Null`, which has no fields.
async fn read_body(request: Request) -> Value {
    if is_form(&request) {
        match Form::<HashMap<String, String>>::from_request(request, &()).await {
            Ok(Form(fields)) => Value::Object(
                fields
                    .into_iter()
                    .map(|(name, value)| (name, Value::String(value)))
                    .collect::<Map<_, _>>(),
            ),
            Err(_) => Value::Null,
        }
    } else {
        match Json::<Value>::from_request(request, &()).await {
            Ok(Json(body)) => body,
            Err(_) => Value::Null,
        }
    }
}

fn required(body: &Value, field: &'static str) -> Result<String, ServiceError> {
    let value = match body.get(field) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        _ => return Err(ServiceError::MissingField(field)),
    };

    if value.trim().is_empty() {
        return Err(ServiceError::MissingField(field));
    }
    Ok(value)
}

/// POST /api/answer_query
/// Canned answer chosen by keyword, after an artificial delay
pub async fn answer_query_handler(
    Extension(state): Extension<ScreeningHandlerState>,
    request: Request,
) -> Result<Json<AnswerQueryResponse>, ServiceError> {
    let body = read_body(request).await;
    let nm_id = required(&body, "nm_id")?;
    let user_query = required(&body, "user_query")?;

    let (topic, answer) = answer_for(&user_query);
    tokio::time::sleep(state.answer_delay).await;
    log_chat_answer(&nm_id, topic.as_str());

    Ok(Json(AnswerQueryResponse { answer }))
}
