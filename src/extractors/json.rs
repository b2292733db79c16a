//! JSON body extractor whose rejection renders through `AppError`, so parse failures
//! share the error envelope of every other failure. Only JSON objects are accepted:
//! derived struct visitors would otherwise take positional arrays.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug)]
pub struct JsonBody<T>(pub T);

/// Build the payload from an already parsed body. Non-object bodies are rejected.
pub fn payload_from_value<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    if !value.is_object() {
        return Err(AppError::InvalidBody {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "request body must be a JSON object".into(),
        });
    }
    serde_json::from_value(value).map_err(|e| AppError::InvalidBody {
        status: StatusCode::UNPROCESSABLE_ENTITY,
        message: e.to_string(),
    })
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;
        Ok(JsonBody(payload_from_value(value)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{NewClient, NewProduct, NewStock};

    fn rejected_status<T: DeserializeOwned + std::fmt::Debug>(value: Value) -> StatusCode {
        match payload_from_value::<T>(value) {
            Err(AppError::InvalidBody { status, .. }) => status,
            other => panic!("expected InvalidBody, got {:?}", other),
        }
    }

    #[test]
    fn positional_array_is_not_a_payload() {
        let body = serde_json::json!(["Widget", "hardware", 5.0, 9.99]);
        assert_eq!(rejected_status::<NewProduct>(body), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn scalar_and_null_bodies_are_rejected() {
        assert_eq!(rejected_status::<NewStock>(serde_json::json!(5)), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(rejected_status::<NewClient>(Value::Null), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(rejected_status::<NewClient>(serde_json::json!("Ada")), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn missing_field_names_the_field() {
        let err = payload_from_value::<NewStock>(serde_json::json!({"product_name": "Widget", "quantity": 1}))
            .unwrap_err();
        assert!(err.to_string().contains("price_per_unit"));
    }

    #[test]
    fn object_body_builds_the_payload() {
        let client: NewClient =
            payload_from_value(serde_json::json!({"name": "Ada", "email": "a@b.c", "phone": "1"})).unwrap();
        assert_eq!(client.name, "Ada");
    }
}
