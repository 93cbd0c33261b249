use crate::{error::AppError, queue::TaskQueue};
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Deserializer};
use serde_json::json;

/// Delegated-computation request. `amount` arrives as either a number or a
/// numeric string, matching what existing clients send.
#[derive(Debug, Deserialize)]
pub struct ComputeRequest {
    #[serde(deserialize_with = "amount_from_value")]
    pub amount: i64,
    pub x: i64,
    pub y: i64,
}

fn amount_from_value<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(i64),
        Text(String),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(n) => Ok(n),
        Amount::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Submits the computation to the worker pool and waits for its result.
///
/// The request blocks until the worker replies; a slow job stalls this
/// request and nothing else.
#[post("/ex1")]
pub async fn run_task(
    queue: web::Data<TaskQueue>,
    data: web::Json<ComputeRequest>,
) -> Result<impl Responder, AppError> {
    let handle = queue.submit(data.amount, data.x, data.y).await?;
    log::debug!("ex1 waiting on job {}", handle.id());

    let result = handle.get().await?;
    Ok(HttpResponse::Ok().json(json!({ "Result": result })))
}
