use crate::api::common::{self, ApiError};
use crate::api::ApiState;
use crate::common::payload;
use crate::data::{read, write};
use crate::model::Measurement;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct CreateParams {
    payload: String,
}

#[derive(Deserialize)]
pub struct DateParams {
    date: String,
}

pub async fn welcome() -> &'static str {
    "Measurement service ready, pick an operation!"
}

pub async fn create(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<CreateParams>,
) -> Result<String, ApiError> {
    let reading = payload::parse_payload(&params.payload)
        .map_err(|err| ApiError::MalformedPayload(err.to_string()))?;

    let mut conn = state.db.get()?;

    //Stamp with the local calendar date, not the device clock
    let today = Local::now().date_naive();

    write::record_submission(&mut conn, &reading, today).map_err(ApiError::Db)?;

    //The device gets the same answer whether the reading was committed or
    //merely counted; the difference only shows up in the logs
    Ok("Measurement saved correctly.".to_string())
}

pub async fn get_all(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Measurement>>, ApiError> {
    let conn = state.db.get()?;

    let measurements = read::get_all_measurements(&conn).map_err(ApiError::Db)?;

    Ok(Json(measurements))
}

pub async fn get_by_date(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<DateParams>,
) -> Result<Response, ApiError> {
    let date = common::parse_date(&params.date)?;

    let conn = state.db.get()?;

    if !read::exists_for_date(&conn, date).map_err(ApiError::Db)? {
        return Ok(format!("There are no measurements on: {}", params.date).into_response());
    }

    let measurements = read::get_by_date(&conn, date).map_err(ApiError::Db)?;

    Ok(Json(measurements).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tables;
    use r2d2_sqlite::SqliteConnectionManager;

    fn test_state() -> Arc<ApiState> {
        let manager = SqliteConnectionManager::memory();
        let pool = r2d2::Pool::builder().max_size(1).build(manager).unwrap();
        let conn = pool.get().unwrap();
        conn.execute(tables::MEASUREMENT_TABLE, []).unwrap();
        conn.execute(tables::COUNTER_TABLE, []).unwrap();
        drop(conn);
        Arc::new(ApiState { db: Arc::new(pool) })
    }

    async fn body_text(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn empty_day_listing_answers_with_the_no_measurements_message() {
        let state = test_state();

        let params = DateParams {
            date: "01/01/2024".to_string(),
        };
        let response = get_by_date(State(state), Query(params)).await.unwrap();

        assert_eq!(
            body_text(response).await,
            b"There are no measurements on: 01/01/2024"
        );
    }

    #[tokio::test]
    async fn committed_submission_shows_up_in_the_date_listing() {
        let state = test_state();

        //Fresh counter: first submission is counted, second is committed
        for _ in 0..2 {
            let params = CreateParams {
                payload: "60-22-21".to_string(),
            };
            create(State(state.clone()), Query(params)).await.unwrap();
        }

        let raw_date = Local::now().date_naive().format("%d/%m/%Y").to_string();
        let response = get_by_date(State(state), Query(DateParams { date: raw_date }))
            .await
            .unwrap();

        let listed: Vec<Measurement> = serde_json::from_slice(&body_text(response).await).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].humidity, "60");
        assert_eq!(listed[0].perceived_temperature, "21");
    }
}
