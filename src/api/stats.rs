use crate::aggregations::{self, Stat};
use crate::api::common::{self, ApiError};
use crate::api::ApiState;
use crate::data::read;
use crate::model::Field;

use axum::extract::{Query, State};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct DateParams {
    date: String,
}

pub async fn max_temperature(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<DateParams>,
) -> Result<String, ApiError> {
    stat_sentence(&state, Field::Temperature, Stat::Max, &params.date)
}

pub async fn min_temperature(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<DateParams>,
) -> Result<String, ApiError> {
    stat_sentence(&state, Field::Temperature, Stat::Min, &params.date)
}

pub async fn average_temperature(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<DateParams>,
) -> Result<String, ApiError> {
    stat_sentence(&state, Field::Temperature, Stat::Average, &params.date)
}

pub async fn max_humidity(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<DateParams>,
) -> Result<String, ApiError> {
    stat_sentence(&state, Field::Humidity, Stat::Max, &params.date)
}

pub async fn min_humidity(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<DateParams>,
) -> Result<String, ApiError> {
    stat_sentence(&state, Field::Humidity, Stat::Min, &params.date)
}

pub async fn average_humidity(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<DateParams>,
) -> Result<String, ApiError> {
    stat_sentence(&state, Field::Humidity, Stat::Average, &params.date)
}

fn stat_sentence(
    state: &ApiState,
    field: Field,
    stat: Stat,
    raw_date: &str,
) -> Result<String, ApiError> {
    let date = common::parse_date(raw_date)?;

    let conn = state.db.get()?;

    //Empty days get a friendly sentence, never a computation over nothing
    if !read::exists_for_date(&conn, date).map_err(ApiError::Db)? {
        return Ok(format!("There are no measurements on: {}", raw_date));
    }

    let measurements = read::get_by_date(&conn, date).map_err(ApiError::Db)?;
    let samples: Vec<&str> = measurements
        .iter()
        .map(|measurement| field.extract(measurement))
        .collect();

    let value = aggregations::compute(stat, &samples)
        .map_err(|err| ApiError::InvalidMeasurementData(err.to_string()))?;

    Ok(render_sentence(field, stat, raw_date, value))
}

fn render_sentence(field: Field, stat: Stat, raw_date: &str, value: f64) -> String {
    //Averages always show two decimals, extremes print as stored
    let rendered = match stat {
        Stat::Average => format!("{:.2}", value),
        Stat::Max | Stat::Min => value.to_string(),
    };

    match field {
        Field::Temperature => format!(
            "On {} the {} temperature was {} degree Celsius.",
            raw_date,
            stat.adjective(),
            rendered
        ),
        Field::Humidity => format!(
            "On {} the {} humidity was {}%.",
            raw_date,
            stat.adjective(),
            rendered
        ),
    }
}
