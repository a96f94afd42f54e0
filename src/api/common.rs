use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use tracing::error;

//Date format the sensor dashboard sends, day first
const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug)]
pub enum ApiError {
    MalformedPayload(String),
    InvalidDateFormat(String),
    InvalidMeasurementData(String),
    CounterNotFound,
    Db(anyhow::Error),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::MalformedPayload(msg) => write!(f, "Malformed payload: {}", msg),
            ApiError::InvalidDateFormat(msg) => write!(f, "Invalid date: {}", msg),
            ApiError::InvalidMeasurementData(msg) => {
                write!(f, "Invalid measurement data: {}", msg)
            }
            ApiError::CounterNotFound => write!(f, "Counter not found"),
            ApiError::Db(err) => write!(f, "Database error: {}", err),
        }
    }
}

impl From<r2d2::Error> for ApiError {
    fn from(err: r2d2::Error) -> Self {
        ApiError::Db(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MalformedPayload(_) | ApiError::InvalidDateFormat(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::CounterNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidMeasurementData(_) | ApiError::Db(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("{}", self);
        }

        (status, self.to_string()).into_response()
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|err| {
        ApiError::InvalidDateFormat(format!("couldn't parse {:?} as dd/mm/yyyy: {}", raw, err))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_first_dates() {
        let date = parse_date("01/01/2024").unwrap();

        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(parse_date("31/12/1999").unwrap().to_string(), "1999-12-31");
    }

    #[test]
    fn rejects_other_formats() {
        assert!(parse_date("2024-01-01").is_err());
        assert!(parse_date("32/01/2024").is_err());
        assert!(parse_date("yesterday").is_err());
    }
}
