use crate::api::common::ApiError;
use crate::api::ApiState;
use crate::data::write;

use axum::extract::{Query, State};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

#[derive(Deserialize)]
pub struct ThresholdParams {
    n: i64,
}

pub async fn set_threshold(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<ThresholdParams>,
) -> Result<String, ApiError> {
    let conn = state.db.get()?;

    write::set_threshold(&conn, params.n).map_err(ApiError::Db)?;
    info!("Submission threshold set to {}", params.n);

    Ok("Count set correctly".to_string())
}

//Legacy endpoint the first firmware revision still calls: updates the
//threshold on the fixed counter row without resetting the running count, and
//fails when the row was never created. Kept distinct from /measurement/count
//on purpose.
pub async fn set_threshold_legacy(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<ThresholdParams>,
) -> Result<String, ApiError> {
    let conn = state.db.get()?;

    let updated = write::update_threshold_only(&conn, params.n).map_err(ApiError::Db)?;

    if !updated {
        return Err(ApiError::CounterNotFound);
    }

    info!("Submission threshold set to {} via legacy path", params.n);

    Ok("Count saved correctly".to_string())
}
