use axum::{
    routing::{get, post},
    Router,
};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::net::SocketAddr;
use std::sync::Arc;

mod common;
mod counter;
mod measurement;
mod stats;

pub struct ApiState {
    pub db: Arc<Pool<SqliteConnectionManager>>,
}

pub async fn serve_api(db: Arc<Pool<SqliteConnectionManager>>, port: u16) {
    let state = Arc::new(ApiState { db });

    let app = Router::new()
        .route(
            "/measurement",
            get(measurement::welcome).post(measurement::create),
        )
        .route("/measurement/all", get(measurement::get_all))
        .route("/measurement/date", get(measurement::get_by_date))
        .route("/measurement/count", post(counter::set_threshold))
        .route("/measurement/temperature/max", get(stats::max_temperature))
        .route("/measurement/temperature/min", get(stats::min_temperature))
        .route(
            "/measurement/temperature/average",
            get(stats::average_temperature),
        )
        .route("/measurement/humidity/max", get(stats::max_humidity))
        .route("/measurement/humidity/min", get(stats::min_humidity))
        .route("/measurement/humidity/average", get(stats::average_humidity))
        //Legacy path kept for the deployed firmware, see counter.rs
        .route("/count", post(counter::set_threshold_legacy))
        .with_state(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
}
