use axum::{routing::get, Router};

use crate::app::AppState;
use crate::handler::market::{get_dji_data, get_edge_data};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/get_dji_data", get(get_dji_data))
        .route("/get_edge_data", get(get_edge_data))
}
