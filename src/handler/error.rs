use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::services::dataset::DatasetError;

#[derive(Debug)]
pub enum AppError {
    NotFound,
    InternalServerError,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))).into_response(),
            AppError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "internal server error"})),
            )
                .into_response(),
        }
    }
}

/// 数据文件缺失或格式错误都按 500 处理，整次请求失败，不返回部分结果
impl From<DatasetError> for AppError {
    fn from(err: DatasetError) -> Self {
        tracing::error!("Failed to load dataset: {}", err);
        AppError::InternalServerError
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        tracing::error!("Blocking load task failed: {}", err);
        AppError::InternalServerError
    }
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
