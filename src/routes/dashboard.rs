//! Dashboard snapshot route.

use axum::response::Json;
use client::net::types::DashboardSnapshot;

use crate::services::dashboard;

/// `GET /api/dashboard`
pub async fn snapshot() -> Json<DashboardSnapshot> {
    Json(dashboard::sample_snapshot())
}
