// src/handlers/reports.rs

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::error::AppError,
    config::AppState,
    models::reports::{MonthlyBucket, ReportOverview, TruckProfitRow},
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MonthlyQuery {
    /// Only records dated in this year; all years share month buckets otherwise
    pub year: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/reports/monthly",
    tag = "Reports",
    params(MonthlyQuery),
    responses(
        (status = 200, description = "Revenue, expenses and profit per month", body = Vec<MonthlyBucket>)
    )
)]
pub async fn get_monthly(
    State(app_state): State<AppState>,
    Query(query): Query<MonthlyQuery>,
) -> Result<impl IntoResponse, AppError> {
    let series = app_state.report_service.monthly(query.year).await?;
    Ok(Json(series))
}

#[utoipa::path(
    get,
    path = "/api/reports/monthly/export",
    tag = "Reports",
    params(MonthlyQuery),
    responses(
        (status = 200, description = "Monthly series as CSV", content_type = "text/csv", body = String)
    )
)]
pub async fn export_monthly(
    State(app_state): State<AppState>,
    Query(query): Query<MonthlyQuery>,
) -> Result<impl IntoResponse, AppError> {
    let csv = app_state.report_service.monthly_csv(query.year).await?;
    let filename = match query.year {
        Some(year) => format!("monthly-report-{year}.csv"),
        None => "monthly-report.csv".to_string(),
    };

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    ))
}

#[utoipa::path(
    get,
    path = "/api/reports/trucks",
    tag = "Reports",
    responses(
        (status = 200, description = "Income, expenses and margin per truck", body = Vec<TruckProfitRow>)
    )
)]
pub async fn get_truck_profitability(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.report_service.trucks().await?))
}

#[utoipa::path(
    get,
    path = "/api/reports/overview",
    tag = "Reports",
    responses((status = 200, description = "Fleet totals and overall margin", body = ReportOverview))
)]
pub async fn get_overview(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.report_service.overview().await?))
}
