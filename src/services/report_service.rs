// src/services/report_service.rs

use std::sync::Arc;

use anyhow::Context;
use csv::Writer;

use crate::{
    analytics::{
        compute_monthly_series, compute_monthly_series_for_year, compute_report_overview,
        compute_truck_profitability,
    },
    common::error::AppError,
    db::FleetStore,
    models::reports::{MonthlyBucket, ReportOverview, TruckProfitRow},
};

#[derive(Clone)]
pub struct ReportService {
    store: Arc<dyn FleetStore>,
}

impl ReportService {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self { store }
    }

    pub async fn monthly(&self, year: Option<i32>) -> Result<Vec<MonthlyBucket>, AppError> {
        let snapshot = self.store.snapshot().await?;
        Ok(match year {
            Some(year) => compute_monthly_series_for_year(&snapshot, year),
            None => compute_monthly_series(&snapshot),
        })
    }

    /// The monthly series as CSV text.
    pub async fn monthly_csv(&self, year: Option<i32>) -> Result<String, AppError> {
        let buckets = self.monthly(year).await?;
        let csv = render_monthly_csv(&buckets)?;
        tracing::info!(rows = buckets.len(), ?year, "Monthly report exported");
        Ok(csv)
    }

    pub async fn trucks(&self) -> Result<Vec<TruckProfitRow>, AppError> {
        let snapshot = self.store.snapshot().await?;
        Ok(compute_truck_profitability(&snapshot))
    }

    pub async fn overview(&self) -> Result<ReportOverview, AppError> {
        let snapshot = self.store.snapshot().await?;
        Ok(compute_report_overview(&snapshot))
    }
}

fn render_monthly_csv(buckets: &[MonthlyBucket]) -> Result<String, AppError> {
    let mut wtr = Writer::from_writer(Vec::new());

    wtr.write_record(["Month", "Revenue", "Expenses", "Profit"])?;
    for bucket in buckets {
        wtr.write_record([
            bucket.month.clone(),
            bucket.revenue.to_string(),
            bucket.expenses.to_string(),
            bucket.profit.to_string(),
        ])?;
    }

    let bytes = wtr.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    let text = String::from_utf8(bytes).context("CSV output is not UTF-8")?;
    Ok(text)
}
