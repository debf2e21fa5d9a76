// src/models/reports.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// One calendar month of the revenue/expense trend.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBucket {
    #[schema(example = "March")]
    pub month: String,
    // 0 = January
    #[schema(example = 2)]
    pub month_index: u32,
    pub revenue: Decimal,
    pub expenses: Decimal,
    pub profit: Decimal,
}

/// Profitability of a single truck.
///
/// Income and trip expenses reach the truck through its trips; fuel and
/// maintenance costs are booked against the truck directly.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TruckProfitRow {
    pub id: Uuid,
    // Plate number
    #[schema(example = "ABC-1234")]
    pub name: String,
    pub model: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub profit: Decimal,
    pub trips: u64,
    // Percentage with one decimal, 0 when there is no income
    #[schema(example = "18.5")]
    pub margin: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportOverview {
    pub total_revenue: Decimal,
    pub total_expenses: Decimal,
    pub total_profit: Decimal,
    pub profit_margin: Decimal,
}
