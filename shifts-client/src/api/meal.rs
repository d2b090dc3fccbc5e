//! Meal API (食事タイプ・食事注文)

use chrono::NaiveDate;
use shared::models::{AutoGenerateRequest, MealOrder, MealOrderCount, MealOrderSubmit, MealType};
use urlencoding::encode;

use super::detail_path;
use crate::{ApiResponse, ClientResult, HttpClient};

pub const MEAL_TYPE_LIST: &str = "/meal/meal-types/";
pub const MEAL_ORDER_LIST: &str = "/meal/meal-orders/";
pub const MEAL_ORDER_AUTO_GENERATE: &str = "/meal/meal-orders/auto-generate/";
pub const MEAL_ORDER_COUNT: &str = "/meal/meal-orders/count/";
pub const MEAL_ORDER_PERIODS: &str = "/meal/meal-orders/stats-periods/";

// ============ Meal types ============

pub async fn meal_type_list<C: HttpClient>(http: &C) -> ClientResult<ApiResponse<Vec<MealType>>> {
    http.get(MEAL_TYPE_LIST).await
}

pub async fn meal_type_detail<C: HttpClient>(
    http: &C,
    id: i64,
) -> ClientResult<ApiResponse<MealType>> {
    http.get(&detail_path(MEAL_TYPE_LIST, id)).await
}

// ============ Meal orders ============

pub async fn meal_order_list<C: HttpClient>(http: &C) -> ClientResult<ApiResponse<Vec<MealOrder>>> {
    http.get(MEAL_ORDER_LIST).await
}

pub async fn create_meal_order<C: HttpClient>(
    http: &C,
    data: &MealOrderSubmit,
) -> ClientResult<ApiResponse<MealOrder>> {
    http.post(MEAL_ORDER_LIST, data).await
}

pub async fn meal_order_detail<C: HttpClient>(
    http: &C,
    id: i64,
) -> ClientResult<ApiResponse<MealOrder>> {
    http.get(&detail_path(MEAL_ORDER_LIST, id)).await
}

pub async fn update_meal_order<C: HttpClient>(
    http: &C,
    id: i64,
    data: &MealOrderSubmit,
) -> ClientResult<ApiResponse<MealOrder>> {
    http.put(&detail_path(MEAL_ORDER_LIST, id), data).await
}

pub async fn delete_meal_order<C: HttpClient>(
    http: &C,
    id: i64,
) -> ClientResult<ApiResponse<serde_json::Value>> {
    http.delete(&detail_path(MEAL_ORDER_LIST, id)).await
}

/// Ask the server to generate the day's orders from the schedules
pub async fn auto_generate<C: HttpClient>(
    http: &C,
    date: NaiveDate,
) -> ClientResult<ApiResponse<serde_json::Value>> {
    http.post(MEAL_ORDER_AUTO_GENERATE, &AutoGenerateRequest { date })
        .await
}

pub async fn meal_order_count<C: HttpClient>(
    http: &C,
    date: NaiveDate,
) -> ClientResult<ApiResponse<MealOrderCount>> {
    let path = format!(
        "{}?date={}",
        MEAL_ORDER_COUNT,
        encode(&date.format("%Y-%m-%d").to_string())
    );
    http.get(&path).await
}

/// Periods (YYYY-MM) that have meal statistics
pub async fn stats_periods<C: HttpClient>(http: &C) -> ClientResult<ApiResponse<Vec<String>>> {
    http.get(MEAL_ORDER_PERIODS).await
}
