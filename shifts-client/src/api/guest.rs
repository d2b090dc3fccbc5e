//! Guest API (利用者・訪問スケジュール)

use reqwest::multipart::{Form, Part};
use shared::models::{Guest, GuestSubmit, VisitSchedule, VisitScheduleSubmit, VisitType};

use super::detail_path;
use crate::{ApiResponse, ClientResult, HttpClient};

pub const GUEST_LIST: &str = "/guest/guests/";
pub const SCHEDULE_LIST: &str = "/guest/schedules/";
pub const VISIT_TYPE_LIST: &str = "/guest/visit-types/";
pub const SCHEDULE_UPLOAD: &str = "/guest/schedule-uploads/";

/// Multipart field name of the uploaded schedule image
pub const SCHEDULE_UPLOAD_FIELD: &str = "file";

// ============ Guests ============

pub async fn guest_list<C: HttpClient>(http: &C) -> ClientResult<ApiResponse<Vec<Guest>>> {
    http.get(GUEST_LIST).await
}

pub async fn guest_detail<C: HttpClient>(http: &C, id: i64) -> ClientResult<ApiResponse<Guest>> {
    http.get(&detail_path(GUEST_LIST, id)).await
}

pub async fn create_guest<C: HttpClient>(
    http: &C,
    data: &GuestSubmit,
) -> ClientResult<ApiResponse<Guest>> {
    http.post(GUEST_LIST, data).await
}

pub async fn update_guest<C: HttpClient>(
    http: &C,
    id: i64,
    data: &GuestSubmit,
) -> ClientResult<ApiResponse<Guest>> {
    http.put(&detail_path(GUEST_LIST, id), data).await
}

pub async fn delete_guest<C: HttpClient>(
    http: &C,
    id: i64,
) -> ClientResult<ApiResponse<serde_json::Value>> {
    http.delete(&detail_path(GUEST_LIST, id)).await
}

// ============ Visit schedules ============

pub async fn visit_schedule_list<C: HttpClient>(
    http: &C,
) -> ClientResult<ApiResponse<Vec<VisitSchedule>>> {
    http.get(SCHEDULE_LIST).await
}

pub async fn visit_schedule_detail<C: HttpClient>(
    http: &C,
    id: i64,
) -> ClientResult<ApiResponse<VisitSchedule>> {
    http.get(&detail_path(SCHEDULE_LIST, id)).await
}

pub async fn create_visit_schedule<C: HttpClient>(
    http: &C,
    data: &VisitScheduleSubmit,
) -> ClientResult<ApiResponse<VisitSchedule>> {
    http.post(SCHEDULE_LIST, data).await
}

pub async fn update_visit_schedule<C: HttpClient>(
    http: &C,
    id: i64,
    data: &VisitScheduleSubmit,
) -> ClientResult<ApiResponse<VisitSchedule>> {
    http.put(&detail_path(SCHEDULE_LIST, id), data).await
}

pub async fn delete_visit_schedule<C: HttpClient>(
    http: &C,
    id: i64,
) -> ClientResult<ApiResponse<serde_json::Value>> {
    http.delete(&detail_path(SCHEDULE_LIST, id)).await
}

/// Upload a scanned schedule image; the server parses it.
pub async fn upload_schedule<C: HttpClient>(
    http: &C,
    file_name: &str,
    bytes: Vec<u8>,
) -> ClientResult<ApiResponse<serde_json::Value>> {
    let part = Part::bytes(bytes).file_name(file_name.to_string());
    let form = Form::new().part(SCHEDULE_UPLOAD_FIELD, part);
    http.post_multipart(SCHEDULE_UPLOAD, form).await
}

// ============ Visit types ============

pub async fn visit_type_list<C: HttpClient>(http: &C) -> ClientResult<ApiResponse<Vec<VisitType>>> {
    http.get(VISIT_TYPE_LIST).await
}

pub async fn visit_type_detail<C: HttpClient>(
    http: &C,
    id: i64,
) -> ClientResult<ApiResponse<VisitType>> {
    http.get(&detail_path(VISIT_TYPE_LIST, id)).await
}
