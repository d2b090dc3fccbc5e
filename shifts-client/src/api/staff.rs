//! Staff API (スタッフ・シフト・勤務スケジュール)

use chrono::NaiveDate;
use shared::models::{
    NightShiftRequest, NightShiftResult, Role, RoleSubmit, ShiftType, ShiftTypeSubmit, Staff,
    StaffSubmit, WorkSchedule, WorkScheduleSubmit,
};

use super::detail_path;
use crate::{ApiResponse, ClientResult, HttpClient};

pub const SHIFT_TYPE_LIST: &str = "/staff/shift-types/";
pub const ROLE_LIST: &str = "/staff/roles/";
pub const STAFF_LIST: &str = "/staff/staffs/";
pub const SCHEDULE_LIST: &str = "/staff/schedules/";
pub const ASSIGN_NIGHT_SHIFT: &str = "/staff/assign-night-shift/";

// ============ Shift types ============

pub async fn shift_type_list<C: HttpClient>(http: &C) -> ClientResult<ApiResponse<Vec<ShiftType>>> {
    http.get(SHIFT_TYPE_LIST).await
}

pub async fn shift_type_detail<C: HttpClient>(
    http: &C,
    id: i64,
) -> ClientResult<ApiResponse<ShiftType>> {
    http.get(&detail_path(SHIFT_TYPE_LIST, id)).await
}

pub async fn create_shift_type<C: HttpClient>(
    http: &C,
    data: &ShiftTypeSubmit,
) -> ClientResult<ApiResponse<ShiftType>> {
    http.post(SHIFT_TYPE_LIST, data).await
}

pub async fn update_shift_type<C: HttpClient>(
    http: &C,
    id: i64,
    data: &ShiftTypeSubmit,
) -> ClientResult<ApiResponse<ShiftType>> {
    http.put(&detail_path(SHIFT_TYPE_LIST, id), data).await
}

pub async fn delete_shift_type<C: HttpClient>(
    http: &C,
    id: i64,
) -> ClientResult<ApiResponse<serde_json::Value>> {
    http.delete(&detail_path(SHIFT_TYPE_LIST, id)).await
}

// ============ Roles ============

pub async fn role_list<C: HttpClient>(http: &C) -> ClientResult<ApiResponse<Vec<Role>>> {
    http.get(ROLE_LIST).await
}

pub async fn role_detail<C: HttpClient>(http: &C, id: i64) -> ClientResult<ApiResponse<Role>> {
    http.get(&detail_path(ROLE_LIST, id)).await
}

pub async fn create_role<C: HttpClient>(
    http: &C,
    data: &RoleSubmit,
) -> ClientResult<ApiResponse<Role>> {
    http.post(ROLE_LIST, data).await
}

pub async fn update_role<C: HttpClient>(
    http: &C,
    id: i64,
    data: &RoleSubmit,
) -> ClientResult<ApiResponse<Role>> {
    http.put(&detail_path(ROLE_LIST, id), data).await
}

pub async fn delete_role<C: HttpClient>(
    http: &C,
    id: i64,
) -> ClientResult<ApiResponse<serde_json::Value>> {
    http.delete(&detail_path(ROLE_LIST, id)).await
}

// ============ Staff ============

pub async fn staff_list<C: HttpClient>(http: &C) -> ClientResult<ApiResponse<Vec<Staff>>> {
    http.get(STAFF_LIST).await
}

pub async fn create_staff<C: HttpClient>(
    http: &C,
    data: &StaffSubmit,
) -> ClientResult<ApiResponse<Staff>> {
    http.post(STAFF_LIST, data).await
}

pub async fn staff_detail<C: HttpClient>(http: &C, id: i64) -> ClientResult<ApiResponse<Staff>> {
    http.get(&detail_path(STAFF_LIST, id)).await
}

pub async fn update_staff<C: HttpClient>(
    http: &C,
    id: i64,
    data: &StaffSubmit,
) -> ClientResult<ApiResponse<Staff>> {
    http.put(&detail_path(STAFF_LIST, id), data).await
}

pub async fn delete_staff<C: HttpClient>(
    http: &C,
    id: i64,
) -> ClientResult<ApiResponse<serde_json::Value>> {
    http.delete(&detail_path(STAFF_LIST, id)).await
}

// ============ Work schedules ============

pub async fn work_schedule_list<C: HttpClient>(
    http: &C,
) -> ClientResult<ApiResponse<Vec<WorkSchedule>>> {
    http.get(SCHEDULE_LIST).await
}

pub async fn create_work_schedule<C: HttpClient>(
    http: &C,
    data: &WorkScheduleSubmit,
) -> ClientResult<ApiResponse<WorkSchedule>> {
    http.post(SCHEDULE_LIST, data).await
}

pub async fn work_schedule_detail<C: HttpClient>(
    http: &C,
    id: i64,
) -> ClientResult<ApiResponse<WorkSchedule>> {
    http.get(&detail_path(SCHEDULE_LIST, id)).await
}

pub async fn update_work_schedule<C: HttpClient>(
    http: &C,
    id: i64,
    data: &WorkScheduleSubmit,
) -> ClientResult<ApiResponse<WorkSchedule>> {
    http.put(&detail_path(SCHEDULE_LIST, id), data).await
}

pub async fn delete_work_schedule<C: HttpClient>(
    http: &C,
    id: i64,
) -> ClientResult<ApiResponse<serde_json::Value>> {
    http.delete(&detail_path(SCHEDULE_LIST, id)).await
}

/// Register night, 明け and 休み for `staff_id` starting at `night_date`.
///
/// Existing schedules on those days are overwritten.
pub async fn assign_night_shift<C: HttpClient>(
    http: &C,
    staff_id: i64,
    night_date: NaiveDate,
) -> ClientResult<ApiResponse<NightShiftResult>> {
    let req = NightShiftRequest {
        staff_id,
        night_date,
    };
    http.post(ASSIGN_NIGHT_SHIFT, &req).await
}
