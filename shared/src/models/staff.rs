//! Staff Model (スタッフ・勤務)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Role (役職)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

/// Create role payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleSubmit {
    pub name: String,
}

/// Staff member, role nested on read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub id: i64,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Create/update staff payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffSubmit {
    pub name: String,
    pub role_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Shift type - reference data for work schedules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftType {
    pub id: i64,
    pub code: String,
    pub name: String,
    /// Start time (HH:MM[:SS])
    pub start_time: String,
    /// End time (HH:MM[:SS])
    pub end_time: String,
    pub break_minutes: u32,
    pub work_hours: f64,
    /// Display color (e.g. "#ffcc00")
    pub color: String,
}

/// Create/update shift type payload (`work_hours` is derived server-side)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftTypeSubmit {
    pub code: String,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub break_minutes: u32,
    pub color: String,
}

/// Work schedule - staff × shift type × date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSchedule {
    pub id: i64,
    pub staff: Staff,
    pub shift: ShiftType,
    pub date: NaiveDate,
    pub weekday: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub needs_breakfast: Option<bool>,
    #[serde(default)]
    pub needs_lunch: Option<bool>,
    #[serde(default)]
    pub needs_dinner: Option<bool>,
    #[serde(default)]
    pub meal_note: Option<String>,
}

/// Create/update work schedule payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkScheduleSubmit {
    pub staff_id: i64,
    pub shift_id: i64,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_breakfast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_lunch: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_dinner: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_note: Option<String>,
}

impl WorkScheduleSubmit {
    pub fn new(staff_id: i64, shift_id: i64, date: NaiveDate) -> Self {
        Self {
            staff_id,
            shift_id,
            date,
            note: None,
            needs_breakfast: None,
            needs_lunch: None,
            needs_dinner: None,
            meal_note: None,
        }
    }
}

/// Night shift assignment: night, 明け and 休み on three consecutive days
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NightShiftRequest {
    pub staff_id: i64,
    pub night_date: NaiveDate,
}

/// One day written by a night shift assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightShiftDay {
    pub date: NaiveDate,
    /// Shift type code
    pub shift: String,
    /// False when an existing schedule was overwritten
    pub created: bool,
}

/// Night shift assignment result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightShiftResult {
    #[serde(default)]
    pub message: String,
    pub schedule: Vec<NightShiftDay>,
}
