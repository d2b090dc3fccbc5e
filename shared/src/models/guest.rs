//! Guest Model (利用者・訪問)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Guest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Create/update guest payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestSubmit {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Visit type - reference data for visit schedules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitType {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub color: String,
}

/// Visit schedule - guest × visit type × date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitSchedule {
    pub id: i64,
    pub guest: Guest,
    pub visit_type: VisitType,
    pub date: NaiveDate,
    #[serde(default)]
    pub arrive_time: Option<String>,
    #[serde(default)]
    pub leave_time: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    pub weekday: String,
    #[serde(default)]
    pub needs_breakfast: Option<bool>,
    #[serde(default)]
    pub needs_lunch: Option<bool>,
    #[serde(default)]
    pub needs_dinner: Option<bool>,
    #[serde(default)]
    pub meal_note: Option<String>,
}

/// Create/update visit schedule payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitScheduleSubmit {
    pub guest_id: i64,
    pub visit_type_id: i64,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrive_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_time: Option<String>,
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

impl VisitScheduleSubmit {
    pub fn new(guest_id: i64, visit_type_id: i64, date: NaiveDate) -> Self {
        Self {
            guest_id,
            visit_type_id,
            date,
            arrive_time: None,
            leave_time: None,
            note: None,
            needs_breakfast: None,
            needs_lunch: None,
            needs_dinner: None,
            meal_note: None,
        }
    }
}
