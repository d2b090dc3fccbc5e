//! Meal Model (食事)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Meal type (breakfast / lunch / dinner)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealType {
    pub id: i64,
    pub name: String,
    pub display_name: String,
}

/// Guest or staff reference on a meal order.
///
/// The order serializer renders the related person as its display name;
/// other endpoints send the bare id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelatedRef {
    Id(i64),
    Name(String),
}

impl RelatedRef {
    pub fn id(&self) -> Option<i64> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Name(_) => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Id(_) => None,
        }
    }
}

/// Meal order for either a guest or a staff member.
///
/// The backend rejects orders that set both or neither. The `*_id` fields
/// are write-side and usually absent on reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealOrder {
    pub id: i64,
    pub date: NaiveDate,
    pub meal_type: MealType,
    #[serde(default)]
    pub meal_type_id: Option<i64>,
    #[serde(default)]
    pub guest: Option<RelatedRef>,
    #[serde(default)]
    pub guest_id: Option<i64>,
    #[serde(default)]
    pub staff: Option<RelatedRef>,
    #[serde(default)]
    pub staff_id: Option<i64>,
    #[serde(default)]
    pub ordered: bool,
    #[serde(default)]
    pub auto_generated: bool,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub weekday: Option<String>,
}

/// Create/update meal order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealOrderSubmit {
    pub date: NaiveDate,
    pub meal_type_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl MealOrderSubmit {
    /// Order placed for a guest
    pub fn for_guest(date: NaiveDate, meal_type_id: i64, guest_id: i64) -> Self {
        Self {
            date,
            meal_type_id,
            guest_id: Some(guest_id),
            staff_id: None,
            note: None,
        }
    }

    /// Order placed for a staff member
    pub fn for_staff(date: NaiveDate, meal_type_id: i64, staff_id: i64) -> Self {
        Self {
            date,
            meal_type_id,
            guest_id: None,
            staff_id: Some(staff_id),
            note: None,
        }
    }
}

/// Per-meal order counts for one day, keyed by the Japanese meal names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealOrderCount {
    #[serde(rename = "朝食")]
    pub breakfast: u32,
    #[serde(rename = "昼食")]
    pub lunch: u32,
    #[serde(rename = "夕食")]
    pub dinner: u32,
}

impl MealOrderCount {
    pub fn total(&self) -> u32 {
        self.breakfast + self.lunch + self.dinner
    }
}

/// Auto-generation request for one day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoGenerateRequest {
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_count_keeps_literal_keys() {
        let count: MealOrderCount =
            serde_json::from_value(json!({"朝食": 2, "昼食": 3, "夕食": 1})).unwrap();
        assert_eq!(count.breakfast, 2);
        assert_eq!(count.lunch, 3);
        assert_eq!(count.dinner, 1);
        assert_eq!(count.total(), 6);
        assert_eq!(
            serde_json::to_value(count).unwrap(),
            json!({"朝食": 2, "昼食": 3, "夕食": 1})
        );
    }

    #[test]
    fn test_order_as_rendered_by_backend() {
        let order: MealOrder = serde_json::from_value(json!({
            "id": 1,
            "date": "2024-05-01",
            "meal_type": {"id": 2, "name": "lunch", "display_name": "昼食"},
            "guest": "田中",
            "staff": null,
            "ordered": true,
            "auto_generated": false,
            "note": null
        }))
        .unwrap();

        assert_eq!(order.guest, Some(RelatedRef::Name("田中".into())));
        assert_eq!(order.guest.as_ref().and_then(RelatedRef::name), Some("田中"));
        assert!(order.staff.is_none());
        assert!(order.meal_type_id.is_none());
        assert!(order.weekday.is_none());
        assert_eq!(order.meal_type.display_name, "昼食");
    }

    #[test]
    fn test_order_with_numeric_refs() {
        let order: MealOrder = serde_json::from_value(json!({
            "id": 4,
            "date": "2024-05-02",
            "meal_type": {"id": 1, "name": "breakfast", "display_name": "朝食"},
            "meal_type_id": 1,
            "staff": 9,
            "ordered": false,
            "auto_generated": true,
            "weekday": "木"
        }))
        .unwrap();

        assert_eq!(order.staff.as_ref().and_then(RelatedRef::id), Some(9));
        assert_eq!(order.meal_type_id, Some(1));
        assert_eq!(order.weekday.as_deref(), Some("木"));
    }

    #[test]
    fn test_submit_for_staff_omits_guest() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let body = serde_json::to_value(MealOrderSubmit::for_staff(date, 2, 9)).unwrap();
        assert_eq!(
            body,
            json!({"date": "2024-05-01", "meal_type_id": 2, "staff_id": 9})
        );
    }
}
