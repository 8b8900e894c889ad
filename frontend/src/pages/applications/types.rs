use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationType {
    BusinessTrip,
    Expense,
}

impl ApplicationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationType::BusinessTrip => "business-trip",
            ApplicationType::Expense => "expense",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    OnHold,
    Approved,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 3] = [
        ApplicationStatus::Pending,
        ApplicationStatus::OnHold,
        ApplicationStatus::Approved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::OnHold => "on_hold",
            ApplicationStatus::Approved => "approved",
        }
    }
}

/// Unknown wire values are kept in `Other` so the display mapping stays total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
    Other(String),
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        match value.as_str() {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            _ => Priority::Other(value),
        }
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        match value {
            Priority::High => "high".into(),
            Priority::Medium => "medium".into(),
            Priority::Low => "low".into(),
            Priority::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ApplicationType,
    pub title: String,
    pub applicant: String,
    pub department: String,
    pub amount: u64,
    pub submitted_date: NaiveDate,
    pub status: ApplicationStatus,
    pub priority: Priority,
    #[serde(default)]
    pub days_waiting: u32,
}

pub const ALL_DEPARTMENTS: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DepartmentFilter {
    #[default]
    All,
    Department(String),
}

impl DepartmentFilter {
    pub fn from_select_value(value: &str) -> Self {
        if value == ALL_DEPARTMENTS {
            DepartmentFilter::All
        } else {
            DepartmentFilter::Department(value.to_string())
        }
    }

    pub fn as_select_value(&self) -> &str {
        match self {
            DepartmentFilter::All => ALL_DEPARTMENTS,
            DepartmentFilter::Department(name) => name,
        }
    }

    pub fn matches(&self, department: &str) -> bool {
        match self {
            DepartmentFilter::All => true,
            DepartmentFilter::Department(name) => name == department,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_wire_record() {
        let value = json!({
            "id": "BT-2024-001",
            "type": "business-trip",
            "title": "大阪支社訪問",
            "applicant": "田中太郎",
            "department": "営業部",
            "amount": 45000,
            "submittedDate": "2024-01-15",
            "status": "on_hold",
            "priority": "high",
            "daysWaiting": 3
        });
        let app: Application = serde_json::from_value(value).unwrap();
        assert_eq!(app.kind, ApplicationType::BusinessTrip);
        assert_eq!(app.status, ApplicationStatus::OnHold);
        assert_eq!(app.priority, Priority::High);
        assert_eq!(app.submitted_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(app.days_waiting, 3);
    }

    #[test]
    fn unknown_priority_is_preserved() {
        let priority: Priority = serde_json::from_value(json!("urgent")).unwrap();
        assert_eq!(priority, Priority::Other("urgent".into()));
        assert_eq!(serde_json::to_value(&priority).unwrap(), json!("urgent"));
    }

    #[test]
    fn status_strings_match_wire_format() {
        for status in ApplicationStatus::ALL {
            let encoded = serde_json::to_value(status).unwrap();
            assert_eq!(encoded, json!(status.as_str()));
        }
    }

    #[test]
    fn department_filter_round_trips_select_values() {
        assert_eq!(DepartmentFilter::from_select_value("all"), DepartmentFilter::All);
        let dev = DepartmentFilter::from_select_value("開発部");
        assert_eq!(dev, DepartmentFilter::Department("開発部".into()));
        assert_eq!(dev.as_select_value(), "開発部");
        assert_eq!(DepartmentFilter::All.as_select_value(), "all");
    }

    #[test]
    fn department_filter_is_case_sensitive() {
        let filter = DepartmentFilter::Department("Sales".into());
        assert!(filter.matches("Sales"));
        assert!(!filter.matches("sales"));
        assert!(DepartmentFilter::All.matches("anything"));
    }
}
