#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::pages::applications::types::{
        Application, ApplicationStatus, ApplicationType, Priority,
    };
    use chrono::NaiveDate;
    use leptos::*;

    pub fn noop_navigate() -> Callback<String> {
        Callback::new(|_: String| {})
    }

    pub fn noop_show_detail() -> Callback<(ApplicationType, String)> {
        Callback::new(|_: (ApplicationType, String)| {})
    }

    pub fn application(id: &str, applicant: &str, department: &str) -> Application {
        Application {
            id: id.into(),
            kind: ApplicationType::Expense,
            title: "テスト申請".into(),
            applicant: applicant.into(),
            department: department.into(),
            amount: 1_000,
            submitted_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            status: ApplicationStatus::Pending,
            priority: Priority::Low,
            days_waiting: 1,
        }
    }
}
