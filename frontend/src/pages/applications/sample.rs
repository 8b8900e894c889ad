use chrono::NaiveDate;

use super::types::{Application, ApplicationStatus, ApplicationType, Priority};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

// 実データ取得先が未設定の場合に表示するサンプル
pub fn sample_applications() -> Vec<Application> {
    vec![
        Application {
            id: "BT-2024-001".into(),
            kind: ApplicationType::BusinessTrip,
            title: "大阪支社訪問".into(),
            applicant: "田中太郎".into(),
            department: "営業部".into(),
            amount: 45_000,
            submitted_date: date(2024, 1, 15),
            status: ApplicationStatus::Pending,
            priority: Priority::High,
            days_waiting: 3,
        },
        Application {
            id: "EX-2024-001".into(),
            kind: ApplicationType::Expense,
            title: "会議費精算".into(),
            applicant: "佐藤花子".into(),
            department: "総務部".into(),
            amount: 12_500,
            submitted_date: date(2024, 1, 14),
            status: ApplicationStatus::Pending,
            priority: Priority::Medium,
            days_waiting: 4,
        },
        Application {
            id: "BT-2024-002".into(),
            kind: ApplicationType::BusinessTrip,
            title: "東京本社研修".into(),
            applicant: "鈴木一郎".into(),
            department: "開発部".into(),
            amount: 38_000,
            submitted_date: date(2024, 1, 10),
            status: ApplicationStatus::OnHold,
            priority: Priority::Low,
            days_waiting: 8,
        },
        Application {
            id: "EX-2024-002".into(),
            kind: ApplicationType::Expense,
            title: "交通費精算".into(),
            applicant: "高橋美咲".into(),
            department: "営業部".into(),
            amount: 8_500,
            submitted_date: date(2024, 1, 12),
            status: ApplicationStatus::Approved,
            priority: Priority::Low,
            days_waiting: 0,
        },
    ]
}
