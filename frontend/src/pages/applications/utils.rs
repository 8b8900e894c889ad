use std::collections::BTreeSet;

use super::types::{Application, ApplicationStatus, ApplicationType, DepartmentFilter, Priority};

pub fn partition_by_status(apps: &[Application], status: ApplicationStatus) -> Vec<&Application> {
    apps.iter().filter(|app| app.status == status).collect()
}

pub fn count_by_status(apps: &[Application], status: ApplicationStatus) -> usize {
    apps.iter().filter(|app| app.status == status).count()
}

/// Keeps records whose department passes `department` and whose title,
/// applicant or id contains `search_term`, ignoring case. The term is not trimmed.
pub fn filter_applications<'a>(
    apps: impl IntoIterator<Item = &'a Application>,
    search_term: &str,
    department: &DepartmentFilter,
) -> Vec<&'a Application> {
    let needle = search_term.to_lowercase();
    apps.into_iter()
        .filter(|app| department.matches(&app.department))
        .filter(|app| {
            [&app.title, &app.applicant, &app.id]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

pub fn department_options(apps: &[Application]) -> Vec<String> {
    apps.iter()
        .map(|app| app.department.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityDisplay {
    pub class: &'static str,
    pub label: String,
}

const PRIORITY_HIGH_CLASS: &str = "bg-red-100 text-red-800 border-red-200";
const PRIORITY_MEDIUM_CLASS: &str = "bg-yellow-100 text-yellow-800 border-yellow-200";
const PRIORITY_LOW_CLASS: &str = "bg-green-100 text-green-800 border-green-200";

pub fn priority_display(priority: &Priority) -> PriorityDisplay {
    let (class, label) = match priority {
        Priority::High => (PRIORITY_HIGH_CLASS, "高".to_string()),
        Priority::Medium => (PRIORITY_MEDIUM_CLASS, "中".to_string()),
        Priority::Low => (PRIORITY_LOW_CLASS, "低".to_string()),
        Priority::Other(raw) => (PRIORITY_LOW_CLASS, raw.clone()),
    };
    PriorityDisplay { class, label }
}

pub fn priority_display_str(value: &str) -> PriorityDisplay {
    priority_display(&Priority::from(value.to_string()))
}

pub fn type_label(kind: &ApplicationType) -> &'static str {
    match kind {
        ApplicationType::BusinessTrip => "出張申請",
        ApplicationType::Expense => "経費申請",
    }
}

// Anything that is not a business trip is shown as an expense.
pub fn type_label_str(value: &str) -> &'static str {
    if value == ApplicationType::BusinessTrip.as_str() {
        type_label(&ApplicationType::BusinessTrip)
    } else {
        type_label(&ApplicationType::Expense)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardIcon {
    Clock,
    Pause,
    CheckCircle,
}

impl CardIcon {
    pub fn for_status(status: ApplicationStatus) -> Self {
        match status {
            ApplicationStatus::Pending => CardIcon::Clock,
            ApplicationStatus::OnHold => CardIcon::Pause,
            ApplicationStatus::Approved => CardIcon::CheckCircle,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            CardIcon::Clock => "clock",
            CardIcon::Pause => "pause",
            CardIcon::CheckCircle => "check-circle",
        }
    }

    pub fn fa_class(&self) -> &'static str {
        match self {
            CardIcon::Clock => "fas fa-clock",
            CardIcon::Pause => "fas fa-pause-circle",
            CardIcon::CheckCircle => "fas fa-check-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardConfig {
    pub status: ApplicationStatus,
    pub title: &'static str,
    pub icon: CardIcon,
    pub gradient_from: &'static str,
    pub gradient_to: &'static str,
    pub count: usize,
}

impl CardConfig {
    pub fn gradient_class(&self) -> String {
        format!("bg-gradient-to-r {} {}", self.gradient_from, self.gradient_to)
    }
}

pub fn card_config(status: ApplicationStatus, apps: &[Application]) -> CardConfig {
    let (title, gradient_from, gradient_to) = match status {
        ApplicationStatus::Pending => ("承認待ち", "from-orange-500", "to-red-500"),
        ApplicationStatus::OnHold => ("保留中", "from-yellow-500", "to-orange-500"),
        ApplicationStatus::Approved => ("承認済み", "from-green-500", "to-emerald-500"),
    };
    CardConfig {
        status,
        title,
        icon: CardIcon::for_status(status),
        gradient_from,
        gradient_to,
        count: count_by_status(apps, status),
    }
}

pub fn empty_state_message(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Pending => "承認待ちの申請はありません",
        ApplicationStatus::OnHold => "保留中の申請はありません",
        ApplicationStatus::Approved => "承認済みの申請はありません",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitingUrgency {
    Urgent,
    Warning,
    Normal,
}

impl WaitingUrgency {
    pub fn class(&self) -> &'static str {
        match self {
            WaitingUrgency::Urgent => "text-red-600 font-semibold",
            WaitingUrgency::Warning => "text-yellow-600",
            WaitingUrgency::Normal => "text-gray-600",
        }
    }
}

pub fn waiting_urgency(days_waiting: u32) -> WaitingUrgency {
    if days_waiting > 7 {
        WaitingUrgency::Urgent
    } else if days_waiting > 3 {
        WaitingUrgency::Warning
    } else {
        WaitingUrgency::Normal
    }
}
