use super::types::{Application, ApplicationStatus, DepartmentFilter};
use super::utils::{filter_applications, partition_by_status};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardViewState {
    pub selected_card: ApplicationStatus,
    pub search_term: String,
    pub department_filter: DepartmentFilter,
    pub is_sidebar_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    SelectCard(ApplicationStatus),
    SetSearchTerm(String),
    SetDepartmentFilter(DepartmentFilter),
    ToggleSidebar,
    CloseSidebar,
    ClearFilters,
}

pub fn reduce(state: &DashboardViewState, action: DashboardAction) -> DashboardViewState {
    let mut next = state.clone();
    match action {
        DashboardAction::SelectCard(status) => next.selected_card = status,
        DashboardAction::SetSearchTerm(term) => next.search_term = term,
        DashboardAction::SetDepartmentFilter(filter) => next.department_filter = filter,
        DashboardAction::ToggleSidebar => next.is_sidebar_open = !state.is_sidebar_open,
        DashboardAction::CloseSidebar => next.is_sidebar_open = false,
        DashboardAction::ClearFilters => {
            next.search_term.clear();
            next.department_filter = DepartmentFilter::All;
        }
    }
    next
}

/// Records shown for the selected tab after search and department filtering.
pub fn visible_applications<'a>(
    apps: &'a [Application],
    state: &DashboardViewState,
) -> Vec<&'a Application> {
    filter_applications(
        partition_by_status(apps, state.selected_card),
        &state.search_term,
        &state.department_filter,
    )
}
