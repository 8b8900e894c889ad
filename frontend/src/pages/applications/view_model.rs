use crate::api::{ApiClient, ApiError};
use crate::pages::applications::{
    repository,
    sample::sample_applications,
    state::{reduce, visible_applications, DashboardAction, DashboardViewState},
    types::{Application, ApplicationStatus, ApplicationType},
    utils::{card_config, department_options, CardConfig},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ApplicationsViewModel {
    pub state: RwSignal<DashboardViewState>,
    pub applications: Signal<Vec<Application>>,
    pub load_error: Signal<Option<ApiError>>,
    pub loading: Signal<bool>,
    on_navigate: Callback<String>,
    on_show_detail: Callback<(ApplicationType, String)>,
}

impl ApplicationsViewModel {
    /// With `source` unset the list comes from the configured repository and
    /// falls back to the sample data until it resolves or when it fails.
    pub fn new(
        source: Option<MaybeSignal<Vec<Application>>>,
        on_navigate: Callback<String>,
        on_show_detail: Callback<(ApplicationType, String)>,
    ) -> Self {
        let state = create_rw_signal(DashboardViewState::default());

        let (applications, load_error, loading) = match source {
            Some(source) => {
                let source = store_value(source);
                (
                    Signal::derive(move || source.with_value(|s| s.get())),
                    Signal::derive(|| None),
                    Signal::derive(|| false),
                )
            }
            None => {
                let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
                let resource = create_resource(
                    || (),
                    move |_| {
                        let api = api.clone();
                        async move { repository::load_applications(&api).await }
                    },
                );
                let fallback = store_value(sample_applications());
                (
                    Signal::derive(move || match resource.get() {
                        Some(Ok(apps)) => apps,
                        _ => fallback.get_value(),
                    }),
                    Signal::derive(move || match resource.get() {
                        Some(Err(err)) => Some(err),
                        _ => None,
                    }),
                    resource.loading(),
                )
            }
        };

        Self {
            state,
            applications,
            load_error,
            loading,
            on_navigate,
            on_show_detail,
        }
    }

    pub fn dispatch(&self, action: DashboardAction) {
        log::debug!("dashboard action: {:?}", action);
        self.state.update(|state| *state = reduce(state, action));
    }

    pub fn card_configs(&self) -> Vec<CardConfig> {
        self.applications.with(|apps| {
            ApplicationStatus::ALL
                .iter()
                .map(|status| card_config(*status, apps))
                .collect()
        })
    }

    pub fn visible(&self) -> Vec<Application> {
        let state = self.state.get();
        self.applications.with(|apps| {
            visible_applications(apps, &state)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    pub fn departments(&self) -> Vec<String> {
        self.applications.with(|apps| department_options(apps))
    }

    pub fn selected_card(&self) -> Signal<ApplicationStatus> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.selected_card))
    }

    pub fn handle_navigate(&self, view: String) {
        log::info!("navigate to {}", view);
        self.dispatch(DashboardAction::CloseSidebar);
        self.on_navigate.call(view);
    }

    pub fn handle_show_detail(&self, kind: ApplicationType, id: String) {
        log::info!("show {} detail for {}", kind.as_str(), id);
        self.on_show_detail.call((kind, id));
    }
}
