use crate::{
    api::{ApiClient, ApiError},
    config::{self, RuntimeConfig},
};

use super::{sample::sample_applications, types::Application};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplicationsRepository {
    Sample,
    Remote { url: String },
}

impl ApplicationsRepository {
    pub fn from_config(cfg: &RuntimeConfig) -> Self {
        match &cfg.applications_url {
            Some(url) => ApplicationsRepository::Remote { url: url.clone() },
            None => ApplicationsRepository::Sample,
        }
    }

    pub async fn load(&self, api: &ApiClient) -> Result<Vec<Application>, ApiError> {
        match self {
            ApplicationsRepository::Sample => Ok(sample_applications()),
            ApplicationsRepository::Remote { url } => api.fetch_applications(url).await,
        }
    }
}

pub async fn load_applications(api: &ApiClient) -> Result<Vec<Application>, ApiError> {
    let cfg = config::await_runtime_config().await;
    let repo = ApplicationsRepository::from_config(&cfg);
    let result = repo.load(api).await;
    match &result {
        Ok(apps) => log::info!("loaded {} applications", apps.len()),
        Err(err) => log::warn!("failed to load applications ({}): {}", err.code, err),
    }
    result
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn repository_follows_config() {
        assert_eq!(
            ApplicationsRepository::from_config(&RuntimeConfig::default()),
            ApplicationsRepository::Sample
        );
        let cfg = RuntimeConfig {
            applications_url: Some("/apps.json".into()),
        };
        assert_eq!(
            ApplicationsRepository::from_config(&cfg),
            ApplicationsRepository::Remote {
                url: "/apps.json".into()
            }
        );
    }

    #[tokio::test]
    async fn sample_repository_returns_sample_data() {
        let apps = ApplicationsRepository::Sample
            .load(&ApiClient::new())
            .await
            .unwrap();
        assert_eq!(apps, sample_applications());
    }

    #[tokio::test]
    async fn remote_repository_reports_request_failure() {
        let repo = ApplicationsRepository::Remote {
            url: "not a url".into(),
        };
        let err = repo.load(&ApiClient::new()).await.unwrap_err();
        assert_eq!(err.code, "REQUEST_FAILED");
    }
}
