//! Mock Dashboard API client for testing
//!
//! Provides a mock implementation of [`DashboardApi`] for unit testing
//! without making real API calls.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{DashboardApi, NewNetwork, Network, Organization};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Clones share state, so a test can keep one handle for assertions while
/// the code under test owns another.
///
/// # Example
/// ```ignore
/// let mock = MockDashboardClient::new()
///     .with_orgs(vec![org("1", "Acme")])
///     .await;
///
/// let orgs = mock.list_organizations().await?;
/// assert_eq!(orgs.len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockDashboardClient {
    /// Organizations to return from list_organizations
    orgs: Arc<Mutex<Vec<Organization>>>,
    /// Networks to return from list_networks, filtered by organization
    networks: Arc<Mutex<Vec<Network>>>,
    /// Only this key is accepted, when set
    valid_key: Arc<Mutex<Option<String>>>,
    /// Key this handle was "connected" with
    api_key: Option<String>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured create requests as (org_id, body)
    created: Arc<Mutex<Vec<(String, NewNetwork)>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_organizations: usize,
    pub list_networks: usize,
    pub create_network: usize,
}

impl MockDashboardClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure organizations to return from list_organizations.
    pub async fn with_orgs(self, orgs: Vec<Organization>) -> Self {
        *self.orgs.lock().await = orgs;
        self
    }

    /// Configure networks to return from list_networks.
    pub async fn with_networks(self, networks: Vec<Network>) -> Self {
        *self.networks.lock().await = networks;
        self
    }

    /// Reject every key except this one with `Unauthorized`.
    pub async fn with_valid_key(self, key: &str) -> Self {
        *self.valid_key.lock().await = Some(key.to_string());
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// A handle sharing this mock's state, connected with `key`.
    pub fn connect(&self, key: &str) -> Self {
        Self {
            api_key: Some(key.to_string()),
            ..self.clone()
        }
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured create requests.
    pub async fn created(&self) -> Vec<(String, NewNetwork)> {
        self.created.lock().await.clone()
    }

    /// Check the key and any pending error.
    async fn check_error(&self) -> Result<()> {
        if let Some(expected) = self.valid_key.lock().await.as_deref() {
            if self.api_key.as_deref() != Some(expected) {
                return Err(ApiError::Unauthorized.into());
            }
        }

        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }

        Ok(())
    }
}

#[async_trait]
impl DashboardApi for MockDashboardClient {
    async fn list_organizations(&self) -> Result<Vec<Organization>> {
        self.call_count.lock().await.list_organizations += 1;
        self.check_error().await?;

        Ok(self.orgs.lock().await.clone())
    }

    async fn list_networks(&self, org_id: &str) -> Result<Vec<Network>> {
        self.call_count.lock().await.list_networks += 1;
        self.check_error().await?;

        Ok(self
            .networks
            .lock()
            .await
            .iter()
            .filter(|n| n.organization_id.as_deref().is_none_or(|id| id == org_id))
            .cloned()
            .collect())
    }

    async fn create_network(&self, org_id: &str, network: &NewNetwork) -> Result<Network> {
        self.call_count.lock().await.create_network += 1;
        self.check_error().await?;

        let mut created = self.created.lock().await;
        created.push((org_id.to_string(), network.clone()));

        Ok(Network {
            id: format!("N_{}", created.len()),
            organization_id: Some(org_id.to_string()),
            name: network.name.clone(),
            kind: Some(network.kind.clone()),
            product_types: Vec::new(),
            tags: Some(Value::String(network.tags.clone())),
            time_zone: Some(network.time_zone.clone()),
            extra: Map::new(),
        })
    }
}

/// Build an organization for tests
pub fn org(id: &str, name: &str) -> Organization {
    Organization {
        id: id.to_string(),
        name: name.to_string(),
        url: format!("https://n1.meraki.com/o/{}/manage/organization/overview", id),
    }
}

/// Build a network for tests
pub fn network(org_id: &str, name: &str, product_types: &[&str]) -> Network {
    Network {
        id: format!("L_{}_{}", org_id, name),
        organization_id: Some(org_id.to_string()),
        name: name.to_string(),
        kind: None,
        product_types: product_types.iter().map(|s| s.to_string()).collect(),
        tags: None,
        time_zone: Some("Australia/NSW".to_string()),
        extra: Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_valid_key_gate() {
        let mock = MockDashboardClient::new()
            .with_orgs(vec![org("1", "Acme")])
            .await
            .with_valid_key("good")
            .await;

        assert!(matches!(
            mock.connect("bad").list_organizations().await,
            Err(crate::error::Error::Api(ApiError::Unauthorized))
        ));
        assert_eq!(mock.connect("good").list_organizations().await.unwrap().len(), 1);
        assert_eq!(mock.call_counts().await.list_organizations, 2);
    }

    #[tokio::test]
    async fn test_error_is_consumed_once() {
        let mock = MockDashboardClient::new()
            .with_error(ApiError::ServerError("boom".to_string()))
            .await;

        assert!(mock.list_organizations().await.is_err());
        assert!(mock.list_organizations().await.is_ok());
    }

    #[tokio::test]
    async fn test_networks_filtered_by_org() {
        let mock = MockDashboardClient::new()
            .with_networks(vec![
                network("1", "A", &["appliance"]),
                network("2", "B", &["switch"]),
            ])
            .await;

        let nets = mock.list_networks("2").await.unwrap();
        assert_eq!(nets.len(), 1);
        assert_eq!(nets[0].name, "B");
    }
}
