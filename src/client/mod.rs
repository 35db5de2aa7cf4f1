//! Meraki Dashboard API client

use async_trait::async_trait;

use crate::error::Result;

pub mod dashboard;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use dashboard::DashboardClient;
#[cfg(test)]
pub use mock::MockDashboardClient;
pub use models::{NewNetwork, Network, Organization};

/// Dashboard API operations used by this tool
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// List all organizations visible to the API key
    async fn list_organizations(&self) -> Result<Vec<Organization>>;

    /// List the networks of an organization
    async fn list_networks(&self, org_id: &str) -> Result<Vec<Network>>;

    /// Create a network in an organization
    async fn create_network(&self, org_id: &str, network: &NewNetwork) -> Result<Network>;
}
