//! Organization and network lookups over already-fetched collections

use crate::client::{DashboardApi, Network, Organization};
use crate::error::LookupError;

/// Network filter by how many product types a network spans
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum NetTypeFilter {
    /// Standalone and combined networks
    #[default]
    Any,
    /// Networks with exactly one product type
    Standalone,
    /// Networks with more than one product type
    Combined,
}

impl NetTypeFilter {
    /// Numeric form: 0 = any, 1 = standalone, 2 = combined
    #[allow(dead_code)]
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(NetTypeFilter::Any),
            1 => Some(NetTypeFilter::Standalone),
            2 => Some(NetTypeFilter::Combined),
            _ => None,
        }
    }

    /// Whether a network passes this filter
    pub fn matches(self, network: &Network) -> bool {
        match self {
            NetTypeFilter::Any => true,
            NetTypeFilter::Standalone => network.product_type_count() == 1,
            NetTypeFilter::Combined => network.product_type_count() > 1,
        }
    }
}

/// Filter organizations by exact (case-sensitive) name.
///
/// An empty name selects every organization. With `unique_org`, more than
/// one match is an error rather than a list to pick from.
pub fn filter_orgs(
    orgs: &[Organization],
    org_name: &str,
    unique_org: bool,
) -> Result<Vec<Organization>, LookupError> {
    let matched: Vec<Organization> = if org_name.is_empty() {
        orgs.to_vec()
    } else {
        orgs.iter().filter(|o| o.name == org_name).cloned().collect()
    };

    if matched.is_empty() {
        return Err(LookupError::OrgNotFound(org_name.to_string()));
    }
    if unique_org && matched.len() > 1 {
        return Err(LookupError::AmbiguousOrg(org_name.to_string()));
    }
    Ok(matched)
}

/// Resolve an organization name to exactly one organization.
pub fn resolve_org(orgs: &[Organization], org_name: &str) -> Result<Organization, LookupError> {
    let mut matched = filter_orgs(orgs, org_name, true)?;
    // filter_orgs guarantees exactly one element here
    Ok(matched.remove(0))
}

/// Select networks by exact name and type filter. An empty name matches
/// every network.
pub fn get_networks(networks: &[Network], net_name: &str, filter: NetTypeFilter) -> Vec<Network> {
    networks
        .iter()
        .filter(|n| net_name.is_empty() || n.name == net_name)
        .filter(|n| filter.matches(n))
        .cloned()
        .collect()
}

/// Find networks of a named organization.
///
/// Read path: an unknown or ambiguous organization, or a failed API call,
/// logs a warning and yields no networks.
pub async fn find_networks<C: DashboardApi + ?Sized>(
    client: &C,
    orgs: &[Organization],
    org_name: &str,
    net_name: &str,
    filter: NetTypeFilter,
) -> Vec<Network> {
    let org = match resolve_org(orgs, org_name) {
        Ok(org) => org,
        Err(err) => {
            log::warn!("{}", err);
            return Vec::new();
        }
    };

    log::debug!("Fetching networks for org {}", org.id);
    match client.list_networks(&org.id).await {
        Ok(networks) => {
            let found = get_networks(&networks, net_name, filter);
            log::debug!("Matched {} of {} networks", found.len(), networks.len());
            found
        }
        Err(err) => {
            log::warn!("Failed to list networks for '{}': {}", org.name, err);
            Vec::new()
        }
    }
}
