//! Meraki Dashboard API data models

mod network;
mod org;

pub use network::{NewNetwork, Network};
pub use org::Organization;
