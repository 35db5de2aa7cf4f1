//! Network command implementations

use colored::Colorize;
use tabled::Tabled;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::{DashboardApi, NewNetwork, Network};
use crate::config::Config;
use crate::error::Result;
use crate::lookup::{self, NetTypeFilter};
use crate::output::{self, json};
use crate::prompt::{self, Console, TerminalConsole};
use crate::session::DashboardSession;
use crate::validate;

/// Network for table display
#[derive(Tabled)]
pub struct NetworkDisplay {
    #[tabled(rename = "NETWORK ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "PRODUCT TYPES")]
    product_types: String,
    #[tabled(rename = "TIME ZONE")]
    time_zone: String,
}

impl From<Network> for NetworkDisplay {
    fn from(net: Network) -> Self {
        Self {
            product_types: net.product_types_display(),
            id: net.id,
            name: net.name,
            time_zone: net.time_zone.unwrap_or_default(),
        }
    }
}

/// Ask for the network details and create the network.
///
/// Fields are re-asked until valid; the create call itself is made once.
pub async fn provision_network<C: DashboardApi>(
    session: &DashboardSession<C>,
    console: &mut dyn Console,
    config: &Config,
) -> Result<Network> {
    let org = prompt::input_org(console, &session.organizations)?;
    let name = prompt::input_net_name(console)?;
    let tags = prompt::input_tags(console, "network")?;
    let types = prompt::input_net_type(console)?;

    let request = NewNetwork {
        name,
        kind: validate::validate_net_type(&validate::join_product_types(&types))?,
        tags,
        time_zone: config.default_time_zone.clone(),
    };

    console.say(&format!("Creating a new network: '{}'...", request.name));
    log::debug!("Creating network in org {}: {:?}", org.id, request);
    let network = session.client.create_network(&org.id, &request).await?;

    console.say(&format!(
        "{} The new network '{}' is successfully created for the '{}' organization!",
        "✓".green(),
        network.name.bold(),
        org.name
    ));
    console.say(&json::format_record(&network)?);

    Ok(network)
}

/// Run the network create command
pub async fn create(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut console = TerminalConsole::new();
    let session = ctx.open_session(&mut console).await?;

    provision_network(&session, &mut console, &ctx.config).await?;
    Ok(())
}

/// Run the network find command
pub async fn find(
    opts: &GlobalOptions,
    org_name: &str,
    net_name: &str,
    filter: NetTypeFilter,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut console = TerminalConsole::new();
    let session = ctx.open_session(&mut console).await?;

    let networks = lookup::find_networks(
        &session.client,
        &session.organizations,
        org_name,
        net_name,
        filter,
    )
    .await;

    let rendered = output::render_list::<_, NetworkDisplay>(&networks, ctx.format)?;
    println!("{}", rendered);

    Ok(())
}
