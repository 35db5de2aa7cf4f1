//! Organization command implementations

use tabled::Tabled;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::Organization;
use crate::error::Result;
use crate::output;
use crate::prompt::TerminalConsole;

/// Organization for table display
#[derive(Tabled)]
pub struct OrgDisplay {
    #[tabled(rename = "ORG ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "URL")]
    url: String,
}

impl From<Organization> for OrgDisplay {
    fn from(org: Organization) -> Self {
        Self {
            id: org.id,
            name: org.name,
            url: org.url,
        }
    }
}

/// Run the org list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut console = TerminalConsole::new();
    let session = ctx.open_session(&mut console).await?;

    let rendered = output::render_list::<_, OrgDisplay>(&session.organizations, ctx.format)?;
    println!("{}", rendered);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::client::mock::org;

    #[test]
    fn test_org_table_has_all_columns() {
        let orgs = vec![org("549236", "DevNet Sandbox")];

        let table = output::render_list::<_, OrgDisplay>(&orgs, OutputFormat::Table).unwrap();

        assert!(table.contains("ORG ID"));
        assert!(table.contains("549236"));
        assert!(table.contains("DevNet Sandbox"));
        assert!(table.contains("https://n1.meraki.com/o/549236"));
    }
}
