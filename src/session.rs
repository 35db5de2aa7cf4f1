//! Dashboard session acquisition
//!
//! A session pairs an API client with the organizations its key can see.
//! How the key is obtained decides what happens when it is rejected: a key
//! typed at the prompt is asked for again, a key from the environment is
//! fatal.

use crate::client::{DashboardApi, Organization};
use crate::error::{ApiError, Error, Result};
use crate::prompt::{self, Console};
use crate::validate;

/// Where the API key comes from, fixed for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Ask the operator, re-asking after any failed login
    Prompt,
    /// A key read from the environment; failures are fatal
    Provided(String),
}

/// Authenticated client and the organizations visible to it
pub struct DashboardSession<C> {
    pub client: C,
    pub organizations: Vec<Organization>,
}

/// Open a session, building a client for each candidate key with `connect`.
pub async fn open<C, F>(
    console: &mut dyn Console,
    credentials: Credentials,
    connect: F,
) -> Result<DashboardSession<C>>
where
    C: DashboardApi,
    F: Fn(&str) -> Result<C>,
{
    match credentials {
        Credentials::Provided(raw) => {
            let key = validate::validate_api_key(&raw)?;
            log::debug!("Logging in with API key from the environment");
            login(connect(&key)?).await
        }
        Credentials::Prompt => loop {
            let key = prompt::input_api_key(console)?;
            console.say("Connecting and logging in to the Meraki dashboard...");
            match login(connect(&key)?).await {
                Ok(session) => return Ok(session),
                Err(Error::Api(ApiError::Unauthorized)) => {
                    console.say(&format!("-> {}", ApiError::Unauthorized));
                }
                Err(Error::Api(err)) => {
                    console.say(&format!("-> Meraki API error: {}", err));
                }
                Err(err) => return Err(err),
            }
        },
    }
}

async fn login<C: DashboardApi>(client: C) -> Result<DashboardSession<C>> {
    let organizations = client.list_organizations().await?;
    log::debug!("Key has access to {} organizations", organizations.len());
    Ok(DashboardSession {
        client,
        organizations,
    })
}
