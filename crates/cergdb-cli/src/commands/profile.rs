//! `cergdb profile` command implementation

use crate::api::client::profile_username;
use crate::api::ApiClient;
use crate::commands::{display_body, send};
use crate::error::Result;

/// Print the user name the server associates with the session
pub async fn run(mut api: ApiClient) -> Result<()> {
    api.login(None, None).await?;

    let body = send("Fetching profile...", api.get_user_profile()).await?;

    match body.as_ref().and_then(profile_username) {
        Some(username) => println!("Logged in as: {}", username),
        None => println!("{}", display_body(&body)),
    }
    Ok(())
}
