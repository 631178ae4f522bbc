use serde::{Deserialize, Serialize};

use crate::Status;

#[derive(Debug)]
pub struct IgdbConnection {
    pub client_id: String,
    pub oauth_token: String,
}

impl IgdbConnection {
    /// Authenticate with twitch/igdb OAuth2 server and retrieve session token.
    /// Authentication is valid for the lifetime of this instance or until the
    /// retrieved token expires.
    pub async fn new(client_id: &str, secret: &str) -> Result<Self, Status> {
        let resp = reqwest::Client::new()
            .post(TWITCH_OAUTH_URL)
            .query(&[
                ("client_id", client_id),
                ("client_secret", secret),
                ("grant_type", "client_credentials"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<TwitchOAuthResponse>()
            .await?;

        Ok(IgdbConnection {
            client_id: client_id.to_string(),
            oauth_token: resp.access_token,
        })
    }
}

pub const TWITCH_OAUTH_URL: &str = "https://id.twitch.tv/oauth2/token";

#[derive(Debug, Serialize, Deserialize)]
struct TwitchOAuthResponse {
    access_token: String,
    expires_in: i32,
}
