use reqwest::Client;
use url::Url;

use crate::{
    config::Config,
    spotify::{ApiError, check_status},
    types::TokenResponse,
};

/// Permissions requested from the listener: top tracks and play history.
pub const SCOPES: [&str; 2] = ["user-top-read", "user-read-recently-played"];

/// Builds the Spotify authorization URL the browser is redirected to.
///
/// `show_dialog=true` forces the consent screen so switching accounts works
/// after a logout.
///
/// # Errors
///
/// Returns [`ApiError::Url`] when the configured accounts URL is not a valid
/// absolute URL.
pub fn authorize_url(config: &Config, state: &str) -> Result<Url, ApiError> {
    let scope = SCOPES.join(" ");
    let base = format!(
        "{}/authorize",
        config.accounts_url.trim_end_matches('/')
    );

    Ok(Url::parse_with_params(
        &base,
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("scope", scope.as_str()),
            ("state", state),
            ("show_dialog", "true"),
        ],
    )?)
}

/// Exchanges an authorization code for an access token.
///
/// This is the confidential-client variant of the authorization code flow:
/// the client credentials are sent as HTTP basic auth and no PKCE verifier
/// is involved.
///
/// # Errors
///
/// Common failure scenarios:
/// - Invalid, expired or already used authorization code (`400`)
/// - Wrong client credentials (`401`)
/// - Network connectivity issues
pub async fn exchange_code(
    client: &Client,
    config: &Config,
    code: &str,
) -> Result<TokenResponse, ApiError> {
    let token_url = format!("{}/api/token", config.accounts_url.trim_end_matches('/'));

    let res = client
        .post(&token_url)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
        ])
        .send()
        .await?;

    let res = check_status(res)?;
    Ok(res.json::<TokenResponse>().await?)
}

/// Where the browser lands after a successful login: the site URL with the
/// token appended as the `access_token` query parameter.
pub fn post_login_redirect(config: &Config, access_token: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(&config.site_url)?;
    url.query_pairs_mut()
        .append_pair("access_token", access_token);
    Ok(url)
}
