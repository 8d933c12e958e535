use std::fmt;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{
    spotify::{ApiError, check_status},
    types::{AggregationResult, RecentTrack},
};

/// Login state of one browser session.
///
/// The token lives here and is handed explicitly to every data fetch. It is
/// created at the login boundary (the redirect carrying `access_token`) and
/// dropped at logout; nothing else holds on to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Session {
            token: Some(token.into()),
        }
    }

    /// Picks the token out of the post-login redirect, e.g.
    /// `https://statify.example/?access_token=BQC...`.
    ///
    /// Returns an anonymous session when the URL carries no token.
    pub fn from_redirect(redirect: &str) -> Self {
        let token = Url::parse(redirect).ok().and_then(|url| {
            url.query_pairs()
                .find(|(key, value)| key == "access_token" && !value.is_empty())
                .map(|(_, value)| value.into_owned())
        });
        Session { token }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn logout(&mut self) {
        self.token = None;
    }
}

#[derive(Debug)]
pub enum ClientError {
    NotLoggedIn,
    /// The service turned the token away. It answers `400` when Spotify
    /// rejects the token and `401` when none arrives.
    Rejected(StatusCode),
    Request(ApiError),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::NotLoggedIn => write!(f, "You must be logged in."),
            ClientError::Rejected(status) => {
                write!(f, "Session rejected ({}), please log in again.", status)
            }
            ClientError::Request(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<ApiError> for ClientError {
    fn from(err: ApiError) -> Self {
        ClientError::Request(err)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Request(ApiError::Http(err))
    }
}

impl ClientError {
    /// True when the only sensible recovery is logging in again.
    pub fn needs_login(&self) -> bool {
        matches!(
            self,
            ClientError::NotLoggedIn
                | ClientError::Rejected(_)
                | ClientError::Request(ApiError::Unauthorized)
        )
    }
}

/// Front-end side client of the Statify HTTP service.
#[derive(Debug, Clone)]
pub struct StatifyClient {
    http: Client,
    base_url: String,
}

impl StatifyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        StatifyClient {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch_tracks(&self, session: &Session) -> Result<AggregationResult, ClientError> {
        self.get(session, "tracks").await
    }

    pub async fn fetch_recent(&self, session: &Session) -> Result<Vec<RecentTrack>, ClientError> {
        self.get(session, "recent").await
    }

    pub async fn fetch_profile(&self, session: &Session) -> Result<Value, ClientError> {
        self.get(session, "me").await
    }

    /// Display name from the profile, if the user has set one.
    pub async fn display_name(&self, session: &Session) -> Result<Option<String>, ClientError> {
        let profile = self.fetch_profile(session).await?;
        Ok(profile["display_name"].as_str().map(str::to_string))
    }

    async fn get<T: DeserializeOwned>(&self, session: &Session, path: &str) -> Result<T, ClientError> {
        let token = session.token().ok_or(ClientError::NotLoggedIn)?;
        let res = self
            .http
            .get(format!("{}/{}", self.base_url, path))
            .bearer_auth(token)
            .send()
            .await?;

        let status = res.status();
        if status == StatusCode::BAD_REQUEST || status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Rejected(status));
        }

        let res = check_status(res)?;
        Ok(res.json::<T>().await?)
    }
}
