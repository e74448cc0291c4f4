/// Directory API client
///
/// One GET against the users endpoint, fired exactly once when the
/// application starts. There is no retry, timeout or cancellation;
/// a failed fetch is logged and leaves the dataset empty.

use serde::Deserialize;
use thiserror::Error;

use crate::state::data::User;

/// The fixed endpoint serving the user directory
const USERS_ENDPOINT: &str = "https://dummyjson.com/users";

/// Error for a failed directory fetch.
///
/// Network failures, HTTP error statuses and malformed bodies are not
/// told apart; the caller logs the error and keeps an empty dataset.
#[derive(Debug, Error)]
#[error("failed to fetch users: {0}")]
pub struct FetchError(#[from] reqwest::Error);

/// Fetch the full user list from the directory endpoint
pub async fn fetch_users() -> Result<Vec<User>, FetchError> {
    fetch_users_from(USERS_ENDPOINT).await
}

/// Fetch and decode a users payload from the given URL
async fn fetch_users_from(url: &str) -> Result<Vec<User>, FetchError> {
    // The endpoint wraps the records in a { "users": [...] } object
    #[derive(Deserialize)]
    struct Payload {
        users: Vec<User>,
    }

    let payload: Payload = reqwest::Client::new()
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(payload.users)
}
