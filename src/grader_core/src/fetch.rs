use tracing::{debug, warn};

const USER_AGENT: &str = concat!("grader/", env!("CARGO_PKG_VERSION"));

/// Result of a single GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response body, whatever the status code was.
    Fetched(Vec<u8>),
    /// The request never produced a readable response.
    Failed(String),
}

/// Issues one GET to `url`; never retries and never times out.
pub async fn fetch(url: &str) -> FetchOutcome {
    let client = match reqwest::Client::builder().user_agent(USER_AGENT).build() {
        Ok(client) => client,
        Err(err) => return FetchOutcome::Failed(err.to_string()),
    };

    debug!(url, "fetching");
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(err) => return FetchOutcome::Failed(err.to_string()),
    };

    let status = response.status();
    if !status.is_success() {
        warn!(url, %status, "non-success status, grading the body anyway");
    }

    match response.bytes().await {
        Ok(body) => {
            debug!(url, %status, bytes = body.len(), "fetched");
            FetchOutcome::Fetched(body.to_vec())
        }
        Err(err) => FetchOutcome::Failed(err.to_string()),
    }
}
