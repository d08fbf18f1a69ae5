use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared client settings for the web services the pipeline talks to.
pub(crate) fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_default()
}
