use std::{future::Future, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};

/// Largest number of ids the several-ids endpoints accept.
pub const MAX_IDS: usize = 50;

/// Bounds of the `limit` query parameter.
pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 50;

pub const DEFAULT_LIMIT: u32 = 20;

/// Everything but RFC 3986 unreserved characters is escaped, so spaces become
/// `%20` rather than `+`.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn validate_ids<S: AsRef<str>>(ids: &[S]) -> Result<()> {
    if ids.is_empty() || ids.len() > MAX_IDS {
        return Err(Error::InvalidArgument(format!(
            "between 1 and {MAX_IDS} ids are required, got {}",
            ids.len()
        )));
    }
    if ids.iter().any(|id| id.as_ref().is_empty()) {
        return Err(Error::InvalidArgument("ids must not be empty".to_string()));
    }
    Ok(())
}

pub fn validate_limit(limit: u32) -> Result<()> {
    if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
        return Err(Error::InvalidArgument(format!(
            "limit must be between {MIN_LIMIT} and {MAX_LIMIT}, got {limit}"
        )));
    }
    Ok(())
}

pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::InvalidArgument("id must not be empty".to_string()));
    }
    Ok(())
}

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_ENCODE_SET).to_string()
}

pub fn join_ids<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter().map(|id| id.as_ref()).collect::<Vec<_>>().join(",")
}

/// Joins `base` and `endpoint` and appends the percent-encoded query.
pub fn build_url(base: &str, endpoint: &str, params: &[(&str, String)]) -> String {
    let mut url = format!(
        "{base}/{endpoint}",
        base = base.trim_end_matches('/'),
        endpoint = endpoint.trim_start_matches('/')
    );

    if !params.is_empty() {
        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
            .collect::<Vec<_>>()
            .join("&");
        url.push('?');
        url.push_str(&query);
    }

    url
}

/// Runs `future` unless `cancel` fires first.
pub async fn cancellable<T, F>(cancel: &CancellationToken, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(Error::Cancelled),
        result = future => result,
    }
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
