//! Resource path formatting for the REST API.
//!
//! Paths are relative to the configured endpoint. Positional placeholders
//! (`{0}`, `{1}`, ...) in the path are filled from arguments and
//! percent-encoded; placeholders in the query string are filled by parameter
//! name, and pairs whose value is absent are dropped.

use std::collections::HashMap;

/// Create endpoint; `sync_mode` is taken from the caller's parameters.
pub const CREATE_PAYOUT_PATTERN: &str = "v1/payments/payouts?sync_mode={0}";
/// Lookup endpoint for a single batch.
pub const GET_PAYOUT_PATTERN: &str = "v1/payments/payouts/{0}";

/// Fill positional placeholders with percent-encoded arguments.
pub fn format_uri_path(pattern: &str, args: &[&str]) -> String {
    args.iter()
        .enumerate()
        .fold(pattern.to_string(), |path, (index, arg)| {
            path.replace(&format!("{{{index}}}"), &urlencoding::encode(arg))
        })
}

/// Fill query placeholders by parameter name, dropping absent ones.
///
/// `v1/payments/payouts?sync_mode={0}` with `{"sync_mode": "true"}` becomes
/// `v1/payments/payouts?sync_mode=true`; with no `sync_mode` entry it becomes
/// `v1/payments/payouts`.
pub fn format_query_path(pattern: &str, parameters: &HashMap<String, String>) -> String {
    let Some((path, query)) = pattern.split_once('?') else {
        return pattern.to_string();
    };

    let pairs: Vec<String> = query
        .split('&')
        .filter_map(|pair| {
            let name = pair.split_once('=').map_or(pair, |(name, _)| name);
            parameters
                .get(name)
                .map(|value| format!("{name}={}", urlencoding::encode(value)))
        })
        .collect();

    if pairs.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", pairs.join("&"))
    }
}
