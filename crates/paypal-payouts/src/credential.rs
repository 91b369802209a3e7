//! Client credentials loaded from a properties source.
//!
//! The `init_config_*` functions accept the same `key=value` format as the
//! other `PayPal` SDKs (`clientId`, `clientSecret`, `mode`,
//! `service.EndPoint`, ...). They only load and hold credentials; obtaining
//! an access token with them is left to the caller.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::Path;

use crate::config::ClientConfig;
use crate::error::{PayPalError, PayPalResult};

/// Properties key for the REST app client id.
pub const CLIENT_ID_KEY: &str = "clientId";
/// Properties key for the REST app client secret.
pub const CLIENT_SECRET_KEY: &str = "clientSecret";

/// REST app credentials plus the configuration they were loaded with.
#[derive(Clone)]
pub struct OAuthTokenCredential {
    client_id: String,
    client_secret: String,
    config: HashMap<String, String>,
}

impl OAuthTokenCredential {
    /// Create credentials directly.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            config: HashMap::new(),
        }
    }

    /// The client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The client secret.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// All properties the credentials were loaded from.
    pub const fn config(&self) -> &HashMap<String, String> {
        &self.config
    }

    /// HTTP Basic `Authorization` value for the token endpoint.
    pub fn authorization_header(&self) -> String {
        let raw = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", STANDARD.encode(raw))
    }

    /// Client configuration derived from the loaded properties.
    pub fn client_config(&self) -> PayPalResult<ClientConfig> {
        ClientConfig::from_properties(&self.config)
    }
}

impl fmt::Debug for OAuthTokenCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthTokenCredential")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("config_keys", &self.config.len())
            .finish()
    }
}

/// Load credentials from a properties map.
pub fn init_config_from_map(properties: HashMap<String, String>) -> PayPalResult<OAuthTokenCredential> {
    let client_id = required(&properties, CLIENT_ID_KEY)?;
    let client_secret = required(&properties, CLIENT_SECRET_KEY)?;
    tracing::debug!(client_id = %client_id, keys = properties.len(), "Loaded PayPal credentials");
    Ok(OAuthTokenCredential {
        client_id,
        client_secret,
        config: properties,
    })
}

/// Load credentials from a properties stream.
pub fn init_config_from_reader<R: Read>(mut reader: R) -> PayPalResult<OAuthTokenCredential> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    init_config_from_map(parse_properties(&text))
}

/// Load credentials from a properties file.
pub fn init_config_from_path(path: impl AsRef<Path>) -> PayPalResult<OAuthTokenCredential> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "Reading PayPal properties file");
    let file = std::fs::File::open(path)?;
    init_config_from_reader(file)
}

fn required(properties: &HashMap<String, String>, key: &str) -> PayPalResult<String> {
    properties
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| PayPalError::configuration(format!("{key} is missing")))
}

/// Parse Java-style properties text.
///
/// Supports `#`/`!` comment lines, `=` or `:` separators and trailing `\`
/// line continuations. Later keys win.
pub fn parse_properties(text: &str) -> HashMap<String, String> {
    let mut properties = HashMap::new();
    let mut pending = String::new();

    for raw in text.lines() {
        let line = raw.trim_start();
        if pending.is_empty() && (line.is_empty() || line.starts_with('#') || line.starts_with('!')) {
            continue;
        }

        if let Some(continued) = line.strip_suffix('\\') {
            pending.push_str(continued);
            continue;
        }
        pending.push_str(line);

        let entry = std::mem::take(&mut pending);
        if let Some((key, value)) = split_entry(&entry) {
            properties.insert(key, value);
        }
    }

    if let Some((key, value)) = split_entry(&pending) {
        properties.insert(key, value);
    }

    properties
}

fn split_entry(entry: &str) -> Option<(String, String)> {
    let entry = entry.trim();
    if entry.is_empty() {
        return None;
    }
    let (key, value) = entry
        .find(['=', ':'])
        .map_or((entry, ""), |idx| (&entry[..idx], &entry[idx + 1..]));
    Some((key.trim().to_string(), value.trim().to_string()))
}
