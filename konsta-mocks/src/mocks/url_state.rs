//! Control state carried in the mock page URL
//!
//! The state is a JSON object of string pairs, base64-encoded (URL-safe, no
//! padding) so it survives as a single opaque query value.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::collections::BTreeMap;
use tracing::debug;

pub type StateMap = BTreeMap<String, String>;

/// Decode a `state` query value. Anything malformed decodes to an empty map.
pub fn decode_state(encoded: &str) -> StateMap {
    if encoded.is_empty() {
        return StateMap::new();
    }

    let Ok(json_bytes) = URL_SAFE_NO_PAD.decode(encoded) else {
        debug!("Ignoring state that is not base64");
        return StateMap::new();
    };

    serde_json::from_slice(&json_bytes).unwrap_or_else(|e| {
        debug!("Ignoring state that is not a string map: {e}");
        StateMap::new()
    })
}

/// Encode state for the URL, or `None` when there is nothing to carry.
pub fn encode_state(state: &StateMap) -> Option<String> {
    if state.is_empty() {
        return None;
    }
    let json = serde_json::to_string(state).ok()?;
    Some(URL_SAFE_NO_PAD.encode(json.as_bytes()))
}
