// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Formatting for response fields that have no useful `Display`.

use google_cloud_wkt::Timestamp;
use std::collections::HashMap;

/// Formats a timestamp in RFC 3339 format, the same format used by the
/// JSON representation of the message.
pub fn timestamp(t: Option<&Timestamp>) -> String {
    t.and_then(|t| serde_json::to_value(t).ok())
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_else(|| "unset".to_string())
}

/// Formats labels as `key=value` pairs, sorted by key.
pub fn labels(labels: &HashMap<String, String>) -> String {
    if labels.is_empty() {
        return "none".to_string();
    }
    let mut pairs = labels
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>();
    pairs.sort();
    pairs.join(", ")
}

/// Returns at most `max` characters of `text`, marking any truncation.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        None => text.to_string(),
        Some((idx, _)) => format!("{}...", &text[..idx]),
    }
}

/// Parses a `key=value` command-line argument.
pub fn parse_key_value(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((k, v)) if !k.is_empty() => Ok((k.to_string(), v.to_string())),
        _ => Err(format!("expected `key=value`, got {arg:?}")),
    }
}
