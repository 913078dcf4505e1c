//! JSONPaths mapping for the event-log COPY
//!
//! The events COPY reads with `format as json` pointing at a JSONPaths
//! document in S3. The document maps source JSON fields to staging columns
//! by position, so entry order must match the `staging_events` column order.

use serde_json::{Value, json};

/// Event-log JSON fields, in `staging_events` column order.
pub const LOG_JSONPATHS_FIELDS: [&str; 18] = [
    "artist",
    "auth",
    "firstName",
    "gender",
    "itemInSession",
    "lastName",
    "length",
    "level",
    "location",
    "method",
    "page",
    "registration",
    "sessionId",
    "song",
    "status",
    "ts",
    "userAgent",
    "userId",
];

/// Build the JSONPaths document as a JSON value.
pub fn log_jsonpaths() -> Value {
    let paths: Vec<String> = LOG_JSONPATHS_FIELDS
        .iter()
        .map(|field| format!("$['{field}']"))
        .collect();
    json!({ "jsonpaths": paths })
}

/// Serialize the JSONPaths document, ready to publish to the S3 location
/// the events COPY references.
pub fn log_jsonpaths_document() -> String {
    serde_json::to_string_pretty(&log_jsonpaths()).expect("jsonpaths document serializes")
}
