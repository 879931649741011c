//! Admin console collaborators around the editor.
//!
//! Each one collects a few values, sends a single JSON request and tells the
//! host what to do with the page. They all fail the same way: the document is
//! replaced with the response body (empty when no response arrived).

use crate::transport::{HttpRequest, HttpResponse, Method, Transport};
use serde_json::{Map, Value, json};
use tracing::{error, info};

/// What the host page should do once a request finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Navigate(String),
    /// Reload the current location
    Reload,
    /// Replace the edited label with this text
    ReplaceLabel(String),
    ReplaceDocument(String),
}

/// How a form control's raw value becomes JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldEncoder {
    /// Value as typed
    #[default]
    Text,
    /// Whitespace- or comma-separated list of strings
    List,
    /// Payload of a `data:` URL (the part after the first comma)
    MediaContent,
}

impl FieldEncoder {
    /// Encode a raw value. An empty text or a data URL without payload
    /// encodes to `null`; an empty list stays an empty list.
    pub fn encode(self, raw: &str) -> Value {
        match self {
            FieldEncoder::Text if raw.is_empty() => Value::Null,
            FieldEncoder::Text => Value::String(raw.to_string()),
            FieldEncoder::List => Value::Array(
                raw.split(|c: char| c.is_whitespace() || c == ',')
                    .filter(|item| !item.is_empty())
                    .map(|item| Value::String(item.to_string()))
                    .collect(),
            ),
            FieldEncoder::MediaContent => raw
                .strip_prefix("data:")
                .and_then(|rest| rest.split_once(','))
                .map(|(_, payload)| payload)
                .filter(|payload| !payload.is_empty())
                .map_or(Value::Null, |payload| Value::String(payload.to_string())),
        }
    }
}

/// One named control of an item form.
#[derive(Clone, Debug, PartialEq)]
pub struct FormControl {
    pub name: String,
    pub encoder: FieldEncoder,
    pub value: String,
}

impl FormControl {
    pub fn new(name: impl Into<String>, encoder: FieldEncoder, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            encoder,
            value: value.into(),
        }
    }
}

/// Serialize the form controls into a JSON object keyed by control name.
pub fn encode_form(controls: &[FormControl]) -> Value {
    let fields: Map<String, Value> = controls
        .iter()
        .map(|control| (control.name.clone(), control.encoder.encode(&control.value)))
        .collect();
    Value::Object(fields)
}

async fn send(transport: &dyn Transport, request: HttpRequest) -> Result<HttpResponse, Outcome> {
    let method = request.method.as_str();
    let url = request.url.clone();
    match transport.send(request).await {
        Ok(response) => {
            info!(method, url = %url, status = response.status, "Request finished");
            Ok(response)
        }
        Err(e) => {
            error!(method, url = %url, "Request failed: {}", e);
            Err(Outcome::ReplaceDocument(String::new()))
        }
    }
}

/// PATCH a single field. On success the label shows the server's value.
pub async fn inline_edit(transport: &dyn Transport, url: &str, field: &str, value: &str) -> Outcome {
    let request = HttpRequest::new(Method::Patch, url).with_json(json!({ field: value }));
    let response = match send(transport, request).await {
        Ok(response) => response,
        Err(outcome) => return outcome,
    };
    if !response.is_success() {
        return Outcome::ReplaceDocument(response.body);
    }

    match serde_json::from_str::<Value>(&response.body) {
        Ok(Value::Object(mut fields)) => match fields.remove(field) {
            Some(Value::String(text)) => Outcome::ReplaceLabel(text),
            Some(Value::Null) | None => Outcome::ReplaceLabel(String::new()),
            Some(other) => Outcome::ReplaceLabel(other.to_string()),
        },
        _ => Outcome::ReplaceDocument(response.body),
    }
}

/// Submit an item form. On success navigate to `location`, else to the
/// `Location` header, else reload.
pub async fn submit_item_form(
    transport: &dyn Transport,
    controls: &[FormControl],
    method: Method,
    url: &str,
    location: Option<&str>,
) -> Outcome {
    let request = HttpRequest::new(method, url).with_json(encode_form(controls));
    let response = match send(transport, request).await {
        Ok(response) => response,
        Err(outcome) => return outcome,
    };
    if !response.is_success() {
        return Outcome::ReplaceDocument(response.body);
    }

    match location.map(str::to_string).or(response.location) {
        Some(target) => Outcome::Navigate(target),
        None => Outcome::Reload,
    }
}

/// Move an item under a new parent (`None` = root). Navigates back to the item.
pub async fn move_item(transport: &dyn Transport, url: &str, parent_id: Option<u64>) -> Outcome {
    let request = HttpRequest::new(Method::Patch, url).with_json(json!({ "parent_id": parent_id }));
    match send(transport, request).await {
        Ok(response) if response.status == 200 => Outcome::Navigate(url.to_string()),
        Ok(response) => Outcome::ReplaceDocument(response.body),
        Err(outcome) => outcome,
    }
}

/// Store a new order of the children of an item.
pub async fn reorder_children(transport: &dyn Transport, url: &str, ids: &[u64]) -> Outcome {
    let request = HttpRequest::new(Method::Post, url).with_json(json!(ids));
    match send(transport, request).await {
        Ok(response) if response.status == 200 => Outcome::Reload,
        Ok(response) => Outcome::ReplaceDocument(response.body),
        Err(outcome) => outcome,
    }
}
