//! Browser-form model: field set, honeypot filtering, feedback regions

use std::collections::HashMap;

/// Name of the hidden honeypot input. Legitimate users never fill it.
pub const HONEYPOT_FIELD: &str = "_hp";

const DEFAULT_ENDPOINT: &str = "/api/contact";

/// Observable state of the form's feedback regions and submit control
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormUi {
    pub success_visible: bool,
    pub error_visible: bool,
    pub submit_busy: bool,
}

/// In-memory stand-in for the contact form element: an ordered field
/// list plus the success/error regions and submit control the client
/// toggles.
#[derive(Debug, Default)]
pub struct ContactForm {
    fields: Vec<(String, String)>,
    endpoint: Option<String>,
    pub ui: FormUi,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-form endpoint override, the `data-endpoint` attribute
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = Some(endpoint.to_string());
        self
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Append a field entry. Duplicate names are kept here; the
    /// serializer applies last-value-wins.
    pub fn set_field(&mut self, name: &str, value: &str) {
        self.fields.push((name.to_string(), value.to_string()));
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Clear every field value, the `form.reset()` analog
    pub fn reset(&mut self) {
        for (_, value) in &mut self.fields {
            value.clear();
        }
    }
}

/// Extract the form's fields into a submission payload, or `None` when
/// the honeypot carries any value. The honeypot key never reaches the
/// payload; duplicate field names keep the last value.
pub fn serialize(form: &ContactForm) -> Option<HashMap<String, String>> {
    if form
        .entries()
        .any(|(name, value)| name == HONEYPOT_FIELD && !value.is_empty())
    {
        return None;
    }

    let mut payload = HashMap::new();
    for (name, value) in form.entries() {
        if name == HONEYPOT_FIELD {
            continue;
        }
        payload.insert(name.to_string(), value.to_string());
    }
    Some(payload)
}
