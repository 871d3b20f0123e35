//! Bulk actions: apply one server operation to every selected table row.
//!
//! A [`BulkAction`] is bound to a row-key attribute, a target URL, and an
//! options set. Dispatching it collects the selected rows' key values,
//! merges them into a JSON body alongside any extra data, and POSTs the
//! result. The caller feeds the response body to the alert feed's
//! result-scan and then reloads the table.

use log::warn;
use serde_json::{Map, Value};

use crate::alerts::{AlertFeed, Severity};
use crate::client::{ApiError, TaskApi};
use crate::constants::DEFAULT_DEST_ATTR;

/// A table widget capable of reporting its selected rows and reloading.
pub trait RowSource {
    /// The currently selected rows, in display order.
    fn selected_rows(&self) -> Vec<Map<String, Value>>;
    /// Re-fetch the table's data.
    fn reload(&self);
}

/// Extra request-body attributes, either fixed or computed at dispatch time.
pub enum ExtraData {
    None,
    Map(Map<String, Value>),
    Compute(Box<dyn Fn() -> Map<String, Value> + Send + Sync>),
}

impl ExtraData {
    fn resolve(&self) -> Map<String, Value> {
        match self {
            Self::None => Map::new(),
            Self::Map(map) => map.clone(),
            Self::Compute(f) => f(),
        }
    }
}

impl Default for ExtraData {
    fn default() -> Self {
        Self::None
    }
}

#[derive(Default)]
pub struct BulkActionOptions {
    pub extra_data: ExtraData,
    /// Request-body attribute for the key list; defaults to `"rows"`.
    pub dest_attr: Option<String>,
    /// Custom reload routine; defaults to the table's own reload.
    pub reloader: Option<Box<dyn Fn() + Send + Sync>>,
}

/// One configured bulk action.
pub struct BulkAction {
    key: String,
    url: String,
    options: BulkActionOptions,
}

impl BulkAction {
    pub fn new(key: impl Into<String>, url: impl Into<String>, options: BulkActionOptions) -> Self {
        Self {
            key: key.into(),
            url: url.into(),
            options,
        }
    }

    fn dest_attr(&self) -> &str {
        self.options.dest_attr.as_deref().unwrap_or(DEFAULT_DEST_ATTR)
    }

    /// Build the request body for a set of selected rows: a shallow copy of
    /// the resolved extra data with the ordered key values merged in under
    /// the destination attribute.
    pub fn request_body(&self, rows: &[Map<String, Value>]) -> Value {
        let keys: Vec<Value> = rows
            .iter()
            .map(|row| row.get(&self.key).cloned().unwrap_or(Value::Null))
            .collect();

        let mut body = self.options.extra_data.resolve();
        body.insert(self.dest_attr().to_string(), Value::Array(keys));
        Value::Object(body)
    }

    /// POST the action for the table's current selection and return the
    /// response body for alert scanning. The caller runs [`Self::reload`]
    /// after the alerts have been shown.
    pub async fn dispatch(
        &self,
        table: &dyn RowSource,
        api: &dyn TaskApi,
    ) -> Result<Value, ApiError> {
        let body = self.request_body(&table.selected_rows());
        api.bulk_action(&self.url, &body).await
    }

    /// Dispatch the action end to end: POST the selection, show the result
    /// alerts (which also requests an immediate task re-check), then reload
    /// the table. A failed request surfaces as a danger alert instead of
    /// being dropped.
    pub async fn run(&self, table: &dyn RowSource, api: &dyn TaskApi, feed: &mut AlertFeed) {
        match self.dispatch(table, api).await {
            Ok(body) => {
                feed.result_alerts(&body);
                self.reload(table);
            }
            Err(err) => {
                warn!("bulk action {} failed: {err}", self.url);
                feed.show_alert(format!("Action failed: {err}"), Some(Severity::Danger));
            }
        }
    }

    /// Reload the table, through the configured reloader when one is set.
    pub fn reload(&self, table: &dyn RowSource) {
        match &self.options.reloader {
            Some(reloader) => reloader(),
            None => table.reload(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(v: Value) -> Vec<Map<String, Value>> {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn missing_key_attribute_becomes_null() {
        let action = BulkAction::new("id", "/api/act", BulkActionOptions::default());
        let body = action.request_body(&rows(json!([{"id": 3}, {"name": "no id"}])));
        assert_eq!(body, json!({"rows": [3, null]}));
    }

    #[test]
    fn computed_extra_data_resolves_at_build_time() {
        let options = BulkActionOptions {
            extra_data: ExtraData::Compute(Box::new(|| {
                let mut map = Map::new();
                map.insert("confirm".to_string(), json!(true));
                map
            })),
            dest_attr: Some("captures".to_string()),
            reloader: None,
        };
        let action = BulkAction::new("id", "/api/act", options);
        let body = action.request_body(&rows(json!([{"id": "c1"}])));
        assert_eq!(body, json!({"confirm": true, "captures": ["c1"]}));
    }
}
