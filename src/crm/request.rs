// file: src/crm/request.rs
// description: search payload construction for the CRM object search API
// reference: https://developers.hubspot.com/docs/api/crm/search

use serde::Serialize;

/// Property holding the company's display name.
pub const NAME_PROPERTY: &str = "name";
/// Property holding the portal-internal record identifier.
pub const RECORD_ID_PROPERTY: &str = "hs_object_id";

#[derive(Debug, Serialize)]
pub struct SearchPayload {
    #[serde(rename = "filterGroups")]
    filter_groups: Vec<FilterGroup>,
    properties: Vec<String>,
}

#[derive(Debug, Serialize)]
struct FilterGroup {
    filters: Vec<Filter>,
}

#[derive(Debug, Serialize)]
struct Filter {
    #[serde(rename = "propertyName")]
    property_name: String,
    operator: String,
    value: String,
}

impl SearchPayload {
    /// Exact-match filter on the company name, requesting exactly the
    /// two properties the output record needs.
    pub fn exact_name_match(name: &str) -> Self {
        Self {
            filter_groups: vec![FilterGroup {
                filters: vec![Filter {
                    property_name: NAME_PROPERTY.to_string(),
                    operator: "EQ".to_string(),
                    value: name.to_string(),
                }],
            }],
            properties: vec![NAME_PROPERTY.to_string(), RECORD_ID_PROPERTY.to_string()],
        }
    }
}
