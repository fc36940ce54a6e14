// file: src/crm/response.rs
// description: typed parsing of search responses into company records
// reference: https://developers.hubspot.com/docs/api/crm/search

use crate::crm::request::{NAME_PROPERTY, RECORD_ID_PROPERTY};
use crate::error::{Result, SearchError};
use crate::models::CompanyRecord;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Absent key deserializes as no matches.
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl SearchHit {
    /// Explicit parse step: a missing or null property surfaces as a
    /// `MissingField` error instead of a crash, so the caller can choose
    /// to skip the record or abort the run. `queried_name` only labels
    /// the error.
    pub fn into_record(self, queried_name: &str) -> Result<CompanyRecord> {
        let name = Self::property(&self.properties, NAME_PROPERTY, queried_name)?;
        let record_id = Self::property(&self.properties, RECORD_ID_PROPERTY, queried_name)?;
        Ok(CompanyRecord::new(name, record_id))
    }

    fn property(properties: &Map<String, Value>, key: &str, queried_name: &str) -> Result<String> {
        match properties.get(key) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Null) | None => Err(SearchError::MissingField {
                name: queried_name.to_string(),
                property: key.to_string(),
            }),
            // Numeric identifiers show up occasionally; render them as text.
            Some(other) => Ok(other.to_string()),
        }
    }
}

impl SearchResponse {
    pub fn match_count(&self) -> usize {
        self.results.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(body: serde_json::Value) -> SearchResponse {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_parse_matches_verbatim() {
        let response = parse(json!({
            "total": 2,
            "results": [
                { "id": "1", "properties": { "name": "Acme Corp", "hs_object_id": "1" } },
                { "id": "2", "properties": { "name": "Acme Corp", "hs_object_id": "2" } }
            ]
        }));

        assert_eq!(response.match_count(), 2);

        let records: Vec<CompanyRecord> = response
            .results
            .into_iter()
            .map(|hit| hit.into_record("Acme Corp").unwrap())
            .collect();

        assert_eq!(
            records,
            vec![
                CompanyRecord::new("Acme Corp", "1"),
                CompanyRecord::new("Acme Corp", "2"),
            ]
        );
    }

    #[test]
    fn test_absent_results_key_is_empty() {
        let response = parse(json!({ "total": 0 }));
        assert_eq!(response.match_count(), 0);
    }

    #[test]
    fn test_missing_record_id_errors() {
        let response = parse(json!({
            "results": [ { "properties": { "name": "Acme Corp" } } ]
        }));

        let hit = response.results.into_iter().next().unwrap();
        let err = hit.into_record("Acme Corp").unwrap_err();
        match err {
            SearchError::MissingField { name, property } => {
                assert_eq!(name, "Acme Corp");
                assert_eq!(property, "hs_object_id");
            }
            other => panic!("expected MissingField, got {other}"),
        }
    }

    #[test]
    fn test_null_property_counts_as_missing() {
        let response = parse(json!({
            "results": [ { "properties": { "name": null, "hs_object_id": "7" } } ]
        }));

        let hit = response.results.into_iter().next().unwrap();
        assert!(matches!(
            hit.into_record("Acme Corp"),
            Err(SearchError::MissingField { property, .. }) if property == "name"
        ));
    }

    #[test]
    fn test_numeric_record_id_rendered_as_text() {
        let response = parse(json!({
            "results": [ { "properties": { "name": "Acme Corp", "hs_object_id": 42 } } ]
        }));

        let hit = response.results.into_iter().next().unwrap();
        let record = hit.into_record("Acme Corp").unwrap();
        assert_eq!(record.record_id, "42");
    }
}
