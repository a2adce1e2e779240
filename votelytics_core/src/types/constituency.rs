use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One of Tamil Nadu's 234 assembly constituencies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constituency {
    pub id: i64,
    pub ac_number: i32,
    pub name: String,
    pub code: String,
    pub district: Option<String>,
    pub region: Option<String>,
    pub population: Option<i64>,
    pub urban_population_pct: Option<f64>,
    pub literacy_rate: Option<f64>,
    /// Free-form demographic attributes the backend attaches per seat
    #[serde(default)]
    pub extra_data: Option<Value>,
    /// GeoJSON feature for the constituency boundary, when loaded
    #[serde(default)]
    pub geojson: Option<Value>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Paged constituency listing as returned by `/constituencies/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstituencyList {
    pub constituencies: Vec<Constituency>,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_backend_shape() {
        let body = json!({
            "constituencies": [{
                "id": 1,
                "ac_number": 14,
                "name": "Chepauk-Thiruvallikeni",
                "code": "TN-014",
                "district": "Chennai",
                "region": "North",
                "population": 245_000,
                "urban_population_pct": 98.2,
                "literacy_rate": 88.5,
                "extra_data": null,
                "geojson": null,
                "created_at": "2025-01-10T00:00:00Z",
                "updated_at": "2025-01-10T00:00:00Z"
            }],
            "total": 1
        });

        let list: ConstituencyList = serde_json::from_value(body).unwrap();
        assert_eq!(list.total, 1);
        assert_eq!(list.constituencies[0].code, "TN-014");
        assert_eq!(list.constituencies[0].district.as_deref(), Some("Chennai"));
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        let body = json!({
            "id": 2,
            "ac_number": 1,
            "name": "Gummidipoondi",
            "code": "TN-001",
            "district": null,
            "region": null,
            "population": null,
            "urban_population_pct": null,
            "literacy_rate": null
        });

        let c: Constituency = serde_json::from_value(body).unwrap();
        assert!(c.extra_data.is_none());
        assert!(c.created_at.is_none());
    }
}
