use serde::{Deserialize, Deserializer, Serialize};

/// Incoming suggestion request. Decoding is deliberately permissive: the
/// contract never rejects a decodable body, so a missing mood becomes an
/// empty string and a missing or unusable distance becomes NaN.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteRequest {
    #[serde(default)]
    pub mood: String,
    #[serde(default = "missing_distance", deserialize_with = "lenient_distance")]
    pub distance: f64,
}

fn missing_distance() -> f64 {
    f64::NAN
}

/// Accept a JSON number or a numeric string for the requested distance.
/// Anything else decodes to NaN and flows through the arithmetic untouched.
fn lenient_distance<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(match raw {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub lat: f64,
    pub lng: f64,
}

/// The suggested route returned to the client.
///
/// `duration_min` is `None` when the requested distance is non-finite, so it
/// serializes as JSON `null`; non-finite `distance_km` and `steps` are
/// likewise rendered as `null` by serde_json.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestedRoute {
    pub mood: String,
    pub title: String,
    pub polyline: Vec<RoutePoint>,
    pub distance_km: f64,
    pub duration_min: Option<i64>,
    pub steps: f64,
    pub summary: String,
    pub spots: Vec<String>,
}

/// Fixed success wrapper around the suggestion body.
#[derive(Debug, Clone, Serialize)]
pub struct RouteEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: SuggestedRoute,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_well_formed_request() {
        let request: RouteRequest =
            serde_json::from_str(r#"{"mood": "穏やか", "distance": 5}"#).unwrap();
        assert_eq!(request.mood, "穏やか");
        assert_eq!(request.distance, 5.0);
    }

    #[test]
    fn missing_fields_do_not_fail_decoding() {
        let request: RouteRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.mood, "");
        assert!(request.distance.is_nan());
    }

    #[test]
    fn numeric_string_distance_is_coerced() {
        let request: RouteRequest =
            serde_json::from_str(r#"{"mood": "元気", "distance": "7.5"}"#).unwrap();
        assert_eq!(request.distance, 7.5);
    }

    #[test]
    fn unusable_distance_decodes_to_nan() {
        for body in [
            r#"{"distance": null}"#,
            r#"{"distance": true}"#,
            r#"{"distance": "tomorrow"}"#,
            r#"{"distance": [5]}"#,
        ] {
            let request: RouteRequest = serde_json::from_str(body).unwrap();
            assert!(request.distance.is_nan(), "expected NaN for {body}");
        }
    }

    #[test]
    fn non_finite_fields_serialize_as_null() {
        let envelope = RouteEnvelope {
            status_code: 200,
            body: SuggestedRoute {
                mood: "な気分".to_string(),
                title: "title".to_string(),
                polyline: vec![RoutePoint { lat: 1.0, lng: 2.0 }],
                distance_km: f64::NAN,
                duration_min: None,
                steps: f64::NAN,
                summary: "summary".to_string(),
                spots: vec![],
            },
        };

        let rendered: serde_json::Value =
            serde_json::to_value(&envelope).unwrap();
        assert_eq!(rendered["statusCode"], 200);
        assert_eq!(rendered["body"]["distance_km"], serde_json::Value::Null);
        assert_eq!(rendered["body"]["duration_min"], serde_json::Value::Null);
        assert_eq!(rendered["body"]["steps"], serde_json::Value::Null);
    }

    #[test]
    fn finite_duration_serializes_as_integer() {
        let rendered = serde_json::to_string(&Some(83i64)).unwrap();
        assert_eq!(rendered, "83");
    }
}
