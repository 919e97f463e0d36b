use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::ValidationError;

/// Name of the body field carrying the hourly forecast
pub const PREDICTION_FIELD: &str = "prediction";

/// Body of a successful `GET /predict`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForecastResponse {
    /// Predicted consumption in kWh, index 0 is the next hour
    pub prediction: Vec<f64>,
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Extract the forecast from a parsed response body.
///
/// The body is kept as a loose [`Value`] rather than deserialized into
/// [`ForecastResponse`] so that every malformed shape maps to a specific
/// [`ValidationError`] instead of an opaque serde message. Values are
/// returned verbatim.
pub fn validate_prediction(body: &Value) -> Result<Vec<f64>, ValidationError> {
    let prediction = body
        .get(PREDICTION_FIELD)
        .ok_or(ValidationError::MissingField)?;

    let items = prediction.as_array().ok_or(ValidationError::NotASequence {
        found: kind(prediction),
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Number(n) => match n.as_f64() {
                Some(v) if v.is_finite() => Ok(v),
                _ => Err(ValidationError::NotFinite { index }),
            },
            other => Err(ValidationError::NonNumeric {
                index,
                found: kind(other),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_prediction_is_verbatim() {
        let body = json!({"prediction": [0.5, 0.7, 0.9]});
        assert_eq!(validate_prediction(&body), Ok(vec![0.5, 0.7, 0.9]));
    }

    #[test]
    fn test_integers_are_numbers() {
        let body = json!({"prediction": [1, 2.25, 0]});
        assert_eq!(validate_prediction(&body), Ok(vec![1.0, 2.25, 0.0]));
    }

    #[test]
    fn test_empty_prediction_is_valid() {
        let body = json!({"prediction": []});
        assert_eq!(validate_prediction(&body), Ok(vec![]));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let body = json!({"prediction": [1.5], "model": "lstm", "generated_at": 12});
        assert_eq!(validate_prediction(&body), Ok(vec![1.5]));
    }

    #[test]
    fn test_missing_field() {
        assert_eq!(validate_prediction(&json!({})), Err(ValidationError::MissingField));
        assert_eq!(
            validate_prediction(&json!({"forecast": [1.0]})),
            Err(ValidationError::MissingField)
        );
        assert_eq!(validate_prediction(&json!([1.0, 2.0])), Err(ValidationError::MissingField));
        assert_eq!(validate_prediction(&Value::Null), Err(ValidationError::MissingField));
    }

    #[test]
    fn test_not_a_sequence() {
        assert_eq!(
            validate_prediction(&json!({"prediction": "bad"})),
            Err(ValidationError::NotASequence { found: "string" })
        );
        assert_eq!(
            validate_prediction(&json!({"prediction": {"0": 1.0}})),
            Err(ValidationError::NotASequence { found: "object" })
        );
        assert_eq!(
            validate_prediction(&json!({"prediction": null})),
            Err(ValidationError::NotASequence { found: "null" })
        );
    }

    #[test]
    fn test_non_numeric_element() {
        assert_eq!(
            validate_prediction(&json!({"prediction": [1.0, "2.0", 3.0]})),
            Err(ValidationError::NonNumeric { index: 1, found: "string" })
        );
        assert_eq!(
            validate_prediction(&json!({"prediction": [1.0, null]})),
            Err(ValidationError::NonNumeric { index: 1, found: "null" })
        );
        assert_eq!(
            validate_prediction(&json!({"prediction": [[1.0]]})),
            Err(ValidationError::NonNumeric { index: 0, found: "array" })
        );
    }

    #[test]
    fn test_nan_never_survives() {
        // serde_json turns NaN into null, which is rejected as non-numeric
        let body = json!({"prediction": [1.0, f64::NAN]});
        assert!(validate_prediction(&body).is_err());
    }

    #[test]
    fn test_response_wire_shape() {
        let body: ForecastResponse =
            serde_json::from_str(r#"{"prediction":[0.5,0.7,0.9]}"#).unwrap();
        assert_eq!(body.prediction, vec![0.5, 0.7, 0.9]);
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(validate_prediction(&value), Ok(body.prediction));
    }
}
