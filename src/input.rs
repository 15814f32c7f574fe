//! Prediction Input
//!
//! `PredictionRequest` is the loosely typed attribute bag posted by clients.
//! Every field is optional and decoded leniently: anything falsy (missing,
//! `null`, `false`, blank string, `0`) falls back to a static default during
//! [`PredictionRequest::resolve`], so downstream stages only ever see the
//! fully concrete [`PredictionInput`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Static defaults substituted for absent or falsy fields
pub mod defaults {
    pub const BODY_TYPE: &str = "normal";
    pub const SEX: &str = "female";
    pub const DIET: &str = "omnivore";
    pub const SHOWER_FREQUENCY: &str = "daily";
    pub const HEATING_SOURCE: &str = "electricity";
    pub const TRANSPORT: &str = "public";
    pub const VEHICLE_TYPE: &str = "none";
    pub const SOCIAL_ACTIVITY: &str = "sometimes";
    pub const GROCERY_BILL: f64 = 0.0;
    pub const AIR_TRAVEL: &str = "rarely";
    pub const VEHICLE_DISTANCE: f64 = 0.0;
    pub const WASTE_BAG_SIZE: &str = "medium";
    pub const WASTE_COUNT: f64 = 0.0;
    pub const TV_HOURS: f64 = 0.0;
    pub const NEW_CLOTHES: f64 = 0.0;
    pub const INTERNET_HOURS: f64 = 2.0;
    pub const ENERGY_EFFICIENCY: &str = "sometimes";
    pub const RECYCLING: &str = "sometimes";
    pub const COOKING_WITH: &str = "gas";
}

/// Raw request body for a prediction
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub user_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub body_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub sex: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub diet: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub shower_frequency: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub heating_source: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub transport: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub vehicle_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub social_activity: Option<String>,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub grocery_bill: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub air_travel: Option<String>,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub vehicle_distance: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub waste_bag_size: Option<String>,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub waste_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub tv_hours: Option<f64>,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub new_clothes: Option<f64>,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub internet_hours: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub energy_efficiency: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub recycling: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub cooking_with: Option<String>,
}

/// Fully resolved lifestyle attributes (defaults applied)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionInput {
    pub body_type: String,
    pub sex: String,
    pub diet: String,
    pub shower_frequency: String,
    pub heating_source: String,
    pub transport: String,
    pub vehicle_type: String,
    pub social_activity: String,
    pub grocery_bill: f64,
    pub air_travel: String,
    pub vehicle_distance: f64,
    pub waste_bag_size: String,
    pub waste_count: f64,
    pub tv_hours: f64,
    pub new_clothes: f64,
    pub internet_hours: f64,
    pub energy_efficiency: String,
    pub recycling: String,
    pub cooking_with: String,
}

impl Default for PredictionInput {
    fn default() -> Self {
        PredictionRequest::default().resolve()
    }
}

impl PredictionRequest {
    /// Decode a raw request body
    ///
    /// An empty body or a JSON value that is not an object carries no
    /// attributes and yields the all-defaults request. Only malformed JSON
    /// is an error.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice::<Value>(body)? {
            value @ Value::Object(_) => serde_json::from_value(value),
            _ => Ok(Self::default()),
        }
    }

    /// Substitute defaults for every absent field
    pub fn resolve(&self) -> PredictionInput {
        let text = |value: &Option<String>, default: &str| {
            value.clone().unwrap_or_else(|| default.to_string())
        };

        PredictionInput {
            body_type: text(&self.body_type, defaults::BODY_TYPE),
            sex: text(&self.sex, defaults::SEX),
            diet: text(&self.diet, defaults::DIET),
            shower_frequency: text(&self.shower_frequency, defaults::SHOWER_FREQUENCY),
            heating_source: text(&self.heating_source, defaults::HEATING_SOURCE),
            transport: text(&self.transport, defaults::TRANSPORT),
            vehicle_type: text(&self.vehicle_type, defaults::VEHICLE_TYPE),
            social_activity: text(&self.social_activity, defaults::SOCIAL_ACTIVITY),
            grocery_bill: self.grocery_bill.unwrap_or(defaults::GROCERY_BILL),
            air_travel: text(&self.air_travel, defaults::AIR_TRAVEL),
            vehicle_distance: self.vehicle_distance.unwrap_or(defaults::VEHICLE_DISTANCE),
            waste_bag_size: text(&self.waste_bag_size, defaults::WASTE_BAG_SIZE),
            waste_count: self.waste_count.unwrap_or(defaults::WASTE_COUNT),
            tv_hours: self.tv_hours.unwrap_or(defaults::TV_HOURS),
            new_clothes: self.new_clothes.unwrap_or(defaults::NEW_CLOTHES),
            internet_hours: self.internet_hours.unwrap_or(defaults::INTERNET_HOURS),
            energy_efficiency: text(&self.energy_efficiency, defaults::ENERGY_EFFICIENCY),
            recycling: text(&self.recycling, defaults::RECYCLING),
            cooking_with: text(&self.cooking_with, defaults::COOKING_WITH),
        }
    }
}

/// Categorical field: strings are trimmed, numbers kept as decimal text,
/// `true` kept as "true", everything falsy or structured becomes `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if f != 0.0 && !f.is_nan() => Some(n.to_string()),
            _ => None,
        },
        Some(Value::Bool(true)) => Some("true".to_string()),
        _ => None,
    })
}

/// Numeric field: numbers or numeric strings. Zero numbers are falsy;
/// unparseable non-empty strings read as 0 (the predictor's own coercion).
/// Negative quantities clamp to 0.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64().filter(|f| *f != 0.0 && f.is_finite()),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.parse::<f64>().ok().filter(|f| f.is_finite()).unwrap_or(0.0))
            }
        }
        // Reaches the predictor as "true", which it reads as 0
        Some(Value::Bool(true)) => Some(0.0),
        _ => None,
    };
    Ok(parsed.map(|f| f.max(0.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: Value) -> PredictionInput {
        let request: PredictionRequest = serde_json::from_value(body).unwrap();
        request.resolve()
    }

    #[test]
    fn test_empty_body_uses_all_defaults() {
        let input = parse(json!({}));
        assert_eq!(input.body_type, "normal");
        assert_eq!(input.sex, "female");
        assert_eq!(input.diet, "omnivore");
        assert_eq!(input.transport, "public");
        assert_eq!(input.recycling, "sometimes");
        assert_eq!(input.cooking_with, "gas");
        assert_eq!(input.grocery_bill, 0.0);
        assert_eq!(input.internet_hours, 2.0);
        assert_eq!(input, PredictionInput::default());
    }

    #[test]
    fn test_falsy_values_fall_back() {
        let input = parse(json!({
            "diet": "",
            "transport": null,
            "recycling": false,
            "internetHours": 0,
            "groceryBill": "",
            "sex": "   "
        }));
        assert_eq!(input.diet, "omnivore");
        assert_eq!(input.transport, "public");
        assert_eq!(input.recycling, "sometimes");
        assert_eq!(input.internet_hours, 2.0);
        assert_eq!(input.grocery_bill, 0.0);
        assert_eq!(input.sex, "female");
    }

    #[test]
    fn test_true_passes_through() {
        let input = parse(json!({
            "recycling": true,
            "internetHours": true,
            "groceryBill": true
        }));
        assert_eq!(input.recycling, "true");
        assert_eq!(input.internet_hours, 0.0);
        assert_eq!(input.grocery_bill, 0.0);
    }

    #[test]
    fn test_body_without_attributes_uses_defaults() {
        let bodies: [&[u8]; 6] = [b"", b"  \n", b"\"x\"", b"[1, 2]", b"42", b"null"];
        for body in bodies {
            let request = PredictionRequest::from_body(body).unwrap();
            assert_eq!(request.resolve(), PredictionInput::default());
            assert_eq!(request.user_id, None);
        }
    }

    #[test]
    fn test_body_object_is_decoded() {
        let request = PredictionRequest::from_body(br#"{"userId": "u-2", "diet": "vegan"}"#).unwrap();
        assert_eq!(request.user_id.as_deref(), Some("u-2"));
        assert_eq!(request.resolve().diet, "vegan");
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        assert!(PredictionRequest::from_body(b"{bad").is_err());
    }

    #[test]
    fn test_supplied_values_are_kept() {
        let input = parse(json!({
            "userId": "u-1",
            "diet": "Vegan",
            "transport": " private ",
            "groceryBill": 3000,
            "vehicleDistance": "450.5",
            "wasteCount": 2
        }));
        assert_eq!(input.diet, "Vegan");
        assert_eq!(input.transport, "private");
        assert_eq!(input.grocery_bill, 3000.0);
        assert_eq!(input.vehicle_distance, 450.5);
        assert_eq!(input.waste_count, 2.0);
    }

    #[test]
    fn test_numeric_strings_and_garbage() {
        let input = parse(json!({
            "internetHours": "0",
            "tvHours": "lots",
            "newClothes": -3
        }));
        // A non-empty string is not falsy even when it reads as zero
        assert_eq!(input.internet_hours, 0.0);
        assert_eq!(input.tv_hours, 0.0);
        assert_eq!(input.new_clothes, 0.0);
    }

    #[test]
    fn test_user_id_accepts_numbers() {
        let request: PredictionRequest =
            serde_json::from_value(json!({ "userId": 42 })).unwrap();
        assert_eq!(request.user_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_structured_values_are_ignored() {
        let input = parse(json!({ "diet": ["vegan"], "groceryBill": { "amount": 5 } }));
        assert_eq!(input.diet, "omnivore");
        assert_eq!(input.grocery_bill, 0.0);
    }
}
