use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A scalar ready for a positional bind slot.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl From<&serde_json::Value> for SqlValue {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => SqlValue::Null,
            Value::Bool(b) => SqlValue::Integer(i64::from(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => SqlValue::Integer(i),
                None => SqlValue::Real(n.as_f64().unwrap_or(0.0)),
            },
            Value::String(s) => SqlValue::Text(s.clone()),
            // Structured values persist as their JSON text.
            other => SqlValue::Text(other.to_string()),
        }
    }
}

/// Beekeeper profile answers captured by the sign-up form. Every field is
/// optional; absent answers persist as NULL. Yes/no questions arrive as
/// one-character "Y"/"N" strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAttributes {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub zip_code: Option<String>,
    pub number_of_colonies: Option<i64>,
    pub race_of_bees: Option<String>,
    pub monitor_varroa_mites: Option<String>,
    pub monitor_varroa_mites_count: Option<i64>,
    pub monitor_methods: Option<String>,
    pub treatment_methods: Option<String>,
    pub last_treatment_date: Option<String>,
    pub lost_colonies_over_winter: Option<String>,
}

/// Hive-survey answers for a single report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyAttributes {
    pub queen_right: Option<String>,
    pub queen_drone_laying: Option<String>,
    pub diseases: Option<String>,
    pub honey_supers_on: Option<String>,
    pub honey_supers_removed: Option<String>,
    pub feeding_supplementary_sugar: Option<String>,
    pub honey_from_sealed_cells: Option<String>,
    pub honey_from_brood: Option<String>,
    pub split_or_combine: Option<String>,
    pub sample_tube_code: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub id: i64,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub zip_code: Option<String>,
    pub number_of_colonies: Option<i64>,
    pub race_of_bees: Option<String>,
    pub monitor_varroa_mites: Option<String>,
    pub monitor_varroa_mites_count: Option<i64>,
    pub monitor_methods: Option<String>,
    pub treatment_methods: Option<String>,
    pub last_treatment_date: Option<String>,
    pub lost_colonies_over_winter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SurveyRow {
    pub id: i64,
    pub queen_right: Option<String>,
    pub queen_drone_laying: Option<String>,
    pub diseases: Option<String>,
    pub honey_supers_on: Option<String>,
    pub honey_supers_removed: Option<String>,
    pub feeding_supplementary_sugar: Option<String>,
    pub honey_from_sealed_cells: Option<String>,
    pub honey_from_brood: Option<String>,
    pub split_or_combine: Option<String>,
    pub sample_tube_code: Option<i64>,
}
