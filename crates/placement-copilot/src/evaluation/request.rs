use super::domain::{InputError, SkillScoreSet};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Body accepted by `POST /api/evaluate`.
///
/// Scores may arrive as JSON integers or numeric strings (HTML forms post strings); anything
/// else fails deserialization and is reported as a client error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    #[serde(deserialize_with = "deserialize_score")]
    pub excel: i64,
    #[serde(deserialize_with = "deserialize_score")]
    pub sql: i64,
    #[serde(deserialize_with = "deserialize_score")]
    pub python: i64,
    #[serde(deserialize_with = "deserialize_score")]
    pub stats: i64,
    #[serde(deserialize_with = "deserialize_score")]
    pub ml: i64,
    #[serde(deserialize_with = "deserialize_score")]
    pub bi: i64,
    #[serde(default)]
    pub feedback: Option<String>,
}

impl EvaluationRequest {
    pub fn scores(&self) -> Result<SkillScoreSet, InputError> {
        SkillScoreSet::from_scores([
            self.excel,
            self.sql,
            self.python,
            self.stats,
            self.ml,
            self.bi,
        ])
    }

    pub fn feedback(&self) -> &str {
        self.feedback.as_deref().unwrap_or_default()
    }
}

pub(crate) fn deserialize_score<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ScoreVisitor)
}

struct ScoreVisitor;

impl<'de> Visitor<'de> for ScoreVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer score between 0 and 100")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
        Ok(value)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
        i64::try_from(value).map_err(|_| E::custom(format!("score {value} is too large")))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<i64, E> {
        if value.fract() == 0.0 && value.is_finite() && value.abs() <= i64::MAX as f64 {
            Ok(value as i64)
        } else {
            Err(E::invalid_type(de::Unexpected::Float(value), &self))
        }
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<i64, E> {
        value
            .trim()
            .parse::<i64>()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_integers_and_numeric_strings() {
        let request: EvaluationRequest = serde_json::from_value(json!({
            "excel": 80, "sql": "75", "python": 60.0, "stats": " 50 ", "ml": 40, "bi": 70
        }))
        .expect("request parses");

        assert_eq!(request.sql, 75);
        assert_eq!(request.python, 60);
        assert_eq!(request.stats, 50);
        assert_eq!(request.feedback(), "");
    }

    #[test]
    fn rejects_missing_score_fields() {
        let err = serde_json::from_value::<EvaluationRequest>(json!({
            "excel": 80, "sql": 75, "python": 60, "stats": 50, "ml": 40
        }))
        .expect_err("bi is required");
        assert!(err.to_string().contains("bi"));
    }

    #[test]
    fn rejects_non_numeric_scores() {
        assert!(serde_json::from_value::<EvaluationRequest>(json!({
            "excel": "lots", "sql": 75, "python": 60, "stats": 50, "ml": 40, "bi": 70
        }))
        .is_err());
        assert!(serde_json::from_value::<EvaluationRequest>(json!({
            "excel": 70.5, "sql": 75, "python": 60, "stats": 50, "ml": 40, "bi": 70
        }))
        .is_err());
    }

    #[test]
    fn out_of_range_scores_fail_validation() {
        let request: EvaluationRequest = serde_json::from_value(json!({
            "excel": 180, "sql": 75, "python": 60, "stats": 50, "ml": 40, "bi": 70
        }))
        .expect("request parses");
        assert!(matches!(
            request.scores(),
            Err(InputError::ScoreOutOfRange { skill: "Excel", value: 180 })
        ));
    }
}
