use serde::{Deserialize, Serialize};

use super::errors::DishError;

/// Identification confidence in `[0, 1]`.
///
/// Treated as an opaque ranking signal: higher means the capability is
/// more certain, with no calibration contract behind the number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    pub fn new(value: f64) -> Result<Self, DishError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(DishError::InvalidIdentification);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Confidence {
    type Error = DishError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Confidence::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(confidence: Confidence) -> Self {
        confidence.0
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishIdentification {
    pub dish_name: String,
    pub confidence: Confidence,
}

impl DishIdentification {
    pub fn new(dish_name: impl Into<String>, confidence: f64) -> Result<Self, DishError> {
        let dish_name = dish_name.into().trim().to_string();
        if dish_name.is_empty() {
            return Err(DishError::InvalidIdentification);
        }

        Ok(Self {
            dish_name,
            confidence: Confidence::new(confidence)?,
        })
    }
}
