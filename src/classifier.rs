// ⚖️ BMI Classifier
// Maps height (m) and weight (kg) to a body mass index and its category.
//
// Bands are half-open, lower-inclusive:
//   < 16        severely underweight
//   [16, 18.5)  underweight
//   [18.5, 25)  healthy
//   [25, 30)    overweight
//   >= 30       obese

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "severely underweight")]
    SeverelyUnderweight,
    #[serde(rename = "underweight")]
    Underweight,
    #[serde(rename = "healthy")]
    Healthy,
    #[serde(rename = "overweight")]
    Overweight,
    #[serde(rename = "obese")]
    Obese,
}

impl Category {
    /// Label shown to the user and stored in the `category` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SeverelyUnderweight => "severely underweight",
            Category::Underweight => "underweight",
            Category::Healthy => "healthy",
            Category::Overweight => "overweight",
            Category::Obese => "obese",
        }
    }

    pub fn all() -> [Category; 5] {
        [
            Category::SeverelyUnderweight,
            Category::Underweight,
            Category::Healthy,
            Category::Overweight,
            Category::Obese,
        ]
    }

    /// Category for an already computed BMI value
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 16.0 {
            Category::SeverelyUnderweight
        } else if bmi < 18.5 {
            Category::Underweight
        } else if bmi < 25.0 {
            Category::Healthy
        } else if bmi < 30.0 {
            Category::Overweight
        } else {
            Category::Obese
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown BMI category: {:?}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Body mass index: weight (kg) over height (m) squared
pub fn bmi(height: f64, weight: f64) -> f64 {
    weight / (height * height)
}

/// Classify a height/weight pair.
///
/// Both inputs must be positive and finite. The caller screens input before
/// calling; a zero height yields an infinite BMI rather than an error.
pub fn classify(height: f64, weight: f64) -> (Category, f64) {
    let value = bmi(height, weight);
    (Category::from_bmi(value), value)
}
