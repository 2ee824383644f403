//! The collaborator's reply shape and its parsing.

use serde::{Deserialize, Serialize};

/// Confidence label attached to a nutrition estimate.
///
/// The collaborator returns `high`/`medium`/`low`; `manual` is reserved for
/// entries the user typed in themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
    Manual,
}

impl Confidence {
    /// Stored string form, matching the `meals.confidence` check constraint.
    pub fn as_str(self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
            Confidence::Manual => "manual",
        }
    }
}

/// Nutrition estimate for one meal photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealAnalysis {
    pub food_items: Vec<String>,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub confidence: Confidence,
}

/// Strip any Markdown code-fence markup the collaborator wrapped around its
/// JSON reply.
pub fn strip_code_fences(content: &str) -> String {
    content.replace("```json", "").replace("```", "").trim().to_owned()
}

/// Parse the collaborator's textual reply into a [`MealAnalysis`].
///
/// A reply that does not match the expected shape is an error; nothing is
/// silently defaulted.
pub fn parse_analysis(content: &str) -> Result<MealAnalysis, serde_json::Error> {
    serde_json::from_str(&strip_code_fences(content))
}
