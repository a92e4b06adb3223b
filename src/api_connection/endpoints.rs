use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::models::IngredientRecord;

/// Published CSV export of the shared ingredient sheet.
pub const SHEET_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQrQG3zWeCq5fZWIP4jI4oeyvbhPqKqhUEMcWFp7har4X4iTCc0263pIcR6xilbztIg0H99bPOQrmsW/pub?output=csv";

/// Script endpoint that appends a row to the sheet.
pub const SUBMIT_URL: &str = "https://script.google.com/macros/s/AKfycbzv9fHqG3Iep-KHllBu4viL1ejNZLG5rozKPHcItG1voGosV_OoU8nTsY1X3bCXx039lA/exec";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const GENERIC_SUBMISSION_ERROR: &str = "Failed to add ingredient";

/// The single record served when the sheet cannot be read.
pub fn fallback_ingredients() -> Vec<IngredientRecord> {
    vec![IngredientRecord::new("Ржаная мука", 298.0, 9.0, 1.7, 61.5)]
}

/// POST body for a new ingredient. Numbers go out as JSON numbers.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct NewIngredientPayload<'a> {
    pub name: &'a str,
    pub calories: f64,
    pub proteins: f64,
    pub fats: f64,
    pub carbs: f64,
}

impl<'a> From<&'a IngredientRecord> for NewIngredientPayload<'a> {
    fn from(record: &'a IngredientRecord) -> Self {
        Self {
            name: &record.name,
            calories: record.calories,
            proteins: record.proteins,
            fats: record.fats,
            carbs: record.carbs,
        }
    }
}

/// Reply from the submission script.
///
/// Both fields are kept loosely typed: the script is not strict about what it puts in `success`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SubmissionResponse {
    #[serde(default)]
    pub success: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

/// Loose truthiness: `null`, `false`, `0`, `NaN` and `""` are false, everything else true.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl SubmissionResponse {
    /// A missing or falsy `success` counts as failure.
    pub fn is_success(&self) -> bool {
        self.success.as_ref().map(is_truthy).unwrap_or(false)
    }

    /// The service's message when it sent a non-blank string, otherwise the generic one.
    pub fn failure_message(&self) -> String {
        self.error
            .as_ref()
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|msg| !msg.is_empty())
            .unwrap_or(GENERIC_SUBMISSION_ERROR)
            .to_string()
    }
}
