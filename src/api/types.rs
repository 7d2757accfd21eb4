use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Any JSON body; only an object's `user_id` member is read.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct GetUserNameRequest(Value);

impl GetUserNameRequest {
    /// The id as query text, or `None` when it is missing, null or empty.
    ///
    /// Numeric ids are accepted in their decimal form; zero, booleans,
    /// arrays and objects are treated as missing, as is any body that is
    /// not a JSON object.
    pub fn user_id(&self) -> Option<String> {
        match self.0.get("user_id")? {
            Value::String(id) if !id.is_empty() => Some(id.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetUserNameResponse {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
