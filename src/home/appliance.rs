use serde::{Deserialize, Serialize};

/// A tracked household appliance
///
/// Appliances are one of the three context corpora sampled by the
/// assistant. Only `name` is required; the remaining fields are included
/// in assistant context lines when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appliance {
    /// Unique identifier generated by the data container (e.g. "a-1")
    pub id: String,
    /// Appliance name (e.g. "Furnace")
    pub name: String,
    /// Where the appliance lives in the house
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,
    /// Free-form notes (filter sizes, quirks, service history)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
