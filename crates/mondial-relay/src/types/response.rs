use serde::Serialize;

/// Severity attached to one entry of the carrier's `StatusList`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StatusLevel {
    Warning,
    Error,
    /// Any level the carrier adds later; logged and passed through
    Other(String),
}

impl StatusLevel {
    pub fn parse(s: &str) -> Self {
        match s {
            "Warning" => Self::Warning,
            "Error" => Self::Error,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Other(s) => s,
        }
    }
}

/// One `Status` line from the carrier's diagnostic list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiStatus {
    pub code: String,
    pub level: StatusLevel,
    pub message: String,
}

impl ApiStatus {
    pub fn is_error(&self) -> bool {
        self.level == StatusLevel::Error
    }
}

/// Label artifact returned for a created shipment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LabelContent {
    /// `LabelList/Label/Output`: link to a PDF or QR-code page
    Url(String),
    /// `LabelList/Label/RawContent`: artifact embedded in the response
    Raw(String),
}

/// A shipment the carrier accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShipmentResult {
    pub shipment_number: String,
    pub label_url: Option<String>,
    pub raw_content: Option<String>,
    /// Non-fatal statuses returned alongside the shipment
    pub statuses: Vec<ApiStatus>,
}

impl ShipmentResult {
    /// Label to hand to the user, preferring the URL form
    pub fn label(&self) -> Option<LabelContent> {
        self.label_url
            .clone()
            .map(LabelContent::Url)
            .or_else(|| self.raw_content.clone().map(LabelContent::Raw))
    }
}
