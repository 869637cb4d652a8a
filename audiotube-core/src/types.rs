use serde::{Deserialize, Serialize};

/// Identifier of a video on the source platform.
///
/// Always exactly 11 characters from the class excluding `"`, `&`, `?`, `/`
/// and whitespace. Outside of tests, only the extractor produces one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoId(pub String);

impl VideoId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a successful conversion yields: the track title and a downloadable
/// audio link, both copied verbatim from the service response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub title: String,
    pub link: String,
}
