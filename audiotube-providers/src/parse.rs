use anyhow::Context;
use serde::Deserialize;

/// The status value the service uses for a renderable result. Anything else
/// is a failure, whatever else the body carries.
pub const STATUS_OK: &str = "ok";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConversionResponse {
    pub status: String,
    // The service omits these on failure.
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
}

impl ConversionResponse {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

pub fn parse_conversion_response(body: &[u8]) -> anyhow::Result<ConversionResponse> {
    let resp: ConversionResponse =
        serde_json::from_slice(body).context("decode conversion JSON")?;
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ok_response() {
        let body = br#"{"status":"ok","title":"Never Gonna Give You Up","link":"https://files.example/x.mp3"}"#;
        let resp = parse_conversion_response(body).unwrap();
        assert!(resp.is_ok());
        assert_eq!(resp.title, "Never Gonna Give You Up");
        assert_eq!(resp.link, "https://files.example/x.mp3");
    }

    #[test]
    fn failure_status_with_missing_fields_parses() {
        let body = br#"{"status":"fail"}"#;
        let resp = parse_conversion_response(body).unwrap();
        assert!(!resp.is_ok());
        assert_eq!(resp.title, "");
        assert_eq!(resp.link, "");
    }

    #[test]
    fn any_non_ok_status_is_a_failure_even_when_populated() {
        let body = br#"{"status":"processing","title":"t","link":"https://x"}"#;
        let resp = parse_conversion_response(body).unwrap();
        assert!(!resp.is_ok());
    }

    #[test]
    fn malformed_body_errors() {
        assert!(parse_conversion_response(b"<html>busy</html>").is_err());
    }
}
