//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Keyboard event decoding
//! - Loading tuning overrides from the page

pub mod keyboard;

pub use keyboard::{key_event_from_code, key_from_code};

/// Element id of the optional JSON tuning document
pub const TUNING_ELEMENT_ID: &str = "tuning";

/// Parse a page-supplied tuning document, falling back to defaults on error
pub fn tuning_or_default(json: Option<&str>) -> crate::Tuning {
    let Some(json) = json else {
        return crate::Tuning::default();
    };
    match crate::Tuning::from_json(json) {
        Ok(tuning) => {
            log::info!("Loaded tuning overrides");
            tuning
        }
        Err(e) => {
            log::warn!("Ignoring tuning document: {}", e);
            crate::Tuning::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuning_fallback() {
        assert_eq!(tuning_or_default(None), crate::Tuning::default());
        assert_eq!(tuning_or_default(Some("{ broken")), crate::Tuning::default());
        assert_eq!(
            tuning_or_default(Some(r#"{ "paddle_speed": 7.0 }"#)).paddle_speed,
            7.0
        );
    }
}
