use serde::{Deserialize, Serialize};

/// Per-session presentation preferences.
///
/// Missing fields fall back to their defaults, so `{}` is a valid settings
/// object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// When off, move results carry no animation hints.
    pub animation_enabled: bool,
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            animation_enabled: true,
            sound_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything() {
        let settings = Settings::default();

        assert!(settings.animation_enabled);
        assert!(settings.sound_enabled);
    }

    #[test]
    fn deserializes_camel_case_with_missing_fields_defaulted() {
        let settings: Settings = serde_json::from_str(r#"{"animationEnabled": false}"#).unwrap();

        assert_eq!(
            settings,
            Settings {
                animation_enabled: false,
                sound_enabled: true,
            }
        );
        assert_eq!(serde_json::from_str::<Settings>("{}").unwrap(), Settings::default());
    }

    #[test]
    fn rejects_wrongly_typed_fields() {
        assert!(serde_json::from_str::<Settings>(r#"{"soundEnabled": "yes"}"#).is_err());
    }
}
