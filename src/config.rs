use anyhow::{Context, Result};
use scenekit_behaviors::{Messages, DEFAULT_SENSITIVITY};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fs, path::Path};
use tracing::{debug, warn};

pub const DEFAULT_CONFIG_PATH: &str = "config/scene.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SceneConfig {
    pub rotation: RotationConfig,
    pub sequence: SequenceConfig,
    #[serde(rename = "selectable")]
    pub selectables: Vec<SelectableConfig>,
    #[serde(rename = "rotatable")]
    pub rotatables: Vec<RotatableConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Degrees of rotation per pixel of drag.
    pub sensitivity: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Selection ids in the only accepted order.
    pub expected: Vec<String>,
    pub success_message: String,
    pub failure_message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SelectableConfig {
    pub name: String,
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RotatableConfig {
    pub name: String,
    #[serde(default)]
    pub rotation: [f32; 3],
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        let messages = Messages::default();
        Self {
            expected: vec!["mascara".into(), "luva".into(), "estetoscopio".into()],
            success_message: messages.success,
            failure_message: messages.failure,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        let selectables = ["mascara", "luva", "estetoscopio"]
            .into_iter()
            .map(|id| SelectableConfig {
                name: id.to_string(),
                id: id.to_string(),
            })
            .collect();
        Self {
            rotation: RotationConfig::default(),
            sequence: SequenceConfig::default(),
            selectables,
            rotatables: vec![RotatableConfig {
                name: "model".to_string(),
                rotation: [0.0; 3],
            }],
        }
    }
}

impl SequenceConfig {
    pub fn messages(&self) -> Messages {
        Messages {
            success: self.success_message.clone(),
            failure: self.failure_message.clone(),
        }
    }
}

impl SceneConfig {
    /// Load configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path.
    ///
    /// An unreadable or malformed file yields the built-in scene.
    pub fn load_from_path(path: &Path) -> Self {
        match Self::read(path) {
            Ok(cfg) => {
                debug!(path = %path.display(), "loaded scene config");
                cfg
            }
            Err(err) => {
                warn!(path = %path.display(), "using built-in scene: {err:#}");
                SceneConfig::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("cannot read scene config {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("scene config {} is not valid TOML", path.display()))
    }

    /// Save configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
        }
        fs::write(path, toml).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Reject configurations the behaviors cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.sequence.expected.is_empty() {
            anyhow::bail!("sequence.expected must list at least one id");
        }
        if let Some(blank) = self.sequence.expected.iter().find(|id| id.trim().is_empty()) {
            anyhow::bail!("sequence.expected contains a blank id: {blank:?}");
        }
        if !self.rotation.sensitivity.is_finite() {
            anyhow::bail!("rotation.sensitivity must be finite");
        }

        let mut names = BTreeSet::new();
        let all_names = self
            .selectables
            .iter()
            .map(|s| &s.name)
            .chain(self.rotatables.iter().map(|r| &r.name));
        for name in all_names {
            if !names.insert(name.as_str()) {
                anyhow::bail!("duplicate element name `{name}`");
            }
        }
        for selectable in &self.selectables {
            if selectable.id.trim().is_empty() {
                anyhow::bail!("selectable `{}` has no id", selectable.name);
            }
        }

        let ids: BTreeSet<&str> = self.selectables.iter().map(|s| s.id.as_str()).collect();
        for expected in &self.sequence.expected {
            if !ids.contains(expected.as_str()) {
                warn!(id = %expected, "expected id has no selectable element; the sequence can never succeed");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(label: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "scenekit-{label}-{}.toml",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ))
    }

    #[test]
    fn defaults_match_reference_scene() {
        let cfg = SceneConfig::default();
        assert_eq!(cfg.rotation.sensitivity, 0.5);
        assert_eq!(
            cfg.sequence.expected,
            vec!["mascara", "luva", "estetoscopio"]
        );
        assert_eq!(cfg.selectables.len(), 3);
        assert_eq!(cfg.rotatables.len(), 1);
        cfg.validate().expect("defaults are valid");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg: SceneConfig = toml::from_str(
            r#"
            [rotation]
            sensitivity = 0.25
            "#,
        )
        .unwrap();
        assert_eq!(cfg.rotation.sensitivity, 0.25);
        assert_eq!(cfg.sequence, SequenceConfig::default());
    }

    #[test]
    fn parses_element_tables() {
        let cfg: SceneConfig = toml::from_str(
            r#"
            [sequence]
            expected = ["b", "a"]

            [[selectable]]
            name = "first"
            id = "a"

            [[selectable]]
            name = "second"
            id = "b"

            [[rotatable]]
            name = "heart"
            rotation = [0.0, 90.0, 0.0]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.selectables[1].id, "b");
        assert_eq!(cfg.rotatables[0].rotation, [0.0, 90.0, 0.0]);
        assert_eq!(cfg.sequence.success_message, SequenceConfig::default().success_message);
        cfg.validate().unwrap();
    }

    #[test]
    fn validate_rejects_empty_sequence() {
        let mut cfg = SceneConfig::default();
        cfg.sequence.expected.clear();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("at least one id"), "{err:#}");
    }

    #[test]
    fn validate_rejects_missing_selectable_id() {
        let mut cfg = SceneConfig::default();
        cfg.selectables[0].id = String::new();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("has no id"), "{err:#}");
    }

    #[test]
    fn validate_rejects_duplicate_names() {
        let mut cfg = SceneConfig::default();
        cfg.rotatables[0].name = "luva".into();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate"), "{err:#}");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = SceneConfig::load_from_path(&temp_path("missing"));
        assert_eq!(cfg, SceneConfig::default());
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("roundtrip");
        let mut cfg = SceneConfig::default();
        cfg.rotation.sensitivity = 1.5;
        cfg.save_to_path(&path).unwrap();
        assert_eq!(SceneConfig::load_from_path(&path), cfg);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let path = temp_path("malformed");
        fs::write(&path, "[rotation\nsensitivity = ").unwrap();
        let err = SceneConfig::read(&path).unwrap_err();
        assert!(err.to_string().contains("not valid TOML"), "{err:#}");
        assert_eq!(SceneConfig::load_from_path(&path), SceneConfig::default());
        let _ = fs::remove_file(&path);
    }
}
