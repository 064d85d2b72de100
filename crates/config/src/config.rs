//! Configuration management
//!
//! This module handles finding, parsing and validating `.git-messagesrc`
//! files. A config file looks like:
//!
//! ```json
//! {
//!   "hooks": { "prePush": ["🚨 You're pushing to {branch}."] },
//!   "options": { "interactive": true },
//!   "branchRules": { "feature/*": { "preCommit": ["Keep commits focused"] } }
//! }
//! ```

use crate::error::ConfigError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Recognized config file names, in priority order within one directory
pub const CONFIG_FILE_NAMES: [&str; 4] = [
    ".git-messagesrc",
    ".git-messagesrc.json",
    ".git-messagesrc.yaml",
    ".git-messagesrc.yml",
];

/// Ordered mapping from hook name to its message templates
pub type HookMessages = IndexMap<String, Vec<String>>;

/// Serialization used by a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON (extensionless and `.json` files)
    Json,
    /// YAML (`.yaml` and `.yml` files)
    Yaml,
}

impl ConfigFormat {
    /// Pick the format from a config file name
    ///
    /// Returns `None` for extensions that are not recognized.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            None | Some("json") => Some(Self::Json),
            Some("yaml" | "yml") => Some(Self::Yaml),
            Some(_) => None,
        }
    }
}

/// Optional behavior flags from the `options` block
///
/// Absent flags behave as `true`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageOptions {
    /// Allow confirmation prompts (`false` turns every prompt off)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactive: Option<bool>,

    /// Apply `branchRules` (`false` ignores them)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_specific: Option<bool>,

    /// Parsed and reported, not enforced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_before_block: Option<bool>,
}

impl MessageOptions {
    /// Whether confirmation prompts may be shown
    #[must_use]
    pub fn interactive(&self) -> bool {
        self.interactive.unwrap_or(true)
    }

    /// Whether branch rules take part in message resolution
    #[must_use]
    pub fn branch_specific(&self) -> bool {
        self.branch_specific.unwrap_or(true)
    }

    /// Value of the advisory `confirmBeforeBlock` flag
    #[must_use]
    pub fn confirm_before_block(&self) -> bool {
        self.confirm_before_block.unwrap_or(true)
    }
}

/// A validated `.git-messagesrc` document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    /// General messages per hook
    pub hooks: HookMessages,

    /// Behavior flags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<MessageOptions>,

    /// Extra messages per branch pattern, in file order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_rules: Option<IndexMap<String, HookMessages>>,
}

/// A config file together with where it was found
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    /// Absolute path of the file
    pub path: PathBuf,
    /// Parsed contents
    pub config: ConfigFile,
}

impl ConfigFile {
    /// Parse and validate a JSON document
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, ConfigFormat::Json, Path::new("<inline>"))
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, ConfigFormat::Yaml, Path::new("<inline>"))
    }

    /// Parse and validate a document of the given format
    ///
    /// `path` is only used for error reporting.
    pub fn parse(content: &str, format: ConfigFormat, path: &Path) -> Result<Self, ConfigError> {
        let value: Value = match format {
            ConfigFormat::Json => {
                serde_json::from_str(content).map_err(|source| ConfigError::Json {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            ConfigFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|source| ConfigError::Yaml {
                    path: path.to_path_buf(),
                    source,
                })?
            }
        };

        validate(&value).map_err(|reason| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason,
        })?;

        serde_json::from_value(value).map_err(|e| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Read and parse a config file, choosing the format from its name
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason: "unsupported config file format".to_string(),
        })?;

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, format, path)
    }

    /// Effective options (defaults when the block is absent)
    #[must_use]
    pub fn options(&self) -> MessageOptions {
        self.options.clone().unwrap_or_default()
    }

    /// The sample config written by `hookmsg init`
    #[must_use]
    pub fn sample() -> Self {
        fn messages(items: &[&str]) -> Vec<String> {
            items.iter().map(ToString::to_string).collect()
        }

        let mut hooks = HookMessages::new();
        hooks.insert(
            "preCommit".to_string(),
            messages(&[
                "✅ Did you run tests?",
                "🔧 Did you lint your code?",
                "📝 Did you update the changelog?",
            ]),
        );
        hooks.insert(
            "prePush".to_string(),
            messages(&[
                "🚨 You're pushing to {branch}. Make sure it's intentional.",
                "✅ Did your PR pass CI?",
                "🔗 Link PR to Jira ticket: JIRA-123",
            ]),
        );
        hooks.insert(
            "postCommit".to_string(),
            messages(&["🎉 Commit successful! Don't forget to push your changes."]),
        );

        let mut main_rule = HookMessages::new();
        main_rule.insert(
            "prePush".to_string(),
            messages(&[
                "🚨 WARNING: You're pushing directly to main branch!",
                "Are you absolutely sure this is intentional?",
            ]),
        );
        let mut feature_rule = HookMessages::new();
        feature_rule.insert(
            "preCommit".to_string(),
            messages(&["💡 Remember to keep commits focused and atomic"]),
        );

        let mut branch_rules = IndexMap::new();
        branch_rules.insert("main".to_string(), main_rule);
        branch_rules.insert("feature/*".to_string(), feature_rule);

        Self {
            hooks,
            options: Some(MessageOptions {
                interactive: Some(true),
                branch_specific: Some(true),
                confirm_before_block: Some(true),
            }),
            branch_rules: Some(branch_rules),
        }
    }

    /// Serialize as pretty JSON with two-space indentation
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Check the document shape before typed deserialization
///
/// Gives precise messages for the common mistakes: a non-object document,
/// a missing `hooks` section, or a hook whose value is not a string list.
fn validate(value: &Value) -> Result<(), String> {
    let Value::Object(root) = value else {
        return Err("must be an object".to_string());
    };

    let Some(Value::Object(hooks)) = root.get("hooks") else {
        return Err("missing or invalid hooks section".to_string());
    };

    for (hook_name, messages) in hooks {
        let Value::Array(items) = messages else {
            return Err(format!(
                "hook \"{hook_name}\" must be an array of strings"
            ));
        };
        if !items.iter().all(Value::is_string) {
            return Err(format!(
                "all messages in \"{hook_name}\" must be strings"
            ));
        }
    }

    Ok(())
}

/// Find the closest config file from `start_dir` upward
///
/// Every ancestor of `start_dir` is searched, up to and including the
/// filesystem root. Within one directory [`CONFIG_FILE_NAMES`] order wins.
/// `start_dir` should be absolute.
#[must_use]
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    start_dir.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// Find and load the closest config file, keeping failures typed
///
/// `Ok(None)` means no config file exists.
pub fn try_load_config(start_dir: &Path) -> Result<Option<LoadedConfig>, ConfigError> {
    let Some(path) = find_config_file(start_dir) else {
        return Ok(None);
    };

    tracing::debug!(path = %path.display(), "Loading message config");
    let config = ConfigFile::load(&path)?;
    Ok(Some(LoadedConfig { path, config }))
}

/// Find and load the closest config file
///
/// Never fails: a missing file yields `None`, and a broken one is reported
/// and also yields `None`, so a broken config never blocks a git operation.
#[must_use]
pub fn load_config(start_dir: &Path) -> Option<ConfigFile> {
    match try_load_config(start_dir) {
        Ok(Some(loaded)) => Some(loaded.config),
        Ok(None) => {
            tracing::debug!(dir = %start_dir.display(), "No message config found");
            None
        }
        Err(e) => {
            tracing::error!(path = %e.path().display(), "Error loading config: {e}");
            None
        }
    }
}
