use crate::error::{Result, WorkspaceError};
use serde::{Deserialize, Serialize};

/// Workspace configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkspaceConfig {
    /// Title prefix for columns created with `add_column`
    pub new_column_prefix: String,
}

impl WorkspaceConfig {
    const DEFAULT_COLUMN_PREFIX: &'static str = "New Column";

    /// Parses and validates a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.new_column_prefix.trim().is_empty() {
            return Err(WorkspaceError::ConfigError(
                "newColumnPrefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Title for a new column given the board's current column count
    pub fn column_title(&self, column_count: usize) -> String {
        format!("{} {}", self.new_column_prefix, column_count)
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            new_column_prefix: Self::DEFAULT_COLUMN_PREFIX.to_string(),
        }
    }
}
