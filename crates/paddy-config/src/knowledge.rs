//! Knowledge base location.

use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KnowledgeConfig {
    /// TOML or JSON knowledge base file. Empty means the built-in rice seed.
    #[serde(default)]
    pub path: String,
}

impl KnowledgeConfig {
    pub fn is_configured(&self) -> bool {
        !self.path.trim().is_empty()
    }

    /// Configured file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.is_configured().then(|| Path::new(self.path.trim()))
    }
}
