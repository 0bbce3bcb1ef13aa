use std::path::{Path, PathBuf};

use anyhow::Context;
use paddy_config::PaddyConfig;
use paddy_core::policy::ScoringPolicy;
use paddy_engine::{DiagnosisEngine, KnowledgeBase};

use crate::cli::GlobalFlags;

/// Everything a command handler needs.
pub struct AppContext {
    pub config: PaddyConfig,
    pub knowledge: KnowledgeBase,
    pub policy: ScoringPolicy,
}

impl AppContext {
    /// Validate scoring config and load the knowledge base.
    pub fn init(config: PaddyConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let policy = config
            .scoring
            .to_policy()
            .context("invalid [scoring] configuration")?;

        let knowledge = match knowledge_path(flags, &config) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading knowledge base");
                KnowledgeBase::load(&path).with_context(|| {
                    format!("failed to load knowledge base from {}", path.display())
                })?
            }
            None => {
                tracing::debug!("using built-in rice knowledge base");
                KnowledgeBase::seed().context("built-in knowledge base is invalid")?
            }
        };

        Ok(Self {
            config,
            knowledge,
            policy,
        })
    }

    pub fn engine(&self) -> DiagnosisEngine<&KnowledgeBase> {
        DiagnosisEngine::new(&self.knowledge).with_policy(self.policy)
    }

    /// `--limit`, then `[general] default_limit`.
    pub fn limit(&self, flags: &GlobalFlags) -> usize {
        let limit = flags.limit.unwrap_or(self.config.general.default_limit);
        usize::try_from(limit).unwrap_or(usize::MAX)
    }
}

/// `--knowledge` wins over `[knowledge] path`; neither means the seed.
fn knowledge_path(flags: &GlobalFlags, config: &PaddyConfig) -> Option<PathBuf> {
    flags
        .knowledge
        .as_deref()
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .or_else(|| config.knowledge.path().map(Path::to_path_buf))
}

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &PaddyConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &PaddyConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    if !config.knowledge.is_configured() && has_single_underscore_key(&keys, "PADDY_KNOWLEDGE") {
        warnings.push(
            "Knowledge path appears unset while PADDY_KNOWLEDGE_* env vars exist. Use double underscores (example: PADDY_KNOWLEDGE__PATH)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&keys, "PADDY_SCORING") {
        warnings.push(
            "PADDY_SCORING_* env vars are ignored. Use double underscores (example: PADDY_SCORING__RULE_WEIGHT)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    let single = format!("{section}_");
    let double = format!("{section}__");
    keys.iter()
        .any(|key| key.starts_with(&single) && !key.starts_with(&double))
}
