use anyhow::bail;
use paddy_engine::KnowledgeBase;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LintArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct IssueRow {
    kind: &'static str,
    message: String,
}

pub fn run(args: &LintArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let issues = collect(&ctx.knowledge);
    output(&issues, flags.format)?;
    if args.strict && !issues.is_empty() {
        bail!("knowledge base has {} issue(s)", issues.len());
    }
    Ok(())
}

fn collect(knowledge: &KnowledgeBase) -> Vec<IssueRow> {
    knowledge
        .issues()
        .into_iter()
        .map(|issue| IssueRow {
            kind: issue.kind(),
            message: issue.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn seed_is_clean() {
        assert!(collect(&KnowledgeBase::seed().unwrap()).is_empty());
    }

    #[test]
    fn issues_carry_kind_and_message() {
        let kb = KnowledgeBase::from_toml_str(
            r#"
[[diseases]]
id = 1
name = "Rice Rust"
description = ""
treatment = ""

[[rules]]
id = 1
condition = "has_symptom('Orange pustules') and"
disease_id = 1
"#,
        )
        .unwrap();

        let kinds: Vec<&str> = collect(&kb).iter().map(|row| row.kind).collect();
        assert_eq!(kinds, vec!["disease_without_symptoms", "malformed_condition"]);
    }
}
