use std::collections::HashSet;

use anyhow::bail;
use paddy_core::ids::SymptomId;
use paddy_engine::KnowledgeBase;
use paddy_engine::source::SourceResolver;
use paddy_rules::Condition;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckRuleArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CheckRuleResponse {
    condition: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    referenced_symptoms: Vec<String>,
    unknown_symptoms: Vec<String>,
    /// Result against `--symptom` ids, when any were given.
    #[serde(skip_serializing_if = "Option::is_none")]
    holds: Option<bool>,
}

pub fn run(args: &CheckRuleArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = check(&args.condition, &args.symptoms, &ctx.knowledge);
    output(&response, flags.format)?;
    if let Some(error) = &response.error {
        bail!("condition does not parse: {error}");
    }
    Ok(())
}

fn check(condition: &str, symptoms: &[SymptomId], knowledge: &KnowledgeBase) -> CheckRuleResponse {
    let parsed = match Condition::parse(condition) {
        Ok(parsed) => parsed,
        Err(error) => {
            return CheckRuleResponse {
                condition: condition.to_string(),
                valid: false,
                canonical: None,
                error: Some(error.to_string()),
                referenced_symptoms: Vec::new(),
                unknown_symptoms: Vec::new(),
                holds: None,
            };
        }
    };

    let referenced: Vec<String> = parsed
        .referenced_symptoms()
        .into_iter()
        .map(String::from)
        .collect();
    let unknown = referenced
        .iter()
        .filter(|name| knowledge.symptom_named(name).is_none())
        .cloned()
        .collect();

    let holds = (!symptoms.is_empty()).then(|| {
        let selected: HashSet<SymptomId> = symptoms.iter().copied().collect();
        parsed.evaluate(&selected, &SourceResolver::new(knowledge))
    });

    CheckRuleResponse {
        condition: condition.to_string(),
        valid: true,
        canonical: Some(parsed.expr().to_string()),
        error: None,
        referenced_symptoms: referenced,
        unknown_symptoms: unknown,
        holds,
    }
}
