use paddy_core::entities::ExpertRule;
use paddy_core::ids::{DiseaseId, RuleId};
use paddy_engine::KnowledgeBase;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_with_table;

#[derive(Debug, Serialize)]
struct RuleRow {
    id: RuleId,
    disease_id: DiseaseId,
    disease: String,
    confidence: f64,
    condition: String,
}

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut rules = ctx.knowledge.rules().to_vec();
    rules.truncate(ctx.limit(flags));
    output_with_table(&rules, flags.format, || rows(&ctx.knowledge, &rules))
}

fn rows(knowledge: &KnowledgeBase, rules: &[ExpertRule]) -> Vec<RuleRow> {
    rules
        .iter()
        .map(|rule| RuleRow {
            id: rule.id,
            disease_id: rule.disease_id,
            disease: knowledge
                .disease(rule.disease_id)
                .map_or_else(|| String::from("(unknown)"), |d| d.name.clone()),
            confidence: rule.confidence,
            condition: rule.condition.clone(),
        })
        .collect()
}
