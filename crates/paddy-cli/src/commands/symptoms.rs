use paddy_core::entities::Symptom;
use paddy_engine::KnowledgeBase;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&sorted_symptoms(&ctx.knowledge, ctx.limit(flags)), flags.format)
}

/// Symptoms ordered by name, then id.
fn sorted_symptoms(knowledge: &KnowledgeBase, limit: usize) -> Vec<Symptom> {
    let mut symptoms = knowledge.symptoms().to_vec();
    symptoms.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    symptoms.truncate(limit);
    symptoms
}
