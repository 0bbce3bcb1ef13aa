use paddy_core::entities::{Disease, ExpertRule};
use paddy_core::errors::CoreError;
use paddy_core::ids::{DiseaseId, SymptomId};
use paddy_engine::KnowledgeBase;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{output, output_with_table};

#[derive(Debug, Serialize)]
struct DiseaseRow {
    id: DiseaseId,
    name: String,
    symptoms: usize,
    rules: usize,
}

#[derive(Debug, Serialize)]
struct LinkedSymptom {
    id: SymptomId,
    /// `None` when the link points at a symptom the knowledge base lacks.
    name: Option<String>,
    severity: u8,
}

#[derive(Debug, Serialize)]
struct DiseaseDetailResponse {
    disease: Disease,
    symptoms: Vec<LinkedSymptom>,
    rules: Vec<ExpertRule>,
}

/// Handle `paddy diseases`.
pub fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut diseases = ctx.knowledge.diseases().to_vec();
    diseases.truncate(ctx.limit(flags));
    output_with_table(&diseases, flags.format, || {
        summary_rows(&ctx.knowledge, &diseases)
    })
}

/// Handle `paddy disease <id>`.
pub fn get(id: DiseaseId, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&detail(&ctx.knowledge, id)?, flags.format)
}

fn summary_rows(knowledge: &KnowledgeBase, diseases: &[Disease]) -> Vec<DiseaseRow> {
    diseases
        .iter()
        .map(|disease| DiseaseRow {
            id: disease.id,
            name: disease.name.clone(),
            symptoms: knowledge.links_for_disease(disease.id).len(),
            rules: knowledge.rules_for_disease(disease.id).count(),
        })
        .collect()
}

fn detail(knowledge: &KnowledgeBase, id: DiseaseId) -> Result<DiseaseDetailResponse, CoreError> {
    let disease = knowledge
        .disease(id)
        .cloned()
        .ok_or_else(|| CoreError::not_found("disease", id))?;

    let symptoms = knowledge
        .links_for_disease(id)
        .iter()
        .map(|link| LinkedSymptom {
            id: link.symptom_id,
            name: knowledge.symptom(link.symptom_id).map(|s| s.name.clone()),
            severity: link.severity,
        })
        .collect();

    Ok(DiseaseDetailResponse {
        disease,
        symptoms,
        rules: knowledge.rules_for_disease(id).cloned().collect(),
    })
}
