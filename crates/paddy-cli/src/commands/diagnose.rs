use std::collections::{BTreeSet, HashSet};

use anyhow::bail;
use paddy_core::entities::{DiagnosisReport, Symptom};
use paddy_core::enums::InferenceMethod;
use paddy_core::ids::SymptomId;
use paddy_engine::KnowledgeBase;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DiagnoseArgs;
use crate::context::AppContext;
use crate::output::output_with_table;

#[derive(Debug, Serialize)]
struct DiagnoseResponse {
    selected: Vec<Symptom>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    unknown_symptom_ids: Vec<SymptomId>,
    results: Vec<DiagnosisReport>,
}

#[derive(Debug, Serialize)]
struct DiagnosisRow {
    rank: usize,
    disease: String,
    confidence: String,
    method: InferenceMethod,
    matched: String,
    treatment: String,
}

pub fn run(args: &DiagnoseArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let selection = resolve_selection(args, &ctx.knowledge)?;
    let response = diagnose(&selection, ctx, ctx.limit(flags))?;
    if response.results.is_empty() && !flags.quiet {
        eprintln!("No disease matched the selected symptoms.");
    }
    output_with_table(&response, flags.format, || rows(&response.results))
}

/// Observed symptoms after resolving names.
#[derive(Debug, PartialEq)]
struct Selection {
    ids: HashSet<SymptomId>,
    unknown_ids: Vec<SymptomId>,
}

fn resolve_selection(args: &DiagnoseArgs, knowledge: &KnowledgeBase) -> anyhow::Result<Selection> {
    let mut ids: HashSet<SymptomId> = args.symptoms.iter().copied().collect();

    for name in &args.names {
        let Some(symptom) = knowledge.symptom_named(name.trim()) else {
            bail!("unknown symptom name '{name}'; run `paddy symptoms` to list valid names");
        };
        ids.insert(symptom.id);
    }

    if ids.is_empty() {
        bail!("no symptoms selected; pass --symptom <ID> or --name <NAME>");
    }

    let unknown_ids: Vec<SymptomId> = ids
        .iter()
        .copied()
        .filter(|id| knowledge.symptom(*id).is_none())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if !unknown_ids.is_empty() {
        tracing::warn!(?unknown_ids, "selected symptom ids are not in the knowledge base");
    }

    Ok(Selection { ids, unknown_ids })
}

fn diagnose(
    selection: &Selection,
    ctx: &AppContext,
    limit: usize,
) -> anyhow::Result<DiagnoseResponse> {
    let mut results = ctx.engine().diagnose_report(&selection.ids)?;
    results.truncate(limit);

    let mut selected: Vec<Symptom> = selection
        .ids
        .iter()
        .filter_map(|id| ctx.knowledge.symptom(*id).cloned())
        .collect();
    selected.sort_by_key(|symptom| symptom.id);

    Ok(DiagnoseResponse {
        selected,
        unknown_symptom_ids: selection.unknown_ids.clone(),
        results,
    })
}

fn rows(results: &[DiagnosisReport]) -> Vec<DiagnosisRow> {
    results
        .iter()
        .enumerate()
        .map(|(index, report)| DiagnosisRow {
            rank: index + 1,
            disease: report.disease_name.clone(),
            confidence: format!("{}%", report.confidence_percent()),
            method: report.method,
            matched: match (report.matched_symptom_count, report.total_symptom_count) {
                (Some(matched), Some(total)) => format!("{matched}/{total}"),
                _ => String::from("-"),
            },
            treatment: report.treatment.clone(),
        })
        .collect()
}
