use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Rank likely diseases for the observed symptoms.
    Diagnose(DiagnoseArgs),
    /// List all symptoms, ordered by name.
    Symptoms,
    /// List all diseases.
    Diseases,
    /// Show one disease with its symptoms and rules.
    Disease(DiseaseArgs),
    /// List all expert rules.
    Rules,
    /// Parse a rule condition and report problems.
    CheckRule(CheckRuleArgs),
    /// Report inconsistencies in the knowledge base.
    Lint(LintArgs),
}

#[derive(Clone, Debug, Args)]
pub struct DiagnoseArgs {
    /// Observed symptom by id (repeatable).
    #[arg(short = 's', long = "symptom", value_name = "ID", allow_negative_numbers = true)]
    pub symptoms: Vec<i64>,

    /// Observed symptom by exact name (repeatable).
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub names: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DiseaseArgs {
    /// Disease id.
    pub id: i64,
}

#[derive(Clone, Debug, Args)]
pub struct CheckRuleArgs {
    /// Condition text, e.g. "has_symptom('Leaf blight') and not has_symptom('Wilting')".
    pub condition: String,

    /// Also evaluate against these symptom ids (repeatable).
    #[arg(short = 's', long = "symptom", value_name = "ID", allow_negative_numbers = true)]
    pub symptoms: Vec<i64>,
}

#[derive(Clone, Debug, Args)]
pub struct LintArgs {
    /// Exit with an error when any issue is found.
    #[arg(long)]
    pub strict: bool,
}
