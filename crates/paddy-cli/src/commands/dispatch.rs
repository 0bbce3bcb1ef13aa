use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Diagnose(args) => commands::diagnose::run(args, ctx, flags),
        Commands::Symptoms => commands::symptoms::run(ctx, flags),
        Commands::Diseases => commands::diseases::list(ctx, flags),
        Commands::Disease(args) => commands::diseases::get(args.id, ctx, flags),
        Commands::Rules => commands::rules::run(ctx, flags),
        Commands::CheckRule(args) => commands::check_rule::run(args, ctx, flags),
        Commands::Lint(args) => commands::lint::run(args, ctx, flags),
    }
}
