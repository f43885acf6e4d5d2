//! autocodegen's main application entry point.
//! Handles argument parsing, workspace discovery and pipeline
//! orchestration across every project of the workspace.

use autocodegen::{
    cli::{get_args, Args},
    error::{default_error_handler, Error, Result},
    observer::LogObserver,
    pipeline::Pipeline,
    renderer::MiniJinjaRenderer,
    script::CommandScriptEngine,
    workspace::{find_project_root, load_workspace_configs, workspace_forces_init},
};

fn main() {
    let args = get_args();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the starting directory and walks up to the workspace root
/// 2. Loads the ordered workspace project configurations
/// 3. Runs the pipeline for every template of every project in order
fn run(args: Args) -> Result<()> {
    let start_dir = match args.directory {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let start_dir = start_dir.canonicalize().map_err(Error::IoError)?;

    let project_root = find_project_root(&start_dir).ok_or_else(|| {
        Error::WorkspaceError(
            "not an autocodegen repository (or any of the parent directories): acg"
                .to_string(),
        )
    })?;

    let configs = load_workspace_configs(&project_root)?;

    let renderer = MiniJinjaRenderer::new();
    let scripts = CommandScriptEngine::new();
    let observer = LogObserver;

    let force_init = args.init || workspace_forces_init(&configs);
    let pipeline = Pipeline::new(&renderer, &scripts, &observer, force_init);

    for config in &configs {
        for (template_name, template_config) in &config.templates {
            pipeline.generate(template_name, template_config, config, &configs)?;
        }
    }

    Ok(())
}
