use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;

use shell_assist::ai::{build_system_prompt, provider};
use shell_assist::cli::Cli;
use shell_assist::config::{ConfigError, Environment, load_config};
use shell_assist::executor::ScriptExecutor;
use shell_assist::interaction::{Palette, StdinPrompt, TerminalKeys};
use shell_assist::validator::PathResolver;
use shell_assist::{Collaborators, PipelineSettings, ShellAssistError, SuggestionPipeline};

const LOG_ENV: &str = "SHELL_ASSIST_LOG";

fn main() -> Result<ExitCode> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "warn")).init();

    let cli = Cli::parse();

    let mut pipeline = match build_pipeline(&cli) {
        Ok(pipeline) => pipeline,
        Err(e) => return Ok(report(e.into())),
    };

    match pipeline.run(&cli.joined_prompt()) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => Ok(report(e)),
    }
}

/// Everything that can fail before the first cycle
fn build_pipeline(cli: &Cli) -> Result<SuggestionPipeline, ConfigError> {
    let mut config = load_config(cli.config.as_deref())?;
    cli.apply_to(&mut config);
    let env = Environment::discover()?;
    log::debug!("Starting with {:?} and {:?}", env, config);

    let convention = config.reply.convention;
    let palette = Palette::new(config.output.color);
    let settings = PipelineSettings {
        convention,
        policy: config.decision_policy(),
        palette,
        system_prompt: build_system_prompt(convention, &env.operating_system, &env.shell_name)?,
    };

    let parts = Collaborators {
        client: Box::new(provider::from_config(&config.ai, &env.api_key)?),
        resolver: Box::new(PathResolver),
        prompts: Box::new(StdinPrompt::stdio(palette)),
        keys: Box::new(TerminalKeys),
        runner: Box::new(
            ScriptExecutor::new(env.shell_interpreter).with_temp_dir(config.executor.temp_dir),
        ),
    };

    Ok(SuggestionPipeline::new(settings, parts))
}

fn report(error: ShellAssistError) -> ExitCode {
    eprintln!("{}", error.report_line());
    ExitCode::FAILURE
}
