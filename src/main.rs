// ABOUTME: Entry point for the rill CLI application.
// ABOUTME: Parses arguments and dispatches to orchestrator operations.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use rill::backend::HttpReleaseBackend;
use rill::config::{self, Config};
use rill::error::{Error, Result};
use rill::orchestrate::StreamOrchestrator;
use rill::output::{Output, OutputMode};
use rill::release::{ReleaseProperties, UpdateRequest};
use rill::stream::InMemoryDefinitionStore;
use rill::types::StreamName;
use std::collections::BTreeMap;
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let output = Output::new(mode);

    if let Err(e) = run(cli, &output).await {
        output.error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: &Output) -> Result<()> {
    if let Commands::Init { backend, force } = &cli.command {
        let cwd = env::current_dir()?;
        config::init_config(&cwd, backend.as_deref(), *force)?;
        output.success(&format!("Wrote {}", config::CONFIG_FILENAME));
        return Ok(());
    }

    let cwd = env::current_dir()?;
    let config = Config::discover(&cwd)?;
    let orchestrator = orchestrator_from(&config)?;

    match cli.command {
        Commands::Init { .. } => unreachable!("handled above"),
        Commands::Deploy { stream, properties } => {
            let name = StreamName::new(&stream)?;
            let properties = parse_properties(&properties)?;
            output.progress(&format!("Deploying stream {name}"));
            orchestrator.deploy(&name, &properties).await?;
            output.success(&format!("Deployment of {name} accepted"));
        }
        Commands::Update { stream, properties } => {
            let name = StreamName::new(&stream)?;
            let flat = parse_properties(&properties)?;
            let request = UpdateRequest::new(stream, ReleaseProperties::from_flat(&flat));
            output.progress(&format!("Updating stream {name}"));
            orchestrator.update(&name, &request).await?;
            output.success(&format!("Update of {name} accepted"));
        }
        Commands::Rollback { stream, version } => {
            let name = StreamName::new(&stream)?;
            output.progress(&format!("Rolling back {name} to version {version}"));
            orchestrator.rollback(&name, version).await?;
            output.success(&format!("Rollback of {name} accepted"));
        }
        Commands::Manifest { stream, version } => {
            let name = StreamName::new(&stream)?;
            let manifest = orchestrator.manifest(&name, version).await?;
            println!("{manifest}");
        }
        Commands::History { stream } => {
            let name = StreamName::new(&stream)?;
            let records = orchestrator.history(&name).await?;
            output.result(&records, |records| {
                records
                    .iter()
                    .map(|r| format!("v{}  {}  {}", r.version, r.status, r.created_at))
                    .collect::<Vec<_>>()
                    .join("\n")
            });
        }
        Commands::Platforms => {
            let platforms = orchestrator.platform_list().await?;
            output.result(&platforms, |platforms| {
                platforms
                    .iter()
                    .map(|p| format!("{} ({})", p.name, p.deployer_type))
                    .collect::<Vec<_>>()
                    .join("\n")
            });
        }
        Commands::Info { stream } => {
            let name = StreamName::new(&stream)?;
            let resource = orchestrator.info(&name).await?;
            output.result(&resource, |r| {
                format!(
                    "stream: {}\ndsl: {}\nstatus: {}\nproperties: {}",
                    r.stream_name, r.dsl_text, r.status, r.deployment_properties
                )
            });
        }
    }

    Ok(())
}

fn orchestrator_from(
    config: &Config,
) -> Result<StreamOrchestrator<InMemoryDefinitionStore, HttpReleaseBackend>> {
    let store = config.definition_store()?;
    let backend = HttpReleaseBackend::new(config.backend.clone(), config.request_timeout);
    Ok(StreamOrchestrator::new(store, backend))
}

fn parse_properties(pairs: &[String]) -> Result<BTreeMap<String, String>> {
    pairs
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| Error::InvalidConfig(format!("expected KEY=VALUE, got '{pair}'")))
        })
        .collect()
}
