use apidoc_gen::swagger;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "apidoc-gen")]
#[command(about = "Event-definition to OpenAPI document generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the API document from event and definition YAMLs.
    Generate {
        /// Directory of event definition YAMLs.
        #[arg(long, default_value = "src/events")]
        events: PathBuf,

        /// Directory (or single file) of model definition YAMLs.
        #[arg(long, default_value = "src/definitions")]
        definitions: PathBuf,

        /// Directory optionally holding a swagger.json info override.
        #[arg(long, default_value = "config")]
        config: PathBuf,

        #[arg(short = 'o', long, default_value = "docs/api-doc.yaml")]
        out: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Generate {
            events,
            definitions,
            config,
            out,
        } => {
            // Event loading is the one fatal path; nothing is written then.
            let spec = match swagger::generate(&events, &definitions, &config) {
                Ok(spec) => spec,
                Err(err) => {
                    error!("error in reading event YAMLs: {:#}", err);
                    std::process::exit(1);
                }
            };

            match write_spec(&spec, &out) {
                Ok(()) => info!("{} saved", out.display()),
                Err(err) => error!("error in generating {}: {:#}", out.display(), err),
            }
        }
    }
}

fn write_spec(spec: &serde_json::Value, out: &Path) -> apidoc_gen::Result<()> {
    let text = serde_yaml::to_string(spec)?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, text)?;
    Ok(())
}
