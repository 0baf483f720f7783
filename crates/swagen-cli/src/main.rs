mod config;
mod loader;
mod prompt;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use swagen_core::ir::ApiModel;
use swagen_core::transform::ingest;
use swagen_core::{CodeGenerator, GeneratedFile};
use swagen_ts_client::{ModuleFilter, TsClientConfig, TsClientGenerator};

use config::{load_config, SwagenConfig, CONFIG_FILE_NAME};

#[derive(Parser)]
#[command(
    name = "swagen",
    about = "Swagger/OpenAPI → typed TypeScript API-module generator",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript API modules from a Swagger/OpenAPI document
    Generate {
        /// Document location: an http(s) URL or a local path
        #[arg(short, long)]
        input: Option<String>,

        /// Module to generate, or `allapi` for every module
        #[arg(short, long)]
        module: Option<String>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a Swagger/OpenAPI document
    Validate {
        /// Document location: an http(s) URL or a local path
        #[arg(short, long)]
        input: String,
    },

    /// Inspect the grouped model of a document
    Inspect {
        /// Document location: an http(s) URL or a local path
        #[arg(short, long)]
        input: String,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a swagen configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            module,
            output,
        } => cmd_generate(input, module, output),

        Commands::Validate { input } => cmd_validate(&input),

        Commands::Inspect { input, format } => cmd_inspect(&input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "swagen", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<SwagenConfig> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    Ok(load_config(&config_path)
        .map_err(|e| anyhow::anyhow!(e))?
        .unwrap_or_default())
}

fn cmd_generate(
    input: Option<String>,
    module: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let cfg = try_load_config()?;

    // Flag → config file → interactive prompt; an empty answer halts with
    // no output written.
    let input = match input.or(cfg.input) {
        Some(input) => input,
        None => prompt::ask("Input swagger json url: ")?
            .ok_or_else(|| anyhow::anyhow!("no document location given"))?,
    };

    let module = match module.or(cfg.module) {
        Some(module) => module,
        None => prompt::ask("Input module name: ")?
            .ok_or_else(|| anyhow::anyhow!("no module name given"))?,
    };

    if module.eq_ignore_ascii_case(swagen_ts_client::ALL_MODULES)
        && !prompt::confirm("Generate every module? (y/n): ")?
    {
        eprintln!("cancelled");
        return Ok(());
    }

    eprintln!("wait a moment [{module}]...");

    let doc = loader::load_document(&input)?;
    let model = ingest(&doc);

    let gen_config = TsClientConfig {
        module: ModuleFilter::from_input(&module),
    };
    let files = TsClientGenerator.generate(&model, &gen_config)?;

    let output_dir = output.unwrap_or_else(|| PathBuf::from(&cfg.output));
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    write_files(&output_dir, &files)?;
    try_run_biome(&output_dir);

    eprintln!("Generated {} files in {}", files.len(), output_dir.display());
    Ok(())
}

fn cmd_validate(input: &str) -> Result<()> {
    let doc = loader::load_document(input)?;

    eprintln!("Valid OpenAPI {} document: {}", doc.openapi, doc.info.title);
    eprintln!("  Version: {}", doc.info.version);
    eprintln!("  Paths: {}", doc.paths.len());

    if let Some(ref components) = doc.components {
        eprintln!("  Schemas: {}", components.schemas.len());
    }

    let model = ingest(&doc);
    eprintln!("  Operations: {}", model.operations.len());
    eprintln!("  Modules: {}", model.modules.len());

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: &str, format: InspectFormat) -> Result<()> {
    let doc = loader::load_document(input)?;
    let model = ingest(&doc);

    let summary = build_inspect_summary(&model);

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{yaml}");
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{json}");
        }
    }

    Ok(())
}

fn build_inspect_summary(model: &ApiModel) -> serde_json::Value {
    let modules: Vec<serde_json::Value> = model
        .modules
        .iter()
        .map(|m| {
            let operations: Vec<serde_json::Value> = m
                .operations
                .iter()
                .map(|&i| {
                    let op = &model.operations[i];
                    serde_json::json!({
                        "method": op.method.as_str(),
                        "path": op.path,
                        "parameters": op.parameters.len(),
                        "has_request_body": op.request_schema.is_some(),
                        "has_response": op.response_schema.is_some(),
                    })
                })
                .collect();
            serde_json::json!({
                "name": m.name,
                "operations": operations,
            })
        })
        .collect();

    serde_json::json!({
        "modules": modules,
        "schemas": model.schemas.keys().collect::<Vec<_>>(),
    })
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}

/// Write generated files to disk under the given base directory.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
    }
    Ok(())
}

/// Try to run Biome on the output directory when a config is present; the
/// formatter is a best-effort collaborator and never fails the run.
fn try_run_biome(output_dir: &Path) {
    if !output_dir.join("biome.json").exists() {
        return;
    }
    match Command::new("npx")
        .args(["@biomejs/biome", "check", "--write", "."])
        .current_dir(output_dir)
        .output()
    {
        Ok(result) if result.status.success() => {
            eprintln!("  formatted with biome");
        }
        Ok(_) => {
            eprintln!("  warning: biome formatting had issues (non-zero exit)");
        }
        Err(_) => {
            eprintln!(
                "  note: biome not found — run `npx @biomejs/biome check --write .` in {} to format",
                output_dir.display()
            );
        }
    }
}
