use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use oasdocs_core::config::{self, CONFIG_FILE_NAME, ComponentsMode, OasDocsConfig};
use oasdocs_core::description::{self, spec::ApiDescription};
use oasdocs_core::transform::{self, TransformOptions};
use oasdocs_serve::{ServeConfig, SwaggerUiServer};

#[derive(Parser)]
#[command(name = "oasdocs", about = "Build and serve OpenAPI documents", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the OpenAPI YAML document from an API description
    Build {
        /// Path to the API description (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (defaults to ./internal/dist/openapi.yaml)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Merge all component groups instead of keeping only the last one
        #[arg(long)]
        merge_components: bool,

        /// Create missing output directories
        #[arg(long)]
        create_dirs: bool,
    },

    /// Print the transformed document without writing it
    Inspect {
        /// Path to the API description
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Serve the docs directory (OpenAPI YAML + Swagger UI) over HTTP
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Route prefix
        #[arg(short, long)]
        route: Option<String>,

        /// Directory to serve
        #[arg(short, long)]
        directory: Option<PathBuf>,
    },

    /// Initialize a new oasdocs configuration
    Init {
        /// Overwrite existing files
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
        Commands::Build {
            input,
            output,
            merge_components,
            create_dirs,
        } => cmd_build(input, output, merge_components, create_dirs),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Serve {
            port,
            route,
            directory,
        } => cmd_serve(port, route, directory),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "oasdocs", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<OasDocsConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    Ok(config::load_config(&config_path)?)
}

fn load_description(path: &PathBuf) -> Result<ApiDescription> {
    description::from_path(path).with_context(|| format!("failed to load {}", path.display()))
}

fn cmd_build(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    merge_components: bool,
    create_dirs: bool,
) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let desc = load_description(&input)?;

    let mut build = cfg.build_config();
    if output.is_some() {
        build.output = output;
    }
    build.create_dirs |= create_dirs;

    let options = TransformOptions {
        components: if merge_components {
            ComponentsMode::Merge
        } else {
            cfg.components
        },
    };

    oasdocs_core::build_docs_with_options(&desc, &build, &options)?;

    eprintln!("Built {}", build.output_path().display());
    eprintln!("  Path entries: {}", desc.paths.len());
    eprintln!("  Component groups: {}", desc.components.len());
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: InspectFormat) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let desc = load_description(&input)?;
    let document = transform::transform_with_options(
        &desc,
        &TransformOptions {
            components: cfg.components,
        },
    );

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&document)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&document)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn cmd_serve(port: Option<u16>, route: Option<String>, directory: Option<PathBuf>) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();

    let config = ServeConfig {
        route: route.unwrap_or(cfg.serve.route),
        port: port.or(cfg.serve.port),
        directory: directory.unwrap_or_else(|| PathBuf::from(cfg.serve.directory)),
        ..ServeConfig::default()
    };
    let server = SwaggerUiServer::new(Some(config))?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    runtime.block_on(async {
        let bound = server.bind().await?;
        bound
            .serve_with_shutdown(async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    log::error!("failed to listen for ctrl-c: {e}");
                    std::future::pending::<()>().await;
                }
            })
            .await
    })?;
    Ok(())
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
