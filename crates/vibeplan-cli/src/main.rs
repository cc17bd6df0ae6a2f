mod bundle_cmd;
mod catalog_cmd;
mod config;
mod generate_cmd;
mod spec_input;
mod template_cmd;
#[cfg(test)]
mod test_util;
mod validate_cmd;

use clap::{Parser, Subcommand};

use config::VibeplanConfig;

#[derive(Parser)]
#[command(name = "vibeplan", about = "Generate project plans and starter bundles")]
struct Cli {
    /// GitHub username for blank specs (overrides VIBEPLAN_GITHUB_USERNAME env var)
    #[arg(long, global = true)]
    github_username: Option<String>,

    /// Deployment platform for blank specs (overrides VIBEPLAN_DEPLOYMENT_PLATFORM env var)
    #[arg(long, global = true)]
    platform: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a vibeplan config file with default values
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Generate a Markdown project plan from a spec file
    Generate {
        /// Path to a .json or .toml spec (`-` reads JSON from stdin)
        spec: String,
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<String>,
        /// Append the timeline, project structure and getting-started sections
        #[arg(long)]
        roadmap: bool,
    },
    /// Write the starter project files for a spec
    Bundle {
        /// Path to a .json or .toml spec (`-` reads JSON from stdin)
        spec: String,
        /// Directory to create the project directory in
        #[arg(long, default_value = ".")]
        dir: String,
        /// Write into an existing non-empty project directory
        #[arg(long)]
        force: bool,
    },
    /// Check a spec and print a normalized summary
    Validate {
        /// Path to a .json or .toml spec (`-` reads JSON from stdin)
        spec: String,
    },
    /// List predefined technologies, features and platforms
    Catalog {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a starter spec in TOML
    Template {
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<String>,
    },
}

/// Execute the `vibeplan init` command: write config file.
fn cmd_init(
    github_username: Option<&str>,
    platform: Option<&str>,
    force: bool,
) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile {
        defaults: config::DefaultsSection {
            github_username: github_username.map(str::to_string),
            deployment_platform: Some(
                platform
                    .unwrap_or(vibeplan_core::spec::DEFAULT_DEPLOYMENT_PLATFORM)
                    .to_string(),
            ),
        },
    };

    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!(
        "  defaults.github_username = {}",
        github_username.unwrap_or("(unset)")
    );
    if let Some(platform) = &cfg.defaults.deployment_platform {
        println!("  defaults.deployment_platform = {platform}");
    }
    println!();
    println!("Next: run `vibeplan template -o project.toml` to start a spec.");

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let username = cli.github_username.as_deref();
    let platform = cli.platform.as_deref();

    match cli.command {
        Commands::Init { force } => {
            cmd_init(username, platform, force)?;
        }
        Commands::Generate {
            spec,
            output,
            roadmap,
        } => {
            let resolved = VibeplanConfig::resolve(username, platform)?;
            generate_cmd::run_generate(&spec, output.as_deref(), roadmap, &resolved)?;
        }
        Commands::Bundle { spec, dir, force } => {
            let resolved = VibeplanConfig::resolve(username, platform)?;
            bundle_cmd::run_bundle(&spec, &dir, force, &resolved)?;
        }
        Commands::Validate { spec } => {
            let resolved = VibeplanConfig::resolve(username, platform)?;
            validate_cmd::run_validate(&spec, &resolved)?;
        }
        Commands::Catalog { json } => {
            catalog_cmd::run_catalog(json)?;
        }
        Commands::Template { output } => {
            template_cmd::run_template(output.as_deref())?;
        }
    }

    Ok(())
}
