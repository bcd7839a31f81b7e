use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::compiler::{compile_routes, FileDescriptorLoader};
use crate::registry::{HandlerRegistry, MiddlewareRegistry};
use crate::runtime_config::RuntimeConfig;

/// Command-line interface for the route compiler.
#[derive(Parser)]
#[command(name = "plumber")]
#[command(about = "Filesystem route compiler CLI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Compile a route directory and print the ordered registration table
    Inspect {
        /// Route directory (default: $PLUMBER_ROUTES_DIR or `routes`)
        #[arg(short, long)]
        routes: Option<PathBuf>,
    },
    /// Compile a route directory and report whether it is valid
    Validate {
        /// Route directory (default: $PLUMBER_ROUTES_DIR or `routes`)
        #[arg(short, long)]
        routes: Option<PathBuf>,
    },
}

fn routes_dir(flag: &Option<PathBuf>) -> PathBuf {
    flag.clone()
        .unwrap_or_else(|| RuntimeConfig::from_env().routes_dir)
}

fn lenient_loader() -> FileDescriptorLoader {
    FileDescriptorLoader::new(HandlerRegistry::new(), MiddlewareRegistry::new()).lenient()
}

pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Inspect { routes } => {
            let dir = routes_dir(routes);
            let table = compile_routes(&dir, &lenient_loader())?;
            println!("[routes] dir={} count={}", dir.display(), table.len());
            for entry in &table {
                println!(
                    "[route] {} {} priority={}",
                    entry.method.as_str().to_ascii_lowercase(),
                    entry.path,
                    entry.priority
                );
            }
            Ok(())
        }
        Commands::Validate { routes } => {
            let dir = routes_dir(routes);
            let table = compile_routes(&dir, &lenient_loader())?;
            println!("ok: {} route(s) in {}", table.len(), dir.display());
            Ok(())
        }
    }
}
