use clap::{Parser, Subcommand};
use quire::{Document, LayoutOptimizer, OptimizerError, analyze};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Adaptive print layout for report documents.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the content statistics of a document as JSON
    Analyze {
        /// Document IR file
        document: PathBuf,
    },
    /// Run an optimization pass over a document
    Optimize {
        /// Document IR file
        document: PathBuf,
        /// Base layout config to adjust (defaults if absent)
        #[arg(long)]
        base: Option<PathBuf>,
        /// Save the optimized config and its audit record here
        #[arg(long)]
        save: Option<PathBuf>,
        /// Write the generated stylesheet here
        #[arg(long)]
        css: Option<PathBuf>,
    },
    /// Print the stylesheet for a layout config
    Css {
        /// Layout config file (defaults if absent)
        config: Option<PathBuf>,
    },
}

fn main() -> Result<(), OptimizerError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "quire=info");
        }
    }
    env_logger::init();

    match Args::parse().command {
        Command::Analyze { document } => {
            let stats = analyze(&read_document(&document)?);
            let json = serde_json::to_string_pretty(&stats)
                .map_err(|e| OptimizerError::Json { path: document, source: e })?;
            println!("{}", json);
        }
        Command::Optimize {
            document,
            base,
            save,
            css,
        } => {
            let mut optimizer = match base {
                Some(path) => LayoutOptimizer::load(path)?,
                None => LayoutOptimizer::default(),
            };
            let optimization = optimizer.optimize_for_document(&read_document(&document)?);

            if optimization.adjustments().is_empty() {
                println!("No adjustments needed.");
            }
            for note in optimization.adjustments() {
                println!("- {}", note);
            }

            optimizer.apply(&optimization);
            if let Some(path) = save {
                optimizer.save(&path, Some(&optimization.record))?;
                println!("Saved layout config to {}", path.display());
            }
            if let Some(path) = css {
                fs::write(&path, optimizer.generate_css()).map_err(|e| OptimizerError::Io {
                    path: path.clone(),
                    source: e,
                })?;
                println!("Wrote stylesheet to {}", path.display());
            }
        }
        Command::Css { config } => {
            let optimizer = match config {
                Some(path) => LayoutOptimizer::load(path)?,
                None => LayoutOptimizer::default(),
            };
            print!("{}", optimizer.generate_css());
        }
    }
    Ok(())
}

fn read_document(path: &Path) -> Result<Document, OptimizerError> {
    let text = fs::read_to_string(path).map_err(|e| OptimizerError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Document::from_json_str(&text).map_err(|e| OptimizerError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}
