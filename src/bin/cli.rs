// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Pressrig Team

//! Pressrig CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use pressrig::io::collect_assets;
use pressrig::{Config, PartId};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pressrig")]
#[command(about = "Parametric part generator for an extrusion-rail ironing press", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every part in the catalog
    List,

    /// Emit a part as OpenSCAD source
    Emit {
        /// Part name (see `list`)
        part: String,

        /// Output SCAD file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Circle tessellation segment count
        #[arg(long)]
        segments: Option<u32>,
    },

    /// Render a part to STL via OpenSCAD
    Render {
        /// Part name (see `list`)
        part: String,

        /// Output STL file (defaults to <output_dir>/<stem>.stl)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Circle tessellation segment count
        #[arg(long)]
        segments: Option<u32>,
    },

    /// Render the entire catalog to STL
    RenderAll {
        /// Output directory for STL files
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Build a part and output its tree as JSON
    Dump {
        /// Part name (see `list`)
        part: String,

        /// Output JSON file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match &cli.command {
        Commands::List => list_command(),
        Commands::Emit {
            part,
            output,
            segments,
        } => emit_command(&config, part, output.as_deref(), *segments),
        Commands::Render {
            part,
            output,
            segments,
        } => render_command(&config, part, output.as_deref(), *segments, cli.verbose),
        Commands::RenderAll { out } => render_all_command(&config, out.clone(), cli.verbose),
        Commands::Dump { part, output } => dump_command(part, output.as_deref()),
        Commands::Version => {
            println!("Pressrig v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn parse_part(name: &str) -> PartId {
    match name.parse() {
        Ok(part) => part,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            eprintln!("Valid parts:");
            for part in PartId::ALL {
                eprintln!("  {}", part.name().cyan());
            }
            std::process::exit(1);
        }
    }
}

fn list_command() -> Result<()> {
    for part in PartId::ALL {
        println!(
            "  {:<22} {}  {}",
            part.name().cyan(),
            format!("x{}", part.copies()).yellow(),
            part.description().bright_black()
        );
    }
    Ok(())
}

fn emit_command(
    config: &Config,
    part: &str,
    output: Option<&std::path::Path>,
    segments: Option<u32>,
) -> Result<()> {
    let part = parse_part(part);
    let segments = segments.unwrap_or(config.segments);
    let source = pressrig::emit_part(part, segments)?;

    if let Some(path) = output {
        std::fs::write(path, source)?;
        println!("Wrote {} -> {}", part.name(), path.display());
    } else {
        print!("{}", source);
    }
    Ok(())
}

fn render_command(
    config: &Config,
    part: &str,
    output: Option<&std::path::Path>,
    segments: Option<u32>,
    verbose: bool,
) -> Result<()> {
    let part = parse_part(part);
    let node = part.build()?;

    let output = match output {
        Some(path) => path.to_path_buf(),
        None => {
            std::fs::create_dir_all(&config.output_dir)?;
            config.output_dir.join(format!("{}.stl", part.file_stem()))
        }
    };

    let mut config = config.clone();
    if let Some(segments) = segments {
        config.segments = segments;
    }
    let renderer = config.renderer();

    if verbose {
        for asset in collect_assets(&node) {
            println!("Asset: {}", asset);
        }
    }

    let elapsed = renderer.render(&node, &output)?;
    println!(
        "Rendered {} -> {} in {:.2?}",
        part.name(),
        output.display(),
        elapsed
    );
    Ok(())
}

fn render_all_command(config: &Config, out: Option<PathBuf>, verbose: bool) -> Result<()> {
    let output_dir = out.unwrap_or_else(|| config.output_dir.clone());
    std::fs::create_dir_all(&output_dir)?;

    let renderer = config.renderer();
    if !renderer.is_available() {
        eprintln!("{} OpenSCAD executable not found", "Error:".red());
        eprintln!("Install OpenSCAD or set PRESSRIG_OPENSCAD");
        std::process::exit(1);
    }

    let progress = ProgressBar::new(PartId::ALL.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut failures = Vec::new();
    for part in PartId::ALL {
        progress.set_message(part.name().to_string());

        let result = part
            .build()
            .and_then(|node| {
                let path = output_dir.join(format!("{}.stl", part.file_stem()));
                renderer.render(&node, &path)
            });

        match result {
            Ok(elapsed) => {
                if verbose {
                    progress.println(format!(
                        "  {} {} ({:.2?})",
                        "ok".green(),
                        part.name(),
                        elapsed
                    ));
                }
            }
            Err(e) => {
                progress.println(format!("  {} {}: {}", "failed".red(), part.name(), e));
                failures.push(part.name());
            }
        }
        progress.inc(1);
    }
    progress.finish_with_message("done");

    let rendered = PartId::ALL.len() - failures.len();
    println!("\n{}", "═".repeat(60).bright_black());
    println!(
        "  {} {}",
        "Rendered:".bright_black(),
        rendered.to_string().green()
    );
    println!(
        "  {} {}",
        "Failed:".bright_black(),
        if failures.is_empty() {
            "0".green()
        } else {
            failures.len().to_string().red()
        }
    );
    println!(
        "  {} {}",
        "Output:".bright_black(),
        output_dir.display().to_string().cyan()
    );
    println!("{}", "═".repeat(60).bright_black());

    if !failures.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

fn dump_command(part: &str, output: Option<&std::path::Path>) -> Result<()> {
    let part = parse_part(part);
    let node = part.build()?;
    let json = serde_json::to_string_pretty(&node)?;

    if let Some(path) = output {
        std::fs::write(path, json)?;
        println!("Tree written to: {}", path.display());
    } else {
        println!("{}", json);
    }
    Ok(())
}
