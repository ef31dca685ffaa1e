use std::path::PathBuf;

use anyhow::Result;
use clap::CommandFactory;
use clap::{Parser, Subcommand};
use dnsposture_lib::{
    CheckResult, CheckStatus, DebugSection, build_debug_section, check_dmarc, check_spf,
};

#[derive(Parser)]
#[command(name = "dnsposture-cli")]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Commands>,

    /// cache directory for the public suffix list (default: system temp dir)
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// format: human|json
    #[arg(long, default_value = "human")]
    format: String,

    /// verbose tracing output
    #[arg(long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// run the SPF and DMARC checks for a host or URL
    Check { target: String },
    /// print the DNS debug section for a host or URL
    Section { target: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        init_tracing();
    }
    let cache_dir = cli.cache_dir.clone().unwrap_or_else(std::env::temp_dir);

    match cli.cmd {
        Some(Commands::Check { target }) => {
            let results = vec![
                check_spf(&target, &cache_dir)?,
                check_dmarc(&target, &cache_dir)?,
            ];
            render_checks(&results, &cli.format)?;
            // codes de sortie : 0 OK, 2 findings, 1 fatal
            if results.iter().any(|r| r.status != CheckStatus::Good) {
                std::process::exit(2);
            }
        }
        Some(Commands::Section { target }) => {
            let section = build_debug_section(&target, &cache_dir)?;
            render_section(&section, &cli.format)?;
        }
        None => {
            Cli::command().print_help()?;
            println!();
        }
    }
    Ok(())
}

fn render_checks(results: &[CheckResult], format: &str) -> Result<()> {
    match format {
        "human" => {
            for r in results {
                println!("[{}] {}", r.status.as_str().to_uppercase(), r.label);
                println!("        test: {}", r.test);
            }
            Ok(())
        }
        "json" => {
            #[cfg(feature = "with-serde")]
            {
                println!("{}", serde_json::to_string_pretty(results)?);
                Ok(())
            }
            #[cfg(not(feature = "with-serde"))]
            {
                eprintln!("format=json nécessite la feature 'with-serde'");
                std::process::exit(1);
            }
        }
        other => {
            eprintln!("unknown --format '{}', use: human|json", other);
            std::process::exit(1);
        }
    }
}

fn render_section(section: &DebugSection, format: &str) -> Result<()> {
    match format {
        "human" => {
            println!("{}", section.label);
            for (key, field) in &section.fields {
                println!("  {:<8} {}: {}", key, field.label, field.value);
            }
            Ok(())
        }
        "json" => {
            #[cfg(feature = "with-serde")]
            {
                println!("{}", serde_json::to_string_pretty(section)?);
                Ok(())
            }
            #[cfg(not(feature = "with-serde"))]
            {
                eprintln!("format=json nécessite la feature 'with-serde'");
                std::process::exit(1);
            }
        }
        other => {
            eprintln!("unknown --format '{}', use: human|json", other);
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    #[cfg(feature = "with-tracing")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();
    #[cfg(not(feature = "with-tracing"))]
    eprintln!("--verbose nécessite la feature 'with-tracing'");
}
