//! Command-line front end for the address-bar normalizer.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use navurl::{ClassifiedUrl, LocalHosts, ParserConfig, UrlParser};

#[derive(Debug, Parser)]
#[command(name = "navurl", version, about = "Classify and normalize address-bar input")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Hosts file whose names are treated as local hosts (e.g. /etc/hosts).
    #[arg(long, global = true)]
    hosts: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the normalized URL for each input.
    Parse {
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Print the classification and normalized URL for each input.
    Classify {
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Check whether each argument is a valid domain.
    Validate {
        #[arg(required = true)]
        domains: Vec<String>,
    },
    /// Print the URL each internal page URL stands for.
    Source {
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_parser(cli: &Cli) -> Result<UrlParser> {
    let config = match &cli.config {
        Some(path) => ParserConfig::load(path)?,
        None => ParserConfig::default(),
    };
    let mut parser = UrlParser::from_config(&config)?;

    if let Some(path) = &cli.hosts {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read hosts file {}", path.display()))?;
        let mut hosts = LocalHosts::from_hosts_file(&contents);
        hosts.extend(&config.local_hosts);
        tracing::debug!(count = hosts.len(), "loaded local hosts");
        parser = parser.with_local_hosts(hosts);
    }

    Ok(parser)
}

fn describe(classified: &ClassifiedUrl) -> String {
    match classified {
        ClassifiedUrl::ViewSourceWrapped { depth, inner } => {
            format!("view-source[{}]({})", depth, describe(inner))
        }
        other => other.tag().to_string(),
    }
}

fn run(cli: Cli) -> Result<()> {
    let parser = build_parser(&cli)?;

    match cli.command {
        Command::Parse { inputs } => {
            for input in inputs {
                println!("{}", parser.parse(&input));
            }
        }
        Command::Classify { inputs } => {
            for input in inputs {
                let classified = parser.classify(&input);
                println!("{}\t{}\t{}", describe(&classified), input, parser.render(&classified));
            }
        }
        Command::Validate { domains } => {
            for domain in domains {
                let verdict = if parser.validate_domain(&domain) { "valid" } else { "invalid" };
                println!("{}\t{}", verdict, domain);
            }
        }
        Command::Source { urls } => {
            for url in urls {
                println!("{}", parser.source_url_of(&url));
            }
        }
    }

    Ok(())
}

fn main() {
    init_logging();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("navurl error: {:#}", err);
        std::process::exit(1);
    }
}
