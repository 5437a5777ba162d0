//! URL redirector CLI entry point.
//!
//! Evaluates URLs against a rule file and prints the rewrite decision.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use url_redirector::{evaluate, Rule, RuleStore};

#[derive(Parser, Debug)]
#[command(name = "url-redirector")]
#[command(author, version, about = "Rule-based URL rewrite engine")]
struct Args {
    /// Rule file path (YAML or JSON)
    #[arg(short, long, env = "REDIRECTOR_RULES")]
    rules: Option<PathBuf>,

    /// URLs to evaluate; reads stdin lines when empty
    urls: Vec<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Print an example rule file and exit.
    #[arg(long)]
    example_rules: bool,

    /// Check that every rule pattern compiles, then exit.
    #[arg(long)]
    validate: bool,
}

fn print_example_rules() {
    let example = r#"# URL Redirector Rule File Example
rules:
  # Send product pages to the new shop, swapping fours for nines
  - id: "8d5e9570-1f2a-4b8e-9c3d-2a1b0c9d8e7f"
    name: "shop-rewrite"
    description: "Redirect legacy product pages"
    inputPattern: "example\\.com/item/(\\d+)"
    outputPattern: "https://shop.test/p/$1"
    transformationRules:
      - type: ReplaceAll
        searchValue: "4"
        replaceValue: "9"
        target: 1
    isActive: true

  # Plain host swap, no transformations
  - id: "f3b8c2d1-0a9e-4c7b-8d6f-5e4a3b2c1d0e"
    name: "mirror"
    inputPattern: "https://old\\.test/(.*)"
    outputPattern: "https://new.test/$1"
    isActive: true
"#;
    println!("{}", example);
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    if args.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }

    if args.example_rules {
        print_example_rules();
        return Ok(());
    }

    let store = match &args.rules {
        Some(path) => RuleStore::load(path)
            .with_context(|| format!("Failed to load rule file: {}", path.display()))?,
        None => RuleStore::new(),
    };

    if args.validate {
        for rule in store.list() {
            regex::Regex::new(&rule.input_pattern).with_context(|| {
                format!("Rule {:?} has an invalid pattern", rule.name)
            })?;
        }
        info!(rules = store.list().len(), "Rule file is valid");
        return Ok(());
    }

    info!(rules = store.list().len(), "Loaded rule snapshot");

    if args.urls.is_empty() {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let url = line.context("Failed to read URL from stdin")?;
            if !url.trim().is_empty() {
                print_decision(url.trim(), store.list());
            }
        }
    } else {
        for url in &args.urls {
            print_decision(url, store.list());
        }
    }

    Ok(())
}

fn print_decision(url: &str, rules: &[Rule]) {
    match evaluate(url, rules) {
        Some(redirect) => println!("REDIRECT {} -> {}", url, redirect),
        None => println!("PASS {}", url),
    }
}
