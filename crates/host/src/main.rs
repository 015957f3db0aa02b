use std::path::{Path, PathBuf};

use anyhow::Context;
use slide_deck::outline::outline_presentation;
use slide_deck::{lint, Presentation};
use slide_deck_host::api;
use slide_deck_host::config::Config;
use tokio::signal;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    println!("slide-deck {VERSION}");
    println!();
    println!("USAGE:");
    println!("    slide-deck [COMMAND] [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    serve                     Start server (default)");
    println!("    check <deck.json>         Parse a deck and report authoring issues");
    println!("    import <text> [--out F]   Draft a deck from extracted slide text");
    println!();
    println!("OPTIONS:");
    println!("    --port <PORT>             Listen port (serve)");
    println!("    --root <DIR>              Site root (serve)");
    println!("    -v, --version             Print version");
    println!("    -h, --help                Print this help");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging (tracing)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .init();

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("--version" | "-v") => {
            println!("slide-deck {VERSION}");
            Ok(())
        }
        Some("--help" | "-h") => {
            print_help();
            Ok(())
        }
        Some("check") => handle_check_command(&args[2..]),
        Some("import") => handle_import_command(&args[2..]),
        Some("serve") => serve(&args[2..]).await,
        _ => serve(args.get(1..).unwrap_or_default()).await,
    }
}

async fn serve(args: &[String]) -> anyhow::Result<()> {
    Config::create_default_if_missing();
    let mut config = Config::load();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--port" if i + 1 < args.len() => {
                config.server.port = args[i + 1]
                    .parse()
                    .with_context(|| format!("invalid port '{}'", args[i + 1]))?;
                i += 2;
            }
            "--root" if i + 1 < args.len() => {
                config.site.root = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            other => {
                tracing::warn!(arg = %other, "Ignoring unknown argument");
                i += 1;
            }
        }
    }

    if !config.site.root.join("index.html").exists() {
        tracing::warn!(
            root = %config.site.root.display(),
            "Site root has no index.html"
        );
    }

    let app = api::app(&config.site);
    let addr = format!("{}:{}", config.server.bind, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        addr = %addr,
        root = %config.site.root.display(),
        "Serving presentations"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
    }
}

/// Handle 'slide-deck check <deck.json>'
fn handle_check_command(args: &[String]) -> anyhow::Result<()> {
    let path = args
        .first()
        .context("usage: slide-deck check <deck.json>")?;
    let body = std::fs::read_to_string(path).with_context(|| format!("cannot read {path}"))?;
    let deck = Presentation::from_json(&body).with_context(|| format!("{path} is not a deck"))?;

    let issues = lint(&deck);
    println!(
        "{path}: {} sections, {} charts",
        deck.sections.len(),
        deck.charts().count()
    );
    for issue in &issues {
        println!("  warning: {issue}");
    }

    if issues.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("{} issue(s) found", issues.len())
    }
}

/// Handle 'slide-deck import <text-file> [--out <deck.json>]'
fn handle_import_command(args: &[String]) -> anyhow::Result<()> {
    let mut input: Option<&str> = None;
    let mut output: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--out" | "-o" if i + 1 < args.len() => {
                output = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            arg if !arg.starts_with('-') => {
                input = Some(arg);
                i += 1;
            }
            _ => i += 1,
        }
    }

    let input = input.context("usage: slide-deck import <text-file> [--out <deck.json>]")?;
    let text = std::fs::read_to_string(input).with_context(|| format!("cannot read {input}"))?;
    let stem = Path::new(input)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("apresentacao");

    let deck = outline_presentation(stem, &text);
    let json = serde_json::to_string_pretty(&deck)?;

    match output {
        Some(path) => {
            std::fs::write(&path, json).with_context(|| format!("cannot write {}", path.display()))?;
            tracing::info!(
                sections = deck.sections.len(),
                path = %path.display(),
                "Deck drafted"
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}
