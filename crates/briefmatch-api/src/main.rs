//! briefmatch CLI and REST API entry point.
//!
//! Binary name: `bmatch`
//!
//! Parses CLI arguments, initializes database and services, then dispatches
//! to the appropriate command handler or starts the REST API server.

use clap::Parser;
use clap_complete::generate;

use briefmatch_api::cli::{self, Cli, Commands, FeedbackCommand, TalentCommand};
use briefmatch_api::http;
use briefmatch_api::state::AppState;
use briefmatch_observe::tracing_setup::{LogFormat, TracingOptions, init_tracing, shutdown_tracing};
use briefmatch_types::brief::SubmitBriefRequest;
use briefmatch_types::talent::CreateTalentRequest;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let tracing_options = TracingOptions {
        format: if cli.log_json { LogFormat::Json } else { LogFormat::Pretty },
        enable_otel: cli.otel,
        ..TracingOptions::from_verbosity(cli.verbose, cli.quiet)
    };
    init_tracing(&tracing_options).map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "bmatch", &mut std::io::stdout());
        return Ok(());
    }

    let offline = matches!(cli.command, Commands::Seed { offline: true });
    let state = AppState::init(offline).await?;

    match cli.command {
        Commands::Serve { port, host } => {
            let host = host.unwrap_or_else(|| state.config.server.host.clone());
            let port = port.unwrap_or(state.config.server.port);
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            tracing::info!(%addr, "API server listening");
            if !cli.quiet {
                println!(
                    "  {} briefmatch API listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::Match {
            text,
            location,
            budget,
            tags,
            dry_run,
        } => {
            let request = SubmitBriefRequest {
                text,
                location,
                budget,
                style_tags: tags,
            };
            cli::matching::run_match(&state, request, dry_run, cli.json).await?;
        }

        Commands::Seed { .. } => {
            cli::talent::seed(&state, cli.json).await?;
        }

        Commands::Talents { action } => match action {
            TalentCommand::List => {
                cli::talent::list_talents(&state, cli.json).await?;
            }
            TalentCommand::Add {
                name,
                city,
                budget_min,
                budget_max,
                tags,
                profile,
            } => {
                let request = CreateTalentRequest {
                    name,
                    city,
                    budget_min,
                    budget_max,
                    style_tags: tags,
                    profile_text: profile,
                };
                cli::talent::add_talent(&state, request, cli.json).await?;
            }
        },

        Commands::Feedback { action } => match action {
            FeedbackCommand::Add {
                brief_id,
                talent_id,
                rating,
                comment,
            } => {
                cli::feedback::add_feedback(&state, &brief_id, &talent_id, rating, comment, cli.json)
                    .await?;
            }
            FeedbackCommand::List { brief_id } => {
                cli::feedback::list_feedback(&state, &brief_id, cli.json).await?;
            }
        },

        Commands::Check => {
            cli::check::check(&state, cli.json).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
