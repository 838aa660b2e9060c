//! `bmatch check` -- probe the talent store and the embedding provider.

use std::time::Instant;

use anyhow::Result;
use console::style;

use briefmatch_core::embedding::embedder::Embedder;

use crate::state::AppState;

const PROBE_TEXT: &str = "wedding photographer in Mumbai";

pub async fn check(state: &AppState, json: bool) -> Result<()> {
    let store = state.talent_service.count().await;

    // Strict call: the fallback would hide a provider failure.
    let embedder = state.match_service.embedder().primary();
    let start = Instant::now();
    let probe = embedder.embed(PROBE_TEXT).await;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    let expected = embedder.dimension();
    let provider_ok = matches!(&probe, Ok(v) if v.len() == expected);

    if json {
        let out = serde_json::json!({
            "data_dir": state.data_dir.display().to_string(),
            "store": match &store {
                Ok(count) => serde_json::json!({ "ok": true, "talents": count }),
                Err(e) => serde_json::json!({ "ok": false, "error": e.to_string() }),
            },
            "embedding": match &probe {
                Ok(v) => serde_json::json!({
                    "ok": provider_ok,
                    "model": embedder.model_name(),
                    "dimension": v.len(),
                    "expected_dimension": expected,
                    "elapsed_ms": elapsed_ms,
                }),
                Err(e) => serde_json::json!({
                    "ok": false,
                    "model": embedder.model_name(),
                    "error": e.to_string(),
                    "elapsed_ms": elapsed_ms,
                }),
            },
            "healthy": store.is_ok() && provider_ok,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let check_mark = |ok: bool| {
        if ok {
            format!("{}", style("✓").green())
        } else {
            format!("{}", style("✗").red())
        }
    };

    println!();
    println!(
        "  {} briefmatch v{}",
        style("⚡").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("  {}", style(state.data_dir.display().to_string()).dim());
    println!();

    match &store {
        Ok(count) => println!("  {} Talent store: {count} talents", check_mark(true)),
        Err(e) => println!("  {} Talent store: {e}", check_mark(false)),
    }

    match &probe {
        Ok(v) => println!(
            "  {} Embedding {}: {} dims in {elapsed_ms} ms",
            check_mark(provider_ok),
            embedder.model_name(),
            v.len()
        ),
        Err(e) => println!(
            "  {} Embedding {}: {e} (briefs will use the hashed fallback)",
            check_mark(false),
            embedder.model_name()
        ),
    }
    println!();

    Ok(())
}
