//! Talent catalogue CLI commands: list, add, seed.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use briefmatch_types::talent::CreateTalentRequest;

use crate::state::AppState;

/// List all talents in a table.
pub async fn list_talents(state: &AppState, json: bool) -> Result<()> {
    let talents = state.talent_service.list_talents().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&talents)?);
        return Ok(());
    }

    if talents.is_empty() {
        println!();
        println!(
            "  {} No talents found. Seed samples with: {}",
            style("i").blue().bold(),
            style("bmatch seed").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Name").fg(Color::White),
        Cell::new("City").fg(Color::White),
        Cell::new("Budget").fg(Color::White),
        Cell::new("Styles").fg(Color::White),
        Cell::new("Embedding").fg(Color::White),
    ]);

    for talent in &talents {
        let embedding = match talent.usable_embedding() {
            Some(v) => Cell::new(format!("{} dims", v.len())).fg(Color::Green),
            None => Cell::new("none").fg(Color::Yellow),
        };
        table.add_row(vec![
            Cell::new(&talent.name).fg(Color::Cyan),
            Cell::new(&talent.city),
            Cell::new(format!("{} - {}", talent.budget_min, talent.budget_max)),
            Cell::new(talent.style_tags.join(", ")),
            embedding,
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} talent{}",
        style(talents.len()).bold(),
        if talents.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

/// Add one talent profile.
pub async fn add_talent(state: &AppState, request: CreateTalentRequest, json: bool) -> Result<()> {
    let talent = state.talent_service.create_talent(request).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&talent)?);
        return Ok(());
    }

    println!();
    println!("  {} Talent added", style("✓").green().bold());
    println!();
    println!("  {}  {}", style("Name:").bold(), style(&talent.name).cyan());
    println!("  {}  {}", style("City:").bold(), &talent.city);
    println!(
        "  {}    {}",
        style("ID:").bold(),
        style(talent.id.to_string()).dim()
    );
    if talent.embedding.is_none() {
        println!();
        println!(
            "  {} Embedding unavailable; this talent is ranked by keyword overlap.",
            style("!").yellow().bold()
        );
    }
    println!();

    Ok(())
}

/// Insert the sample catalogue into an empty store.
pub async fn seed(state: &AppState, json: bool) -> Result<()> {
    let report = state.talent_service.seed_talents().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    if report.skipped_existing {
        println!(
            "  {} Catalogue already contains talents. Skipping seed.",
            style("i").blue().bold()
        );
        println!();
        return Ok(());
    }

    for name in &report.inserted {
        println!("  {} {}", style("✓").green(), name);
    }
    for name in &report.failed {
        println!("  {} {} (embedding failed)", style("✗").red(), name);
    }
    println!();
    println!(
        "  {} inserted, {} failed",
        style(report.inserted.len()).bold(),
        style(report.failed.len()).bold()
    );
    println!();

    Ok(())
}
