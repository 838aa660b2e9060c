//! `bmatch match` -- rank talents for a brief from the command line.

use anyhow::Result;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table, presets};
use console::style;

use briefmatch_types::brief::SubmitBriefRequest;
use briefmatch_types::matching::ScoredTalent;

use crate::state::AppState;

/// Submit (or, with `dry_run`, only preview) a brief and print its matches.
pub async fn run_match(
    state: &AppState,
    request: SubmitBriefRequest,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let (brief_id, matches) = if dry_run {
        (None, state.match_service.preview_matches(&request).await?)
    } else {
        let response = state.match_service.submit_brief(request).await?;
        (Some(response.brief_id), response.matches)
    };

    if json {
        let out = serde_json::json!({
            "brief_id": brief_id,
            "matches": matches,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    if let Some(id) = &brief_id {
        println!(
            "  {} Brief stored as {}",
            style("✓").green().bold(),
            style(id.to_string()).dim()
        );
    }

    if matches.is_empty() {
        println!(
            "  {} No matches. Add talents with: {}",
            style("i").blue().bold(),
            style("bmatch seed").yellow()
        );
        println!();
        return Ok(());
    }

    println!();
    println!("{}", matches_table(&matches));
    println!();
    Ok(())
}

fn matches_table(matches: &[ScoredTalent]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").fg(Color::White),
        Cell::new("Talent").fg(Color::White),
        Cell::new("City").fg(Color::White),
        Cell::new("Rule").fg(Color::White),
        Cell::new("Vector").fg(Color::White),
        Cell::new("Final").fg(Color::White),
        Cell::new("Reasons").fg(Color::White),
    ]);

    for (i, m) in matches.iter().enumerate() {
        let reasons = if m.reasons.is_empty() {
            "-".to_string()
        } else {
            m.reasons.join(", ")
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&m.talent.name).fg(Color::Cyan),
            Cell::new(&m.talent.city),
            Cell::new(m.rule_score).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.3}", m.vector_score)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", m.final_score))
                .fg(Color::Green)
                .set_alignment(CellAlignment::Right),
            Cell::new(reasons).fg(Color::DarkGrey),
        ]);
    }
    table
}
