//! Feedback CLI commands.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use briefmatch_types::brief::BriefId;
use briefmatch_types::feedback::SubmitFeedbackRequest;
use briefmatch_types::talent::TalentId;

use crate::state::AppState;

pub async fn add_feedback(
    state: &AppState,
    brief_id: &str,
    talent_id: &str,
    rating: u8,
    comment: Option<String>,
    json: bool,
) -> Result<()> {
    let request = SubmitFeedbackRequest {
        brief_id: Some(brief_id.parse::<BriefId>()?),
        talent_id: Some(talent_id.parse::<TalentId>()?),
        rating: Some(rating),
        comment,
    };
    let feedback = state.feedback_service.submit(request).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&feedback)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Feedback recorded ({}/5)",
        style("✓").green().bold(),
        feedback.rating
    );
    println!();
    Ok(())
}

pub async fn list_feedback(state: &AppState, brief_id: &str, json: bool) -> Result<()> {
    let brief_id = brief_id.parse::<BriefId>()?;
    let feedback = state.feedback_service.list_for_brief(&brief_id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&feedback)?);
        return Ok(());
    }

    if feedback.is_empty() {
        println!();
        println!("  {} No feedback for this brief.", style("i").blue().bold());
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Talent").fg(Color::White),
        Cell::new("Rating").fg(Color::White),
        Cell::new("Comment").fg(Color::White),
        Cell::new("When").fg(Color::White),
    ]);

    for f in &feedback {
        table.add_row(vec![
            Cell::new(f.talent_id.to_string()).fg(Color::DarkGrey),
            Cell::new("★".repeat(f.rating as usize)).fg(Color::Yellow),
            Cell::new(f.comment.as_deref().unwrap_or("")),
            Cell::new(f.timestamp.format("%Y-%m-%d %H:%M").to_string()),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    Ok(())
}
