use colored::Colorize;

use crate::context::AppContext;
use crate::error::Result;

use super::output::{format_bytes, format_time, label, print_json, table, truncate};

/// Handle `collabdesk dashboard`
pub async fn handle_dashboard(ctx: &AppContext, json: bool) -> Result<()> {
    let stats = ctx.dashboard().stats().await.into_result()?;
    if json {
        return print_json(&stats);
    }

    println!("\n{}", "Workspace".bold());
    println!("  Documents: {}", stats.total_documents);
    println!("  Members:   {}", stats.total_members);
    println!("  Storage:   {}", format_bytes(stats.storage_used));

    if stats.recent_activities.is_empty() {
        println!("\n{}", "No recent activity.".yellow());
        return Ok(());
    }
    println!("\n{}", "Recent activity".bold());
    let mut t = table(&["When", "Type", "Action"]);
    for entry in &stats.recent_activities {
        t.add_row(prettytable::row![
            format_time(entry.created_at),
            label(&entry.activity_type),
            truncate(&entry.action, 60)
        ]);
    }
    t.printstd();
    Ok(())
}
