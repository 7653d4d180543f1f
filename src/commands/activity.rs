use colored::Colorize;

use crate::cli::ActivityCommand;
use crate::context::AppContext;
use crate::error::Result;

use super::output::{format_time, label, or_dash, print_empty, print_json, table, truncate};

/// Handle `collabdesk activity ...`
pub async fn handle_activity(ctx: &AppContext, command: ActivityCommand) -> Result<()> {
    let activity = ctx.activity();
    match command {
        ActivityCommand::List {
            activity_type,
            page,
            json,
        } => {
            let store = &ctx.stores().activity;
            store.set_type_filter(activity_type);
            store.set_page(page);

            let result = activity.filtered().await.into_result()?;
            if json {
                return print_json(&result);
            }
            if result.activities.is_empty() {
                print_empty("activity");
                return Ok(());
            }
            let mut t = table(&["When", "Type", "Action", "User"]);
            for entry in &result.activities {
                t.add_row(prettytable::row![
                    format_time(entry.created_at),
                    label(&entry.activity_type),
                    truncate(&entry.action, 50),
                    or_dash(entry.user_id.as_deref())
                ]);
            }
            t.printstd();
            println!(
                "Page {} ({} of {} entries)",
                page,
                result.activities.len(),
                result.total
            );
        }
        ActivityCommand::Stats { json } => {
            let stats = activity.stats().await.into_result()?;
            if json {
                return print_json(&stats);
            }
            println!("{} {}", "Total:    ".bold(), stats.total);
            println!("{} {}", "Today:    ".bold(), stats.today);
            println!("{} {}", "This week:".bold(), stats.this_week);
            let mut by_type: Vec<_> = stats.by_type.iter().collect();
            by_type.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
            for (kind, count) in by_type {
                println!("  {:<14} {}", kind, count);
            }
        }
    }
    Ok(())
}
