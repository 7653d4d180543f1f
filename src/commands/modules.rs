use colored::Colorize;

use crate::cli::ModuleCommand;
use crate::context::AppContext;
use crate::error::Result;

use super::output::{format_time, label, or_dash, print_empty, print_json, table, truncate};

/// Handle `collabdesk modules ...`
pub async fn handle_modules(ctx: &AppContext, command: ModuleCommand) -> Result<()> {
    let modules = ctx.ai_modules();
    match command {
        ModuleCommand::List { json } => {
            let list = modules.list().await.into_result()?;
            if json {
                return print_json(&list);
            }
            if list.is_empty() {
                print_empty("AI modules");
                return Ok(());
            }
            let mut t = table(&["ID", "Name", "Status", "Model", "Features"]);
            for m in list {
                let enabled = m.features.iter().filter(|f| f.enabled).count();
                t.add_row(prettytable::row![
                    m.id.cyan(),
                    truncate(&m.name, 40),
                    label(&m.status),
                    or_dash(m.model.as_deref()),
                    format!("{}/{}", enabled, m.features.len())
                ]);
            }
            t.printstd();
        }
        ModuleCommand::Stats { id, json } => {
            let stats = modules.stats(&id).await.into_result()?;
            if json {
                return print_json(&stats);
            }
            println!("{} {}", "Requests:    ".bold(), stats.total_requests);
            println!("{} {:.1}%", "Success rate:".bold(), stats.success_rate * 100.0);
            println!("{} {:.0} ms", "Avg latency: ".bold(), stats.avg_latency_ms);
            println!("{} {}", "Last used:   ".bold(), format_time(stats.last_used_at));
        }
        ModuleCommand::Logs { id, json } => {
            let logs = modules.logs(&id).await.into_result()?;
            if json {
                return print_json(&logs);
            }
            if logs.is_empty() {
                print_empty("log entries");
                return Ok(());
            }
            for entry in logs {
                let level = match entry.level.to_lowercase().as_str() {
                    "error" => entry.level.red(),
                    "warn" | "warning" => entry.level.yellow(),
                    _ => entry.level.normal(),
                };
                println!(
                    "{} {:<7} {}",
                    format_time(entry.created_at).dimmed(),
                    level,
                    entry.message
                );
            }
        }
    }
    Ok(())
}
