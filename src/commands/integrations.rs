use colored::Colorize;

use crate::cli::IntegrationCommand;
use crate::context::AppContext;
use crate::error::Result;
use crate::models::IntegrationStatus;

use super::output::{format_time, label, print_empty, print_json, print_success, table, truncate};

/// Handle `collabdesk integrations ...`
pub async fn handle_integrations(ctx: &AppContext, command: IntegrationCommand) -> Result<()> {
    let integrations = ctx.integrations();
    match command {
        IntegrationCommand::List { json } => {
            let list = integrations.list().await.into_result()?;
            if json {
                return print_json(&list);
            }
            if list.is_empty() {
                print_empty("integrations");
                return Ok(());
            }
            let mut t = table(&["ID", "Name", "Type", "Status", "Last Sync", "Error"]);
            for i in list {
                let status = match i.status {
                    IntegrationStatus::Active => label(&i.status).green(),
                    IntegrationStatus::Error => label(&i.status).red(),
                    _ => label(&i.status).normal(),
                };
                t.add_row(prettytable::row![
                    i.id.cyan(),
                    i.name,
                    label(&i.integration_type),
                    status,
                    format_time(i.last_sync_at),
                    truncate(i.error_message.as_deref().unwrap_or(""), 40)
                ]);
            }
            t.printstd();
        }
        IntegrationCommand::Test { id } => {
            let result = integrations.test(&id).await?;
            let detail = result.message.unwrap_or_default();
            if result.success {
                print_success(&format!("Connection OK {}", detail));
            } else {
                println!("{} {}", "Connection failed".red(), detail);
            }
        }
        IntegrationCommand::Sync { id } => {
            let result = integrations.sync(&id).await?;
            if result.success {
                print_success(&format!("Synced {} items", result.items_synced));
            } else {
                println!("{}", "Sync failed".red());
            }
        }
    }
    Ok(())
}
