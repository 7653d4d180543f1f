use colored::Colorize;

use crate::cli::WorkflowCommand;
use crate::context::AppContext;
use crate::error::Result;

use super::output::{format_time, label, or_dash, print_empty, print_json, table, truncate};

/// Handle `collabdesk workflows ...`
pub async fn handle_workflows(ctx: &AppContext, command: WorkflowCommand) -> Result<()> {
    let workflows = ctx.workflows();
    match command {
        WorkflowCommand::List { json } => {
            let list = workflows.list().await.into_result()?;
            if json {
                return print_json(&list);
            }
            if list.is_empty() {
                print_empty("workflows");
                return Ok(());
            }
            let mut t = table(&["ID", "Name", "Status", "Trigger", "Steps", "Last Run"]);
            for w in list {
                t.add_row(prettytable::row![
                    w.id.cyan(),
                    truncate(&w.name, 40),
                    label(&w.status),
                    or_dash(w.trigger.as_deref()),
                    w.steps.len(),
                    format_time(w.last_run_at)
                ]);
            }
            t.printstd();
        }
        WorkflowCommand::Execute { id } => {
            let execution = workflows.execute(&id).await?;
            println!(
                "{} execution {} ({})",
                "Started".green(),
                execution.id.cyan(),
                execution.status
            );
        }
    }
    Ok(())
}
