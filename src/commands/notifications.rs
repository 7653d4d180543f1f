use colored::Colorize;

use crate::cli::NotificationCommand;
use crate::context::AppContext;
use crate::error::Result;
use crate::stores::ReadFilter;

use super::output::{format_time, label, print_empty, print_json, print_success, table, truncate};

/// Handle `collabdesk notifications ...`
pub async fn handle_notifications(ctx: &AppContext, command: NotificationCommand) -> Result<()> {
    match command {
        NotificationCommand::List { unread, json } => {
            let filter = if unread {
                ReadFilter::Unread
            } else {
                ReadFilter::All
            };
            ctx.stores().notifications.set_read_filter(filter);

            let view = ctx.notifications_view().await;
            if let Some(error) = view.notifications.error.clone() {
                return Err(error);
            }
            let items = view.visible();
            if json {
                return print_json(&items);
            }
            if items.is_empty() {
                print_empty("notifications");
                return Ok(());
            }
            let mut t = table(&["", "Title", "Type", "Message", "Received"]);
            for n in items {
                let marker = if n.read { " ".normal() } else { "●".cyan() };
                t.add_row(prettytable::row![
                    marker,
                    truncate(&n.title, 30),
                    label(&n.notification_type),
                    truncate(&n.message, 50),
                    format_time(n.created_at)
                ]);
            }
            t.printstd();
            if let Some(count) = view.unread_count.data {
                println!("{} unread", count);
            }
        }
        NotificationCommand::Unread => {
            let count = ctx.notifications().unread_count().await.into_result()?;
            println!("{}", count);
        }
        NotificationCommand::ReadAll => {
            ctx.notifications().mark_all_read().await?;
            print_success("All notifications marked as read");
        }
    }
    Ok(())
}
