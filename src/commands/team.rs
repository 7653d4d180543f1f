use colored::Colorize;

use crate::cli::TeamCommand;
use crate::context::AppContext;
use crate::error::Result;

use super::output::{format_time, label, print_empty, print_json, print_success, table};

/// Handle `collabdesk team ...`
///
/// Filters go through the team store so listing behaves like the team page.
pub async fn handle_team(ctx: &AppContext, command: TeamCommand) -> Result<()> {
    match command {
        TeamCommand::Members { role, search, json } => {
            let store = &ctx.stores().team;
            store.set_role_filter(role);
            store.set_search_query(search.unwrap_or_default());

            let view = ctx.team_view().await;
            if let Some(error) = view.members.error.clone() {
                return Err(error);
            }
            let members = view.filtered_members();
            if json {
                return print_json(&members);
            }
            if members.is_empty() {
                print_empty("team members");
                return Ok(());
            }
            let mut t = table(&["ID", "Name", "Email", "Role", "Joined"]);
            for member in &members {
                t.add_row(prettytable::row![
                    member.id.cyan(),
                    member.name,
                    member.email,
                    label(&member.role),
                    format_time(member.joined_at)
                ]);
            }
            t.printstd();
            if let Some(settings) = &view.settings.data {
                println!(
                    "{} members in {}",
                    members.len(),
                    settings.name.bold()
                );
            }
        }
        TeamCommand::Invite { email, role } => {
            let invitation = ctx.team().invite(&email, role).await?;
            print_success(&format!(
                "Invited {} as {}",
                invitation.email,
                label(&invitation.role)
            ));
        }
    }
    Ok(())
}
