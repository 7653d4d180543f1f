use colored::Colorize;

use crate::cli::ChatCommand;
use crate::context::AppContext;
use crate::error::Result;
use crate::models::MessageRole;

use super::output::{format_time, or_dash, print_empty, print_json, table, truncate};

/// Handle `collabdesk chat ...`
pub async fn handle_chat(ctx: &AppContext, command: ChatCommand) -> Result<()> {
    let chat = ctx.chat();
    match command {
        ChatCommand::Sessions { json } => {
            let sessions = chat.sessions().await.into_result()?;
            if json {
                return print_json(&sessions);
            }
            if sessions.is_empty() {
                print_empty("chat sessions");
                return Ok(());
            }
            let mut t = table(&["ID", "Title", "Agent", "Last Updated"]);
            for session in sessions {
                t.add_row(prettytable::row![
                    session.id.cyan(),
                    truncate(&session.title, 40),
                    or_dash(session.agent_id.as_deref()),
                    format_time(session.updated_at.or(session.created_at))
                ]);
            }
            t.printstd();
        }
        ChatCommand::Messages { session_id, json } => {
            let messages = chat.messages(&session_id).await.into_result()?;
            if json {
                return print_json(&messages);
            }
            if messages.is_empty() {
                print_empty("messages");
                return Ok(());
            }
            for message in messages {
                let who = match message.role {
                    MessageRole::User => "you".green().bold(),
                    MessageRole::Assistant => "assistant".cyan().bold(),
                    MessageRole::System => "system".dimmed(),
                    MessageRole::Unknown => "unknown".dimmed(),
                };
                println!("{} {}", who, format_time(message.created_at).dimmed());
                println!("{}\n", message.content);
            }
        }
        ChatCommand::Send {
            session_id,
            message,
        } => {
            let sent = chat.send_message(&session_id, &message).await?;
            println!("{} {}", "Sent".green(), sent.id.dimmed());
        }
        ChatCommand::Agents { json } => {
            let agents = chat.agents().await.into_result()?;
            if json {
                return print_json(&agents);
            }
            if agents.is_empty() {
                print_empty("agents");
                return Ok(());
            }
            let mut t = table(&["ID", "Name", "Model", "Description"]);
            for agent in agents {
                t.add_row(prettytable::row![
                    agent.id.cyan(),
                    agent.name,
                    or_dash(agent.model.as_deref()),
                    truncate(agent.description.as_deref().unwrap_or("-"), 50)
                ]);
            }
            t.printstd();
        }
    }
    Ok(())
}
