use colored::Colorize;

use crate::cli::AuthCommand;
use crate::context::AppContext;
use crate::error::{CollabError, Result};

use super::output::{or_dash, print_success};

/// Handle `collabdesk auth ...`
pub async fn handle_auth(ctx: &AppContext, command: AuthCommand) -> Result<()> {
    let auth = ctx.auth();
    match command {
        AuthCommand::Login { email, password } => {
            let user = auth.login(&email, &password).await?;
            print_success(&format!("Signed in as {} <{}>", user.name, user.email));
            if ctx.session_store().is_none() {
                println!(
                    "{}",
                    "Session not saved (--no-keyring); it ends with this command.".yellow()
                );
            }
        }
        AuthCommand::Register {
            name,
            email,
            password,
        } => {
            let user = auth.register(&name, &email, &password).await?;
            print_success(&format!("Account created for {} <{}>", user.name, user.email));
        }
        AuthCommand::Logout => {
            auth.logout().await;
            print_success("Signed out");
        }
        AuthCommand::Whoami => {
            if !auth.is_authenticated() {
                return Err(CollabError::Unauthorized(
                    "not signed in; run `collabdesk auth login`".to_string(),
                ));
            }
            let user = auth.current_user().await.into_result()?;
            println!("{} {}", "Name: ".bold(), user.name);
            println!("{} {}", "Email:".bold(), user.email);
            println!("{} {}", "ID:   ".bold(), user.id.cyan());
            println!("{} {}", "Bio:  ".bold(), or_dash(user.bio.as_deref()));
        }
    }
    Ok(())
}
