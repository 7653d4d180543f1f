use colored::Colorize;

use crate::cli::BillingCommand;
use crate::context::AppContext;
use crate::error::Result;
use crate::models::SubscriptionStatus;

use super::output::{format_bytes, label, print_empty, print_json, table};

/// Handle `collabdesk billing ...`
pub async fn handle_billing(ctx: &AppContext, command: BillingCommand) -> Result<()> {
    let payment = ctx.payment();
    match command {
        BillingCommand::Plans { json } => {
            let plans = payment.plans().await.into_result()?;
            if json {
                return print_json(&plans);
            }
            if plans.is_empty() {
                print_empty("plans");
                return Ok(());
            }
            let mut t = table(&["ID", "Name", "Price", "Interval", "Features"]);
            for plan in plans {
                t.add_row(prettytable::row![
                    plan.id.cyan(),
                    plan.name,
                    format!("{:.2} {}", plan.price as f64 / 100.0, plan.currency.to_uppercase()),
                    label(&plan.interval),
                    plan.features.len()
                ]);
            }
            t.printstd();
        }
        BillingCommand::Subscription { json } => {
            let subscription = payment.subscription().await.into_result()?;
            if json {
                return print_json(&subscription);
            }
            let Some(sub) = subscription else {
                println!("{}", "No active subscription.".yellow());
                return Ok(());
            };
            let status = match sub.status {
                SubscriptionStatus::Active | SubscriptionStatus::Trialing => {
                    label(&sub.status).green()
                }
                _ => label(&sub.status).red(),
            };
            println!("{} {}", "Plan:  ".bold(), sub.plan_id.cyan());
            println!("{} {}", "Status:".bold(), status);
            println!(
                "{} {} to {}",
                "Period:".bold(),
                sub.current_period_start.format("%Y-%m-%d"),
                sub.current_period_end.format("%Y-%m-%d")
            );
            if sub.cancel_at_period_end {
                println!("{}", "Cancels at the end of the period.".yellow());
            }
        }
        BillingCommand::Usage { json } => {
            let usage = payment.usage().await.into_result()?;
            if json {
                return print_json(&usage);
            }
            let mut t = table(&["Metric", "Used"]);
            t.add_row(prettytable::row!["Documents", usage.documents]);
            t.add_row(prettytable::row!["Storage", format_bytes(usage.storage_bytes)]);
            t.add_row(prettytable::row!["AI requests", usage.ai_requests]);
            t.add_row(prettytable::row!["Members", usage.members]);
            t.printstd();
        }
    }
    Ok(())
}
