//! Savings goal CLI commands

use clap::Subcommand;
use tracing::info;

use crate::config::Settings;
use crate::display::{format_goal_details, format_goal_list};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{next_goal_color, GoalId, GoalUpdate, NewGoal, GOAL_COLORS};
use crate::services::{GoalProgress, GoalService};
use crate::store::FinanceContext;

use super::{invalid, parse_date, parse_money, today};

/// Goal subcommands
#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        /// Goal title
        title: String,
        /// Target amount
        target: String,
        /// Deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: String,
        /// Amount already saved
        #[arg(long)]
        current: Option<String>,
        /// Display color; picked from the palette when omitted
        #[arg(long)]
        color: Option<String>,
    },
    /// List goals with progress
    List,
    /// Show goal details
    Show {
        /// Goal ID prefix or title
        id: String,
    },
    /// Edit a goal
    Edit {
        /// Goal ID prefix or title
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        target: Option<String>,
        #[arg(long)]
        current: Option<String>,
        #[arg(short, long)]
        deadline: Option<String>,
        #[arg(long, conflicts_with = "clear_color")]
        color: Option<String>,
        /// Remove the color
        #[arg(long)]
        clear_color: bool,
    },
    /// Delete a goal
    Delete {
        /// Goal ID prefix or title
        id: String,
    },
    /// Add money to a goal (never beyond its target)
    Contribute {
        /// Goal ID prefix or title
        id: String,
        /// Amount to add
        amount: String,
    },
}

fn check_color(color: &str) -> FinanceResult<()> {
    if GOAL_COLORS.contains(&color) {
        Ok(())
    } else {
        Err(FinanceError::Validation(format!(
            "Unknown color '{}'. Choose one of: {}",
            color,
            GOAL_COLORS.join(", ")
        )))
    }
}

/// Handle a goal command
pub fn handle_goal_command(
    ctx: &mut FinanceContext,
    settings: &Settings,
    cmd: GoalCommands,
) -> FinanceResult<()> {
    match cmd {
        GoalCommands::Add {
            title,
            target,
            deadline,
            current,
            color,
        } => {
            let store = ctx.store_mut()?;
            let color = match color {
                Some(c) => {
                    check_color(&c)?;
                    c
                }
                None => next_goal_color(store.goals().len()).to_string(),
            };

            let mut input = NewGoal::new(title.trim(), parse_money(&target)?, parse_date(&deadline)?)
                .with_color(color);
            if let Some(current) = current.as_deref() {
                input = input.with_current(parse_money(current)?);
            }
            input.validate().map_err(invalid)?;

            let id = store.add_goal(input);
            info!(%id, "goal added");

            let goal = store
                .goal(id)
                .ok_or_else(|| FinanceError::not_found::<GoalId>(id.to_string()))?;
            println!("Created goal:");
            print!(
                "{}",
                format_goal_details(&GoalProgress::compute(goal, today()), settings)
            );
        }

        GoalCommands::List => {
            let snapshot = ctx.store()?.snapshot();
            let service = GoalService::new(&snapshot, today());
            print!(
                "{}",
                format_goal_list(&service.progress_all(), &service.totals(), settings)
            );
        }

        GoalCommands::Show { id } => {
            let snapshot = ctx.store()?.snapshot();
            let goal = GoalService::new(&snapshot, today()).find(&id)?;
            print!(
                "{}",
                format_goal_details(&GoalProgress::compute(goal, today()), settings)
            );
        }

        GoalCommands::Edit {
            id,
            title,
            target,
            current,
            deadline,
            color,
            clear_color,
        } => {
            let store = ctx.store_mut()?;
            let snapshot = store.snapshot();
            let existing = GoalService::new(&snapshot, today()).find(&id)?;

            if let Some(c) = color.as_deref() {
                check_color(c)?;
            }
            let update = GoalUpdate {
                title: title.map(|t| t.trim().to_string()),
                target_amount: target.as_deref().map(parse_money).transpose()?,
                current_amount: current.as_deref().map(parse_money).transpose()?,
                deadline: deadline.as_deref().map(parse_date).transpose()?,
                color: if clear_color { Some(None) } else { color.map(Some) },
            };
            if update.is_empty() {
                println!("Nothing to change.");
                return Ok(());
            }

            let mut edited = existing.clone();
            update.apply(&mut edited);
            edited.validate().map_err(invalid)?;

            store.update_goal(existing.id, update);
            info!(id = %existing.id, "goal updated");
            println!("Updated goal:");
            print!(
                "{}",
                format_goal_details(&GoalProgress::compute(&edited, today()), settings)
            );
        }

        GoalCommands::Delete { id } => {
            let store = ctx.store_mut()?;
            let snapshot = store.snapshot();
            let goal = GoalService::new(&snapshot, today()).find(&id)?;

            store.delete_goal(goal.id);
            info!(id = %goal.id, "goal deleted");
            println!("Deleted goal: {} ({})", goal.title, goal.id);
        }

        GoalCommands::Contribute { id, amount } => {
            let amount = parse_money(&amount)?;
            if !amount.is_positive() {
                return Err(FinanceError::Validation(
                    "Contribution must be greater than zero".into(),
                ));
            }

            let store = ctx.store_mut()?;
            let snapshot = store.snapshot();
            let goal = GoalService::new(&snapshot, today()).find(&id)?;

            store.add_to_goal(goal.id, amount);
            info!(id = %goal.id, %amount, "goal contribution");

            let updated = store
                .goal(goal.id)
                .ok_or_else(|| FinanceError::not_found::<GoalId>(goal.id.to_string()))?;
            let applied = updated.current_amount - goal.current_amount;
            if applied < amount {
                println!(
                    "Only {} was needed to reach the target.",
                    settings.format_money(applied)
                );
            }
            print!(
                "{}",
                format_goal_details(&GoalProgress::compute(updated, today()), settings)
            );
            if updated.is_completed() {
                println!("Goal reached!");
            }
        }
    }

    Ok(())
}
