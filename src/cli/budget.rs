//! Budget CLI commands

use clap::Subcommand;
use tracing::info;

use crate::config::Settings;
use crate::display::{format_budget_list, format_budget_overview};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{
    is_default_expense_category, BudgetId, BudgetUpdate, FinanceSnapshot, NewBudget,
};
use crate::services::BudgetService;
use crate::store::FinanceContext;

use super::{invalid, parse_money};

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set a spending limit for a category
    Add {
        /// Expense category name
        category: String,
        /// Spending limit
        limit: String,
    },
    /// Show every budget with its spending
    List,
    /// Edit a budget
    Edit {
        /// Budget ID prefix or category name
        id: String,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        limit: Option<String>,
    },
    /// Delete a budget
    Delete {
        /// Budget ID prefix or category name
        id: String,
    },
}

fn ensure_category_free(
    snapshot: &FinanceSnapshot,
    category: &str,
    except: Option<BudgetId>,
) -> FinanceResult<()> {
    let taken = snapshot
        .budgets
        .iter()
        .find(|b| b.category.eq_ignore_ascii_case(category) && Some(b.id) != except);
    match taken {
        Some(existing) => Err(FinanceError::Validation(format!(
            "Category '{}' already has a budget ({})",
            existing.category, existing.id
        ))),
        None => Ok(()),
    }
}

/// Handle a budget command
pub fn handle_budget_command(
    ctx: &mut FinanceContext,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FinanceResult<()> {
    match cmd {
        BudgetCommands::Add { category, limit } => {
            let input = NewBudget::new(category.trim(), parse_money(&limit)?);
            input.validate().map_err(invalid)?;

            let store = ctx.store_mut()?;
            let snapshot = store.snapshot();
            ensure_category_free(&snapshot, &input.category, None)?;

            if !is_default_expense_category(&input.category) {
                println!(
                    "Note: '{}' is not one of the default expense categories.",
                    input.category
                );
            }

            let category = input.category.clone();
            let limit = input.limit;
            let id = store.add_budget(input);
            info!(%id, %category, "budget added");
            println!(
                "Created budget {} for {}: limit {}",
                id,
                category,
                settings.format_money(limit)
            );
        }

        BudgetCommands::List => {
            let snapshot = ctx.store()?.snapshot();
            let service =
                BudgetService::new(&snapshot).with_warning_percent(settings.budget_warning_percent);
            print!(
                "{}",
                format_budget_overview(
                    &service.overview(),
                    &service.categories_without_budget(),
                    settings
                )
            );
        }

        BudgetCommands::Edit {
            id,
            category,
            limit,
        } => {
            let store = ctx.store_mut()?;
            let snapshot = store.snapshot();
            let service =
                BudgetService::new(&snapshot).with_warning_percent(settings.budget_warning_percent);
            let existing = service.find(&id)?;

            let update = BudgetUpdate {
                category: category.map(|c| c.trim().to_string()),
                limit: limit.as_deref().map(parse_money).transpose()?,
                current_amount: None,
            };
            if update.is_empty() {
                println!("Nothing to change.");
                return Ok(());
            }

            let mut edited = existing.clone();
            update.apply(&mut edited);
            edited.validate().map_err(invalid)?;
            ensure_category_free(&snapshot, &edited.category, Some(existing.id))?;

            store.update_budget(existing.id, update);
            info!(id = %existing.id, "budget updated");

            let updated = store.snapshot();
            let progress: Vec<_> = BudgetService::new(&updated)
                .with_warning_percent(settings.budget_warning_percent)
                .progress_all()
                .into_iter()
                .filter(|p| p.budget.id == existing.id)
                .collect();
            print!("{}", format_budget_list(&progress, settings));
        }

        BudgetCommands::Delete { id } => {
            let store = ctx.store_mut()?;
            let snapshot = store.snapshot();
            let budget = BudgetService::new(&snapshot).find(&id)?;

            store.delete_budget(budget.id);
            info!(id = %budget.id, "budget deleted");
            println!("Deleted budget for {} ({})", budget.category, budget.id);
        }
    }

    Ok(())
}
