//! Goal display formatting

use tabled::Tabled;

use crate::config::Settings;
use crate::services::{GoalProgress, GoalTotals};

use super::{progress_bar, render_table, truncate};

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Goal")]
    title: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
}

fn deadline_label(p: &GoalProgress<'_>) -> String {
    if p.completed {
        "done".to_string()
    } else if p.days_left < 0 {
        "overdue".to_string()
    } else {
        format!("{} days", p.days_left)
    }
}

pub fn format_goal_list(goals: &[GoalProgress<'_>], totals: &GoalTotals, settings: &Settings) -> String {
    let rows: Vec<GoalRow> = goals
        .iter()
        .map(|p| GoalRow {
            id: p.goal.id.to_string(),
            title: truncate(&p.goal.title, 24),
            saved: settings.format_money(p.goal.current_amount),
            target: settings.format_money(p.goal.target_amount),
            progress: format!("{} {:>3.0}%", progress_bar(p.percentage, 10), p.percentage.min(100.0)),
            deadline: deadline_label(p),
        })
        .collect();

    let mut output = render_table(rows, "No goals yet.");
    if totals.count > 0 {
        output.push_str(&format!(
            "\nSaved {} of {} ({:.0}%), {} of {} goals completed\n",
            settings.format_money(totals.total_saved),
            settings.format_money(totals.total_target),
            totals.percentage(),
            totals.completed,
            totals.count,
        ));
    }
    output
}

pub fn format_goal_details(progress: &GoalProgress<'_>, settings: &Settings) -> String {
    let goal = progress.goal;
    let mut output = String::new();

    output.push_str(&format!("Goal:         {} ({})\n", goal.title, goal.id));
    output.push_str(&format!(
        "Saved:        {} of {}\n",
        settings.format_money(goal.current_amount),
        settings.format_money(goal.target_amount)
    ));
    output.push_str(&format!(
        "Progress:     {} {:.1}%\n",
        progress_bar(progress.percentage, 20),
        progress.percentage
    ));
    output.push_str(&format!("Remaining:    {}\n", settings.format_money(progress.remaining)));
    output.push_str(&format!(
        "Deadline:     {} ({})\n",
        settings.format_date(goal.deadline),
        deadline_label(progress)
    ));
    if !progress.completed {
        output.push_str(&format!(
            "Per day:      {}\n",
            settings.format_money(progress.daily_needed)
        ));
    }
    if let Some(color) = &goal.color {
        output.push_str(&format!("Color:        {}\n", color));
    }

    output
}
