//! Goal, budget, recurring template and account display

use tabled::Tabled;

use crate::config::Settings;
use crate::models::{Accounts, RecurringTransaction, SavingsGoal};
use crate::reports::BudgetProgress;

use super::{render_table, truncate};

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Meta")]
    name: String,
    #[tabled(rename = "Ahorrado")]
    current: String,
    #[tabled(rename = "Objetivo")]
    target: String,
    #[tabled(rename = "%")]
    percent: String,
    #[tabled(rename = "Prioridad")]
    priority: String,
    #[tabled(rename = "Fecha límite")]
    deadline: String,
}

pub fn format_goal_table(goals: &[SavingsGoal], settings: &Settings) -> String {
    if goals.is_empty() {
        return "No hay metas de ahorro.".to_string();
    }

    let rows = goals
        .iter()
        .map(|goal| GoalRow {
            id: goal.id.to_string(),
            name: truncate(&goal.name, 28),
            current: settings.format_money(goal.current),
            target: settings.format_money(goal.target),
            percent: format!("{:.1}", goal.progress_percent()),
            priority: goal.priority.to_string(),
            deadline: goal
                .deadline
                .map(|d| d.format("%d/%m/%Y").to_string())
                .unwrap_or_default(),
        })
        .collect();

    render_table(rows, &[2, 3, 4])
}

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Categoría")]
    category: String,
    #[tabled(rename = "Gastado")]
    spent: String,
    #[tabled(rename = "Límite")]
    limit: String,
    #[tabled(rename = "Disponible")]
    remaining: String,
    #[tabled(rename = "%")]
    percent: String,
    #[tabled(rename = "")]
    flag: &'static str,
}

/// Budget progress for the month as a table
pub fn format_budget_table(progress: &BudgetProgress, settings: &Settings) -> String {
    if progress.lines.is_empty() {
        return format!("No hay presupuestos para {}.", progress.month);
    }

    let rows = progress
        .lines
        .iter()
        .map(|line| BudgetRow {
            category: line.category.label().to_string(),
            spent: settings.format_money(line.spent),
            limit: settings.format_money(line.limit),
            remaining: settings.format_money(line.remaining),
            percent: format!("{:.1}", line.percentage),
            flag: if line.over_budget { "EXCEDIDO" } else { "" },
        })
        .collect();

    format!(
        "Presupuestos {}\n{}",
        progress.month,
        render_table(rows, &[1, 2, 3, 4])
    )
}

#[derive(Tabled)]
struct RecurringRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Descripción")]
    description: String,
    #[tabled(rename = "Monto")]
    amount: String,
    #[tabled(rename = "Frecuencia")]
    frequency: String,
    #[tabled(rename = "Próxima")]
    next_date: String,
    #[tabled(rename = "Quién")]
    user: String,
    #[tabled(rename = "Activa")]
    active: &'static str,
}

pub fn format_recurring_table(templates: &[RecurringTransaction], settings: &Settings) -> String {
    if templates.is_empty() {
        return "No hay transacciones recurrentes.".to_string();
    }

    let rows = templates
        .iter()
        .map(|t| RecurringRow {
            id: t.id.to_string(),
            description: truncate(&t.description, 28),
            amount: settings.format_money(t.amount),
            frequency: t.frequency.to_string(),
            next_date: t.next_date.format("%d/%m/%Y").to_string(),
            user: settings.participants.name_of(t.user).to_string(),
            active: if t.is_active { "sí" } else { "no" },
        })
        .collect();

    render_table(rows, &[2])
}

/// Sub-account balances with their total
pub fn format_accounts(accounts: &Accounts, settings: &Settings) -> String {
    let lines = [
        ("Efectivo", accounts.cash),
        ("Ahorros", accounts.savings),
        ("Cuenta corriente", accounts.checking),
    ];

    let mut output = String::new();
    for (label, amount) in lines {
        output.push_str(&format!("{:<18} {:>14}\n", label, settings.format_money(amount)));
    }
    output.push_str(&format!("{:-<18} {:->14}\n", "", ""));
    output.push_str(&format!(
        "{:<18} {:>14}\n",
        "Total",
        settings.format_money(accounts.total())
    ));
    output
}
