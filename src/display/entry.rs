//! Entry display formatting

use tabled::Tabled;

use crate::config::Settings;
use crate::models::Entry;

use super::{render_table, truncate};

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Fecha")]
    date: String,
    #[tabled(rename = "Descripción")]
    description: String,
    #[tabled(rename = "Monto")]
    amount: String,
    #[tabled(rename = "Categoría")]
    category: String,
    #[tabled(rename = "Quién")]
    user: String,
}

/// Entries as a table, in the order given
pub fn format_entry_table(entries: &[Entry], settings: &Settings) -> String {
    if entries.is_empty() {
        return "No hay movimientos.".to_string();
    }

    let rows = entries
        .iter()
        .map(|entry| EntryRow {
            id: entry.id.to_string(),
            date: entry.date.clone(),
            description: truncate(&entry.description, 32),
            amount: settings.format_money(entry.amount),
            category: entry.category.label().to_string(),
            user: settings.participants.name_of(entry.user).to_string(),
        })
        .collect();

    render_table(rows, &[3])
}

pub fn format_entry_details(entry: &Entry, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Movimiento:  {}\n", entry.id));
    output.push_str(&format!("Descripción: {}\n", entry.description));
    output.push_str(&format!("Monto:       {}\n", settings.format_money(entry.amount)));
    output.push_str(&format!("Categoría:   {}\n", entry.category.label()));
    output.push_str(&format!("Fecha:       {}\n", entry.date));
    output.push_str(&format!(
        "Quién:       {}\n",
        settings.participants.name_of(entry.user)
    ));

    if let Some(method) = &entry.payment_method {
        output.push_str(&format!("Pago:        {}\n", method.label()));
    }
    if entry.is_recurring == Some(true) {
        output.push_str("Recurrente:  sí\n");
    }
    if let Some(notes) = entry.notes.as_deref().filter(|n| !n.is_empty()) {
        output.push_str(&format!("Notas:       {}\n", notes));
    }

    output
}
