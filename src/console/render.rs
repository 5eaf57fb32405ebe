//! Plain-text rendering of the table view.

use std::io::{self, Write};

use crate::model::Entity;
use crate::state::AppState;
use crate::validation::ValidationReport;
use crate::view::{Column, SortDirection, TableView};

fn cell(entity: &Entity, column: Column) -> String {
    match column {
        Column::Id => entity.id.to_string(),
        Column::FirstName => entity.first_name.clone(),
        Column::LastName => entity.last_name.clone(),
        Column::Email => entity.email.clone(),
        Column::Age => entity.age.to_string(),
        Column::HireDate => entity.hire_date.format("%Y-%m-%d").to_string(),
    }
}

fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        format!("{:<width$}", text, width = width)
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

fn summary_cell(view: &TableView, column: Column) -> String {
    match column {
        Column::FirstName => format!("Total: {}", view.summary.count),
        Column::Age => view
            .summary
            .average_age
            .map(|avg| format!("{:.1}", avg))
            .unwrap_or_else(|| "-".to_string()),
        Column::HireDate => view
            .summary
            .earliest_hire
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string()),
        _ => String::new(),
    }
}

pub fn table<W: Write>(out: &mut W, view: &TableView, state: &AppState) -> io::Result<()> {
    let entities = &state.entities;
    let table = &state.table;

    if let Some(error) = &entities.error {
        writeln!(out, "! {} (dismiss to clear)", error)?;
    }
    if entities.loading {
        writeln!(out, "Loading…")?;
    } else if entities.is_busy() {
        writeln!(out, "Saving…")?;
    }

    let mut title = format!("Entities [{} theme]", state.theme.theme.as_str());
    if !entities.search_term.is_empty() {
        title.push_str(&format!("  search: \"{}\"", entities.search_term));
    }
    if table.filters.is_active() {
        title.push_str("  (filtered)");
    }
    if !table.selected.is_empty() {
        title.push_str(&format!("  {} selected", table.selected.len()));
    }
    writeln!(out, "{}", title)?;

    let mut header = String::from("   ");
    for column in &view.columns {
        let mut label = column.label().to_string();
        if table.sort.column == *column {
            label.push(match table.sort.direction {
                SortDirection::Asc => '↑',
                SortDirection::Desc => '↓',
            });
        }
        header.push_str(&fit(&label, column.width()));
        header.push(' ');
    }
    writeln!(out, "{}", header.trim_end())?;

    if view.rows.is_empty() {
        writeln!(out, "   (no rows)")?;
    }
    for entity in &view.rows {
        let marker = if entities.is_deleting(entity.id) {
            '~'
        } else if table.is_selected(entity.id) {
            '*'
        } else {
            ' '
        };
        let mut line = format!("{}  ", marker);
        for column in &view.columns {
            line.push_str(&fit(&cell(entity, *column), column.width()));
            line.push(' ');
        }
        writeln!(out, "{}", line.trim_end())?;
    }

    let mut footer = String::from("   ");
    for column in &view.columns {
        footer.push_str(&fit(&summary_cell(view, *column), column.width()));
        footer.push(' ');
    }
    writeln!(out, "{}", footer.trim_end())?;
    writeln!(
        out,
        "page {}/{} · {} per page · {} matching",
        view.page + 1,
        view.page_count,
        view.page_size,
        view.total
    )
}

pub fn entity<W: Write>(out: &mut W, entity: &Entity) -> io::Result<()> {
    for column in Column::ALL {
        writeln!(out, "{:>10}: {}", column.label(), cell(entity, column))?;
    }
    Ok(())
}

pub fn report<W: Write>(out: &mut W, report: &ValidationReport) -> io::Result<()> {
    for error in report.errors() {
        writeln!(out, "  {}: {}", error.field.as_str(), error.message)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_pads_and_truncates() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 4), "abc…");
    }
}
