//! Filter → sort → paginate over the entity snapshot.
//!
//! Every function here is pure. The view is recomputed from
//! (entities, search term, filters, sort, page, page size) and is never
//! mutated on its own.

use std::cmp::Ordering;

use chrono::NaiveDate;

use super::column::{Column, ColumnType};
use super::query::{matches_search, Filters, Sort, SortDirection};
use crate::model::Entity;
use crate::state::AppState;

/// Aggregate row over the filtered, unpaginated set.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub average_age: Option<f64>,
    pub earliest_hire: Option<NaiveDate>,
}

/// Everything the table needs to render one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub rows: Vec<Entity>,
    pub columns: Vec<Column>,
    /// Rows matching search and filters, before pagination.
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub summary: Summary,
}

pub fn filter_entities<'a>(entities: &'a [Entity], search_term: &str, filters: &Filters) -> Vec<&'a Entity> {
    entities
        .iter()
        .filter(|e| matches_search(e, search_term))
        .filter(|e| filters.matches(e))
        .collect()
}

fn compare(a: &Entity, b: &Entity, column: Column) -> Ordering {
    match (column.kind(), column) {
        (ColumnType::Number, Column::Id) => a.id.cmp(&b.id),
        (ColumnType::Number, _) => a.age.cmp(&b.age),
        (ColumnType::Date, _) => a.hire_date.cmp(&b.hire_date),
        (ColumnType::String, Column::FirstName) => a.first_name.cmp(&b.first_name),
        (ColumnType::String, Column::LastName) => a.last_name.cmp(&b.last_name),
        (ColumnType::String, _) => a.email.cmp(&b.email),
    }
}

/// Stable sort; rows with equal keys keep their relative order.
pub fn sort_entities(rows: &mut [&Entity], sort: Sort) {
    rows.sort_by(|a, b| {
        let ordering = compare(a, b, sort.column);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Number of pages for `total` rows; an empty set still has one page.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Window `[page * page_size, (page + 1) * page_size)`; empty past the end.
pub fn paginate<T: Clone>(rows: &[T], page: usize, page_size: usize) -> Vec<T> {
    let page_size = page_size.max(1);
    let start = page.saturating_mul(page_size);
    if start >= rows.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(rows.len());
    rows[start..end].to_vec()
}

pub fn summarize(rows: &[&Entity]) -> Summary {
    let count = rows.len();
    let average_age = (count > 0)
        .then(|| rows.iter().map(|e| f64::from(e.age)).sum::<f64>() / count as f64);
    let earliest_hire = rows.iter().map(|e| e.hire_date).min();
    Summary {
        count,
        average_age,
        earliest_hire,
    }
}

/// Compute the visible table from raw state.
pub fn derive_view(state: &AppState) -> TableView {
    let table = &state.table;
    let mut rows = filter_entities(
        &state.entities.entities,
        &state.entities.search_term,
        &table.filters,
    );
    sort_entities(&mut rows, table.sort);

    let summary = summarize(&rows);
    let page_rows = paginate(&rows, table.page, table.page_size)
        .into_iter()
        .cloned()
        .collect();

    TableView {
        rows: page_rows,
        columns: table.visible_columns.clone(),
        total: rows.len(),
        page: table.page,
        page_size: table.page_size,
        page_count: page_count(rows.len(), table.page_size),
        summary,
    }
}
