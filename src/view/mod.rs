//! Derived table view: columns, query controls and the pure pipeline.

mod column;
mod memo;
mod pipeline;
mod query;

pub use column::{Column, ColumnType};
pub use memo::MemoizedView;
pub use pipeline::{
    derive_view, filter_entities, page_count, paginate, sort_entities, summarize, Summary,
    TableView,
};
pub use query::{matches_search, FilterChange, Filters, Sort, SortDirection};
