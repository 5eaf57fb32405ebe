//! Application state: slices, signals and reducers.

pub mod entities;
pub mod mvi;
pub mod table;
pub mod theme;
pub mod user;

mod app;

pub use app::{AppReducer, AppSignal, AppState};
