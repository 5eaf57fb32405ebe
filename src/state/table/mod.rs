mod reducer;
mod signal;
mod state;

pub use reducer::TableReducer;
pub use signal::TableSignal;
pub use state::{TableState, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
