mod reducer;
mod signal;
mod state;

pub use reducer::EntitiesReducer;
pub use signal::EntitiesSignal;
pub use state::EntitiesState;
