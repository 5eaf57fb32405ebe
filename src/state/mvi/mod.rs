//! Unidirectional data-flow primitives.
//!
//! ```text
//! action creator ──→ Signal ──→ Reducer ──→ Slice ──→ derived view
//!       ↑                                                  │
//!       └────────────────── console input ─────────────────┘
//! ```

mod reducer;
mod signal;
mod slice;

pub use reducer::Reducer;
pub use signal::Signal;
pub use slice::Slice;
