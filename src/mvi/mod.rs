//! Model-View-Intent primitives.
//!
//! Resource managers never mutate their state directly. Every change is
//! expressed as an intent and applied by a pure reducer, so the transitions
//! can be tested without a network or a terminal.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ViewState;
