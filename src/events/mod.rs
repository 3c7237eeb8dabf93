// src/events/mod.rs

// Event-level orchestration that composes systems over one catalog entry.
// Feature-gated so callers that only want the allocator stay lean.

#[cfg(feature = "event-calculator")]
pub mod calculator;

#[cfg(feature = "event-calculator")]
pub use calculator::*;
