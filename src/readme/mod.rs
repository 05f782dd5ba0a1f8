// src/readme/mod.rs
// =============================================================================
// This module contains all README document manipulation logic.
//
// Submodules:
// - markers: Replaces the body of named marker-delimited regions
// - stats: Extracts previously-rendered stats and formats new ones
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

mod markers;
mod stats;

// Re-export public items from submodules
pub use markers::replace_chunk;
pub use stats::{extract_current_stats, ProfileStats};
