//! Region fill algorithms for the paint bucket tool.
//!
//! - **Flood fill**: exact-color, 4-connected region replacement from a seed
//!   pixel, returning a new buffer and leaving the input untouched.

pub mod flood_fill;

pub use flood_fill::{flood_fill, flood_fill_detailed, flood_fill_hex, flood_fill_rgba, FillOutcome};
