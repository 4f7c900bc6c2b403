//! Items used throughout the crate.
pub use log::{debug, trace, warn};
