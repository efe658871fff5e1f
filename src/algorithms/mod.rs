//! The stages of the diff engine.
//!
//! A diff is computed in three steps, each available on its own:
//!
//! * [`myers::search`] finds a shortest edit path and returns the matched
//!   index pairs (a longest common subsequence).
//! * [`runs::encode`] turns the matches into raw unchanged, deleted and
//!   inserted runs.
//! * [`modify::merge`] folds directly adjacent deleted and inserted runs
//!   into modified runs.
//!
//! Most users want [`diff`](crate::diff) which runs all three.

pub mod modify;
pub mod myers;
pub mod runs;

pub use self::modify::merge;
pub use self::myers::{search, EditPath};
pub use self::runs::encode;
