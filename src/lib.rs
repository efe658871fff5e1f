//! This crate computes minimal edit scripts between two sequences.  It never
//! looks at the elements themselves: all it needs is the length of each
//! sequence and a way to tell whether an element of the first sequence is
//! the same as an element of the second one (see [`Sequences`]).
//!
//! The result is an ordered list of [`DiffOperation`]s.  Each one is a run
//! of unchanged, deleted, inserted or modified elements and together they
//! walk both sequences from start to end without gaps.
//!
//! ```rust
//! use editscript::{diff_slices, DiffOperation};
//!
//! let ops = diff_slices(&["a", "b", "c", "d"], &["a", "d"]);
//! assert_eq!(
//!     ops,
//!     vec![
//!         DiffOperation::unchanged(0, 0, 1),
//!         DiffOperation::deleted(1, 1, 2),
//!         DiffOperation::unchanged(3, 1, 1),
//!     ]
//! );
//! ```
//!
//! The crate is split into two levels:
//!
//! * [`algorithms`]: the individual stages (edit graph search, run-length
//!   encoding, folding of replacements into modified runs).
//! * the top level functions and [`DiffConfig`] which run all of them.
//!
//! Diffs are traced through the [`tracing`](https://docs.rs/tracing) crate
//! at trace level.
pub mod algorithms;
mod common;
mod sequences;
mod types;
pub mod verify;

pub use self::common::*;
pub use self::sequences::*;
pub use self::types::*;
