//! clampkit constrains values, and sequences of values, to an inclusive range.
//!
//! Every operation is parameterized over an ordering predicate ([`Compare`]) that defaults
//! to natural order ([`Less`]).
//!
//! # Operations
//!
//! - **Scalar**: [`clamp`] / [`clamp_by`] borrow the value and both bounds and return a
//!   reference to one of them. Nothing is cloned, so non-`Clone` and unsized types work.
//! - **Range**: [`clamp_range`] / [`clamp_range_by`] write clamped copies of an input slice
//!   into an output slice and return the unwritten tail; [`clamp_in_place`] handles the
//!   aliased case; [`clamp_iter`] is a lazy, borrowing adapter; [`par_clamp_in_place_by`]
//!   spreads the work over rayon.
//! - **Checked**: `try_*` variants report [`ClampError`] instead of asserting.
//!
//! # Precondition policy
//!
//! `[lo, hi]` must be well-formed: `hi` must not order strictly before `lo`. The unchecked
//! operations verify this with `debug_assert!` only, so release builds pay nothing for it
//! and a malformed range produces an unspecified choice among the inputs. There is no
//! undefined behavior either way: `unsafe` is forbidden in this crate.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod algo;
mod foundation;

/// JSON-facing numeric clamp configuration.
pub mod config;

pub use algo::clamp::{clamp, clamp_by, is_well_formed, try_clamp, try_clamp_by};
pub use algo::range::{
    ClampIter, clamp_in_place, clamp_in_place_by, clamp_iter, clamp_iter_by, clamp_range,
    clamp_range_by, par_clamp_in_place_by, try_clamp_in_place_by, try_clamp_range_by,
};
pub use config::{ClampConfig, Order};
pub use foundation::compare::{ByKey, Compare, Greater, Less, Reversed, by_key, reversed};
pub use foundation::error::{ClampError, ClampResult};
