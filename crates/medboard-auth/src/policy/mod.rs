//! Record visibility and permission gates.
//!
//! - [`visibility`]: the `RecordKind × Role` table
//! - [`filter`]: applies the table to record slices for one user
//! - [`decision`]: allow/deny gates in front of dashboard pages

pub mod decision;
pub mod filter;
pub mod visibility;

pub use decision::{AccessDecision, DenyReason, require_permission};
pub use filter::{AccessFilter, RecordSet};
pub use visibility::{Visibility, visibility_for};
