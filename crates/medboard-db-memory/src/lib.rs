//! In-memory clinical record store for medboard.
//!
//! The dashboard renders from a fixed data set: a JSON document holding the
//! clinical records and the account list. [`ClinicalStore`] loads and
//! validates that document and hands out borrowed views for the access
//! filter.
//!
//! # Example
//!
//! ```
//! use medboard_auth::AccessFilter;
//! use medboard_db_memory::ClinicalStore;
//!
//! let store = ClinicalStore::demo()?;
//! let filter = AccessFilter::new(None, store.record_set());
//! assert!(filter.filter_patients_by_user().is_empty());
//! # Ok::<(), medboard_core::CoreError>(())
//! ```

pub mod dataset;
pub mod store;

pub use dataset::Dataset;
pub use store::ClinicalStore;
