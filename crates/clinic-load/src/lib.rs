//! Import pipeline: per-file loaders, cross-reference lookups, payment
//! method normalization and counter derivation.
//!
//! The pipeline is strictly sequential. Each loader reads one source file
//! fully into memory, sanitizes and casts every row, and inserts rows that
//! survive; a bad row is skipped without aborting the batch and only the
//! aggregate inserted count is reported.

pub mod counters;
pub mod loaders;
pub mod lookup;
pub mod method;
pub mod pipeline;

pub use counters::update_counters;
pub use method::normalize_payment_method;
pub use pipeline::{ImportOutcome, LoaderCount, run_import};
