//! CLI library components for the clinic importer.

pub mod logging;
