//! Faculty activity scoring: turns a bundle of teaching, research, administrative and
//! outreach records into a capped, weighted performance report.

pub mod config;
pub mod error;
pub mod performance;
pub mod telemetry;
