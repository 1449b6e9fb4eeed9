//! Batch hostname resolution pipeline
//!
//! Reads a tabular device list, builds a safe search query per device, asks
//! the device search endpoint for a match, classifies the outcome and
//! accumulates an augmented output table. Sequential by design, with a fixed
//! pacing delay between calls.

pub mod outcome;
pub mod pacer;
pub mod query;
pub mod resolver;
pub mod runner;
pub mod table;

pub use outcome::ResolutionOutcome;
pub use pacer::{FixedDelayPacer, NoopPacer, Pacer};
pub use query::{HostQuery, QueryError};
pub use resolver::{AssetResolver, ResolveHost};
pub use runner::BatchRunner;
pub use table::{DeviceRecord, ResultTable, read_devices, write_results};
