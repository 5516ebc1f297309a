// Lead Deduplication System - Core Library
// Pure in-memory batch transformation: leads in, survivors + audit out

pub mod changelog;
pub mod dedup;
pub mod index;
pub mod lead;
pub mod validation;

// Re-export commonly used types
pub use changelog::{diff, ChangeLogEntry, FieldChange};
pub use dedup::{DedupResult, DeduplicationEngine};
pub use index::{IdentityIndex, IdentityKey};
pub use lead::{Lead, LeadBatch};
pub use validation::{blank_fields, InvalidLeadReport, INVALID_PREFIX};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
