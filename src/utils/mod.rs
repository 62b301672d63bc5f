//! Utils module providing shared datatypes for extract_amplicon
//! Includes the amplicon interval, BED records, and overlap traits

pub mod amplicon_interval;
pub mod bed_record;
pub mod overlap;

// Re-export public utility types and functions to expose the utils API
pub use amplicon_interval::*;
pub use bed_record::*;
pub use overlap::*;
