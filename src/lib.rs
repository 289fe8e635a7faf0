//! Converts NRC region/township tables into grouped SQL INSERT statements.
//!
//! ```
//! let input = "Region\tRegionMM\tCode\tTownship\tPattern\tTownshipMM\n\
//!              Shan\tရှမ်း\t13\tTaunggyi\tTaKaNa\tတောင်ကြီး";
//! let sql = nrc_convert::convert_to_sql(input);
//! assert!(sql.starts_with("-- Shan State\n"));
//! assert!(sql.contains("'NRC_SHAN_TOWNSHIP'"));
//! ```

pub mod checks;
pub mod config;
pub mod converter;
pub mod error;

pub use config::ConverterConfig;
pub use converter::{convert_to_sql, convert_with, Conversion, Converter};
pub use error::{ConvertError, ConvertResult};
