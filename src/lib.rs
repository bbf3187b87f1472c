pub mod config;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod reconciler;
pub mod types;

// 导出主要 API
pub use config::FormatConfig;
pub use error::{FormatError, Result};
pub use formatter::MoneyFormatter;
pub use parser::number_value;
pub use types::*;
