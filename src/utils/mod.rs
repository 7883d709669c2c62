//! 通用工具
pub mod log_format;

pub use self::log_format::{preview_compact, preview_rules};
