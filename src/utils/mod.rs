//! 工具模块：时间戳解析、按语言排序
pub mod collation;
pub mod timestamp;

pub use self::collation::TextOrder;
pub use self::timestamp::{epoch_millis, parse_iso8601};
