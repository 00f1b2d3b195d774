//! VGeom 文件格式处理
//!
//! 支持：
//! - `.vgeo` 原生格式（基于SQLite）
//! - `.json` 结构化导入/导出

pub mod document;
pub mod error;
pub mod json;
pub mod native;

pub use document::Document;
pub use error::FileError;
