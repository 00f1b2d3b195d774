//! JSON结构化导入/导出
//!
//! 结构化形式只携带定义字段（坐标、半径），派生量不写入文件，
//! 导入后由定义字段重新计算。

use crate::document::{Document, DocumentMetadata};
use crate::error::FileError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use vgeom_core::geometry::Geometry;

/// 文档的JSON文件结构
#[derive(Debug, Serialize, Deserialize)]
struct JsonDocument {
    metadata: DocumentMetadata,
    shapes: Vec<Geometry>,
}

/// 将单个图形导出为JSON值
pub fn shape_to_value(shape: &Geometry) -> Result<Value, FileError> {
    Ok(serde_json::to_value(shape)?)
}

/// 从JSON值导入单个图形
///
/// 输入为 null 视为缺少必需参数；缺少必需键由反序列化报错。
pub fn shape_from_value(value: &Value) -> Result<Geometry, FileError> {
    if value.is_null() {
        return Err(FileError::MissingShape);
    }
    Ok(serde_json::from_value(value.clone())?)
}

/// 导出文档为JSON文件
pub fn export(document: &Document, path: &Path) -> Result<(), FileError> {
    let json_document = JsonDocument {
        metadata: document.metadata.clone(),
        shapes: document.shapes().to_vec(),
    };

    let text = serde_json::to_string_pretty(&json_document)?;
    std::fs::write(path, text)?;

    tracing::debug!(
        "Exported {} shapes to {}",
        document.shape_count(),
        path.display()
    );

    Ok(())
}

/// 从JSON文件导入文档
pub fn import(path: &Path) -> Result<Document, FileError> {
    let text = std::fs::read_to_string(path)?;
    let json_document: JsonDocument = serde_json::from_str(&text)?;

    if json_document.metadata.format_version > crate::native::FORMAT_VERSION {
        return Err(FileError::UnsupportedVersion(format!(
            "File version {} is newer than supported version {}",
            json_document.metadata.format_version,
            crate::native::FORMAT_VERSION
        )));
    }

    let mut document = Document::new();
    document.metadata = json_document.metadata;
    document.shapes_mut().extend(json_document.shapes);
    document.set_file_path(path);

    tracing::debug!(
        "Imported {} shapes from {}",
        document.shape_count(),
        path.display()
    );

    Ok(document)
}
