//! 几何文档数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;
use vgeom_core::geometry::Geometry;

/// 文档元数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// 文档唯一标识
    pub id: Uuid,

    /// 文档标题
    pub title: String,

    /// 作者
    pub author: String,

    /// 创建时间
    pub created_at: DateTime<Utc>,

    /// 最后修改时间
    pub modified_at: DateTime<Utc>,

    /// 文件格式版本
    pub format_version: u32,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: "Untitled".to_string(),
            author: String::new(),
            created_at: Utc::now(),
            modified_at: Utc::now(),
            format_version: crate::native::FORMAT_VERSION,
        }
    }
}

/// 几何文档
///
/// 一组图形及其元数据，可保存为原生格式或JSON结构化形式。
#[derive(Debug)]
pub struct Document {
    /// 元数据
    pub metadata: DocumentMetadata,

    /// 所有图形
    shapes: Vec<Geometry>,

    /// 是否已修改
    modified: bool,

    /// 文件路径（如果已保存）
    file_path: Option<PathBuf>,
}

impl Document {
    /// 创建新文档
    pub fn new() -> Self {
        Self {
            metadata: DocumentMetadata::default(),
            shapes: Vec::new(),
            modified: false,
            file_path: None,
        }
    }

    /// 从文件加载
    pub fn open(path: impl AsRef<Path>) -> Result<Self, crate::FileError> {
        let path = path.as_ref();

        match path.extension().and_then(|e| e.to_str()) {
            Some("vgeo") => crate::native::load(path),
            Some("json") => crate::json::import(path),
            _ => Err(crate::FileError::InvalidFormat(
                "Unknown file extension".to_string(),
            )),
        }
    }

    /// 保存文件
    pub fn save(&mut self) -> Result<(), crate::FileError> {
        if let Some(path) = &self.file_path.clone() {
            self.save_as(path)
        } else {
            Err(crate::FileError::InvalidFormat(
                "No file path set".to_string(),
            ))
        }
    }

    /// 另存为
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<(), crate::FileError> {
        let path = path.as_ref();
        self.metadata.modified_at = Utc::now();

        match path.extension().and_then(|e| e.to_str()) {
            Some("vgeo") => crate::native::save(self, path)?,
            Some("json") => crate::json::export(self, path)?,
            _ => {
                return Err(crate::FileError::InvalidFormat(
                    "Unknown file extension".to_string(),
                ))
            }
        }

        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    /// 添加图形
    pub fn add_shape(&mut self, shape: Geometry) {
        self.shapes.push(shape);
        self.modified = true;
    }

    /// 获取所有图形
    pub fn shapes(&self) -> &[Geometry] {
        &self.shapes
    }

    /// 获取图形列表的可变引用（用于文件加载）
    pub fn shapes_mut(&mut self) -> &mut Vec<Geometry> {
        &mut self.shapes
    }

    /// 图形数量
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// 是否有未保存的修改
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// 设置文件路径
    pub fn set_file_path(&mut self, path: &Path) {
        self.file_path = Some(path.to_path_buf());
    }

    /// 获取文件路径
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
