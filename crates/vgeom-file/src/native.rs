//! VGeom原生文件格式（.vgeo）
//!
//! 基于SQLite的单文件格式，整库替换式保存。
//! 图形以定义字段的JSON字节存入BLOB列，加载时经由定义字段
//! 反序列化，派生量随之重新计算，文件中不存在可信的派生量。

use crate::document::Document;
use crate::error::FileError;
use rusqlite::{params, Connection};
use std::path::Path;
use vgeom_core::geometry::Geometry;

/// 当前文件格式版本
pub(crate) const FORMAT_VERSION: u32 = 1;

/// 创建数据库架构
fn create_schema(conn: &Connection) -> Result<(), FileError> {
    conn.execute_batch(
        r#"
        -- 元数据表
        CREATE TABLE IF NOT EXISTS metadata (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );

        -- 图形表
        CREATE TABLE IF NOT EXISTS shapes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            kind TEXT NOT NULL,
            data BLOB NOT NULL
        );

        -- 创建索引
        CREATE INDEX IF NOT EXISTS idx_shapes_kind ON shapes(kind);
        "#,
    )?;

    Ok(())
}

/// 保存文档到文件
pub fn save(document: &Document, path: &Path) -> Result<(), FileError> {
    let conn = Connection::open(path)?;

    // 创建架构
    create_schema(&conn)?;

    // 开始事务
    conn.execute("BEGIN TRANSACTION", [])?;

    // 保存元数据
    save_metadata(&conn, document)?;

    // 清空并保存图形
    conn.execute("DELETE FROM shapes", [])?;
    for shape in document.shapes() {
        save_shape(&conn, shape)?;
    }

    // 提交事务
    conn.execute("COMMIT", [])?;

    // 优化数据库
    conn.execute("VACUUM", [])?;

    tracing::debug!(
        "Saved {} shapes to {}",
        document.shape_count(),
        path.display()
    );

    Ok(())
}

fn save_metadata(conn: &Connection, document: &Document) -> Result<(), FileError> {
    let json = serde_json::to_string(&document.metadata)?;
    conn.execute(
        "INSERT OR REPLACE INTO metadata (key, value) VALUES ('document', ?)",
        params![json],
    )?;
    conn.execute(
        "INSERT OR REPLACE INTO metadata (key, value) VALUES ('format_version', ?)",
        params![FORMAT_VERSION.to_string()],
    )?;
    Ok(())
}

fn save_shape(conn: &Connection, shape: &Geometry) -> Result<(), FileError> {
    let data = serde_json::to_vec(shape)?;
    conn.execute(
        "INSERT INTO shapes (kind, data) VALUES (?, ?)",
        params![shape.type_name(), &data],
    )?;
    Ok(())
}

/// 从文件加载文档
pub fn load(path: &Path) -> Result<Document, FileError> {
    let conn = Connection::open(path)?;

    // 检查格式版本
    let version: String = conn.query_row(
        "SELECT value FROM metadata WHERE key = 'format_version'",
        [],
        |row| row.get(0),
    )?;

    let version: u32 = version
        .parse()
        .map_err(|_| FileError::InvalidFormat("Invalid version".to_string()))?;

    if version > FORMAT_VERSION {
        return Err(FileError::UnsupportedVersion(format!(
            "File version {} is newer than supported version {}",
            version, FORMAT_VERSION
        )));
    }

    let mut document = Document::new();

    // 加载元数据
    let metadata_json: String = conn.query_row(
        "SELECT value FROM metadata WHERE key = 'document'",
        [],
        |row| row.get(0),
    )?;
    document.metadata = serde_json::from_str(&metadata_json)?;

    // 加载图形
    let mut stmt = conn.prepare("SELECT data FROM shapes ORDER BY id")?;
    let shapes: Vec<Geometry> = stmt
        .query_map([], |row| {
            let data: Vec<u8> = row.get(0)?;
            Ok(data)
        })?
        .filter_map(|r| r.ok())
        .filter_map(|data| serde_json::from_slice(&data).ok())
        .collect();
    document.shapes_mut().extend(shapes);

    document.set_file_path(path);

    tracing::debug!(
        "Loaded {} shapes from {}",
        document.shape_count(),
        path.display()
    );

    Ok(document)
}
