//! VGeom 核心几何图元
//!
//! 提供2D整数网格上的基本几何图元及其派生量计算。
//!
//! # 架构设计
//!
//! 每个图元只存储定义字段（坐标、半径），派生量（面积、周长、
//! 直径、斜率）一律由定义字段实时计算：
//! - 定义字段是唯一的权威状态
//! - 派生量不可直接设置，也不会从序列化数据中恢复
//!
//! # 示例
//!
//! ```rust
//! use vgeom_core::prelude::*;
//!
//! // 创建一个圆
//! let circle = Circle::new(Point::new(0, 0), 10.0);
//!
//! // 读取派生量
//! println!("Area: {}", circle.area());
//! ```

pub mod geometry;
pub mod math;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::geometry::{Circle, Ellipse, Geometry, Line, Point};
    pub use crate::math::{approx_eq, EPSILON};
}
