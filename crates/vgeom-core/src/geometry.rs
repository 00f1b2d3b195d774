//! 几何图元定义
//!
//! 支持的基本图元：
//! - 点 (Point)
//! - 线段 (Line)
//! - 圆 (Circle)
//! - 椭圆 (Ellipse)
//!
//! 所有图元只存储定义字段，派生量（斜率、面积、周长、直径）
//! 由访问器实时计算，与定义字段永不失配。

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// 几何类型枚举
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Point(Point),
    Line(Line),
    Circle(Circle),
    Ellipse(Ellipse),
}

impl Geometry {
    /// 获取几何的类型名称
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::Line(_) => "Line",
            Geometry::Circle(_) => "Circle",
            Geometry::Ellipse(_) => "Ellipse",
        }
    }
}

/// 点
///
/// 整数网格上的坐标对，无任何约束。
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// 原点 (0, 0)
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// 创建新的点
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// 线段
///
/// 由起点和终点定义，斜率为派生量。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    /// 起点
    #[serde(rename = "startPoint")]
    pub start: Point,
    /// 终点
    #[serde(rename = "endPoint")]
    pub end: Point,
}

impl Line {
    /// 创建新的线段
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// 计算斜率
    ///
    /// 任一坐标差为零时返回 0：竖直线按 0 处理，不返回无穷大。
    pub fn slope(&self) -> f64 {
        let dy = f64::from(self.end.y) - f64::from(self.start.y);
        let dx = f64::from(self.end.x) - f64::from(self.start.x);
        if dy == 0.0 || dx == 0.0 {
            0.0
        } else {
            dy / dx
        }
    }
}

/// 圆
///
/// 半径恒为非负值：负数输入按绝对值存储，不会报错。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "CircleData", into = "CircleData")]
pub struct Circle {
    midpoint: Point,
    radius: f64,
}

/// 圆的序列化形式，仅含定义字段
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct CircleData {
    midpoint: Point,
    radius: f64,
}

impl From<CircleData> for Circle {
    fn from(data: CircleData) -> Self {
        Circle::new(data.midpoint, data.radius)
    }
}

impl From<Circle> for CircleData {
    fn from(circle: Circle) -> Self {
        Self {
            midpoint: circle.midpoint,
            radius: circle.radius,
        }
    }
}

impl Circle {
    /// 创建新的圆
    pub fn new(midpoint: Point, radius: f64) -> Self {
        Self {
            midpoint,
            radius: radius.abs(),
        }
    }

    /// 获取圆心
    pub fn midpoint(&self) -> Point {
        self.midpoint
    }

    /// 获取半径
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// 设置新的圆心
    pub fn set_midpoint(&mut self, midpoint: Point) {
        self.midpoint = midpoint;
    }

    /// 设置新的半径（取绝对值）
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.abs();
    }

    /// 计算面积
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// 计算周长
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// 计算直径
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }
}

/// 椭圆
///
/// 由圆心和水平/垂直两个半径定义，两个半径各自恒为非负值。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "EllipseData", into = "EllipseData")]
pub struct Ellipse {
    midpoint: Point,
    horizontal_radius: f64,
    vertical_radius: f64,
}

/// 椭圆的序列化形式，仅含定义字段
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EllipseData {
    midpoint: Point,
    horizontal_radius: f64,
    vertical_radius: f64,
}

impl From<EllipseData> for Ellipse {
    fn from(data: EllipseData) -> Self {
        Ellipse::new(data.midpoint, data.horizontal_radius, data.vertical_radius)
    }
}

impl From<Ellipse> for EllipseData {
    fn from(ellipse: Ellipse) -> Self {
        Self {
            midpoint: ellipse.midpoint,
            horizontal_radius: ellipse.horizontal_radius,
            vertical_radius: ellipse.vertical_radius,
        }
    }
}

impl Ellipse {
    /// 创建新的椭圆
    pub fn new(midpoint: Point, horizontal_radius: f64, vertical_radius: f64) -> Self {
        Self {
            midpoint,
            horizontal_radius: horizontal_radius.abs(),
            vertical_radius: vertical_radius.abs(),
        }
    }

    /// 获取圆心
    pub fn midpoint(&self) -> Point {
        self.midpoint
    }

    /// 获取水平半径
    pub fn horizontal_radius(&self) -> f64 {
        self.horizontal_radius
    }

    /// 获取垂直半径
    pub fn vertical_radius(&self) -> f64 {
        self.vertical_radius
    }

    /// 设置新的圆心
    pub fn set_midpoint(&mut self, midpoint: Point) {
        self.midpoint = midpoint;
    }

    /// 设置新的水平半径（取绝对值）
    pub fn set_horizontal_radius(&mut self, horizontal_radius: f64) {
        self.horizontal_radius = horizontal_radius.abs();
    }

    /// 设置新的垂直半径（取绝对值）
    pub fn set_vertical_radius(&mut self, vertical_radius: f64) {
        self.vertical_radius = vertical_radius.abs();
    }

    /// 计算面积
    pub fn area(&self) -> f64 {
        PI * self.horizontal_radius * self.vertical_radius
    }

    /// 计算周长（近似值，使用 Ramanujan 第二公式）
    pub fn circumference(&self) -> f64 {
        let a = self.horizontal_radius;
        let b = self.vertical_radius;
        let h = (b - a).powi(2) / (b + a).powi(2);
        PI * (b + a) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()))
    }

    /// 计算水平直径
    pub fn horizontal_diameter(&self) -> f64 {
        2.0 * self.horizontal_radius
    }

    /// 计算垂直直径
    pub fn vertical_diameter(&self) -> f64 {
        2.0 * self.vertical_radius
    }
}
