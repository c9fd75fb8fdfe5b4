//! Bump Navbar - 软件渲染的底部导航栏
//! 支持图标着色过渡、图标缩放、随滑动移动的顶部隆起边界线，以及与分页容器联动

mod bitmap;
mod canvas;
mod color;
mod geometry;
mod paint;
mod path;
pub mod text;

pub use bitmap::{Bitmap, Drawable};
pub use canvas::Canvas;
pub use color::{Color, Hsv};
pub use geometry::{Point, Rect, Size};
pub use paint::{Paint, PaintStyle};
pub use path::{Path, PathCommand};
pub use text::TextRenderer;

// UI 组件系统
pub mod ui;

// 事件系统
pub mod event;

// 配置与资源
pub mod config;
pub mod resources;

pub mod error;
pub use error::NavError;

// 单元测试
#[cfg(test)]
mod tests;
