//! 画笔：填充或描边

use crate::Color;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PaintStyle {
    #[default]
    Fill,
    Stroke,
}

/// 画笔
///
/// 导航栏只用到两种：背景和文字用填充，顶部边界线用描边。
/// 路径和线段总是抗锯齿。
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub style: PaintStyle,
    /// 描边宽度，填充时忽略
    pub stroke_width: f32,
}

impl Paint {
    /// 纯色填充
    pub fn fill(color: Color) -> Self {
        Self { color, style: PaintStyle::Fill, stroke_width: 1.0 }
    }

    /// 指定宽度的描边
    pub fn stroke(color: Color, width: f32) -> Self {
        Self { color, style: PaintStyle::Stroke, stroke_width: width }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::fill(Color::BLACK)
    }
}
