//! Label 组件 - 单行文本

use super::component::{Component, ComponentId};
use super::measure::{LayoutParams, MeasureSpec};
use crate::text::{FixedMetrics, TextMeasure, TextRenderer};
use crate::{Canvas, Color, Paint, Rect, Size};

/// Label - 导航项的标题
pub struct Label {
    id: ComponentId,
    params: LayoutParams,
    measured: Size,
    frame: Rect,
    content: String,
    font_size: f32,
    text_color: Color,
}

impl Label {
    pub fn new(content: &str) -> Self {
        Self {
            id: ComponentId::new(),
            params: LayoutParams::wrap_content(),
            measured: Size::default(),
            frame: Rect::default(),
            content: content.to_string(),
            font_size: 12.0,
            text_color: Color::BLACK,
        }
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }
}

impl Component for Label {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn layout_params(&self) -> LayoutParams {
        self.params
    }

    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec, text: &dyn TextMeasure) {
        let desired_w = text.text_width(&self.content, self.font_size).ceil();
        let desired_h = text.line_height(self.font_size).ceil();
        self.measured = Size::new(width.resolve(desired_w), height.resolve(desired_h));
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn render(&self, canvas: &mut Canvas, text: Option<&TextRenderer>) {
        let paint = Paint::fill(self.text_color);

        if let Some(renderer) = text {
            let width = renderer.text_width(&self.content, self.font_size);
            let x = self.frame.x + (self.frame.width - width) / 2.0;
            let baseline = self.frame.y + renderer.ascent(self.font_size);
            renderer.draw_text(canvas, &self.content, x, baseline, self.font_size, &paint);
            return;
        }

        // 没有字体时，每个字符画一个占位块
        let char_width = self.font_size * FixedMetrics::CHAR_WIDTH;
        let total_width = self.content.chars().count() as f32 * char_width;
        let start_x = self.frame.x + (self.frame.width - total_width) / 2.0;
        let start_y = self.frame.y + (self.frame.height - self.font_size) / 2.0;
        for i in 0..self.content.chars().count() {
            let x = start_x + i as f32 * char_width;
            let char_rect = Rect::new(x + 1.0, start_y + 2.0, char_width - 2.0, self.font_size - 4.0);
            canvas.draw_rect(&char_rect, &paint);
        }
    }

    fn type_name(&self) -> &'static str {
        "Label"
    }
}
