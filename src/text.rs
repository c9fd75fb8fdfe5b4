//! 文本渲染模块 - fontdue 字形光栅化与文本测量

use crate::error::NavError;
use crate::{Canvas, Paint};
use fontdue::{Font, FontSettings, Metrics};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

/// 文本测量接口，布局阶段使用
pub trait TextMeasure {
    /// 单行文本宽度
    fn text_width(&self, text: &str, size: f32) -> f32;
    /// 行高
    fn line_height(&self, size: f32) -> f32;
}

/// 等宽近似测量，没有可用字体时作为回退
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedMetrics;

impl FixedMetrics {
    pub const CHAR_WIDTH: f32 = 0.6;
    pub const LINE_HEIGHT: f32 = 1.2;
}

impl TextMeasure for FixedMetrics {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * Self::CHAR_WIDTH
    }

    fn line_height(&self, size: f32) -> f32 {
        size * Self::LINE_HEIGHT
    }
}

/// 文本渲染器
pub struct TextRenderer {
    font: Font,
    /// 字形缓存 (char, size*10) -> (Metrics, Bitmap)
    cache: RefCell<HashMap<(char, u32), (Metrics, Vec<u8>)>>,
}

impl TextRenderer {
    /// 从字体数据创建
    pub fn from_bytes(font_data: &[u8]) -> Result<Self, NavError> {
        let settings = FontSettings {
            scale: 40.0,
            ..Default::default()
        };
        let font = Font::from_bytes(font_data, settings).map_err(|e| NavError::Font(e.to_string()))?;
        Ok(Self { font, cache: RefCell::new(HashMap::new()) })
    }

    /// 从文件路径加载字体
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, NavError> {
        let font_data = std::fs::read(path)?;
        Self::from_bytes(&font_data)
    }

    /// 加载系统字体（中文优先）
    pub fn load_system_font() -> Result<Self, NavError> {
        let candidates = [
            "/System/Library/Fonts/PingFang.ttc",
            "/System/Library/Fonts/Hiragino Sans GB.ttc",
            "/Library/Fonts/Arial Unicode.ttf",
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "C:\\Windows\\Fonts\\msyh.ttc",
            "C:\\Windows\\Fonts\\arial.ttf",
        ];

        for path in candidates {
            if !Path::new(path).exists() {
                continue;
            }
            match Self::from_file(path) {
                Ok(r) => {
                    tracing::info!(font = path, "system font loaded");
                    return Ok(r);
                }
                Err(e) => tracing::warn!(font = path, error = %e, "skipping font"),
            }
        }
        Err(NavError::Font("no system font found".into()))
    }

    fn glyph(&self, ch: char, size: f32) -> (Metrics, Vec<u8>) {
        let key = (ch, (size * 10.0) as u32);
        if let Some(hit) = self.cache.borrow().get(&key) {
            return hit.clone();
        }
        let glyph = self.font.rasterize(ch, size);
        self.cache.borrow_mut().insert(key, glyph.clone());
        glyph
    }

    /// 渲染单行文本，y 为基线位置（当前坐标系）
    pub fn draw_text(&self, canvas: &mut Canvas, text: &str, x: f32, y: f32, size: f32, paint: &Paint) {
        let mut cursor_x = x;

        for ch in text.chars() {
            let (metrics, bitmap) = self.glyph(ch, size);

            if metrics.width == 0 || metrics.height == 0 {
                cursor_x += metrics.advance_width;
                continue;
            }

            let glyph_x = cursor_x + metrics.xmin as f32;
            let glyph_y = y - metrics.height as f32 - metrics.ymin as f32;

            for gy in 0..metrics.height {
                for gx in 0..metrics.width {
                    let coverage = bitmap[gy * metrics.width + gx] as f32 / 255.0;
                    if coverage <= 0.001 {
                        continue;
                    }
                    let alpha = (paint.color.a as f32 * coverage) as u8;
                    if alpha > 0 {
                        canvas.fill_pixel(glyph_x + gx as f32, glyph_y + gy as f32, paint.color.with_alpha(alpha));
                    }
                }
            }

            cursor_x += metrics.advance_width;
        }
    }

    /// 基线相对行顶的距离
    pub fn ascent(&self, size: f32) -> f32 {
        self.font
            .horizontal_line_metrics(size)
            .map(|m| m.ascent)
            .unwrap_or(size * 0.85)
    }
}

impl TextMeasure for TextRenderer {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().map(|ch| self.font.metrics(ch, size).advance_width).sum()
    }

    fn line_height(&self, size: f32) -> f32 {
        self.font
            .horizontal_line_metrics(size)
            .map(|m| m.new_line_size)
            .unwrap_or(size * FixedMetrics::LINE_HEIGHT)
    }
}

