//! 位图与可着色绘制对象

use crate::error::NavError;
use crate::{Color, Size};
use std::cell::Cell;
use std::rc::Rc;

/// RGBA 位图
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Bitmap {
    /// 从 RGBA 数据构造，数据不足时缺失像素为透明
    pub fn from_rgba(data: &[u8], width: u32, height: u32) -> Self {
        let mut pixels: Vec<Color> = data
            .chunks_exact(4)
            .take((width * height) as usize)
            .map(|c| Color::new(c[0], c[1], c[2], c[3]))
            .collect();
        pixels.resize((width * height) as usize, Color::TRANSPARENT);
        Self { width, height, pixels }
    }

    /// 纯色位图
    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        Self { width, height, pixels: vec![color; (width * height) as usize] }
    }

    /// 由像素函数生成位图
    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> Color) -> Self {
        let mut pixels = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self { width, height, pixels }
    }

    /// 从文件加载图片
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, NavError> {
        let img = image::open(path)?;
        Ok(Self::from_image(img.to_rgba8()))
    }

    pub(crate) fn from_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self::from_rgba(img.as_raw(), width, height)
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize]
        } else {
            Color::TRANSPARENT
        }
    }
}

/// 可着色的绘制对象
///
/// 通过 `Rc` 共享：原始图标与显示它的图标视图持有同一个对象，
/// 对任一方着色都会反映到另一方。
#[derive(Debug)]
pub struct Drawable {
    bitmap: Bitmap,
    tint: Cell<Option<Color>>,
}

impl Drawable {
    pub fn new(bitmap: Bitmap) -> Rc<Self> {
        Rc::new(Self { bitmap, tint: Cell::new(None) })
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn tint(&self) -> Option<Color> {
        self.tint.get()
    }

    pub fn set_tint(&self, color: Color) {
        self.tint.set(Some(color));
    }

    pub fn intrinsic_size(&self) -> Size {
        self.bitmap.size()
    }
}
