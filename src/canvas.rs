//! 画布：RGBA 像素缓冲上的软件光栅化
//!
//! 所有绘制都在当前坐标系下进行，`save`/`translate`/`restore` 管理平移。
//! 导航栏不裁剪子视图，超出自身边界的隆起照样画出来。

use crate::error::NavError;
use crate::{Bitmap, Color, Paint, PaintStyle, Path, Point, Rect};

/// 填充路径时每个像素行的垂直采样数
const SCANLINE_SAMPLES: usize = 4;
/// 曲线展平容差（像素）
const FLATTEN_TOLERANCE: f32 = 1.0;

pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    origin: Point,
    saved: Vec<Point>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; (width * height) as usize],
            origin: Point::default(),
            saved: Vec::new(),
        }
    }

    /// 保存当前平移
    pub fn save(&mut self) {
        self.saved.push(self.origin);
    }

    /// 恢复最近一次保存的平移，栈空时什么都不做
    pub fn restore(&mut self) {
        if let Some(origin) = self.saved.pop() {
            self.origin = origin;
        }
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.origin.x += dx;
        self.origin.y += dy;
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// 设备坐标取像素，越界返回透明
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize]
        } else {
            Color::TRANSPARENT
        }
    }

    /// 设备坐标写像素，半透明颜色与已有内容混合
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 || color.a == 0 {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        self.pixels[idx] = if color.a == 255 { color } else { color.blend(&self.pixels[idx]) };
    }

    /// 当前坐标系下的单个像素，四舍五入到设备像素
    pub fn fill_pixel(&mut self, x: f32, y: f32, color: Color) {
        let px = (x + self.origin.x).round() as i32;
        let py = (y + self.origin.y).round() as i32;
        self.set_pixel(px, py, color);
    }

    fn blend_coverage(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if coverage > 0.0 {
            let a = color.a as f32 * coverage.min(1.0);
            self.set_pixel(x, y, color.with_alpha(a as u8));
        }
    }

    fn to_device(&self, p: Point) -> Point {
        Point::new(p.x + self.origin.x, p.y + self.origin.y)
    }

    /// 矩形只支持填充，描边画笔按填充处理
    pub fn draw_rect(&mut self, rect: &Rect, paint: &Paint) {
        let top_left = self.to_device(Point::new(rect.x, rect.y));
        let x0 = top_left.x.max(0.0) as i32;
        let y0 = top_left.y.max(0.0) as i32;
        let x1 = (top_left.x + rect.width).min(self.width as f32) as i32;
        let y1 = (top_left.y + rect.height).min(self.height as f32) as i32;

        for y in y0..y1 {
            for x in x0..x1 {
                self.set_pixel(x, y, paint.color);
            }
        }
    }

    pub fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: &Paint) {
        let from = self.to_device(Point::new(x0, y0));
        let to = self.to_device(Point::new(x1, y1));
        self.stroke_segment(from, to, paint);
    }

    /// 设备坐标线段：细线用 Wu 算法，粗线展开成四边形填充
    fn stroke_segment(&mut self, from: Point, to: Point, paint: &Paint) {
        if paint.stroke_width <= 1.0 {
            self.hairline(from, to, paint.color);
            return;
        }
        let len = from.distance(&to);
        if len == 0.0 {
            return;
        }
        let half = paint.stroke_width / 2.0;
        let nx = -(to.y - from.y) / len * half;
        let ny = (to.x - from.x) / len * half;
        let quad = vec![
            Point::new(from.x + nx, from.y + ny),
            Point::new(to.x + nx, to.y + ny),
            Point::new(to.x - nx, to.y - ny),
            Point::new(from.x - nx, from.y - ny),
        ];
        self.fill_contours(&[quad], paint.color);
    }

    fn hairline(&mut self, from: Point, to: Point, color: Color) {
        let steep = (to.y - from.y).abs() > (to.x - from.x).abs();
        let (mut a, mut b) = if steep {
            (Point::new(from.y, from.x), Point::new(to.y, to.x))
        } else {
            (from, to)
        };
        if a.x > b.x {
            std::mem::swap(&mut a, &mut b);
        }

        let dx = b.x - a.x;
        let gradient = if dx == 0.0 { 1.0 } else { (b.y - a.y) / dx };
        let start = a.x.round();
        let mut y = a.y + gradient * (start - a.x);

        for major in start as i32..=b.x.round() as i32 {
            let minor = y.floor() as i32;
            let frac = y - y.floor();
            if steep {
                self.blend_coverage(minor, major, color, 1.0 - frac);
                self.blend_coverage(minor + 1, major, color, frac);
            } else {
                self.blend_coverage(major, minor, color, 1.0 - frac);
                self.blend_coverage(major, minor + 1, color, frac);
            }
            y += gradient;
        }
    }

    pub fn draw_path(&mut self, path: &Path, paint: &Paint) {
        let contours: Vec<Vec<Point>> = path
            .flatten(FLATTEN_TOLERANCE)
            .into_iter()
            .map(|contour| contour.into_iter().map(|p| self.to_device(p)).collect())
            .collect();

        match paint.style {
            PaintStyle::Fill => self.fill_contours(&contours, paint.color),
            PaintStyle::Stroke => {
                for contour in &contours {
                    for pair in contour.windows(2) {
                        self.stroke_segment(pair[0], pair[1], paint);
                    }
                }
            }
        }
    }

    /// 扫描线填充（非零交点成对），每行多次垂直采样估算覆盖率
    fn fill_contours(&mut self, contours: &[Vec<Point>], color: Color) {
        let points = contours.iter().flatten();
        let (min_y, max_y) = points.fold((f32::MAX, f32::MIN), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
        if min_y > max_y {
            return;
        }

        let row_start = min_y.floor().max(0.0) as i32;
        let row_end = max_y.ceil().min(self.height as f32) as i32;

        for row in row_start..row_end {
            let spans: Vec<Vec<f32>> = (0..SCANLINE_SAMPLES)
                .map(|s| row as f32 + (s as f32 + 0.5) / SCANLINE_SAMPLES as f32)
                .map(|scan_y| crossings(contours, scan_y))
                .collect();

            let Some((left, right)) = span_extent(&spans) else {
                continue;
            };
            for x in left.floor().max(0.0) as i32..right.ceil().min(self.width as f32) as i32 {
                let (px0, px1) = (x as f32, x as f32 + 1.0);
                let covered: f32 = spans
                    .iter()
                    .flat_map(|xs| xs.chunks_exact(2))
                    .map(|pair| (px1.min(pair[1]) - px0.max(pair[0])).max(0.0))
                    .sum();
                self.blend_coverage(x, row, color, covered / SCANLINE_SAMPLES as f32);
            }
        }
    }

    /// 位图拉伸到目标区域（双线性采样）
    ///
    /// 有着色时保留源像素的 alpha，颜色通道全部替换为着色。
    pub fn draw_bitmap(&mut self, bitmap: &Bitmap, dest: &Rect, tint: Option<Color>) {
        let (bw, bh) = (bitmap.width(), bitmap.height());
        if bw == 0 || bh == 0 || dest.width <= 0.0 || dest.height <= 0.0 {
            return;
        }

        let top_left = self.to_device(Point::new(dest.x, dest.y));
        let sx = bw as f32 / dest.width;
        let sy = bh as f32 / dest.height;
        let sample = |x: u32, y: u32| bitmap.pixel(x.min(bw - 1), y.min(bh - 1));

        for dy in top_left.y.floor() as i32..(top_left.y + dest.height).ceil() as i32 {
            let v = (dy as f32 + 0.5 - top_left.y) * sy - 0.5;
            if v < -0.5 || v >= bh as f32 {
                continue;
            }
            for dx in top_left.x.floor() as i32..(top_left.x + dest.width).ceil() as i32 {
                let u = (dx as f32 + 0.5 - top_left.x) * sx - 0.5;
                if u < -0.5 || u >= bw as f32 {
                    continue;
                }

                let (u, v) = (u.max(0.0), v.max(0.0));
                let (x0, y0) = (u.floor() as u32, v.floor() as u32);
                let (fx, fy) = (u.fract(), v.fract());
                let corners = [sample(x0, y0), sample(x0 + 1, y0), sample(x0, y0 + 1), sample(x0 + 1, y0 + 1)];
                let mix = |channel: fn(&Color) -> u8| {
                    let [c00, c10, c01, c11] = corners.each_ref().map(|c| channel(c) as f32);
                    let top = c00 + (c10 - c00) * fx;
                    let bottom = c01 + (c11 - c01) * fx;
                    (top + (bottom - top) * fy) as u8
                };

                let alpha = mix(|c| c.a);
                let color = match tint {
                    Some(t) => t.with_alpha((alpha as u32 * t.a as u32 / 255) as u8),
                    None => Color::new(mix(|c| c.r), mix(|c| c.g), mix(|c| c.b), alpha),
                };
                self.set_pixel(dx, dy, color);
            }
        }
    }

    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| [p.r, p.g, p.b, p.a]).collect()
    }

    pub fn save_png(&self, path: impl AsRef<std::path::Path>) -> Result<(), NavError> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.to_rgba())
            .ok_or(NavError::Canvas("pixel buffer does not match canvas size"))?;
        img.save(path)?;
        Ok(())
    }
}

/// 水平扫描线与所有轮廓边的交点，升序
fn crossings(contours: &[Vec<Point>], scan_y: f32) -> Vec<f32> {
    let mut xs = Vec::new();
    for contour in contours {
        let closing = contour.last().into_iter().zip(contour.first());
        for (p0, p1) in contour.iter().zip(contour.iter().skip(1)).chain(closing) {
            if (p0.y <= scan_y) != (p1.y <= scan_y) {
                let t = (scan_y - p0.y) / (p1.y - p0.y);
                xs.push(p0.x + t * (p1.x - p0.x));
            }
        }
    }
    xs.sort_by(f32::total_cmp);
    xs
}

fn span_extent(spans: &[Vec<f32>]) -> Option<(f32, f32)> {
    let mut xs = spans.iter().flatten().copied();
    let first = xs.next()?;
    Some(xs.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x))))
}
