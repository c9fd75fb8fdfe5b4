//! 颜色模块 - RGBA 颜色、HSV 转换与过渡插值

/// RGBA 颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// HSV 颜色空间表示，h ∈ [0, 360)，s/v ∈ [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
            a: 255,
        }
    }

    /// 0xAARRGGBB
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: ((argb >> 24) & 0xFF) as u8,
            r: ((argb >> 16) & 0xFF) as u8,
            g: ((argb >> 8) & 0xFF) as u8,
            b: (argb & 0xFF) as u8,
        }
    }

    /// 解析颜色字符串，支持 `#RGB`、`#RRGGBB`、`#AARRGGBB`
    pub fn parse(s: &str) -> Option<Color> {
        let s = s.trim().strip_prefix('#')?;
        if !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match s.len() {
            3 => {
                let v = u32::from_str_radix(s, 16).ok()?;
                let expand = |n: u32| ((n & 0xF) * 0x11) as u8;
                Some(Color::rgb(expand(v >> 8), expand(v >> 4), expand(v)))
            }
            6 => u32::from_str_radix(s, 16).ok().map(Color::from_hex),
            8 => u32::from_str_radix(s, 16).ok().map(Color::from_argb),
            _ => None,
        }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// 转换到 HSV
    pub fn to_hsv(&self) -> Hsv {
        let r = self.r as f32;
        let g = self.g as f32;
        let b = self.b as f32;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let v = max / 255.0;
        if max == 0.0 || delta == 0.0 {
            return Hsv { h: 0.0, s: 0.0, v };
        }
        let s = delta / max;

        let mut h = if r == max {
            (g - b) / delta
        } else if g == max {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        } * 60.0;
        if h < 0.0 {
            h += 360.0;
        }
        Hsv { h, s, v }
    }

    /// 从 HSV 构造颜色
    pub fn from_hsv(alpha: u8, hsv: Hsv) -> Color {
        let s = hsv.s.clamp(0.0, 1.0);
        let v = hsv.v.clamp(0.0, 1.0);
        let v_byte = (v * 255.0).round() as u8;

        if s <= 0.0 {
            return Color::new(v_byte, v_byte, v_byte, alpha);
        }

        let hx = if hsv.h < 0.0 || hsv.h >= 360.0 { 0.0 } else { hsv.h / 60.0 };
        let w = hx.floor();
        let f = hx - w;
        let p = ((1.0 - s) * v * 255.0).round() as u8;
        let q = ((1.0 - s * f) * v * 255.0).round() as u8;
        let t = ((1.0 - s * (1.0 - f)) * v * 255.0).round() as u8;

        let (r, g, b) = match w as u8 {
            0 => (v_byte, t, p),
            1 => (q, v_byte, p),
            2 => (p, v_byte, t),
            3 => (p, q, v_byte),
            4 => (t, p, v_byte),
            _ => (v_byte, p, q),
        };
        Color::new(r, g, b, alpha)
    }

    /// HSV 空间过渡色：从 start 到 end，进度 fraction ∈ [0, 1]
    ///
    /// 色相走最短弧（不超过 180°），alpha 线性插值。
    pub fn lerp_hsv(start: Color, end: Color, fraction: f32) -> Color {
        let hsv = Hsv::lerp(start.to_hsv(), end.to_hsv(), fraction);
        let alpha = start.a as f32 + (end.a as f32 - start.a as f32) * fraction;
        Color::from_hsv(alpha.round().clamp(0.0, 255.0) as u8, hsv)
    }

    /// 源在上的 alpha 合成（整数运算），self 为源
    pub fn blend(&self, dst: &Color) -> Color {
        let sa = self.a as u32;
        match (self.a, dst.a) {
            (0, _) => *dst,
            (255, _) => *self,
            (_, 255) => {
                let mix = |s: u8, d: u8| ((s as u32 * sa + d as u32 * (255 - sa)) / 255) as u8;
                Color::rgb(mix(self.r, dst.r), mix(self.g, dst.g), mix(self.b, dst.b))
            }
            _ => {
                let dst_weight = dst.a as u32 * (255 - sa) / 255;
                let out_a = sa + dst_weight;
                if out_a == 0 {
                    return Color::TRANSPARENT;
                }
                let mix = |s: u8, d: u8| ((s as u32 * sa + d as u32 * dst_weight) / out_a) as u8;
                Color::new(mix(self.r, dst.r), mix(self.g, dst.g), mix(self.b, dst.b), out_a as u8)
            }
        }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const DARK_GRAY: Color = Color::from_hex(0x444444);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Hsv {
    /// 色相沿最短方向插值，结果归一化到 [0, 360)
    pub fn lerp(start: Hsv, end: Hsv, fraction: f32) -> Hsv {
        let mut end_h = end.h;
        if end_h - start.h > 180.0 {
            end_h -= 360.0;
        } else if end_h - start.h < -180.0 {
            end_h += 360.0;
        }
        let h = (start.h + (end_h - start.h) * fraction).rem_euclid(360.0);
        Hsv {
            h,
            s: start.s + (end.s - start.s) * fraction,
            v: start.v + (end.v - start.v) * fraction,
        }
    }
}
