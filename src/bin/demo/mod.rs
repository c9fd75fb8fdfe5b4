//! 演示程序共用：默认配置、程序生成的图标与动画、日志初始化

#![allow(dead_code)]

use bump_navbar::config::{MenuItem, NavBarConfig};
use bump_navbar::resources::MemoryResources;
use bump_navbar::{Bitmap, Color, NavError};
use image::codecs::gif::GifEncoder;
use image::{Delay, Frame, Rgba, RgbaImage};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub const LOGICAL_WIDTH: u32 = 375;
pub const LOGICAL_HEIGHT: u32 = 667;
pub const BAR_HEIGHT: u32 = 56;

pub const MENU_ID: &str = "bottom_nav";
pub const SKIN_IDS: [&str; 3] = ["skin_home", "skin_discover", "skin_me"];
pub const ANIMATION_IDS: [Option<&str>; 3] = [Some("anim_home"), Some("anim_discover"), Some("anim_me")];

/// 三个页面的背景色
pub const PAGE_COLORS: [Color; 3] = [
    Color::from_hex(0xE8F5E9),
    Color::from_hex(0xE3F2FD),
    Color::from_hex(0xFFF3E0),
];

const DEFAULT_CONFIG: &str = r##"{
    "itemTextNormalColor": "#666666",
    "defaultSelectedColor": "#1AAD19",
    "iconSize": 26,
    "labelFontSize": 12,
    "iconLabelGap": 2,
    "menu": "bottom_nav"
}"##;

/// 读取配置文件，未指定时使用内置配置
pub fn load_config(path: Option<&str>) -> Result<NavBarConfig, NavError> {
    match path {
        Some(path) => {
            tracing::info!(path, "loading navbar config");
            NavBarConfig::from_json(&std::fs::read_to_string(path)?)
        }
        None => NavBarConfig::from_json(DEFAULT_CONFIG),
    }
}

/// 安装日志订阅者，`RUST_LOG` 控制级别
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

type Shape = fn(f32, f32) -> bool;

// 以图标中心为原点、半径归一化到 1 的形状
fn house(x: f32, y: f32) -> bool {
    let roof = y < 0.0 && y > -0.9 && x.abs() < (y + 0.9) * 1.1;
    let body = (-0.1..0.85).contains(&y) && x.abs() < 0.65;
    let door = y > 0.35 && x.abs() < 0.18;
    (roof || body) && !door
}

fn compass(x: f32, y: f32) -> bool {
    let r = (x * x + y * y).sqrt();
    let ring = (0.72..0.92).contains(&r);
    let needle = x.abs() + y.abs() * 0.35 < 0.22 && y.abs() < 0.6;
    ring || needle
}

fn person(x: f32, y: f32) -> bool {
    let head = x * x + (y + 0.45) * (y + 0.45) < 0.11;
    let shoulders = y > 0.1 && y < 0.9 && x * x + (y - 0.9) * (y - 0.9) < 0.62;
    head || shoulders
}

const SHAPES: [Shape; 3] = [house, compass, person];

fn shape_bitmap(size: u32, shape: Shape, fill: Color) -> Bitmap {
    let half = size as f32 / 2.0;
    Bitmap::from_fn(size, size, |px, py| {
        let x = (px as f32 + 0.5 - half) / half;
        let y = (py as f32 + 0.5 - half) / half;
        if shape(x, y) { fill } else { Color::TRANSPARENT }
    })
}

/// 形状按比例放大的 GIF，模拟选中时的弹跳动画
fn pulse_gif(size: u32, shape: Shape, fill: Color) -> Result<Vec<u8>, NavError> {
    let half = size as f32 / 2.0;
    let mut buf = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut buf);
        let frames = [0.6f32, 0.8, 1.1, 1.0].into_iter().map(|zoom| {
            let image = RgbaImage::from_fn(size, size, |px, py| {
                let x = (px as f32 + 0.5 - half) / half / zoom;
                let y = (py as f32 + 0.5 - half) / half / zoom;
                if shape(x, y) {
                    Rgba([fill.r, fill.g, fill.b, 255])
                } else {
                    Rgba([0, 0, 0, 0])
                }
            });
            Frame::from_parts(image, 0, 0, Delay::from_numer_denom_ms(80, 1))
        });
        encoder.encode_frames(frames)?;
    }
    Ok(buf)
}

/// 菜单、原始图标、换肤图标和动画图标
pub fn resources() -> Result<MemoryResources, NavError> {
    let titles = ["Home", "Discover", "Me"];
    let icon_ids = ["ic_home", "ic_discover", "ic_me"];
    let skin = Color::from_hex(0xFF7043);

    let menu = titles
        .iter()
        .zip(icon_ids)
        .map(|(title, icon)| MenuItem { title: title.to_string(), icon: icon.to_string() })
        .collect();
    let mut resources = MemoryResources::new().with_menu(MENU_ID, menu);

    for (i, shape) in SHAPES.into_iter().enumerate() {
        resources = resources
            .with_drawable(icon_ids[i], shape_bitmap(48, shape, Color::BLACK))
            .with_drawable(SKIN_IDS[i], shape_bitmap(48, shape, skin));
        if let Some(id) = ANIMATION_IDS[i] {
            resources = resources.with_animation(id, pulse_gif(48, shape, skin)?);
        }
    }
    Ok(resources)
}
