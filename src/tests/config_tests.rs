//! 配置与资源单元测试

use crate::config::{MenuItem, NavBarConfig, NavBarStyle, FALLBACK_SELECTED_COLOR};
use crate::resources::{AssetResources, MemoryResources, Resources};
use crate::ui::NavigationBar;
use crate::{Bitmap, Color, NavError};
use image::{Rgba, RgbaImage};

/// 测试空配置使用默认值
#[test]
fn test_config_defaults() {
    let config = NavBarConfig::from_json("{}").expect("empty object is valid");
    assert_eq!(config.item_text_normal_color, "#444444");
    assert!(config.item_text_selected_color.is_none());
    assert!(config.show_top_boundary);
    assert!(config.item_gradient);
    assert!(config.icon_scalable);
    assert_eq!(config.icon_scale, 1.5);
    assert_eq!(config.label_font_size, 12.0);
    assert_eq!(config.icon_label_gap, 0.0);
    assert!(config.icon_size.is_none());
    assert!(config.menu.is_none());

    let style = config.resolve().expect("default colors parse");
    assert_eq!(style.normal_color, Color::DARK_GRAY);
    assert_eq!(style.selected_color, FALLBACK_SELECTED_COLOR);
    assert_eq!(style.background_color, Color::WHITE);
    assert_eq!(style, NavBarStyle::default());
    assert_eq!(NavBarConfig::default().resolve().expect("defaults"), style);
}

/// 测试选中色回退顺序
#[test]
fn test_selected_color_fallback() {
    let config = NavBarConfig::from_json(r##"{"defaultSelectedColor": "#FF0000"}"##).expect("valid");
    assert_eq!(config.resolve().expect("valid").selected_color, Color::rgb(255, 0, 0));

    let config = NavBarConfig::from_json(
        r##"{"defaultSelectedColor": "#FF0000", "itemTextSelectedColor": "#0000FF"}"##,
    )
    .expect("valid");
    assert_eq!(config.resolve().expect("valid").selected_color, Color::rgb(0, 0, 255));
}

/// 测试完整配置
#[test]
fn test_config_full() {
    let json = r##"{
        "itemTextNormalColor": "#666",
        "showTopBoundary": false,
        "itemGradient": false,
        "iconSize": 28,
        "iconScalable": false,
        "iconScale": 1.2,
        "labelFontSize": 14,
        "iconLabelGap": 2,
        "backgroundColor": "#F8F8F8",
        "menu": "bottom_nav"
    }"##;
    let config = NavBarConfig::from_json(json).expect("valid");
    assert_eq!(config.menu.as_deref(), Some("bottom_nav"));

    let style = config.resolve().expect("valid colors");
    assert_eq!(style.normal_color, Color::rgb(0x66, 0x66, 0x66));
    assert_eq!(style.background_color, Color::rgb(0xF8, 0xF8, 0xF8));
    assert!(!style.show_top_boundary);
    assert!(!style.item_gradient);
    assert!(!style.icon_scalable);
    assert_eq!(style.icon_size, Some(28.0));
    assert_eq!(style.icon_scale, 1.2);
    assert_eq!(style.label_font_size, 14.0);
    assert_eq!(style.icon_label_gap, 2.0);
}

/// 测试非法颜色
#[test]
fn test_config_invalid_color() {
    let config = NavBarConfig::from_json(r#"{"itemTextNormalColor": "gray"}"#).expect("valid json");
    match config.resolve() {
        Err(NavError::InvalidColor(value)) => assert_eq!(value, "gray"),
        other => panic!("unexpected: {other:?}"),
    }
    assert!(NavigationBar::new(&config).is_err());
}

/// 测试非法 JSON
#[test]
fn test_config_invalid_json() {
    let result = NavBarConfig::from_json(r#"{"iconScale": "big"}"#);
    assert!(matches!(result, Err(NavError::Config(_))));
}

/// 测试内存资源
#[test]
fn test_memory_resources() {
    let resources = MemoryResources::new()
        .with_menu("nav", vec![MenuItem { title: "Home".into(), icon: "home".into() }])
        .with_drawable("home", Bitmap::solid(4, 4, Color::BLACK));

    assert_eq!(resources.menu("nav").expect("menu").len(), 1);
    assert_eq!(resources.drawable("home").expect("drawable").width(), 4);
    assert!(matches!(resources.animation("home"), Err(NavError::ResourceNotFound(_))));
}

/// 测试目录资源
#[test]
fn test_asset_resources() {
    let dir = tempfile::tempdir().expect("temp dir");
    let root = dir.path();
    std::fs::create_dir_all(root.join("menu")).expect("menu dir");
    std::fs::create_dir_all(root.join("drawable")).expect("drawable dir");
    std::fs::create_dir_all(root.join("raw")).expect("raw dir");

    std::fs::write(
        root.join("menu/bottom_nav.json"),
        r#"[{"title": "Home", "icon": "ic_home"}, {"title": "Me", "icon": "ic_me"}]"#,
    )
    .expect("write menu");
    for name in ["ic_home", "ic_me"] {
        RgbaImage::from_pixel(16, 16, Rgba([0, 0, 0, 255]))
            .save(root.join(format!("drawable/{name}.png")))
            .expect("write png");
    }
    std::fs::write(root.join("raw/ic_home.gif"), super::animation_tests::gif_bytes(2)).expect("write gif");

    let resources = AssetResources::new(root);
    assert_eq!(resources.drawable("ic_home").expect("png").width(), 16);
    assert!(!resources.animation("ic_home").expect("gif").is_empty());
    assert!(matches!(resources.drawable("missing"), Err(NavError::ResourceNotFound(_))));

    let config = NavBarConfig { menu: Some("bottom_nav".into()), ..NavBarConfig::default() };
    let bar = NavigationBar::from_config(&config, &resources).expect("menu resolves");
    assert_eq!(bar.item_count(), 2);
    assert_eq!(bar.original_icons()[1].bitmap().width(), 16);
}
