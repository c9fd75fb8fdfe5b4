//! 布局单元测试
//! 测试测量约束、导航项定位和顶部边界线几何

use crate::config::NavBarStyle;
use crate::text::FixedMetrics;
use crate::ui::{Component, Dimension, MeasureSpec, NavigationBar, ParentContainer};
use crate::{Bitmap, Color, Drawable, PathCommand, Point, Rect};

/// 测试用父容器
struct Frame {
    clip: bool,
}

impl ParentContainer for Frame {
    fn set_clip_children(&mut self, clip: bool) {
        self.clip = clip;
    }

    fn clip_children(&self) -> bool {
        self.clip
    }
}

/// 创建 n 个 24x24 图标的导航栏
fn create_bar(titles: &[&str], style: NavBarStyle) -> NavigationBar {
    let mut bar = NavigationBar::with_style(style);
    for title in titles {
        bar.add_item(title, Drawable::new(Bitmap::solid(24, 24, Color::BLACK)));
    }
    bar
}

/// 测量并布局到 300x56
fn layout_bar(bar: &mut NavigationBar) {
    bar.measure(MeasureSpec::Exactly(300.0), MeasureSpec::Exactly(56.0), &FixedMetrics);
    bar.layout(Rect::new(0.0, 100.0, 300.0, 56.0), None);
}

/// 测试 MeasureSpec 解析
#[test]
fn test_measure_spec_resolve() {
    assert_eq!(MeasureSpec::Exactly(50.0).resolve(80.0), 50.0);
    assert_eq!(MeasureSpec::AtMost(50.0).resolve(80.0), 50.0);
    assert_eq!(MeasureSpec::AtMost(50.0).resolve(30.0), 30.0);
    assert_eq!(MeasureSpec::Unspecified.resolve(80.0), 80.0);
}

/// 测试子组件约束生成
#[test]
fn test_child_spec() {
    let parent = MeasureSpec::AtMost(200.0);
    assert_eq!(Dimension::MatchParent.child_spec(parent, 120.0), MeasureSpec::Exactly(120.0));
    assert_eq!(Dimension::WrapContent.child_spec(parent, 120.0), MeasureSpec::AtMost(120.0));
    assert_eq!(Dimension::Exact(30.0).child_spec(parent, 120.0), MeasureSpec::Exactly(30.0));
    assert_eq!(Dimension::WrapContent.child_spec(MeasureSpec::Unspecified, 0.0), MeasureSpec::Unspecified);
    assert_eq!(Dimension::Exact(30.0).child_spec(MeasureSpec::Unspecified, 0.0), MeasureSpec::Exactly(30.0));
}

/// 测试精确约束下的导航栏尺寸
#[test]
fn test_measure_exact() {
    let mut bar = create_bar(&["Home", "Find", "Me"], NavBarStyle::default());
    bar.measure(MeasureSpec::Exactly(300.0), MeasureSpec::Exactly(56.0), &FixedMetrics);
    assert_eq!(bar.measured_size().width, 300.0);
    assert_eq!(bar.measured_size().height, 56.0);
}

/// 测试自适应约束下累积子组件尺寸
#[test]
fn test_measure_wrap_content() {
    let mut bar = create_bar(&["Home", "Find", "Me"], NavBarStyle::default());
    bar.measure(MeasureSpec::AtMost(300.0), MeasureSpec::AtMost(100.0), &FixedMetrics);

    // "Home" / "Find"：4 * 12 * 0.6 = 28.8 -> 29；"Me"：14.4 -> 15，比图标窄
    assert_eq!(bar.measured_size().width, 29.0 + 29.0 + 24.0);
    // 图标 24 + 标题 12 * 1.2 = 14.4 -> 15
    assert_eq!(bar.measured_size().height, 39.0);

    bar.measure(MeasureSpec::AtMost(60.0), MeasureSpec::AtMost(30.0), &FixedMetrics);
    assert_eq!(bar.measured_size().width, 60.0);
    assert_eq!(bar.measured_size().height, 30.0);
}

/// 测试固定图标尺寸
#[test]
fn test_measure_fixed_icon_size() {
    let style = NavBarStyle { icon_size: Some(32.0), icon_label_gap: 4.0, ..NavBarStyle::default() };
    let mut bar = create_bar(&["A", "B"], style);
    bar.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified, &FixedMetrics);

    assert_eq!(bar.icon_views()[0].measured_size().width, 32.0);
    assert_eq!(bar.measured_size().width, 64.0);
    assert_eq!(bar.measured_size().height, 32.0 + 15.0 + 4.0);
}

/// 测试 300 宽 3 项的等分定位
#[test]
fn test_layout_slots() {
    let mut bar = create_bar(&["Home", "Find", "Me"], NavBarStyle::default());
    layout_bar(&mut bar);

    let icons: Vec<Rect> = bar.icon_views().iter().map(|v| v.frame()).collect();
    assert_eq!(icons[0], Rect::new(38.0, 8.5, 24.0, 24.0));
    assert_eq!(icons[1], Rect::new(138.0, 8.5, 24.0, 24.0));
    assert_eq!(icons[2], Rect::new(238.0, 8.5, 24.0, 24.0));

    let label = bar.labels()[1].frame();
    assert_eq!(label, Rect::new(100.0 + (100.0 - 29.0) / 2.0, 32.5, 29.0, 15.0));
    assert_eq!(bar.icon_measure_size(), 24.0);
    assert_eq!(bar.frame(), Rect::new(0.0, 100.0, 300.0, 56.0));
}

/// 测试布局关闭父容器裁剪
#[test]
fn test_layout_disables_parent_clipping() {
    let mut bar = create_bar(&["Home", "Me"], NavBarStyle::default());
    let mut parent = Frame { clip: true };
    bar.measure(MeasureSpec::Exactly(200.0), MeasureSpec::Exactly(56.0), &FixedMetrics);
    bar.layout(Rect::new(0.0, 0.0, 200.0, 56.0), Some(&mut parent));
    assert!(!parent.clip_children());
}

/// 测试原始图标模式下边界线是直线
#[test]
fn test_boundary_flat_line() {
    let mut bar = create_bar(&["Home", "Find", "Me"], NavBarStyle::default());
    layout_bar(&mut bar);

    let path = bar.boundary_path().expect("boundary shown by default");
    assert_eq!(
        path.commands(),
        &[
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::LineTo(Point::new(300.0, 0.0)),
        ]
    );
}

/// 测试关闭边界线
#[test]
fn test_boundary_hidden() {
    let style = NavBarStyle { show_top_boundary: false, ..NavBarStyle::default() };
    let mut bar = create_bar(&["Home", "Me"], style);
    layout_bar(&mut bar);
    assert!(bar.boundary_path().is_none());
}

/// 测试缩放模式下选中项处的隆起
#[test]
fn test_boundary_bump_geometry() {
    let mut bar = create_bar(&["Home", "Find", "Me"], NavBarStyle::default());
    layout_bar(&mut bar);
    let plain = (0..3).map(|_| Drawable::new(Bitmap::solid(24, 24, Color::WHITE))).collect();
    bar.set_plain_icons(plain).expect("3 icons for 3 items");

    let path = bar.boundary_path().expect("boundary shown by default");
    // 图标 [38, 62] x [8.5, 32.5]，控制点 y = -(24 * 1.5 - 32.5) - 50
    assert_eq!(
        path.commands(),
        &[
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::LineTo(Point::new(26.0, 0.0)),
            PathCommand::QuadTo(Point::new(50.0, -53.5), Point::new(74.0, 0.0)),
            PathCommand::LineTo(Point::new(300.0, 0.0)),
        ]
    );
}

/// 测试不可缩放时即使换肤也画直线
#[test]
fn test_boundary_flat_when_not_scalable() {
    let style = NavBarStyle { icon_scalable: false, ..NavBarStyle::default() };
    let mut bar = create_bar(&["Home", "Me"], style);
    layout_bar(&mut bar);
    let plain = (0..2).map(|_| Drawable::new(Bitmap::solid(24, 24, Color::WHITE))).collect();
    bar.set_plain_icons(plain).expect("2 icons for 2 items");

    let path = bar.boundary_path().expect("boundary shown by default");
    assert_eq!(path.commands().len(), 2);
    assert_eq!(bar.icon_views()[0].scale(), 1.0);
}

/// 测试放大图标的上移距离在布局后更新
#[test]
fn test_layout_refreshes_icon_lift() {
    let mut bar = create_bar(&["Home", "Me"], NavBarStyle::default());
    let plain = (0..2).map(|_| Drawable::new(Bitmap::solid(24, 24, Color::WHITE))).collect();
    bar.set_plain_icons(plain).expect("2 icons for 2 items");
    // 布局前图标尺寸未知
    assert_eq!(bar.icon_views()[0].translation_y(), 0.0);

    layout_bar(&mut bar);
    assert_eq!(bar.icon_views()[0].scale(), 1.5);
    assert_eq!(bar.icon_views()[0].translation_y(), -6.0);
    assert_eq!(bar.icon_views()[1].translation_y(), 0.0);
}
