//! 无窗口渲染导航栏的几个典型状态并保存为 PNG
//!
//! 用法：`navbar-snapshot [输出目录] [配置文件]`

mod demo;

use bump_navbar::text::{FixedMetrics, TextMeasure, TextRenderer};
use bump_navbar::ui::{Component, MeasureSpec, NavigationBar, PageContainer, PagerHandle};
use bump_navbar::{Canvas, Color, NavError, Paint, Rect};
use demo::{BAR_HEIGHT, LOGICAL_WIDTH, PAGE_COLORS};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// 导航栏上方留出的页面区域，隆起会画进这里
const BACKDROP_HEIGHT: f32 = 80.0;
const FRAME_STEP: f32 = 1.0 / 60.0;

struct Snapshot {
    bar: NavigationBar,
    pager: PagerHandle,
    text: Option<TextRenderer>,
    out_dir: PathBuf,
}

impl Snapshot {
    fn render(&mut self, name: &str) -> Result<(), NavError> {
        let height = BACKDROP_HEIGHT as u32 + BAR_HEIGHT;
        let mut canvas = Canvas::new(LOGICAL_WIDTH, height);
        canvas.clear(Color::WHITE);

        for (index, offset) in self.pager.borrow().visible_pages() {
            let page = Rect::new(offset, 0.0, LOGICAL_WIDTH as f32, BACKDROP_HEIGHT);
            canvas.draw_rect(&page, &Paint::fill(PAGE_COLORS[index % PAGE_COLORS.len()]));
        }
        self.bar.render(&mut canvas, self.text.as_ref());

        let path = self.out_dir.join(format!("{name}.png"));
        canvas.save_png(&path)?;
        tracing::info!(path = %path.display(), selected = self.bar.selected_index(), "snapshot saved");
        Ok(())
    }

    /// 让分页吸附和图标动画跑完
    fn settle(&mut self, seconds: f32) {
        let mut elapsed = 0.0;
        while elapsed < seconds {
            self.pager.borrow_mut().update(FRAME_STEP);
            self.bar.sync_pager();
            self.bar.tick(FRAME_STEP);
            elapsed += FRAME_STEP;
        }
    }
}

fn run(out_dir: &Path, config_path: Option<&str>) -> Result<(), NavError> {
    let config = demo::load_config(config_path)?;
    let resources = demo::resources()?;
    let text = TextRenderer::load_system_font()
        .map_err(|e| tracing::warn!(error = %e, "no system font, labels are skipped"))
        .ok();

    let mut bar = NavigationBar::from_config(&config, &resources)?;
    let metrics: &dyn TextMeasure = match &text {
        Some(renderer) => renderer,
        None => &FixedMetrics,
    };
    bar.measure(
        MeasureSpec::Exactly(LOGICAL_WIDTH as f32),
        MeasureSpec::Exactly(BAR_HEIGHT as f32),
        metrics,
    );
    bar.set_frame(Rect::new(0.0, BACKDROP_HEIGHT, LOGICAL_WIDTH as f32, BAR_HEIGHT as f32));

    let pager = PageContainer::new(bar.item_count(), LOGICAL_WIDTH as f32).into_handle();
    bar.bind_pager(Rc::clone(&pager));

    std::fs::create_dir_all(out_dir)?;
    let mut snapshot = Snapshot { bar, pager, text, out_dir: out_dir.to_path_buf() };

    snapshot.render("original")?;

    snapshot.bar.set_plain_icons_from_ids(&resources, &demo::SKIN_IDS)?;
    snapshot.render("plain")?;

    // 从第一页向第二页拖到一半
    let half = LOGICAL_WIDTH as f32 / 2.0;
    {
        let mut pager = snapshot.pager.borrow_mut();
        pager.begin_drag(LOGICAL_WIDTH as f32, 0);
        pager.update_drag(LOGICAL_WIDTH as f32 - 10.0, 16);
        pager.update_drag(half, 400);
    }
    snapshot.bar.sync_pager();
    snapshot.render("plain-swipe")?;

    snapshot.pager.borrow_mut().end_drag();
    snapshot.settle(1.0);
    snapshot.render("plain-settled")?;

    snapshot.bar.set_animated_icons_from_ids(&resources, &demo::ANIMATION_IDS)?;
    snapshot.bar.set_selected(2);
    snapshot.settle(1.0);
    snapshot.render("animated")?;

    snapshot.bar.restore_original_icons();
    snapshot.render("restored")?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    demo::init_tracing();

    let mut args = std::env::args().skip(1);
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "snapshots".to_string()));
    let config_path = args.next();
    run(&out_dir, config_path.as_deref())?;
    Ok(())
}
