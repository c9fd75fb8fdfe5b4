//! 导航栏演示窗口 - 三个可滑动页面配一个底部导航栏
//!
//! 按键：`1` 换肤图标，`2` 动画图标，`0` 还原原始图标，左右方向键切换选中项。
//! 第一个参数可以指定配置文件。

mod demo;

use bump_navbar::config::NavBarConfig;
use bump_navbar::event::{TouchEvent, TouchPhase};
use bump_navbar::resources::MemoryResources;
use bump_navbar::text::{FixedMetrics, TextMeasure, TextRenderer};
use bump_navbar::ui::{Component, MeasureSpec, NavigationBar, PageContainer, PagerHandle};
use bump_navbar::{Canvas, Color, NavError, Paint, Rect};
use demo::{BAR_HEIGHT, LOGICAL_HEIGHT, LOGICAL_WIDTH, PAGE_COLORS};
use std::num::NonZeroU32;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

const CONTENT_HEIGHT: f32 = (LOGICAL_HEIGHT - BAR_HEIGHT) as f32;
const PAGE_TITLE_SIZE: f32 = 28.0;

/// 按下时命中的区域，决定后续移动和抬起交给谁
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragTarget {
    Pager,
    Bar,
}

struct NavBarWindow {
    window: Option<Arc<Window>>,
    surface: Option<softbuffer::Surface<Arc<Window>, Arc<Window>>>,
    canvas: Canvas,
    text_renderer: Option<TextRenderer>,
    resources: MemoryResources,
    bar: NavigationBar,
    pager: PagerHandle,
    mouse_pos: (f32, f32),
    drag: Option<DragTarget>,
    needs_redraw: bool,
    scale_factor: f64,
    started: Instant,
    last_frame: Instant,
}

impl NavBarWindow {
    fn new(config: &NavBarConfig) -> Result<Self, NavError> {
        let resources = demo::resources()?;
        let text_renderer = match TextRenderer::load_system_font() {
            Ok(renderer) => Some(renderer),
            Err(e) => {
                tracing::warn!(error = %e, "no system font, labels fall back to fixed metrics");
                None
            }
        };

        let mut bar = NavigationBar::from_config(config, &resources)?;
        let pager = PageContainer::new(bar.item_count(), LOGICAL_WIDTH as f32).into_handle();
        bar.bind_pager(Rc::clone(&pager));
        bar.set_on_item_selected(|index| tracing::info!(index, "item selected"));

        let mut app = Self {
            window: None,
            surface: None,
            canvas: Canvas::new(LOGICAL_WIDTH, LOGICAL_HEIGHT),
            text_renderer,
            resources,
            bar,
            pager,
            mouse_pos: (0.0, 0.0),
            drag: None,
            needs_redraw: true,
            scale_factor: 1.0,
            started: Instant::now(),
            last_frame: Instant::now(),
        };
        app.layout_bar();
        Ok(app)
    }

    fn layout_bar(&mut self) {
        let metrics: &dyn TextMeasure = match &self.text_renderer {
            Some(renderer) => renderer,
            None => &FixedMetrics,
        };
        self.bar.measure(
            MeasureSpec::Exactly(LOGICAL_WIDTH as f32),
            MeasureSpec::Exactly(BAR_HEIGHT as f32),
            metrics,
        );
        self.bar.set_frame(Rect::new(0.0, CONTENT_HEIGHT, LOGICAL_WIDTH as f32, BAR_HEIGHT as f32));
    }

    fn timestamp(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// 推进分页吸附和图标动画，返回是否还需要下一帧
    fn update(&mut self) -> bool {
        let dt = self.last_frame.elapsed().as_secs_f32();
        self.last_frame = Instant::now();

        let settling = self.pager.borrow_mut().update(dt);
        self.bar.sync_pager();
        let animating = self.bar.tick(dt);
        if settling || self.bar.take_redraw() {
            self.needs_redraw = true;
        }
        settling || animating || self.drag == Some(DragTarget::Pager)
    }

    fn render(&mut self) {
        self.canvas.clear(Color::WHITE);
        let titles = self.bar.titles().to_vec();
        let pages = self.pager.borrow().visible_pages();

        for (index, offset) in pages {
            let page = Rect::new(offset, 0.0, LOGICAL_WIDTH as f32, CONTENT_HEIGHT);
            let fill = Paint::fill(PAGE_COLORS[index % PAGE_COLORS.len()]);
            self.canvas.draw_rect(&page, &fill);

            if let (Some(text), Some(title)) = (&self.text_renderer, titles.get(index)) {
                let width = text.text_width(title, PAGE_TITLE_SIZE);
                let paint = Paint::fill(Color::DARK_GRAY);
                text.draw_text(
                    &mut self.canvas,
                    title,
                    page.center_x() - width / 2.0,
                    page.center_y(),
                    PAGE_TITLE_SIZE,
                    &paint,
                );
            }
        }

        self.bar.render(&mut self.canvas, self.text_renderer.as_ref());
        self.needs_redraw = false;
    }

    /// 逻辑画布按最近邻放大到物理缓冲区
    fn present(&mut self) {
        let (Some(window), Some(surface)) = (&self.window, &mut self.surface) else {
            return;
        };
        let size = window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return;
        };
        if let Err(e) = surface.resize(width, height) {
            tracing::error!(error = %e, "surface resize failed");
            return;
        }
        let mut buffer = match surface.buffer_mut() {
            Ok(buffer) => buffer,
            Err(e) => {
                tracing::error!(error = %e, "surface buffer unavailable");
                return;
            }
        };

        let scale = self.scale_factor as f32;
        let pixels = self.canvas.pixels();
        let (cw, ch) = (self.canvas.width(), self.canvas.height());
        for y in 0..size.height {
            let sy = ((y as f32 / scale) as u32).min(ch - 1);
            for x in 0..size.width {
                let sx = ((x as f32 / scale) as u32).min(cw - 1);
                let c = pixels[(sy * cw + sx) as usize];
                buffer[(y * size.width + x) as usize] = ((c.r as u32) << 16) | ((c.g as u32) << 8) | c.b as u32;
            }
        }
        if let Err(e) = buffer.present() {
            tracing::error!(error = %e, "present failed");
        }
    }

    fn handle_press(&mut self) {
        let (x, y) = self.mouse_pos;
        let ts = self.timestamp();
        if y < CONTENT_HEIGHT {
            self.drag = Some(DragTarget::Pager);
            self.pager.borrow_mut().begin_drag(x, ts);
        } else {
            self.drag = Some(DragTarget::Bar);
            self.bar.on_touch(&TouchEvent::down(x, y, ts));
        }
        self.bar.sync_pager();
    }

    fn handle_move(&mut self) {
        let (x, y) = self.mouse_pos;
        let ts = self.timestamp();
        match self.drag {
            Some(DragTarget::Pager) => {
                self.pager.borrow_mut().update_drag(x, ts);
                self.bar.sync_pager();
                self.needs_redraw = true;
            }
            Some(DragTarget::Bar) => {
                self.bar.on_touch(&TouchEvent::moved(x, y, ts));
            }
            None => {}
        }
    }

    /// 光标离开窗口时结束进行中的手势
    fn handle_leave(&mut self) {
        let (x, y) = self.mouse_pos;
        match self.drag.take() {
            Some(DragTarget::Pager) => self.pager.borrow_mut().end_drag(),
            Some(DragTarget::Bar) => {
                self.bar.on_touch(&TouchEvent::new(TouchPhase::Cancel, x, y, self.timestamp()));
            }
            None => return,
        }
        self.bar.sync_pager();
        self.needs_redraw = true;
    }

    fn handle_release(&mut self) {
        let (x, y) = self.mouse_pos;
        match self.drag.take() {
            Some(DragTarget::Pager) => self.pager.borrow_mut().end_drag(),
            Some(DragTarget::Bar) => {
                self.bar.on_touch(&TouchEvent::up(x, y, self.timestamp()));
            }
            None => return,
        }
        self.bar.sync_pager();
        self.needs_redraw = true;
    }

    fn handle_key(&mut self, code: KeyCode) {
        let result = match code {
            KeyCode::Digit1 => self.bar.set_plain_icons_from_ids(&self.resources, &demo::SKIN_IDS),
            KeyCode::Digit2 => self.bar.set_animated_icons_from_ids(&self.resources, &demo::ANIMATION_IDS),
            KeyCode::Digit0 => {
                self.bar.restore_original_icons();
                Ok(())
            }
            KeyCode::ArrowLeft => {
                self.bar.set_selected(self.bar.selected_index().saturating_sub(1));
                Ok(())
            }
            KeyCode::ArrowRight => {
                let last = self.bar.item_count().saturating_sub(1);
                self.bar.set_selected((self.bar.selected_index() + 1).min(last));
                Ok(())
            }
            _ => return,
        };
        if let Err(e) = result {
            tracing::error!(error = %e, "icon swap failed");
        }
        self.needs_redraw = true;
    }
}

impl ApplicationHandler for NavBarWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = WindowAttributes::default()
            .with_title("Bump NavigationBar")
            .with_inner_size(LogicalSize::new(LOGICAL_WIDTH, LOGICAL_HEIGHT))
            .with_resizable(false);
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                tracing::error!(error = %e, "failed to create window");
                event_loop.exit();
                return;
            }
        };
        self.scale_factor = window.scale_factor();

        let surface = softbuffer::Context::new(Arc::clone(&window))
            .and_then(|context| softbuffer::Surface::new(&context, Arc::clone(&window)));
        match surface {
            Ok(surface) => self.surface = Some(surface),
            Err(e) => {
                tracing::error!(error = %e, "failed to create surface");
                event_loop.exit();
                return;
            }
        }

        tracing::info!(scale_factor = self.scale_factor, "window created");
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = scale_factor;
                self.needs_redraw = true;
            }

            WindowEvent::CursorMoved { position, .. } => {
                let scale = self.scale_factor as f32;
                self.mouse_pos = (position.x as f32 / scale, position.y as f32 / scale);
                self.handle_move();
            }

            WindowEvent::CursorLeft { .. } => self.handle_leave(),

            WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => match state {
                ElementState::Pressed => self.handle_press(),
                ElementState::Released => self.handle_release(),
            },

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        self.handle_key(code);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let animating = self.update();
                if self.needs_redraw || animating {
                    self.render();
                    self.present();
                }
                if animating {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }

            _ => {}
        }

        if self.needs_redraw {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    demo::init_tracing();

    let config_path = std::env::args().nth(1);
    let config = demo::load_config(config_path.as_deref())?;
    let mut app = NavBarWindow::new(&config)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run_app(&mut app)?;
    Ok(())
}
