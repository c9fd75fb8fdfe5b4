//! 底部导航栏
//!
//! 图标在上、标题在下的若干导航项横向等分排列。选中项的标题和图标着色，
//! 在可缩放模式下选中图标放大上移，顶部边界线在选中图标处隆起。
//!
//! 导航栏可以与一个 [`PageContainer`](super::pager::PageContainer) 配对：
//! 点击导航项会让容器跳页，滑动容器会驱动颜色/缩放过渡并在松手后更新选中项。
//! 两个方向的事件都先变成 [`NavIntent`] 放进同一个收件箱，由 `process`
//! 逐个处理，处理过程中容器产生的事件会在当前意图结束后再排队，
//! 因此不会重入导航栏。

mod boundary;
mod icons;
mod layout;
mod transition;

use super::component::ComponentId;
use super::icon_view::IconView;
use super::label::Label;
use super::measure::LayoutParams;
use super::pager::{PageEvent, PagerHandle, ScrollState};
use crate::config::{NavBarConfig, NavBarStyle};
use crate::error::NavError;
use crate::event::{TouchEvent, TouchPhase};
use crate::resources::Resources;
use crate::{Color, Drawable, Point, Rect, Size};
use std::collections::VecDeque;
use std::rc::Rc;

pub use transition::TransitionState;

/// 图标风格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconStyle {
    /// 菜单中的原始图标，通过着色表示选中
    #[default]
    Original,
    /// 帧动画图标，选中时播放一次
    Animated,
    /// 替换后的静态图标，不着色
    Plain,
}

/// 当前选中变化的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangeOrigin {
    /// 点击或代码设置
    #[default]
    Local,
    /// 用户滑动配对容器
    External,
}

/// 导航栏收件箱中的意图
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavIntent {
    /// 手指在导航栏内抬起，x 为导航栏坐标
    Tap(f32),
    /// 宿主代码设置选中项
    Select(usize),
    /// 配对容器的页面事件
    Page(PageEvent),
}

/// NavigationBar - 底部导航栏
pub struct NavigationBar {
    id: ComponentId,
    style: NavBarStyle,

    // 四个并行序列，下标一一对应
    titles: Vec<String>,
    original_icons: Vec<Rc<Drawable>>,
    icon_views: Vec<IconView>,
    labels: Vec<Label>,

    selected_index: usize,
    icon_style: IconStyle,
    transition: TransitionState,
    origin: ChangeOrigin,

    inbox: VecDeque<NavIntent>,
    pager: Option<PagerHandle>,
    on_item_selected: Option<Box<dyn FnMut(usize)>>,

    measured: Size,
    frame: Rect,
    icon_measure_size: f32,
    needs_redraw: bool,
}

impl NavigationBar {
    /// 使用解析后的样式创建空导航栏
    pub fn with_style(style: NavBarStyle) -> Self {
        Self {
            id: ComponentId::new(),
            style,
            titles: Vec::new(),
            original_icons: Vec::new(),
            icon_views: Vec::new(),
            labels: Vec::new(),
            selected_index: 0,
            icon_style: IconStyle::Original,
            transition: TransitionState::default(),
            origin: ChangeOrigin::Local,
            inbox: VecDeque::new(),
            pager: None,
            on_item_selected: None,
            measured: Size::default(),
            frame: Rect::default(),
            icon_measure_size: 0.0,
            needs_redraw: true,
        }
    }

    /// 从配置创建空导航栏（忽略 `menu`）
    pub fn new(config: &NavBarConfig) -> Result<Self, NavError> {
        Ok(Self::with_style(config.resolve()?))
    }

    /// 从配置创建导航栏，并按 `menu` 从资源中批量添加导航项
    pub fn from_config(config: &NavBarConfig, resources: &dyn Resources) -> Result<Self, NavError> {
        let mut bar = Self::new(config)?;
        if let Some(menu_id) = &config.menu {
            let items = resources.menu(menu_id)?;
            tracing::info!(menu = %menu_id, count = items.len(), "inflating navigation menu");
            for item in items {
                let icon = Drawable::new(resources.drawable(&item.icon)?);
                bar.add_item(&item.title, icon);
            }
        }
        Ok(bar)
    }

    /// 绑定配对的分页容器，替换之前的绑定
    pub fn bind_pager(&mut self, pager: PagerHandle) {
        tracing::debug!("pager bound to navigation bar");
        self.pager = Some(pager);
    }

    /// 释放对分页容器的引用
    pub fn release_pager(&mut self) {
        self.pager = None;
    }

    pub fn pager(&self) -> Option<&PagerHandle> {
        self.pager.as_ref()
    }

    /// 设置选中回调，只保留最后一次设置的
    pub fn set_on_item_selected(&mut self, listener: impl FnMut(usize) + 'static) {
        self.on_item_selected = Some(Box::new(listener));
    }

    /// 追加导航项，图标与 `original_icon` 共享同一个 drawable
    pub fn add_item(&mut self, title: &str, icon: Rc<Drawable>) {
        let first = self.titles.is_empty();
        if self.icon_style == IconStyle::Original {
            icon.set_tint(self.style.normal_color);
        }

        let icon_view = IconView::new(LayoutParams::square(self.style.icon_size))
            .with_drawable(Rc::clone(&icon));
        let label = Label::new(title)
            .with_font_size(self.style.label_font_size)
            .with_color(self.style.normal_color);

        self.titles.push(title.to_string());
        self.original_icons.push(icon);
        self.icon_views.push(icon_view);
        self.labels.push(label);
        tracing::debug!(title, index = self.titles.len() - 1, "navigation item added");

        if first {
            self.highlight(0);
            self.selected_index = 0;
        }
        self.needs_redraw = true;
    }

    /// 代码设置选中项，已选中时什么都不做
    ///
    /// 下标越界会 panic。
    pub fn set_selected(&mut self, index: usize) {
        self.post(NavIntent::Select(index));
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// 处理触摸事件，坐标为父组件坐标系
    ///
    /// 导航栏消费所有触摸事件。
    pub fn on_touch(&mut self, event: &TouchEvent) -> bool {
        if event.phase == TouchPhase::Up {
            let local = event.relative_to(Point::new(self.frame.x, self.frame.y));
            self.post(NavIntent::Tap(local.x));
        }
        true
    }

    /// 处理配对容器中积压的事件
    ///
    /// 宿主驱动容器（拖拽、`update`）之后调用。
    pub fn sync_pager(&mut self) {
        self.drain_pager();
        self.process();
    }

    /// 推进图标动画，返回是否仍有动画在播放
    pub fn tick(&mut self, dt: f32) -> bool {
        let mut animating = false;
        for view in &mut self.icon_views {
            if view.is_animating() {
                view.tick(dt);
                self.needs_redraw = true;
                animating |= view.is_animating();
            }
        }
        animating
    }

    /// 目前没有效果
    pub fn enable_item_gradient(&mut self, enable: bool) {
        self.style.item_gradient = enable;
    }

    pub fn item_gradient(&self) -> bool {
        self.style.item_gradient
    }

    pub fn set_normal_color(&mut self, color: Color) {
        self.style.normal_color = color;
        for i in 0..self.labels.len() {
            if i == self.selected_index {
                continue;
            }
            if self.icon_style == IconStyle::Original {
                self.icon_views[i].set_tint(color);
            }
            self.labels[i].set_text_color(color);
        }
        self.needs_redraw = true;
    }

    pub fn set_selected_color(&mut self, color: Color) {
        self.style.selected_color = color;
        if self.selected_index < self.labels.len() {
            if self.icon_style == IconStyle::Original {
                self.icon_views[self.selected_index].set_tint(color);
            }
            self.labels[self.selected_index].set_text_color(color);
        }
        self.needs_redraw = true;
    }

    pub fn style(&self) -> &NavBarStyle {
        &self.style
    }

    pub fn icon_style(&self) -> IconStyle {
        self.icon_style
    }

    pub fn change_origin(&self) -> ChangeOrigin {
        self.origin
    }

    pub fn transition(&self) -> TransitionState {
        self.transition
    }

    pub fn item_count(&self) -> usize {
        self.titles.len()
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn original_icons(&self) -> &[Rc<Drawable>] {
        &self.original_icons
    }

    pub fn icon_views(&self) -> &[IconView] {
        &self.icon_views
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// 选中图标的测量高度，用于计算放大后的上移距离
    pub fn icon_measure_size(&self) -> f32 {
        self.icon_measure_size
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// 读取并清除重绘标记
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn scale_mode(&self) -> bool {
        self.style.icon_scalable && self.icon_style != IconStyle::Original
    }

    fn post(&mut self, intent: NavIntent) {
        self.drain_pager();
        self.inbox.push_back(intent);
        self.process();
    }

    fn drain_pager(&mut self) {
        let Some(pager) = &self.pager else { return };
        let events = match pager.try_borrow_mut() {
            Ok(mut pager) => pager.drain_events(),
            Err(_) => {
                tracing::warn!("pager is borrowed elsewhere, events left queued");
                return;
            }
        };
        self.inbox.extend(events.into_iter().map(NavIntent::Page));
    }

    fn process(&mut self) {
        while let Some(intent) = self.inbox.pop_front() {
            self.handle(intent);
            self.drain_pager();
        }
    }

    fn handle(&mut self, intent: NavIntent) {
        match intent {
            NavIntent::Tap(x) => self.handle_tap(x),
            NavIntent::Select(index) => {
                if index != self.selected_index {
                    self.select(index, true, ChangeOrigin::Local);
                }
            }
            NavIntent::Page(event) => self.handle_page_event(event),
        }
    }

    fn handle_tap(&mut self, x: f32) {
        let count = self.titles.len();
        let width = if self.frame.width > 0.0 { self.frame.width } else { self.measured.width };
        if count == 0 || width <= 0.0 || x < 0.0 {
            tracing::warn!(x, count, "tap ignored");
            return;
        }
        let index = (x / (width / count as f32)).floor() as usize;
        if index >= count {
            tracing::warn!(x, index, "tap beyond last item ignored");
            return;
        }
        if index != self.selected_index {
            self.select(index, true, ChangeOrigin::Local);
        }
    }

    fn handle_page_event(&mut self, event: PageEvent) {
        match event {
            PageEvent::ScrollStateChanged(ScrollState::Dragging) => {
                self.origin = ChangeOrigin::External;
            }
            PageEvent::ScrollStateChanged(ScrollState::Idle) => {
                if self.origin == ChangeOrigin::External && !self.titles.is_empty() {
                    self.snap_to_selection();
                }
            }
            PageEvent::ScrollStateChanged(_) => {}
            PageEvent::Scrolled { position, offset, .. } => {
                if self.origin == ChangeOrigin::External {
                    self.interpolate(position, offset);
                }
            }
            PageEvent::PageSelected(position) => {
                if self.origin == ChangeOrigin::Local || position >= self.titles.len() {
                    return;
                }
                // 动画图标在 highlight 中播放
                self.select(position, true, ChangeOrigin::External);
            }
        }
    }

    /// 选中变化：高亮、同步容器、通知宿主
    fn select(&mut self, index: usize, notify: bool, origin: ChangeOrigin) {
        let interrupts_swipe = origin == ChangeOrigin::Local && self.origin == ChangeOrigin::External;
        self.origin = origin;
        self.highlight(index);
        tracing::debug!(from = self.selected_index, to = index, ?origin, "selection changed");

        if origin == ChangeOrigin::Local {
            if let Some(pager) = &self.pager {
                match pager.try_borrow_mut() {
                    Ok(mut pager) => pager.set_current_item(index, false),
                    Err(_) => tracing::warn!(index, "pager busy, page jump skipped"),
                }
            }
        }
        if notify {
            if let Some(listener) = self.on_item_selected.as_mut() {
                listener(index);
            }
        }
        self.selected_index = index;

        // 打断滑动时，插值留下的中间状态可能落在第三项上，之后的 Idle 又会被忽略
        if interrupts_swipe {
            self.snap_to_selection();
        }
    }
}
