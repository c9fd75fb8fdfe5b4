//! 横向分页容器 - 拖拽跟手、惯性翻页与回弹吸附
//!
//! 容器不直接回调监听者，而是把页面事件放进队列，由持有者通过
//! `drain_events` 取出。这样导航栏命令容器跳页时不会被同步重入。

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// 共享的分页容器句柄
pub type PagerHandle = Rc<RefCell<PageContainer>>;

/// 吸附动画时长（秒）
const SETTLE_DURATION: f32 = 0.3;
/// 超过该速度（像素/秒）视为快速滑动，直接翻到下一页
const FLING_VELOCITY: f32 = 400.0;
/// 速度采样窗口（毫秒）
const VELOCITY_WINDOW_MS: u64 = 100;

/// 滚动状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollState {
    Idle,
    Dragging,
    Settling,
}

/// 页面事件
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    /// 每帧滚动：左侧页索引、到右侧页的进度 [0, 1)、像素偏移
    Scrolled { position: usize, offset: f32, offset_px: f32 },
    ScrollStateChanged(ScrollState),
    /// 目标页确定（手指抬起时即触发，不等滚动结束）
    PageSelected(usize),
}

/// PageContainer - 分页容器
pub struct PageContainer {
    page_count: usize,
    page_width: f32,
    current: usize,
    scroll_x: f32,
    state: ScrollState,
    drag_start_x: f32,
    drag_start_scroll: f32,
    // (x, timestamp_ms)
    velocity_samples: Vec<(f32, u64)>,
    settle_timer: f32,
    settle_from: f32,
    settle_target: usize,
    events: VecDeque<PageEvent>,
}

impl PageContainer {
    pub fn new(page_count: usize, page_width: f32) -> Self {
        Self {
            page_count,
            page_width,
            current: 0,
            scroll_x: 0.0,
            state: ScrollState::Idle,
            drag_start_x: 0.0,
            drag_start_scroll: 0.0,
            velocity_samples: Vec::with_capacity(10),
            settle_timer: 0.0,
            settle_from: 0.0,
            settle_target: 0,
            events: VecDeque::new(),
        }
    }

    /// 包装成共享句柄
    pub fn into_handle(self) -> PagerHandle {
        Rc::new(RefCell::new(self))
    }

    pub fn page_count(&self) -> usize { self.page_count }
    pub fn page_width(&self) -> f32 { self.page_width }
    pub fn current_item(&self) -> usize { self.current }
    pub fn scroll_x(&self) -> f32 { self.scroll_x }
    pub fn scroll_state(&self) -> ScrollState { self.state }

    /// 视口宽度变化时保持在当前页
    pub fn set_page_width(&mut self, width: f32) {
        self.page_width = width;
        self.scroll_x = self.current as f32 * width;
    }

    fn max_scroll(&self) -> f32 {
        self.page_count.saturating_sub(1) as f32 * self.page_width
    }

    fn set_state(&mut self, state: ScrollState) {
        if self.state != state {
            self.state = state;
            self.events.push_back(PageEvent::ScrollStateChanged(state));
        }
    }

    fn emit_scrolled(&mut self) {
        if self.page_width <= 0.0 || self.page_count == 0 {
            return;
        }
        let pos = self.scroll_x / self.page_width;
        let position = (pos.floor() as usize).min(self.page_count - 1);
        let mut offset = pos - position as f32;
        if offset < 1e-4 {
            offset = 0.0;
        }
        self.events.push_back(PageEvent::Scrolled {
            position,
            offset,
            offset_px: offset * self.page_width,
        });
    }

    pub fn begin_drag(&mut self, x: f32, timestamp: u64) {
        if self.page_count == 0 { return; }
        self.drag_start_x = x;
        self.drag_start_scroll = self.scroll_x;
        self.velocity_samples.clear();
        self.velocity_samples.push((x, timestamp));
        self.set_state(ScrollState::Dragging);
    }

    pub fn update_drag(&mut self, x: f32, timestamp: u64) {
        if self.state != ScrollState::Dragging { return; }
        let delta = self.drag_start_x - x;
        self.scroll_x = (self.drag_start_scroll + delta).clamp(0.0, self.max_scroll());
        self.velocity_samples.push((x, timestamp));
        self.velocity_samples
            .retain(|(_, t)| timestamp >= *t && timestamp - *t < VELOCITY_WINDOW_MS);
        self.emit_scrolled();
    }

    /// 松手：根据速度和位置选择目标页并开始吸附
    pub fn end_drag(&mut self) {
        if self.state != ScrollState::Dragging { return; }
        let velocity = self.release_velocity();
        let pos = if self.page_width > 0.0 { self.scroll_x / self.page_width } else { 0.0 };
        let target = if velocity > FLING_VELOCITY {
            pos.ceil()
        } else if velocity < -FLING_VELOCITY {
            pos.floor()
        } else {
            pos.round()
        };
        let target = (target.max(0.0) as usize).min(self.page_count - 1);
        tracing::trace!(velocity, target, "pager drag released");
        self.start_settle(target);
    }

    /// 滚动方向上的速度（像素/秒），正值表示向后翻页
    fn release_velocity(&self) -> f32 {
        let (Some(first), Some(last)) = (self.velocity_samples.first(), self.velocity_samples.last()) else {
            return 0.0;
        };
        let dt = last.1.saturating_sub(first.1) as f32 / 1000.0;
        if dt < 0.001 { return 0.0; }
        (first.0 - last.0) / dt
    }

    fn start_settle(&mut self, target: usize) {
        if target != self.current {
            self.current = target;
            self.events.push_back(PageEvent::PageSelected(target));
        }
        self.settle_target = target;
        self.settle_from = self.scroll_x;
        self.settle_timer = 0.0;

        let target_x = target as f32 * self.page_width;
        if (self.scroll_x - target_x).abs() < 0.5 {
            self.scroll_x = target_x;
            self.emit_scrolled();
            self.set_state(ScrollState::Idle);
        } else {
            self.set_state(ScrollState::Settling);
        }
    }

    /// 推进吸附动画，返回是否仍在动画中
    pub fn update(&mut self, dt: f32) -> bool {
        if self.state != ScrollState::Settling { return false; }
        self.settle_timer += dt;
        let t = (self.settle_timer / SETTLE_DURATION).min(1.0);
        let ease = 1.0 - (1.0 - t).powi(3);
        let target_x = self.settle_target as f32 * self.page_width;
        self.scroll_x = self.settle_from + (target_x - self.settle_from) * ease;
        if t >= 1.0 {
            self.scroll_x = target_x;
            self.emit_scrolled();
            self.set_state(ScrollState::Idle);
            return false;
        }
        self.emit_scrolled();
        true
    }

    /// 切换到指定页
    ///
    /// 已经静止在该页时什么都不做，重复的跳页命令是安全的。
    pub fn set_current_item(&mut self, index: usize, smooth: bool) {
        if self.page_count == 0 { return; }
        let index = index.min(self.page_count - 1);
        let aligned = (self.scroll_x - index as f32 * self.page_width).abs() < 0.5;
        if index == self.current && self.state == ScrollState::Idle && aligned {
            return;
        }

        if smooth {
            self.start_settle(index);
            return;
        }

        let previous = self.current;
        self.current = index;
        self.scroll_x = index as f32 * self.page_width;
        if index != previous {
            self.events.push_back(PageEvent::PageSelected(index));
        }
        self.emit_scrolled();
        self.set_state(ScrollState::Idle);
    }

    /// 取出所有待处理事件
    pub fn drain_events(&mut self) -> Vec<PageEvent> {
        self.events.drain(..).collect()
    }

    /// 当前可见的页：(页索引, 相对视口的 x 偏移)
    pub fn visible_pages(&self) -> Vec<(usize, f32)> {
        if self.page_count == 0 || self.page_width <= 0.0 {
            return Vec::new();
        }
        let pos = self.scroll_x / self.page_width;
        let first = pos.floor() as usize;
        let last = (pos.ceil() as usize).min(self.page_count - 1);
        (first..=last)
            .map(|i| (i, i as f32 * self.page_width - self.scroll_x))
            .collect()
    }
}
