//! 组件基础定义

use super::measure::{LayoutParams, MeasureSpec};
use crate::text::{TextMeasure, TextRenderer};
use crate::{Canvas, Rect, Size};
use std::sync::atomic::{AtomicU64, Ordering};

static COMPONENT_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// 组件 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(pub u64);

impl ComponentId {
    pub fn new() -> Self {
        Self(COMPONENT_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ComponentId {
    fn default() -> Self {
        Self::new()
    }
}

/// 组件 trait：先测量，再定位，最后绘制
pub trait Component {
    fn id(&self) -> ComponentId;

    fn layout_params(&self) -> LayoutParams;

    /// 测量阶段，结果通过 `measured_size` 读取
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec, text: &dyn TextMeasure);

    fn measured_size(&self) -> Size;

    /// 定位阶段，frame 位于父组件坐标系
    fn set_frame(&mut self, frame: Rect);

    fn frame(&self) -> Rect;

    /// 渲染组件（父组件坐标系）
    fn render(&self, canvas: &mut Canvas, text: Option<&TextRenderer>);

    /// 组件类型名
    fn type_name(&self) -> &'static str {
        "Component"
    }
}

/// 容纳子组件的父容器
pub trait ParentContainer {
    /// 子组件绘制是否裁剪到自身边界
    fn set_clip_children(&mut self, clip: bool);

    fn clip_children(&self) -> bool;
}
