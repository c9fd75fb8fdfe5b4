//! 图标视图 - 静态可着色图标或帧动画，支持缩放与纵向平移

use super::animation::FrameAnimation;
use super::component::{Component, ComponentId};
use super::measure::{LayoutParams, MeasureSpec};
use crate::text::{TextMeasure, TextRenderer};
use crate::{Bitmap, Canvas, Color, Drawable, Rect, Size};
use std::rc::Rc;

/// 图标内容
#[derive(Debug, Clone, Default)]
pub enum IconContent {
    #[default]
    Empty,
    Drawable(Rc<Drawable>),
    Animation(FrameAnimation),
}

/// IconView - 导航项的图标
pub struct IconView {
    id: ComponentId,
    params: LayoutParams,
    measured: Size,
    frame: Rect,
    content: IconContent,
    scale: f32,
    translation_y: f32,
}

impl IconView {
    pub fn new(params: LayoutParams) -> Self {
        Self {
            id: ComponentId::new(),
            params,
            measured: Size::default(),
            frame: Rect::default(),
            content: IconContent::Empty,
            scale: 1.0,
            translation_y: 0.0,
        }
    }

    pub fn with_drawable(mut self, drawable: Rc<Drawable>) -> Self {
        self.content = IconContent::Drawable(drawable);
        self
    }

    pub fn content(&self) -> &IconContent {
        &self.content
    }

    pub fn set_drawable(&mut self, drawable: Rc<Drawable>) {
        self.content = IconContent::Drawable(drawable);
    }

    /// 设置帧动画，并停在最后一帧
    pub fn set_animation(&mut self, mut animation: FrameAnimation) {
        animation.set_progress(1.0);
        self.content = IconContent::Animation(animation);
    }

    pub fn drawable(&self) -> Option<&Rc<Drawable>> {
        match &self.content {
            IconContent::Drawable(d) => Some(d),
            _ => None,
        }
    }

    pub fn animation(&self) -> Option<&FrameAnimation> {
        match &self.content {
            IconContent::Animation(a) => Some(a),
            _ => None,
        }
    }

    /// 着色只作用于静态图标
    pub fn set_tint(&self, color: Color) {
        if let IconContent::Drawable(d) = &self.content {
            d.set_tint(color);
        }
    }

    pub fn tint(&self) -> Option<Color> {
        self.drawable().and_then(|d| d.tint())
    }

    pub fn play_animation(&mut self) {
        if let IconContent::Animation(a) = &mut self.content {
            a.play_once();
        }
    }

    pub fn cancel_animation(&mut self) {
        if let IconContent::Animation(a) = &mut self.content {
            a.cancel();
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(&self.content, IconContent::Animation(a) if a.is_playing())
    }

    /// 推进动画，返回是否仍在播放
    pub fn tick(&mut self, dt: f32) -> bool {
        match &mut self.content {
            IconContent::Animation(a) => a.tick(dt),
            _ => false,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    pub fn translation_y(&self) -> f32 {
        self.translation_y
    }

    pub fn set_translation_y(&mut self, dy: f32) {
        self.translation_y = dy;
    }

    fn intrinsic_size(&self) -> Size {
        match &self.content {
            IconContent::Empty => Size::default(),
            IconContent::Drawable(d) => d.intrinsic_size(),
            IconContent::Animation(a) => a.intrinsic_size(),
        }
    }

    fn current_bitmap(&self) -> Option<&Bitmap> {
        match &self.content {
            IconContent::Empty => None,
            IconContent::Drawable(d) => Some(d.bitmap()),
            IconContent::Animation(a) => Some(a.current_bitmap()),
        }
    }

    /// 应用缩放（以中心为锚点）和平移后的实际绘制区域
    pub fn draw_bounds(&self) -> Rect {
        self.frame.scaled_from_center(self.scale).translated(0.0, self.translation_y)
    }
}

impl Component for IconView {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn layout_params(&self) -> LayoutParams {
        self.params
    }

    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec, _text: &dyn TextMeasure) {
        let intrinsic = self.intrinsic_size();
        self.measured = Size::new(width.resolve(intrinsic.width), height.resolve(intrinsic.height));
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn render(&self, canvas: &mut Canvas, _text: Option<&TextRenderer>) {
        if let Some(bitmap) = self.current_bitmap() {
            canvas.draw_bitmap(bitmap, &self.draw_bounds(), self.tint());
        }
    }

    fn type_name(&self) -> &'static str {
        "IconView"
    }
}
