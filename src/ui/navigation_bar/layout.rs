//! 测量与布局

use super::NavigationBar;
use crate::text::{TextMeasure, TextRenderer};
use crate::ui::component::{Component, ComponentId, ParentContainer};
use crate::ui::measure::{Dimension, LayoutParams, MeasureSpec};
use crate::{Canvas, Rect, Size};

impl NavigationBar {
    /// 逐项测量图标和标题，返回累积的 (宽, 高)
    pub(super) fn measure_items(&mut self, width: MeasureSpec, height: MeasureSpec, text: &dyn TextMeasure) -> Size {
        let parent_w = width.size().unwrap_or(0.0);
        let parent_h = height.size().unwrap_or(0.0);
        let gap = self.style.icon_label_gap;
        let mut used_width = 0.0f32;
        let mut used_height = 0.0f32;

        for (icon, label) in self.icon_views.iter_mut().zip(self.labels.iter_mut()) {
            let params = icon.layout_params();
            icon.measure(
                params.width.child_spec(width, parent_w - used_width),
                params.height.child_spec(height, parent_h),
                text,
            );
            let icon_size = icon.measured_size();

            let params = label.layout_params();
            label.measure(
                params.width.child_spec(width, parent_w - used_width),
                params.height.child_spec(height, parent_h - icon_size.height - gap),
                text,
            );
            let label_size = label.measured_size();

            used_width += icon_size.width.max(label_size.width);
            used_height = used_height.max(icon_size.height + label_size.height + gap);
        }

        Size::new(used_width, used_height)
    }

    /// 定位子组件，并关闭父容器的子组件裁剪
    ///
    /// 放大的图标和顶部隆起会画到导航栏之外。
    pub fn layout(&mut self, frame: Rect, parent: Option<&mut dyn ParentContainer>) {
        self.frame = frame;
        let count = self.icon_views.len();
        if count > 0 {
            let slot = frame.width / count as f32;
            let gap = self.style.icon_label_gap;
            for (i, (icon, label)) in self.icon_views.iter_mut().zip(self.labels.iter_mut()).enumerate() {
                let icon_size = icon.measured_size();
                let label_size = label.measured_size();
                let left = slot * i as f32;
                let top = (frame.height - (icon_size.height + label_size.height + gap)) / 2.0;

                icon.set_frame(Rect::new(
                    left + (slot - icon_size.width) / 2.0,
                    top,
                    icon_size.width,
                    icon_size.height,
                ));
                label.set_frame(Rect::new(
                    left + (slot - label_size.width) / 2.0,
                    top + icon_size.height + gap,
                    label_size.width,
                    label_size.height,
                ));
            }
            self.icon_measure_size = self.icon_views[0].measured_size().height;
            self.refresh_lift();
        }

        if let Some(parent) = parent {
            parent.set_clip_children(false);
        }
        self.needs_redraw = true;
    }

    /// 图标尺寸确定后按当前缩放重新计算上移距离
    fn refresh_lift(&mut self) {
        let s = self.style.icon_scale;
        if !self.scale_mode() || s == 1.0 {
            return;
        }
        let lift = self.lift();
        for view in &mut self.icon_views {
            let progress = (view.scale() - 1.0) / (s - 1.0);
            view.set_translation_y(lift * progress);
        }
    }
}

impl Component for NavigationBar {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn layout_params(&self) -> LayoutParams {
        LayoutParams::new(Dimension::MatchParent, Dimension::WrapContent)
    }

    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec, text: &dyn TextMeasure) {
        let used = self.measure_items(width, height, text);
        self.measured = Size::new(width.resolve(used.width), height.resolve(used.height));
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn set_frame(&mut self, frame: Rect) {
        self.layout(frame, None);
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn render(&self, canvas: &mut Canvas, text: Option<&TextRenderer>) {
        self.draw(canvas, text);
    }

    fn type_name(&self) -> &'static str {
        "NavigationBar"
    }
}
