//! 选中高亮与滑动过渡

use super::{IconStyle, NavigationBar};
use crate::Color;

/// 滑动过渡状态：左侧导航项下标和到右侧项的进度
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransitionState {
    pub position: usize,
    pub offset: f32,
}

impl NavigationBar {
    /// 选中项放大后的上移距离
    pub(super) fn lift(&self) -> f32 {
        -(self.style.icon_scale - 1.0) * self.icon_measure_size / 2.0
    }

    /// 取消上一个选中项的强调并强调 `index`，不改变选中下标
    pub(super) fn highlight(&mut self, index: usize) {
        let previous = self.selected_index.min(self.labels.len().saturating_sub(1));
        self.transition.position = index;

        if self.icon_style != IconStyle::Original {
            if self.style.icon_scalable {
                let lift = self.lift();
                let previous_view = &mut self.icon_views[previous];
                previous_view.set_scale(1.0);
                previous_view.set_translation_y(0.0);
                let view = &mut self.icon_views[index];
                view.set_scale(self.style.icon_scale);
                view.set_translation_y(lift);
                // 动画只在可缩放时播放
                if self.icon_style == IconStyle::Animated {
                    view.play_animation();
                }
            }
        } else {
            self.icon_views[previous].set_tint(self.style.normal_color);
            self.icon_views[index].set_tint(self.style.selected_color);
        }

        self.labels[previous].set_text_color(self.style.normal_color);
        self.labels[index].set_text_color(self.style.selected_color);
        self.needs_redraw = true;
    }

    /// 按滑动进度在 `position` 和 `position + 1` 之间插值颜色与缩放
    pub(super) fn interpolate(&mut self, position: usize, offset: f32) {
        if position + 1 >= self.labels.len() {
            return;
        }
        let selected = self.style.selected_color;
        let normal = self.style.normal_color;
        let leaving = Color::lerp_hsv(selected, normal, offset);
        let entering = Color::lerp_hsv(normal, selected, offset);

        if self.icon_style == IconStyle::Original {
            self.icon_views[position].set_tint(leaving);
            self.icon_views[position + 1].set_tint(entering);
        }
        self.labels[position].set_text_color(leaving);
        self.labels[position + 1].set_text_color(entering);

        if self.scale_mode() {
            let s = self.style.icon_scale;
            let lift = self.lift();
            let left = &mut self.icon_views[position];
            left.set_scale(s - (s - 1.0) * offset);
            left.set_translation_y(lift * (1.0 - offset));
            let right = &mut self.icon_views[position + 1];
            right.set_scale(1.0 + (s - 1.0) * offset);
            right.set_translation_y(lift * offset);
        }

        tracing::trace!(position, offset, "navigation transition");
        self.transition = TransitionState { position, offset };
        self.needs_redraw = true;
    }

    /// 滑动停止后把所有导航项对齐到选中状态
    ///
    /// 停在最后一项时容器最后一帧的滚动事件不会插值，由这里收尾。
    pub(super) fn snap_to_selection(&mut self) {
        let selected = self.selected_index;
        let scale_mode = self.scale_mode();
        let lift = self.lift();
        for i in 0..self.labels.len() {
            let is_selected = i == selected;
            let color = if is_selected { self.style.selected_color } else { self.style.normal_color };
            if self.icon_style == IconStyle::Original {
                self.icon_views[i].set_tint(color);
            }
            self.labels[i].set_text_color(color);
            if scale_mode {
                let view = &mut self.icon_views[i];
                view.set_scale(if is_selected { self.style.icon_scale } else { 1.0 });
                view.set_translation_y(if is_selected { lift } else { 0.0 });
            }
        }
        self.transition = TransitionState { position: selected, offset: 0.0 };
        self.needs_redraw = true;
    }
}
