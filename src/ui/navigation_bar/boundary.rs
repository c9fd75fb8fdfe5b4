//! 绘制：背景、导航项与顶部边界线

use super::{IconStyle, NavigationBar};
use crate::text::TextRenderer;
use crate::ui::component::Component;
use crate::{Canvas, Paint, Path};

/// 边界线宽度
const BOUNDARY_WIDTH: f32 = 2.0;
/// 隆起控制点在图标顶部之上的额外高度
const BUMP_LIFT: f32 = 50.0;

impl NavigationBar {
    /// 顶部边界线（导航栏坐标系），不显示时返回 None
    ///
    /// 不缩放图标时是一条直线；否则在 `transition.position` 对应的图标处
    /// 用二次贝塞尔曲线隆起，并随滑动进度向下一项平移。
    pub fn boundary_path(&self) -> Option<Path> {
        if !self.style.show_top_boundary {
            return None;
        }
        let width = self.frame.width;
        let mut path = Path::new();

        let position = self.transition.position;
        if self.icon_style == IconStyle::Original || !self.style.icon_scalable || position >= self.icon_views.len() {
            path.move_to(0.0, 0.0).line_to(width, 0.0);
            return Some(path);
        }

        let iv = self.icon_views[position].frame();
        let offset = match self.icon_views.get(position + 1) {
            Some(next) => (next.frame().left() - iv.left()) * self.transition.offset,
            None => 0.0,
        };
        let start = iv.left() - iv.width / 2.0 + offset;
        let control_y = -(iv.height * self.style.icon_scale - iv.bottom()) - BUMP_LIFT;

        path.line_to(start, 0.0)
            .quad_to(iv.left() + iv.width / 2.0 + offset, control_y, iv.right() + iv.width / 2.0 + offset, 0.0)
            .line_to(width, 0.0);
        Some(path)
    }

    pub(super) fn draw(&self, canvas: &mut Canvas, text: Option<&TextRenderer>) {
        let background = Paint::fill(self.style.background_color);
        canvas.draw_rect(&self.frame, &background);

        canvas.save();
        canvas.translate(self.frame.x, self.frame.y);

        for label in &self.labels {
            label.render(canvas, text);
        }
        for icon in &self.icon_views {
            icon.render(canvas, text);
        }

        if let Some(path) = self.boundary_path() {
            let paint = Paint::stroke(self.style.selected_color, BOUNDARY_WIDTH);
            canvas.draw_path(&path, &paint);
        }

        canvas.restore();
    }
}
