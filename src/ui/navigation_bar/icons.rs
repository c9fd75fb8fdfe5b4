//! 图标替换：动画图标、静态换肤图标，以及还原菜单图标

use super::{IconStyle, NavigationBar};
use crate::error::NavError;
use crate::resources::Resources;
use crate::ui::animation::FrameAnimation;
use crate::Drawable;
use std::io::Read;
use std::rc::Rc;

impl NavigationBar {
    fn check_icon_count(&self, given: usize) -> Result<(), NavError> {
        let items = self.titles.len();
        if given > items {
            return Err(NavError::TooManyIcons { given, items });
        }
        Ok(())
    }

    /// 把前 k 个导航项换成 GIF 动画图标
    pub fn set_animated_icons<R: Read>(&mut self, sources: Vec<R>) -> Result<(), NavError> {
        self.check_icon_count(sources.len())?;
        let animations = sources
            .into_iter()
            .map(FrameAnimation::from_reader)
            .collect::<Result<Vec<_>, _>>()?;
        self.apply_animations(animations.into_iter().map(Some).collect());
        Ok(())
    }

    /// 按资源 id 替换动画图标，`None` 表示保留该项当前图标
    pub fn set_animated_icons_from_ids(
        &mut self,
        resources: &dyn Resources,
        ids: &[Option<&str>],
    ) -> Result<(), NavError> {
        self.check_icon_count(ids.len())?;
        let mut animations = Vec::with_capacity(ids.len());
        for id in ids {
            let animation = match id {
                Some(id) => Some(FrameAnimation::from_reader(resources.animation(id)?.as_slice())?),
                None => None,
            };
            animations.push(animation);
        }
        self.apply_animations(animations);
        Ok(())
    }

    fn apply_animations(&mut self, animations: Vec<Option<FrameAnimation>>) {
        for (view, animation) in self.icon_views.iter_mut().zip(animations) {
            if let Some(animation) = animation {
                view.set_animation(animation);
            }
        }
        self.switch_style(IconStyle::Animated);
    }

    /// 把前 k 个导航项换成静态图标，换肤图标不着色
    pub fn set_plain_icons(&mut self, icons: Vec<Rc<Drawable>>) -> Result<(), NavError> {
        self.check_icon_count(icons.len())?;
        let animated = self.icon_style == IconStyle::Animated;
        for (view, icon) in self.icon_views.iter_mut().zip(icons) {
            if animated {
                view.cancel_animation();
            }
            view.set_drawable(icon);
        }
        self.switch_style(IconStyle::Plain);
        Ok(())
    }

    /// 按资源 id 替换静态图标
    pub fn set_plain_icons_from_ids(&mut self, resources: &dyn Resources, ids: &[&str]) -> Result<(), NavError> {
        let icons = ids
            .iter()
            .map(|id| resources.drawable(id).map(Drawable::new))
            .collect::<Result<Vec<_>, _>>()?;
        self.set_plain_icons(icons)
    }

    /// 原始图标的着色会保留到还原时，先把选中项的原始图标恢复为普通色
    fn switch_style(&mut self, style: IconStyle) {
        if let Some(original) = self.original_icons.get(self.selected_index) {
            original.set_tint(self.style.normal_color);
        }
        tracing::debug!(from = ?self.icon_style, to = ?style, "icon style switched");
        self.icon_style = style;
        if !self.titles.is_empty() {
            self.highlight(self.selected_index);
        }
        self.needs_redraw = true;
    }

    /// 还原为菜单中的原始图标，已是原始图标时什么都不做
    pub fn restore_original_icons(&mut self) {
        if self.icon_style == IconStyle::Original {
            return;
        }
        for (view, original) in self.icon_views.iter_mut().zip(&self.original_icons) {
            view.cancel_animation();
            view.set_drawable(Rc::clone(original));
            view.set_scale(1.0);
            view.set_translation_y(0.0);
        }
        tracing::debug!(from = ?self.icon_style, "original icons restored");
        self.icon_style = IconStyle::Original;
        if !self.titles.is_empty() {
            self.highlight(self.selected_index);
        }
        self.needs_redraw = true;
    }
}
