//! 导航栏配置
//!
//! 构造时一次性读取的属性，通常来自宿主提供的 JSON：
//!
//! ```json
//! {
//!   "itemTextNormalColor": "#666666",
//!   "defaultSelectedColor": "#007AFF",
//!   "showTopBoundary": true,
//!   "iconSize": 28,
//!   "menu": "bottom_nav"
//! }
//! ```

use crate::error::NavError;
use crate::Color;
use serde::Deserialize;

/// 宿主未提供主题色时的选中色
pub const FALLBACK_SELECTED_COLOR: Color = Color::from_hex(0x1AAD19);

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavBarConfig {
    #[serde(default = "default_normal_color")]
    pub item_text_normal_color: String,
    /// 缺省时使用 `default_selected_color`
    #[serde(default)]
    pub item_text_selected_color: Option<String>,
    /// 宿主主题主色
    #[serde(default)]
    pub default_selected_color: Option<String>,
    #[serde(default = "default_true")]
    pub show_top_boundary: bool,
    /// 目前不影响任何行为
    #[serde(default = "default_true")]
    pub item_gradient: bool,
    /// 图标边长，缺省为自适应
    #[serde(default)]
    pub icon_size: Option<f32>,
    #[serde(default = "default_true")]
    pub icon_scalable: bool,
    #[serde(default = "default_icon_scale")]
    pub icon_scale: f32,
    #[serde(default = "default_label_font_size")]
    pub label_font_size: f32,
    #[serde(default)]
    pub icon_label_gap: f32,
    #[serde(default = "default_background")]
    pub background_color: String,
    /// 菜单资源 id，用于批量创建导航项
    #[serde(default)]
    pub menu: Option<String>,
}

fn default_normal_color() -> String { "#444444".to_string() }
fn default_true() -> bool { true }
fn default_icon_scale() -> f32 { 1.5 }
fn default_label_font_size() -> f32 { 12.0 }
fn default_background() -> String { "#FFFFFF".to_string() }

impl Default for NavBarConfig {
    fn default() -> Self {
        Self {
            item_text_normal_color: default_normal_color(),
            item_text_selected_color: None,
            default_selected_color: None,
            show_top_boundary: true,
            item_gradient: true,
            icon_size: None,
            icon_scalable: true,
            icon_scale: default_icon_scale(),
            label_font_size: default_label_font_size(),
            icon_label_gap: 0.0,
            background_color: default_background(),
            menu: None,
        }
    }
}

/// 解析后的样式
#[derive(Debug, Clone, PartialEq)]
pub struct NavBarStyle {
    pub normal_color: Color,
    pub selected_color: Color,
    pub background_color: Color,
    pub show_top_boundary: bool,
    pub item_gradient: bool,
    pub icon_size: Option<f32>,
    pub icon_scalable: bool,
    pub icon_scale: f32,
    pub label_font_size: f32,
    pub icon_label_gap: f32,
}

fn parse_color(s: &str) -> Result<Color, NavError> {
    Color::parse(s).ok_or_else(|| NavError::InvalidColor(s.to_string()))
}

impl NavBarConfig {
    pub fn from_json(json: &str) -> Result<Self, NavError> {
        Ok(serde_json::from_str(json)?)
    }

    /// 解析颜色：选中色 -> 宿主主题色 -> 内置绿色
    pub fn resolve(&self) -> Result<NavBarStyle, NavError> {
        let default_selected = match &self.default_selected_color {
            Some(s) => parse_color(s)?,
            None => FALLBACK_SELECTED_COLOR,
        };
        let selected_color = match &self.item_text_selected_color {
            Some(s) => parse_color(s)?,
            None => default_selected,
        };
        Ok(NavBarStyle {
            normal_color: parse_color(&self.item_text_normal_color)?,
            selected_color,
            background_color: parse_color(&self.background_color)?,
            show_top_boundary: self.show_top_boundary,
            item_gradient: self.item_gradient,
            icon_size: self.icon_size,
            icon_scalable: self.icon_scalable,
            icon_scale: self.icon_scale,
            label_font_size: self.label_font_size,
            icon_label_gap: self.icon_label_gap,
        })
    }
}

impl Default for NavBarStyle {
    fn default() -> Self {
        NavBarStyle {
            normal_color: Color::DARK_GRAY,
            selected_color: FALLBACK_SELECTED_COLOR,
            background_color: Color::WHITE,
            show_top_boundary: true,
            item_gradient: true,
            icon_size: None,
            icon_scalable: true,
            icon_scale: default_icon_scale(),
            label_font_size: default_label_font_size(),
            icon_label_gap: 0.0,
        }
    }
}

/// 菜单文件中的一项
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub title: String,
    /// 图标资源 id
    pub icon: String,
}
