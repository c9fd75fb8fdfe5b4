//! UI 组件系统

mod animation;
mod component;
mod icon_view;
mod label;
mod measure;
mod navigation_bar;
mod pager;

pub use animation::{AnimationFrame, FrameAnimation};
pub use component::{Component, ComponentId, ParentContainer};
pub use icon_view::{IconContent, IconView};
pub use label::Label;
pub use measure::{Dimension, LayoutParams, MeasureSpec};
pub use navigation_bar::{ChangeOrigin, IconStyle, NavIntent, NavigationBar, TransitionState};
pub use pager::{PageContainer, PageEvent, PagerHandle, ScrollState};
