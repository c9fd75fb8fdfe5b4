//! 单元测试模块
//! 覆盖颜色插值、测量布局、导航栏交互、分页容器、配置、动画和画布绘制

pub mod layout_tests;
pub mod pager_tests;
pub mod config_tests;
