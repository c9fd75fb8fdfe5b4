//! 测量约束与布局参数

/// 父容器给子视图的单轴约束
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    /// 必须是这个尺寸
    Exactly(f32),
    /// 不超过这个尺寸
    AtMost(f32),
    /// 不限制
    Unspecified,
}

impl MeasureSpec {
    /// 按约束解析期望尺寸
    pub fn resolve(self, desired: f32) -> f32 {
        match self {
            MeasureSpec::Exactly(size) => size,
            MeasureSpec::AtMost(size) => desired.min(size.max(0.0)),
            MeasureSpec::Unspecified => desired,
        }
    }

    pub fn size(self) -> Option<f32> {
        match self {
            MeasureSpec::Exactly(size) | MeasureSpec::AtMost(size) => Some(size),
            MeasureSpec::Unspecified => None,
        }
    }
}

/// 单轴尺寸声明
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    MatchParent,
    #[default]
    WrapContent,
    Exact(f32),
}

impl Dimension {
    /// 根据父约束中剩余的可用尺寸生成子约束
    pub fn child_spec(self, parent: MeasureSpec, available: f32) -> MeasureSpec {
        match (self, parent) {
            (Dimension::Exact(size), _) => MeasureSpec::Exactly(size),
            (_, MeasureSpec::Unspecified) => MeasureSpec::Unspecified,
            (Dimension::MatchParent, _) => MeasureSpec::Exactly(available.max(0.0)),
            (Dimension::WrapContent, _) => MeasureSpec::AtMost(available.max(0.0)),
        }
    }
}

/// 布局参数
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutParams {
    pub width: Dimension,
    pub height: Dimension,
}

impl LayoutParams {
    pub const fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }

    pub const fn wrap_content() -> Self {
        Self::new(Dimension::WrapContent, Dimension::WrapContent)
    }

    /// 宽高相同的固定尺寸，None 表示自适应
    pub fn square(size: Option<f32>) -> Self {
        match size {
            Some(s) => Self::new(Dimension::Exact(s), Dimension::Exact(s)),
            None => Self::wrap_content(),
        }
    }
}
