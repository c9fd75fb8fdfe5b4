//! 事件系统 - 触摸输入

use crate::Point;

/// 触摸阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// 触摸事件，坐标相对于接收事件的组件
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub x: f32,
    pub y: f32,
    /// 毫秒时间戳
    pub timestamp: u64,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, x: f32, y: f32, timestamp: u64) -> Self {
        Self { phase, x, y, timestamp }
    }

    pub fn down(x: f32, y: f32, timestamp: u64) -> Self {
        Self::new(TouchPhase::Down, x, y, timestamp)
    }

    pub fn moved(x: f32, y: f32, timestamp: u64) -> Self {
        Self::new(TouchPhase::Move, x, y, timestamp)
    }

    pub fn up(x: f32, y: f32, timestamp: u64) -> Self {
        Self::new(TouchPhase::Up, x, y, timestamp)
    }

    /// 转换到子组件坐标系
    pub fn relative_to(&self, origin: Point) -> Self {
        Self { x: self.x - origin.x, y: self.y - origin.y, ..*self }
    }
}
