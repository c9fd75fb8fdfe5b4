//! 路径：直线与二次贝塞尔曲线

use crate::geometry::Point;

#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// 控制点, 终点
    QuadTo(Point, Point),
}

/// 路径
///
/// 空路径上的第一条 line/quad 从原点 (0, 0) 开始，
/// 边界线的构造依赖这一点。
#[derive(Debug, Clone, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
    current: Point,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.push(PathCommand::MoveTo(Point::new(x, y)))
    }

    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.open_at_current();
        self.push(PathCommand::LineTo(Point::new(x, y)))
    }

    pub fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) -> &mut Self {
        self.open_at_current();
        self.push(PathCommand::QuadTo(Point::new(cx, cy), Point::new(x, y)))
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    fn open_at_current(&mut self) {
        if self.commands.is_empty() {
            self.commands.push(PathCommand::MoveTo(self.current));
        }
    }

    fn push(&mut self, command: PathCommand) -> &mut Self {
        self.current = match command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) | PathCommand::QuadTo(_, p) => p,
        };
        self.commands.push(command);
        self
    }

    /// 展平为折线，每个 MoveTo 开始一条新折线
    pub fn flatten(&self, tolerance: f32) -> Vec<Vec<Point>> {
        let mut polylines: Vec<Vec<Point>> = Vec::new();
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => polylines.push(vec![p]),
                PathCommand::LineTo(p) => {
                    if let Some(line) = polylines.last_mut() {
                        line.push(p);
                    }
                }
                PathCommand::QuadTo(ctrl, end) => {
                    if let Some(line) = polylines.last_mut() {
                        let start = line.last().copied().unwrap_or_default();
                        line.extend(quad_points(start, ctrl, end, tolerance));
                    }
                }
            }
        }
        polylines.retain(|line| !line.is_empty());
        polylines
    }
}

/// 按控制多边形长度取分段数，不含起点
fn quad_points(p0: Point, p1: Point, p2: Point, tolerance: f32) -> impl Iterator<Item = Point> {
    let steps = ((p0.distance(&p1) + p1.distance(&p2)) / tolerance.max(0.01)).ceil() as usize;
    let steps = steps.clamp(2, 100);
    (1..=steps).map(move |i| {
        let t = i as f32 / steps as f32;
        let mt = 1.0 - t;
        let (a, b, c) = (mt * mt, 2.0 * mt * t, t * t);
        Point::new(a * p0.x + b * p1.x + c * p2.x, a * p0.y + b * p1.y + c * p2.y)
    })
}
