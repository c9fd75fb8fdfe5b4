//! 帧动画图标 - 解码 GIF 动画并按时间轴播放

use crate::error::NavError;
use crate::{Bitmap, Size};
use image::codecs::gif::GifDecoder;
use image::AnimationDecoder;
use std::io::Read;
use std::time::Duration;

/// 单帧：画面 + 起始时间（秒）
#[derive(Debug, Clone)]
pub struct AnimationFrame {
    pub bitmap: Bitmap,
    pub timestamp: f32,
}

/// 帧动画，支持单次播放、取消和按进度定位
#[derive(Debug, Clone)]
pub struct FrameAnimation {
    frames: Vec<AnimationFrame>,
    duration: f32,
    current_frame: usize,
    elapsed: f32,
    playing: bool,
}

impl FrameAnimation {
    /// 由 (画面, 帧时长) 序列构造，空序列返回 None
    pub fn from_frames(frames: Vec<(Bitmap, Duration)>) -> Option<Self> {
        if frames.is_empty() {
            return None;
        }
        let mut timestamp = 0.0;
        let frames: Vec<AnimationFrame> = frames
            .into_iter()
            .map(|(bitmap, delay)| {
                let frame = AnimationFrame { bitmap, timestamp };
                timestamp += delay.as_secs_f32();
                frame
            })
            .collect();
        Some(Self {
            frames,
            duration: timestamp,
            current_frame: 0,
            elapsed: 0.0,
            playing: false,
        })
    }

    /// 从 GIF 数据流解码
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, NavError> {
        let decoder = GifDecoder::new(reader)?;
        let frames = decoder.into_frames().collect_frames()?;
        let frames: Vec<(Bitmap, Duration)> = frames
            .into_iter()
            .map(|frame| {
                let (numer, denom) = frame.delay().numer_denom_ms();
                let ms = if denom == 0 { 0 } else { numer / denom };
                (Bitmap::from_image(frame.into_buffer()), Duration::from_millis(ms as u64))
            })
            .collect();
        tracing::debug!(frames = frames.len(), "animation decoded");
        Self::from_frames(frames).ok_or(NavError::Image(image::ImageError::IoError(
            std::io::Error::new(std::io::ErrorKind::InvalidData, "animation has no frames"),
        )))
    }

    /// 从头播放一次
    pub fn play_once(&mut self) {
        self.elapsed = 0.0;
        self.current_frame = 0;
        self.playing = true;
    }

    /// 停止播放，保持当前帧
    pub fn cancel(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// 跳到指定进度（0..=1），停止播放
    pub fn set_progress(&mut self, progress: f32) {
        self.playing = false;
        self.elapsed = self.duration * progress.clamp(0.0, 1.0);
        self.current_frame = if progress >= 1.0 {
            self.frames.len() - 1
        } else {
            self.frame_at(self.elapsed)
        };
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// 推进时间轴，返回是否仍在播放
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.playing {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.current_frame = self.frames.len() - 1;
            self.playing = false;
            return false;
        }
        self.current_frame = self.frame_at(self.elapsed);
        true
    }

    fn frame_at(&self, time: f32) -> usize {
        self.frames
            .iter()
            .rposition(|f| f.timestamp <= time)
            .unwrap_or(0)
    }

    pub fn current_frame_index(&self) -> usize {
        self.current_frame
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn current_bitmap(&self) -> &Bitmap {
        &self.frames[self.current_frame].bitmap
    }

    /// 以首帧尺寸作为固有尺寸
    pub fn intrinsic_size(&self) -> Size {
        self.frames[0].bitmap.size()
    }
}
