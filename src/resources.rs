//! 资源接口 - 菜单、图标、动画按 id 解析

use crate::config::MenuItem;
use crate::error::NavError;
use crate::Bitmap;
use std::collections::HashMap;
use std::path::PathBuf;

/// 宿主提供的资源查找
pub trait Resources {
    /// 菜单定义
    fn menu(&self, id: &str) -> Result<Vec<MenuItem>, NavError>;

    /// 静态图标
    fn drawable(&self, id: &str) -> Result<Bitmap, NavError>;

    /// 动画原始数据（GIF）
    fn animation(&self, id: &str) -> Result<Vec<u8>, NavError>;
}

/// 内存资源表
#[derive(Debug, Clone, Default)]
pub struct MemoryResources {
    menus: HashMap<String, Vec<MenuItem>>,
    drawables: HashMap<String, Bitmap>,
    animations: HashMap<String, Vec<u8>>,
}

impl MemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_menu(mut self, id: &str, items: Vec<MenuItem>) -> Self {
        self.menus.insert(id.to_string(), items);
        self
    }

    pub fn with_drawable(mut self, id: &str, bitmap: Bitmap) -> Self {
        self.drawables.insert(id.to_string(), bitmap);
        self
    }

    pub fn with_animation(mut self, id: &str, data: Vec<u8>) -> Self {
        self.animations.insert(id.to_string(), data);
        self
    }
}

impl Resources for MemoryResources {
    fn menu(&self, id: &str) -> Result<Vec<MenuItem>, NavError> {
        self.menus.get(id).cloned().ok_or_else(|| NavError::ResourceNotFound(id.to_string()))
    }

    fn drawable(&self, id: &str) -> Result<Bitmap, NavError> {
        self.drawables.get(id).cloned().ok_or_else(|| NavError::ResourceNotFound(id.to_string()))
    }

    fn animation(&self, id: &str) -> Result<Vec<u8>, NavError> {
        self.animations.get(id).cloned().ok_or_else(|| NavError::ResourceNotFound(id.to_string()))
    }
}

/// 目录资源：`menu/<id>.json`、`drawable/<id>.png`、`raw/<id>.gif`
#[derive(Debug, Clone)]
pub struct AssetResources {
    root: PathBuf,
}

impl AssetResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self, dir: &str, id: &str, ext: &str) -> Result<PathBuf, NavError> {
        let path = self.root.join(dir).join(format!("{id}.{ext}"));
        if path.exists() {
            Ok(path)
        } else {
            Err(NavError::ResourceNotFound(path.display().to_string()))
        }
    }
}

impl Resources for AssetResources {
    fn menu(&self, id: &str) -> Result<Vec<MenuItem>, NavError> {
        let data = std::fs::read_to_string(self.path("menu", id, "json")?)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn drawable(&self, id: &str) -> Result<Bitmap, NavError> {
        Bitmap::open(self.path("drawable", id, "png")?)
    }

    fn animation(&self, id: &str) -> Result<Vec<u8>, NavError> {
        Ok(std::fs::read(self.path("raw", id, "gif")?)?)
    }
}
