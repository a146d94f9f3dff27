// Drive 基础数据类型

use serde::{Deserialize, Serialize};

/// 条目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// 普通文件
    #[default]
    File,
    /// 目录
    Dir,
}

/// 目录条目（列表接口返回的一条记录）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// 名称
    pub name: String,
    /// 类型
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// 添加日期（服务端格式，原样显示）
    #[serde(default)]
    pub date: String,
    /// 添加时间（服务端格式，原样显示）
    #[serde(default)]
    pub time: String,
    /// 文件大小（服务端已格式化，目录没有）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, entry_type: EntryType) -> Self {
        Self {
            name: name.into(),
            entry_type,
            date: String::new(),
            time: String::new(),
            size: None,
        }
    }

    /// 是否是目录
    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Dir
    }

    /// 是否是文件
    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
    }

    /// 是否是隐藏文件（以 . 开头）
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// 获取文件扩展名
    pub fn extension(&self) -> Option<&str> {
        if self.is_dir() {
            return None;
        }
        self.name.rsplit('.').next().filter(|ext| *ext != self.name)
    }

    /// 大小列显示文本
    pub fn display_size(&self) -> String {
        match &self.size {
            Some(size) if !size.is_empty() => size.clone(),
            _ => "-".to_string(),
        }
    }

    /// 添加时间列显示文本
    pub fn display_modified(&self) -> String {
        format!("{} {}", self.date, self.time).trim().to_string()
    }
}

/// 解析列表接口响应
///
/// 响应体是 `名称 -> 条目` 的 JSON 对象，只取值部分，顺序与服务端一致。
pub fn parse_listing(body: &str) -> Result<Vec<DirectoryEntry>, serde_json::Error> {
    let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(body)?;
    map.into_iter()
        .map(|(_, value)| serde_json::from_value(value))
        .collect()
}

/// 按显示规则排序（仅用于展示，不改变原始列表）
pub fn sort_for_display(entries: &[DirectoryEntry], folders_first: bool) -> Vec<DirectoryEntry> {
    let mut sorted = entries.to_vec();
    if folders_first {
        // 稳定排序，保留服务端顺序
        sorted.sort_by_key(|e| !e.is_dir());
    }
    sorted
}

/// 导航历史
#[derive(Debug, Clone, Default)]
pub struct NavigationHistory {
    /// 后退栈
    pub back_stack: Vec<String>,
    /// 前进栈
    pub forward_stack: Vec<String>,
}

impl NavigationHistory {
    /// 是否可以后退
    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    /// 是否可以前进
    pub fn can_go_forward(&self) -> bool {
        !self.forward_stack.is_empty()
    }

    /// 记录导航（清除前进栈）
    pub fn push(&mut self, path: String) {
        self.back_stack.push(path);
        self.forward_stack.clear();
    }

    /// 执行后退
    pub fn go_back(&mut self, current_path: String) -> Option<String> {
        let prev = self.back_stack.pop()?;
        self.forward_stack.push(current_path);
        Some(prev)
    }

    /// 执行前进
    pub fn go_forward(&mut self, current_path: String) -> Option<String> {
        let next = self.forward_stack.pop()?;
        self.back_stack.push(current_path);
        Some(next)
    }
}

/// 面包屑段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    /// 显示名称（根目录为 "/"，界面上替换为本地化的“主页”）
    pub name: String,
    /// 点击后跳转的完整路径
    pub path: String,
    pub is_root: bool,
}

/// 解析路径为面包屑段
/// 例如："/a/b" -> [("/", "/"), ("a", "/a"), ("b", "/a/b")]
pub fn breadcrumbs(path: &str) -> Vec<Breadcrumb> {
    let mut segments = vec![Breadcrumb {
        name: "/".to_string(),
        path: "/".to_string(),
        is_root: true,
    }];

    let mut current_path = String::new();
    for part in path.split('/').filter(|s| !s.is_empty()) {
        current_path.push('/');
        current_path.push_str(part);
        segments.push(Breadcrumb {
            name: part.to_string(),
            path: current_path.clone(),
            is_root: false,
        });
    }

    segments
}

// ============================================================================
// 路径工具函数
// ============================================================================

/// 规范化路径：保证以 / 开头，合并重复的 /，去掉末尾的 /
pub fn normalize_path(path: &str) -> String {
    let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", parts.join("/"))
    }
}

/// 获取父目录路径
pub fn get_parent_path(path: &str) -> String {
    if path == "/" {
        return "/".to_string();
    }

    let path = path.trim_end_matches('/');
    match path.rfind('/') {
        Some(0) => "/".to_string(),
        Some(pos) => path[..pos].to_string(),
        None => "/".to_string(),
    }
}

/// 连接路径
pub fn join_path(base: &str, name: &str) -> String {
    if base == "/" || base.is_empty() {
        format!("/{}", name)
    } else {
        format!("{}/{}", base.trim_end_matches('/'), name)
    }
}

/// 路径的各个段（不含根）
pub fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
