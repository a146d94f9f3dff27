// Asset 资源管理

use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use gpui::{AssetSource, SharedString};

/// 组合资源源：优先加载本地资源，找不到时回退到 gpui-component-assets
pub struct Assets {
    pub base: PathBuf,
}

impl Assets {
    /// 定位资源目录
    /// .app 包中使用 Contents/Resources/assets，开发环境使用项目下的 assets
    pub fn locate() -> Self {
        let bundled = std::env::current_exe().ok().and_then(|exe| {
            let macos_dir = exe.parent()?;
            if !macos_dir.ends_with("MacOS") {
                return None;
            }
            let resources = macos_dir.parent()?.join("Resources").join("assets");
            resources.exists().then_some(resources)
        });

        Self {
            base: bundled.unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")),
        }
    }
}

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        let local_path = self.base.join(path);
        if local_path.exists() {
            return fs::read(&local_path)
                .map(|data| Some(Cow::Owned(data)))
                .map_err(|err| err.into());
        }

        gpui_component_assets::Assets.load(path)
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut results: Vec<SharedString> = fs::read_dir(self.base.join(path))
            .map(|entries| {
                entries
                    .flatten()
                    .filter_map(|entry| entry.file_name().into_string().ok())
                    .map(SharedString::from)
                    .collect()
            })
            .unwrap_or_default();

        if let Ok(component_assets) = gpui_component_assets::Assets.list(path) {
            for asset in component_assets {
                if !results.contains(&asset) {
                    results.push(asset);
                }
            }
        }

        Ok(results)
    }
}
