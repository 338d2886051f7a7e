//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use connectivity_demo_core::types::{RunnerConfig, CONFIG_FILE_ENV};

/// 配置服务 trait
pub trait ConfigService {
    /// 加载运行配置
    fn load(&self) -> Result<RunnerConfig>;
}

/// 本地配置服务：读取 `CONFIG_FILE` 指定的 JSON 文件
pub struct LocalConfigService;

impl LocalConfigService {
    fn config_path() -> Option<PathBuf> {
        std::env::var_os(CONFIG_FILE_ENV).map(PathBuf::from)
    }

    /// 读取、解析并校验一个配置文件
    fn load_file(path: &Path) -> Result<RunnerConfig> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: RunnerConfig = serde_json::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("validating config file {}", path.display()))?;
        Ok(config)
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<RunnerConfig> {
        match Self::config_path() {
            Some(path) => Self::load_file(&path),
            None => Ok(RunnerConfig::default()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "connectivity-demo-config-{}-{name}.json",
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_when_env_unset() {
        std::env::remove_var(CONFIG_FILE_ENV);
        let config = LocalConfigService.load().unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.panels.len(), 4);
    }

    #[test]
    fn test_loads_and_validates_config_file() {
        let path = temp_config("valid", r#"{"baseUrl":"http://demo-backend:9000"}"#);
        let config = LocalConfigService::load_file(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(config.base_url, "http://demo-backend:9000");
        // 省略的字段回退到内置面板集
        assert_eq!(config.panels.len(), 4);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let path = temp_config("broken", "not json at all");
        let err = LocalConfigService::load_file(&path).unwrap_err();
        let _ = fs::remove_file(&path);
        assert!(err.to_string().contains("parsing config file"));
    }

    #[test]
    fn test_invalid_panel_fails_validation() {
        // webProxy 动作缺少 fqdn，解析通过但校验必须失败
        let path = temp_config(
            "invalid",
            r#"{"panels":[{"id":"x","title":"X","description":"d",
                "action":{"type":"webProxy","service":"s"},
                "diagramDisconnected":"a.svg","diagramConnected":"b.svg"}]}"#,
        );
        let err = LocalConfigService::load_file(&path).unwrap_err();
        let _ = fs::remove_file(&path);
        assert!(err.to_string().contains("validating config file"));
    }
}
