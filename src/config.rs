use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 程序配置
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// 评分服务地址
    pub api_base_url: String,
    /// 请求超时（秒），None 表示不设超时
    pub request_timeout_secs: Option<u64>,
    /// 报告输出目录
    pub output_dir: PathBuf,
    /// 报告文件名
    pub report_file_name: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_secs: None,
            output_dir: PathBuf::from("."),
            report_file_name: "Nirmaan_AI_Score_Report.pdf".to_string(),
            verbose_logging: false,
        }
    }
}

/// TOML 配置文件内容，所有字段可选
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    api_base_url: Option<String>,
    request_timeout_secs: Option<u64>,
    output_dir: Option<PathBuf>,
    report_file_name: Option<String>,
    verbose_logging: Option<bool>,
}

impl Config {
    /// 加载配置：默认值 → 配置文件（可选）→ 环境变量
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match config_file {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        base.apply_env_from(|name| std::env::var(name).ok())
    }

    /// 从 TOML 文件加载，未出现的字段取默认值
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let file: FileConfig = toml::from_str(content)?;
        let default = Self::default();
        Ok(Self {
            api_base_url: file.api_base_url.unwrap_or(default.api_base_url),
            request_timeout_secs: file.request_timeout_secs.or(default.request_timeout_secs),
            output_dir: file.output_dir.unwrap_or(default.output_dir),
            report_file_name: file.report_file_name.unwrap_or(default.report_file_name),
            verbose_logging: file.verbose_logging.unwrap_or(default.verbose_logging),
        })
    }

    /// 用环境变量覆盖当前配置
    ///
    /// `lookup` 按变量名取值，便于测试时不碰进程环境
    pub fn apply_env_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("SCORE_API_BASE_URL") {
            self.api_base_url = v;
        }
        if let Some(v) = lookup("SCORE_REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = Some(parse_env("SCORE_REQUEST_TIMEOUT_SECS", v, "u64")?);
        }
        if let Some(v) = lookup("REPORT_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("REPORT_FILE_NAME") {
            self.report_file_name = v;
        }
        if let Some(v) = lookup("VERBOSE_LOGGING") {
            self.verbose_logging = parse_env("VERBOSE_LOGGING", v, "bool")?;
        }
        Ok(self)
    }

    /// 评分接口完整地址
    pub fn score_endpoint(&self) -> String {
        format!("{}/score", self.api_base_url.trim_end_matches('/'))
    }

    /// 健康检查地址
    pub fn health_endpoint(&self) -> String {
        format!("{}/", self.api_base_url.trim_end_matches('/'))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// 报告输出路径
    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(&self.report_file_name)
    }
}

fn parse_env<T: std::str::FromStr>(
    var_name: &str,
    value: String,
    expected_type: &str,
) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value,
            expected_type: expected_type.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_point_at_local_service() {
        let config = Config::default();
        assert_eq!(config.score_endpoint(), "http://127.0.0.1:5000/score");
        assert_eq!(config.request_timeout(), None);
        assert_eq!(
            config.report_path(),
            PathBuf::from("./Nirmaan_AI_Score_Report.pdf")
        );
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::default()
            .apply_env_from(lookup(&[
                ("SCORE_API_BASE_URL", "http://scorer:8080/"),
                ("SCORE_REQUEST_TIMEOUT_SECS", "30"),
                ("VERBOSE_LOGGING", "true"),
            ]))
            .unwrap();
        assert_eq!(config.score_endpoint(), "http://scorer:8080/score");
        assert_eq!(config.health_endpoint(), "http://scorer:8080/");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
        assert!(config.verbose_logging);
    }

    #[test]
    fn test_invalid_env_value_is_rejected() {
        let err = Config::default()
            .apply_env_from(lookup(&[("SCORE_REQUEST_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        match err {
            ConfigError::EnvVarParseFailed { var_name, value, .. } => {
                assert_eq!(var_name, "SCORE_REQUEST_TIMEOUT_SECS");
                assert_eq!(value, "soon");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            api_base_url = "http://10.0.0.2:5000"
            output_dir = "reports"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_base_url, "http://10.0.0.2:5000");
        assert_eq!(config.output_dir, PathBuf::from("reports"));
        assert_eq!(config.report_file_name, "Nirmaan_AI_Score_Report.pdf");
        assert!(!config.verbose_logging);
    }
}
