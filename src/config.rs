use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::door::{EdgeSealing, VERY_UPPER_HORIZONTAL_PIECE_WIDTH};

/// 기본 설정 파일 이름. 실행 디렉터리 기준.
pub const CONFIG_FILE: &str = "config.toml";

/// 대화형 입력에서 미리 채워 둘 기본 치수 [mm].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultDimensions {
    pub right_vpiece_width: i64,
    pub left_vpiece_width: i64,
    pub upper_hpiece_width: i64,
    pub lower_hpiece_width: i64,
    pub ub_wood_width: i64,
    pub concealed_wood_width: i64,
    pub edge_sealing: EdgeSealing,
}

impl Default for DefaultDimensions {
    fn default() -> Self {
        Self {
            right_vpiece_width: 70,
            left_vpiece_width: 70,
            upper_hpiece_width: 100,
            lower_hpiece_width: 100,
            ub_wood_width: 100,
            concealed_wood_width: VERY_UPPER_HORIZONTAL_PIECE_WIDTH,
            edge_sealing: EdgeSealing::default(),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 하드웨어 카탈로그 JSON 파일이 있는 디렉터리
    pub catalog_dir: PathBuf,
    /// RUST_LOG가 없을 때 쓰는 로그 레벨
    pub log_level: String,
    pub defaults: DefaultDimensions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_dir: PathBuf::from("."),
            log_level: "info".to_string(),
            defaults: DefaultDimensions::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
