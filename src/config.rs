use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::hydro::performance::DesignParameterSet;
use crate::units::*;

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// SI 기준. 내부 계산 기본값.
    SI,
    /// 영국식/야드파운드법
    Imperial,
}

/// 각 물리량별 기본 단위 설정을 담는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub discharge: DischargeUnit,
    pub length: LengthUnit,
    pub velocity: VelocityUnit,
    pub viscosity: KinematicViscosityUnit,
    pub time: TimeUnit,
    pub power: PowerUnit,
    pub energy: EnergyUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            discharge: DischargeUnit::CubicMeterPerSecond,
            length: LengthUnit::Meter,
            velocity: VelocityUnit::MeterPerSecond,
            viscosity: KinematicViscosityUnit::SquareMeterPerSecond,
            time: TimeUnit::Hour,
            power: PowerUnit::Kilowatt,
            energy: EnergyUnit::KilowattHour,
        }
    }
}

impl DefaultUnits {
    /// 단위 시스템 프리셋에 맞는 기본 단위 세트를 만든다.
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::SI => Self::default(),
            UnitSystem::Imperial => Self {
                discharge: DischargeUnit::CubicFootPerSecond,
                length: LengthUnit::Foot,
                velocity: VelocityUnit::FootPerSecond,
                viscosity: KinematicViscosityUnit::Centistokes,
                time: TimeUnit::Hour,
                power: PowerUnit::Horsepower,
                energy: EnergyUnit::KilowattHour,
            },
        }
    }
}

/// 애플리케이션 설정을 표현한다. 설계 기본값(design)은 두 셸이 같은
/// 초기 입력으로 시작하도록 config.toml에 함께 저장한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub language_pack_dir: Option<String>,
    #[serde(default = "default_window_alpha")]
    pub window_alpha: f32,
    #[serde(default = "default_unit_system")]
    pub unit_system: UnitSystem,
    #[serde(default)]
    pub default_units: DefaultUnits,
    #[serde(default)]
    pub design: DesignParameterSet,
}

fn default_language() -> String {
    "auto".to_string()
}

fn default_window_alpha() -> f32 {
    1.0
}

fn default_unit_system() -> UnitSystem {
    UnitSystem::SI
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            language_pack_dir: None,
            window_alpha: default_window_alpha(),
            unit_system: default_unit_system(),
            default_units: DefaultUnits::default(),
            design: DesignParameterSet::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
