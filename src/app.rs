use crate::config::Config;
use crate::conversion;
use crate::hydro::performance::PerformanceError;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// 수리 성능 계산 오류
    Performance(PerformanceError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::Performance(e) => write!(f, "성능 계산 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<PerformanceError> for AppError {
    fn from(value: PerformanceError) -> Self {
        AppError::Performance(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::PowerCalculation => ui_cli::handle_power_calculation(tr, config)?,
            MenuChoice::DischargeSimulation => {
                ui_cli::handle_placeholder(tr, i18n::keys::STUB_DISCHARGE_SIM)
            }
            MenuChoice::CivilWorkDesign => {
                ui_cli::handle_placeholder(tr, i18n::keys::STUB_CIVIL_WORK)
            }
            MenuChoice::Turbine => ui_cli::handle_placeholder(tr, i18n::keys::STUB_TURBINE),
            MenuChoice::PowerStationPlan => {
                ui_cli::handle_placeholder(tr, i18n::keys::STUB_STATION_PLAN)
            }
            MenuChoice::SiteSelection => {
                ui_cli::handle_placeholder(tr, i18n::keys::STUB_SITE_SELECTION)
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
