//! 단위 변환/설정/언어 결정 테스트.

use hydropower_design_toolbox::config::{Config, DefaultUnits, UnitSystem};
use hydropower_design_toolbox::conversion::{self, ConversionError};
use hydropower_design_toolbox::i18n::{self, keys, Translator};
use hydropower_design_toolbox::quantity::QuantityKind;
use hydropower_design_toolbox::units::*;

#[test]
fn discharge_conversions_round_numbers() {
    let m3h = convert_discharge(
        1.0,
        DischargeUnit::CubicMeterPerSecond,
        DischargeUnit::CubicMeterPerHour,
    );
    assert!((m3h - 3600.0).abs() < 1e-9);
    let m3s = convert_discharge(
        1.0,
        DischargeUnit::CubicFootPerSecond,
        DischargeUnit::CubicMeterPerSecond,
    );
    assert!((m3s - 0.028_316_846_592).abs() < 1e-12);
}

#[test]
fn power_and_energy_conversions() {
    assert!((convert_power(1.0, PowerUnit::Megawatt, PowerUnit::Kilowatt) - 1000.0).abs() < 1e-9);
    let hp = convert_power(1.0, PowerUnit::Kilowatt, PowerUnit::Horsepower);
    assert!((hp - 1.341_022_089_595).abs() < 1e-6, "hp = {hp}");
    let joule = convert_energy(1.0, EnergyUnit::KilowattHour, EnergyUnit::Joule);
    assert!((joule - 3.6e6).abs() < 1e-6);
}

#[test]
fn length_velocity_viscosity_time_conversions() {
    assert!((convert_length(1.0, LengthUnit::Foot, LengthUnit::Meter) - 0.3048).abs() < 1e-12);
    let v = convert_velocity(36.0, VelocityUnit::KilometerPerHour, VelocityUnit::MeterPerSecond);
    assert!((v - 10.0).abs() < 1e-9);
    let nu = convert_viscosity(
        1.0,
        KinematicViscosityUnit::Centistokes,
        KinematicViscosityUnit::SquareMeterPerSecond,
    );
    assert!((nu - 1.0e-6).abs() < 1e-18);
    assert!((convert_time(2.0, TimeUnit::Day, TimeUnit::Hour) - 48.0).abs() < 1e-9);
}

#[test]
fn conversion_dispatcher_parses_unit_strings() {
    let mw = conversion::convert(QuantityKind::Power, 18_199.7, "kW", "MW").expect("power");
    assert!((mw - 18.1997).abs() < 1e-9);
    let kwh = conversion::convert(QuantityKind::Energy, 1.0, "MWh", "kWh").expect("energy");
    assert!((kwh - 1000.0).abs() < 1e-9);
}

#[test]
fn conversion_dispatcher_rejects_unknown_units() {
    match conversion::convert(QuantityKind::Discharge, 1.0, "acre-ft", "m3/s") {
        Err(ConversionError::UnknownUnit(u)) => assert_eq!(u, "acre-ft"),
        other => panic!("expected unknown unit, got {other:?}"),
    }
}

#[test]
fn config_round_trips_through_toml() {
    let cfg = Config::default();
    let text = toml::to_string_pretty(&cfg).expect("serialize");
    let parsed: Config = toml::from_str(&text).expect("parse");
    assert_eq!(parsed.design, cfg.design);
    assert_eq!(parsed.unit_system, UnitSystem::SI);
    assert_eq!(parsed.language, "auto");
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let parsed: Config = toml::from_str("language = \"ko-kr\"\n").expect("parse");
    assert_eq!(parsed.language, "ko-kr");
    assert_eq!(parsed.design.discharge_m3_per_s, 56.25);
    assert_eq!(parsed.design.efficiency, 0.85);
}

#[test]
fn imperial_preset_switches_default_units() {
    let units = DefaultUnits::for_system(UnitSystem::Imperial);
    assert_eq!(units.length, LengthUnit::Foot);
    assert_eq!(units.velocity, VelocityUnit::FootPerSecond);
    assert_eq!(units.discharge, DischargeUnit::CubicFootPerSecond);
    assert_eq!(units.power, PowerUnit::Horsepower);
}

#[test]
fn language_resolution_prefers_cli_then_config() {
    assert_eq!(i18n::resolve_language("en-us", Some("ko-kr")), "en-us");
    assert_eq!(i18n::resolve_language("auto", Some("ko-kr")), "ko-kr");
    assert_eq!(i18n::resolve_language("KO", Some("en-us")), "ko");
}

#[test]
fn translator_falls_back_to_built_in_strings() {
    let en = Translator::new("en");
    assert_eq!(en.t(keys::MAIN_MENU_POWER_CALC), "1) Power Calculation");
    let ko = Translator::new("ko");
    assert_eq!(ko.t(keys::MAIN_MENU_POWER_CALC), "1) 출력 계산");
}
