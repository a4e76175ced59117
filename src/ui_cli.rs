use std::io::{self, Write};

use crate::app::AppError;
use crate::config::{Config, DefaultUnits, UnitSystem};
use crate::hydro::curve::{sample_diameter_curve, sample_energy_curve, SampleDomain};
use crate::hydro::performance::{compute, DesignParameterSet, PerformanceError};
use crate::i18n::{keys, Translator};
use crate::units::{convert_energy, convert_power, EnergyUnit, PowerUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    PowerCalculation,
    DischargeSimulation,
    CivilWorkDesign,
    Turbine,
    PowerStationPlan,
    SiteSelection,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_POWER_CALC));
    println!("{}", tr.t(keys::MAIN_MENU_DISCHARGE_SIM));
    println!("{}", tr.t(keys::MAIN_MENU_CIVIL_WORK));
    println!("{}", tr.t(keys::MAIN_MENU_TURBINE));
    println!("{}", tr.t(keys::MAIN_MENU_STATION_PLAN));
    println!("{}", tr.t(keys::MAIN_MENU_SITE_SELECTION));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::PowerCalculation),
            "2" => return Ok(MenuChoice::DischargeSimulation),
            "3" => return Ok(MenuChoice::CivilWorkDesign),
            "4" => return Ok(MenuChoice::Turbine),
            "5" => return Ok(MenuChoice::PowerStationPlan),
            "6" => return Ok(MenuChoice::SiteSelection),
            "7" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 출력 계산 메뉴를 처리한다. 계산 오류는 표시하고 메뉴로 돌아간다.
pub fn handle_power_calculation(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::POWER_CALC_HEADING));
    println!("{}", tr.t(keys::POWER_CALC_NOTE));

    let d = &cfg.design;
    let params = DesignParameterSet {
        discharge_m3_per_s: read_f64_or(tr, &tr.t(keys::PROMPT_DISCHARGE), d.discharge_m3_per_s)?,
        high_water_level_m: read_f64_or(
            tr,
            &tr.t(keys::PROMPT_HIGH_WATER_LEVEL),
            d.high_water_level_m,
        )?,
        low_water_level_m: read_f64_or(
            tr,
            &tr.t(keys::PROMPT_LOW_WATER_LEVEL),
            d.low_water_level_m,
        )?,
        tailwater_level_m: read_f64_or(
            tr,
            &tr.t(keys::PROMPT_TAILWATER_LEVEL),
            d.tailwater_level_m,
        )?,
        penstock_length_m: read_f64_or(
            tr,
            &tr.t(keys::PROMPT_PENSTOCK_LENGTH),
            d.penstock_length_m,
        )?,
        roughness_m: read_f64_or(tr, &tr.t(keys::PROMPT_ROUGHNESS), d.roughness_m)?,
        flow_velocity_m_per_s: read_f64_or(
            tr,
            &tr.t(keys::PROMPT_FLOW_VELOCITY),
            d.flow_velocity_m_per_s,
        )?,
        kinematic_viscosity_m2_per_s: read_f64_or(
            tr,
            &tr.t(keys::PROMPT_VISCOSITY),
            d.kinematic_viscosity_m2_per_s,
        )?,
        efficiency: read_f64_or(tr, &tr.t(keys::PROMPT_EFFICIENCY), d.efficiency)?,
        operating_time_h: read_f64_or(tr, &tr.t(keys::PROMPT_OPERATING_TIME), d.operating_time_h)?,
    };

    let result = match compute(&params) {
        Ok(r) => r,
        Err(e) => {
            println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
            return Ok(());
        }
    };

    println!("{}", tr.t(keys::RESULT_HEADING));
    println!(
        "{} {:.4} m",
        tr.t(keys::RESULT_DIAMETER),
        result.hydraulic_diameter_m
    );
    println!("{} {:.2} m", tr.t(keys::RESULT_GROSS_HEAD), result.gross_head_m);
    println!("{} {:.2} m", tr.t(keys::RESULT_DRAFT_HEAD), result.draft_head_m);
    println!(
        "{} {:.3e}",
        tr.t(keys::RESULT_REYNOLDS),
        result.reynolds_number
    );
    println!(
        "{} {:.5}",
        tr.t(keys::RESULT_FRICTION),
        result.friction_factor
    );
    println!("{} {:.3} m", tr.t(keys::RESULT_MAJOR_LOSS), result.major_loss_m);
    println!(
        "{} {:.2} m",
        tr.t(keys::RESULT_EFFECTIVE_HEAD),
        result.effective_head_m
    );
    print_power_energy(tr, &cfg.default_units, result.power_kw, result.energy_kwh);
    if result.effective_head_m < 0.0 {
        println!("{}", tr.t(keys::RESULT_INFEASIBLE_WARNING));
    }

    print_curves(tr, result.power_kw)?;
    Ok(())
}

/// 출력/에너지를 설정된 표시 단위로 환산해 출력한다.
fn print_power_energy(tr: &Translator, units: &DefaultUnits, power_kw: f64, energy_kwh: f64) {
    let power = convert_power(power_kw, PowerUnit::Kilowatt, units.power);
    let energy = convert_energy(energy_kwh, EnergyUnit::KilowattHour, units.energy);
    println!(
        "{} {:.2} {}",
        tr.t(keys::RESULT_POWER),
        power,
        power_unit_label(units.power)
    );
    println!(
        "{} {:.2} {}",
        tr.t(keys::RESULT_ENERGY),
        energy,
        energy_unit_label(units.energy)
    );
}

/// 두 스윕 곡선을 10점 간격으로 미리 보여준다.
fn print_curves(tr: &Translator, power_kw: f64) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CURVE_DIAMETER_HEADING));
    let diameter_curve =
        sample_diameter_curve(SampleDomain::discharge_default()).map_err(PerformanceError::from)?;
    for (i, (q, d)) in diameter_curve.enumerate() {
        if i % 10 == 0 {
            println!("  Q = {q:7.2} m3/s -> d = {d:6.3} m");
        }
    }

    println!("{}", tr.t(keys::CURVE_ENERGY_HEADING));
    for (i, (t, e)) in sample_energy_curve(power_kw, SampleDomain::operating_time_default())
        .enumerate()
    {
        if i % 10 == 0 {
            println!("  T = {t:6.2} h -> E = {e:12.1} kWh");
        }
    }
    Ok(())
}

/// 자리만 잡아 둔 섹션의 안내 문구를 출력한다.
pub fn handle_placeholder(tr: &Translator, stub_key: &str) {
    println!("\n{}", tr.t(stub_key));
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {:?}",
        tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM),
        cfg.unit_system
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.unit_system = match sel.trim() {
        "1" => UnitSystem::SI,
        "2" => UnitSystem::Imperial,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            cfg.unit_system
        }
    };
    cfg.default_units = DefaultUnits::for_system(cfg.unit_system);
    println!("{} {:?}", tr.t(keys::SETTINGS_SAVED), cfg.unit_system);
    Ok(())
}

fn power_unit_label(unit: PowerUnit) -> &'static str {
    match unit {
        PowerUnit::Kilowatt => "kW",
        PowerUnit::Megawatt => "MW",
        PowerUnit::Watt => "W",
        PowerUnit::Horsepower => "hp",
    }
}

fn energy_unit_label(unit: EnergyUnit) -> &'static str {
    match unit {
        EnergyUnit::KilowattHour => "kWh",
        EnergyUnit::MegawattHour => "MWh",
        EnergyUnit::Joule => "J",
        EnergyUnit::Gigajoule => "GJ",
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// 기본값이 있는 숫자 입력. 빈 입력이면 기본값을 돌려준다.
fn read_f64_or(tr: &Translator, label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} ({default}): "))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
