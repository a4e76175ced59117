use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `m3/s`, `cfs`, `m`, `ft`, `kW`, `MWh`, `cSt` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Discharge => {
            let from = parse_discharge_unit(from_unit_str)?;
            let to = parse_discharge_unit(to_unit_str)?;
            Ok(convert_discharge(value, from, to))
        }
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Velocity => {
            let from = parse_velocity_unit(from_unit_str)?;
            let to = parse_velocity_unit(to_unit_str)?;
            Ok(convert_velocity(value, from, to))
        }
        QuantityKind::KinematicViscosity => {
            let from = parse_viscosity_unit(from_unit_str)?;
            let to = parse_viscosity_unit(to_unit_str)?;
            Ok(convert_viscosity(value, from, to))
        }
        QuantityKind::Time => {
            let from = parse_time_unit(from_unit_str)?;
            let to = parse_time_unit(to_unit_str)?;
            Ok(convert_time(value, from, to))
        }
        QuantityKind::Power => {
            let from = parse_power_unit(from_unit_str)?;
            let to = parse_power_unit(to_unit_str)?;
            Ok(convert_power(value, from, to))
        }
        QuantityKind::Energy => {
            let from = parse_energy_unit(from_unit_str)?;
            let to = parse_energy_unit(to_unit_str)?;
            Ok(convert_energy(value, from, to))
        }
    }
}

pub fn parse_discharge_unit(s: &str) -> Result<DischargeUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m3/s" | "m^3/s" | "cms" => Ok(DischargeUnit::CubicMeterPerSecond),
        "m3/h" | "m^3/h" => Ok(DischargeUnit::CubicMeterPerHour),
        "l/s" | "lps" => Ok(DischargeUnit::LiterPerSecond),
        "ft3/s" | "cfs" => Ok(DischargeUnit::CubicFootPerSecond),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "mm" => Ok(LengthUnit::Millimeter),
        "cm" => Ok(LengthUnit::Centimeter),
        "km" => Ok(LengthUnit::Kilometer),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "ft" | "foot" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_velocity_unit(s: &str) -> Result<VelocityUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m/s" | "mps" => Ok(VelocityUnit::MeterPerSecond),
        "ft/s" | "fps" => Ok(VelocityUnit::FootPerSecond),
        "km/h" | "kph" => Ok(VelocityUnit::KilometerPerHour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_viscosity_unit(s: &str) -> Result<KinematicViscosityUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m2/s" | "m^2/s" => Ok(KinematicViscosityUnit::SquareMeterPerSecond),
        "cst" | "centistokes" => Ok(KinematicViscosityUnit::Centistokes),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_time_unit(s: &str) -> Result<TimeUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "h" | "hr" | "hour" => Ok(TimeUnit::Hour),
        "s" | "sec" => Ok(TimeUnit::Second),
        "min" => Ok(TimeUnit::Minute),
        "d" | "day" => Ok(TimeUnit::Day),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_power_unit(s: &str) -> Result<PowerUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kw" => Ok(PowerUnit::Kilowatt),
        "mw" => Ok(PowerUnit::Megawatt),
        "w" => Ok(PowerUnit::Watt),
        "hp" => Ok(PowerUnit::Horsepower),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_energy_unit(s: &str) -> Result<EnergyUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kwh" => Ok(EnergyUnit::KilowattHour),
        "mwh" => Ok(EnergyUnit::MegawattHour),
        "j" | "joule" => Ok(EnergyUnit::Joule),
        "gj" => Ok(EnergyUnit::Gigajoule),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
