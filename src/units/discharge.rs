use serde::{Deserialize, Serialize};

/// 유량 단위. 내부 기준은 m3/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DischargeUnit {
    CubicMeterPerSecond,
    CubicMeterPerHour,
    LiterPerSecond,
    CubicFootPerSecond,
}

fn factor_to_m3s(unit: DischargeUnit) -> f64 {
    match unit {
        DischargeUnit::CubicMeterPerSecond => 1.0,
        DischargeUnit::CubicMeterPerHour => 1.0 / 3600.0,
        DischargeUnit::LiterPerSecond => 0.001,
        DischargeUnit::CubicFootPerSecond => 0.028_316_846_592,
    }
}

/// 유량을 변환한다.
pub fn convert_discharge(value: f64, from: DischargeUnit, to: DischargeUnit) -> f64 {
    value * factor_to_m3s(from) / factor_to_m3s(to)
}
