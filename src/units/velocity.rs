use serde::{Deserialize, Serialize};

/// 속도 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    MeterPerSecond,
    FootPerSecond,
    KilometerPerHour,
}

fn factor_to_mps(unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => 1.0,
        VelocityUnit::FootPerSecond => 0.3048,
        VelocityUnit::KilometerPerHour => 1.0 / 3.6,
    }
}

/// 속도를 변환한다.
pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> f64 {
    value * factor_to_mps(from) / factor_to_mps(to)
}
