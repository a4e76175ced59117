use serde::{Deserialize, Serialize};

/// 에너지 단위. 내부 기준은 kWh이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    KilowattHour,
    MegawattHour,
    Joule,
    Gigajoule,
}

fn factor_to_kwh(unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::KilowattHour => 1.0,
        EnergyUnit::MegawattHour => 1000.0,
        EnergyUnit::Joule => 1.0 / 3.6e6,
        EnergyUnit::Gigajoule => 1000.0 / 3.6,
    }
}

/// 에너지를 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    value * factor_to_kwh(from) / factor_to_kwh(to)
}
