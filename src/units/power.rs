use serde::{Deserialize, Serialize};

/// 출력 단위. 내부 기준은 kW이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Kilowatt,
    Megawatt,
    Watt,
    Horsepower,
}

fn factor_to_kw(unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Kilowatt => 1.0,
        PowerUnit::Megawatt => 1000.0,
        PowerUnit::Watt => 0.001,
        PowerUnit::Horsepower => 0.745_699_872,
    }
}

/// 출력을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    value * factor_to_kw(from) / factor_to_kw(to)
}
