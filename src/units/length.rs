use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 m이다. 수위/관 길이/직경에 공용으로 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Millimeter,
    Centimeter,
    Kilometer,
    Inch,
    Foot,
}

fn factor_to_m(unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => 1.0,
        LengthUnit::Millimeter => 0.001,
        LengthUnit::Centimeter => 0.01,
        LengthUnit::Kilometer => 1000.0,
        LengthUnit::Inch => 0.0254,
        LengthUnit::Foot => 0.3048,
    }
}

/// 길이를 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    value * factor_to_m(from) / factor_to_m(to)
}
