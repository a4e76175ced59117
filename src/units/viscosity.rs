use serde::{Deserialize, Serialize};

/// 동점성계수 단위. 내부 기준은 m2/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KinematicViscosityUnit {
    SquareMeterPerSecond,
    Centistokes,
}

fn factor_to_m2s(unit: KinematicViscosityUnit) -> f64 {
    match unit {
        KinematicViscosityUnit::SquareMeterPerSecond => 1.0,
        KinematicViscosityUnit::Centistokes => 1.0e-6,
    }
}

/// 동점성계수를 변환한다.
pub fn convert_viscosity(
    value: f64,
    from: KinematicViscosityUnit,
    to: KinematicViscosityUnit,
) -> f64 {
    value * factor_to_m2s(from) / factor_to_m2s(to)
}
