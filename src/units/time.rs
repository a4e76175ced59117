use serde::{Deserialize, Serialize};

/// 운전 시간 단위. 내부 기준은 h이다. (에너지 = 출력[kW] × 시간[h])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Hour,
    Second,
    Minute,
    Day,
}

fn factor_to_h(unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Hour => 1.0,
        TimeUnit::Second => 1.0 / 3600.0,
        TimeUnit::Minute => 1.0 / 60.0,
        TimeUnit::Day => 24.0,
    }
}

/// 시간을 변환한다.
pub fn convert_time(value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
    value * factor_to_h(from) / factor_to_h(to)
}
