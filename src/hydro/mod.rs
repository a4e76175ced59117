//! 수력 성능 계산 모듈 모음. 모든 함수는 순수 함수이며 입력을 변형하지 않는다.

pub mod curve;
pub mod head;
pub mod penstock;
pub mod performance;

pub use curve::{sample_curve, sample_diameter_curve, sample_energy_curve, SampleDomain};
pub use head::{draft_head, effective_head, gross_head};
pub use penstock::{
    estimate_hydraulic_diameter, friction_factor, major_loss, reynolds_number, FrictionSolver,
    MajorLossInput,
};
pub use performance::{
    compute, compute_with, energy, power, ComputationResult, DesignParameterSet, PerformanceError,
};

/// 계산 도메인 오류. NaN/Infinity를 조용히 전파하는 대신 계산 지점에서 즉시 반환한다.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// 로그 인자로 들어가는 유량이 0 이하인 경우
    NonPositiveDischarge(f64),
    /// 동점성계수가 0 이하인 경우 (0 나눗셈 방지)
    NonPositiveViscosity(f64),
    /// 레이놀즈수가 0 이하인 경우
    NonPositiveReynolds(f64),
    /// Colebrook 반복의 우변이 0 이하로 퇴화한 경우
    DegenerateFrictionIteration {
        reynolds: f64,
        relative_roughness: f64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NonPositiveDischarge(q) => {
                write!(f, "유량은 0보다 커야 합니다: {q} m3/s")
            }
            DomainError::NonPositiveViscosity(nu) => {
                write!(f, "동점성계수는 0보다 커야 합니다: {nu} m2/s")
            }
            DomainError::NonPositiveReynolds(re) => {
                write!(f, "레이놀즈수는 0보다 커야 합니다: {re}")
            }
            DomainError::DegenerateFrictionIteration {
                reynolds,
                relative_roughness,
            } => write!(
                f,
                "Colebrook 반복이 퇴화했습니다 (Re={reynolds:.3e}, k/D={relative_roughness:.3e})"
            ),
        }
    }
}

impl std::error::Error for DomainError {}

/// 설계 입력값 오류. 계산에 들어가기 전에 입력 검증 단계에서 반환한다.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// 효율이 [0, 1] 범위를 벗어난 경우
    EfficiencyOutOfRange(f64),
    /// 관로 길이가 0 이하인 경우
    NonPositivePipeLength(f64),
    /// (유도된) 수리 직경이 0 이하인 경우
    NonPositiveDiameter(f64),
    /// 관내 유속이 0 이하인 경우
    NonPositiveVelocity(f64),
    /// 운전 시간이 음수인 경우
    NegativeOperatingTime(f64),
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationError::EfficiencyOutOfRange(eta) => {
                write!(f, "효율은 0과 1 사이여야 합니다: {eta}")
            }
            ConfigurationError::NonPositivePipeLength(l) => {
                write!(f, "관로 길이는 0보다 커야 합니다: {l} m")
            }
            ConfigurationError::NonPositiveDiameter(d) => {
                write!(f, "수리 직경은 0보다 커야 합니다: {d} m")
            }
            ConfigurationError::NonPositiveVelocity(u) => {
                write!(f, "유속은 0보다 커야 합니다: {u} m/s")
            }
            ConfigurationError::NegativeOperatingTime(t) => {
                write!(f, "운전 시간은 음수일 수 없습니다: {t} h")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}
