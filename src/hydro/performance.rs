//! 계산 경계: 설계 입력 한 벌을 받아 결과 레코드 전체를 유도한다.
//! 입력 변경마다 전체 체인을 다시 계산하며 캐싱/증분 계산은 없다.

use serde::{Deserialize, Serialize};

use super::head::{draft_head, effective_head, gross_head};
use super::penstock::{
    estimate_hydraulic_diameter, major_loss, reynolds_number, FrictionSolver, MajorLossInput,
    GRAVITY,
};
use super::{ConfigurationError, DomainError};

/// 설계 입력 한 벌. 호출마다 새로 만들어 한 번 소비하고 버린다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignParameterSet {
    /// 발전 사용수량 [m3/s]
    pub discharge_m3_per_s: f64,
    /// 고수위 HWL [m]
    pub high_water_level_m: f64,
    /// 저수위 LWL [m]
    pub low_water_level_m: f64,
    /// 방수위 TWL [m]
    pub tailwater_level_m: f64,
    /// 수압관로 길이 [m]
    pub penstock_length_m: f64,
    /// 절대 조도 [m]
    pub roughness_m: f64,
    /// 관내 유속 [m/s]
    pub flow_velocity_m_per_s: f64,
    /// 물의 동점성계수 [m2/s]
    pub kinematic_viscosity_m2_per_s: f64,
    /// 종합 효율 [0, 1]
    pub efficiency: f64,
    /// 일일 운전 시간 [h]
    pub operating_time_h: f64,
}

impl Default for DesignParameterSet {
    fn default() -> Self {
        Self {
            discharge_m3_per_s: 56.25,
            high_water_level_m: 400.0,
            low_water_level_m: 370.0,
            tailwater_level_m: 300.0,
            penstock_length_m: 500.0,
            roughness_m: 0.0006,
            flow_velocity_m_per_s: 5.0,
            kinematic_viscosity_m2_per_s: 1.0e-6,
            efficiency: 0.85,
            operating_time_h: 24.0,
        }
    }
}

impl DesignParameterSet {
    /// 계산에 들어가기 전에 입력값 범위를 검증한다.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(0.0..=1.0).contains(&self.efficiency) {
            return Err(ConfigurationError::EfficiencyOutOfRange(self.efficiency));
        }
        if self.penstock_length_m <= 0.0 {
            return Err(ConfigurationError::NonPositivePipeLength(
                self.penstock_length_m,
            ));
        }
        if self.flow_velocity_m_per_s <= 0.0 {
            return Err(ConfigurationError::NonPositiveVelocity(
                self.flow_velocity_m_per_s,
            ));
        }
        if self.operating_time_h < 0.0 {
            return Err(ConfigurationError::NegativeOperatingTime(
                self.operating_time_h,
            ));
        }
        Ok(())
    }
}

/// 계산 결과 레코드. 입력의 순수 함수이며 부분 결과를 내지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputationResult {
    /// 수리 직경 [m]
    pub hydraulic_diameter_m: f64,
    /// 총낙차 [m]
    pub gross_head_m: f64,
    /// 흡출 수두 [m]
    pub draft_head_m: f64,
    /// 레이놀즈수
    pub reynolds_number: f64,
    /// Darcy 마찰계수
    pub friction_factor: f64,
    /// 마찰 주손실 [m]
    pub major_loss_m: f64,
    /// 유효낙차 [m] (음수면 설계 불성립 신호)
    pub effective_head_m: f64,
    /// 출력 [kW]
    pub power_kw: f64,
    /// 에너지 [kWh]
    pub energy_kwh: f64,
}

/// 계산 경계에서 반환하는 오류. 완전한 결과 아니면 단일 오류 하나다.
#[derive(Debug, Clone, PartialEq)]
pub enum PerformanceError {
    Domain(DomainError),
    Configuration(ConfigurationError),
}

impl std::fmt::Display for PerformanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PerformanceError::Domain(e) => write!(f, "계산 오류: {e}"),
            PerformanceError::Configuration(e) => write!(f, "입력 오류: {e}"),
        }
    }
}

impl std::error::Error for PerformanceError {}

impl From<DomainError> for PerformanceError {
    fn from(value: DomainError) -> Self {
        PerformanceError::Domain(value)
    }
}

impl From<ConfigurationError> for PerformanceError {
    fn from(value: ConfigurationError) -> Self {
        PerformanceError::Configuration(value)
    }
}

/// 출력 P = Q·H_eff·g·η. SI 입력 기준으로 결과는 kW 단위가 된다.
///
/// 유효낙차가 음수면 출력도 음수가 되며 오류가 아니라 해석용 신호다.
pub fn power(
    discharge_m3_per_s: f64,
    effective_head_m: f64,
    gravity: f64,
    efficiency: f64,
) -> f64 {
    discharge_m3_per_s * effective_head_m * gravity * efficiency
}

/// 에너지 E = P·T [kWh].
pub fn energy(power_kw: f64, operating_time_h: f64) -> f64 {
    power_kw * operating_time_h
}

/// 기본 해석기(100회 고정 반복)로 전체 체인을 계산한다.
pub fn compute(params: &DesignParameterSet) -> Result<ComputationResult, PerformanceError> {
    compute_with(params, &FrictionSolver::default())
}

/// 지정된 마찰계수 해석기로 전체 체인을 계산한다.
pub fn compute_with(
    params: &DesignParameterSet,
    solver: &FrictionSolver,
) -> Result<ComputationResult, PerformanceError> {
    params.validate()?;

    let hydraulic_diameter_m = estimate_hydraulic_diameter(params.discharge_m3_per_s)?;
    if hydraulic_diameter_m <= 0.0 {
        return Err(ConfigurationError::NonPositiveDiameter(hydraulic_diameter_m).into());
    }

    let gross_head_m = gross_head(
        params.high_water_level_m,
        params.low_water_level_m,
        params.tailwater_level_m,
    );
    let draft_head_m = draft_head(gross_head_m);

    let reynolds = reynolds_number(
        params.flow_velocity_m_per_s,
        hydraulic_diameter_m,
        params.kinematic_viscosity_m2_per_s,
    )?;
    let friction_factor = solver.solve(reynolds, params.roughness_m, hydraulic_diameter_m)?;

    let major_loss_m = major_loss(&MajorLossInput::fresh_water(
        friction_factor,
        params.penstock_length_m,
        hydraulic_diameter_m,
        params.flow_velocity_m_per_s,
    ));
    let effective_head_m = effective_head(gross_head_m, major_loss_m, draft_head_m);

    let power_kw = power(
        params.discharge_m3_per_s,
        effective_head_m,
        GRAVITY,
        params.efficiency,
    );
    let energy_kwh = energy(power_kw, params.operating_time_h);

    Ok(ComputationResult {
        hydraulic_diameter_m,
        gross_head_m,
        draft_head_m,
        reynolds_number: reynolds,
        friction_factor,
        major_loss_m,
        effective_head_m,
        power_kw,
        energy_kwh,
    })
}
