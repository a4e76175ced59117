//! 수압관로(penstock) 계산: 수리 직경 추정, 레이놀즈수, 마찰계수, 주손실.

use super::DomainError;

/// 중력가속도 [m/s2]
pub const GRAVITY: f64 = 9.81;
/// 물 밀도 [kg/m3]
pub const WATER_DENSITY: f64 = 1000.0;
/// 층류/난류 전환 레이놀즈수
pub const LAMINAR_LIMIT: f64 = 2300.0;

/// 유량-직경 회귀식 계수: d = a·ln(Q) + b
const DIAMETER_LN_COEFF: f64 = 1.2;
const DIAMETER_OFFSET: f64 = 1.5;

/// Colebrook 고정점 반복 초기값
const COLEBROOK_INITIAL: f64 = 0.02;
/// 기본 반복 횟수. 수렴 검사 없이 이 횟수만큼 돌리는 것이 기본 동작이다.
const DEFAULT_ITERATIONS: u32 = 100;

/// 회귀식 본체. 호출 전에 유량이 양수임이 보장되어야 한다.
pub(crate) fn diameter_fit(discharge_m3_per_s: f64) -> f64 {
    DIAMETER_LN_COEFF * discharge_m3_per_s.ln() + DIAMETER_OFFSET
}

/// 유량으로부터 수리 직경을 회귀식 d = 1.2·ln(Q) + 1.5 로 추정한다.
///
/// 점 추정 외에 첫 번째 차트용 유량 스윕에도 같은 식이 쓰인다.
pub fn estimate_hydraulic_diameter(discharge_m3_per_s: f64) -> Result<f64, DomainError> {
    if discharge_m3_per_s <= 0.0 {
        return Err(DomainError::NonPositiveDischarge(discharge_m3_per_s));
    }
    Ok(diameter_fit(discharge_m3_per_s))
}

/// 레이놀즈수 Re = u·d/ν. ν가 0 이하이면 0 나눗셈 대신 오류를 반환한다.
pub fn reynolds_number(
    velocity_m_per_s: f64,
    diameter_m: f64,
    kinematic_viscosity_m2_per_s: f64,
) -> Result<f64, DomainError> {
    if kinematic_viscosity_m2_per_s <= 0.0 {
        return Err(DomainError::NonPositiveViscosity(
            kinematic_viscosity_m2_per_s,
        ));
    }
    Ok(velocity_m_per_s * diameter_m / kinematic_viscosity_m2_per_s)
}

/// Darcy 마찰계수 해석기.
///
/// 기본값은 Colebrook-White 고정점 반복을 수렴 검사 없이 정확히 100회
/// 수행한다(회귀 비교용). `with_tolerance`로 허용오차를 지정하면
/// |λ_new − λ_old| < ε 에서 조기 종료한다.
#[derive(Debug, Clone, Copy)]
pub struct FrictionSolver {
    max_iterations: u32,
    tolerance: Option<f64>,
}

impl Default for FrictionSolver {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_ITERATIONS,
            tolerance: None,
        }
    }
}

impl FrictionSolver {
    pub fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations,
            tolerance: None,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// 마찰계수를 계산한다. Re < 2300이면 층류 폐형식 64/Re,
    /// 그 외에는 Colebrook-White 고정점 반복.
    pub fn solve(
        &self,
        reynolds: f64,
        roughness_m: f64,
        diameter_m: f64,
    ) -> Result<f64, DomainError> {
        if reynolds <= 0.0 {
            return Err(DomainError::NonPositiveReynolds(reynolds));
        }
        if reynolds < LAMINAR_LIMIT {
            return Ok(64.0 / reynolds);
        }

        let relative_roughness = roughness_m / diameter_m;
        let mut lambda = COLEBROOK_INITIAL;
        for _ in 0..self.max_iterations {
            let right = -2.0
                * ((2.51 / (reynolds * lambda.sqrt())) + relative_roughness / 3.72).log10();
            if right <= 0.0 {
                return Err(DomainError::DegenerateFrictionIteration {
                    reynolds,
                    relative_roughness,
                });
            }
            let next = (1.0 / right) * (1.0 / right);
            if let Some(eps) = self.tolerance {
                if (next - lambda).abs() < eps {
                    return Ok(next);
                }
            }
            lambda = next;
        }
        Ok(lambda)
    }
}

/// 기본 해석기(100회 고정 반복)로 마찰계수를 계산한다.
pub fn friction_factor(reynolds: f64, roughness_m: f64, diameter_m: f64) -> Result<f64, DomainError> {
    FrictionSolver::default().solve(reynolds, roughness_m, diameter_m)
}

/// Darcy-Weisbach 주손실 입력.
#[derive(Debug, Clone)]
pub struct MajorLossInput {
    pub friction_factor: f64,
    /// 관로 길이 [m]
    pub length_m: f64,
    /// 수리 직경 [m]
    pub diameter_m: f64,
    /// 관내 유속 [m/s]
    pub velocity_m_per_s: f64,
    /// 작동 유체 밀도 [kg/m3]
    pub fluid_density_kg_per_m3: f64,
    /// 기준 물 밀도 [kg/m3]
    pub water_density_kg_per_m3: f64,
}

impl MajorLossInput {
    /// 담수 기준 입력(밀도비 1)을 만든다.
    pub fn fresh_water(
        friction_factor: f64,
        length_m: f64,
        diameter_m: f64,
        velocity_m_per_s: f64,
    ) -> Self {
        Self {
            friction_factor,
            length_m,
            diameter_m,
            velocity_m_per_s,
            fluid_density_kg_per_m3: WATER_DENSITY,
            water_density_kg_per_m3: WATER_DENSITY,
        }
    }
}

/// 주손실 수두 h = λ·(L/D)·(u²/2g)·(ρ_fluid/ρ_water) [m].
pub fn major_loss(input: &MajorLossInput) -> f64 {
    input.friction_factor
        * (input.length_m / input.diameter_m)
        * (input.velocity_m_per_s * input.velocity_m_per_s / (2.0 * GRAVITY))
        * (input.fluid_density_kg_per_m3 / input.water_density_kg_per_m3)
}
