//! 단위 정의 및 변환 모듈 모음.

pub mod discharge;
pub mod energy;
pub mod length;
pub mod power;
pub mod time;
pub mod velocity;
pub mod viscosity;

pub use discharge::{convert_discharge, DischargeUnit};
pub use energy::{convert_energy, EnergyUnit};
pub use length::{convert_length, LengthUnit};
pub use power::{convert_power, PowerUnit};
pub use time::{convert_time, TimeUnit};
pub use velocity::{convert_velocity, VelocityUnit};
pub use viscosity::{convert_viscosity, KinematicViscosityUnit};
