/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Discharge,
    Length,
    Velocity,
    KinematicViscosity,
    Time,
    Power,
    Energy,
}
