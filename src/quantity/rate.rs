use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

quantity!(KilowattHourRate);

/// Tier multipliers scale the base rate.
impl Mul<f64> for KilowattHourRate {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Display for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} €/kWh", self.0)
    }
}

impl Debug for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}€/kWh", self.0)
    }
}
