use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{cost::Cost, rate::KilowattHourRate};

quantity!(KilowattHours);

impl Mul<KilowattHourRate> for KilowattHours {
    type Output = Cost;

    fn mul(self, rhs: KilowattHourRate) -> Self::Output {
        Cost(self.0 * rhs.0)
    }
}

impl Display for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} kWh", self.0)
    }
}

impl Debug for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}kWh", self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_min_max() {
        assert_eq!(KilowattHours(1.0).min(KilowattHours(2.0)), KilowattHours(1.0));
        assert_eq!(KilowattHours(1.0).max(KilowattHours(2.0)), KilowattHours(2.0));
    }

    #[test]
    fn test_mul_rate() {
        assert_abs_diff_eq!((KilowattHours(50.0) * KilowattHourRate(0.3)).0, 15.0);
    }
}
