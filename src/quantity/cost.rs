use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

quantity!(Cost);

/// The excess multiplier applies to an already-rated portion.
impl Mul<f64> for Cost {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+.2} €", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+.2}€", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Cost(1.0).to_string(), "+1.00 €");
        assert_eq!(Cost(-0.5).to_string(), "-0.50 €");
    }
}
