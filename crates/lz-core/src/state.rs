//! Phase-space state triple.

use core::fmt;

use crate::error::LzError;
use crate::numeric::Real;

/// A point in phase space at one instant.
///
/// Values are plain `f64` coordinates, not SI quantities; the Lorenz
/// variables are dimensionless. Copy semantics: each integration step
/// produces a new `State` from the previous one.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl State {
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Self { x, y, z }
    }

    /// Component-wise sum: `self + other`.
    pub fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    /// Component-wise scaling: `k * self`.
    pub fn scale(self, k: Real) -> Self {
        Self {
            x: k * self.x,
            y: k * self.y,
            z: k * self.z,
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn ensure_finite(self, what: &'static str) -> Result<Self, LzError> {
        if self.is_finite() {
            Ok(self)
        } else {
            let value = if !self.x.is_finite() {
                self.x
            } else if !self.y.is_finite() {
                self.y
            } else {
                self.z
            };
            Err(LzError::NonFinite { what, value })
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_scale_component_wise() {
        let a = State::new(1.0, 2.0, 3.0);
        let b = State::new(0.5, -2.0, 1.0);
        assert_eq!(a.add(b), State::new(1.5, 0.0, 4.0));
        assert_eq!(a.scale(2.0), State::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn euler_update_shape() {
        // state + h * derivative, the integrator's only state arithmetic
        let x = State::new(10.0, 10.0, 10.0);
        let xdot = State::new(0.0, -72.0, 220.0 / 3.0);
        let next = x.add(xdot.scale(0.001));
        assert_eq!(next.x, 10.0);
        assert_eq!(next.y, 9.928);
    }

    #[test]
    fn finite_checks() {
        assert!(State::new(1.0, 2.0, 3.0).is_finite());
        assert!(!State::new(1.0, f64::NAN, 3.0).is_finite());
        let err = State::new(1.0, 2.0, f64::INFINITY)
            .ensure_finite("state")
            .unwrap_err();
        assert!(format!("{err}").contains("Non-finite"));
    }
}
