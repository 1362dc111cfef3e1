//! Milepost positions along the line.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of feet in a mile, used to turn milepost differences into track length.
pub const FEET_PER_MILE: f64 = 5280.0;

/// A position on the linear milepost axis.
///
/// Mileposts are trusted as supplied by the signalling system; no range or
/// ordering checks are applied.
///
/// # Examples
///
/// ```
/// use wind_restriction::domain::Milepost;
///
/// let a = Milepost::new(46.0);
/// let b = Milepost::new(47.0);
/// assert_eq!(a.feet_to(b), 5280.0);
/// assert_eq!(b.feet_to(a), 5280.0);
/// assert_eq!(a.to_string(), "46.0");
/// ```
#[derive(Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Milepost(f64);

impl Milepost {
    /// Create a milepost from a mile value.
    pub const fn new(miles: f64) -> Self {
        Milepost(miles)
    }

    /// Returns the raw mile value.
    pub const fn miles(self) -> f64 {
        self.0
    }

    /// Distance in feet between two mileposts.
    ///
    /// Always non-negative, and symmetric in its arguments.
    pub fn feet_to(self, other: Milepost) -> f64 {
        (other.0 - self.0).abs() * FEET_PER_MILE
    }
}

impl fmt::Debug for Milepost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MP {}", self.0)
    }
}

/// Fixed one-decimal rendering, as printed on directives.
impl fmt::Display for Milepost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_mile_is_5280_feet() {
        assert_eq!(Milepost::new(46.0).feet_to(Milepost::new(47.0)), 5280.0);
    }

    #[test]
    fn fractional_distance() {
        let gap = Milepost::new(10.0).feet_to(Milepost::new(10.5));
        assert_eq!(gap, 2640.0);
    }

    #[test]
    fn same_position_is_zero() {
        assert_eq!(Milepost::new(21.0).feet_to(Milepost::new(21.0)), 0.0);
    }

    #[test]
    fn display_one_decimal() {
        assert_eq!(Milepost::new(46.5).to_string(), "46.5");
        assert_eq!(Milepost::new(47.0).to_string(), "47.0");
        assert_eq!(Milepost::new(7.26).to_string(), "7.3");
    }

    #[test]
    fn ordering() {
        assert!(Milepost::new(44.0) < Milepost::new(46.0));
    }

    #[test]
    fn serde_is_a_bare_number() {
        let mp: Milepost = serde_json::from_str("47.25").unwrap();
        assert_eq!(mp.miles(), 47.25);
        assert_eq!(serde_json::to_string(&mp).unwrap(), "47.25");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Swapping the two mileposts yields the same gap
        #[test]
        fn distance_is_symmetric(a in -1000.0f64..1000.0, b in -1000.0f64..1000.0) {
            let x = Milepost::new(a);
            let y = Milepost::new(b);
            prop_assert_eq!(x.feet_to(y), y.feet_to(x));
        }

        /// Distances are never negative
        #[test]
        fn distance_non_negative(a in -1000.0f64..1000.0, b in -1000.0f64..1000.0) {
            prop_assert!(Milepost::new(a).feet_to(Milepost::new(b)) >= 0.0);
        }
    }
}
