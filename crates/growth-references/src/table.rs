//! Age-indexed LMS grids.

use crate::lms::LmsParams;

/// One grid row: LMS parameters published at a decimal age.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LmsPoint {
    pub age: f64,
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

/// LMS parameters over an age range for one (reference, sex, method)
/// combination.
///
/// Points are kept sorted by age; parameters between grid ages are obtained by
/// linear interpolation of L, M, and S. Ages outside the grid have no data;
/// extrapolation is never attempted.
#[derive(Debug, Clone)]
pub struct LmsTable {
    points: Vec<LmsPoint>,
}

impl LmsTable {
    pub fn new(mut points: Vec<LmsPoint>) -> Self {
        points.sort_by(|a, b| a.age.total_cmp(&b.age));
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Inclusive age range covered by the grid.
    pub fn age_range(&self) -> Option<(f64, f64)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((first.age, last.age)),
            _ => None,
        }
    }

    /// LMS parameters at `age`, or `None` when the age falls outside the
    /// grid (or is not a number).
    pub fn params_at(&self, age: f64) -> Option<LmsParams> {
        let (min, max) = self.age_range()?;
        if age.is_nan() || age < min || age > max {
            return None;
        }

        // Find the first grid point at or beyond the requested age.
        let upper_index = self.points.partition_point(|p| p.age < age);
        let upper = self.points.get(upper_index).or(self.points.last())?;
        if upper_index == 0 || (upper.age - age).abs() < f64::EPSILON {
            return Some(LmsParams {
                l: upper.l,
                m: upper.m,
                s: upper.s,
            });
        }
        let lower = self.points.get(upper_index - 1)?;

        let span = upper.age - lower.age;
        if span <= 0.0 {
            return Some(LmsParams {
                l: lower.l,
                m: lower.m,
                s: lower.s,
            });
        }
        let t = (age - lower.age) / span;
        Some(LmsParams {
            l: lower.l + (upper.l - lower.l) * t,
            m: lower.m + (upper.m - lower.m) * t,
            s: lower.s + (upper.s - lower.s) * t,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> LmsTable {
        LmsTable::new(vec![
            LmsPoint {
                age: 2.0,
                l: 1.0,
                m: 87.0,
                s: 0.036,
            },
            LmsPoint {
                age: 1.0,
                l: 1.0,
                m: 75.5,
                s: 0.036,
            },
            LmsPoint {
                age: 3.0,
                l: 1.0,
                m: 96.0,
                s: 0.038,
            },
        ])
    }

    #[test]
    fn test_points_are_sorted_on_construction() {
        assert_eq!(table().age_range(), Some((1.0, 3.0)));
    }

    #[test]
    fn test_exact_grid_age() {
        let params = table().params_at(2.0).unwrap();
        assert_eq!(params.m, 87.0);
    }

    #[test]
    fn test_interpolates_between_grid_ages() {
        let params = table().params_at(2.5).unwrap();
        assert!((params.m - 91.5).abs() < 1e-9);
        assert!((params.s - 0.037).abs() < 1e-9);
    }

    #[test]
    fn test_outside_grid_is_none() {
        assert!(table().params_at(0.5).is_none());
        assert!(table().params_at(3.01).is_none());
        assert!(table().params_at(f64::NAN).is_none());
    }
}
