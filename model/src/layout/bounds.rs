use glam::DVec3;

/// Bounded region containing all key positions given by two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Corner point with minimal coordinates.
    pub min: DVec3,
    /// Corner point with maximal coordinates.
    pub max: DVec3,
}

impl Bounds {
    /// Creates the bounds enclosing the given points.
    ///
    /// Returns [`None`] if there are no points.
    pub fn from_points(points: impl IntoIterator<Item = DVec3>) -> Option<Self> {
        points.into_iter().fold(None, |bounds, point| {
            Some(match bounds {
                Some(Self { min, max }) => Self {
                    min: min.min(point),
                    max: max.max(point),
                },
                None => Self {
                    min: point,
                    max: point,
                },
            })
        })
    }

    /// Returns the size of the bounds.
    #[must_use]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Returns the midpoint of the bounds.
    #[must_use]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) / 2.0
    }

    /// Combines two bounds.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let min = self.min.min(other.min);
        let max = self.max.max(other.max);

        Self { min, max }
    }
}

#[cfg(test)]
mod tests {
    use glam::dvec3;

    use super::*;

    #[test]
    fn bounds_enclose_all_points() {
        let bounds = Bounds::from_points([
            dvec3(1.0, 0.0, -2.0),
            dvec3(-3.0, 0.5, 4.0),
            dvec3(2.0, -1.0, 0.0),
        ])
        .unwrap();

        assert_eq!(bounds.min, dvec3(-3.0, -1.0, -2.0));
        assert_eq!(bounds.max, dvec3(2.0, 0.5, 4.0));
        assert_eq!(bounds.center(), dvec3(-0.5, -0.25, 1.0));
        assert_eq!(bounds.size(), dvec3(5.0, 1.5, 6.0));
    }

    #[test]
    fn no_points_have_no_bounds() {
        assert_eq!(Bounds::from_points([]), None);
    }

    #[test]
    fn union_covers_both() {
        let a = Bounds::from_points([dvec3(0.0, 0.0, 0.0)]).unwrap();
        let b = Bounds::from_points([dvec3(1.0, -1.0, 2.0)]).unwrap();

        let union = a.union(&b);
        assert_eq!(union.min, dvec3(0.0, -1.0, 0.0));
        assert_eq!(union.max, dvec3(1.0, 0.0, 2.0));
    }
}
