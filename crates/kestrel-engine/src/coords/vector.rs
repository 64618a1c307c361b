use std::ops::Add;

/// Fixed-dimension vector of `f64` components.
///
/// Components are zero until set. Concrete dimensions expose their own
/// accessors; see [`Vector2f`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vecf<const N: usize> {
    components: [f64; N],
}

impl<const N: usize> Vecf<N> {
    #[inline]
    pub const fn zero() -> Self {
        Self { components: [0.0; N] }
    }

    /// Number of components.
    #[inline]
    pub const fn dim(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for Vecf<N> {
    fn default() -> Self {
        Self::zero()
    }
}

/// 2D vector with `f64` components.
pub type Vector2f = Vecf<2>;

impl Vecf<2> {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { components: [x, y] }
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.components[0]
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.components[1]
    }

    /// Returns the component-wise sum. Both operands are copies, so neither
    /// is modified.
    #[inline]
    pub fn add(self, other: Vector2f) -> Vector2f {
        Vector2f::new(self.x() + other.x(), self.y() + other.y())
    }
}

impl Add for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn add(self, rhs: Vector2f) -> Vector2f {
        Vector2f::add(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vector2f { Vector2f::new(x, y) }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn components_round_trip_through_accessors() {
        for (x, y) in [(0.0, 0.0), (1.5, -2.25), (-1e300, 1e-300), (f64::MAX, f64::MIN)] {
            let p = v(x, y);
            assert_eq!(p.x(), x);
            assert_eq!(p.y(), y);
        }
    }

    #[test]
    fn default_is_origin() {
        let p = Vector2f::default();
        assert_eq!((p.x(), p.y()), (0.0, 0.0));
        assert_eq!(p, Vector2f::zero());
    }

    #[test]
    fn components_are_full_precision() {
        // Would be lost if stored as f32.
        let p = v(0.1, 1.0 + f64::EPSILON);
        assert_eq!(p.x(), 0.1);
        assert_eq!(p.y(), 1.0 + f64::EPSILON);
    }

    #[test]
    fn base_vector_zero_initialized() {
        let base = Vecf::<3>::default();
        assert_eq!(base.dim(), 3);
        assert_eq!(base, Vecf::<3>::zero());
    }

    // ── add ───────────────────────────────────────────────────────────────

    #[test]
    fn add_is_component_wise() {
        let pairs = [
            (v(1.0, 2.0), v(3.0, 4.0)),
            (v(-1.0, 0.5), v(1.0, -0.5)),
            (v(0.0, 0.0), v(7.0, -7.0)),
        ];
        for (a, b) in pairs {
            let s = a.add(b);
            assert_eq!(s.x(), a.x() + b.x());
            assert_eq!(s.y(), a.y() + b.y());
        }
    }

    #[test]
    fn add_leaves_operands_untouched() {
        let a = v(1.0, 2.0);
        let b = v(10.0, 20.0);
        let _ = a.add(b);
        assert_eq!(a, v(1.0, 2.0));
        assert_eq!(b, v(10.0, 20.0));
    }

    #[test]
    fn add_operator_matches_method() {
        let a = v(0.25, -4.0);
        let b = v(3.0, 1.5);
        assert_eq!(a + b, a.add(b));
    }
}
