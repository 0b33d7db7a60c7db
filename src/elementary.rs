//! Elementary math functions
//!
//! Thin forwards to the platform math library. Overflow and domain errors
//! follow IEEE 754 as the platform implements it: `sinh(1000.0)` is `inf`,
//! `log10(0.0)` is `-inf` and `log10(-1.0)` is NaN. Nothing here raises an
//! error.

/// Scalar elementary functions
///
/// Implement this to route the functions to a different math library; the
/// crate itself uses [`PlatformMath`].
pub trait ElementaryMath {
    /// Hyperbolic sine
    fn sinh(&self, x: f64) -> f64;

    /// Inverse hyperbolic sine
    fn asinh(&self, x: f64) -> f64;

    /// Base-10 logarithm
    fn log10(&self, x: f64) -> f64;
}

/// The platform `libm` as exposed by `std`
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformMath;

impl ElementaryMath for PlatformMath {
    #[inline]
    fn sinh(&self, x: f64) -> f64 {
        x.sinh()
    }

    #[inline]
    fn asinh(&self, x: f64) -> f64 {
        x.asinh()
    }

    #[inline]
    fn log10(&self, x: f64) -> f64 {
        x.log10()
    }
}

/// Hyperbolic sine of `x`
///
/// ```
/// assert_eq!(denselin::sinh(0.0), 0.0);
/// assert!(denselin::sinh(1000.0).is_infinite());
/// ```
#[inline]
pub fn sinh(x: f64) -> f64 {
    PlatformMath.sinh(x)
}

/// Inverse hyperbolic sine of `x`
#[inline]
pub fn asinh(x: f64) -> f64 {
    PlatformMath.asinh(x)
}

/// Base-10 logarithm of `x`
///
/// ```
/// assert_eq!(denselin::log10(1000.0), 3.0);
/// assert!(denselin::log10(-1.0).is_nan());
/// ```
#[inline]
pub fn log10(x: f64) -> f64 {
    PlatformMath.log10(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sinh() {
        assert_eq!(sinh(0.0), 0.0);
        assert!((sinh(1.0) - 1.1752011936438014).abs() < 1e-15);
        assert_eq!(sinh(-1.0), -sinh(1.0));
        assert_eq!(sinh(1000.0), f64::INFINITY);
        assert_eq!(sinh(-1000.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_asinh() {
        assert_eq!(asinh(0.0), 0.0);
        assert!((asinh(sinh(0.5)) - 0.5).abs() < 1e-15);
        assert_eq!(asinh(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_log10() {
        assert_eq!(log10(1.0), 0.0);
        assert_eq!(log10(100.0), 2.0);
        assert_eq!(log10(0.0), f64::NEG_INFINITY);
        assert!(log10(-1.0).is_nan());
    }

    #[test]
    fn test_nan_propagates() {
        assert!(sinh(f64::NAN).is_nan());
        assert!(asinh(f64::NAN).is_nan());
        assert!(log10(f64::NAN).is_nan());
    }

    struct Doubling;

    impl ElementaryMath for Doubling {
        fn sinh(&self, x: f64) -> f64 {
            2.0 * x
        }
        fn asinh(&self, x: f64) -> f64 {
            x / 2.0
        }
        fn log10(&self, x: f64) -> f64 {
            x
        }
    }

    #[test]
    fn test_custom_implementation() {
        let m: &dyn ElementaryMath = &Doubling;
        assert_eq!(m.sinh(3.0), 6.0);
        assert_eq!(m.asinh(6.0), 3.0);
    }
}
