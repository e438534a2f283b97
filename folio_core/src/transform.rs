// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column-major 4×4 transforms for card and image placement.
//!
//! Layout code (the carousel arc, card tilt, parallax) composes these and the
//! web presenter writes the result out as a CSS `matrix3d()` value, so the
//! browser never has to parse a chain of `translate`/`rotate`/`scale` calls.

use alloc::format;
use alloc::string::String;
use core::ops::Mul;

/// A column-major 4×4 affine transform stored as `[[f64; 4]; 4]`.
///
/// Each inner array is one *column*, which is also the argument order CSS
/// `matrix3d()` expects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3d {
    /// Four columns, each a 4-element array `[x, y, z, w]`.
    pub cols: [[f64; 4]; 4],
}

impl Transform3d {
    /// The 4×4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Returns column `i` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    #[inline]
    #[must_use]
    pub const fn col(self, i: usize) -> [f64; 4] {
        self.cols[i]
    }

    /// Creates a pure translation transform (CSS pixels).
    #[inline]
    #[must_use]
    pub const fn from_translation(x: f64, y: f64, z: f64) -> Self {
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [x, y, z, 1.0],
            ],
        }
    }

    /// Creates a uniform scale transform.
    #[inline]
    #[must_use]
    pub const fn from_scale(s: f64) -> Self {
        Self {
            cols: [
                [s, 0.0, 0.0, 0.0],
                [0.0, s, 0.0, 0.0],
                [0.0, 0.0, s, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Creates a rotation around the X axis, in degrees.
    ///
    /// Positive angles tilt the top edge away from the viewer, matching CSS
    /// `rotateX()`.
    #[must_use]
    pub fn from_rotation_x_deg(degrees: f64) -> Self {
        let (s, c) = sin_cos_deg(degrees);
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, c, s, 0.0],
                [0.0, -s, c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Creates a rotation around the Y axis, in degrees (CSS `rotateY()`).
    #[must_use]
    pub fn from_rotation_y_deg(degrees: f64) -> Self {
        let (s, c) = sin_cos_deg(degrees);
        Self {
            cols: [
                [c, 0.0, -s, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [s, 0.0, c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Creates a rotation around the Z axis, in degrees (CSS `rotate()`).
    #[must_use]
    pub fn from_rotation_z_deg(degrees: f64) -> Self {
        let (s, c) = sin_cos_deg(degrees);
        Self {
            cols: [
                [c, s, 0.0, 0.0],
                [-s, c, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Is every element [finite]?
    ///
    /// [finite]: f64::is_finite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().flatten().all(|v| v.is_finite())
    }

    /// Formats the transform as a CSS `matrix3d(...)` value.
    ///
    /// Non-finite transforms collapse to `none` so a bad frame never poisons
    /// the element's style.
    #[must_use]
    pub fn to_css(&self) -> String {
        if !self.is_finite() {
            return String::from("none");
        }
        let [c0, c1, c2, c3] = self.cols;
        format!(
            "matrix3d({},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{})",
            c0[0],
            c0[1],
            c0[2],
            c0[3],
            c1[0],
            c1[1],
            c1[2],
            c1[3],
            c2[0],
            c2[1],
            c2[2],
            c2[3],
            c3[0],
            c3[1],
            c3[2],
            c3[3],
        )
    }
}

impl Default for Transform3d {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform3d {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let a = &self.cols;
        let b = &rhs.cols;
        let mut out = [[0.0_f64; 4]; 4];
        for (j, col) in out.iter_mut().enumerate() {
            for (i, v) in col.iter_mut().enumerate() {
                *v = a[0][i] * b[j][0] + a[1][i] * b[j][1] + a[2][i] * b[j][2] + a[3][i] * b[j][3];
            }
        }
        Self { cols: out }
    }
}

fn sin_cos_deg(degrees: f64) -> (f64, f64) {
    let radians = degrees.to_radians();
    (libm::sin(radians), libm::cos(radians))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn identity_multiply() {
        let t = Transform3d::from_translation(1.0, 2.0, 3.0);
        assert_eq!(Transform3d::IDENTITY * t, t);
        assert_eq!(t * Transform3d::IDENTITY, t);
    }

    #[test]
    fn scale_then_translate_keeps_translation() {
        let combined = Transform3d::from_translation(3.0, 4.0, 0.0) * Transform3d::from_scale(2.0);
        assert_eq!(combined.col(0), [2.0, 0.0, 0.0, 0.0]);
        assert_eq!(combined.col(3), [3.0, 4.0, 0.0, 1.0]);
    }

    #[test]
    fn rotation_z_ninety_degrees() {
        let r = Transform3d::from_rotation_z_deg(90.0);
        assert!(r.col(0)[0].abs() < EPS, "cos(90) should vanish");
        assert!((r.col(0)[1] - 1.0).abs() < EPS, "sin(90) should be one");
        assert!((r.col(1)[0] + 1.0).abs() < EPS, "-sin(90) should be minus one");
    }

    #[test]
    fn rotation_x_zero_is_identity() {
        let r = Transform3d::from_rotation_x_deg(0.0);
        assert_eq!(r, Transform3d::IDENTITY);
    }

    #[test]
    fn css_lists_sixteen_columns_in_order() {
        let css = Transform3d::from_translation(5.0, 6.0, 7.0).to_css();
        assert_eq!(css, "matrix3d(1,0,0,0,0,1,0,0,0,0,1,0,5,6,7,1)");
    }

    #[test]
    fn non_finite_collapses_to_none() {
        let mut t = Transform3d::IDENTITY;
        t.cols[2][1] = f64::NAN;
        assert!(!t.is_finite());
        assert_eq!(t.to_css(), "none");
    }
}
