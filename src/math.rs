//! Integer primitives shared by every conversion formula.
//!
//! The formulas are written against division that truncates toward zero and
//! a remainder carrying the sign of the dividend. Rust's `/` and `%` on signed
//! integers already behave this way; these wrappers pin that behaviour down by
//! name so no call site drifts to `div_euclid`/`rem_euclid`.

/// Integer division truncating toward zero.
#[inline]
pub const fn div(a: i32, b: i32) -> i32 {
    a / b
}

/// Remainder consistent with [`div`]: `a - div(a, b) * b`.
#[inline]
pub const fn modulo(a: i32, b: i32) -> i32 {
    a - div(a, b) * b
}

/// [`div`] over `i64`, for formulas whose intermediates outgrow `i32`.
#[inline]
pub const fn div_wide(a: i64, b: i64) -> i64 {
    a / b
}

/// [`modulo`] over `i64`.
#[inline]
pub const fn modulo_wide(a: i64, b: i64) -> i64 {
    a - div_wide(a, b) * b
}
