//! Compound interest and gains taxation

use crate::error::ProjectionError;

/// Growth multiplier `(1 + rate/100)^years`.
///
/// Negative `years` are accepted and yield a discount factor. Callers that
/// need a non-negative horizon go through [`compound_growth`].
pub fn growth_factor(rate_pp: f64, years: i32) -> f64 {
    (1.0 + rate_pp / 100.0).powf(f64::from(years))
}

/// Interest earned on `principal` over `years` periods, excluding the principal.
///
/// # Errors
/// * `InvalidYears` if `years` is negative
/// * `NumericOverflow` if the grown amount is not representable. This also
///   covers a -100% rate over a negative horizon in [`grow`], where `0^-n`
///   is a division by zero.
pub fn compound_growth(principal: f64, rate_pp: f64, years: i32) -> Result<f64, ProjectionError> {
    if years < 0 {
        return Err(ProjectionError::InvalidYears { field: "years", value: years });
    }
    grow(principal, rate_pp, years)
}

/// Value of an investment after `years`, with only the gains taxed at `tax_pp`.
///
/// The principal is returned untaxed. A tax rate above 100 inverts the gains.
/// With no gains the investment comes back unchanged whatever the tax rate.
///
/// # Errors
/// As [`compound_growth`]; a non-finite taxed value is `NumericOverflow`.
pub fn after_tax_return(
    investment: f64,
    return_pp: f64,
    years: i32,
    tax_pp: f64,
) -> Result<f64, ProjectionError> {
    if years < 0 {
        return Err(ProjectionError::InvalidYears { field: "years", value: years });
    }
    taxed_growth(investment, return_pp, years, tax_pp).map(|(_, value)| value)
}

/// Signed counterpart of [`compound_growth`] used for post-retirement horizons.
///
/// # Errors
/// `NumericOverflow` when the grown amount is not finite, including
/// `rate_pp == -100` with negative `years` (`0^-n` divides by zero).
pub(crate) fn grow(principal: f64, rate_pp: f64, years: i32) -> Result<f64, ProjectionError> {
    let amount = principal * growth_factor(rate_pp, years);
    if !amount.is_finite() {
        return Err(ProjectionError::NumericOverflow { principal, rate_pp, years });
    }
    Ok(amount - principal)
}

/// Gains and after-tax value over a signed horizon, as `(gains, value)`.
pub(crate) fn taxed_growth(
    principal: f64,
    rate_pp: f64,
    years: i32,
    tax_pp: f64,
) -> Result<(f64, f64), ProjectionError> {
    let gains = grow(principal, rate_pp, years)?;
    if gains == 0.0 {
        return Ok((gains, principal));
    }
    let value = principal + gains * (1.0 - tax_pp / 100.0);
    if !value.is_finite() {
        return Err(ProjectionError::NumericOverflow { principal, rate_pp, years });
    }
    Ok((gains, value))
}
