//! Ordinary-annuity math used by the goal planner
//!
//! All payments are assumed to occur at the end of each period, with zero
//! present value. The zero-rate case is branched explicitly rather than
//! relying on limits.

/// Future value of an ordinary annuity after `periods` end-of-period payments
/// of `payment` at periodic rate `rate`.
///
/// For `rate == 0` this degenerates to `payment * periods`.
pub fn fv_ordinary_annuity(payment: f64, rate: f64, periods: u32) -> f64 {
    if rate == 0.0 {
        return payment * periods as f64;
    }

    payment * (((1.0 + rate).powi(periods as i32) - 1.0) / rate)
}

/// Periodic end-of-period payment required to accumulate `future_value` over
/// `periods` periods at periodic rate `rate`, starting from zero.
///
/// Inverse of [`fv_ordinary_annuity`] in the payment argument.
pub fn pmt_for_future_value(future_value: f64, rate: f64, periods: u32) -> f64 {
    if rate == 0.0 {
        return future_value / periods as f64;
    }

    future_value * rate / ((1.0 + rate).powi(periods as i32) - 1.0)
}
