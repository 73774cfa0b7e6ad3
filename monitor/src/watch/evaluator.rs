use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EvalError {
    #[error("previous close is zero")]
    ZeroPreviousClose,

    #[error("non-finite price input")]
    NonFinitePrice,
}

/// Period-over-period percentage change of `current_price` against
/// `previous_close`.
///
/// Degenerate inputs (zero previous close, NaN/infinite prices) are an
/// evaluation error for the symbol, never a panic.
pub fn percentage_change(previous_close: f64, current_price: f64) -> Result<f64, EvalError> {
    if !previous_close.is_finite() || !current_price.is_finite() {
        return Err(EvalError::NonFinitePrice);
    }
    if previous_close == 0.0 {
        return Err(EvalError::ZeroPreviousClose);
    }

    Ok(((current_price - previous_close) / previous_close) * 100.0)
}
