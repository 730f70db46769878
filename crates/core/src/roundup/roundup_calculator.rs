use log::debug;
use rust_decimal::Decimal;

use super::roundup_model::{RoundUpConfig, RoundUpResult};
use crate::errors::{Error, Result};
use crate::utils::money::round_money;

/// Computes the amount to charge for a gift of `amount` under `config`.
///
/// An amount that is already a multiple of the rounding unit receives no
/// round-up. Arithmetic is exact; cents rounding (half away from zero)
/// happens once, on the outputs.
///
/// # Errors
/// * `InvalidAmount` if `amount <= 0`
/// * `InvalidConfiguration` if enabled with `round_to <= 0`, or with a
///   non-positive multiplier
/// * `InvalidAmount` or `InvalidConfiguration` when the result does not fit
///   in a `Decimal`
pub fn calculate_round_up(amount: Decimal, config: &RoundUpConfig) -> Result<RoundUpResult> {
    if amount <= Decimal::ZERO {
        return Err(Error::InvalidAmount(format!(
            "Gift amount must be greater than zero, got {}",
            amount
        )));
    }

    if !config.enabled {
        return Ok(RoundUpResult {
            final_amount: round_money(amount),
            round_up_amount: round_money(Decimal::ZERO),
            original_amount: round_money(amount),
        });
    }

    if config.round_to <= Decimal::ZERO {
        return Err(Error::InvalidConfiguration(format!(
            "Rounding unit must be greater than zero, got {}",
            config.round_to
        )));
    }
    let multiplier = config.effective_multiplier();
    if multiplier <= Decimal::ZERO {
        return Err(Error::InvalidConfiguration(format!(
            "Round-up multiplier must be greater than zero, got {}",
            multiplier
        )));
    }

    let remainder = amount
        .checked_rem(config.round_to)
        .ok_or_else(|| too_large(amount))?;
    let round_up_amount = if remainder.is_zero() {
        Decimal::ZERO
    } else {
        (config.round_to - remainder)
            .checked_mul(multiplier)
            .ok_or_else(|| {
                Error::InvalidConfiguration(format!(
                    "Round-up multiplier {} is too large",
                    multiplier
                ))
            })?
    };
    let final_amount = amount
        .checked_add(round_up_amount)
        .ok_or_else(|| too_large(amount))?;

    debug!(
        "Round-up of {} to nearest {} (x{}): adds {}",
        amount, config.round_to, multiplier, round_up_amount
    );

    Ok(RoundUpResult {
        final_amount: round_money(final_amount),
        round_up_amount: round_money(round_up_amount),
        original_amount: round_money(amount),
    })
}

fn too_large(amount: Decimal) -> Error {
    Error::InvalidAmount(format!("Gift amount {} is too large to round up", amount))
}
