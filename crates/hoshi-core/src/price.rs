//! # Price Module
//!
//! Provides the `Price` type for menu prices and the consumption-tax rule.
//!
//! ## Why Integer Yen?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  JPY has no minor unit, so every menu price is a whole number of yen.   │
//! │  We keep them as i64 and derive the tax-inclusive price with integer    │
//! │  math only. The printed menu shows both figures, so the derivation      │
//! │  must be exact and reproducible.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The One Rounding Rule
//! Tax-inclusive price = round(tax-exclusive × 1.1), **rounded half-up**.
//! This matches `Math.round` on the non-negative domain the menu uses and is
//! the single rounding policy in the codebase; no alternative mode exists.
//!
//! ## Usage
//! ```rust
//! use hoshi_core::price::{price_incl, Price};
//!
//! let steak = Price::from_yen(1200);
//! assert_eq!(price_incl(steak).yen(), 1320);
//! assert_eq!(steak.incl(), Price::from_yen(1320));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (Japanese standard consumption tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// The 10% standard consumption tax applied to every menu price.
    pub const STANDARD: TaxRate = TaxRate(1000);

    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::STANDARD
    }
}

// =============================================================================
// Price Type
// =============================================================================

/// A menu price in whole yen.
///
/// ## Design Decisions
/// - **i64**: plenty of headroom; champagne tops out at six figures
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support, serialized as a bare number
///
/// Prices in authored data are always tax-exclusive; the tax-inclusive
/// figure is derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Price(i64);

impl Price {
    /// Creates a Price from whole yen.
    #[inline]
    pub const fn from_yen(yen: i64) -> Self {
        Price(yen)
    }

    /// Returns the value in yen.
    #[inline]
    pub const fn yen(&self) -> i64 {
        self.0
    }

    /// Zero yen.
    #[inline]
    pub const fn zero() -> Self {
        Price(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    ///
    /// Authored prices must never be negative; see
    /// [`crate::validation::validate_price`].
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Derives the tax-inclusive price at the given rate, rounded half-up.
    ///
    /// ## Implementation
    /// Integer math over i128: `(yen × (10000 + bps) + 5000) / 10000`.
    /// The +5000 provides half-up rounding (5000/10000 = 0.5).
    ///
    /// ## Contract
    /// Defined for non-negative prices only. Negative input is a caller
    /// contract violation (authored data never contains one).
    ///
    /// ## Example
    /// ```rust
    /// use hoshi_core::price::{Price, TaxRate};
    ///
    /// let p = Price::from_yen(1200);
    /// assert_eq!(p.incl_at(TaxRate::STANDARD).yen(), 1320);
    /// ```
    pub fn incl_at(&self, rate: TaxRate) -> Price {
        debug_assert!(
            self.0 >= 0,
            "tax derivation is only defined for non-negative prices"
        );
        let incl = (self.0 as i128 * (10_000 + rate.bps() as i128) + 5_000) / 10_000;
        Price(incl as i64)
    }

    /// Derives the tax-inclusive price at the standard 10% rate.
    #[inline]
    pub fn incl(&self) -> Price {
        self.incl_at(TaxRate::STANDARD)
    }

    /// Recovers the tax-exclusive price from a tax-inclusive one,
    /// rounded half-up: `round(incl / 1.1)` at the standard rate.
    ///
    /// This is the inverse the legacy menu migration needs: the old display
    /// data stored only the tax-inclusive figure.
    pub fn excl_from_incl_at(incl: Price, rate: TaxRate) -> Price {
        debug_assert!(
            incl.0 >= 0,
            "tax derivation is only defined for non-negative prices"
        );
        // Half-up rounding of a/b as floor((2a + b) / 2b), all positive.
        let a = incl.0 as i128 * 10_000;
        let b = 10_000 + rate.bps() as i128;
        Price(((2 * a + b) / (2 * b)) as i64)
    }
}

/// Display implementation shows the price in menu format, e.g. `1,320円`.
///
/// ## Note
/// This is for logs and tests. The frontend formats prices itself.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}円", group_thousands(self.0))
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::zero()
    }
}

// =============================================================================
// Free Functions
// =============================================================================

/// Derives the tax-inclusive price at the standard 10% rate, rounded half-up.
///
/// ## Example
/// ```rust
/// use hoshi_core::price::{price_incl, Price};
///
/// assert_eq!(price_incl(Price::from_yen(500)).yen(), 550);
/// assert_eq!(price_incl(Price::from_yen(3000)).yen(), 3300);
/// ```
#[inline]
pub fn price_incl(excl: Price) -> Price {
    excl.incl()
}

/// Recovers the tax-exclusive price from a tax-inclusive one at the
/// standard rate. See [`Price::excl_from_incl_at`].
#[inline]
pub fn price_excl_from_incl(incl: Price) -> Price {
    Price::excl_from_incl_at(incl, TaxRate::STANDARD)
}

/// Groups a non-negative number with thousands separators: 1320 → "1,320".
fn group_thousands(yen: i64) -> String {
    let digits = yen.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if yen < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_invariant_on_menu_samples() {
        // incl = round(excl × 1.1) for the prices printed on the menu
        assert_eq!(price_incl(Price::from_yen(1200)).yen(), 1320);
        assert_eq!(price_incl(Price::from_yen(500)).yen(), 550);
        assert_eq!(price_incl(Price::from_yen(3000)).yen(), 3300);
        assert_eq!(price_incl(Price::from_yen(2400)).yen(), 2640);
        assert_eq!(price_incl(Price::from_yen(3600)).yen(), 3960);
        assert_eq!(price_incl(Price::from_yen(5400)).yen(), 5940);
        assert_eq!(price_incl(Price::from_yen(100_000)).yen(), 110_000);
    }

    #[test]
    fn rounding_is_half_up() {
        // 5 × 1.1 = 5.5 → 6, 15 × 1.1 = 16.5 → 17, 25 × 1.1 = 27.5 → 28
        // (same results as JS Math.round on these inputs)
        assert_eq!(price_incl(Price::from_yen(5)).yen(), 6);
        assert_eq!(price_incl(Price::from_yen(15)).yen(), 17);
        assert_eq!(price_incl(Price::from_yen(25)).yen(), 28);
    }

    #[test]
    fn zero_price_stays_zero() {
        assert_eq!(price_incl(Price::zero()), Price::zero());
        assert!(Price::zero().is_zero());
    }

    #[test]
    fn excl_recovered_from_incl() {
        // Every distinct display price from the legacy data set must map
        // back to a whole tax-exclusive figure.
        let pairs = [
            (1_320, 1_200),
            (1_518, 1_380),
            (1_628, 1_480),
            (550, 500),
            (330, 300),
            (242, 220),
            (308, 280),
            (385, 350),
            (594, 540),
            (605, 550),
            (638, 580),
            (660, 600),
            (748, 680),
            (770, 700),
            (858, 780),
            (968, 880),
            (1_078, 980),
            (1_188, 1_080),
            (1_210, 1_100),
            (1_265, 1_150),
            (1_375, 1_250),
            (1_408, 1_280),
            (1_485, 1_350),
            (1_650, 1_500),
            (1_738, 1_580),
            (1_980, 1_800),
            (3_300, 3_000),
            (3_960, 3_600),
            (4_950, 4_500),
            (5_940, 5_400),
            (7_425, 6_750),
            (8_910, 8_100),
            (11_000, 10_000),
            (16_500, 15_000),
            (55_000, 50_000),
            (110_000, 100_000),
        ];
        for (incl, excl) in pairs {
            assert_eq!(
                price_excl_from_incl(Price::from_yen(incl)).yen(),
                excl,
                "incl {incl} should derive excl {excl}"
            );
        }
    }

    #[test]
    fn excl_and_incl_derivations_agree() {
        for excl in [220, 300, 500, 780, 1_200, 1_500, 5_400, 100_000] {
            let incl = price_incl(Price::from_yen(excl));
            assert_eq!(price_excl_from_incl(incl).yen(), excl);
        }
    }

    #[test]
    fn display_groups_thousands() {
        assert_eq!(format!("{}", Price::from_yen(1_320)), "1,320円");
        assert_eq!(format!("{}", Price::from_yen(550)), "550円");
        assert_eq!(format!("{}", Price::from_yen(110_000)), "110,000円");
        assert_eq!(format!("{}", Price::from_yen(0)), "0円");
    }

    #[test]
    fn non_standard_rate_still_rounds_half_up() {
        // 8% on 231 yen = 249.48 → 249
        let rate = TaxRate::from_bps(800);
        assert_eq!(Price::from_yen(231).incl_at(rate).yen(), 249);
        // 8% on 225 yen = 243.0 exactly
        assert_eq!(Price::from_yen(225).incl_at(rate).yen(), 243);
    }
}
