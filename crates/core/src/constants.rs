use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for monetary amounts (cents)
pub const MONEY_DECIMAL_PRECISION: u32 = 2;

/// Largest accepted gift, the ceiling of a `decimal(10,2)` column
pub const MAX_GIFT_AMOUNT: Decimal = dec!(99999999.99);

/// Currency symbol used when formatting amounts for display
pub const CURRENCY_SYMBOL: &str = "$";

/// Display name substituted for donors who asked not to be named
pub const ANONYMOUS_DONOR_NAME: &str = "Anonymous";

/// A first-time donor stays "new" for this many days after their gift
pub const DEFAULT_NEW_DONOR_DAYS: i64 = 30;

/// Donors with no gift for longer than this many days are "lapsed"
pub const DEFAULT_LAPSED_DONOR_DAYS: i64 = 60;

/// Funds seeded for every new organization, in display order.
/// Only the first `DEFAULT_ENABLED_FUND_COUNT` start enabled.
pub const DEFAULT_FUND_NAMES: [&str; 4] =
    ["General Fund", "Building Fund", "Youth Ministry", "Outreach"];

pub const DEFAULT_ENABLED_FUND_COUNT: usize = 3;
