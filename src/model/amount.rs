use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

/// Smallest indivisible unit count of a token (lamports for SOL).
pub type TokenAmount = u64;

/// How many decimal places are used for SOL amounts.
///
/// 1 SOL == 10.pow(SOL_DECIMAL_PLACES) lamports
pub const SOL_DECIMAL_PLACES: u8 = 9;

/// Highest decimal precision a mint can be created with.
pub const MAX_TOKEN_DECIMALS: u8 = 18;

/// Represents an amount of tokens, with optional unit name and decimal places.
///
/// The value is stored in base units (e.g. lamports for SOL) so that no
/// floating-point arithmetic is involved when converting user input into
/// on-chain amounts.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Amount {
    value: TokenAmount,
    decimal_places: u8,
    unit_name: Option<String>,
}

impl Display for Amount {
    /// Formats the amount as a user-friendly string with optional unit name.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let amount_str = self.to_string_without_unit();

        match &self.unit_name {
            Some(unit) => write!(f, "{} {}", amount_str, unit),
            None => write!(f, "{}", amount_str),
        }
    }
}

impl Debug for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Amount")
            .field("value", &self.value)
            .field("decimal_places", &self.decimal_places)
            .field("unit_name", &self.unit_name)
            .field("formatted", &self.to_string_without_unit())
            .finish()
    }
}

impl Amount {
    /// Creates a new Amount.
    pub const fn new(value: TokenAmount, decimal_places: u8) -> Self {
        Self {
            value,
            decimal_places,
            unit_name: None,
        }
    }

    /// Creates a new Amount with a unit name.
    pub fn new_with_unit(value: TokenAmount, decimal_places: u8, unit_name: &str) -> Self {
        Self {
            value,
            decimal_places,
            unit_name: Some(unit_name.to_string()),
        }
    }

    /// Creates a new Amount from a string input with specified decimal places.
    /// If the input string contains a unit suffix (e.g., "1.5 SOL"), the unit name
    /// will be preserved.
    pub fn parse_with_decimals(input: &str, decimal_places: u8) -> Result<Self, String> {
        let (value, unit_name) = Self::parse_amount_string_with_unit(input, decimal_places)?;
        match unit_name {
            Some(unit) => Ok(Self::new_with_unit(value, decimal_places, &unit)),
            None => Ok(Self::new(value, decimal_places)),
        }
    }

    /// Parses a string amount into base units.
    /// Returns a tuple of (value, optional_unit_name).
    fn parse_amount_string_with_unit(
        input: &str,
        decimal_places: u8,
    ) -> Result<(u64, Option<String>), String> {
        let input = input.trim();
        if input.is_empty() {
            return Err("Invalid amount: cannot be empty".to_string());
        }

        let mut parts = input.split_whitespace();
        let numeric_part = parts.next().unwrap_or(input);
        let rest: Vec<&str> = parts.collect();
        let unit_name = if rest.is_empty() {
            None
        } else {
            Some(rest.join(" "))
        };

        let value = Self::parse_numeric_part(numeric_part, decimal_places)?;
        Ok((value, unit_name))
    }

    #[cfg(test)]
    fn parse_amount_string(input: &str, decimal_places: u8) -> Result<u64, String> {
        let (value, _) = Self::parse_amount_string_with_unit(input, decimal_places)?;
        Ok(value)
    }

    fn parse_numeric_part(numeric_part: &str, decimal_places: u8) -> Result<u64, String> {
        if decimal_places == 0 {
            return numeric_part
                .parse::<u64>()
                .map_err(|e| format!("Invalid amount: {}", e));
        }

        let multiplier = 10u64
            .checked_pow(decimal_places as u32)
            .ok_or_else(|| "Too many decimal places".to_string())?;

        match numeric_part.split_once('.') {
            None => {
                let whole = numeric_part
                    .parse::<u64>()
                    .map_err(|_| "Invalid amount: must be a number".to_string())?;
                whole
                    .checked_mul(multiplier)
                    .ok_or_else(|| "Amount too large".to_string())
            }
            Some((_, fraction_str)) if fraction_str.contains('.') => {
                Err("Invalid amount: too many decimal points".to_string())
            }
            Some((whole_str, fraction_str)) => {
                let whole = if whole_str.is_empty() {
                    0
                } else {
                    whole_str
                        .parse::<u64>()
                        .map_err(|_| "Invalid amount: whole part must be a number".to_string())?
                };

                if fraction_str.len() > decimal_places as usize {
                    return Err(format!(
                        "Too many decimal places. Maximum allowed: {}",
                        decimal_places
                    ));
                }
                if !fraction_str.chars().all(|c| c.is_ascii_digit()) {
                    return Err("Invalid amount: decimal part must be a number".to_string());
                }

                let padded_fraction =
                    format!("{:0<width$}", fraction_str, width = decimal_places as usize);
                let fraction = padded_fraction
                    .parse::<u64>()
                    .map_err(|_| "Invalid amount: decimal part must be a number".to_string())?;

                whole
                    .checked_mul(multiplier)
                    .and_then(|whole_part| whole_part.checked_add(fraction))
                    .ok_or_else(|| "Amount too large".to_string())
            }
        }
    }

    /// Formats an amount as a user-friendly string, trimming trailing zeros.
    pub fn format_amount(amount: u64, decimal_places: u8) -> String {
        if decimal_places == 0 {
            return amount.to_string();
        }

        let divisor = 10u128.pow(decimal_places as u32);
        let whole = amount as u128 / divisor;
        let fraction = amount as u128 % divisor;

        if fraction == 0 {
            whole.to_string()
        } else {
            let fraction_str = format!("{:0width$}", fraction, width = decimal_places as usize);
            let trimmed = fraction_str.trim_end_matches('0');
            format!("{}.{}", whole, trimmed)
        }
    }

    /// Formats the amount with exactly `places` fractional digits, rounding half up.
    ///
    /// `Amount::new(2_500_000_000, 9).to_fixed_string(4)` yields `"2.5000"`.
    pub fn to_fixed_string(&self, places: u8) -> String {
        let value = self.value as u128;
        let decimals = self.decimal_places as u32;
        let places_u32 = places as u32;

        let scaled = if places_u32 >= decimals {
            value * 10u128.pow(places_u32 - decimals)
        } else {
            let factor = 10u128.pow(decimals - places_u32);
            let quotient = value / factor;
            if (value % factor) * 2 >= factor {
                quotient + 1
            } else {
                quotient
            }
        };

        if places == 0 {
            return scaled.to_string();
        }

        let divisor = 10u128.pow(places_u32);
        format!(
            "{}.{:0width$}",
            scaled / divisor,
            scaled % divisor,
            width = places as usize
        )
    }

    /// Returns the value in base units.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Returns the unit name if set.
    pub fn unit_name(&self) -> Option<&str> {
        self.unit_name.as_deref()
    }

    /// Sets the unit name.
    pub fn with_unit_name(mut self, unit_name: &str) -> Self {
        self.unit_name = Some(unit_name.to_string());
        self
    }

    /// Returns the numeric string representation without the unit name.
    pub fn to_string_without_unit(&self) -> String {
        Self::format_amount(self.value, self.decimal_places)
    }
}

/// SOL-specific amount handling
impl Amount {
    /// Creates a new [Amount] representing the given number of lamports.
    pub fn sol_from_lamports(lamports: u64) -> Self {
        Self::new_with_unit(lamports, SOL_DECIMAL_PLACES, "SOL")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_amount_formatting() {
        assert_eq!(Amount::format_amount(100, 0), "100");

        assert_eq!(Amount::format_amount(12345, 2), "123.45");
        assert_eq!(Amount::format_amount(12300, 2), "123");
        assert_eq!(Amount::format_amount(12340, 2), "123.4");

        assert_eq!(Amount::format_amount(1_000_000_000, 9), "1");
        assert_eq!(Amount::format_amount(1_500_000_000, 9), "1.5");
        assert_eq!(Amount::format_amount(123_456_789, 9), "0.123456789");

        // 18 decimals does not overflow the intermediate arithmetic
        assert_eq!(Amount::format_amount(u64::MAX, 18), "18.446744073709551615");
    }

    #[test]
    fn test_token_amount_parsing() {
        assert_eq!(Amount::parse_amount_string("100", 0).unwrap(), 100);

        assert_eq!(Amount::parse_amount_string("123.45", 2).unwrap(), 12345);
        assert_eq!(Amount::parse_amount_string("123", 2).unwrap(), 12300);
        assert_eq!(Amount::parse_amount_string(".5", 2).unwrap(), 50);

        assert_eq!(Amount::parse_amount_string("3", 9).unwrap(), 3_000_000_000);
        assert_eq!(
            Amount::parse_amount_string("1.5 SOL", 9).unwrap(),
            1_500_000_000
        );
        assert_eq!(Amount::parse_amount_string("50 TOKEN", 0).unwrap(), 50);
    }

    #[test]
    fn test_token_amount_parsing_errors() {
        assert!(Amount::parse_amount_string("", 2).is_err());
        assert!(Amount::parse_amount_string("abc", 2).is_err());
        assert!(Amount::parse_amount_string("1.2.3", 2).is_err());
        assert!(Amount::parse_amount_string("1.234", 2).is_err());
        assert!(Amount::parse_amount_string("1.-4", 2).is_err());
        assert!(Amount::parse_amount_string("-1", 2).is_err());
        // 19 whole tokens at 18 decimals exceed u64
        assert_eq!(
            Amount::parse_amount_string("19", 18).unwrap_err(),
            "Amount too large"
        );
    }

    #[test]
    fn test_parse_with_decimals_keeps_unit() {
        let amount = Amount::parse_with_decimals("2.25 USDC", 6).unwrap();
        assert_eq!(amount.value(), 2_250_000);
        assert_eq!(amount.unit_name(), Some("USDC"));
        assert_eq!(amount.to_string(), "2.25 USDC");
    }

    #[test]
    fn test_fixed_formatting() {
        assert_eq!(Amount::new(2_500_000_000, 9).to_fixed_string(4), "2.5000");
        assert_eq!(Amount::new(0, 9).to_fixed_string(4), "0.0000");
        assert_eq!(Amount::new(1_234_550_000, 9).to_fixed_string(4), "1.2346");
        assert_eq!(Amount::new(1_234_549_999, 9).to_fixed_string(4), "1.2345");
        assert_eq!(Amount::new(999_960_000, 9).to_fixed_string(4), "1.0000");
        assert_eq!(Amount::new(15, 1).to_fixed_string(4), "1.5000");
        assert_eq!(Amount::new(7, 0).to_fixed_string(0), "7");
    }

    #[test]
    fn test_sol_amounts() {
        assert_eq!(
            10u64.pow(SOL_DECIMAL_PLACES as u32),
            solana_sdk::native_token::LAMPORTS_PER_SOL
        );

        let amount = Amount::sol_from_lamports(2_500_000_000);
        assert_eq!(amount.to_string(), "2.5 SOL");
        assert_eq!(amount.value(), 2_500_000_000);
        assert_eq!(amount.to_fixed_string(4), "2.5000");
    }
}
