use rust_decimal::Decimal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Money {
    pub cents: i64,
    pub currency: String,
}

const fn minor_units(currency: &str) -> u32 {
    match currency.as_bytes() {
        b"JPY" | b"KRW" | b"ISK" => 0,
        _ => 2,
    }
}

fn symbol(currency: &str) -> Option<&'static str> {
    match currency {
        "EUR" => Some("€"),
        "USD" => Some("$"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

impl Money {
    pub fn new(cents: i64, currency: impl Into<String>) -> Self {
        let currency = currency.into().to_ascii_uppercase();
        Self { cents, currency }
    }

    pub fn amount(&self) -> Decimal {
        Decimal::new(self.cents, minor_units(&self.currency))
    }

    /// `None` when the product does not fit in cents.
    pub fn times(&self, quantity: i64) -> Option<Self> {
        let cents = self.cents.checked_mul(quantity)?;
        Some(Self {
            cents,
            currency: self.currency.clone(),
        })
    }

    /// Amount with thousands delimiters, without cents when the amount is whole.
    pub fn humanized(&self) -> String {
        let amount = self.amount();
        let amount = match amount.fract().is_zero() {
            true => amount.trunc(),
            false => amount,
        };
        let formatted = amount.abs().to_string();
        let (whole, fraction) = match formatted.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (formatted.as_str(), None),
        };

        let mut out = String::with_capacity(formatted.len() + whole.len() / 3 + 1);
        if amount.is_sign_negative() && !amount.is_zero() {
            out.push('-');
        }
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(digit);
        }
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }

    pub fn humanized_with_symbol(&self) -> String {
        let humanized = self.humanized();
        match symbol(&self.currency) {
            Some(symbol) => match humanized.strip_prefix('-') {
                Some(positive) => format!("-{symbol}{positive}"),
                None => format!("{symbol}{humanized}"),
            },
            None => format!("{humanized} {}", self.currency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Money;

    #[test]
    fn drops_cents_on_whole_amounts() {
        assert_eq!(Money::new(1200, "EUR").humanized_with_symbol(), "€12");
        assert_eq!(Money::new(1250, "usd").humanized_with_symbol(), "$12.50");
    }

    #[test]
    fn delimits_thousands() {
        assert_eq!(Money::new(123_456_789, "GBP").humanized_with_symbol(), "£1,234,567.89");
        assert_eq!(Money::new(100_000, "EUR").humanized(), "1,000");
    }

    #[test]
    fn zero_decimal_currencies() {
        assert_eq!(Money::new(5000, "JPY").humanized_with_symbol(), "¥5,000");
    }

    #[test]
    fn unknown_currencies_use_iso_code() {
        assert_eq!(Money::new(9905, "SEK").humanized_with_symbol(), "99.05 SEK");
    }

    #[test]
    fn negative_amounts_keep_the_sign_before_the_symbol() {
        assert_eq!(Money::new(-150, "EUR").humanized_with_symbol(), "-€1.50");
    }

    #[test]
    fn totals_multiply_unit_price() {
        let total = Money::new(1999, "EUR").times(3).unwrap();
        assert_eq!(total, Money::new(5997, "EUR"));
        assert_eq!(total.humanized_with_symbol(), "€59.97");
    }

    #[test]
    fn overflowing_totals_are_none() {
        assert_eq!(Money::new(i64::MAX, "EUR").times(2), None);
        assert_eq!(Money::new(i64::MIN, "EUR").times(-1), None);
    }
}
