//! Living-cost calculator. All amounts are stored in KRW.

use kku_core::error::GatewayError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Fixed conversion rate; there is no live exchange-rate feed.
pub const KRW_PER_USD: u64 = 1300;

/// Months a semester's living costs are counted for.
pub const SEMESTER_MONTHS: u64 = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Krw,
    Usd,
}

impl Currency {
    /// The currency a converter shows results in.
    pub fn other(self) -> Self {
        match self {
            Self::Krw => Self::Usd,
            Self::Usd => Self::Krw,
        }
    }
}

impl FromStr for Currency {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "KRW" => Ok(Self::Krw),
            "USD" => Ok(Self::Usd),
            other => Err(GatewayError::InvalidInput(format!("unknown currency: {other}"))),
        }
    }
}

/// Calculator inputs: tuition per semester, the rest per month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostEstimate {
    pub tuition: u64,
    pub housing: u64,
    pub food: u64,
    pub transport: u64,
    pub books: u64,
    pub misc: u64,
}

impl Default for CostEstimate {
    fn default() -> Self {
        Self {
            tuition: 3_000_000,
            housing: 400_000,
            food: 300_000,
            transport: 100_000,
            books: 150_000,
            misc: 200_000,
        }
    }
}

/// One calculator line with its share of the monthly total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownLine {
    pub key: &'static str,
    pub amount: u64,
    pub percentage: f64,
}

impl CostEstimate {
    /// Sum of all six inputs. Totals saturate at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.tuition.saturating_add(self.monthly_total())
    }

    /// Living costs per month, tuition excluded.
    pub fn monthly_total(&self) -> u64 {
        [self.housing, self.food, self.transport, self.books, self.misc]
            .into_iter()
            .fold(0, u64::saturating_add)
    }

    /// Six months of living costs plus one semester's tuition.
    pub fn semester_total(&self) -> u64 {
        self.monthly_total()
            .saturating_mul(SEMESTER_MONTHS)
            .saturating_add(self.tuition)
    }

    /// Monthly lines with their percentage of [`monthly_total`](Self::monthly_total).
    pub fn breakdown(&self) -> Vec<BreakdownLine> {
        let monthly = self.monthly_total();
        [
            ("housing", self.housing),
            ("food", self.food),
            ("transport", self.transport),
            ("books", self.books),
            ("misc", self.misc),
        ]
        .into_iter()
        .map(|(key, amount)| BreakdownLine {
            key,
            amount,
            percentage: if monthly == 0 {
                0.0
            } else {
                amount as f64 / monthly as f64 * 100.0
            },
        })
        .collect()
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `₩1,234,567` or `$949.67` for a KRW amount.
pub fn format(krw: u64, currency: Currency) -> String {
    match currency {
        Currency::Krw => format!("₩{}", group_thousands(krw)),
        Currency::Usd => format!("${:.2}", krw as f64 / KRW_PER_USD as f64),
    }
}

/// Value shown in an input field: KRW as-is, USD rounded to whole dollars.
pub fn to_display(krw: u64, currency: Currency) -> u64 {
    match currency {
        Currency::Krw => krw,
        Currency::Usd => (krw as f64 / KRW_PER_USD as f64).round() as u64,
    }
}

/// KRW amount for text typed into an input field.
///
/// Leading digits are parsed (`"12abc"` is 12); anything unparsable is 0.
pub fn from_display(input: &str, currency: Currency) -> u64 {
    let trimmed = input.trim_start();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    let value = digits.parse::<u64>().unwrap_or(0);
    match currency {
        Currency::Krw => value,
        Currency::Usd => value.saturating_mul(KRW_PER_USD),
    }
}

/// One run of the USD/KRW converter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub from: Currency,
    pub to: Currency,
    /// The input as understood, in `from` units.
    pub amount: u64,
    pub krw: u64,
    /// The result in whole `to` units.
    pub converted: u64,
    pub formatted: String,
}

/// Convert typed input in `from` to the other currency at [`KRW_PER_USD`].
pub fn convert(input: &str, from: Currency) -> Conversion {
    let krw = from_display(input, from);
    let to = from.other();
    Conversion {
        from,
        to,
        amount: to_display(krw, from),
        krw,
        converted: to_display(krw, to),
        formatted: format(krw, to),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_totals() {
        let est = CostEstimate::default();
        assert_eq!(est.monthly_total(), 1_150_000);
        assert_eq!(est.total(), 4_150_000);
        assert_eq!(est.semester_total(), 1_150_000 * 6 + 3_000_000);
    }

    #[test]
    fn test_huge_inputs_saturate() {
        let est = CostEstimate {
            housing: u64::MAX,
            food: 1,
            ..CostEstimate::default()
        };
        assert_eq!(est.monthly_total(), u64::MAX);
        assert_eq!(est.total(), u64::MAX);
        assert_eq!(est.semester_total(), u64::MAX);

        let est = CostEstimate {
            tuition: 0,
            housing: u64::MAX / 4,
            food: 0,
            transport: 0,
            books: 0,
            misc: 0,
        };
        assert_eq!(est.semester_total(), u64::MAX);
    }

    #[test]
    fn test_breakdown_sums_to_hundred() {
        let lines = CostEstimate::default().breakdown();
        let sum: f64 = lines.iter().map(|l| l.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert_eq!(lines[0].key, "housing");
    }

    #[test]
    fn test_breakdown_of_zero_month_is_zero() {
        let est = CostEstimate {
            tuition: 1,
            housing: 0,
            food: 0,
            transport: 0,
            books: 0,
            misc: 0,
        };
        assert!(est.breakdown().iter().all(|l| l.percentage == 0.0));
    }

    #[test]
    fn test_format() {
        assert_eq!(format(1_234_567, Currency::Krw), "₩1,234,567");
        assert_eq!(format(999, Currency::Krw), "₩999");
        assert_eq!(format(0, Currency::Krw), "₩0");
        assert_eq!(format(1_234_567, Currency::Usd), "$949.67");
    }

    #[test]
    fn test_display_conversions() {
        assert_eq!(to_display(400_000, Currency::Usd), 308);
        assert_eq!(to_display(400_000, Currency::Krw), 400_000);
        assert_eq!(from_display("500", Currency::Usd), 650_000);
        assert_eq!(from_display("12abc", Currency::Krw), 12);
        assert_eq!(from_display("abc", Currency::Krw), 0);
        assert_eq!(from_display("", Currency::Usd), 0);
    }

    #[test]
    fn test_convert_both_directions() {
        let usd = convert("100", Currency::Usd);
        assert_eq!(usd.to, Currency::Krw);
        assert_eq!(usd.krw, 130_000);
        assert_eq!(usd.converted, 130_000);
        assert_eq!(usd.formatted, "₩130,000");

        let krw = convert("100000", Currency::Krw);
        assert_eq!(krw.to, Currency::Usd);
        assert_eq!(krw.amount, 100_000);
        assert_eq!(krw.converted, 77);
        assert_eq!(krw.formatted, "$76.92");

        assert_eq!(convert("abc", Currency::Usd).formatted, "₩0");
    }

    #[test]
    fn test_currency_parse_and_serde() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert!("EUR".parse::<Currency>().is_err());
        assert_eq!(serde_json::to_string(&Currency::Krw).unwrap(), "\"KRW\"");
        let est: CostEstimate = serde_json::from_str(r#"{"housing": 500000}"#).unwrap();
        assert_eq!(est.housing, 500_000);
        assert_eq!(est.tuition, 3_000_000);
    }
}
