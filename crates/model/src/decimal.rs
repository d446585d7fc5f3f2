use std::{
    fmt::{Debug, Display},
    iter::Sum,
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const DECIMALS: u8 = 2;

/// Fixed point amount with two fractional digits.
///
/// The registration API sends amounts as plain JSON numbers, so the value is
/// read from and written to a float at the serde boundary and kept as an
/// integer number of hundredths everywhere else.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal(i64);

impl Decimal {
    pub fn int(value: i64) -> Decimal {
        Decimal(value * scale())
    }

    pub fn zero() -> Decimal {
        Decimal::int(0)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn inner(&self) -> i64 {
        self.0
    }

    /// Share `index` of the amount split into `parts`. Shares are truncated
    /// to hundredths and the first one also takes the remainder, so all
    /// shares add up to the amount. Zero parts or an index past the end
    /// yields zero.
    pub fn share(&self, parts: usize, index: usize) -> Decimal {
        if index >= parts {
            return Decimal::zero();
        }
        let share = self.0 / parts as i64;
        if index == 0 {
            Decimal(self.0 - share * (parts as i64 - 1))
        } else {
            Decimal(share)
        }
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / scale() as f64
    }
}

fn scale() -> i64 {
    10i64.pow(DECIMALS as u32)
}

impl Debug for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.as_f64())
    }
}

impl Display for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.as_f64())
    }
}

impl From<f64> for Decimal {
    fn from(value: f64) -> Self {
        Decimal((value * scale() as f64).round() as i64)
    }
}

impl From<u32> for Decimal {
    fn from(value: u32) -> Self {
        Decimal::int(value as i64)
    }
}

impl TryFrom<&str> for Decimal {
    type Error = ParseDecimalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let val = value.trim().parse::<f64>().map_err(|_| ParseDecimalError)?;
        if !val.is_finite() {
            return Err(ParseDecimalError);
        }
        Ok(Decimal::from(val))
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::try_from(s)
    }
}

impl std::ops::AddAssign for Decimal {
    fn add_assign(&mut self, other: Decimal) {
        self.0 += other.0;
    }
}

impl std::ops::Add for Decimal {
    type Output = Decimal;

    fn add(self, other: Decimal) -> Decimal {
        Decimal(self.0 + other.0)
    }
}

impl std::ops::Sub for Decimal {
    type Output = Decimal;

    fn sub(self, other: Decimal) -> Decimal {
        Decimal(self.0 - other.0)
    }
}

impl Sum for Decimal {
    fn sum<I: Iterator<Item = Decimal>>(iter: I) -> Decimal {
        iter.fold(Decimal::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Decimal> for Decimal {
    fn sum<I: Iterator<Item = &'a Decimal>>(iter: I) -> Decimal {
        iter.copied().sum()
    }
}

#[derive(Debug)]
pub struct ParseDecimalError;

impl std::fmt::Display for ParseDecimalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to parse decimal value")
    }
}

impl std::error::Error for ParseDecimalError {}

impl Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() {
            return Err(serde::de::Error::custom("amount is not a finite number"));
        }
        Ok(Decimal::from(value))
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!("123456.00", Decimal::int(123456).to_string());
        assert_eq!("-123456.00", Decimal::int(-123456).to_string());
        assert_eq!("0.00", Decimal::zero().to_string());
    }

    #[test]
    fn test_from_f64_rounds_to_cents() {
        assert_eq!("0.29", Decimal::from(0.29).to_string());
        assert_eq!("123456.78", Decimal::from(123456.78).to_string());
        assert_eq!("0.00", Decimal::from(0.001).to_string());
        assert_eq!("0.01", Decimal::from(0.006).to_string());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Decimal::int(1000), "1000".parse().unwrap());
        assert_eq!(Decimal::from(12.5), " 12.50 ".parse().unwrap());
        assert!("abc".parse::<Decimal>().is_err());
        assert!("inf".parse::<Decimal>().is_err());
    }

    #[test]
    fn test_share() {
        assert_eq!(Decimal::int(500), Decimal::int(1000).share(2, 0));
        assert_eq!(Decimal::int(500), Decimal::int(1000).share(2, 1));
        assert_eq!("333.34", Decimal::int(1000).share(3, 0).to_string());
        assert_eq!("333.33", Decimal::int(1000).share(3, 2).to_string());
        assert_eq!(Decimal::zero(), Decimal::int(1000).share(0, 0));
        assert_eq!(Decimal::zero(), Decimal::int(1000).share(3, 3));
    }

    #[test]
    fn test_sum() {
        let values = [Decimal::int(1000), Decimal::from(0.5), Decimal::from(-0.25)];
        assert_eq!("1000.25", values.iter().sum::<Decimal>().to_string());
        assert_eq!(Decimal::zero(), Vec::<Decimal>::new().into_iter().sum::<Decimal>());
    }

    #[test]
    fn test_serde_as_number() {
        let value: Decimal = serde_json::from_str("150000").unwrap();
        assert_eq!(Decimal::int(150000), value);
        let value: Decimal = serde_json::from_str("99.99").unwrap();
        assert_eq!("99.99", value.to_string());
        assert_eq!("12.5", serde_json::to_string(&Decimal::from(12.5)).unwrap());
        assert!(serde_json::from_str::<Decimal>("\"12\"").is_err());
    }
}
