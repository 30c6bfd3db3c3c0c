use std::fmt;
use std::str::FromStr;

/// Measurement unit for ingredient quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Grams,
    Millilitres,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Grams => "g",
            Unit::Millilitres => "ml",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = String;

    /// Parse a unit, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = s.trim();
        if unit.is_empty() {
            return Err("unit is empty".to_string());
        }
        match unit.to_lowercase().as_str() {
            "g" => Ok(Unit::Grams),
            "ml" => Ok(Unit::Millilitres),
            other => Err(format!("'{}' is not a valid unit (use g or ml)", other)),
        }
    }
}

/// A named quantity of an ingredient.
///
/// The same type describes both a stock record in the pantry and a
/// per-serving requirement of a dish.
#[derive(Debug, Clone)]
pub struct Ingredient {
    pub name: String,
    pub qty: u32,
    pub unit: Unit,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, qty: u32, unit: Unit) -> Self {
        Self {
            name: name.into(),
            qty,
            unit,
        }
    }

    /// Canonical key for lookups (trimmed, lowercase name).
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}{}", self.name, self.qty, self.unit)
    }
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key() && self.qty == other.qty && self.unit == other.unit
    }
}

impl Eq for Ingredient {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_parsing() {
        assert_eq!("g".parse::<Unit>().unwrap(), Unit::Grams);
        assert_eq!(" ML ".parse::<Unit>().unwrap(), Unit::Millilitres);
        assert!("kg".parse::<Unit>().is_err());
        assert!("".parse::<Unit>().is_err());
    }

    #[test]
    fn test_is_named_case_insensitive() {
        let rice = Ingredient::new("Rice", 100, Unit::Grams);
        assert!(rice.is_named("rice"));
        assert!(rice.is_named("  RICE "));
        assert!(!rice.is_named("Rice Flour"));
    }

    #[test]
    fn test_display() {
        let milk = Ingredient::new("Milk", 250, Unit::Millilitres);
        assert_eq!(milk.to_string(), "Milk - 250ml");
    }
}
