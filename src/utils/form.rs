// Helpers serde pour les formulaires HTML (application/x-www-form-urlencoded)

use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Un champ numérique vide ou illisible devient None
/// La validation `required` signale ensuite le champ comme obligatoire
pub fn lenient_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().map(str::trim).and_then(|s| s.parse::<T>().ok()))
}

/// Comme `lenient_number`, mais NaN et les infinis deviennent aussi None
pub fn lenient_float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<f64> = lenient_number(deserializer)?;
    Ok(value.filter(|v| v.is_finite()))
}

/// Affichage d'un nombre optionnel dans un champ input
pub fn display_number<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
