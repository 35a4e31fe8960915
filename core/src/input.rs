use anyhow::{anyhow, Result};
use std::collections::BTreeSet;

use crate::model::criteria::FilterCriteria;

const MONTH_KEYS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    // 1. Exact match
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

/// Resolves one month token: a number 1-12 or a (prefix of a) month name.
pub fn parse_month_token(token: &str) -> Result<u32> {
    let token = token.trim().to_lowercase();
    if token.is_empty() {
        return Err(anyhow!("Empty month"));
    }
    if let Ok(n) = token.parse::<u32>() {
        return if (1..=12).contains(&n) {
            Ok(n)
        } else {
            Err(anyhow!("Month out of range: {}", n))
        };
    }
    let full = expand_key(&token, &MONTH_KEYS)?;
    let index = MONTH_KEYS
        .iter()
        .position(|m| *m == full)
        .ok_or_else(|| anyhow!("Unknown month: '{}'", token))?;
    Ok(index as u32 + 1)
}

/// Parses month selections such as `["1,2", "mar", "jun-aug"]`.
/// Ranges must run forward.
pub fn parse_months(args: &[String]) -> Result<BTreeSet<u32>> {
    let mut months = BTreeSet::new();
    for part in split_list(args) {
        if let Some((from, to)) = part.split_once('-') {
            let (from, to) = (parse_month_token(from)?, parse_month_token(to)?);
            if from > to {
                return Err(anyhow!("Month range runs backwards: '{}'", part));
            }
            months.extend(from..=to);
        } else {
            months.insert(parse_month_token(part)?);
        }
    }
    Ok(months)
}

pub fn parse_products(args: &[String]) -> BTreeSet<String> {
    split_list(args).map(str::to_string).collect()
}

pub fn parse_criteria(months: &[String], products: &[String]) -> Result<FilterCriteria> {
    Ok(FilterCriteria {
        selected_months: parse_months(months)?,
        selected_pizza_type_ids: parse_products(products),
    })
}

fn split_list(args: &[String]) -> impl Iterator<Item = &str> {
    args.iter()
        .flat_map(|a| a.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_expand_key() {
        let candidates = ["march", "may", "june", "july"];

        assert_eq!(expand_key("may", &candidates).unwrap(), "may");
        assert_eq!(expand_key("mar", &candidates).unwrap(), "march");
        assert_eq!(expand_key("jul", &candidates).unwrap(), "july");
        assert!(expand_key("ma", &candidates).is_err()); // march, may
        assert!(expand_key("x", &candidates).is_err());
    }

    #[test]
    fn test_parse_month_token() {
        assert_eq!(parse_month_token("3").unwrap(), 3);
        assert_eq!(parse_month_token("Mar").unwrap(), 3);
        assert_eq!(parse_month_token("SEPTEMBER").unwrap(), 9);
        assert_eq!(parse_month_token("se").unwrap(), 9);
        assert!(parse_month_token("ju").is_err()); // june, july
        assert!(parse_month_token("13").is_err());
        assert!(parse_month_token("0").is_err());
        assert!(parse_month_token("smarch").is_err());
    }

    #[test]
    fn test_parse_months_lists_and_ranges() {
        let months = parse_months(&strings(&["jan-mar", "7,12", "feb"])).unwrap();
        assert_eq!(months.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 7, 12]);
        assert!(parse_months(&strings(&["mar-jan"])).is_err());
        assert!(parse_months(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_parse_criteria() {
        let criteria = parse_criteria(
            &strings(&["1"]),
            &strings(&["bbq_ckn_l, hawaiian_m", "", "hawaiian_m"]),
        )
        .unwrap();
        assert_eq!(criteria.selected_months.len(), 1);
        assert_eq!(criteria.selected_pizza_type_ids.len(), 2);
        assert!(criteria.selected_pizza_type_ids.contains("bbq_ckn_l"));
    }
}
