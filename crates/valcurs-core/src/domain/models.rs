use std::collections::btree_map;
use std::collections::{BTreeMap, HashSet};
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::CurrencyId;

/// Rate and display name for one currency, kept exactly as the feed wrote them.
///
/// Serializes as the two-element array `[rate, name]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct RateEntry {
    pub rate: String,
    pub name: String,
}

impl RateEntry {
    pub fn new(rate: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            rate: rate.into(),
            name: name.into(),
        }
    }
}

impl From<(String, String)> for RateEntry {
    fn from((rate, name): (String, String)) -> Self {
        Self { rate, name }
    }
}

impl From<RateEntry> for (String, String) {
    fn from(value: RateEntry) -> Self {
        (value.rate, value.name)
    }
}

/// One `<Valute>` entry of the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyRecord {
    pub id: CurrencyId,
    /// Decimal-comma numeral as text, e.g. `"75,1234"`.
    pub rate: String,
    pub name: String,
}

impl CurrencyRecord {
    pub fn new(id: CurrencyId, rate: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            rate: rate.into(),
            name: name.into(),
        }
    }
}

/// Fully parsed feed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSnapshot {
    /// `Date` attribute of the root element (`dd.mm.yyyy`), when present.
    pub date: Option<String>,
    /// `name` attribute of the root element, when present.
    pub name: Option<String>,
    pub records: Vec<CurrencyRecord>,
}

impl FeedSnapshot {
    /// Keep only the records whose id was requested.
    pub fn select(self, ids: &[CurrencyId]) -> CurrencyResult {
        let wanted = ids.iter().collect::<HashSet<_>>();
        self.records
            .into_iter()
            .filter(|record| wanted.contains(&record.id))
            .collect()
    }
}

/// Mapping from identifier to `(rate, name)` produced by one fetch.
///
/// Backed by a `BTreeMap`, so iteration is in ascending identifier order and
/// equality ignores insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyResult(BTreeMap<CurrencyId, RateEntry>);

impl CurrencyResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: CurrencyId, entry: RateEntry) -> Option<RateEntry> {
        self.0.insert(id, entry)
    }

    pub fn get(&self, id: &CurrencyId) -> Option<&RateEntry> {
        self.0.get(id)
    }

    pub fn contains(&self, id: &CurrencyId) -> bool {
        self.0.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &CurrencyId> {
        self.0.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, CurrencyId, RateEntry> {
        self.0.iter()
    }
}

impl FromIterator<CurrencyRecord> for CurrencyResult {
    fn from_iter<T: IntoIterator<Item = CurrencyRecord>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|record| (record.id, RateEntry::new(record.rate, record.name)))
                .collect(),
        )
    }
}

impl FromIterator<(CurrencyId, RateEntry)> for CurrencyResult {
    fn from_iter<T: IntoIterator<Item = (CurrencyId, RateEntry)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CurrencyResult {
    type Item = (&'a CurrencyId, &'a RateEntry);
    type IntoIter = btree_map::Iter<'a, CurrencyId, RateEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for CurrencyResult {
    type Item = (CurrencyId, RateEntry);
    type IntoIter = btree_map::IntoIter<CurrencyId, RateEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Display for CurrencyResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (index, (id, entry)) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}: ({:?}, {:?})", id.as_str(), entry.rate, entry.name)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> CurrencyId {
        CurrencyId::parse(raw).expect("valid id")
    }

    fn snapshot() -> FeedSnapshot {
        FeedSnapshot {
            date: Some(String::from("01.01.2025")),
            name: Some(String::from("Foreign Currency Market")),
            records: vec![
                CurrencyRecord::new(id("R01239"), "105,0464", "Евро"),
                CurrencyRecord::new(id("R01235"), "101,9146", "Доллар США"),
                CurrencyRecord::new(id("R01375"), "13,9776", "Китайский юань"),
            ],
        }
    }

    #[test]
    fn select_keeps_only_requested_ids_present_in_feed() {
        let result = snapshot().select(&[id("R01235"), id("R99999"), id("R01239")]);

        assert_eq!(result.len(), 2);
        assert!(result.contains(&id("R01235")));
        assert!(result.contains(&id("R01239")));
        assert!(!result.contains(&id("R99999")));
    }

    #[test]
    fn select_with_no_ids_is_empty() {
        assert!(snapshot().select(&[]).is_empty());
    }

    #[test]
    fn duplicate_requests_collapse_into_one_entry() {
        let result = snapshot().select(&[id("R01239"), id("R01239")]);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn rate_text_is_kept_verbatim() {
        let result = snapshot().select(&[id("R01375")]);
        let entry = result.get(&id("R01375")).expect("entry present");
        assert_eq!(entry.rate, "13,9776");
        assert_eq!(entry.name, "Китайский юань");
    }

    #[test]
    fn entries_serialize_as_rate_name_pairs() {
        let result = snapshot().select(&[id("R01239")]);
        let value = serde_json::to_value(&result).expect("serializable");
        assert_eq!(value, serde_json::json!({ "R01239": ["105,0464", "Евро"] }));
    }

    #[test]
    fn display_lists_entries_in_id_order() {
        let result = snapshot().select(&[id("R01239"), id("R01235")]);
        assert_eq!(
            result.to_string(),
            r#"{"R01235": ("101,9146", "Доллар США"), "R01239": ("105,0464", "Евро")}"#
        );
    }
}
