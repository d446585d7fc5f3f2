use std::{collections::BTreeSet, convert::Infallible, str::FromStr};

use model::{decimal::Decimal, registration::GroupRecord};

const ALL_LOCATIONS: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocationFilter {
    #[default]
    All,
    /// Exact location name.
    Named(String),
}

impl LocationFilter {
    pub fn matches(&self, group: &GroupRecord) -> bool {
        match self {
            LocationFilter::All => true,
            LocationFilter::Named(name) => group.location_name() == Some(name.as_str()),
        }
    }
}

impl FromStr for LocationFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == ALL_LOCATIONS {
            LocationFilter::All
        } else {
            LocationFilter::Named(s.to_owned())
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RosterQuery {
    pub search: String,
    pub location: LocationFilter,
}

impl RosterQuery {
    pub fn new(search: impl Into<String>, location: LocationFilter) -> Self {
        RosterQuery {
            search: search.into(),
            location,
        }
    }

    /// The search term is looked up, ignoring case, in the joined first
    /// names, the joined last names and the contact phone.
    pub fn matches(&self, group: &GroupRecord) -> bool {
        self.matches_search(group) && self.location.matches(group)
    }

    fn matches_search(&self, group: &GroupRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        group.first_names.join(" ").to_lowercase().contains(&term)
            || group.last_names.join(" ").to_lowercase().contains(&term)
            || group.contact_phone.to_lowercase().contains(&term)
    }
}

/// Records matching `query`, in their original order.
pub fn filter<'a, I>(groups: I, query: &RosterQuery) -> Vec<&'a GroupRecord>
where
    I: IntoIterator<Item = &'a GroupRecord>,
{
    groups
        .into_iter()
        .filter(|group| query.matches(group))
        .collect()
}

/// Sum of the payment amounts of paid records.
pub fn total_paid<'a, I>(groups: I) -> Decimal
where
    I: IntoIterator<Item = &'a GroupRecord>,
{
    groups
        .into_iter()
        .filter(|group| group.is_paid())
        .map(|group| group.payment_amount)
        .sum()
}

/// Distinct location names, sorted, for the location selector.
pub fn locations(groups: &[GroupRecord]) -> Vec<String> {
    groups
        .iter()
        .filter_map(GroupRecord::location_name)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// One line of the roster table.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterRow<'a> {
    /// 1-based position of the record in the table.
    pub number: usize,
    /// Position inside the record. Record level cells are only drawn for 0.
    pub index: usize,
    pub name: String,
    pub share: Decimal,
    pub group: &'a GroupRecord,
}

impl RosterRow<'_> {
    pub fn is_first(&self) -> bool {
        self.index == 0
    }
}

pub fn rows<'a, I>(groups: I) -> Vec<RosterRow<'a>>
where
    I: IntoIterator<Item = &'a GroupRecord>,
{
    groups
        .into_iter()
        .enumerate()
        .flat_map(|(position, group)| {
            (0..group.individual_count()).map(move |index| RosterRow {
                number: position + 1,
                index,
                name: short_name(group.first_name(index), group.last_name(index)),
                share: group.payment_share(index),
                group,
            })
        })
        .collect()
}

/// `Dorj`, `Anu` -> `D. Anu`
fn short_name(first_name: &str, last_name: &str) -> String {
    match last_name.chars().next() {
        Some(initial) => format!("{}. {}", initial, first_name),
        None => first_name.to_owned(),
    }
}
