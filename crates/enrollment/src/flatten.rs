use std::collections::HashMap;

use model::{individual::Individual, registration::GroupRecord, statistics::CategoryCount};

/// Expands every record into one [`Individual`] per name position, keeping
/// record order and then position order. A missing name at a position
/// becomes an empty string; records without names contribute nothing.
pub fn flatten(groups: &[GroupRecord]) -> Vec<Individual> {
    groups
        .iter()
        .flat_map(|group| {
            (0..group.individual_count()).map(move |index| Individual {
                id: format!("{}-{}", group.id, index),
                first_name: group.first_name(index).to_owned(),
                last_name: group.last_name(index).to_owned(),
                training_type: group.training_type.clone(),
                location: group.location.clone(),
                ages: group.ages.clone(),
                gender: group.gender,
                payment_status: group.payment_status,
                created_at: group.created_at,
            })
        })
        .collect()
}

/// Tallies items by the label `key` returns. Labels are compared exactly and
/// reported in the order they were first seen.
pub fn count_by<T, F, S>(items: &[T], mut key: F) -> Vec<CategoryCount>
where
    F: FnMut(&T) -> S,
    S: AsRef<str>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();
    for item in items {
        let label = key(item);
        let label = label.as_ref();
        match index.get(label) {
            Some(position) => counts[*position].count += 1,
            None => {
                index.insert(label.to_owned(), counts.len());
                counts.push(CategoryCount::new(label, 1));
            }
        }
    }
    counts
}
