use model::{
    individual::Individual,
    locale::UNSPECIFIED,
    statistics::{CategoryCount, EnrollmentStats},
};

use crate::flatten::count_by;

/// Recomputes all category tallies from scratch.
pub fn collect(individuals: &[Individual]) -> EnrollmentStats {
    EnrollmentStats {
        by_location: count_by(individuals, |i| {
            label_of(i.location.as_ref().map(|location| location.name.as_str()))
        }),
        by_gender: count_by(individuals, |i| label_of(i.gender.as_ref().map(AsRef::<str>::as_ref))),
        by_age: count_by(individuals, |i| label_of(Some(i.ages.as_str()))),
        by_training_type: count_by(individuals, |i| {
            label_of(i.training_type.as_ref().map(|training| training.name.as_str()))
        }),
    }
}

/// Missing and empty values are counted under [`UNSPECIFIED`].
fn label_of(value: Option<&str>) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_owned(),
        _ => UNSPECIFIED.to_owned(),
    }
}

/// Largest categories first; equal counts keep their original order.
pub fn sorted_by_count(counts: &[CategoryCount]) -> Vec<CategoryCount> {
    let mut sorted = counts.to_vec();
    sorted.sort_by(|a, b| b.count.cmp(&a.count));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::flatten;
    use model::registration::GroupRecord;
    use serde_json::json;

    fn individuals() -> Vec<Individual> {
        let groups: Vec<GroupRecord> = serde_json::from_value(json!([
            {
                "_id": "g1",
                "trainingType": {"_id": "t1", "name": "Robotics"},
                "location": {"_id": "l1", "name": "Дархан"},
                "ages": "8-10",
                "gender": "male",
                "firstNames": ["A", "B"],
                "lastNames": ["X", "Y"]
            },
            {
                "_id": "g2",
                "trainingType": {"_id": "t2", "name": "Coding"},
                "location": {"_id": "l2", "name": "Эрдэнэт"},
                "ages": "",
                "firstNames": ["C"]
            },
            {
                "_id": "g3",
                "trainingType": {"_id": "t1", "name": "Robotics"},
                "location": null,
                "gender": "female",
                "ages": "8-10",
                "firstNames": ["D", "E", "F"]
            }
        ]))
        .unwrap();
        flatten(&groups)
    }

    #[test]
    fn test_collect() {
        let stats = collect(&individuals());

        assert_eq!(
            stats.by_location,
            vec![
                CategoryCount::new("Дархан", 2),
                CategoryCount::new("Эрдэнэт", 1),
                CategoryCount::new(UNSPECIFIED, 3),
            ]
        );
        assert_eq!(
            stats.by_gender,
            vec![
                CategoryCount::new("male", 2),
                CategoryCount::new(UNSPECIFIED, 1),
                CategoryCount::new("female", 3),
            ]
        );
        assert_eq!(
            stats.by_age,
            vec![CategoryCount::new("8-10", 5), CategoryCount::new(UNSPECIFIED, 1)]
        );
        assert_eq!(
            stats.by_training_type,
            vec![CategoryCount::new("Robotics", 5), CategoryCount::new("Coding", 1)]
        );
    }

    #[test]
    fn test_overview() {
        let individuals = individuals();
        let overview = collect(&individuals).overview(individuals.len());
        assert_eq!(overview.total_individuals, 6);
        assert_eq!(overview.locations, 3);
        assert_eq!(overview.training_types, 2);
    }

    #[test]
    fn test_counts_add_up() {
        let individuals = individuals();
        let stats = collect(&individuals);
        for counts in [&stats.by_location, &stats.by_gender, &stats.by_age, &stats.by_training_type] {
            assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), individuals.len());
        }
    }

    #[test]
    fn test_sorted_by_count_is_stable() {
        let counts = vec![
            CategoryCount::new("a", 1),
            CategoryCount::new("b", 3),
            CategoryCount::new("c", 1),
            CategoryCount::new("d", 2),
        ];
        let names = sorted_by_count(&counts)
            .into_iter()
            .map(|c| c.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["b", "d", "a", "c"]);
    }
}
