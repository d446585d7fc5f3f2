use serde::Serialize;

/// Number of individuals sharing a category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

impl CategoryCount {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        CategoryCount {
            name: name.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EnrollmentStats {
    pub by_location: Vec<CategoryCount>,
    pub by_gender: Vec<CategoryCount>,
    pub by_age: Vec<CategoryCount>,
    pub by_training_type: Vec<CategoryCount>,
}

impl EnrollmentStats {
    pub fn overview(&self, total_individuals: usize) -> Overview {
        Overview {
            total_individuals,
            locations: self.by_location.len(),
            training_types: self.by_training_type.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Overview {
    pub total_individuals: usize,
    pub locations: usize,
    pub training_types: usize,
}
