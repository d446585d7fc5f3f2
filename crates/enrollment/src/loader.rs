use std::sync::Arc;

use api::{ApiError, RegistrationSource};
use log::{error, info};
use model::{
    decimal::Decimal,
    individual::Individual,
    locale::FETCH_FAILED,
    registration::GroupRecord,
    statistics::{EnrollmentStats, Overview},
};

use crate::{
    export::{export_rows, ExportRow},
    flatten::flatten,
    roster::{self, RosterQuery, RosterRow},
    statistics,
};

async fn fetch(
    source: &dyn RegistrationSource,
    token: Option<&str>,
) -> (Vec<GroupRecord>, Option<ApiError>) {
    match source.registrations(token).await {
        Ok(groups) => {
            info!("Fetched {} registrations", groups.len());
            (groups, None)
        }
        Err(err) => {
            error!("Failed to fetch registrations: {}", err);
            (Vec::new(), Some(err))
        }
    }
}

fn banner(err: &Option<ApiError>) -> Option<&'static str> {
    err.as_ref().map(|_| FETCH_FAILED)
}

/// Statistics view over every registration.
#[derive(Clone)]
pub struct Dashboard {
    source: Arc<dyn RegistrationSource>,
}

impl Dashboard {
    pub fn new(source: Arc<dyn RegistrationSource>) -> Self {
        Dashboard { source }
    }

    /// Never fails: a fetch error leaves the view empty and is kept in
    /// `error`.
    pub async fn load(&self, token: Option<&str>) -> DashboardView {
        let (groups, error) = fetch(self.source.as_ref(), token).await;
        let individuals = flatten(&groups);
        let stats = statistics::collect(&individuals);
        DashboardView {
            individuals,
            stats,
            error,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    pub individuals: Vec<Individual>,
    pub stats: EnrollmentStats,
    pub error: Option<ApiError>,
}

impl DashboardView {
    pub fn overview(&self) -> Overview {
        self.stats.overview(self.individuals.len())
    }

    pub fn banner(&self) -> Option<&'static str> {
        banner(&self.error)
    }
}

/// Roster view: the registrations as submitted, searchable and exportable.
#[derive(Clone)]
pub struct Roster {
    source: Arc<dyn RegistrationSource>,
}

impl Roster {
    pub fn new(source: Arc<dyn RegistrationSource>) -> Self {
        Roster { source }
    }

    pub async fn load(&self, token: Option<&str>) -> RosterView {
        let (groups, error) = fetch(self.source.as_ref(), token).await;
        RosterView { groups, error }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RosterView {
    pub groups: Vec<GroupRecord>,
    pub error: Option<ApiError>,
}

impl RosterView {
    pub fn banner(&self) -> Option<&'static str> {
        banner(&self.error)
    }

    pub fn locations(&self) -> Vec<String> {
        roster::locations(&self.groups)
    }

    pub fn page(&self, query: &RosterQuery) -> RosterPage<'_> {
        let groups = roster::filter(&self.groups, query);
        let total_paid = roster::total_paid(groups.iter().copied());
        RosterPage { groups, total_paid }
    }
}

/// Filtered slice of the roster.
#[derive(Debug, Clone)]
pub struct RosterPage<'a> {
    pub groups: Vec<&'a GroupRecord>,
    pub total_paid: Decimal,
}

impl<'a> RosterPage<'a> {
    pub fn rows(&self) -> Vec<RosterRow<'a>> {
        roster::rows(self.groups.iter().copied())
    }

    pub fn export_rows(&self) -> Vec<ExportRow> {
        export_rows(self.groups.iter().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
