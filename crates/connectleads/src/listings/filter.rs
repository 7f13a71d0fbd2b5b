use serde::{Deserialize, Serialize};

use super::domain::{ConnectionStrength, Experience, Industry, Job, JobPosition, JobType};

/// Structural query over a collection of listings.
///
/// Every dimension is optional: an empty set or absent threshold places no
/// constraint on that dimension. Populated dimensions combine with logical
/// AND; values within a multi-valued dimension combine with membership OR.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobFilter {
    pub position: Vec<JobPosition>,
    pub experience: Vec<Experience>,
    pub industry: Vec<Industry>,
    #[serde(rename = "type")]
    pub kind: Vec<JobType>,
    pub connection_strength: Vec<ConnectionStrength>,
    pub min_recruiter_activity: Option<u8>,
    pub min_application_rate: Option<u8>,
    pub location: Option<String>,
}

impl JobFilter {
    /// True when no dimension is populated, in which case [`apply`] is the
    /// identity function.
    ///
    /// [`apply`]: Self::apply
    pub fn is_unconstrained(&self) -> bool {
        self.position.is_empty()
            && self.experience.is_empty()
            && self.industry.is_empty()
            && self.kind.is_empty()
            && self.connection_strength.is_empty()
            && !threshold_active(self.min_recruiter_activity)
            && !threshold_active(self.min_application_rate)
            && location_needle(self.location.as_deref()).is_none()
    }

    pub fn matches(&self, job: &Job) -> bool {
        if !member(&self.position, &job.position) {
            return false;
        }
        if !member(&self.experience, &job.experience) {
            return false;
        }
        if !member(&self.industry, &job.industry) {
            return false;
        }
        if !member(&self.kind, &job.kind) {
            return false;
        }
        if !member(&self.connection_strength, &job.connection_strength()) {
            return false;
        }
        if !clears(self.min_recruiter_activity, job.recruiter_activity) {
            return false;
        }
        if !clears(self.min_application_rate, job.application_rate) {
            return false;
        }

        match location_needle(self.location.as_deref()) {
            Some(needle) => job.location.to_lowercase().contains(&needle),
            None => true,
        }
    }

    /// Returns the jobs satisfying every populated dimension, preserving the
    /// input order. The input slice is left untouched.
    pub fn apply(&self, jobs: &[Job]) -> Vec<Job> {
        jobs.iter()
            .filter(|job| self.matches(job))
            .cloned()
            .collect()
    }
}

fn member<T: PartialEq>(allowed: &[T], value: &T) -> bool {
    allowed.is_empty() || allowed.contains(value)
}

fn threshold_active(threshold: Option<u8>) -> bool {
    matches!(threshold, Some(minimum) if minimum > 0)
}

// A zero threshold is treated as "not set" so sliders resting at zero do not
// constrain anything.
fn clears(threshold: Option<u8>, value: u8) -> bool {
    match threshold {
        None | Some(0) => true,
        Some(minimum) => value >= minimum,
    }
}

// Location matches as a case-insensitive substring of the job's display
// location.
fn location_needle(location: Option<&str>) -> Option<String> {
    location
        .map(str::trim)
        .filter(|needle| !needle.is_empty())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::catalog::JobCatalog;

    fn catalog_jobs() -> Vec<Job> {
        JobCatalog::curated().jobs().to_vec()
    }

    #[test]
    fn empty_filter_is_identity() {
        let jobs = catalog_jobs();
        let filter = JobFilter::default();
        assert!(filter.is_unconstrained());
        assert_eq!(filter.apply(&jobs), jobs);
    }

    #[test]
    fn filtering_is_idempotent() {
        let jobs = catalog_jobs();
        let filter = JobFilter {
            experience: vec![Experience::Senior],
            min_application_rate: Some(60),
            ..JobFilter::default()
        };

        let once = filter.apply(&jobs);
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn input_slice_is_left_untouched() {
        let jobs = catalog_jobs();
        let before = jobs.clone();
        let filter = JobFilter {
            position: vec![JobPosition::BusinessAnalyst],
            ..JobFilter::default()
        };

        let _ = filter.apply(&jobs);
        assert_eq!(jobs, before);
    }

    #[test]
    fn position_membership_keeps_original_order() {
        let jobs = catalog_jobs();
        let filter = JobFilter {
            position: vec![JobPosition::ProductManager],
            ..JobFilter::default()
        };

        let matched = filter.apply(&jobs);
        let ids: Vec<&str> = matched.iter().map(|job| job.id.as_str()).collect();
        assert_eq!(ids, ["job-001", "job-005", "job-008"]);
    }

    #[test]
    fn multiple_values_within_a_dimension_are_a_union() {
        let jobs = catalog_jobs();
        let filter = JobFilter {
            position: vec![JobPosition::ProgramManager, JobPosition::ProjectManager],
            ..JobFilter::default()
        };

        let matched = filter.apply(&jobs);
        let ids: Vec<&str> = matched.iter().map(|job| job.id.as_str()).collect();
        assert_eq!(ids, ["job-002", "job-003", "job-007"]);
    }

    #[test]
    fn dimensions_combine_with_logical_and() {
        let jobs = catalog_jobs();
        let filter = JobFilter {
            position: vec![JobPosition::ProductManager],
            experience: vec![Experience::MidLevel],
            ..JobFilter::default()
        };

        let matched = filter.apply(&jobs);
        let ids: Vec<&str> = matched.iter().map(|job| job.id.as_str()).collect();
        assert_eq!(ids, ["job-005", "job-008"]);
    }

    #[test]
    fn application_rate_threshold_is_inclusive() {
        let jobs = catalog_jobs();
        let filter = JobFilter {
            min_application_rate: Some(70),
            ..JobFilter::default()
        };

        let matched = filter.apply(&jobs);
        let rates: Vec<u8> = matched.iter().map(|job| job.application_rate).collect();
        assert_eq!(rates, [78, 82, 73, 70, 85]);
    }

    #[test]
    fn zero_thresholds_impose_no_constraint() {
        let jobs = catalog_jobs();
        let filter = JobFilter {
            min_recruiter_activity: Some(0),
            min_application_rate: Some(0),
            ..JobFilter::default()
        };

        assert!(filter.is_unconstrained());
        assert_eq!(filter.apply(&jobs).len(), jobs.len());
    }

    #[test]
    fn recruiter_activity_threshold_filters_low_engagement() {
        let jobs = catalog_jobs();
        let filter = JobFilter {
            min_recruiter_activity: Some(9),
            ..JobFilter::default()
        };

        let matched = filter.apply(&jobs);
        let ids: Vec<&str> = matched.iter().map(|job| job.id.as_str()).collect();
        assert_eq!(ids, ["job-001", "job-005", "job-007"]);
    }

    #[test]
    fn connection_strength_membership() {
        let jobs = catalog_jobs();
        let filter = JobFilter {
            connection_strength: vec![ConnectionStrength::First, ConnectionStrength::Alumni],
            ..JobFilter::default()
        };

        let matched = filter.apply(&jobs);
        let ids: Vec<&str> = matched.iter().map(|job| job.id.as_str()).collect();
        // job-001 carries a Second connection and must be excluded; job-003
        // (First) and the two Alumni connections stay.
        assert_eq!(ids, ["job-002", "job-003", "job-006"]);
    }

    #[test]
    fn location_matches_case_insensitive_substrings() {
        let jobs = catalog_jobs();
        let filter = JobFilter {
            location: Some("boston".to_string()),
            ..JobFilter::default()
        };
        let matched = filter.apply(&jobs);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "job-002");

        let blank = JobFilter {
            location: Some("   ".to_string()),
            ..JobFilter::default()
        };
        assert_eq!(blank.apply(&jobs).len(), jobs.len());
    }

    #[test]
    fn filter_deserializes_from_partial_json() {
        let filter: JobFilter = serde_json::from_str(
            r#"{ "position": ["Product Manager"], "minApplicationRate": 70 }"#,
        )
        .expect("filter parses");

        assert_eq!(filter.position, vec![JobPosition::ProductManager]);
        assert_eq!(filter.min_application_rate, Some(70));
        assert!(filter.experience.is_empty());
        assert!(filter.location.is_none());
    }
}
