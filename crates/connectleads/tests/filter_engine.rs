//! Integration specifications for the filter engine over the curated
//! catalog, plus its composition with gateway output.

use connectleads::listings::{
    ConnectionStrength, Experience, GatewaySettings, Industry, JobCatalog, JobFilter,
    JobPosition, JobType, ListingGateway, SearchRequest,
};

fn catalog_jobs() -> Vec<connectleads::listings::Job> {
    JobCatalog::curated().jobs().to_vec()
}

#[test]
fn empty_filter_returns_the_catalog_unchanged() {
    let jobs = catalog_jobs();
    let filtered = JobFilter::default().apply(&jobs);
    assert_eq!(filtered, jobs);
}

#[test]
fn filtering_twice_equals_filtering_once() {
    let jobs = catalog_jobs();
    let filter = JobFilter {
        industry: vec![Industry::Technology, Industry::Media],
        min_recruiter_activity: Some(7),
        ..JobFilter::default()
    };

    let once = filter.apply(&jobs);
    assert_eq!(filter.apply(&once), once);
}

#[test]
fn product_manager_filter_selects_the_three_matches_in_order() {
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
fn application_rate_threshold_selects_rates_at_or_above() {
    let jobs = catalog_jobs();
    let rates: Vec<u8> = jobs.iter().map(|job| job.application_rate).collect();
    assert_eq!(rates, [78, 65, 82, 58, 73, 70, 85, 62]);

    let filter = JobFilter {
        min_application_rate: Some(70),
        ..JobFilter::default()
    };
    let matched = filter.apply(&jobs);
    let matched_rates: Vec<u8> = matched.iter().map(|job| job.application_rate).collect();
    assert_eq!(matched_rates, [78, 82, 73, 70, 85]);
}

#[test]
fn connection_strength_includes_first_and_excludes_second() {
    let jobs = catalog_jobs();
    let filter = JobFilter {
        connection_strength: vec![ConnectionStrength::First, ConnectionStrength::Alumni],
        ..JobFilter::default()
    };

    let matched = filter.apply(&jobs);
    // job-001 holds a Second-degree connection and must not appear.
    assert!(matched.iter().all(|job| job.id != "job-001"));
    // job-003 holds the only First-degree connection and must appear.
    assert!(matched.iter().any(|job| job.id == "job-003"));
    assert!(matched
        .iter()
        .all(|job| matches!(
            job.connection_strength(),
            ConnectionStrength::First | ConnectionStrength::Alumni
        )));
}

#[test]
fn dimensions_compose_conjunctively() {
    let jobs = catalog_jobs();
    let filter = JobFilter {
        experience: vec![Experience::Senior],
        industry: vec![Industry::Technology],
        min_application_rate: Some(80),
        ..JobFilter::default()
    };

    let matched = filter.apply(&jobs);
    let ids: Vec<&str> = matched.iter().map(|job| job.id.as_str()).collect();
    assert_eq!(ids, ["job-007"]);
}

#[tokio::test]
async fn filter_composes_with_gateway_output() {
    let gateway = ListingGateway::with_providers(Vec::new(), GatewaySettings::default());
    let report = gateway
        .search(SearchRequest::for_position(JobPosition::BusinessAnalyst))
        .await;
    assert!(!report.data.is_empty());

    let filter = JobFilter {
        kind: vec![JobType::Remote],
        ..JobFilter::default()
    };
    let remote_only = filter.apply(&report.data);
    assert!(remote_only.iter().all(|job| job.kind == JobType::Remote));

    // The filtered list is a stable subsequence of the report order.
    let mut cursor = report.data.iter();
    for job in &remote_only {
        assert!(cursor.any(|candidate| candidate.id == job.id));
    }
}
