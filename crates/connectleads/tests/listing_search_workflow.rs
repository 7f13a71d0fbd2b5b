//! Integration specifications for the listing search chain.
//!
//! Scenarios cover provider priority, graceful degradation to synthetic
//! samples, and the normalization invariant: every served record is
//! schema-valid no matter which link of the chain produced it.

mod common {
    use async_trait::async_trait;

    use connectleads::listings::{
        Connection, ListingProvider, ListingQuery, ProviderError, RawListing,
    };
    use connectleads::listings::{Job, JobPosition, SearchRequest};

    pub(super) struct ScriptedProvider {
        pub(super) label: &'static str,
        pub(super) rows: Result<Vec<RawListing>, String>,
    }

    #[async_trait]
    impl ListingProvider for ScriptedProvider {
        fn label(&self) -> &'static str {
            self.label
        }

        async fn fetch(&self, _query: &ListingQuery) -> Result<Vec<RawListing>, ProviderError> {
            match &self.rows {
                Ok(rows) => Ok(rows.clone()),
                Err(reason) => Err(ProviderError::Unavailable(reason.clone())),
            }
        }
    }

    pub(super) fn sparse_row(id: &str) -> RawListing {
        RawListing {
            id: Some(id.to_string()),
            ..RawListing::default()
        }
    }

    pub(super) fn search_request() -> SearchRequest {
        SearchRequest::for_position(JobPosition::ProgramManager)
    }

    pub(super) fn assert_schema_valid(job: &Job) {
        assert!(!job.id.trim().is_empty(), "id must be populated");
        assert!(!job.title.trim().is_empty(), "title must be populated");
        assert!(!job.company.trim().is_empty(), "company must be populated");
        assert!(!job.location.trim().is_empty(), "location must be populated");
        assert!(!job.salary.trim().is_empty(), "salary must be populated");
        assert!(!job.logo_url.trim().is_empty(), "logo must be populated");
        assert!(
            !job.description.trim().is_empty(),
            "description must be populated"
        );
        assert!(
            !job.responsibilities.is_empty(),
            "responsibilities must never be empty"
        );
        assert!(
            !job.requirements.is_empty(),
            "requirements must never be empty"
        );
        assert!(
            (1..=10).contains(&job.recruiter_activity),
            "recruiter activity out of range: {}",
            job.recruiter_activity
        );
        assert!(
            job.application_rate <= 100,
            "application rate out of range: {}",
            job.application_rate
        );

        if let Connection::Identified { name, position, .. } = &job.connection {
            assert!(!name.trim().is_empty(), "identified connections carry a name");
            assert!(
                !position.trim().is_empty(),
                "identified connections carry a position"
            );
        }
    }
}

mod degradation {
    use super::common::*;
    use connectleads::config::ListingsConfig;
    use connectleads::listings::{GatewaySettings, ListingGateway, ListingProvider};

    fn gateway(providers: Vec<Box<dyn ListingProvider>>) -> ListingGateway {
        ListingGateway::with_providers(providers, GatewaySettings::default())
    }

    #[tokio::test]
    async fn provider_data_is_tagged_with_its_source() {
        let gateway = gateway(vec![Box::new(ScriptedProvider {
            label: "Primary",
            rows: Ok(vec![sparse_row("p-1"), sparse_row("p-2")]),
        })]);

        let report = gateway.search(search_request()).await;
        assert_eq!(report.source_label, "Primary");
        assert_eq!(report.message, "Using data from Primary");
        assert_eq!(report.data.len(), 2);
        assert!(report.error.is_none());
    }

    #[tokio::test]
    async fn total_provider_failure_degrades_to_tagged_samples() {
        let gateway = gateway(vec![
            Box::new(ScriptedProvider {
                label: "Primary",
                rows: Err("dns failure".to_string()),
            }),
            Box::new(ScriptedProvider {
                label: "Secondary",
                rows: Err("rate limited".to_string()),
            }),
        ]);

        let report = gateway.search(search_request()).await;
        assert_eq!(report.source_label, "Sample Data");
        assert_eq!(
            report.message,
            "Provider requests failed, using sample data instead"
        );
        assert_eq!(report.data.len(), 10);

        let error = report.error.expect("last provider error surfaces");
        assert!(error.contains("Secondary"));
        assert!(error.contains("rate limited"));
    }

    #[tokio::test]
    async fn absent_credentials_are_a_first_class_state() {
        let config = ListingsConfig {
            rapidapi_key: None,
            ..ListingsConfig::default()
        };
        let gateway = ListingGateway::from_config(&config).expect("gateway builds");

        let report = gateway.search(search_request()).await;
        assert_eq!(report.source_label, "Sample Data");
        assert_eq!(
            report.message,
            "Using sample data (provider credentials not configured)"
        );
        assert!(report.error.is_none());
        assert_eq!(report.data.len(), config.default_limit);
    }

    #[tokio::test]
    async fn sample_sets_are_stable_between_fetches() {
        let gateway = gateway(Vec::new());

        let first = gateway.search(search_request()).await;
        let second = gateway.search(search_request()).await;

        assert_eq!(first.data.len(), second.data.len());
        for (a, b) in first.data.iter().zip(second.data.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.title, b.title);
            assert_eq!(a.company, b.company);
            assert_eq!(a.experience, b.experience);
            assert_eq!(a.industry, b.industry);
            assert_eq!(a.recruiter_activity, b.recruiter_activity);
            assert_eq!(a.application_rate, b.application_rate);
            assert_eq!(a.featured, b.featured);
            assert_eq!(a.connection, b.connection);
        }
    }

    #[tokio::test]
    async fn unmatched_keywords_yield_the_only_empty_success() {
        let gateway = gateway(Vec::new());

        let mut request = search_request();
        request.keywords = Some("astronaut,submariner".to_string());

        let report = gateway.search(request).await;
        assert!(report.data.is_empty());
        assert_eq!(report.source_label, "Sample Data");
        assert!(report.error.is_none());
    }
}

mod normalization {
    use super::common::*;
    use connectleads::listings::{GatewaySettings, ListingGateway, RawListing};

    #[tokio::test]
    async fn provider_rows_missing_every_field_still_serve_valid_records() {
        let gateway = ListingGateway::with_providers(
            vec![Box::new(ScriptedProvider {
                label: "Primary",
                rows: Ok(vec![RawListing::default(), sparse_row("p-2")]),
            })],
            GatewaySettings::default(),
        );

        let report = gateway.search(search_request()).await;
        assert_eq!(report.data.len(), 2);
        for job in &report.data {
            assert_schema_valid(job);
        }
    }

    #[tokio::test]
    async fn synthetic_records_honor_the_same_schema() {
        let gateway = ListingGateway::with_providers(Vec::new(), GatewaySettings::default());

        for position in connectleads::listings::JobPosition::sourced() {
            let report = gateway
                .search(connectleads::listings::SearchRequest::for_position(
                    position,
                ))
                .await;
            assert!(!report.data.is_empty());
            for job in &report.data {
                assert_schema_valid(job);
                assert_eq!(job.position, position);
            }
        }
    }

    #[tokio::test]
    async fn requested_position_tags_every_served_record() {
        let gateway = ListingGateway::with_providers(
            vec![Box::new(ScriptedProvider {
                label: "Primary",
                rows: Ok(vec![sparse_row("p-1")]),
            })],
            GatewaySettings::default(),
        );

        let report = gateway.search(search_request()).await;
        assert!(report
            .data
            .iter()
            .all(|job| job.position == connectleads::listings::JobPosition::ProgramManager));
    }
}
