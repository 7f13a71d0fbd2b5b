use super::normalize::RawListing;
use super::ListingQuery;
use crate::listings::domain::{JobPosition, JobType};

pub(crate) const SAMPLE_SOURCE_LABEL: &str = "Sample Data";

const SAMPLE_COMPANIES: [(&str, &str); 5] = [
    (
        "TechVision Inc.",
        "https://images.unsplash.com/photo-1547658719-da2b51169166?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&q=80&h=64&w=64",
    ),
    (
        "InnovateSoft",
        "https://images.unsplash.com/photo-1551135049-8a33b5883817?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&q=80&h=64&w=64",
    ),
    (
        "DataDriven Co.",
        "https://images.unsplash.com/photo-1568822617270-2c1579f8dfe2?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&q=80&h=64&w=64",
    ),
    (
        "FutureTech",
        "https://images.unsplash.com/photo-1551288049-bebda4e38f71?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&q=80&h=64&w=64",
    ),
    (
        "GlobalSystems",
        "https://images.unsplash.com/photo-1563461660947-507ef49e9c47?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&q=80&h=64&w=64",
    ),
];

const SAMPLE_LOCATIONS: [&str; 6] = [
    "San Francisco, CA",
    "New York, NY",
    "Austin, TX",
    "Seattle, WA",
    "Chicago, IL",
    "Remote",
];

const SAMPLE_TYPES: [JobType; 3] = [JobType::Remote, JobType::Onsite, JobType::Hybrid];

const SAMPLE_SALARIES: [&str; 4] = [
    "$90,000 - $120,000",
    "$120,000 - $150,000",
    "$80,000 - $100,000",
    "$130,000 - $160,000",
];

const SAMPLE_RESPONSIBILITIES: [&str; 5] = [
    "Drive product strategy and roadmap",
    "Collaborate with cross-functional teams",
    "Analyze market trends and user feedback",
    "Define product requirements and specifications",
    "Monitor product performance metrics",
];

const SAMPLE_REQUIREMENTS: [&str; 5] = [
    "Bachelor's degree in related field",
    "3+ years of relevant experience",
    "Strong analytical and problem-solving skills",
    "Excellent communication abilities",
    "Familiarity with agile methodologies",
];

const fn description_for(position: JobPosition) -> &'static str {
    match position {
        JobPosition::ProductManager => {
            "Leading product development initiatives and defining product strategy."
        }
        JobPosition::ProgramManager => {
            "Overseeing multiple projects and ensuring strategic alignment across initiatives."
        }
        JobPosition::ProjectManager => {
            "Managing project timelines, resources, and deliverables to ensure successful completion."
        }
        JobPosition::BusinessAnalyst => {
            "Analyzing business processes and identifying opportunities for improvement."
        }
        JobPosition::DataAnalyst => {
            "Interpreting data sets to provide actionable insights for business decisions."
        }
    }
}

/// Builds the synthetic sample set for a query.
///
/// The rows rotate through fixed company/location/salary pools, so their
/// shape is a pure function of the query. Rows are partial on purpose: they
/// pass through the same normalization step as provider rows, which fills
/// the remaining fields deterministically.
pub(crate) fn sample_listings(query: &ListingQuery) -> Vec<RawListing> {
    let label = query.position.label();
    let mut rows = Vec::with_capacity(query.limit);

    for index in 0..query.limit {
        let (company, logo_url) = SAMPLE_COMPANIES[index % SAMPLE_COMPANIES.len()];
        let title = match index % 3 {
            0 => format!("Senior {label}"),
            1 => label.to_string(),
            _ => format!("Lead {label}"),
        };

        rows.push(RawListing {
            id: Some(format!("{}-{}", position_slug(query.position), index + 1)),
            title: Some(title),
            company: Some(company.to_string()),
            location: Some(SAMPLE_LOCATIONS[index % SAMPLE_LOCATIONS.len()].to_string()),
            kind: Some(SAMPLE_TYPES[index % SAMPLE_TYPES.len()]),
            salary: Some(SAMPLE_SALARIES[index % SAMPLE_SALARIES.len()].to_string()),
            logo_url: Some(logo_url.to_string()),
            description: Some(description_for(query.position).to_string()),
            responsibilities: SAMPLE_RESPONSIBILITIES
                .iter()
                .map(|line| line.to_string())
                .collect(),
            requirements: SAMPLE_REQUIREMENTS
                .iter()
                .map(|line| line.to_string())
                .collect(),
            posted_at: None,
            deadline: None,
        });
    }

    match keyword_needles(query) {
        Some(needles) => rows
            .into_iter()
            .filter(|row| matches_any_keyword(row, label, &needles))
            .collect(),
        None => rows,
    }
}

// Comma-separated keywords narrow the sample set the same way a provider
// query term would narrow live results. No keyword match means an empty set.
fn keyword_needles(query: &ListingQuery) -> Option<Vec<String>> {
    let raw = query.keywords.as_deref()?.trim();
    if raw.is_empty() {
        return None;
    }

    let needles: Vec<String> = raw
        .split(',')
        .map(|needle| needle.trim().to_lowercase())
        .filter(|needle| !needle.is_empty())
        .collect();
    if needles.is_empty() {
        None
    } else {
        Some(needles)
    }
}

fn matches_any_keyword(row: &RawListing, position_label: &str, needles: &[String]) -> bool {
    let title = row.title.as_deref().unwrap_or_default().to_lowercase();
    let company = row.company.as_deref().unwrap_or_default().to_lowercase();
    let position = position_label.to_lowercase();

    needles.iter().any(|needle| {
        title.contains(needle) || company.contains(needle) || position.contains(needle)
    })
}

fn position_slug(position: JobPosition) -> String {
    position.label().to_lowercase().replace(' ', "-")
}
