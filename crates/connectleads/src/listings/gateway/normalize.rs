use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::ListingQuery;
use crate::listings::domain::{
    Connection, Experience, IdentifiedStrength, Industry, Job, JobType,
};

pub(crate) const FALLBACK_LOGO_URL: &str = "https://images.unsplash.com/photo-1547658719-da2b51169166?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&q=80&h=64&w=64";

const TITLE_SENTINEL: &str = "Job Title Not Available";
const COMPANY_SENTINEL: &str = "Company Not Available";
const SALARY_SENTINEL: &str = "Salary not specified";
const DESCRIPTION_SENTINEL: &str = "No description provided";
const RESPONSIBILITIES_SENTINEL: &str = "No responsibilities provided";
const REQUIREMENTS_SENTINEL: &str = "No requirements provided";

const CONTACT_NAMES: [&str; 6] = [
    "Alex Chen",
    "Sarah Johnson",
    "Michael Wong",
    "Priya Patel",
    "Jordan Avery",
    "Elena Petrova",
];

const CONTACT_TITLES: [&str; 5] = [
    "Engineering Manager",
    "Director of Operations",
    "Talent Partner",
    "Product Lead",
    "Team Member",
];

/// Partially-populated listing as handed over by a provider or the sample
/// synthesizer, before normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawListing {
    pub id: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub kind: Option<JobType>,
    pub salary: Option<String>,
    pub logo_url: Option<String>,
    pub description: Option<String>,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
    pub posted_at: Option<DateTime<Utc>>,
    pub deadline: Option<DateTime<Utc>>,
}

pub(crate) fn canonicalize_all(
    rows: Vec<RawListing>,
    query: &ListingQuery,
    source_label: &str,
    fetched_at: DateTime<Utc>,
) -> Vec<Job> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| canonicalize(row, query, source_label, index, fetched_at))
        .collect()
}

/// Fills every required field of the canonical record with a schema-valid
/// value. Fields no source reports (experience, industry, engagement
/// numbers, featured flag, connection) are invented from a generator seeded
/// by the record's identity, so repeated fetches of the same listing agree.
pub(crate) fn canonicalize(
    row: RawListing,
    query: &ListingQuery,
    source_label: &str,
    index: usize,
    fetched_at: DateTime<Utc>,
) -> Job {
    let identity = row
        .id
        .clone()
        .unwrap_or_else(|| format!("row-{index}"));
    let mut rng = StdRng::seed_from_u64(record_seed(source_label, query, &identity));

    let id = row
        .id
        .unwrap_or_else(|| format!("{}-{:03}", slug(source_label), index + 1));
    let title = non_blank(row.title).unwrap_or_else(|| TITLE_SENTINEL.to_string());
    let company = non_blank(row.company).unwrap_or_else(|| COMPANY_SENTINEL.to_string());
    let location = non_blank(row.location)
        .or_else(|| query.location.clone())
        .unwrap_or_else(|| "Remote".to_string());
    let kind = match row.kind {
        Some(kind) => kind,
        None => JobType::ordered()[rng.gen_range(0..3)],
    };
    let salary = non_blank(row.salary).unwrap_or_else(|| SALARY_SENTINEL.to_string());
    let logo_url = non_blank(row.logo_url).unwrap_or_else(|| FALLBACK_LOGO_URL.to_string());
    let description =
        non_blank(row.description).unwrap_or_else(|| DESCRIPTION_SENTINEL.to_string());
    let responsibilities = non_empty(row.responsibilities, RESPONSIBILITIES_SENTINEL);
    let requirements = non_empty(row.requirements, REQUIREMENTS_SENTINEL);

    let experience = Experience::ordered()[rng.gen_range(0..4)];
    let industry = Industry::ordered()[rng.gen_range(0..7)];
    let recruiter_activity = rng.gen_range(1..=10);
    let application_rate = rng.gen_range(50..90);
    let featured = rng.gen_bool(0.3);
    let connection = invent_connection(&mut rng);

    Job {
        id,
        title,
        company,
        location,
        kind,
        salary,
        logo_url,
        description,
        responsibilities,
        requirements,
        posted_at: row.posted_at.unwrap_or(fetched_at),
        deadline: row.deadline,
        position: query.position,
        experience,
        industry,
        recruiter_activity,
        connection,
        application_rate,
        featured,
    }
}

fn record_seed(source_label: &str, query: &ListingQuery, identity: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    source_label.hash(&mut hasher);
    query.position.label().hash(&mut hasher);
    identity.hash(&mut hasher);
    hasher.finish()
}

fn invent_connection(rng: &mut StdRng) -> Connection {
    let strength = match rng.gen_range(0..4) {
        0 => return Connection::None,
        1 => IdentifiedStrength::Second,
        2 => IdentifiedStrength::First,
        _ => IdentifiedStrength::Alumni,
    };

    let name = CONTACT_NAMES[rng.gen_range(0..CONTACT_NAMES.len())];
    let title = CONTACT_TITLES[rng.gen_range(0..CONTACT_TITLES.len())];
    Connection::identified(strength, name, title)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn non_empty(values: Vec<String>, sentinel: &str) -> Vec<String> {
    let values: Vec<String> = values
        .into_iter()
        .filter(|value| !value.trim().is_empty())
        .collect();
    if values.is_empty() {
        vec![sentinel.to_string()]
    } else {
        values
    }
}

fn slug(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut previous_dash = false;
    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            previous_dash = false;
        } else if !previous_dash && !slug.is_empty() {
            slug.push('-');
            previous_dash = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}
