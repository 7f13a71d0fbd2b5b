use clap::Args;
use connectleads::config::AppConfig;
use connectleads::error::AppError;
use connectleads::listings::{ListingGateway, SearchRequest};

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Position to search for (e.g. "Product Manager")
    pub(crate) position: String,
    /// Preferred location phrase passed through to the providers
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Comma-separated keywords narrowing the results
    #[arg(long)]
    pub(crate) keywords: Option<String>,
    /// Maximum number of listings to return
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

pub(crate) async fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let gateway = ListingGateway::from_config(&config.listings)?;

    let report = gateway
        .search(SearchRequest {
            position: args.position,
            location: args.location,
            keywords: args.keywords,
            limit: args.limit,
        })
        .await;

    println!("{}", report.message);
    if let Some(error) = &report.error {
        println!("warning: {error}");
    }

    for job in &report.data {
        println!();
        println!(
            "{} — {} ({}) [{}]",
            job.title,
            job.company,
            job.location,
            job.kind.label()
        );
        println!("    salary: {}", job.salary);
        println!(
            "    {} | {} | recruiter activity {}/10 | response rate {}%",
            job.experience.label(),
            job.industry.label(),
            job.recruiter_activity,
            job.application_rate
        );
        if let Some((name, title)) = job.connection.contact() {
            println!(
                "    connection: {} ({}, {})",
                job.connection_strength().label(),
                name,
                title
            );
        }
    }

    println!();
    println!(
        "{} listing(s) via {}",
        report.data.len(),
        report.source_label
    );
    Ok(())
}
