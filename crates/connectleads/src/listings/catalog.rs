use chrono::{DateTime, TimeZone, Utc};

use super::domain::{
    Connection, Experience, IdentifiedStrength, Industry, Job, JobPosition, JobType,
};

/// Curated set of vetted listings served when no live fetch is involved.
///
/// The records are hand-maintained rather than sourced, so the catalog is the
/// one place in the system where jobs exist without passing through the
/// gateway. Each record is nevertheless kept schema-identical to gateway
/// output.
#[derive(Debug, Clone)]
pub struct JobCatalog {
    jobs: Vec<Job>,
}

impl JobCatalog {
    pub fn curated() -> Self {
        Self {
            jobs: curated_jobs(),
        }
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn job_by_id(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Listings flagged for homepage highlighting.
    pub fn featured(&self) -> Vec<&Job> {
        self.jobs.iter().filter(|job| job.featured).collect()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

fn posted(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid catalog timestamp")
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn curated_jobs() -> Vec<Job> {
    vec![
        Job {
            id: "job-001".to_string(),
            title: "Senior Product Manager".to_string(),
            company: "TechVision Inc.".to_string(),
            location: "San Francisco, CA".to_string(),
            kind: JobType::Hybrid,
            salary: "$130,000 - $160,000".to_string(),
            logo_url: "https://images.unsplash.com/photo-1547658719-da2b51169166?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&q=80&h=64&w=64".to_string(),
            description: "Join our innovative product team to lead the development of our flagship AI platform. You'll collaborate with talented engineers and designers to shape the future of enterprise AI solutions.".to_string(),
            responsibilities: lines(&[
                "Lead product strategy and roadmap development",
                "Work with cross-functional teams to deliver high-quality features",
                "Analyze market trends and customer feedback to inform product decisions",
                "Manage product lifecycle from conception to launch",
            ]),
            requirements: lines(&[
                "5+ years of product management experience",
                "Proven track record of successful product launches",
                "Strong analytical and communication skills",
                "Experience with SaaS products preferred",
            ]),
            posted_at: posted(2023, 9, 15),
            deadline: Some(posted(2023, 10, 15)),
            position: JobPosition::ProductManager,
            experience: Experience::Senior,
            industry: Industry::Technology,
            recruiter_activity: 9,
            connection: Connection::identified(
                IdentifiedStrength::Second,
                "Alex Chen",
                "Engineering Manager",
            ),
            application_rate: 78,
            featured: true,
        },
        Job {
            id: "job-002".to_string(),
            title: "Project Manager - Healthcare Initiatives".to_string(),
            company: "Wellness Medical Group".to_string(),
            location: "Boston, MA".to_string(),
            kind: JobType::Onsite,
            salary: "$110,000 - $140,000".to_string(),
            logo_url: "https://images.unsplash.com/photo-1505751172876-fa1923c5c528?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&q=80&h=64&w=64".to_string(),
            description: "Lead critical healthcare transformation projects aimed at improving patient outcomes and operational efficiency. Work with multidisciplinary teams of healthcare professionals to implement innovative solutions.".to_string(),
            responsibilities: lines(&[
                "Manage end-to-end project lifecycle for healthcare initiatives",
                "Coordinate with medical staff, IT, and administration",
                "Ensure project deliverables meet quality standards and timelines",
                "Monitor and report on project progress to stakeholders",
            ]),
            requirements: lines(&[
                "3+ years of project management in healthcare settings",
                "PMP certification preferred",
                "Knowledge of healthcare regulations and workflows",
                "Strong communication and stakeholder management skills",
            ]),
            posted_at: posted(2023, 9, 18),
            deadline: None,
            position: JobPosition::ProjectManager,
            experience: Experience::MidLevel,
            industry: Industry::Healthcare,
            recruiter_activity: 7,
            connection: Connection::identified(
                IdentifiedStrength::Alumni,
                "Sarah Johnson",
                "Director of Operations",
            ),
            application_rate: 65,
            featured: false,
        },
        Job {
            id: "job-003".to_string(),
            title: "Program Manager - Digital Transformation".to_string(),
            company: "Global Finance Partners".to_string(),
            location: "New York, NY".to_string(),
            kind: JobType::Hybrid,
            salary: "$140,000 - $180,000".to_string(),
            logo_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&q=80&h=64&w=64".to_string(),
            description: "Oversee a portfolio of digital transformation initiatives across our global financial services organization. Drive strategic change to modernize our technology stack and improve customer experiences.".to_string(),
            responsibilities: lines(&[
                "Manage and coordinate multiple interrelated projects",
                "Develop and track program KPIs and success metrics",
                "Identify and mitigate risks across the program",
                "Facilitate communication between executive leadership and project teams",
            ]),
            requirements: lines(&[
                "7+ years of program management experience",
                "Experience with financial services digital transformation",
                "Strong leadership and stakeholder management skills",
                "Knowledge of agile and traditional project management methodologies",
            ]),
            posted_at: posted(2023, 9, 10),
            deadline: Some(posted(2023, 10, 20)),
            position: JobPosition::ProgramManager,
            experience: Experience::Senior,
            industry: Industry::Finance,
            recruiter_activity: 8,
            connection: Connection::identified(
                IdentifiedStrength::First,
                "Michael Wong",
                "VP of Technology",
            ),
            application_rate: 82,
            featured: true,
        },
        Job {
            id: "job-004".to_string(),
            title: "Business Analyst - Retail Operations".to_string(),
            company: "ModernShop Enterprises".to_string(),
            location: "Chicago, IL".to_string(),
            kind: JobType::Remote,
            salary: "$85,000 - $105,000".to_string(),
            logo_url: "https://images.unsplash.com/photo-1553835973-dec43bfddbeb?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&q=80&h=64&w=64".to_string(),
            description: "Help transform our retail operations through data-driven insights and process improvements. Work with cross-functional teams to identify opportunities and implement solutions that drive efficiency and customer satisfaction.".to_string(),
            responsibilities: lines(&[
                "Gather and document business requirements",
                "Analyze current processes and identify improvement opportunities",
                "Create detailed functional specifications for technical teams",
                "Support testing and implementation of new systems and processes",
            ]),
            requirements: lines(&[
                "2+ years of business analysis experience, preferably in retail",
                "Strong analytical and problem-solving skills",
                "Experience with SQL and data visualization tools",
                "Excellent communication and documentation skills",
            ]),
            posted_at: posted(2023, 9, 20),
            deadline: None,
            position: JobPosition::BusinessAnalyst,
            experience: Experience::MidLevel,
            industry: Industry::Retail,
            recruiter_activity: 6,
            connection: Connection::None,
            application_rate: 58,
            featured: false,
        },
        Job {
            id: "job-005".to_string(),
            title: "Product Manager - Consumer Apps".to_string(),
            company: "MobileTech Solutions".to_string(),
            location: "Austin, TX".to_string(),
            kind: JobType::Hybrid,
            salary: "$115,000 - $145,000".to_string(),
            logo_url: "https://images.unsplash.com/photo-1548094990-c16ca90f1f0d?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&q=80&h=64&w=64".to_string(),
            description: "Lead the product development for our suite of consumer mobile applications. Work closely with UX designers, engineers, and marketing to create delightful experiences for millions of users.".to_string(),
            responsibilities: lines(&[
                "Define product vision, strategy, and roadmap",
                "Prioritize features based on user research and business objectives",
                "Collaborate with engineering and design teams on implementation",
                "Monitor product performance and make data-driven decisions",
            ]),
            requirements: lines(&[
                "4+ years of product management for consumer applications",
                "Strong understanding of mobile app development processes",
                "Experience with user research and A/B testing",
                "Excellent communication and leadership skills",
            ]),
            posted_at: posted(2023, 9, 12),
            deadline: Some(posted(2023, 10, 12)),
            position: JobPosition::ProductManager,
            experience: Experience::MidLevel,
            industry: Industry::Technology,
            recruiter_activity: 9,
            connection: Connection::identified(
                IdentifiedStrength::Second,
                "David Park",
                "UX Director",
            ),
            application_rate: 73,
            featured: true,
        },
        Job {
            id: "job-006".to_string(),
            title: "Junior Business Analyst".to_string(),
            company: "EdTech Innovations".to_string(),
            location: "Remote".to_string(),
            kind: JobType::Remote,
            salary: "$65,000 - $85,000".to_string(),
            logo_url: "https://images.unsplash.com/photo-1546410531-bb4caa6b424d?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&q=80&h=64&w=64".to_string(),
            description: "Join our growing team to help analyze educational data and improve our learning platform. This is an excellent opportunity for someone starting their career in business analysis with an interest in education technology.".to_string(),
            responsibilities: lines(&[
                "Collect and analyze user feedback and platform data",
                "Document business requirements and user stories",
                "Support product managers in feature prioritization",
                "Assist with testing and quality assurance",
            ]),
            requirements: lines(&[
                "Bachelor's degree in business, computer science, or related field",
                "0-2 years of experience in analysis or related role",
                "Strong analytical thinking and attention to detail",
                "Excellent written and verbal communication skills",
            ]),
            posted_at: posted(2023, 9, 21),
            deadline: None,
            position: JobPosition::BusinessAnalyst,
            experience: Experience::EntryLevel,
            industry: Industry::Education,
            recruiter_activity: 8,
            connection: Connection::identified(
                IdentifiedStrength::Alumni,
                "Emma Rodriguez",
                "Product Lead",
            ),
            application_rate: 70,
            featured: false,
        },
        Job {
            id: "job-007".to_string(),
            title: "Senior Program Manager - Enterprise Initiatives".to_string(),
            company: "CloudScale Systems".to_string(),
            location: "Seattle, WA".to_string(),
            kind: JobType::Hybrid,
            salary: "$150,000 - $190,000".to_string(),
            logo_url: "https://images.unsplash.com/photo-1549368278-dedf31639d26?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&q=80&h=64&w=64".to_string(),
            description: "Lead complex enterprise technology transformation programs for our Fortune 500 clients. Manage multiple workstreams and drive strategic initiatives that deliver significant business impact.".to_string(),
            responsibilities: lines(&[
                "Lead program planning, execution, and governance",
                "Manage interdependencies across multiple projects",
                "Align program outcomes with strategic business objectives",
                "Present program status and results to executive stakeholders",
            ]),
            requirements: lines(&[
                "8+ years of program management experience with enterprise initiatives",
                "PMP and/or agile certifications",
                "Experience managing programs with budgets exceeding $5M",
                "Strong leadership and executive communication skills",
            ]),
            posted_at: posted(2023, 9, 8),
            deadline: Some(posted(2023, 10, 8)),
            position: JobPosition::ProgramManager,
            experience: Experience::Senior,
            industry: Industry::Technology,
            recruiter_activity: 9,
            connection: Connection::identified(
                IdentifiedStrength::Second,
                "Robert Keller",
                "VP of Professional Services",
            ),
            application_rate: 85,
            featured: true,
        },
        Job {
            id: "job-008".to_string(),
            title: "Product Manager - Digital Media".to_string(),
            company: "CreativeVision Media".to_string(),
            location: "Los Angeles, CA".to_string(),
            kind: JobType::Onsite,
            salary: "$110,000 - $140,000".to_string(),
            logo_url: "https://images.unsplash.com/photo-1574887427561-d3d5d58c9273?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&q=80&h=64&w=64".to_string(),
            description: "Shape the future of digital media products for one of the fastest-growing content platforms. Drive strategy and execution for features that help creators and consumers connect through compelling content.".to_string(),
            responsibilities: lines(&[
                "Define product vision and strategy for content creation tools",
                "Work with UX and engineering to design and build features",
                "Analyze user behavior and content metrics to drive decisions",
                "Collaborate with content teams to understand creator needs",
            ]),
            requirements: lines(&[
                "4+ years of product management experience",
                "Background in digital media, content platforms, or creator tools",
                "Strong analytical skills and data-driven decision making",
                "Passion for digital content and creator economy",
            ]),
            posted_at: posted(2023, 9, 14),
            deadline: None,
            position: JobPosition::ProductManager,
            experience: Experience::MidLevel,
            industry: Industry::Media,
            recruiter_activity: 7,
            connection: Connection::None,
            application_rate: 62,
            featured: false,
        },
    ]
}
