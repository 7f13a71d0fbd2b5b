use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed enumeration of job positions the service understands.
///
/// The curated catalog carries the first four; `DataAnalyst` is admitted on
/// the source-fetch path only, behind a configuration flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobPosition {
    #[serde(rename = "Product Manager")]
    ProductManager,
    #[serde(rename = "Project Manager")]
    ProjectManager,
    #[serde(rename = "Program Manager")]
    ProgramManager,
    #[serde(rename = "Business Analyst")]
    BusinessAnalyst,
    #[serde(rename = "Data Analyst")]
    DataAnalyst,
}

impl JobPosition {
    /// Positions present in the curated catalog.
    pub const fn curated() -> [Self; 4] {
        [
            Self::ProductManager,
            Self::ProjectManager,
            Self::ProgramManager,
            Self::BusinessAnalyst,
        ]
    }

    /// Positions accepted on the source-fetch path when the Data Analyst
    /// extension is enabled.
    pub const fn sourced() -> [Self; 5] {
        [
            Self::ProductManager,
            Self::ProjectManager,
            Self::ProgramManager,
            Self::BusinessAnalyst,
            Self::DataAnalyst,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ProductManager => "Product Manager",
            Self::ProjectManager => "Project Manager",
            Self::ProgramManager => "Program Manager",
            Self::BusinessAnalyst => "Business Analyst",
            Self::DataAnalyst => "Data Analyst",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Product Manager" => Some(Self::ProductManager),
            "Project Manager" => Some(Self::ProjectManager),
            "Program Manager" => Some(Self::ProgramManager),
            "Business Analyst" => Some(Self::BusinessAnalyst),
            "Data Analyst" => Some(Self::DataAnalyst),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Experience {
    #[serde(rename = "Entry Level")]
    EntryLevel,
    #[serde(rename = "Mid Level")]
    MidLevel,
    Senior,
    Executive,
}

impl Experience {
    pub const fn ordered() -> [Self; 4] {
        [Self::EntryLevel, Self::MidLevel, Self::Senior, Self::Executive]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EntryLevel => "Entry Level",
            Self::MidLevel => "Mid Level",
            Self::Senior => "Senior",
            Self::Executive => "Executive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    Technology,
    Healthcare,
    Finance,
    Retail,
    Manufacturing,
    Education,
    Media,
}

impl Industry {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Technology,
            Self::Healthcare,
            Self::Finance,
            Self::Retail,
            Self::Manufacturing,
            Self::Education,
            Self::Media,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Healthcare => "Healthcare",
            Self::Finance => "Finance",
            Self::Retail => "Retail",
            Self::Manufacturing => "Manufacturing",
            Self::Education => "Education",
            Self::Media => "Media",
        }
    }
}

/// Working arrangement advertised for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    Remote,
    Onsite,
    Hybrid,
}

impl JobType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Remote, Self::Onsite, Self::Hybrid]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Remote => "Remote",
            Self::Onsite => "Onsite",
            Self::Hybrid => "Hybrid",
        }
    }
}

/// Categorical proximity between the candidate and the hiring company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionStrength {
    None,
    Second,
    First,
    Alumni,
}

impl ConnectionStrength {
    pub const fn ordered() -> [Self; 4] {
        [Self::None, Self::Second, Self::First, Self::Alumni]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Second => "Second",
            Self::First => "First",
            Self::Alumni => "Alumni",
        }
    }
}

/// Strength of a connection that names an actual contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifiedStrength {
    Second,
    First,
    Alumni,
}

impl IdentifiedStrength {
    pub const fn strength(self) -> ConnectionStrength {
        match self {
            Self::Second => ConnectionStrength::Second,
            Self::First => ConnectionStrength::First,
            Self::Alumni => ConnectionStrength::Alumni,
        }
    }
}

/// Social-proof insight attached to a listing.
///
/// A contact name and position exist only for identified connections; the
/// variant shape makes the "no name without a strength" rule impossible to
/// violate rather than merely discouraged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConnectionRepr", into = "ConnectionRepr")]
pub enum Connection {
    None,
    Identified {
        strength: IdentifiedStrength,
        name: String,
        position: String,
    },
}

impl Connection {
    pub fn identified(
        strength: IdentifiedStrength,
        name: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self::Identified {
            strength,
            name: name.into(),
            position: position.into(),
        }
    }

    pub fn strength(&self) -> ConnectionStrength {
        match self {
            Self::None => ConnectionStrength::None,
            Self::Identified { strength, .. } => strength.strength(),
        }
    }

    pub fn contact(&self) -> Option<(&str, &str)> {
        match self {
            Self::None => None,
            Self::Identified { name, position, .. } => Some((name, position)),
        }
    }
}

/// Wire shape for a connection: `{"type": "...", "name"?, "position"?}`.
#[derive(Debug, Serialize, Deserialize)]
struct ConnectionRepr {
    #[serde(rename = "type")]
    kind: ConnectionStrength,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<String>,
}

impl TryFrom<ConnectionRepr> for Connection {
    type Error = String;

    fn try_from(repr: ConnectionRepr) -> Result<Self, Self::Error> {
        let strength = match repr.kind {
            ConnectionStrength::None => return Ok(Connection::None),
            ConnectionStrength::Second => IdentifiedStrength::Second,
            ConnectionStrength::First => IdentifiedStrength::First,
            ConnectionStrength::Alumni => IdentifiedStrength::Alumni,
        };

        match (repr.name, repr.position) {
            (Some(name), Some(position)) => Ok(Connection::Identified {
                strength,
                name,
                position,
            }),
            _ => Err(format!(
                "a {} connection requires both a contact name and position",
                strength.strength().label()
            )),
        }
    }
}

impl From<Connection> for ConnectionRepr {
    fn from(connection: Connection) -> Self {
        match connection {
            Connection::None => ConnectionRepr {
                kind: ConnectionStrength::None,
                name: None,
                position: None,
            },
            Connection::Identified {
                strength,
                name,
                position,
            } => ConnectionRepr {
                kind: strength.strength(),
                name: Some(name),
                position: Some(position),
            },
        }
    }
}

/// Canonical job record served to every downstream consumer.
///
/// All required fields are populated by the gateway's normalization step;
/// a `Job` value never carries a missing display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: JobType,
    pub salary: String,
    pub logo_url: String,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
    pub posted_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    pub position: JobPosition,
    pub experience: Experience,
    pub industry: Industry,
    pub recruiter_activity: u8,
    pub connection: Connection,
    pub application_rate: u8,
    pub featured: bool,
}

impl Job {
    pub fn connection_strength(&self) -> ConnectionStrength {
        self.connection.strength()
    }
}
