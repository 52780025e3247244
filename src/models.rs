use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::LATEST_COUNT;

/// One repository as listed by the GitHub API.
///
/// Only the fields needed for rendering are kept; everything else in the
/// response body is dropped during deserialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    /// Human-facing page of the repository (`html_url`), not the API url
    #[serde(rename = "html_url")]
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl RepositoryRecord {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        RepositoryRecord {
            name: name.into(),
            url: url.into(),
            description: None,
            created_at: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Description text for display, blank when the repository has none
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// How the fetched list is shaped before it reaches the view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListVariant {
    /// Response order, unmodified
    #[default]
    All,
    /// Newest repositories first, truncated to [`LATEST_COUNT`]
    LatestFive,
}

impl ListVariant {
    pub fn apply(self, records: Vec<RepositoryRecord>) -> Vec<RepositoryRecord> {
        match self {
            ListVariant::All => records,
            ListVariant::LatestFive => latest(records, LATEST_COUNT),
        }
    }
}

/// Sort by `created_at` descending and keep the first `count` records.
///
/// Records without a timestamp sort after every timestamped record.
pub fn latest(mut records: Vec<RepositoryRecord>, count: usize) -> Vec<RepositoryRecord> {
    // Option orders None first, so reversing the comparison puts None last
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    records.truncate(count);
    records
}

/// Dice available on the dice roller panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiceKind {
    D3,
    D4,
    D8,
    D12,
    D20,
    D100,
}

impl DiceKind {
    pub const ALL: [DiceKind; 6] = [
        DiceKind::D3,
        DiceKind::D4,
        DiceKind::D8,
        DiceKind::D12,
        DiceKind::D20,
        DiceKind::D100,
    ];

    pub fn sides(&self) -> u32 {
        match self {
            DiceKind::D3 => 3,
            DiceKind::D4 => 4,
            DiceKind::D8 => 8,
            DiceKind::D12 => 12,
            DiceKind::D20 => 20,
            DiceKind::D100 => 100,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DiceKind::D3 => "D3",
            DiceKind::D4 => "D4",
            DiceKind::D8 => "D8",
            DiceKind::D12 => "D12",
            DiceKind::D20 => "D20",
            DiceKind::D100 => "D100",
        }
    }

    /// Key bound to this die on the dice panel
    pub fn key(&self) -> char {
        match self {
            DiceKind::D3 => '3',
            DiceKind::D4 => '4',
            DiceKind::D8 => '8',
            DiceKind::D12 => 'c',
            DiceKind::D20 => '0',
            DiceKind::D100 => 'h',
        }
    }

    pub fn from_key(key: char) -> Option<DiceKind> {
        DiceKind::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

/// A labelled link shown in the profile header
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Link {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Static "about me" content drawn above the panels
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub location: String,
    pub links: Vec<Link>,
    pub bio: Vec<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            name: String::from("Nico Judge"),
            headline: String::from("Full Stack Software Engineer"),
            location: String::from("Baltimore, MD"),
            links: vec![
                Link::new("GitHub", "https://github.com/sirjudge"),
                Link::new("Email", "mailto:nico.a.judge@gmail.com"),
            ],
            bio: vec![String::from(
                "I build fast, performant applications and tooling that help developers \
                 ship better software.",
            )],
        }
    }
}
