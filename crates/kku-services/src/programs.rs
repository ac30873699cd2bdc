//! Static program catalog and the program-finder filters.

use kku_core::error::GatewayError;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramLevel {
    Bachelor,
    Master,
    Doctoral,
}

impl ProgramLevel {
    pub const ALL: [ProgramLevel; 3] = [Self::Bachelor, Self::Master, Self::Doctoral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bachelor => "bachelor",
            Self::Master => "master",
            Self::Doctoral => "doctoral",
        }
    }
}

impl FromStr for ProgramLevel {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| GatewayError::InvalidInput(format!("unknown level: {s}")))
    }
}

/// Language of instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TeachingLanguage {
    Korean,
    English,
    Both,
}

impl TeachingLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Korean => "korean",
            Self::English => "english",
            Self::Both => "both",
        }
    }
}

impl FromStr for TeachingLanguage {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "korean" => Ok(Self::Korean),
            "english" => Ok(Self::English),
            "both" => Ok(Self::Both),
            other => Err(GatewayError::InvalidInput(format!("unknown language: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    pub id: u32,
    pub title: &'static str,
    pub level: ProgramLevel,
    pub duration: &'static str,
    /// KRW per semester.
    pub tuition: u64,
    pub language: TeachingLanguage,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub static CATALOG: &[Program] = &[
    Program {
        id: 1,
        title: "Business Administration",
        level: ProgramLevel::Bachelor,
        duration: "4 years",
        tuition: 3_000_000,
        language: TeachingLanguage::Both,
        description:
            "Comprehensive business education with focus on global markets and entrepreneurship.",
        features: &["International Business", "Marketing", "Finance", "Entrepreneurship"],
    },
    Program {
        id: 2,
        title: "Computer Science",
        level: ProgramLevel::Bachelor,
        duration: "4 years",
        tuition: 3_500_000,
        language: TeachingLanguage::English,
        description: "Cutting-edge technology education with hands-on programming and AI focus.",
        features: &[
            "AI & Machine Learning",
            "Software Engineering",
            "Data Science",
            "Cybersecurity",
        ],
    },
    Program {
        id: 3,
        title: "International Relations",
        level: ProgramLevel::Bachelor,
        duration: "4 years",
        tuition: 2_800_000,
        language: TeachingLanguage::Both,
        description: "Study global politics, diplomacy, and international cooperation.",
        features: &["Diplomacy", "Global Politics", "International Law", "Area Studies"],
    },
    Program {
        id: 4,
        title: "Mechanical Engineering",
        level: ProgramLevel::Bachelor,
        duration: "4 years",
        tuition: 3_200_000,
        language: TeachingLanguage::Korean,
        description: "Advanced engineering education with strong industry connections.",
        features: &["Robotics", "Manufacturing", "CAD/CAM", "Industrial Design"],
    },
    Program {
        id: 5,
        title: "Korean Language & Culture",
        level: ProgramLevel::Bachelor,
        duration: "4 years",
        tuition: 2_500_000,
        language: TeachingLanguage::Korean,
        description: "Immersive study of Korean language, history, and culture.",
        features: &["Language Studies", "Korean History", "K-Culture", "Translation"],
    },
    Program {
        id: 6,
        title: "MBA (Master of Business Administration)",
        level: ProgramLevel::Master,
        duration: "2 years",
        tuition: 5_000_000,
        language: TeachingLanguage::English,
        description: "Executive MBA program for experienced professionals.",
        features: &["Leadership", "Strategic Management", "Global Business", "Innovation"],
    },
    Program {
        id: 7,
        title: "Data Science",
        level: ProgramLevel::Master,
        duration: "2 years",
        tuition: 4_500_000,
        language: TeachingLanguage::English,
        description: "Advanced data analytics and machine learning program.",
        features: &["Big Data", "Machine Learning", "Data Visualization", "Statistical Analysis"],
    },
    Program {
        id: 8,
        title: "International Development",
        level: ProgramLevel::Master,
        duration: "2 years",
        tuition: 4_000_000,
        language: TeachingLanguage::English,
        description: "Graduate program focused on sustainable development and global cooperation.",
        features: &[
            "Sustainable Development",
            "Policy Analysis",
            "Project Management",
            "Research Methods",
        ],
    },
    Program {
        id: 9,
        title: "Computer Engineering (Ph.D.)",
        level: ProgramLevel::Doctoral,
        duration: "3-4 years",
        tuition: 4_000_000,
        language: TeachingLanguage::English,
        description: "Research-focused doctoral program in cutting-edge computing.",
        features: &["Advanced AI", "Quantum Computing", "Research", "Publications"],
    },
    Program {
        id: 10,
        title: "Business Strategy (Ph.D.)",
        level: ProgramLevel::Doctoral,
        duration: "3-4 years",
        tuition: 4_500_000,
        language: TeachingLanguage::English,
        description: "Doctoral research in business strategy and organizational behavior.",
        features: &[
            "Strategic Research",
            "Organizational Theory",
            "Academic Publishing",
            "Teaching",
        ],
    },
];

/// Finder criteria. `None` means "all".
#[derive(Debug, Clone, Default)]
pub struct ProgramFilter {
    pub level: Option<ProgramLevel>,
    pub language: Option<TeachingLanguage>,
    pub query: String,
}

impl ProgramFilter {
    /// Parse the finder's query-string values; `"all"` and empty mean no restriction.
    pub fn parse(
        level: Option<&str>,
        language: Option<&str>,
        query: Option<&str>,
    ) -> Result<Self, GatewayError> {
        let level = match level {
            None | Some("") | Some("all") => None,
            Some(s) => Some(s.parse()?),
        };
        let language = match language {
            None | Some("") | Some("all") => None,
            Some(s) => Some(s.parse()?),
        };
        Ok(Self {
            level,
            language,
            query: query.unwrap_or_default().to_string(),
        })
    }

    pub fn matches(&self, program: &Program) -> bool {
        let level_ok = self.level.map_or(true, |l| program.level == l);
        // Bilingual programs satisfy every language selection.
        let language_ok = self.language.map_or(true, |l| {
            program.language == l || program.language == TeachingLanguage::Both
        });
        let needle = self.query.to_lowercase();
        let query_ok = program.title.to_lowercase().contains(&needle)
            || program.description.to_lowercase().contains(&needle);
        level_ok && language_ok && query_ok
    }
}

/// Catalog entries passing `criteria`, in catalog order.
pub fn filter(criteria: &ProgramFilter) -> Vec<&'static Program> {
    CATALOG.iter().filter(|p| criteria.matches(p)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelCounts {
    pub all: usize,
    pub bachelor: usize,
    pub master: usize,
    pub doctoral: usize,
}

/// Catalog size per level, independent of any filter.
pub fn level_counts() -> LevelCounts {
    let count = |level| CATALOG.iter().filter(|p| p.level == level).count();
    LevelCounts {
        all: CATALOG.len(),
        bachelor: count(ProgramLevel::Bachelor),
        master: count(ProgramLevel::Master),
        doctoral: count(ProgramLevel::Doctoral),
    }
}
