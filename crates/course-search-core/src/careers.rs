//! Career title → CIP code mapping.
//!
//! A fixed table relating common career titles to the Classification of
//! Instructional Programs codes that prepare for them, plus search
//! keywords for each career. Lookups are case-insensitive and ignore
//! surrounding whitespace.
//!
//! # Matching
//!
//! [`cip_codes_for_career`] tries an exact title match first. Failing
//! that, an entry matches if the input contains *any* word of the entry's
//! title, so `"sales manager"` picks up every `... Manager` entry. This
//! is a loose heuristic and is kept that way on purpose for callers that
//! already rely on it.

use std::collections::HashSet;

/// One career and the programs and keywords associated with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareerMapping {
    /// Display title; unique across the table, compared case-insensitively.
    pub career: &'static str,
    /// CIP codes in preference order. No duplicates within an entry.
    pub cip_codes: &'static [&'static str],
    /// Extra search keywords for this career.
    pub keywords: &'static [&'static str],
}

pub const CAREER_MAPPINGS: &[CareerMapping] = &[
    // Technology & computer science
    CareerMapping {
        career: "Web Developer",
        cip_codes: &["11.0101", "11.0201", "11.0701", "11.0801"],
        keywords: &[
            "web", "developer", "software", "programming", "frontend", "backend", "fullstack",
            "javascript", "html", "css",
        ],
    },
    CareerMapping {
        career: "Software Engineer",
        cip_codes: &["11.0101", "11.0701"],
        keywords: &[
            "software", "engineer", "programming", "developer", "coding", "application",
            "systems",
        ],
    },
    CareerMapping {
        career: "Data Scientist",
        cip_codes: &["11.0101", "11.0701"],
        keywords: &[
            "data", "scientist", "analytics", "machine learning", "statistics", "python",
            "analysis",
        ],
    },
    CareerMapping {
        career: "Cybersecurity Specialist",
        cip_codes: &["11.0101", "11.0103", "11.0901"],
        keywords: &[
            "security", "cybersecurity", "network", "information security", "encryption",
            "protection",
        ],
    },
    CareerMapping {
        career: "Network Administrator",
        cip_codes: &["11.0101", "11.0901"],
        keywords: &["network", "administrator", "systems", "infrastructure", "servers", "IT"],
    },
    CareerMapping {
        career: "Database Administrator",
        cip_codes: &["11.0101", "11.0802"],
        keywords: &["database", "administrator", "SQL", "data management", "DBA"],
    },
    CareerMapping {
        career: "Mobile Developer",
        cip_codes: &["11.0101", "11.0701"],
        keywords: &["mobile", "developer", "iOS", "Android", "app development", "smartphone"],
    },
    CareerMapping {
        career: "IT Support Specialist",
        cip_codes: &["11.0101", "11.0103"],
        keywords: &[
            "IT", "support", "help desk", "technical support", "troubleshooting",
            "customer service",
        ],
    },
    // Healthcare
    CareerMapping {
        career: "Registered Nurse",
        cip_codes: &["51.1601", "51.3801"],
        keywords: &["nurse", "nursing", "RN", "healthcare", "patient care", "medical"],
    },
    CareerMapping {
        career: "Medical Assistant",
        cip_codes: &["51.0801"],
        keywords: &["medical assistant", "clinical", "healthcare", "patient", "medical office"],
    },
    CareerMapping {
        career: "Dental Hygienist",
        cip_codes: &["51.0602"],
        keywords: &["dental", "hygienist", "oral health", "teeth", "dentistry"],
    },
    CareerMapping {
        career: "Physical Therapist",
        cip_codes: &["51.2308"],
        keywords: &["physical therapy", "PT", "rehabilitation", "movement", "injury recovery"],
    },
    // Business
    CareerMapping {
        career: "Accountant",
        cip_codes: &["52.0301"],
        keywords: &["accounting", "accountant", "CPA", "finance", "bookkeeping", "tax"],
    },
    CareerMapping {
        career: "Marketing Manager",
        cip_codes: &["52.1401"],
        keywords: &["marketing", "manager", "advertising", "branding", "promotion", "social media"],
    },
    CareerMapping {
        career: "Business Analyst",
        cip_codes: &["52.0201"],
        keywords: &["business", "analyst", "data analysis", "strategy", "operations", "consulting"],
    },
    CareerMapping {
        career: "Human Resources Manager",
        cip_codes: &["52.1001"],
        keywords: &["human resources", "HR", "personnel", "recruiting", "employee", "benefits"],
    },
    // Engineering
    CareerMapping {
        career: "Electrical Engineer",
        cip_codes: &["14.1001"],
        keywords: &["electrical", "engineer", "circuits", "electronics", "power", "systems"],
    },
    CareerMapping {
        career: "Mechanical Engineer",
        cip_codes: &["14.1901"],
        keywords: &["mechanical", "engineer", "machines", "design", "manufacturing", "CAD"],
    },
    CareerMapping {
        career: "Civil Engineer",
        cip_codes: &["14.0801"],
        keywords: &["civil", "engineer", "construction", "infrastructure", "buildings", "roads"],
    },
    // Education
    CareerMapping {
        career: "Teacher",
        cip_codes: &["13.1202", "13.1210", "13.1301"],
        keywords: &["teacher", "education", "classroom", "instruction", "students", "curriculum"],
    },
    CareerMapping {
        career: "School Counselor",
        cip_codes: &["13.1101"],
        keywords: &["counselor", "guidance", "school", "student services", "academic advising"],
    },
    // Arts & media
    CareerMapping {
        career: "Graphic Designer",
        cip_codes: &["50.0401", "10.0303"],
        keywords: &["graphic", "designer", "visual design", "adobe", "creative", "branding"],
    },
    CareerMapping {
        career: "Digital Media Artist",
        cip_codes: &["11.0801", "50.0401"],
        keywords: &[
            "digital media", "artist", "animation", "video", "multimedia", "content creation",
        ],
    },
    // Hospitality & tourism
    CareerMapping {
        career: "Hotel Manager",
        cip_codes: &["52.0901"],
        keywords: &["hotel", "hospitality", "manager", "tourism", "lodging", "guest services"],
    },
    CareerMapping {
        career: "Chef",
        cip_codes: &["12.0500"],
        keywords: &["chef", "culinary", "cooking", "cuisine", "kitchen", "food service"],
    },
    // Science
    CareerMapping {
        career: "Biologist",
        cip_codes: &["26.0101"],
        keywords: &["biology", "biologist", "life science", "research", "laboratory", "organisms"],
    },
    CareerMapping {
        career: "Environmental Scientist",
        cip_codes: &["03.0103"],
        keywords: &[
            "environmental", "scientist", "ecology", "conservation", "sustainability", "nature",
        ],
    },
];

fn normalize_career(career: &str) -> String {
    career.to_lowercase().trim().to_string()
}

/// Entry whose title equals `career`, ignoring case and surrounding whitespace.
pub fn find_career(career: &str) -> Option<&'static CareerMapping> {
    let career = normalize_career(career);
    CAREER_MAPPINGS
        .iter()
        .find(|m| m.career.to_lowercase() == career)
}

/// CIP codes relevant to `career`.
///
/// An exact title match returns that entry's codes verbatim. Otherwise
/// every entry sharing at least one title word with the input contributes
/// its codes, flattened in table order with repeats removed. Unknown
/// careers yield an empty list.
pub fn cip_codes_for_career(career: &str) -> Vec<&'static str> {
    if let Some(mapping) = find_career(career) {
        return mapping.cip_codes.to_vec();
    }

    let career = normalize_career(career);
    let mut seen = HashSet::new();
    CAREER_MAPPINGS
        .iter()
        .filter(|m| {
            m.career
                .to_lowercase()
                .split_whitespace()
                .any(|word| career.contains(word))
        })
        .flat_map(|m| m.cip_codes.iter().copied())
        .filter(|code| seen.insert(*code))
        .collect()
}

/// Search keywords for `career`: the input's own words followed by the
/// keywords of the first related entry.
///
/// An entry is related if its title equals the input, is contained in the
/// input, or contains the input. Table order decides between several
/// related entries. With no related entry only the input words come back.
///
/// Blank input yields a single empty word and, since every title contains
/// the empty string, the first entry's keywords.
pub fn enhanced_keywords_for_career(career: &str) -> Vec<String> {
    let career = normalize_career(career);
    // Blank input still contributes one (empty) word.
    let mut keywords: Vec<String> = if career.is_empty() {
        vec![String::new()]
    } else {
        career.split_whitespace().map(str::to_string).collect()
    };

    let related = CAREER_MAPPINGS.iter().find(|m| {
        let title = m.career.to_lowercase();
        title == career || career.contains(title.as_str()) || title.contains(career.as_str())
    });

    if let Some(mapping) = related {
        keywords.extend(mapping.keywords.iter().map(|k| k.to_string()));
    }
    keywords
}

/// Whether [`cip_codes_for_career`] finds anything for `career`.
pub fn has_career_mapping(career: &str) -> bool {
    !cip_codes_for_career(career).is_empty()
}
