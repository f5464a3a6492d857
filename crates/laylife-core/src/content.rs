//! Static site content the search index is built from.
//!
//! Every table here is a compile-time constant and changes only with a
//! redeploy. Tables are listed in the order their records appear in the
//! index.

use crate::types::Icon;

/// A page-like entry: site pages, services, news items, impact stories and
/// legal documents all share this shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub icon: Icon,
}

/// An open position listed on the careers page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobOpening {
    pub title: &'static str,
    /// Short department name as shown in listings, e.g. `R&D`.
    pub department: &'static str,
    pub location: &'static str,
    pub employment: Employment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Employment {
    FullTime,
}

impl std::fmt::Display for Employment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Employment::FullTime => write!(f, "Full-time"),
        }
    }
}

/// Anchor every job opening links to.
pub const CAREERS_POSITIONS_URL: &str = "/careers#positions";

const fn entry(
    title: &'static str,
    description: &'static str,
    url: &'static str,
    icon: Icon,
) -> StaticEntry {
    StaticEntry { title, description, url, icon }
}

pub const PAGES: &[StaticEntry] = &[
    entry(
        "Home",
        "Welcome to Laylife Pharmaceutical - Transforming Healthcare Across Nigeria",
        "/",
        Icon::Building,
    ),
    entry(
        "About Us",
        "Our mission to reimagine healthcare for Nigeria's future",
        "/#about",
        Icon::Building,
    ),
    entry(
        "Leadership",
        "Meet Dr. Adam Muhammed Bedemasi, CEO and Founder",
        "/leadership",
        Icon::Users,
    ),
    entry(
        "Careers",
        "Join our team and shape the future of African healthcare",
        "/careers",
        Icon::Briefcase,
    ),
    entry(
        "Contact Us",
        "Get in touch with Laylife Pharmaceutical",
        "/#contact",
        Icon::Building,
    ),
];

pub const SERVICES: &[StaticEntry] = &[
    entry(
        "Pharmaceutical Manufacturing",
        "State-of-the-art facilities producing high-quality medicines meeting international standards",
        "/services/manufacturing",
        Icon::Building,
    ),
    entry(
        "Research & Development",
        "Pioneering drug discovery focused on diseases prevalent in African populations",
        "/services/research",
        Icon::FileText,
    ),
    entry(
        "Quality Assurance",
        "Rigorous testing protocols ensuring every product meets global standards",
        "/services/quality-assurance",
        Icon::FileText,
    ),
    entry(
        "Distribution Network",
        "Efficient logistics reaching healthcare providers across Nigeria",
        "/services/distribution",
        Icon::Building,
    ),
    entry(
        "Patient Support",
        "Comprehensive programs helping patients access and manage their treatments",
        "/services/patient-support",
        Icon::Users,
    ),
];

pub const NEWS: &[StaticEntry] = &[
    entry(
        "WHO Vaccine Distribution Partnership",
        "A landmark agreement to expand vaccine access across all 36 Nigerian states",
        "/news/who-vaccine-distribution",
        Icon::Newspaper,
    ),
    entry(
        "Malaria Treatment Breakthrough",
        "Clinical trials reveal promising results for our new antimalarial compound",
        "/news/malaria-treatment-breakthrough",
        Icon::Newspaper,
    ),
    entry(
        "NAFDAC Partnership",
        "Enhanced collaboration to ensure highest pharmaceutical standards across Nigeria",
        "/news/nafdac-partnership",
        Icon::Newspaper,
    ),
    entry(
        "All News & Insights",
        "View all our latest news, research updates, and company announcements",
        "/news",
        Icon::Newspaper,
    ),
];

pub const IMPACT: &[StaticEntry] = &[
    entry(
        "Community Health Impact",
        "How we're transforming community health across Nigerian states",
        "/story/community-health",
        Icon::Users,
    ),
    entry(
        "Affordable Medicine Initiative",
        "Making quality medicines accessible to every Nigerian",
        "/story/affordable-medicine",
        Icon::FileText,
    ),
];

pub const LEGAL: &[StaticEntry] = &[
    entry(
        "Privacy Policy",
        "How we protect your personal information",
        "/privacy-policy",
        Icon::FileText,
    ),
    entry(
        "Terms of Service",
        "Terms and conditions for using our services",
        "/terms",
        Icon::FileText,
    ),
    entry(
        "Medical Disclaimer",
        "Important health and medical information disclaimer",
        "/medical-disclaimer",
        Icon::FileText,
    ),
];

pub const JOB_OPENINGS: &[JobOpening] = &[
    JobOpening {
        title: "Senior Research Scientist",
        department: "R&D",
        location: "Abuja",
        employment: Employment::FullTime,
    },
    JobOpening {
        title: "Quality Assurance Manager",
        department: "Manufacturing",
        location: "Lagos",
        employment: Employment::FullTime,
    },
    JobOpening {
        title: "Regional Sales Director",
        department: "Commercial",
        location: "Abuja",
        employment: Employment::FullTime,
    },
    JobOpening {
        title: "Clinical Trial Coordinator",
        department: "Medical Affairs",
        location: "Abuja",
        employment: Employment::FullTime,
    },
];

impl JobOpening {
    /// One-line summary used as the search description,
    /// e.g. `R&D position in Abuja - Full-time`.
    pub fn summary(&self) -> String {
        format!(
            "{} position in {} - {}",
            self.department, self.location, self.employment
        )
    }
}
