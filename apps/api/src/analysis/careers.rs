//! Career suggestions per trait.
//!
//! Every trait resolves its list through `CareerSelector::select`, so the
//! threshold-based neuroticism entry goes through the same path as the
//! fixed lists.

use crate::analysis::traits::Trait;

/// How a trait's normalized score maps to a career list.
#[derive(Debug, Clone, Copy)]
pub enum CareerSelector {
    Fixed(&'static [&'static str]),
    /// `high` is chosen only when the score is strictly above `threshold`.
    Threshold {
        threshold: f64,
        low: &'static [&'static str],
        high: &'static [&'static str],
    },
}

impl CareerSelector {
    pub fn select(&self, normalized_score: f64) -> &'static [&'static str] {
        match *self {
            CareerSelector::Fixed(list) => list,
            CareerSelector::Threshold {
                threshold,
                low,
                high,
            } => {
                if normalized_score > threshold {
                    high
                } else {
                    low
                }
            }
        }
    }
}

/// Returns the selector registered for a trait.
pub fn career_selector(t: Trait) -> CareerSelector {
    match t {
        Trait::Openness => CareerSelector::Fixed(OPENNESS_CAREERS),
        Trait::Conscientiousness => CareerSelector::Fixed(CONSCIENTIOUSNESS_CAREERS),
        Trait::Extraversion => CareerSelector::Fixed(EXTRAVERSION_CAREERS),
        Trait::Agreeableness => CareerSelector::Fixed(AGREEABLENESS_CAREERS),
        Trait::Neuroticism => CareerSelector::Threshold {
            threshold: NEUROTICISM_THRESHOLD,
            low: NEUROTICISM_LOW_CAREERS,
            high: NEUROTICISM_HIGH_CAREERS,
        },
    }
}

const NEUROTICISM_THRESHOLD: f64 = 50.0;

const OPENNESS_CAREERS: &[&str] = &[
    "Artist (Painter, Musician, Writer)",
    "Graphic Designer / UX Designer",
    "Research Scientist",
    "Entrepreneur / Startup Founder",
    "Psychologist / Philosopher",
    "Architect",
    "Filmmaker / Director",
    "Marketing Strategist",
];

const CONSCIENTIOUSNESS_CAREERS: &[&str] = &[
    "Accountant / Auditor",
    "Project Manager",
    "Software Engineer",
    "Surgeon",
    "Lawyer",
    "Civil Servant / Bureaucrat",
    "Engineer (any field)",
    "Data Analyst",
];

const EXTRAVERSION_CAREERS: &[&str] = &[
    "Salesperson",
    "Public Relations Manager",
    "Actor / Performer",
    "Politician",
    "Event Planner",
    "Human Resources Professional",
    "News Anchor / TV Host",
    "Business Executive",
];

const AGREEABLENESS_CAREERS: &[&str] = &[
    "Nurse / Doctor",
    "Social Worker",
    "Teacher / Professor",
    "Therapist / Counselor",
    "Humanitarian / NGO Worker",
    "Customer Service Rep",
    "Veterinarian",
    "Childcare Worker",
];

const NEUROTICISM_LOW_CAREERS: &[&str] = &["Emergency Room Doctor", "Pilot", "Military Officer"];

const NEUROTICISM_HIGH_CAREERS: &[&str] = &[
    "Writer / Poet",
    "Artist",
    "Researcher (in a calm setting)",
    "Librarian",
    "Archivist",
];
