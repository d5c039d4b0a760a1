//! Enumerated answers offered by the contact form's select controls.
//!
//! Each choice has a wire value (what the form posts) and a human label
//! (what the notification email shows).

use std::fmt;
use std::str::FromStr;

/// Error returned when a wire value is not one of the declared choices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {kind}")]
pub struct InvalidChoice {
    pub kind: &'static str,
    pub value: String,
}

/// Headcount bucket of the submitter's company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanySize {
    Micro,
    Small,
    Medium,
    Large,
    Enterprise,
}

impl CompanySize {
    pub const ALL: [Self; 5] = [
        Self::Micro,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::Enterprise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Micro => "1-10",
            Self::Small => "11-50",
            Self::Medium => "51-200",
            Self::Large => "201-1000",
            Self::Enterprise => "1000+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Micro => "1-10 employees",
            Self::Small => "11-50 employees",
            Self::Medium => "51-200 employees",
            Self::Large => "201-1000 employees",
            Self::Enterprise => "1000+ employees",
        }
    }
}

impl FromStr for CompanySize {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| InvalidChoice {
                kind: "company size",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How soon the submitter wants the project to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectTimeline {
    Immediate,
    OneToThreeMonths,
    ThreeToSixMonths,
    SixMonthsPlus,
}

impl ProjectTimeline {
    pub const ALL: [Self; 4] = [
        Self::Immediate,
        Self::OneToThreeMonths,
        Self::ThreeToSixMonths,
        Self::SixMonthsPlus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::OneToThreeMonths => "1-3months",
            Self::ThreeToSixMonths => "3-6months",
            Self::SixMonthsPlus => "6months+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Immediate => "Immediate",
            Self::OneToThreeMonths => "1-3 months",
            Self::ThreeToSixMonths => "3-6 months",
            Self::SixMonthsPlus => "6+ months",
        }
    }
}

impl FromStr for ProjectTimeline {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| InvalidChoice {
                kind: "project timeline",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for ProjectTimeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Budget range for the engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Budget {
    Under50k,
    From50kTo100k,
    From100kTo250k,
    From250kTo500k,
    Over500k,
}

impl Budget {
    pub const ALL: [Self; 5] = [
        Self::Under50k,
        Self::From50kTo100k,
        Self::From100kTo250k,
        Self::From250kTo500k,
        Self::Over500k,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Under50k => "<50k",
            Self::From50kTo100k => "50k-100k",
            Self::From100kTo250k => "100k-250k",
            Self::From250kTo500k => "250k-500k",
            Self::Over500k => "500k+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Under50k => "Less than $50k",
            Self::From50kTo100k => "$50k - $100k",
            Self::From100kTo250k => "$100k - $250k",
            Self::From250kTo500k => "$250k - $500k",
            Self::Over500k => "$500k+",
        }
    }
}

impl FromStr for Budget {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| InvalidChoice {
                kind: "budget",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_choice_parses_back_from_its_wire_value() {
        for size in CompanySize::ALL {
            assert_eq!(size.as_str().parse::<CompanySize>().unwrap(), size);
        }
        for timeline in ProjectTimeline::ALL {
            assert_eq!(
                timeline.as_str().parse::<ProjectTimeline>().unwrap(),
                timeline
            );
        }
        for budget in Budget::ALL {
            assert_eq!(budget.as_str().parse::<Budget>().unwrap(), budget);
        }
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        assert!("2-5".parse::<CompanySize>().is_err());
        assert!("Immediate".parse::<ProjectTimeline>().is_err());
        assert!("".parse::<Budget>().is_err());

        let err = "1M+".parse::<Budget>().unwrap_err();
        assert_eq!(err.to_string(), "'1M+' is not a valid budget");
    }

    #[test]
    fn test_labels() {
        assert_eq!(CompanySize::Enterprise.label(), "1000+ employees");
        assert_eq!(ProjectTimeline::SixMonthsPlus.label(), "6+ months");
        assert_eq!(Budget::Under50k.label(), "Less than $50k");
    }
}
