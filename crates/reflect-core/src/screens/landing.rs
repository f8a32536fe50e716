use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::Screen;

/// One entry point offered on the landing screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandingAction {
    pub label: &'static str,
    pub destination: Screen,
}

/// Landing screen content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandingView {
    /// e.g. "Saturday, October 18"
    pub date_label: String,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub actions: Vec<LandingAction>,
}

impl LandingView {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date_label: format!("{}, {} {}", date.format("%A"), date.format("%B"), date.day()),
            headline: "Share your emotions.",
            tagline: "A safe space to express your feelings anonymously. \
                      Let go of the past week, and start fresh.",
            actions: vec![
                LandingAction {
                    label: "Throw a photo",
                    destination: Screen::Throw,
                },
                LandingAction {
                    label: "Weekly collage",
                    destination: Screen::Collage,
                },
            ],
        }
    }

    pub fn today() -> Self {
        Self::for_date(chrono::Local::now().date_naive())
    }
}
