use crate::anchors::Anchor;
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum GenericError {
    MissingAnchor(Anchor),
    UnsupportedLocale(String),
    DateNotSelectable(NaiveDate),
    UnknownTimeSlot(String),
    ParseError(String),
    IoError(String),
    RuntimeError(String),
}

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAnchor(anchor) => write!(f, "Missing anchor: {}", anchor.name()),
            Self::UnsupportedLocale(tag) => write!(f, "Unsupported locale: {tag}"),
            Self::DateNotSelectable(date) => {
                write!(f, "Date {date} is not selectable in the current view")
            }
            Self::UnknownTimeSlot(label) => write!(f, "Unknown time slot: {label}"),
            Self::ParseError(s) => write!(f, "ParseError: {s}"),
            Self::IoError(s) => write!(f, "IoError: {s}"),
            Self::RuntimeError(s) => write!(f, "Runtime Error: {s}"),
        }
    }
}

impl std::error::Error for GenericError {}

impl From<std::io::Error> for GenericError {
    fn from(e: std::io::Error) -> Self {
        Self::IoError(e.to_string())
    }
}

impl From<serde_json::Error> for GenericError {
    fn from(e: serde_json::Error) -> Self {
        Self::ParseError(e.to_string())
    }
}
