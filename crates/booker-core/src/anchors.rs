/// Anchor points the scheduler needs from its host before it will mount.
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    TimeSlots,
    MonthLabel,
    CalendarGrid,
    PreviousMonth,
    NextMonth,
    Proceed,
}

impl Anchor {
    pub const ALL: [Anchor; 6] = [
        Anchor::TimeSlots,
        Anchor::MonthLabel,
        Anchor::CalendarGrid,
        Anchor::PreviousMonth,
        Anchor::NextMonth,
        Anchor::Proceed,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::TimeSlots => "time-slots",
            Self::MonthLabel => "month-label",
            Self::CalendarGrid => "calendar-grid",
            Self::PreviousMonth => "previous-month",
            Self::NextMonth => "next-month",
            Self::Proceed => "proceed",
        }
    }
}

/// Anything that can host the scheduler: a page, a terminal layout, a test double.
pub trait AnchorHost {
    fn has_anchor(&self, anchor: Anchor) -> bool;
}

/// Returns the first required anchor the host does not provide
pub fn first_missing(host: &impl AnchorHost) -> Option<Anchor> {
    Anchor::ALL.into_iter().find(|a| !host.has_anchor(*a))
}

/// Set-backed host, mostly useful for headless callers and tests
#[derive(Debug, Clone, Default)]
pub struct AnchorSet {
    present: HashSet<Anchor>,
}

impl AnchorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host that provides every anchor
    pub fn complete() -> Self {
        Self {
            present: Anchor::ALL.into_iter().collect(),
        }
    }

    pub fn with(mut self, anchor: Anchor) -> Self {
        self.present.insert(anchor);
        self
    }

    pub fn without(mut self, anchor: Anchor) -> Self {
        self.present.remove(&anchor);
        self
    }
}

impl AnchorHost for AnchorSet {
    fn has_anchor(&self, anchor: Anchor) -> bool {
        self.present.contains(&anchor)
    }
}
