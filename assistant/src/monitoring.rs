//! Monitor schedule form for automatically pulling new files into review.

#[cfg(test)]
#[path = "monitoring_test.rs"]
mod monitoring_test;

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

impl Frequency {
    pub const ALL: [Self; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    #[default]
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceLocation {
    #[default]
    Vault,
    IManage,
    SharePoint,
    GoogleDrive,
}

impl SourceLocation {
    pub const ALL: [Self; 4] = [Self::Vault, Self::IManage, Self::SharePoint, Self::GoogleDrive];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Vault => "Vault",
            Self::IManage => "iManage",
            Self::SharePoint => "SharePoint",
            Self::GoogleDrive => "Google Drive",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Only run extraction over files added since the last run.
    #[default]
    New,
    All,
}

impl ExtractionMode {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::New => "Only run extraction over new files",
            Self::All => "Run extraction over all files",
        }
    }
}

/// Hour of day in 24-hour time, shown on a 12-hour clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HourOfDay(u8);

impl HourOfDay {
    pub const FIRST: Self = Self(6);
    pub const LAST: Self = Self(18);

    /// `None` outside the selectable 6:00 AM to 6:00 PM window.
    #[must_use]
    pub fn new(hour: u8) -> Option<Self> {
        (Self::FIRST.0..=Self::LAST.0).contains(&hour).then_some(Self(hour))
    }

    #[must_use]
    pub fn hour(self) -> u8 {
        self.0
    }

    /// Every selectable hour, in order.
    pub fn options() -> impl Iterator<Item = Self> {
        (Self::FIRST.0..=Self::LAST.0).map(Self)
    }
}

impl Default for HourOfDay {
    fn default() -> Self {
        Self(8)
    }
}

impl fmt::Display for HourOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = if self.0 < 12 { "AM" } else { "PM" };
        let hour = match self.0 % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{hour}:00 {suffix}")
    }
}

/// Settings captured by the monitoring dialog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorSchedule {
    pub frequency: Frequency,
    pub hour: HourOfDay,
    pub day: Weekday,
    pub source: SourceLocation,
    pub extraction: ExtractionMode,
    pub email_updates: bool,
    pub notifications: bool,
}

impl Default for MonitorSchedule {
    fn default() -> Self {
        Self {
            frequency: Frequency::default(),
            hour: HourOfDay::default(),
            day: Weekday::default(),
            source: SourceLocation::default(),
            extraction: ExtractionMode::default(),
            email_updates: true,
            notifications: true,
        }
    }
}

/// Monitor attached to a review grid, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Monitor {
    active: Option<MonitorSchedule>,
}

impl Monitor {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn schedule(&self) -> Option<&MonitorSchedule> {
        self.active.as_ref()
    }

    /// Label of the dialog's primary button.
    #[must_use]
    pub fn primary_label(&self) -> &'static str {
        if self.is_active() { "Update monitor" } else { "Create monitor" }
    }

    #[must_use]
    pub fn can_remove(&self) -> bool {
        self.is_active()
    }

    /// Form values to open the dialog with.
    #[must_use]
    pub fn draft(&self) -> MonitorSchedule {
        self.active.clone().unwrap_or_default()
    }

    /// Create or replace the monitor.
    pub fn save(&mut self, schedule: MonitorSchedule) {
        tracing::debug!(frequency = schedule.frequency.label(), hour = %schedule.hour, "monitor saved");
        self.active = Some(schedule);
    }

    pub fn remove(&mut self) {
        self.active = None;
    }
}
