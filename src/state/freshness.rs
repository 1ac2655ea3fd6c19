//! "Last updated" texts for the freshness targets.

use crate::config::Labels;
use crate::util::format::LocalStamp;

#[cfg(test)]
#[path = "freshness_test.rs"]
mod freshness_test;

/// Selector of the labelled last-update banner.
pub const LAST_UPDATE_SELECTOR: &str = ".last-update";
/// Selector of the unlabelled summary card value.
pub const LAST_UPDATE_SUMMARY_SELECTOR: &str = ".last-update-summary";
/// Id of the "today" date element.
pub const TODAY_ELEMENT_ID: &str = "data-hoje";

/// Text for each freshness target at one instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FreshnessText {
    pub last_update: String,
    pub summary: String,
    pub today: String,
}

impl FreshnessText {
    #[must_use]
    pub fn render(stamp: &LocalStamp, labels: &Labels) -> Self {
        let date_time = stamp.date_time();
        Self {
            last_update: format!("{}{date_time}", labels.last_update_prefix),
            summary: date_time,
            today: stamp.date(),
        }
    }
}
