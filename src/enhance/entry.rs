//! Staggered fade-in of cards and the table on load.

use crate::util::animation::{ENTRY_SELECTOR, animate_in, entry_delay_ms};
use crate::util::dom::{self, DomError};

/// Schedule [`animate_in`] for every entry element, `stagger_ms` apart.
///
/// # Errors
///
/// Propagates DOM lookup failures.
pub fn install(stagger_ms: u32) -> Result<usize, DomError> {
    let elements = dom::query_all(ENTRY_SELECTOR)?;
    let count = elements.len();
    for (index, element) in elements.into_iter().enumerate() {
        animate_in(element, entry_delay_ms(index, stagger_ms));
    }
    Ok(count)
}
