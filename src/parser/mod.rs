pub mod channels;
pub mod extract;

use tracing::debug;

use crate::lead::{LeadRecord, RawLead};
use channels::Route;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Classify one message and build its record. `None` means the message type is suppressed.
pub fn process_lead(raw: &RawLead) -> Option<LeadRecord> {
    let route = channels::classify(&raw.title);
    debug!(route = route.label(), title = %raw.title, "classified");
    match route {
        Route::Extract(channel) => {
            let lead = extract::extract(channel, &raw.body);
            if lead.is_empty() {
                debug!(route = route.label(), "no fields matched");
            }
            Some(lead)
        }
        Route::Suppress(_) => None,
        Route::PassThrough => Some(LeadRecord::pass_through(raw)),
    }
}

#[cfg(feature = "rayon")]
pub fn process_all(rows: &[RawLead]) -> Vec<LeadRecord> {
    rows.par_iter().filter_map(process_lead).collect()
}

#[cfg(not(feature = "rayon"))]
pub fn process_all(rows: &[RawLead]) -> Vec<LeadRecord> {
    process_sequential(rows)
}

#[cfg_attr(feature = "rayon", allow(dead_code))]
fn process_sequential(rows: &[RawLead]) -> Vec<LeadRecord> {
    rows.iter().filter_map(process_lead).collect()
}
