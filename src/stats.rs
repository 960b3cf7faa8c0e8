use std::collections::HashMap;

use itertools::Itertools;

use crate::lead::RawLead;
use crate::parser::channels::{self, Route};

pub struct RouteCounts {
    total: usize,
    counts: HashMap<Route, usize>,
}

impl RouteCounts {
    pub fn from_rows(rows: &[RawLead]) -> Self {
        let counts = rows
            .iter()
            .map(|row| channels::classify(&row.title))
            .counts();
        RouteCounts {
            total: rows.len(),
            counts,
        }
    }

    pub fn get(&self, route: Route) -> usize {
        self.counts.get(&route).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn suppressed(&self) -> usize {
        self.counts
            .iter()
            .filter(|(route, _)| matches!(route, Route::Suppress(_)))
            .map(|(_, n)| n)
            .sum()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("## Classification\n");
        out.push_str(&format!(
            "- Rows: {}\n- Suppressed: {} ({:.1}%)\n",
            self.total(),
            self.suppressed(),
            percent(self.suppressed(), self.total())
        ));
        out.push_str("\n### By route\n");
        for route in channels::all_routes() {
            let n = self.get(route);
            out.push_str(&format!(
                "- {}: {} ({:.1}%)\n",
                route.label(),
                n,
                percent(n, self.total())
            ));
        }
        out
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}
