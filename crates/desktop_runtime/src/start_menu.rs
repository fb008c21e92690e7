//! Start menu open/filter state. Launch intents go through the reducer.

use serde::{Deserialize, Serialize};

use crate::apps::{launcher_apps, AppDescriptor};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StartMenuState {
    pub open: bool,
    pub query: String,
}

impl StartMenuState {
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open = true;
        }
    }

    /// Closes the menu and clears the filter.
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Launcher entries whose label contains the query, ignoring case.
    pub fn visible_entries(&self) -> Vec<AppDescriptor> {
        filter_launcher_apps(&self.query)
    }
}

pub fn filter_launcher_apps(query: &str) -> Vec<AppDescriptor> {
    let needle = query.trim().to_lowercase();
    launcher_apps()
        .into_iter()
        .filter(|app| needle.is_empty() || app.launcher_label.to_lowercase().contains(&needle))
        .collect()
}
