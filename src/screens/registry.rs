//! Dispatch table from [`ScreenId`] to title and renderer.

use ratatui::{layout::Rect, Frame};

use super::ScreenId;
use crate::app::App;
use crate::ui::screens;

/// Draws one screen's body into the given area.
pub type Renderer = fn(&mut Frame, Rect, &App);

/// One row of the registry.
#[derive(Clone, Copy)]
pub struct ScreenEntry {
    pub id: ScreenId,
    /// Title shown in the shell header.
    pub title: &'static str,
    pub render: Renderer,
}

impl std::fmt::Debug for ScreenEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenEntry")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// Maps screens to their title and renderer.
///
/// Lookups are total: a screen without an entry resolves to the home entry,
/// which must always be present.
#[derive(Debug, Clone)]
pub struct ScreenRegistry {
    entries: Vec<ScreenEntry>,
    home: usize,
}

impl Default for ScreenRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenRegistry {
    /// Registry covering every [`ScreenId`].
    pub fn new() -> Self {
        let entries = vec![
            ScreenEntry {
                id: ScreenId::Home,
                title: "Dashboard",
                render: screens::dashboard::render,
            },
            ScreenEntry {
                id: ScreenId::Records,
                title: "Medical Records",
                render: screens::records::render,
            },
            ScreenEntry {
                id: ScreenId::Prescriptions,
                title: "My Prescriptions",
                render: screens::prescriptions::render,
            },
            ScreenEntry {
                id: ScreenId::LabResults,
                title: "Lab Results",
                render: screens::lab_results::render,
            },
            ScreenEntry {
                id: ScreenId::Appointments,
                title: "My Appointments",
                render: screens::appointments::render,
            },
            ScreenEntry {
                id: ScreenId::Profile,
                title: "My Profile",
                render: screens::profile::render,
            },
            ScreenEntry {
                id: ScreenId::Messages,
                title: "Messages",
                render: screens::messages::render,
            },
        ];
        Self { entries, home: 0 }
    }

    /// Build a registry from an explicit entry list.
    ///
    /// Returns `None` when no entry is registered for [`ScreenId::Home`],
    /// since home is the fallback for every other lookup.
    pub fn from_entries(entries: Vec<ScreenEntry>) -> Option<Self> {
        let home = entries.iter().position(|e| e.id == ScreenId::Home)?;
        Some(Self { entries, home })
    }

    /// Entry for `screen`, or the home entry if none is registered.
    pub fn entry_for(&self, screen: ScreenId) -> &ScreenEntry {
        self.entries
            .iter()
            .find(|e| e.id == screen)
            .unwrap_or_else(|| {
                tracing::warn!("no screen registered for {}, falling back to home", screen);
                &self.entries[self.home]
            })
    }

    pub fn title_for(&self, screen: ScreenId) -> &'static str {
        self.entry_for(screen).title
    }

    pub fn renderer_for(&self, screen: ScreenId) -> Renderer {
        self.entry_for(screen).render
    }

    /// Resolve a slug to a registered screen, falling back to home.
    pub fn resolve(&self, slug: &str) -> ScreenId {
        ScreenId::from_slug(slug)
            .map(|screen| self.entry_for(screen).id)
            .unwrap_or(self.entries[self.home].id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_screen_has_its_own_entry() {
        let registry = ScreenRegistry::new();
        assert_eq!(registry.len(), ScreenId::ALL.len());
        for screen in ScreenId::ALL {
            assert_eq!(registry.entry_for(screen).id, screen);
        }
    }

    #[test]
    fn test_titles() {
        let registry = ScreenRegistry::new();
        assert_eq!(registry.title_for(ScreenId::Home), "Dashboard");
        assert_eq!(registry.title_for(ScreenId::Records), "Medical Records");
        assert_eq!(registry.title_for(ScreenId::Prescriptions), "My Prescriptions");
        assert_eq!(registry.title_for(ScreenId::LabResults), "Lab Results");
        assert_eq!(registry.title_for(ScreenId::Appointments), "My Appointments");
        assert_eq!(registry.title_for(ScreenId::Profile), "My Profile");
        assert_eq!(registry.title_for(ScreenId::Messages), "Messages");
    }

    #[test]
    fn test_unregistered_screen_falls_back_to_home() {
        let full = ScreenRegistry::new();
        let partial = ScreenRegistry::from_entries(vec![
            *full.entry_for(ScreenId::Home),
            *full.entry_for(ScreenId::Profile),
        ])
        .expect("home is registered");

        assert_eq!(partial.title_for(ScreenId::Messages), "Dashboard");
        assert_eq!(partial.entry_for(ScreenId::LabResults).id, ScreenId::Home);
        assert_eq!(partial.title_for(ScreenId::Profile), "My Profile");
    }

    #[test]
    fn test_registry_without_home_is_rejected() {
        let full = ScreenRegistry::new();
        let entries = vec![*full.entry_for(ScreenId::Records)];
        assert!(ScreenRegistry::from_entries(entries).is_none());
    }

    #[test]
    fn test_resolve_unknown_slug_falls_back_to_home() {
        let registry = ScreenRegistry::new();
        assert_eq!(registry.resolve("lab-results"), ScreenId::LabResults);
        assert_eq!(registry.resolve("billing"), ScreenId::Home);
        assert_eq!(registry.title_for(registry.resolve("billing")), "Dashboard");
    }
}
