//! Screen identifiers and the screen registry.
//!
//! [`ScreenId`] is the closed set of navigable views. [`ScreenRegistry`]
//! maps each one to its header title and the function that draws it.

mod registry;

pub use registry::{Renderer, ScreenEntry, ScreenRegistry};

/// Identifies one of the navigable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Home,
    Records,
    Prescriptions,
    LabResults,
    Appointments,
    Profile,
    Messages,
}

impl ScreenId {
    pub const ALL: [ScreenId; 7] = [
        ScreenId::Home,
        ScreenId::Records,
        ScreenId::Prescriptions,
        ScreenId::LabResults,
        ScreenId::Appointments,
        ScreenId::Profile,
        ScreenId::Messages,
    ];

    /// Stable identifier used in logs and on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            ScreenId::Home => "home",
            ScreenId::Records => "records",
            ScreenId::Prescriptions => "prescriptions",
            ScreenId::LabResults => "lab-results",
            ScreenId::Appointments => "appointments",
            ScreenId::Profile => "profile",
            ScreenId::Messages => "messages",
        }
    }

    /// Parse a slug. Unknown slugs yield `None`; use
    /// [`ScreenRegistry::resolve`] for the fallback-to-home behaviour.
    pub fn from_slug(slug: &str) -> Option<Self> {
        ScreenId::ALL.into_iter().find(|screen| screen.slug() == slug)
    }
}

impl std::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Footer navigation items: (screen, label, key).
pub const NAV_ITEMS: [(ScreenId, &str, char); 5] = [
    (ScreenId::Home, "Home", '1'),
    (ScreenId::Records, "Records", '2'),
    (ScreenId::Prescriptions, "Meds", '3'),
    (ScreenId::Appointments, "Visits", '4'),
    (ScreenId::Profile, "Profile", '5'),
];
