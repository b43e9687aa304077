//! Transient per-screen UI state, modeled as immutable values updated by
//! discrete events. Render models are then a pure function of
//! (snapshot, screen state); the screens themselves never own derived data.

use crate::metrics::FILTER_ALL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentsScreen {
    pub search_query: String,
    pub class_filter: String,
    pub selected_student: Option<String>,
    pub show_add_modal: bool,
}

impl Default for StudentsScreen {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            class_filter: FILTER_ALL.to_string(),
            selected_student: None,
            show_add_modal: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentsEvent {
    SearchChanged(String),
    ClassFilterChanged(String),
    StudentSelected(Option<String>),
    AddModalToggled(bool),
}

impl StudentsScreen {
    pub fn apply(self, event: StudentsEvent) -> Self {
        match event {
            StudentsEvent::SearchChanged(q) => Self {
                search_query: q,
                ..self
            },
            StudentsEvent::ClassFilterChanged(f) => Self {
                class_filter: f,
                ..self
            },
            StudentsEvent::StudentSelected(id) => Self {
                selected_student: id,
                ..self
            },
            StudentsEvent::AddModalToggled(v) => Self {
                show_add_modal: v,
                ..self
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentsTab {
    Requests,
    Recent,
}

impl PaymentsTab {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Requests => "requests",
            Self::Recent => "recent",
        }
    }

    /// Unknown tab names fall back to the default tab rather than erroring.
    pub fn parse(s: &str) -> Self {
        match s {
            "recent" => Self::Recent,
            _ => Self::Requests,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentsScreen {
    pub active_tab: PaymentsTab,
    pub search_query: String,
    pub status_filter: String,
    pub selected_request: Option<String>,
    pub show_create_modal: bool,
}

impl Default for PaymentsScreen {
    fn default() -> Self {
        Self {
            active_tab: PaymentsTab::Requests,
            search_query: String::new(),
            status_filter: FILTER_ALL.to_string(),
            selected_request: None,
            show_create_modal: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentsEvent {
    TabChanged(PaymentsTab),
    SearchChanged(String),
    StatusFilterChanged(String),
    RequestSelected(Option<String>),
    CreateModalToggled(bool),
}

impl PaymentsScreen {
    pub fn apply(self, event: PaymentsEvent) -> Self {
        match event {
            PaymentsEvent::TabChanged(tab) => Self {
                active_tab: tab,
                ..self
            },
            PaymentsEvent::SearchChanged(q) => Self {
                search_query: q,
                ..self
            },
            PaymentsEvent::StatusFilterChanged(f) => Self {
                status_filter: f,
                ..self
            },
            PaymentsEvent::RequestSelected(id) => Self {
                selected_request: id,
                ..self
            },
            PaymentsEvent::CreateModalToggled(v) => Self {
                show_create_modal: v,
                ..self
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassroomsTab {
    Stream,
    Materials,
    Attendance,
}

impl ClassroomsTab {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stream => "stream",
            Self::Materials => "materials",
            Self::Attendance => "attendance",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "materials" => Self::Materials,
            "attendance" => Self::Attendance,
            _ => Self::Stream,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassroomsScreen {
    pub selected_class: Option<String>,
    pub active_tab: Option<ClassroomsTab>,
    pub show_create_modal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassroomsEvent {
    ClassSelected(Option<String>),
    TabChanged(ClassroomsTab),
    CreateModalToggled(bool),
}

impl ClassroomsScreen {
    pub fn apply(self, event: ClassroomsEvent) -> Self {
        match event {
            ClassroomsEvent::ClassSelected(id) => Self {
                selected_class: id.clone(),
                // Opening a class always lands on the stream tab.
                active_tab: id.map(|_| ClassroomsTab::Stream),
                ..self
            },
            ClassroomsEvent::TabChanged(tab) => Self {
                active_tab: Some(tab),
                ..self
            },
            ClassroomsEvent::CreateModalToggled(v) => Self {
                show_create_modal: v,
                ..self
            },
        }
    }
}

/// The settings screen's sheet-style modals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsModal {
    EditProfile,
    Language,
    Help,
}

impl SettingsModal {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EditProfile => "editProfile",
            Self::Language => "language",
            Self::Help => "help",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "editProfile" => Some(Self::EditProfile),
            "language" => Some(Self::Language),
            "help" => Some(Self::Help),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsScreen {
    pub notifications: bool,
    pub dark_mode: bool,
    pub language: String,
    pub open_modal: Option<SettingsModal>,
}

impl Default for SettingsScreen {
    fn default() -> Self {
        Self {
            notifications: true,
            dark_mode: false,
            language: "English".to_string(),
            open_modal: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    NotificationsToggled(bool),
    DarkModeToggled(bool),
    LanguageChanged(String),
    ModalOpened(Option<SettingsModal>),
}

impl SettingsScreen {
    pub fn apply(self, event: SettingsEvent) -> Self {
        match event {
            SettingsEvent::NotificationsToggled(v) => Self {
                notifications: v,
                ..self
            },
            SettingsEvent::DarkModeToggled(v) => Self {
                dark_mode: v,
                ..self
            },
            SettingsEvent::LanguageChanged(lang) => Self {
                language: lang,
                ..self
            },
            SettingsEvent::ModalOpened(modal) => Self {
                open_modal: modal,
                ..self
            },
        }
    }
}

/// All screens' transient state, reset wholesale when a snapshot loads.
#[derive(Debug, Clone, Default)]
pub struct Screens {
    pub students: StudentsScreen,
    pub payments: PaymentsScreen,
    pub classrooms: ClassroomsScreen,
    pub settings: SettingsScreen,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn students_events_replace_only_their_field() {
        let s0 = StudentsScreen::default();
        let s1 = s0
            .clone()
            .apply(StudentsEvent::SearchChanged("pri".into()));
        assert_eq!(s1.search_query, "pri");
        assert_eq!(s1.class_filter, "All");

        let s2 = s1.apply(StudentsEvent::ClassFilterChanged("Grade 10".into()));
        assert_eq!(s2.search_query, "pri");
        assert_eq!(s2.class_filter, "Grade 10");
    }

    #[test]
    fn reapplying_same_events_is_deterministic() {
        let run = || {
            PaymentsScreen::default()
                .apply(PaymentsEvent::TabChanged(PaymentsTab::Recent))
                .apply(PaymentsEvent::SearchChanged("fees".into()))
                .apply(PaymentsEvent::StatusFilterChanged("Overdue".into()))
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn selecting_a_class_resets_to_stream_tab() {
        let s = ClassroomsScreen::default()
            .apply(ClassroomsEvent::ClassSelected(Some("1".into())))
            .apply(ClassroomsEvent::TabChanged(ClassroomsTab::Materials));
        assert_eq!(s.active_tab, Some(ClassroomsTab::Materials));

        let reopened = s.apply(ClassroomsEvent::ClassSelected(Some("2".into())));
        assert_eq!(reopened.active_tab, Some(ClassroomsTab::Stream));

        let closed = reopened.apply(ClassroomsEvent::ClassSelected(None));
        assert_eq!(closed.active_tab, None);
    }

    #[test]
    fn unknown_tab_names_fall_back_to_default() {
        assert_eq!(PaymentsTab::parse("recent"), PaymentsTab::Recent);
        assert_eq!(PaymentsTab::parse("bogus"), PaymentsTab::Requests);
        assert_eq!(ClassroomsTab::parse("materials"), ClassroomsTab::Materials);
        assert_eq!(ClassroomsTab::parse("attendance"), ClassroomsTab::Attendance);
        assert_eq!(ClassroomsTab::parse(""), ClassroomsTab::Stream);
    }

    #[test]
    fn settings_modal_opens_and_closes() {
        let s = SettingsScreen::default()
            .apply(SettingsEvent::ModalOpened(Some(SettingsModal::Language)));
        assert_eq!(s.open_modal, Some(SettingsModal::Language));
        // Other preferences survive the modal changing.
        assert!(s.notifications);

        let closed = s.apply(SettingsEvent::ModalOpened(None));
        assert_eq!(closed.open_modal, None);

        assert_eq!(SettingsModal::parse("help"), Some(SettingsModal::Help));
        assert_eq!(SettingsModal::parse("bogus"), None);
    }
}
