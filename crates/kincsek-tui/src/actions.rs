/// Core Action types for the flux architecture.
/// All state mutations flow through Actions dispatched to the Dispatcher.
use kincsek_core::models::{
    Announcement, FounderId, Founders, Lead, LeadStatus, Program, ProgramField,
};

/// Represents all possible user intents and system events in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ===== UI Actions (user-initiated) =====
    /// User switched to a different tab
    SwitchTab(TabId),

    /// User toggled the help overlay
    ToggleHelp,

    /// User started typing into a text field
    StartEditing(FieldId),

    /// User left the text field they were typing into
    StopEditing,

    /// New value of a text field
    UpdateInput(FieldId, String),

    /// User asked for stored leads and gallery to be read again
    ReloadFromStorage,

    /// User confirmed the open dialog
    ConfirmDialog,

    /// User dismissed the open dialog
    DismissDialog,

    // ===== Auth =====
    SubmitLogin,

    // ===== Leads =====
    SelectLead(usize),
    SetLeadStatus { id: String, status: LeadStatus },
    DeleteLead(String),

    // ===== Programs =====
    SelectProgram(usize),
    /// Open the program form, seeded from the program with this id or empty
    OpenProgramEditor(Option<String>),
    FocusProgramField(ProgramField),
    UpdateProgramDraft(ProgramField, String),
    SaveProgram,
    CloseProgramEditor,
    DeleteProgram(String),

    // ===== Gallery =====
    SelectGalleryImage(usize),
    AddGalleryImage,
    RemoveGalleryImage(usize),

    // ===== Founders & announcement =====
    FocusFounder(FounderId),
    SaveFounders,
    ToggleAnnouncementActive,
    CycleAnnouncementType,
    SaveAnnouncement,

    // ===== System/Effect Actions (emitted by Effects) =====
    LoginSucceeded,

    /// Lead list as read from storage
    LeadsLoaded(Vec<Lead>),

    /// Gallery as read from storage
    GalleryLoaded(Vec<String>),

    // The *Committed actions below are only dispatched once the new value
    // has been written to storage
    LeadsCommitted(Vec<Lead>),

    /// Gallery after an image was appended
    GalleryImageAdded(Vec<String>),

    /// Gallery after an image was removed
    GalleryCommitted(Vec<String>),

    ProgramsCommitted(Vec<Program>),

    FoundersCommitted(Founders),

    AnnouncementCommitted(Announcement),

    /// Blocking message the user has to dismiss
    ShowAlert(String),

    /// Yes/no prompt; the boxed action is dispatched on confirmation
    RequestConfirm {
        message: String,
        on_confirm: Box<Action>,
    },

    /// Application should exit
    Quit,
}

/// Identifies different tabs in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    Overview,
    Leads,
    Programs,
    Gallery,
    Founders,
    Settings,
}

impl TabId {
    pub const ALL: [TabId; 6] = [
        TabId::Overview,
        TabId::Leads,
        TabId::Programs,
        TabId::Gallery,
        TabId::Founders,
        TabId::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            TabId::Overview => "Overview",
            TabId::Leads => "Leads",
            TabId::Programs => "Programs",
            TabId::Gallery => "Gallery",
            TabId::Founders => "Founders",
            TabId::Settings => "Settings",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Single-line text inputs outside the program form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Password,
    LeadSearch,
    GalleryUrl,
    FounderImage(FounderId),
    AnnouncementText,
}
