use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Founder {
    pub name: String,
    pub image: String,
}

/// The two founders have fixed identities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FounderId {
    Edina,
    Zita,
}

impl FounderId {
    pub fn label(&self) -> &'static str {
        match self {
            FounderId::Edina => "Edina",
            FounderId::Zita => "Zita",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            FounderId::Edina => FounderId::Zita,
            FounderId::Zita => FounderId::Edina,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Founders {
    pub edina: Founder,
    pub zita: Founder,
}

impl Default for Founders {
    fn default() -> Self {
        Self {
            edina: Founder {
                name: "Edina".to_string(),
                image: "https://picsum.photos/seed/edina/400/400".to_string(),
            },
            zita: Founder {
                name: "Zita".to_string(),
                image: "https://picsum.photos/seed/zita/400/400".to_string(),
            },
        }
    }
}

impl Founders {
    pub fn get(&self, id: FounderId) -> &Founder {
        match id {
            FounderId::Edina => &self.edina,
            FounderId::Zita => &self.zita,
        }
    }

    /// Replace both profile images at once, keeping every other field
    pub fn with_images(&self, edina_image: String, zita_image: String) -> Self {
        Self {
            edina: Founder {
                image: edina_image,
                ..self.edina.clone()
            },
            zita: Founder {
                image: zita_image,
                ..self.zita.clone()
            },
        }
    }
}

/// Severity style of the site-wide banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementType {
    #[default]
    Info,
    Urgent,
    Success,
}

impl AnnouncementType {
    pub fn label(&self) -> &'static str {
        match self {
            AnnouncementType::Info => "Info",
            AnnouncementType::Urgent => "Urgent",
            AnnouncementType::Success => "Success",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            AnnouncementType::Info => AnnouncementType::Urgent,
            AnnouncementType::Urgent => AnnouncementType::Success,
            AnnouncementType::Success => AnnouncementType::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub text: String,
    pub is_active: bool,
    #[serde(rename = "type")]
    pub kind: AnnouncementType,
}
