use serde::{Deserialize, Serialize};

/// A club event or activity shown on the public site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub image_url: String,
    pub category: String,
}

/// Uncommitted form values for a program. `id` is None while creating a new
/// record and holds the edited record's id otherwise. Empty strings mean the
/// field was left blank.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgramDraft {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub date: String,
    pub image_url: String,
    pub category: String,
}

impl ProgramDraft {
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn get(&self, field: ProgramField) -> &str {
        match field {
            ProgramField::Title => &self.title,
            ProgramField::Date => &self.date,
            ProgramField::Category => &self.category,
            ProgramField::ImageUrl => &self.image_url,
            ProgramField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: ProgramField, value: String) {
        match field {
            ProgramField::Title => self.title = value,
            ProgramField::Date => self.date = value,
            ProgramField::Category => self.category = value,
            ProgramField::ImageUrl => self.image_url = value,
            ProgramField::Description => self.description = value,
        }
    }
}

impl From<&Program> for ProgramDraft {
    fn from(program: &Program) -> Self {
        Self {
            id: Some(program.id.clone()),
            title: program.title.clone(),
            description: program.description.clone(),
            date: program.date.clone(),
            image_url: program.image_url.clone(),
            category: program.category.clone(),
        }
    }
}

/// Editable fields of the program form, in on-screen order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramField {
    Title,
    Date,
    Category,
    ImageUrl,
    Description,
}

impl ProgramField {
    pub const ALL: [ProgramField; 5] = [
        ProgramField::Title,
        ProgramField::Date,
        ProgramField::Category,
        ProgramField::ImageUrl,
        ProgramField::Description,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProgramField::Title => "Title",
            ProgramField::Date => "Date",
            ProgramField::Category => "Category",
            ProgramField::ImageUrl => "Image URL",
            ProgramField::Description => "Description",
        }
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
