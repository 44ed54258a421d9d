use crate::exceptions::GenericError;
use crate::macros::internal_get_kincsek_setting;
use crate::models::{Program, ProgramDraft};
use log::{debug, info};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Title and description are required!";

/// Values given to optional fields a new program's form left blank
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramDefaults {
    pub category: String,
    pub image_url: String,
}

impl ProgramDefaults {
    pub fn from_env() -> Self {
        Self {
            category: internal_get_kincsek_setting!(KINCSEK_DEFAULT_PROGRAM_CATEGORY),
            image_url: internal_get_kincsek_setting!(KINCSEK_DEFAULT_PROGRAM_IMAGE),
        }
    }
}

impl Default for ProgramDefaults {
    fn default() -> Self {
        Self {
            category: crate::config::KINCSEK_DEFAULT_PROGRAM_CATEGORY.to_string(),
            image_url: crate::config::KINCSEK_DEFAULT_PROGRAM_IMAGE.to_string(),
        }
    }
}

/// Id derived from the creation time, bumped until no existing program uses it
pub fn generate_id(programs: &[Program], now_millis: i64) -> String {
    let mut candidate = now_millis;
    while programs.iter().any(|p| p.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

/// Commit a draft into the program list.
///
/// A draft with an id replaces the matching record in place; a draft without
/// one is appended as a new record with a generated id and defaults for the
/// blank optional fields. Title and description are required; when either is
/// blank the list is left untouched and a `Validation` error is returned.
pub fn save_draft(
    programs: &[Program],
    draft: &ProgramDraft,
    defaults: &ProgramDefaults,
    now_millis: i64,
) -> Result<Vec<Program>, GenericError> {
    if draft.title.trim().is_empty() || draft.description.trim().is_empty() {
        return Err(GenericError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
    }

    match &draft.id {
        Some(id) => {
            debug!("Updating program {}", id);
            Ok(programs
                .iter()
                .map(|p| {
                    if &p.id == id {
                        Program {
                            id: id.clone(),
                            title: draft.title.clone(),
                            description: draft.description.clone(),
                            date: draft.date.clone(),
                            image_url: draft.image_url.clone(),
                            category: draft.category.clone(),
                        }
                    } else {
                        p.clone()
                    }
                })
                .collect())
        }
        None => {
            let program = Program {
                id: generate_id(programs, now_millis),
                title: draft.title.clone(),
                description: draft.description.clone(),
                date: draft.date.clone(),
                image_url: or_default(&draft.image_url, &defaults.image_url),
                category: or_default(&draft.category, &defaults.category),
            };
            info!("Created program {} ({})", program.title, program.id);
            let mut updated = programs.to_vec();
            updated.push(program);
            Ok(updated)
        }
    }
}

pub fn remove_program(programs: &[Program], id: &str) -> Vec<Program> {
    programs.iter().filter(|p| p.id != id).cloned().collect()
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}
