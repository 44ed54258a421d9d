/// This config file lists out all the default values for the main KINCSEK env configs
/// All can be overridden by an ENV var of the same name. Some can also be overridden
/// from the command line. These should only be primitive types
///

/// directory holding the file-backed key-value store
pub static KINCSEK_DATA_DIR: &'static str = ".kincsek";

/// admin password checked by the login gate. Empty means nobody can log in
pub static KINCSEK_ADMIN_PASSWORD: &'static str = "";

/// category given to a new program when the form leaves it blank
pub static KINCSEK_DEFAULT_PROGRAM_CATEGORY: &'static str = "Általános";

/// image given to a new program when the form leaves it blank
pub static KINCSEK_DEFAULT_PROGRAM_IMAGE: &'static str = "https://picsum.photos/seed/art/800/600";

/// number of leads previewed on the overview tab
pub static KINCSEK_RECENT_LEADS_LIMIT: usize = 5;
