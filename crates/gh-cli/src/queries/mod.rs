//! Owner and project resolution shared by the project commands.

pub(crate) mod documents;
mod owner;
mod project;
mod types;

pub use owner::{Owner, OwnerKind, OwnerLogin};
pub use types::{
    FieldOption, ItemContent, PageInfo, Project, ProjectField, ProjectItem, ProjectOwner,
    ProjectPageVariables, Repository, TotalCount,
};

/// Page size for owner and project listings
const PAGE_SIZE: i32 = 100;
const VIEWER_ALIAS: &str = "@me";
const OWNER_PROMPT: &str = "Which owner would you like to use?";
const PROJECT_PROMPT: &str = "Which project would you like to use?";
