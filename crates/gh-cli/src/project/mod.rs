//! `gh project` subcommands.

mod copy;
mod field_create;
mod item_archive;

pub use copy::{CopyArgs, CopyOpts, run_copy};
pub use field_create::{FieldCreateArgs, FieldCreateOpts, FieldDataType, run_create_field};
pub use item_archive::{ItemArchiveArgs, ItemArchiveOpts, run_archive_item};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// Copy a project
    Copy(CopyArgs),
    /// Create a field in a project
    FieldCreate(FieldCreateArgs),
    /// Archive an item in a project
    ItemArchive(ItemArchiveArgs),
}
