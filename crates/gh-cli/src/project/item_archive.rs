use crate::CommandResult;
use crate::cmdutil::{
    CommandContext, OWNER_EXCLUSIVE, OutputFormat, is_set, mutually_exclusive,
    parse_project_number,
};
use crate::output::{TablePrinter, json_project_item, write_json};
use crate::queries::{OwnerLogin, ProjectItem, documents};

use clap::Args;
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Args, Debug)]
pub struct ItemArchiveArgs {
    /// Number of the project
    #[arg(allow_negative_numbers = true)]
    pub number: Option<String>,

    /// Login of the user owner. Use "@me" for the current user.
    #[arg(long)]
    pub user: Option<String>,

    /// Login of the organization owner
    #[arg(long)]
    pub org: Option<String>,

    /// ID of the item to archive
    #[arg(long)]
    pub id: String,

    /// Unarchive an item
    #[arg(long)]
    pub undo: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemArchiveOpts {
    pub owner: OwnerLogin,
    pub number: Option<i32>,
    pub item_id: String,
    pub undo: bool,
    pub format: Option<OutputFormat>,
}

impl ItemArchiveArgs {
    pub fn into_opts(self) -> CommandResult<ItemArchiveOpts> {
        mutually_exclusive(
            OWNER_EXCLUSIVE,
            &[is_set(&self.user), is_set(&self.org)],
        )?;
        let number = parse_project_number(self.number.as_deref())?;

        Ok(ItemArchiveOpts {
            owner: OwnerLogin::from_flags(self.user, self.org),
            number,
            item_id: self.id,
            undo: self.undo,
            format: self.format,
        })
    }
}

/// Input shared by the archive and unarchive mutations
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItemInput<'a> {
    pub project_id: &'a str,
    pub item_id: &'a str,
}

#[derive(Serialize)]
struct ItemMutationVariables<'a> {
    input: ProjectItemInput<'a>,
}

#[derive(Deserialize)]
struct ItemPayload {
    #[serde(default)]
    item: ProjectItem,
}

#[derive(Deserialize)]
struct ItemMutationData {
    #[serde(rename = "archiveProjectV2Item", alias = "unarchiveProjectV2Item")]
    payload: ItemPayload,
}

pub async fn run_archive_item(
    ctx: &mut CommandContext<'_>,
    opts: &ItemArchiveOpts,
) -> CommandResult<()> {
    let owner = ctx.client.new_owner(&opts.owner, ctx.prompter).await?;
    let project = ctx
        .client
        .new_project(&owner, opts.number, ctx.prompter)
        .await?;

    let variables = ItemMutationVariables {
        input: ProjectItemInput {
            project_id: &project.id,
            item_id: &opts.item_id,
        },
    };
    let (operation, document) = match opts.undo {
        true => ("UnarchiveProjectItem", documents::UNARCHIVE_ITEM),
        false => ("ArchiveProjectItem", documents::ARCHIVE_ITEM),
    };
    let data: ItemMutationData = ctx.client.mutate(operation, document, &variables).await?;
    let item = data.payload.item;
    info!("{operation} succeeded for item {}", item.id);

    if opts.format == Some(OutputFormat::Json) {
        return write_json(ctx.out, &json_project_item(&item)?);
    }

    let message = match opts.undo {
        true => "Unarchived item",
        false => "Archived item",
    };
    let mut table = TablePrinter::new(ctx.out, ctx.is_tty);
    table.add_field(message).end_row();
    table.render()?;
    Ok(())
}
