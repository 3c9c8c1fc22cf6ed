use crate::CommandResult;
use crate::cmdutil::{
    CommandContext, OutputFormat, SOURCE_OWNER_EXCLUSIVE, TARGET_OWNER_EXCLUSIVE, is_set,
    mutually_exclusive, parse_project_number,
};
use crate::output::{TablePrinter, json_project, write_json};
use crate::queries::{OwnerLogin, Project, ProjectPageVariables, documents};

use clap::Args;
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Args, Debug)]
pub struct CopyArgs {
    /// Number of the project to copy
    #[arg(allow_negative_numbers = true)]
    pub number: Option<String>,

    /// Login of the source user owner. Use "@me" for the current user.
    #[arg(long)]
    pub source_user: Option<String>,

    /// Login of the source organization owner
    #[arg(long)]
    pub source_org: Option<String>,

    /// Login of the target user owner. Use "@me" for the current user.
    #[arg(long)]
    pub target_user: Option<String>,

    /// Login of the target organization owner
    #[arg(long)]
    pub target_org: Option<String>,

    /// Title for the new project
    #[arg(long)]
    pub title: String,

    /// Include draft issues when copying
    #[arg(long)]
    pub drafts: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOpts {
    pub source: OwnerLogin,
    pub target: OwnerLogin,
    pub number: Option<i32>,
    pub title: String,
    pub include_draft_issues: bool,
    pub format: Option<OutputFormat>,
}

impl CopyArgs {
    pub fn into_opts(self) -> CommandResult<CopyOpts> {
        mutually_exclusive(
            SOURCE_OWNER_EXCLUSIVE,
            &[is_set(&self.source_user), is_set(&self.source_org)],
        )?;
        mutually_exclusive(
            TARGET_OWNER_EXCLUSIVE,
            &[is_set(&self.target_user), is_set(&self.target_org)],
        )?;
        let number = parse_project_number(self.number.as_deref())?;

        Ok(CopyOpts {
            source: OwnerLogin::from_flags(self.source_user, self.source_org),
            target: OwnerLogin::from_flags(self.target_user, self.target_org),
            number,
            title: self.title,
            include_draft_issues: self.drafts,
            format: self.format,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyProjectV2Input<'a> {
    pub owner_id: &'a str,
    pub project_id: &'a str,
    pub title: &'a str,
    pub include_draft_issues: bool,
}

#[derive(Serialize)]
struct CopyVariables<'a> {
    input: CopyProjectV2Input<'a>,
    #[serde(flatten)]
    page: ProjectPageVariables,
}

#[derive(Deserialize)]
struct CopyPayload {
    #[serde(rename = "projectV2", default)]
    project: Project,
}

#[derive(Deserialize)]
struct CopyData {
    #[serde(rename = "copyProjectV2")]
    payload: CopyPayload,
}

/// Copy the source owner's project into the target owner
pub async fn run_copy(ctx: &mut CommandContext<'_>, opts: &CopyOpts) -> CommandResult<()> {
    let source = ctx.client.new_owner(&opts.source, ctx.prompter).await?;
    let target = ctx.client.new_owner(&opts.target, ctx.prompter).await?;
    let project = ctx
        .client
        .new_project(&source, opts.number, ctx.prompter)
        .await?;

    let variables = CopyVariables {
        input: CopyProjectV2Input {
            owner_id: &target.id,
            project_id: &project.id,
            title: &opts.title,
            include_draft_issues: opts.include_draft_issues,
        },
        page: ProjectPageVariables::default(),
    };
    let data: CopyData = ctx
        .client
        .mutate("CopyProjectV2", documents::COPY_PROJECT, &variables)
        .await?;
    let copy = data.payload.project;
    info!("copied project {} to {} as #{}", project.id, target.login, copy.number);

    if opts.format == Some(OutputFormat::Json) {
        return write_json(ctx.out, &json_project(&copy)?);
    }

    let mut table = TablePrinter::new(ctx.out, ctx.is_tty);
    table
        .add_field(format!("Created project copy '{}'", copy.title))
        .end_row()
        .add_field(copy.url.as_str())
        .end_row();
    table.render()?;
    Ok(())
}
