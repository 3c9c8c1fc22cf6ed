use crate::cmdutil::{
    CommandContext, OWNER_EXCLUSIVE, OutputFormat, is_set, mutually_exclusive,
    parse_project_number,
};
use crate::output::{TablePrinter, json_project_field, write_json};
use crate::queries::{OwnerLogin, ProjectField, documents};
use crate::{CommandError, CommandResult};

use clap::{Args, ValueEnum};
use log::info;
use serde::{Deserialize, Serialize};

const OPTION_COLOR: &str = "GRAY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldDataType {
    #[value(name = "TEXT")]
    Text,
    #[value(name = "SINGLE_SELECT")]
    SingleSelect,
    #[value(name = "DATE")]
    Date,
    #[value(name = "NUMBER")]
    Number,
}

#[derive(Args, Debug)]
pub struct FieldCreateArgs {
    /// Number of the project
    #[arg(allow_negative_numbers = true)]
    pub number: Option<String>,

    /// Login of the user owner. Use "@me" for the current user.
    #[arg(long)]
    pub user: Option<String>,

    /// Login of the organization owner
    #[arg(long)]
    pub org: Option<String>,

    /// Name of the new field
    #[arg(long)]
    pub name: String,

    /// DataType of the new field
    #[arg(long, value_enum, ignore_case = true)]
    pub data_type: FieldDataType,

    /// Options for SINGLE_SELECT data type
    #[arg(long, value_delimiter = ',')]
    pub single_select_options: Vec<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCreateOpts {
    pub owner: OwnerLogin,
    pub number: Option<i32>,
    pub name: String,
    pub data_type: FieldDataType,
    pub single_select_options: Vec<String>,
    pub format: Option<OutputFormat>,
}

impl FieldCreateArgs {
    pub fn into_opts(self) -> CommandResult<FieldCreateOpts> {
        mutually_exclusive(
            OWNER_EXCLUSIVE,
            &[is_set(&self.user), is_set(&self.org)],
        )?;
        let number = parse_project_number(self.number.as_deref())?;

        let options = self
            .single_select_options
            .into_iter()
            .filter(|o| !o.is_empty())
            .collect::<Vec<_>>();
        if self.data_type == FieldDataType::SingleSelect && options.is_empty() {
            return Err(CommandError::validation(
                "passing `--single-select-options` is required for SINGLE_SELECT data type",
            ));
        }

        Ok(FieldCreateOpts {
            owner: OwnerLogin::from_flags(self.user, self.org),
            number,
            name: self.name,
            data_type: self.data_type,
            single_select_options: options,
            format: self.format,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct SingleSelectOptionInput<'a> {
    pub name: &'a str,
    pub color: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectV2FieldInput<'a> {
    pub project_id: &'a str,
    pub data_type: FieldDataType,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_select_options: Option<Vec<SingleSelectOptionInput<'a>>>,
}

#[derive(Serialize)]
struct CreateFieldVariables<'a> {
    input: CreateProjectV2FieldInput<'a>,
}

#[derive(Deserialize)]
struct CreateFieldPayload {
    #[serde(rename = "projectV2Field")]
    field: ProjectField,
}

#[derive(Deserialize)]
struct CreateFieldData {
    #[serde(rename = "createProjectV2Field")]
    payload: CreateFieldPayload,
}

pub async fn run_create_field(
    ctx: &mut CommandContext<'_>,
    opts: &FieldCreateOpts,
) -> CommandResult<()> {
    let owner = ctx.client.new_owner(&opts.owner, ctx.prompter).await?;
    let project = ctx
        .client
        .new_project(&owner, opts.number, ctx.prompter)
        .await?;

    let single_select_options = (!opts.single_select_options.is_empty()).then(|| {
        opts.single_select_options
            .iter()
            .map(|name| SingleSelectOptionInput {
                name,
                color: OPTION_COLOR,
            })
            .collect()
    });
    let variables = CreateFieldVariables {
        input: CreateProjectV2FieldInput {
            project_id: &project.id,
            data_type: opts.data_type,
            name: &opts.name,
            single_select_options,
        },
    };
    let data: CreateFieldData = ctx
        .client
        .mutate("CreateField", documents::CREATE_FIELD, &variables)
        .await?;
    let field = data.payload.field;
    info!("created field {} in project {}", field.id(), project.id);

    if opts.format == Some(OutputFormat::Json) {
        return write_json(ctx.out, &json_project_field(&field)?);
    }

    let mut table = TablePrinter::new(ctx.out, ctx.is_tty);
    table.add_field("Created field").end_row();
    table.render()?;
    Ok(())
}
