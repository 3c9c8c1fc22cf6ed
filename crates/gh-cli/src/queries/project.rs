use crate::queries::owner::OwnerScoped;
use crate::queries::{
    Owner, OwnerKind, PAGE_SIZE, PROJECT_PROMPT, Project, ProjectPageVariables, documents,
};
use crate::{CliClientResult, Client, ClientError, CommandError, CommandResult};

use gh_prompt::{Prompter, SelectOpts};

use log::info;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct ProjectVariables<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    login: Option<&'a str>,
    number: i32,
    #[serde(flatten)]
    page: ProjectPageVariables,
}

#[derive(Serialize)]
struct ProjectListVariables<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    login: Option<&'a str>,
    first: i32,
    #[serde(flatten)]
    page: ProjectPageVariables,
}

#[derive(Deserialize)]
struct ProjectNode {
    #[serde(rename = "projectV2")]
    project: Option<Project>,
}

#[derive(Deserialize)]
struct ProjectNodes {
    #[serde(default)]
    nodes: Vec<Project>,
}

#[derive(Deserialize)]
struct ProjectsNode {
    #[serde(rename = "projectsV2")]
    projects: ProjectNodes,
}

impl Owner {
    /// Login variable for owner-scoped queries; the viewer needs none
    fn login_variable(&self) -> Option<&str> {
        match self.kind {
            OwnerKind::Viewer => None,
            OwnerKind::User | OwnerKind::Organization => Some(self.login.as_str()),
        }
    }
}

impl Client {
    // =========================================================================
    // Project Resolution
    // =========================================================================

    /// Resolve an owner-scoped project number to a project.
    ///
    /// Without a number the user picks one of the owner's projects, which
    /// requires a prompter.
    pub async fn new_project(
        &self,
        owner: &Owner,
        number: Option<i32>,
        prompter: Option<&dyn Prompter>,
    ) -> CommandResult<Project> {
        let project = match number {
            Some(number) => self.project_by_number(owner, number).await?,
            None => {
                let prompter = prompter.ok_or_else(|| {
                    CommandError::validation(
                        "project number is required when not running interactively",
                    )
                })?;
                self.prompt_project(owner, prompter).await?
            }
        };

        info!("resolved project #{} ({})", project.number, project.id);
        Ok(project)
    }

    async fn project_by_number(&self, owner: &Owner, number: i32) -> CliClientResult<Project> {
        let (operation, document) = match owner.kind {
            OwnerKind::Viewer => ("ViewerProject", documents::VIEWER_PROJECT),
            OwnerKind::User => ("UserProject", documents::USER_PROJECT),
            OwnerKind::Organization => ("OrgProject", documents::ORG_PROJECT),
        };
        let variables = ProjectVariables {
            login: owner.login_variable(),
            number,
            page: ProjectPageVariables::default(),
        };

        let data: OwnerScoped<ProjectNode> = self.query(operation, document, &variables).await?;
        data.into_inner()
            .and_then(|node| node.project)
            .ok_or_else(|| {
                ClientError::not_found(format!(
                    "could not find project {number} for owner '{}'",
                    owner.login
                ))
            })
    }

    /// First page of an owner's projects
    pub async fn projects(&self, owner: &Owner) -> CliClientResult<Vec<Project>> {
        let (operation, document) = match owner.kind {
            OwnerKind::Viewer => ("ViewerProjects", documents::VIEWER_PROJECTS),
            OwnerKind::User => ("UserProjects", documents::USER_PROJECTS),
            OwnerKind::Organization => ("OrgProjects", documents::ORG_PROJECTS),
        };
        let variables = ProjectListVariables {
            login: owner.login_variable(),
            first: PAGE_SIZE,
            page: ProjectPageVariables::default(),
        };

        let data: OwnerScoped<ProjectsNode> = self.query(operation, document, &variables).await?;
        Ok(data
            .into_inner()
            .map(|node| node.projects.nodes)
            .unwrap_or_default())
    }

    async fn prompt_project(&self, owner: &Owner, prompter: &dyn Prompter) -> CommandResult<Project> {
        let projects = self.projects(owner).await?;
        if projects.is_empty() {
            return Err(CommandError::validation(format!(
                "no projects found for {}",
                owner.login
            )));
        }

        let titles = projects.iter().map(|p| p.title.clone()).collect::<Vec<_>>();
        let index = prompter.select(SelectOpts::new(PROJECT_PROMPT, titles))?;
        projects
            .into_iter()
            .nth(index)
            .ok_or_else(|| CommandError::validation(format!("no project at position {index}")))
    }
}
