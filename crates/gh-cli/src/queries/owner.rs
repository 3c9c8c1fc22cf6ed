use crate::queries::{OWNER_PROMPT, PAGE_SIZE, PageInfo, VIEWER_ALIAS, documents};
use crate::{CliClientResult, Client, ClientError, CommandError, CommandResult, NoVariables};

use gh_prompt::{Prompter, SelectOpts};

use log::info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerKind {
    User,
    Organization,
    /// The authenticated actor
    Viewer,
}

/// A resolved project owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub kind: OwnerKind,
    pub login: String,
    pub id: String,
}

/// Owner as selected on the command line, before lookup
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OwnerLogin {
    Viewer,
    User(String),
    Org(String),
    /// Neither flag given; resolved by prompting
    #[default]
    Unspecified,
}

impl OwnerLogin {
    /// Build from `--user`/`--org` style flags. Empty values count as unset;
    /// callers check mutual exclusivity first, the user flag wins otherwise.
    pub fn from_flags(user: Option<String>, org: Option<String>) -> Self {
        match (
            user.filter(|u| !u.is_empty()),
            org.filter(|o| !o.is_empty()),
        ) {
            (Some(user), _) if user == VIEWER_ALIAS => OwnerLogin::Viewer,
            (Some(user), _) => OwnerLogin::User(user),
            (None, Some(org)) => OwnerLogin::Org(org),
            (None, None) => OwnerLogin::Unspecified,
        }
    }
}

#[derive(Deserialize)]
struct LoginNode {
    id: String,
    #[serde(default)]
    login: String,
}

/// `data` of a query rooted at whichever owner kind was asked for
#[derive(Deserialize)]
pub(crate) struct OwnerScoped<T> {
    viewer: Option<T>,
    user: Option<T>,
    organization: Option<T>,
}

impl<T> OwnerScoped<T> {
    pub(crate) fn into_inner(self) -> Option<T> {
        self.viewer.or(self.user).or(self.organization)
    }
}

#[derive(Serialize)]
struct LoginVariables<'a> {
    login: &'a str,
}

#[derive(Serialize)]
struct PageVariables {
    first: i32,
    after: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrgNode {
    id: String,
    login: String,
    #[serde(default)]
    viewer_can_create_projects: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrgConnection {
    #[serde(default)]
    nodes: Vec<OrgNode>,
    #[serde(default)]
    page_info: PageInfo,
}

#[derive(Deserialize)]
struct ViewerWithOrgs {
    id: String,
    login: String,
    organizations: OrgConnection,
}

#[derive(Deserialize)]
struct ViewerWithOrgsData {
    viewer: ViewerWithOrgs,
}

impl Client {
    // =========================================================================
    // Owner Resolution
    // =========================================================================

    /// Resolve an owner selector to an opaque ID.
    ///
    /// `@me` goes through the viewer query only. With no selector the user
    /// picks among the viewer and their organizations, which requires a
    /// prompter.
    pub async fn new_owner(
        &self,
        login: &OwnerLogin,
        prompter: Option<&dyn Prompter>,
    ) -> CommandResult<Owner> {
        let owner = match login {
            OwnerLogin::Viewer => {
                let node = self.viewer_login().await?;
                let login = match node.login.is_empty() {
                    true => String::from(VIEWER_ALIAS),
                    false => node.login,
                };
                Owner {
                    kind: OwnerKind::Viewer,
                    login,
                    id: node.id,
                }
            }
            OwnerLogin::User(login) => Owner {
                kind: OwnerKind::User,
                login: login.clone(),
                id: self
                    .login_id("UserLogin", documents::USER_LOGIN, login)
                    .await?,
            },
            OwnerLogin::Org(login) => Owner {
                kind: OwnerKind::Organization,
                login: login.clone(),
                id: self
                    .login_id("OrgLogin", documents::ORG_LOGIN, login)
                    .await?,
            },
            OwnerLogin::Unspecified => {
                let prompter = prompter.ok_or_else(|| {
                    CommandError::validation(
                        "owner is required when not running interactively",
                    )
                })?;
                self.prompt_owner(prompter).await?
            }
        };

        info!("resolved owner {} ({:?})", owner.login, owner.kind);
        Ok(owner)
    }

    async fn viewer_login(&self) -> CliClientResult<LoginNode> {
        let data: OwnerScoped<LoginNode> = self
            .query("ViewerLogin", documents::VIEWER_LOGIN, &NoVariables {})
            .await?;
        data.into_inner()
            .ok_or_else(|| ClientError::not_found("could not resolve the current user"))
    }

    async fn login_id(&self, operation: &str, document: &str, login: &str) -> CliClientResult<String> {
        let data: OwnerScoped<LoginNode> = self
            .query(operation, document, &LoginVariables { login })
            .await?;
        data.into_inner()
            .map(|node| node.id)
            .ok_or_else(|| ClientError::not_found(format!("could not resolve owner '{login}'")))
    }

    /// The viewer first, then every organization they can create projects in
    async fn viewer_and_orgs(&self) -> CliClientResult<Vec<Owner>> {
        let mut owners = Vec::new();
        let mut after = None;

        loop {
            let data: ViewerWithOrgsData = self
                .query(
                    "ViewerLoginAndOrgs",
                    documents::VIEWER_LOGIN_AND_ORGS,
                    &PageVariables {
                        first: PAGE_SIZE,
                        after: after.take(),
                    },
                )
                .await?;
            let viewer = data.viewer;

            if owners.is_empty() {
                owners.push(Owner {
                    kind: OwnerKind::Viewer,
                    login: viewer.login,
                    id: viewer.id,
                });
            }
            owners.extend(
                viewer
                    .organizations
                    .nodes
                    .into_iter()
                    .filter(|org| org.viewer_can_create_projects)
                    .map(|org| Owner {
                        kind: OwnerKind::Organization,
                        login: org.login,
                        id: org.id,
                    }),
            );

            let page = viewer.organizations.page_info;
            match page.end_cursor {
                Some(cursor) if page.has_next_page => after = Some(cursor),
                _ => break,
            }
        }

        Ok(owners)
    }

    async fn prompt_owner(&self, prompter: &dyn Prompter) -> CommandResult<Owner> {
        let owners = self.viewer_and_orgs().await?;
        let logins = owners.iter().map(|o| o.login.clone()).collect::<Vec<_>>();
        let index = prompter.select(SelectOpts::new(OWNER_PROMPT, logins))?;
        owners
            .into_iter()
            .nth(index)
            .ok_or_else(|| CommandError::validation(format!("no owner at position {index}")))
    }
}
