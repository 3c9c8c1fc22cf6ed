use serde::{Deserialize, Serialize};

/// Paging variables every project selection declares.
///
/// Commands only need the project node itself, so counts are fetched with
/// zero-sized pages.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPageVariables {
    pub first_items: i32,
    pub after_items: Option<String>,
    pub first_fields: i32,
    pub after_fields: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TotalCount {
    pub total_count: i64,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectOwner {
    #[serde(rename = "__typename")]
    pub typename: String,
    pub login: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub number: i32,
    pub title: String,
    pub url: String,
    pub short_description: Option<String>,
    pub public: bool,
    pub closed: bool,
    pub template: bool,
    pub readme: Option<String>,
    pub items: TotalCount,
    pub fields: TotalCount,
    pub owner: Option<ProjectOwner>,
}

impl Project {
    /// "User" or "Organization", empty when the owner was not selected
    pub fn owner_type(&self) -> &str {
        self.owner.as_ref().map_or("", |o| o.typename.as_str())
    }

    pub fn owner_login(&self) -> &str {
        self.owner.as_ref().map_or("", |o| o.login.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FieldOption {
    pub id: String,
    pub name: String,
}

/// A project field, discriminated by its GraphQL type name
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "__typename")]
pub enum ProjectField {
    #[serde(rename_all = "camelCase")]
    ProjectV2Field {
        id: String,
        name: String,
        #[serde(default)]
        data_type: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    ProjectV2IterationField {
        id: String,
        name: String,
        #[serde(default)]
        data_type: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    ProjectV2SingleSelectField {
        id: String,
        name: String,
        #[serde(default)]
        data_type: Option<String>,
        #[serde(default)]
        options: Vec<FieldOption>,
    },
}

impl ProjectField {
    pub fn id(&self) -> &str {
        match self {
            ProjectField::ProjectV2Field { id, .. }
            | ProjectField::ProjectV2IterationField { id, .. }
            | ProjectField::ProjectV2SingleSelectField { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ProjectField::ProjectV2Field { name, .. }
            | ProjectField::ProjectV2IterationField { name, .. }
            | ProjectField::ProjectV2SingleSelectField { name, .. } => name,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ProjectField::ProjectV2Field { .. } => "ProjectV2Field",
            ProjectField::ProjectV2IterationField { .. } => "ProjectV2IterationField",
            ProjectField::ProjectV2SingleSelectField { .. } => "ProjectV2SingleSelectField",
        }
    }

    pub fn options(&self) -> &[FieldOption] {
        match self {
            ProjectField::ProjectV2SingleSelectField { options, .. } => options,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Repository {
    pub name_with_owner: String,
}

/// What a project item points at
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "__typename")]
pub enum ItemContent {
    DraftIssue {
        #[serde(default)]
        title: String,
        #[serde(default)]
        body: String,
    },
    Issue {
        #[serde(default)]
        title: String,
        #[serde(default)]
        body: String,
        #[serde(default)]
        number: i32,
        #[serde(default)]
        url: String,
        #[serde(default)]
        repository: Repository,
    },
    PullRequest {
        #[serde(default)]
        title: String,
        #[serde(default)]
        body: String,
        #[serde(default)]
        number: i32,
        #[serde(default)]
        url: String,
        #[serde(default)]
        repository: Repository,
    },
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub content: Option<ItemContent>,
}

impl ProjectItem {
    pub fn title(&self) -> &str {
        match &self.content {
            Some(
                ItemContent::DraftIssue { title, .. }
                | ItemContent::Issue { title, .. }
                | ItemContent::PullRequest { title, .. },
            ) => title,
            None => "",
        }
    }

    pub fn body(&self) -> &str {
        match &self.content {
            Some(
                ItemContent::DraftIssue { body, .. }
                | ItemContent::Issue { body, .. }
                | ItemContent::PullRequest { body, .. },
            ) => body,
            None => "",
        }
    }

    /// Content type name, falling back to the item's own `type`
    pub fn type_name(&self) -> &str {
        match &self.content {
            Some(ItemContent::DraftIssue { .. }) => "DraftIssue",
            Some(ItemContent::Issue { .. }) => "Issue",
            Some(ItemContent::PullRequest { .. }) => "PullRequest",
            None => self.item_type.as_deref().unwrap_or(""),
        }
    }
}
