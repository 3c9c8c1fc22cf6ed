//! GraphQL documents. Operation names are part of the wire contract.

/// Selection set shared by every query and mutation returning a project
macro_rules! project_fields {
    () => {
        "id number title shortDescription public closed template url readme \
         items(first: $firstItems, after: $afterItems) { totalCount } \
         fields(first: $firstFields, after: $afterFields) { totalCount } \
         owner { __typename ... on User { login } ... on Organization { login } }"
    };
}

/// Variable declarations matching `project_fields!`
macro_rules! project_page_params {
    () => {
        "$firstItems: Int!, $afterItems: String, $firstFields: Int!, $afterFields: String"
    };
}

pub const VIEWER_LOGIN: &str = "query ViewerLogin { viewer { id login } }";

pub const USER_LOGIN: &str = "query UserLogin($login: String!) { user(login: $login) { id login } }";

pub const ORG_LOGIN: &str =
    "query OrgLogin($login: String!) { organization(login: $login) { id login } }";

pub const VIEWER_LOGIN_AND_ORGS: &str = "query ViewerLoginAndOrgs($first: Int!, $after: String) { \
     viewer { id login organizations(first: $first, after: $after) { \
     nodes { id login viewerCanCreateProjects } \
     pageInfo { hasNextPage endCursor } } } }";

pub const VIEWER_PROJECT: &str = concat!(
    "query ViewerProject($number: Int!, ",
    project_page_params!(),
    ") { viewer { projectV2(number: $number) { ",
    project_fields!(),
    " } } }"
);

pub const USER_PROJECT: &str = concat!(
    "query UserProject($login: String!, $number: Int!, ",
    project_page_params!(),
    ") { user(login: $login) { projectV2(number: $number) { ",
    project_fields!(),
    " } } }"
);

pub const ORG_PROJECT: &str = concat!(
    "query OrgProject($login: String!, $number: Int!, ",
    project_page_params!(),
    ") { organization(login: $login) { projectV2(number: $number) { ",
    project_fields!(),
    " } } }"
);

pub const VIEWER_PROJECTS: &str = concat!(
    "query ViewerProjects($first: Int!, ",
    project_page_params!(),
    ") { viewer { projectsV2(first: $first) { nodes { ",
    project_fields!(),
    " } } } }"
);

pub const USER_PROJECTS: &str = concat!(
    "query UserProjects($login: String!, $first: Int!, ",
    project_page_params!(),
    ") { user(login: $login) { projectsV2(first: $first) { nodes { ",
    project_fields!(),
    " } } } }"
);

pub const ORG_PROJECTS: &str = concat!(
    "query OrgProjects($login: String!, $first: Int!, ",
    project_page_params!(),
    ") { organization(login: $login) { projectsV2(first: $first) { nodes { ",
    project_fields!(),
    " } } } }"
);

pub const COPY_PROJECT: &str = concat!(
    "mutation CopyProjectV2($input: CopyProjectV2Input!, ",
    project_page_params!(),
    ") { copyProjectV2(input: $input) { projectV2 { ",
    project_fields!(),
    " } } }"
);

pub const CREATE_FIELD: &str = "mutation CreateField($input: CreateProjectV2FieldInput!) { \
     createProjectV2Field(input: $input) { projectV2Field { __typename \
     ... on ProjectV2Field { id name dataType } \
     ... on ProjectV2IterationField { id name dataType } \
     ... on ProjectV2SingleSelectField { id name dataType options { id name } } } } }";

/// Selection set for an item and its content
macro_rules! item_fields {
    () => {
        "id type content { __typename \
         ... on DraftIssue { title body } \
         ... on Issue { title body number url repository { nameWithOwner } } \
         ... on PullRequest { title body number url repository { nameWithOwner } } }"
    };
}

pub const ARCHIVE_ITEM: &str = concat!(
    "mutation ArchiveProjectItem($input: ArchiveProjectV2ItemInput!) { \
     archiveProjectV2Item(input: $input) { item { ",
    item_fields!(),
    " } } }"
);

pub const UNARCHIVE_ITEM: &str = concat!(
    "mutation UnarchiveProjectItem($input: UnarchiveProjectV2ItemInput!) { \
     unarchiveProjectV2Item(input: $input) { item { ",
    item_fields!(),
    " } } }"
);
