//! JSON renderings of project objects, shaped for scripting rather than
//! mirroring the GraphQL selection.

use crate::queries::{Project, ProjectField, ProjectItem, TotalCount};

use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectJson<'a> {
    number: i32,
    url: &'a str,
    short_description: &'a str,
    public: bool,
    closed: bool,
    template: bool,
    title: &'a str,
    id: &'a str,
    readme: &'a str,
    items: &'a TotalCount,
    fields: &'a TotalCount,
    owner: OwnerJson<'a>,
}

#[derive(Serialize)]
struct OwnerJson<'a> {
    #[serde(rename = "type")]
    owner_type: &'a str,
    login: &'a str,
}

#[derive(Serialize)]
struct FieldJson<'a> {
    id: &'a str,
    name: &'a str,
    #[serde(rename = "type")]
    field_type: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    options: Vec<OptionJson<'a>>,
}

#[derive(Serialize)]
struct OptionJson<'a> {
    id: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
struct ItemJson<'a> {
    id: &'a str,
    title: &'a str,
    body: &'a str,
    #[serde(rename = "type")]
    item_type: &'a str,
}

pub fn json_project(project: &Project) -> serde_json::Result<String> {
    serde_json::to_string(&ProjectJson {
        number: project.number,
        url: &project.url,
        short_description: project.short_description.as_deref().unwrap_or(""),
        public: project.public,
        closed: project.closed,
        template: project.template,
        title: &project.title,
        id: &project.id,
        readme: project.readme.as_deref().unwrap_or(""),
        items: &project.items,
        fields: &project.fields,
        owner: OwnerJson {
            owner_type: project.owner_type(),
            login: project.owner_login(),
        },
    })
}

pub fn json_project_field(field: &ProjectField) -> serde_json::Result<String> {
    serde_json::to_string(&FieldJson {
        id: field.id(),
        name: field.name(),
        field_type: field.type_name(),
        options: field
            .options()
            .iter()
            .map(|o| OptionJson {
                id: &o.id,
                name: &o.name,
            })
            .collect(),
    })
}

pub fn json_project_item(item: &ProjectItem) -> serde_json::Result<String> {
    serde_json::to_string(&ItemJson {
        id: &item.id,
        title: item.title(),
        body: item.body(),
        item_type: item.type_name(),
    })
}
