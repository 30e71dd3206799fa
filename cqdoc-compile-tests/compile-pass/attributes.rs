use cqdoc::prelude::*;
use serde::Serialize;

#[derive(Serialize, Describe)]
#[describe(name = "Account")]
pub struct AccountDto {
    #[serde(rename = "accountId", default)]
    pub id: String,
    #[describe(rename = "type")]
    pub r#kind: String,
    #[serde(skip)]
    pub cache_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    pub r#ref: String,
}

fn main() {
    let ty = AccountDto::describe();
    assert_eq!(ty.name(), "Account");
    let names: Vec<&str> = ty.properties().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["id", "type", "cache_key", "nickname", "ref"]);
    assert!(ty.properties()[2].is_ignored());
}
