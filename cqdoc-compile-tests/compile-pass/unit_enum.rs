use cqdoc::prelude::*;

#[derive(Describe)]
pub enum Status {
    Active,
    #[describe(rename = "on-hold")]
    OnHold,
    Closed,
}

#[derive(Describe)]
pub enum Never {}

fn main() {
    let ty = Status::describe();
    assert_eq!(ty.enum_members().unwrap(), ["Active", "on-hold", "Closed"]);
    assert!(Never::describe().enum_members().unwrap().is_empty());
}
