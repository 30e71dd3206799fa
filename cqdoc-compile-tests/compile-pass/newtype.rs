use cqdoc::prelude::*;

#[derive(Describe)]
pub struct UserId(uuid::Uuid);

#[derive(Describe)]
pub struct Wrapper<T>(T);

fn main() {
    assert_eq!(UserId::describe().display_name(), "Uuid");
    assert_eq!(Wrapper::<i32>::describe().display_name(), "Int32");
}
