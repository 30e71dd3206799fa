use cqdoc::prelude::*;

#[derive(Describe)]
pub struct User {
    pub id: uuid::Uuid,
    pub name: String,
    pub age: i32,
    pub tags: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[describe(ignore)]
    pub password_hash: String,
}

fn main() {
    let ty = User::describe();
    assert_eq!(ty.display_name(), "User");
    assert_eq!(ty.properties().len(), 6);
}
