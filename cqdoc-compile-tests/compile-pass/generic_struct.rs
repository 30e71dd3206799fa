use std::collections::HashMap;

use cqdoc::prelude::*;

#[derive(Describe)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub next: Option<String>,
}

#[derive(Describe)]
pub struct Keyed<'a, K, V> {
    pub label: &'a str,
    pub entries: HashMap<K, V>,
}

#[derive(Describe)]
pub struct Item {
    pub sku: String,
}

fn main() {
    assert_eq!(Page::<Item>::describe().display_name(), "PageOfItem");
    assert_eq!(
        Keyed::<'static, String, Item>::describe().display_name(),
        "KeyedOfStringAndItem"
    );
}
