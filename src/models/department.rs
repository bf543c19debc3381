use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Department {
    pub id: i64,
    pub name: String,
}
