use crate::id::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    pub id: Id,
    pub name: String,
}
