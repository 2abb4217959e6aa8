use uuid::Uuid;

/// A menu section. Sections are shown by `sort_order`, then by name.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub sort_order: i32,
}
