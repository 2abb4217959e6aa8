use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::category::Category;

#[derive(Debug, FromRow)]
pub struct CategoryEntity {
    pub id: Uuid,
    pub name: String,
    pub sort_order: i32,
}

impl CategoryEntity {
    pub fn into_domain(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
            sort_order: self.sort_order,
        }
    }
}
