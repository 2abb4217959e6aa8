pub mod db;
pub mod memory;
pub mod money;
pub mod table;
pub mod cart {
    pub mod entity;
    pub mod fallback;
    pub mod repository;
}
pub mod category {
    pub mod entity;
    pub mod repository;
}
pub mod order {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod cached;
    pub mod entity;
    pub mod repository;
}
pub mod profile {
    pub mod entity;
    pub mod repository;
}
