pub mod error;
pub mod security;
pub mod tags;

pub mod cart {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod catalog {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod chat {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod health {
    pub mod routes;
}
pub mod order {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod payment {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod profile {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
