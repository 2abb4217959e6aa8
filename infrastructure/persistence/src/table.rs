use strum_macros::{Display, EnumIter};

/// Tables owned by this service. `Display` yields the SQL name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Table {
    Categories,
    Products,
    Carts,
    DeliveryProfiles,
    Orders,
}
