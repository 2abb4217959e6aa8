pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get;
        pub mod import_legacy;
        pub mod remove_item;
        pub mod update_quantity;
    }
    pub mod chat {
        pub mod reset;
        pub mod send_message;
    }
    pub mod order {
        pub mod checkout;
        pub mod get_by_id;
    }
    pub mod payment {
        pub mod initiate;
        pub mod list_providers;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod get_catalog;
        pub mod get_categories;
        pub mod search;
        pub mod update;
    }
    pub mod profile {
        pub mod get;
        pub mod save;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod legacy;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get;
            pub mod import_legacy;
            pub mod remove_item;
            pub mod update_quantity;
        }
    }
    pub mod chat {
        pub mod errors;
        pub mod model;
        pub mod prompt;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod reset;
            pub mod send_message;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod message;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod checkout;
            pub mod get_by_id;
        }
    }
    pub mod payment {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod initiate;
            pub mod list_providers;
        }
    }
    pub mod product {
        pub mod catalog;
        pub mod category;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod search;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod get_catalog;
            pub mod get_categories;
            pub mod search;
            pub mod update;
        }
    }
    pub mod profile {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get;
            pub mod save;
        }
    }
}
