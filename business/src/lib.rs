pub mod application {
    pub mod client {
        pub mod session;
    }
    pub mod dish {
        pub mod identify;
    }
    pub mod recipe {
        pub mod generate;
        pub mod stages;
    }
}

pub mod domain {
    pub mod logger;
    pub mod client {
        pub mod errors;
        pub mod model;
    }
    pub mod dish {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod identify;
        }
    }
    pub mod photo {
        pub mod errors;
        pub mod format;
        pub mod model;
        pub mod policy;
    }
    pub mod recipe {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod generate;
        }
    }
    pub mod shared {
        pub mod pipeline;
    }
}
