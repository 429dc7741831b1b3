pub mod env {
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const ALLOWED_ORIGINS_ENV_VAR: &str = "ALLOWED_ORIGINS";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";

    pub mod postgres {
        use std::time::Duration;

        pub const MAX_CONNECTIONS: u32 = 10;
        pub const IDLE_TIMEOUT: Duration = Duration::from_secs(20);
        pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
