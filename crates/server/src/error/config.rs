use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Startup aborts; check `.env.example` for the variables the server needs.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid value {value:?} for environment variable {name}")]
    InvalidEnvVar { name: &'static str, value: String },
}
