use crate::error::AppError;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Optional path to a JSON champion-id table overriding the built-in one.
    pub champion_data: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let champion_data = match env::var("RECAP_CHAMPION_DATA") {
            Ok(path) => {
                let path = PathBuf::from(path);
                if !path.is_file() {
                    return Err(AppError::ConfigError(format!(
                        "RECAP_CHAMPION_DATA points to a missing file: {}",
                        path.display()
                    )));
                }
                Some(path)
            }
            Err(_) => None,
        };

        Ok(Config { champion_data })
    }
}
