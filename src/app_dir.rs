use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::PathBuf;

const QUALIFIER: &str = "";
const ORGANIZATION: &str = "";
const APPLICATION: &str = "Sol-Token-Tool";

pub const ENV_FILE_NAME: &str = ".env";
pub const DATABASE_FILE_NAME: &str = "data.db";
pub const LOG_FILE_NAME: &str = "sol-token-tool.log";

pub fn app_user_data_dir_path() -> Result<PathBuf, io::Error> {
    let proj_dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Failed to determine project directories",
        )
    })?;
    Ok(proj_dirs.config_dir().to_path_buf())
}

pub fn create_app_user_data_directory_if_not_exists() -> Result<PathBuf, io::Error> {
    let app_data_dir = app_user_data_dir_path()?;
    fs::create_dir_all(&app_data_dir)?;

    let metadata = fs::metadata(&app_data_dir)?;
    if !metadata.is_dir() {
        return Err(io::Error::other("Created path is not a directory"));
    }
    Ok(app_data_dir)
}

pub fn app_user_data_file_path(filename: &str) -> Result<PathBuf, io::Error> {
    if filename.is_empty() || filename.contains(std::path::is_separator) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Invalid filename",
        ));
    }
    let app_data_dir = app_user_data_dir_path()?;
    Ok(app_data_dir.join(filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_paths_as_file_names() {
        assert!(app_user_data_file_path("").is_err());
        assert!(app_user_data_file_path("nested/data.db").is_err());
    }
}
