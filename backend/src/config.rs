//! Runtime configuration for the roster server.
//!
//! Values come from command-line flags, falling back to environment variables and
//! then to the defaults below.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "roster-server")]
#[command(about = "Student roster API with JSON snapshot persistence")]
#[command(version)]
pub struct Config {
    /// Interface to bind
    #[arg(long, env = "ROSTER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 4000)]
    pub port: u16,

    /// Snapshot file holding every student record
    #[arg(short, long, env = "STUDENTS_FILE", default_value = "students.json")]
    pub data_file: PathBuf,

    /// Directory with the browser UI assets
    #[arg(short, long, env = "STATIC_DIR", default_value = "public")]
    pub static_dir: PathBuf,

    /// Maximum accepted JSON body size, in bytes
    #[arg(long, default_value_t = 2 * 1024 * 1024)]
    pub json_limit: usize,

    /// Open the UI in the default browser once the server is up
    #[arg(long)]
    pub open_browser: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
            data_file: PathBuf::from("students.json"),
            static_dir: PathBuf::from("public"),
            json_limit: 2 * 1024 * 1024, // 2 MB
            open_browser: false,
        }
    }
}

impl Config {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
