use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NoFileSelected,
    EngineBusy,
    Transport,
    Http,
    Decode,
    NotFound,
    Other,
}

#[derive(Debug, Serialize)]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
}

impl AppError {
    pub fn no_file_selected() -> Self {
        AppError {
            kind: ErrorKind::NoFileSelected,
            message: "Please select a file first.".to_string(),
        }
    }

    pub fn engine_busy() -> Self {
        AppError {
            kind: ErrorKind::EngineBusy,
            message: "An analysis is already running.".to_string(),
        }
    }

    pub fn http(message: String) -> Self {
        AppError {
            kind: ErrorKind::Http,
            message,
        }
    }

    pub fn decode(message: String) -> Self {
        AppError {
            kind: ErrorKind::Decode,
            message,
        }
    }

    pub fn not_found(message: String) -> Self {
        AppError {
            kind: ErrorKind::NotFound,
            message,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError {
            kind: ErrorKind::Other,
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError {
            kind: ErrorKind::Transport,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError {
            kind: ErrorKind::Decode,
            message: err.to_string(),
        }
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError {
            kind: ErrorKind::Other,
            message: msg,
        }
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError {
            kind: ErrorKind::Other,
            message: msg.to_string(),
        }
    }
}
