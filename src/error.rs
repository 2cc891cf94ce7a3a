use thiserror::Error;

#[derive(Error, Debug)]
pub enum WaypointError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, WaypointError>;
