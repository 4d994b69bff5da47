use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to load image '{}': {}", .path.display(), .source)]
    Image {
        path: PathBuf,
        source: image::ImageError
    },
    #[error("failed to read '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error
    },
    #[error("failed to parse font '{}': {}", .path.display(), .reason)]
    Font {
        path: PathBuf,
        reason: &'static str
    },
    #[error("failed to decode sound '{}': {}", .path.display(), .source)]
    Sound {
        path: PathBuf,
        source: rodio::decoder::DecoderError
    }
}

impl AssetError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            AssetError::Image { path, .. } |
            AssetError::Io { path, .. } |
            AssetError::Font { path, .. } |
            AssetError::Sound { path, .. } => path
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("failed to open audio output: {0}")]
    Stream(#[from] rodio::StreamError),
    #[error("failed to create audio sink: {0}")]
    Sink(#[from] rodio::PlayError)
}
