/// Errors that can occur during board operations
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// No attached device matched a supported board
    #[error("device not found")]
    DeviceNotFound,

    /// The HID channel could not be opened
    #[error("failed to open {target}: {source}")]
    DeviceOpen {
        target: String,
        #[source]
        source: hidapi::HidError,
    },

    /// Argument rejected before any I/O was attempted
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// HID read or write failure
    #[error("hid error: {0}")]
    Transport(#[from] hidapi::HidError),

    /// The device answered with too few bytes to hold the relay bitmap
    #[error("short response from device ({len} bytes)")]
    ShortResponse { len: usize },
}

pub type Result<T> = std::result::Result<T, BoardError>;
