use tenggat_core::DueDateError;
use tenggat_store::StoreError;
use thiserror::Error;

/// Failures of board operations.
///
/// The validation variants carry the exact message shown to the user.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Text or due date left empty on add.
    #[error("Tolong masukan tugas dan masukan tanggal.")]
    MissingInput,
    /// A task with the same text and due date exists.
    #[error("Tugas ini sudah ada!")]
    Duplicate,
    /// Due date lies before today.
    #[error("Tanggal jatuh tempo tidak boleh di masa lalu.")]
    PastDue,
    /// Due date is not `YYYY-MM-DD`.
    #[error(transparent)]
    InvalidDate(#[from] DueDateError),
    /// No task matches the given id or prefix.
    #[error("Tugas tidak ditemukan: {0}")]
    NotFound(String),
    /// More than one task matches the given id prefix.
    #[error("ID tugas ambigu: {0}")]
    AmbiguousId(String),
    /// The store rejected a read or write.
    #[error("Gagal mengakses penyimpanan: {0}")]
    Storage(#[from] StoreError),
}

impl BoardError {
    /// True for input problems the user can fix by retrying with other values.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingInput | Self::Duplicate | Self::PastDue | Self::InvalidDate(_)
        )
    }
}

/// Result alias for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
