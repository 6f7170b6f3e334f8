use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Slot index out of range")]
    InvalidSlot,
    #[error("Hand slot is empty")]
    SlotEmpty,
    #[error("Shape does not fit at that origin")]
    InvalidPlacement,
}

pub type Result<T> = core::result::Result<T, GameError>;
