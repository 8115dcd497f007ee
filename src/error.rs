/// Errors surfaced by the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The display controller rejected its init sequence
    #[error("failed to initialize display controller")]
    DisplayInit,
    /// The display did not accept a frame
    #[error("display flush failed")]
    Display,
}
