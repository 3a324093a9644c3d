//! Notification store trait

/// Count of notifications waiting to be read
pub trait NotificationCounter {
    /// Number of stored notifications
    fn count(&self) -> usize;
}
