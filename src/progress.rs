//! Row progress reporting.

use indicatif::{ProgressBar, ProgressStyle};

/// Receives a notification each time a row of the image is finished.
///
/// Rows may finish out of order when rendering in parallel; `completed` is the
/// number of rows done so far, not the index of the row that just finished.
pub trait RenderProgress: Sync {
    /// Called once per finished row.
    fn row_completed(&self, completed: u32, total: u32);
}

/// Discards progress notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl RenderProgress for Silent {
    fn row_completed(&self, _completed: u32, _total: u32) {}
}

impl RenderProgress for ProgressBar {
    fn row_completed(&self, completed: u32, total: u32) {
        self.set_length(u64::from(total));
        // Parallel rows can report slightly out of order; never move backwards
        self.set_position(self.position().max(u64::from(completed)));
        if completed == total {
            self.finish();
        }
    }
}

/// Progress bar on stderr sized for `rows` scanlines.
pub fn row_progress_bar(rows: u32) -> ProgressBar {
    let pb = ProgressBar::new(u64::from(rows));
    let style = ProgressStyle::default_bar()
        .template("{bar:40.green/black} {pos}/{len} rows ETA: {eta}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_tracks_rows() {
        let pb = ProgressBar::hidden();
        pb.row_completed(3, 10);
        assert_eq!(pb.position(), 3);
        assert_eq!(pb.length(), Some(10));
        pb.row_completed(2, 10);
        assert_eq!(pb.position(), 3);
        pb.row_completed(10, 10);
        assert!(pb.is_finished());
    }
}
