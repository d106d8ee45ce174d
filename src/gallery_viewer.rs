// src/gallery_viewer.rs
//
// Browser-free state of the photo gallery: the image list, per-image load
// status, the overlay selection and swipe detection. The `Gallery` component
// feeds browser events in and issues the image fetches this type asks for.

use crate::error::GalleryError;

/// Number of thumbnails fetched eagerly on mount.
pub const EAGER_PRELOAD_COUNT: usize = 6;

/// Minimum horizontal travel, in CSS pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Unloaded,
    Loading,
    Loaded,
    Errored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    src: String,
    status: LoadStatus,
    attempts: u32,
}

impl GalleryImage {
    pub fn new(src: String) -> Self {
        Self {
            src,
            status: LoadStatus::Unloaded,
            attempts: 0,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Locator to request. Retries get a distinct query so a cached failure
    /// is not replayed by the browser.
    pub fn request_src(&self) -> String {
        if self.attempts > 1 {
            let sep = if self.src.contains('?') { '&' } else { '?' };
            format!("{}{}retry={}", self.src, sep, self.attempts - 1)
        } else {
            self.src.clone()
        }
    }
}

/// Keys recognised while the overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKey {
    Previous,
    Next,
    Close,
}

impl OverlayKey {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            "Escape" => Some(Self::Close),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right-to-left; shows the next image.
    Left,
    /// Finger moved left-to-right; shows the previous image.
    Right,
}

/// Tracks one touch gesture on the overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f64>,
    end_x: Option<f64>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
        self.end_x = None;
    }

    pub fn track(&mut self, x: f64) {
        if self.start_x.is_some() {
            self.end_x = Some(x);
        }
    }

    /// Ends the gesture. A touch that never moved is a tap, not a swipe.
    pub fn finish(&mut self) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let end = self.end_x.take()?;
        let distance = start - end;
        if distance > SWIPE_THRESHOLD_PX {
            Some(SwipeDirection::Left)
        } else if distance < -SWIPE_THRESHOLD_PX {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.start_x = None;
        self.end_x = None;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryViewer {
    images: Vec<GalleryImage>,
    selected: Option<usize>,
}

impl GalleryViewer {
    pub fn new(sources: Vec<String>) -> Self {
        Self {
            images: sources.into_iter().map(GalleryImage::new).collect(),
            selected: None,
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn image(&self, index: usize) -> Option<&GalleryImage> {
        self.images.get(index)
    }

    pub fn status(&self, index: usize) -> Option<LoadStatus> {
        self.images.get(index).map(GalleryImage::status)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Starts the eager thumbnail loads. Returns the indices to fetch.
    pub fn initial_preload(&mut self) -> Vec<usize> {
        let count = EAGER_PRELOAD_COUNT.min(self.images.len());
        (0..count).filter(|&i| self.begin_load(i)).collect()
    }

    /// Opens the overlay on `index` and returns the indices to fetch.
    pub fn open(&mut self, index: usize) -> Result<Vec<usize>, GalleryError> {
        if index >= self.images.len() {
            return Err(GalleryError::OutOfRange {
                index,
                len: self.images.len(),
            });
        }
        self.selected = Some(index);
        Ok(self.preload_around(index))
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn next(&mut self) -> Option<usize> {
        let current = self.selected?;
        let next = (current + 1) % self.images.len();
        self.selected = Some(next);
        Some(next)
    }

    pub fn previous(&mut self) -> Option<usize> {
        let current = self.selected?;
        let len = self.images.len();
        let prev = (current + len - 1) % len;
        self.selected = Some(prev);
        Some(prev)
    }

    pub fn swipe(&mut self, direction: SwipeDirection) -> Option<usize> {
        match direction {
            SwipeDirection::Left => self.next(),
            SwipeDirection::Right => self.previous(),
        }
    }

    /// Applies a key press. Returns true when the overlay state changed.
    pub fn handle_key(&mut self, key: OverlayKey) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            OverlayKey::Previous => self.previous().is_some(),
            OverlayKey::Next => self.next().is_some(),
            OverlayKey::Close => {
                self.close();
                true
            }
        }
    }

    /// Starts loads for `index` and its direct neighbours (no wrap-around).
    /// Only images never attempted are started.
    pub fn preload_around(&mut self, index: usize) -> Vec<usize> {
        let mut candidates = vec![index];
        if index > 0 {
            candidates.push(index - 1);
        }
        if index + 1 < self.images.len() {
            candidates.push(index + 1);
        }
        candidates.into_iter().filter(|&i| self.begin_load(i)).collect()
    }

    /// Moves an errored image back to `Loading`. The caller re-issues the fetch.
    pub fn retry(&mut self, index: usize) -> Result<(), GalleryError> {
        let len = self.images.len();
        let image = self
            .images
            .get_mut(index)
            .ok_or(GalleryError::OutOfRange { index, len })?;
        if image.status != LoadStatus::Errored {
            return Err(GalleryError::NotRetryable(index));
        }
        image.status = LoadStatus::Loading;
        image.attempts += 1;
        Ok(())
    }

    pub fn mark_loaded(&mut self, index: usize) -> bool {
        self.complete(index, LoadStatus::Loaded)
    }

    pub fn mark_failed(&mut self, index: usize) -> bool {
        self.complete(index, LoadStatus::Errored)
    }

    fn begin_load(&mut self, index: usize) -> bool {
        match self.images.get_mut(index) {
            Some(image) if image.status == LoadStatus::Unloaded => {
                image.status = LoadStatus::Loading;
                image.attempts += 1;
                true
            }
            _ => false,
        }
    }

    // A thumbnail element fetches on its own, so an unloaded image may
    // complete without a preload having been issued.
    fn complete(&mut self, index: usize, outcome: LoadStatus) -> bool {
        let Some(image) = self.images.get_mut(index) else {
            return false;
        };
        match image.status {
            LoadStatus::Unloaded => {
                image.attempts += 1;
                image.status = outcome;
                true
            }
            LoadStatus::Loading => {
                image.status = outcome;
                true
            }
            LoadStatus::Loaded | LoadStatus::Errored => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn viewer(n: usize) -> GalleryViewer {
        GalleryViewer::new((0..n).map(|i| format!("./images/{:03}.jpg", i)).collect())
    }

    #[test]
    fn test_next_cycles_back_to_start() {
        for n in 1..=7 {
            for index in 0..n {
                let mut gallery = viewer(n);
                gallery.open(index).unwrap();
                for _ in 0..n {
                    gallery.next();
                }
                assert_eq!(gallery.selected(), Some(index), "n={} index={}", n, index);
            }
        }
    }

    #[test]
    fn test_wrap_around_at_both_ends() {
        let mut gallery = viewer(5);
        gallery.open(0).unwrap();
        assert_eq!(gallery.previous(), Some(4));
        assert_eq!(gallery.next(), Some(0));

        gallery.open(4).unwrap();
        assert_eq!(gallery.next(), Some(0));
    }

    #[test]
    fn test_single_image_navigation_stays_put() {
        let mut gallery = viewer(1);
        gallery.open(0).unwrap();
        assert_eq!(gallery.next(), Some(0));
        assert_eq!(gallery.previous(), Some(0));
    }

    #[test]
    fn test_navigation_after_close_is_noop() {
        let mut gallery = viewer(3);
        gallery.open(1).unwrap();
        gallery.close();
        assert_eq!(gallery.next(), None);
        assert_eq!(gallery.previous(), None);
        assert_eq!(gallery.selected(), None);
        assert!(!gallery.handle_key(OverlayKey::Next));
        assert_eq!(gallery.swipe(SwipeDirection::Left), None);
    }

    #[test]
    fn test_open_out_of_range() {
        let mut gallery = viewer(3);
        assert_eq!(
            gallery.open(3),
            Err(GalleryError::OutOfRange { index: 3, len: 3 })
        );
        assert!(!gallery.is_open());

        let mut empty = viewer(0);
        assert!(empty.is_empty());
        assert!(!gallery.is_empty());
        assert!(empty.open(0).is_err());
        assert!(empty.initial_preload().is_empty());
    }

    #[test]
    fn test_open_scenario() {
        let mut gallery = viewer(5);
        let preloaded: HashSet<usize> = gallery.open(2).unwrap().into_iter().collect();
        assert_eq!(preloaded, HashSet::from([1, 2, 3]));
        for i in [1, 2, 3] {
            assert_eq!(gallery.status(i), Some(LoadStatus::Loading));
        }
        assert_eq!(gallery.status(0), Some(LoadStatus::Unloaded));

        assert_eq!(gallery.next(), Some(3));
        gallery.previous();
        gallery.previous();
        assert_eq!(gallery.selected(), Some(1));
        gallery.close();
        assert_eq!(gallery.selected(), None);
    }

    #[test]
    fn test_open_at_edges_has_one_neighbour() {
        let mut gallery = viewer(5);
        let mut first = gallery.open(0).unwrap();
        first.sort();
        assert_eq!(first, vec![0, 1]);

        let mut last = gallery.open(4).unwrap();
        last.sort();
        assert_eq!(last, vec![3, 4]);
    }

    #[test]
    fn test_preload_skips_attempted_images() {
        let mut gallery = viewer(9);
        assert_eq!(gallery.initial_preload(), vec![0, 1, 2, 3, 4, 5]);
        gallery.mark_loaded(4);
        gallery.mark_failed(5);
        assert_eq!(gallery.open(5).unwrap(), vec![6]);
        assert_eq!(gallery.status(5), Some(LoadStatus::Errored));
    }

    #[test]
    fn test_retry_cycle() {
        let mut gallery = viewer(3);
        gallery.open(1).unwrap();
        assert!(gallery.mark_failed(1));
        assert_eq!(gallery.status(1), Some(LoadStatus::Errored));

        gallery.retry(1).unwrap();
        assert_eq!(gallery.status(1), Some(LoadStatus::Loading));
        assert!(gallery.mark_loaded(1));
        assert_eq!(gallery.status(1), Some(LoadStatus::Loaded));

        // a second failure after another retry lands back in errored
        let mut gallery = viewer(3);
        gallery.open(0).unwrap();
        gallery.mark_failed(0);
        gallery.retry(0).unwrap();
        assert!(gallery.mark_failed(0));
        assert_eq!(gallery.status(0), Some(LoadStatus::Errored));
    }

    #[test]
    fn test_retry_requires_errored() {
        let mut gallery = viewer(3);
        assert_eq!(gallery.retry(0), Err(GalleryError::NotRetryable(0)));
        gallery.open(0).unwrap();
        assert_eq!(gallery.retry(0), Err(GalleryError::NotRetryable(0)));
        assert_eq!(
            gallery.retry(7),
            Err(GalleryError::OutOfRange { index: 7, len: 3 })
        );
    }

    #[test]
    fn test_failure_does_not_touch_siblings() {
        let mut gallery = viewer(4);
        gallery.open(1).unwrap();
        gallery.mark_failed(1);
        gallery.mark_loaded(2);
        assert_eq!(gallery.status(0), Some(LoadStatus::Loading));
        assert_eq!(gallery.status(2), Some(LoadStatus::Loaded));
        assert_eq!(gallery.next(), Some(2));
    }

    #[test]
    fn test_stale_completions_are_ignored() {
        let mut gallery = viewer(2);
        gallery.open(0).unwrap();
        assert!(gallery.mark_loaded(0));
        assert!(!gallery.mark_failed(0));
        assert_eq!(gallery.status(0), Some(LoadStatus::Loaded));

        gallery.mark_failed(1);
        assert!(!gallery.mark_loaded(1));
        assert_eq!(gallery.status(1), Some(LoadStatus::Errored));
        assert!(!gallery.mark_loaded(42));
    }

    #[test]
    fn test_thumbnail_completion_counts_as_attempt() {
        let mut gallery = viewer(8);
        assert!(gallery.mark_loaded(7));
        assert_eq!(gallery.status(7), Some(LoadStatus::Loaded));
        assert_eq!(gallery.image(7).unwrap().attempts(), 1);
    }

    #[test]
    fn test_retry_request_src_is_cache_busted() {
        let mut gallery = viewer(1);
        gallery.open(0).unwrap();
        assert_eq!(gallery.image(0).unwrap().request_src(), "./images/000.jpg");
        gallery.mark_failed(0);
        gallery.retry(0).unwrap();
        assert_eq!(
            gallery.image(0).unwrap().request_src(),
            "./images/000.jpg?retry=1"
        );
    }

    #[test]
    fn test_keyboard_mapping() {
        assert_eq!(OverlayKey::from_key("ArrowLeft"), Some(OverlayKey::Previous));
        assert_eq!(OverlayKey::from_key("ArrowRight"), Some(OverlayKey::Next));
        assert_eq!(OverlayKey::from_key("Escape"), Some(OverlayKey::Close));
        assert_eq!(OverlayKey::from_key("a"), None);

        let mut gallery = viewer(3);
        gallery.open(0).unwrap();
        assert!(gallery.handle_key(OverlayKey::Previous));
        assert_eq!(gallery.selected(), Some(2));
        assert!(gallery.handle_key(OverlayKey::Close));
        assert!(!gallery.is_open());
    }

    #[test]
    fn test_swipe_threshold() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(200.0);
        swipe.track(150.0);
        assert_eq!(swipe.finish(), None);

        swipe.begin(200.0);
        swipe.track(149.0);
        assert_eq!(swipe.finish(), Some(SwipeDirection::Left));

        swipe.begin(100.0);
        swipe.track(150.0);
        assert_eq!(swipe.finish(), None);

        swipe.begin(100.0);
        swipe.track(151.0);
        assert_eq!(swipe.finish(), Some(SwipeDirection::Right));
    }

    #[test]
    fn test_tap_is_not_a_swipe() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(0.0);
        assert_eq!(swipe.finish(), None);

        // a move without a start is ignored
        swipe.track(300.0);
        assert_eq!(swipe.finish(), None);
    }

    #[test]
    fn test_swipe_drives_navigation() {
        let mut gallery = viewer(4);
        gallery.open(0).unwrap();
        assert_eq!(gallery.swipe(SwipeDirection::Left), Some(1));
        assert_eq!(gallery.swipe(SwipeDirection::Right), Some(0));
        assert_eq!(gallery.swipe(SwipeDirection::Right), Some(3));
    }
}
