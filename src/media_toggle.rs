// src/media_toggle.rs
//
// Background music state. The playback engine sits behind `TrackSource` /
// `TrackHandle`; it reports asynchronously through `EngineReport`.

use crate::error::PlaybackError;
use crate::invitation_config::TrackConfig;
use yew::Callback;

/// Identifies one start request so its outcome can be matched to it.
pub type StartRequest = u64;

/// A created, playable track.
pub trait TrackHandle {
    /// Requests playback. The outcome arrives later as `EngineReport::Started`
    /// or `EngineReport::Blocked` carrying the same `request`.
    fn start(&self, request: StartRequest);
    fn stop(&self);
    fn rewind(&self);
}

/// Creates the track handle on first play.
pub trait TrackSource {
    type Handle: TrackHandle;

    fn open(&self, track: &TrackConfig) -> Result<Self::Handle, PlaybackError>;
}

/// Asynchronous notifications from the playback engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineReport {
    Started(StartRequest),
    Blocked(StartRequest, String),
    DurationKnown(f64),
    TimeUpdate(f64),
}

/// What subscribers see after every state change.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MediaSnapshot {
    pub is_playing: bool,
    pub elapsed: f64,
    pub total: Option<f64>,
    pub blocked: bool,
}

impl MediaSnapshot {
    pub fn progress_fraction(&self) -> Option<f64> {
        match self.total {
            Some(total) if total > 0.0 => Some((self.elapsed / total).clamp(0.0, 1.0)),
            _ => None,
        }
    }

    pub fn progress_percent(&self) -> f64 {
        self.progress_fraction().unwrap_or(0.0) * 100.0
    }
}

pub type SubscriptionId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Starting,
    Playing,
    Paused,
    Blocked,
}

pub struct MediaToggle<S: TrackSource> {
    source: S,
    track: TrackConfig,
    handle: Option<S::Handle>,
    phase: Phase,
    // set once the engine confirmed playback at least once
    confirmed: bool,
    // the only start request whose outcome still counts
    start_request: StartRequest,
    elapsed: f64,
    total: Option<f64>,
    subscribers: Vec<(SubscriptionId, Callback<MediaSnapshot>)>,
    next_subscription: SubscriptionId,
}

impl<S: TrackSource> MediaToggle<S> {
    pub fn new(source: S, track: TrackConfig) -> Self {
        Self {
            source,
            track,
            handle: None,
            phase: Phase::Idle,
            confirmed: false,
            start_request: 0,
            elapsed: 0.0,
            total: None,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn has_track(&self) -> bool {
        self.handle.is_some()
    }

    pub fn snapshot(&self) -> MediaSnapshot {
        MediaSnapshot {
            is_playing: self.is_playing(),
            elapsed: self.elapsed,
            total: self.total,
            blocked: self.phase == Phase::Blocked,
        }
    }

    pub fn subscribe(&mut self, callback: Callback<MediaSnapshot>) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push((id, callback));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn play(&mut self) -> Result<(), PlaybackError> {
        if self.handle.is_none() {
            let handle = self.source.open(&self.track)?;
            log::info!("Background track created: {}", self.track.src);
            self.handle = Some(handle);
        }
        self.start_request += 1;
        if let Some(handle) = &self.handle {
            handle.start(self.start_request);
        }
        self.phase = if self.confirmed {
            Phase::Playing
        } else {
            Phase::Starting
        };
        self.publish();
        Ok(())
    }

    pub fn pause(&mut self) {
        if let Some(handle) = &self.handle {
            handle.stop();
            self.phase = Phase::Paused;
            self.publish();
        }
    }

    /// A pending start counts as playing, so a second tap cancels it.
    pub fn toggle(&mut self) -> Result<(), PlaybackError> {
        match self.phase {
            Phase::Playing | Phase::Starting => {
                self.pause();
                Ok(())
            }
            Phase::Idle | Phase::Paused | Phase::Blocked => self.play(),
        }
    }

    /// Applies an engine notification. A refused start comes back as `Err`
    /// so the caller can show it to the user. Outcomes of superseded start
    /// requests are dropped.
    pub fn report(&mut self, report: EngineReport) -> Result<(), PlaybackError> {
        match report {
            EngineReport::Started(request) | EngineReport::Blocked(request, _)
                if request != self.start_request =>
            {
                log::debug!(
                    "Dropping outcome of start request {} (current {})",
                    request,
                    self.start_request
                );
                Ok(())
            }
            EngineReport::Started(_) => {
                if self.phase == Phase::Starting {
                    self.confirmed = true;
                    self.phase = Phase::Playing;
                    self.publish();
                }
                Ok(())
            }
            EngineReport::Blocked(_, reason) => match self.phase {
                Phase::Starting | Phase::Playing => {
                    self.phase = Phase::Blocked;
                    self.publish();
                    Err(PlaybackError::Blocked(reason))
                }
                _ => Ok(()),
            },
            EngineReport::DurationKnown(total) => {
                if total.is_finite() && total > 0.0 {
                    self.total = Some(total);
                    self.publish();
                }
                Ok(())
            }
            EngineReport::TimeUpdate(elapsed) => {
                if elapsed.is_finite() && elapsed >= 0.0 {
                    self.elapsed = elapsed;
                    self.publish();
                }
                Ok(())
            }
        }
    }

    /// Stops playback and rewinds. Called when the owner is torn down.
    pub fn release(&mut self) {
        if let Some(handle) = &self.handle {
            handle.stop();
            handle.rewind();
            self.phase = Phase::Paused;
            self.elapsed = 0.0;
            self.publish();
        }
    }

    fn publish(&self) {
        let snapshot = self.snapshot();
        for (_, callback) in &self.subscribers {
            callback.emit(snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct Calls {
        opened: Cell<u32>,
        started: Cell<u32>,
        stopped: Cell<u32>,
        rewound: Cell<u32>,
        last_request: Cell<StartRequest>,
    }

    struct FakeSource {
        calls: Rc<Calls>,
        fail_open: bool,
    }

    struct FakeHandle {
        calls: Rc<Calls>,
    }

    impl TrackHandle for FakeHandle {
        fn start(&self, request: StartRequest) {
            self.calls.started.set(self.calls.started.get() + 1);
            self.calls.last_request.set(request);
        }
        fn stop(&self) {
            self.calls.stopped.set(self.calls.stopped.get() + 1);
        }
        fn rewind(&self) {
            self.calls.rewound.set(self.calls.rewound.get() + 1);
        }
    }

    impl TrackSource for FakeSource {
        type Handle = FakeHandle;

        fn open(&self, _track: &TrackConfig) -> Result<FakeHandle, PlaybackError> {
            if self.fail_open {
                return Err(PlaybackError::Unavailable("no audio".to_string()));
            }
            self.calls.opened.set(self.calls.opened.get() + 1);
            Ok(FakeHandle {
                calls: self.calls.clone(),
            })
        }
    }

    fn started(calls: &Calls) -> EngineReport {
        EngineReport::Started(calls.last_request.get())
    }

    fn blocked(calls: &Calls, reason: &str) -> EngineReport {
        EngineReport::Blocked(calls.last_request.get(), reason.to_string())
    }

    fn toggle_with(fail_open: bool) -> (MediaToggle<FakeSource>, Rc<Calls>) {
        let calls = Rc::new(Calls::default());
        let source = FakeSource {
            calls: calls.clone(),
            fail_open,
        };
        (MediaToggle::new(source, TrackConfig::default()), calls)
    }

    #[test]
    fn test_handle_created_lazily_once() {
        let (mut media, calls) = toggle_with(false);
        assert!(!media.has_track());
        media.play().unwrap();
        media.report(started(&calls)).unwrap();
        media.pause();
        media.play().unwrap();
        assert_eq!(calls.opened.get(), 1);
        assert_eq!(calls.started.get(), 2);
    }

    #[test]
    fn test_first_play_waits_for_engine() {
        let (mut media, calls) = toggle_with(false);
        media.play().unwrap();
        assert!(!media.is_playing());
        media.report(started(&calls)).unwrap();
        assert!(media.is_playing());
    }

    #[test]
    fn test_resume_is_immediate() {
        let (mut media, calls) = toggle_with(false);
        media.play().unwrap();
        media.report(started(&calls)).unwrap();
        media.pause();
        assert!(!media.is_playing());
        media.play().unwrap();
        assert!(media.is_playing());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let (mut media, calls) = toggle_with(false);
        media.play().unwrap();
        media.report(started(&calls)).unwrap();
        assert!(media.is_playing());

        media.toggle().unwrap();
        assert!(!media.is_playing());
        media.toggle().unwrap();
        assert!(media.is_playing());
    }

    #[test]
    fn test_blocked_session_stays_stopped() {
        let (mut media, calls) = toggle_with(false);

        media.toggle().unwrap();
        let err = media
            .report(blocked(&calls, "NotAllowedError"))
            .unwrap_err();
        assert_eq!(err, PlaybackError::Blocked("NotAllowedError".to_string()));
        assert!(!media.is_playing());
        assert!(media.snapshot().blocked);

        media.toggle().unwrap();
        assert!(media
            .report(blocked(&calls, "NotAllowedError"))
            .is_err());
        assert!(!media.is_playing());
        assert_eq!(calls.opened.get(), 1);
    }

    #[test]
    fn test_toggle_cancels_pending_start() {
        let (mut media, calls) = toggle_with(false);
        media.toggle().unwrap();
        media.toggle().unwrap();
        assert_eq!(calls.stopped.get(), 1);
        // the late success report does not flip the state back
        media.report(started(&calls)).unwrap();
        assert!(!media.is_playing());
    }

    #[test]
    fn test_pause_without_track_is_noop() {
        let (mut media, calls) = toggle_with(false);
        media.pause();
        media.release();
        assert_eq!(calls.stopped.get(), 0);
        assert!(!media.has_track());
    }

    #[test]
    fn test_open_failure_surfaces_error() {
        let (mut media, _) = toggle_with(true);
        assert!(matches!(media.play(), Err(PlaybackError::Unavailable(_))));
        assert!(!media.is_playing());
        assert!(!media.has_track());
    }

    #[test]
    fn test_progress_observation() {
        let (mut media, calls) = toggle_with(false);
        media.play().unwrap();
        media.report(started(&calls)).unwrap();
        assert_eq!(media.snapshot().progress_fraction(), None);

        media.report(EngineReport::DurationKnown(f64::NAN)).unwrap();
        assert_eq!(media.snapshot().total, None);

        media.report(EngineReport::DurationKnown(200.0)).unwrap();
        media.report(EngineReport::TimeUpdate(50.0)).unwrap();
        let snapshot = media.snapshot();
        assert_eq!(snapshot.elapsed, 50.0);
        assert_eq!(snapshot.progress_fraction(), Some(0.25));
        assert_eq!(snapshot.progress_percent(), 25.0);
    }

    #[test]
    fn test_release_rewinds() {
        let (mut media, calls) = toggle_with(false);
        media.play().unwrap();
        media.report(started(&calls)).unwrap();
        media.report(EngineReport::TimeUpdate(12.0)).unwrap();
        media.release();
        assert!(!media.is_playing());
        assert_eq!(media.snapshot().elapsed, 0.0);
        assert_eq!(calls.rewound.get(), 1);
    }

    #[test]
    fn test_subscribers_receive_snapshots() {
        let (mut media, calls) = toggle_with(false);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let id = {
            let seen = seen.clone();
            media.subscribe(Callback::from(move |s: MediaSnapshot| {
                seen.borrow_mut().push(s.is_playing)
            }))
        };

        media.play().unwrap();
        media.report(started(&calls)).unwrap();
        assert_eq!(*seen.borrow(), vec![false, true]);

        assert!(media.unsubscribe(id));
        assert!(!media.unsubscribe(id));
        media.pause();
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_superseded_start_outcome_is_dropped() {
        let (mut media, calls) = toggle_with(false);
        media.toggle().unwrap();
        let first = calls.last_request.get();
        media.toggle().unwrap();
        media.toggle().unwrap();
        let second = calls.last_request.get();
        assert_ne!(first, second);

        // pausing aborts the first start; that rejection arrives late
        media
            .report(EngineReport::Blocked(first, "AbortError".to_string()))
            .unwrap();
        assert!(!media.snapshot().blocked);

        media.report(EngineReport::Started(second)).unwrap();
        assert!(media.is_playing());
    }

    #[test]
    fn test_late_success_of_superseded_start_is_ignored() {
        let (mut media, calls) = toggle_with(false);
        media.toggle().unwrap();
        let first = calls.last_request.get();
        media.toggle().unwrap();
        media.toggle().unwrap();

        media.report(EngineReport::Started(first)).unwrap();
        assert!(!media.is_playing());
        let err = media.report(blocked(&calls, "NotAllowedError")).unwrap_err();
        assert_eq!(err, PlaybackError::Blocked("NotAllowedError".to_string()));
        assert!(media.snapshot().blocked);
    }
}
