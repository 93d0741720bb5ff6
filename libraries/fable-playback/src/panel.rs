//! Audio control panel - core orchestration
//!
//! Owns the special tracks, enforces the panel-wide "at most one track
//! playing" invariant, and feeds the listen counter from natural
//! completions.

use crate::{
    events::{MediaEvent, PanelEvent},
    listens::ListenCounter,
    track::TrackState,
    transport::MediaTransport,
    types::PanelConfig,
};
use fable_core::types::TrackId;
use fable_core::ListenStore;
use tracing::{debug, warn};

/// One track plus its platform transport
struct TrackHandle {
    state: TrackState,
    transport: Box<dyn MediaTransport>,
}

/// Central audio control panel
///
/// All operations are total over out-of-range or not-yet-ready inputs; they
/// degrade to logged no-ops rather than signaling failure. The cross-track
/// invariant - at most one track with `is_playing` at any instant - is
/// enforced here by pausing every peer before starting a target, all within
/// the single `toggle_play` call, so observers never see two tracks playing.
pub struct AudioPanel {
    tracks: Vec<TrackHandle>,
    listens: ListenCounter,
    config: PanelConfig,

    // Event queue for UI synchronization
    pending_events: Vec<PanelEvent>,
}

impl AudioPanel {
    /// Create an empty panel over the given listen store
    pub fn new(config: PanelConfig, store: Box<dyn ListenStore>) -> Self {
        Self {
            tracks: Vec::new(),
            listens: ListenCounter::new(store),
            config,
            pending_events: Vec::new(),
        }
    }

    /// Register a track with its platform transport
    ///
    /// The track starts paused at the configured default volume, which is
    /// pushed down to the transport immediately.
    pub fn add_track(&mut self, id: TrackId, mut transport: Box<dyn MediaTransport>) {
        let state = TrackState::new(id, self.config.default_volume);
        transport.set_volume(state.volume.level());
        self.tracks.push(TrackHandle { state, transport });
    }

    // ===== Transport =====

    /// Play/pause toggle for one track
    ///
    /// If the target is already playing this is a pause. Otherwise every
    /// other playing track is paused first, then the target starts. A
    /// transport refusal (e.g. autoplay policy) leaves the target paused.
    pub fn toggle_play(&mut self, id: &TrackId) {
        let Some(target) = self.index_of(id) else {
            debug!(%id, "unknown track");
            return;
        };

        if self.tracks[target].state.is_playing {
            self.pause_at(target);
            return;
        }

        // Pause peers before starting the target
        let playing_peers: Vec<usize> = self
            .tracks
            .iter()
            .enumerate()
            .filter(|(i, h)| *i != target && h.state.is_playing)
            .map(|(i, _)| i)
            .collect();
        for peer in playing_peers {
            self.pause_at(peer);
        }

        let handle = &mut self.tracks[target];
        match handle.transport.play() {
            Ok(()) => {
                handle.state.is_playing = true;
                self.pending_events.push(PanelEvent::TransportChanged {
                    track_id: handle.state.id.clone(),
                    playing: true,
                });
            }
            Err(e) => warn!(id = %handle.state.id, "transport refused play: {e}"),
        }
    }

    /// Pause exactly one track; no effect on the others
    pub fn pause(&mut self, id: &TrackId) {
        let Some(index) = self.index_of(id) else {
            debug!(%id, "unknown track");
            return;
        };

        if self.tracks[index].state.is_playing {
            self.pause_at(index);
        }
    }

    fn pause_at(&mut self, index: usize) {
        let handle = &mut self.tracks[index];
        handle.transport.pause();
        handle.state.is_playing = false;
        self.pending_events.push(PanelEvent::TransportChanged {
            track_id: handle.state.id.clone(),
            playing: false,
        });
    }

    // ===== Per-track toggles =====

    /// Flip a track's loop setting (purely local, no cross-track effect)
    pub fn toggle_loop(&mut self, id: &TrackId) {
        let Some(index) = self.index_of(id) else {
            debug!(%id, "unknown track");
            return;
        };

        let handle = &mut self.tracks[index];
        handle.state.is_looping = !handle.state.is_looping;
        handle.transport.set_looping(handle.state.is_looping);
        self.pending_events.push(PanelEvent::LoopChanged {
            track_id: handle.state.id.clone(),
            looping: handle.state.is_looping,
        });
    }

    // ===== Volume =====

    /// Set a track's volume from a slider percentage (0 - 100)
    pub fn set_volume(&mut self, id: &TrackId, percent: f32) {
        let Some(index) = self.index_of(id) else {
            debug!(%id, "unknown track");
            return;
        };

        let handle = &mut self.tracks[index];
        handle.state.volume.set_percent(percent);
        handle.transport.set_volume(handle.state.volume.level());
        self.pending_events.push(PanelEvent::VolumeChanged {
            track_id: handle.state.id.clone(),
            level: handle.state.volume.level(),
            tier: handle.state.volume.tier(),
        });
    }

    /// Mute a track, or restore its pre-mute volume
    pub fn toggle_mute(&mut self, id: &TrackId) {
        let Some(index) = self.index_of(id) else {
            debug!(%id, "unknown track");
            return;
        };

        let handle = &mut self.tracks[index];
        handle.state.volume.toggle_mute();
        handle.transport.set_volume(handle.state.volume.level());
        self.pending_events.push(PanelEvent::VolumeChanged {
            track_id: handle.state.id.clone(),
            level: handle.state.volume.level(),
            tier: handle.state.volume.tier(),
        });
    }

    // ===== Seek =====

    /// Jump a track to a percentage of its duration (0 - 100)
    ///
    /// Silent no-op while the duration is still unknown (metadata not
    /// resolved) or if the transport refuses the jump.
    pub fn seek(&mut self, id: &TrackId, percent: f32) {
        let Some(index) = self.index_of(id) else {
            debug!(%id, "unknown track");
            return;
        };

        let handle = &mut self.tracks[index];
        let Some(duration) = handle.state.duration else {
            debug!(id = %handle.state.id, "seek before duration known");
            return;
        };

        let percent = percent.clamp(0.0, 100.0);
        let position = duration.mul_f64(f64::from(percent) / 100.0);

        match handle.transport.seek(position) {
            Ok(()) => {
                handle.state.position = position;
                self.pending_events.push(PanelEvent::ProgressUpdated {
                    track_id: handle.state.id.clone(),
                    position_ms: position.as_millis() as u64,
                    percent: Some(percent),
                });
            }
            Err(e) => warn!(id = %handle.state.id, "transport refused seek: {e}"),
        }
    }

    // ===== Media notifications =====

    /// Feed an asynchronous notification from a track's playback primitive
    pub fn handle_media_event(&mut self, id: &TrackId, event: MediaEvent) {
        let Some(index) = self.index_of(id) else {
            debug!(%id, "media event for unknown track");
            return;
        };

        match event {
            MediaEvent::MetadataLoaded { duration } => {
                let handle = &mut self.tracks[index];
                handle.state.duration = Some(duration);
                self.pending_events.push(PanelEvent::DurationResolved {
                    track_id: handle.state.id.clone(),
                    duration_ms: duration.as_millis() as u64,
                });
            }
            MediaEvent::PositionChanged { position } => {
                // Observational only: never touches is_playing or volume
                let handle = &mut self.tracks[index];
                handle.state.position = position;
                self.pending_events.push(PanelEvent::ProgressUpdated {
                    track_id: handle.state.id.clone(),
                    position_ms: position.as_millis() as u64,
                    percent: handle.state.progress_percent(),
                });
            }
            MediaEvent::Ended => self.handle_track_ended(index),
        }
    }

    /// Natural completion: transport control back to paused, counter bumped
    ///
    /// A delivered end event counts regardless of the loop toggle; hosts
    /// whose primitives suppress the event for looping media simply never
    /// reach this path.
    fn handle_track_ended(&mut self, index: usize) {
        let track_id = {
            let handle = &mut self.tracks[index];
            handle.state.is_playing = false;
            handle.state.id.clone()
        };

        self.pending_events.push(PanelEvent::TransportChanged {
            track_id: track_id.clone(),
            playing: false,
        });

        let count = self.listens.increment();
        self.pending_events
            .push(PanelEvent::ListenCountChanged { count });
        self.pending_events
            .push(PanelEvent::TrackFinished { track_id });
    }

    // ===== State Queries =====

    /// Observable state of one track
    pub fn track(&self, id: &TrackId) -> Option<&TrackState> {
        self.tracks
            .iter()
            .map(|h| &h.state)
            .find(|s| &s.id == id)
    }

    /// The currently playing track, if any
    pub fn playing_track(&self) -> Option<&TrackId> {
        self.tracks
            .iter()
            .find(|h| h.state.is_playing)
            .map(|h| &h.state.id)
    }

    /// Number of registered tracks
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Current listen counter value
    pub fn listen_count(&self) -> u64 {
        self.listens.count()
    }

    // ===== Events =====

    /// Drain pending panel events
    pub fn take_events(&mut self) -> Vec<PanelEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn index_of(&self, id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|h| &h.state.id == id)
    }
}

impl std::fmt::Debug for AudioPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioPanel")
            .field("tracks", &self.tracks.iter().map(|h| &h.state).collect::<Vec<_>>())
            .field("listens", &self.listens)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PanelError;
    use crate::volume::VolumeTier;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Play,
        Pause,
        SetVolume(f32),
        SetLooping(bool),
        Seek(Duration),
    }

    #[derive(Default)]
    struct FakeTransport {
        calls: Rc<RefCell<Vec<Call>>>,
        refuse_play: bool,
    }

    impl FakeTransport {
        fn recording() -> (Self, Rc<RefCell<Vec<Call>>>) {
            let calls = Rc::new(RefCell::new(Vec::new()));
            (
                Self {
                    calls: Rc::clone(&calls),
                    refuse_play: false,
                },
                calls,
            )
        }
    }

    impl MediaTransport for FakeTransport {
        fn play(&mut self) -> crate::Result<()> {
            if self.refuse_play {
                return Err(PanelError::Transport("autoplay blocked".into()));
            }
            self.calls.borrow_mut().push(Call::Play);
            Ok(())
        }

        fn pause(&mut self) {
            self.calls.borrow_mut().push(Call::Pause);
        }

        fn set_volume(&mut self, level: f32) {
            self.calls.borrow_mut().push(Call::SetVolume(level));
        }

        fn set_looping(&mut self, looping: bool) {
            self.calls.borrow_mut().push(Call::SetLooping(looping));
        }

        fn seek(&mut self, position: Duration) -> crate::Result<()> {
            self.calls.borrow_mut().push(Call::Seek(position));
            Ok(())
        }
    }

    fn id(s: &str) -> TrackId {
        TrackId::new(s)
    }

    fn panel_with_tracks(ids: &[&str]) -> AudioPanel {
        let mut panel = AudioPanel::new(
            PanelConfig::default(),
            Box::new(fable_core::storage::MemoryListenStore::new()),
        );
        for track in ids {
            let (fake, _calls) = FakeTransport::recording();
            panel.add_track(id(track), Box::new(fake));
        }
        panel
    }

    #[test]
    fn add_track_pushes_default_volume() {
        let mut panel = AudioPanel::new(
            PanelConfig::default(),
            Box::new(fable_core::storage::MemoryListenStore::new()),
        );
        let (fake, calls) = FakeTransport::recording();
        panel.add_track(id("voice-1"), Box::new(fake));

        assert_eq!(calls.borrow().as_slice(), &[Call::SetVolume(0.8)]);
        assert_eq!(panel.track(&id("voice-1")).unwrap().volume.level(), 0.8);
    }

    #[test]
    fn toggle_play_starts_then_pauses() {
        let mut panel = panel_with_tracks(&["voice-1"]);

        panel.toggle_play(&id("voice-1"));
        assert!(panel.track(&id("voice-1")).unwrap().is_playing);

        panel.toggle_play(&id("voice-1"));
        assert!(!panel.track(&id("voice-1")).unwrap().is_playing);
    }

    #[test]
    fn starting_second_track_pauses_first() {
        let mut panel = panel_with_tracks(&["voice-1", "voice-2"]);

        panel.toggle_play(&id("voice-1"));
        panel.take_events();
        panel.toggle_play(&id("voice-2"));

        assert!(!panel.track(&id("voice-1")).unwrap().is_playing);
        assert!(panel.track(&id("voice-2")).unwrap().is_playing);
        assert_eq!(panel.playing_track(), Some(&id("voice-2")));

        // Peer is paused before the target starts
        assert_eq!(
            panel.take_events(),
            vec![
                PanelEvent::TransportChanged {
                    track_id: id("voice-1"),
                    playing: false,
                },
                PanelEvent::TransportChanged {
                    track_id: id("voice-2"),
                    playing: true,
                },
            ]
        );
    }

    #[test]
    fn at_most_one_track_playing() {
        let mut panel = panel_with_tracks(&["a", "b", "c"]);

        for track in ["a", "b", "c", "b", "a"] {
            panel.toggle_play(&id(track));
            let playing = ["a", "b", "c"]
                .into_iter()
                .filter(|&t| panel.track(&id(t)).unwrap().is_playing)
                .count();
            assert!(playing <= 1);
        }
    }

    #[test]
    fn pause_affects_only_that_track() {
        let mut panel = panel_with_tracks(&["a", "b"]);
        panel.toggle_play(&id("a"));

        panel.pause(&id("b"));
        assert!(panel.track(&id("a")).unwrap().is_playing);

        panel.pause(&id("a"));
        assert!(!panel.track(&id("a")).unwrap().is_playing);
    }

    #[test]
    fn refused_play_leaves_track_paused() {
        let mut panel = AudioPanel::new(
            PanelConfig::default(),
            Box::new(fable_core::storage::MemoryListenStore::new()),
        );
        let (mut fake, _calls) = FakeTransport::recording();
        fake.refuse_play = true;
        panel.add_track(id("voice-1"), Box::new(fake));
        panel.take_events();

        panel.toggle_play(&id("voice-1"));
        assert!(!panel.track(&id("voice-1")).unwrap().is_playing);
        assert!(panel.take_events().is_empty());
    }

    #[test]
    fn toggle_loop_is_local() {
        let mut panel = panel_with_tracks(&["a", "b"]);

        panel.toggle_play(&id("a"));
        panel.toggle_loop(&id("b"));

        assert!(panel.track(&id("b")).unwrap().is_looping);
        assert!(!panel.track(&id("a")).unwrap().is_looping);
        assert!(panel.track(&id("a")).unwrap().is_playing);
    }

    #[test]
    fn set_volume_emits_tier() {
        let mut panel = panel_with_tracks(&["voice-1"]);
        panel.take_events();

        panel.set_volume(&id("voice-1"), 30.0);
        assert_eq!(
            panel.take_events(),
            vec![PanelEvent::VolumeChanged {
                track_id: id("voice-1"),
                level: 0.3,
                tier: VolumeTier::Low,
            }]
        );

        panel.set_volume(&id("voice-1"), 0.0);
        assert_eq!(
            panel.take_events(),
            vec![PanelEvent::VolumeChanged {
                track_id: id("voice-1"),
                level: 0.0,
                tier: VolumeTier::Muted,
            }]
        );
    }

    #[test]
    fn double_mute_restores_volume() {
        let mut panel = panel_with_tracks(&["voice-1"]);
        panel.set_volume(&id("voice-1"), 65.0);

        panel.toggle_mute(&id("voice-1"));
        assert_eq!(panel.track(&id("voice-1")).unwrap().volume.level(), 0.0);

        panel.toggle_mute(&id("voice-1"));
        assert_eq!(panel.track(&id("voice-1")).unwrap().volume.level(), 0.65);
    }

    #[test]
    fn seek_before_metadata_is_noop() {
        let mut panel = panel_with_tracks(&["voice-1"]);
        panel.take_events();

        panel.seek(&id("voice-1"), 50.0);
        assert_eq!(panel.track(&id("voice-1")).unwrap().position, Duration::ZERO);
        assert!(panel.take_events().is_empty());
    }

    #[test]
    fn seek_after_metadata_hits_half_duration() {
        let mut panel = panel_with_tracks(&["voice-1"]);
        panel.handle_media_event(
            &id("voice-1"),
            MediaEvent::MetadataLoaded {
                duration: Duration::from_secs(120),
            },
        );

        panel.seek(&id("voice-1"), 50.0);
        assert_eq!(
            panel.track(&id("voice-1")).unwrap().position,
            Duration::from_secs(60)
        );
    }

    #[test]
    fn progress_updates_do_not_touch_transport_state() {
        let mut panel = panel_with_tracks(&["voice-1"]);
        panel.toggle_play(&id("voice-1"));
        panel.set_volume(&id("voice-1"), 40.0);
        panel.take_events();

        panel.handle_media_event(
            &id("voice-1"),
            MediaEvent::MetadataLoaded {
                duration: Duration::from_secs(100),
            },
        );
        panel.handle_media_event(
            &id("voice-1"),
            MediaEvent::PositionChanged {
                position: Duration::from_secs(25),
            },
        );

        let track = panel.track(&id("voice-1")).unwrap();
        assert!(track.is_playing);
        assert_eq!(track.volume.level(), 0.4);
        assert_eq!(track.position, Duration::from_secs(25));

        let events = panel.take_events();
        assert!(events.contains(&PanelEvent::ProgressUpdated {
            track_id: id("voice-1"),
            position_ms: 25_000,
            percent: Some(25.0),
        }));
    }

    #[test]
    fn progress_percent_absent_before_metadata() {
        let mut panel = panel_with_tracks(&["voice-1"]);
        panel.take_events();

        panel.handle_media_event(
            &id("voice-1"),
            MediaEvent::PositionChanged {
                position: Duration::from_secs(3),
            },
        );

        assert_eq!(
            panel.take_events(),
            vec![PanelEvent::ProgressUpdated {
                track_id: id("voice-1"),
                position_ms: 3_000,
                percent: None,
            }]
        );
    }

    #[test]
    fn natural_end_resets_transport_and_counts() {
        let mut panel = panel_with_tracks(&["voice-1"]);
        panel.toggle_play(&id("voice-1"));
        panel.take_events();

        panel.handle_media_event(&id("voice-1"), MediaEvent::Ended);

        assert!(!panel.track(&id("voice-1")).unwrap().is_playing);
        assert_eq!(panel.listen_count(), 1);
        assert_eq!(
            panel.take_events(),
            vec![
                PanelEvent::TransportChanged {
                    track_id: id("voice-1"),
                    playing: false,
                },
                PanelEvent::ListenCountChanged { count: 1 },
                PanelEvent::TrackFinished {
                    track_id: id("voice-1"),
                },
            ]
        );
    }

    #[test]
    fn looping_track_end_event_still_counts() {
        let mut panel = panel_with_tracks(&["voice-1"]);
        panel.toggle_loop(&id("voice-1"));

        panel.handle_media_event(&id("voice-1"), MediaEvent::Ended);
        assert_eq!(panel.listen_count(), 1);
    }

    #[test]
    fn counter_continues_from_persisted_value() {
        let mut panel = AudioPanel::new(
            PanelConfig::default(),
            Box::new(fable_core::storage::MemoryListenStore::with_count(41)),
        );
        let (fake, _calls) = FakeTransport::recording();
        panel.add_track(id("voice-1"), Box::new(fake));

        panel.handle_media_event(&id("voice-1"), MediaEvent::Ended);
        assert_eq!(panel.listen_count(), 42);
    }

    #[test]
    fn operations_on_unknown_track_are_noops() {
        let mut panel = panel_with_tracks(&["voice-1"]);
        panel.take_events();

        panel.toggle_play(&id("ghost"));
        panel.pause(&id("ghost"));
        panel.toggle_loop(&id("ghost"));
        panel.set_volume(&id("ghost"), 50.0);
        panel.toggle_mute(&id("ghost"));
        panel.seek(&id("ghost"), 50.0);
        panel.handle_media_event(&id("ghost"), MediaEvent::Ended);

        assert!(panel.take_events().is_empty());
        assert_eq!(panel.listen_count(), 0);
    }

    #[test]
    fn transport_receives_commands() {
        let mut panel = AudioPanel::new(
            PanelConfig::default(),
            Box::new(fable_core::storage::MemoryListenStore::new()),
        );
        let (fake, calls) = FakeTransport::recording();
        panel.add_track(id("voice-1"), Box::new(fake));
        calls.borrow_mut().clear();

        panel.toggle_play(&id("voice-1"));
        panel.toggle_loop(&id("voice-1"));
        panel.toggle_mute(&id("voice-1"));
        panel.toggle_play(&id("voice-1"));

        assert_eq!(
            calls.borrow().as_slice(),
            &[
                Call::Play,
                Call::SetLooping(true),
                Call::SetVolume(0.0),
                Call::Pause,
            ]
        );
    }
}
