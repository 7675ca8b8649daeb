//! Autoplay policy for the background audio.
//!
//! Browsers usually refuse unmuted playback until the user has interacted with
//! the page. The controller tries unmuted first, falls back to muted playback
//! with a delayed unmute, and otherwise waits for the first interaction.
use crate::media::{MediaError, MediaHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, info, instrument, warn};

/// Runs a task after a delay. Dropping the returned handle cancels the task.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Result of one autoplay sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayOutcome {
    /// Unmuted playback started.
    Playing,
    /// Only muted playback was allowed; an unmute is scheduled.
    PlayingMuted,
    /// Both attempts were rejected; playback waits for the user.
    Blocked,
    /// Another sequence was still running, so nothing new was started.
    AlreadyRunning,
    /// The controller was torn down.
    Closed,
}

/// Shared one-shot latch for the first user interaction.
///
/// Click, touch and key listeners all consult the same gate so only the first
/// of them triggers a retry.
#[derive(Debug)]
pub struct InteractionGate {
    open: Cell<bool>,
}

impl Default for InteractionGate {
    fn default() -> Self {
        InteractionGate {
            open: Cell::new(true),
        }
    }
}

impl InteractionGate {
    /// Closes the gate. Returns true only for the call that closed it.
    pub fn consume(&self) -> bool {
        self.open.replace(false)
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }
}

struct InFlight<'a>(&'a Cell<bool>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Scheduled unmute. `fired` flips once the task has run.
struct PendingUnmute<H> {
    _timer: H,
    fired: Rc<Cell<bool>>,
}

pub struct AutoplayController<M, S>
where
    M: MediaHandle + Clone + 'static,
    S: Scheduler,
{
    media: M,
    scheduler: S,
    volume: f64,
    unmute_delay_ms: u32,
    gate: InteractionGate,
    in_flight: Cell<bool>,
    closed: Cell<bool>,
    retry_queued: Cell<bool>,
    pending_unmute: RefCell<Option<PendingUnmute<S::Handle>>>,
}

impl<M, S> AutoplayController<M, S>
where
    M: MediaHandle + Clone + 'static,
    S: Scheduler,
{
    pub fn new(media: M, scheduler: S, volume: f64, unmute_delay_ms: u32) -> Self {
        AutoplayController {
            media,
            scheduler,
            volume: volume.clamp(0.0, 1.0),
            unmute_delay_ms,
            gate: InteractionGate::default(),
            in_flight: Cell::new(false),
            closed: Cell::new(false),
            retry_queued: Cell::new(false),
            pending_unmute: RefCell::new(None),
        }
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn gate(&self) -> &InteractionGate {
        &self.gate
    }

    /// Whether a delayed unmute is scheduled and has not fired yet.
    pub fn has_pending_unmute(&self) -> bool {
        self.pending_unmute
            .borrow()
            .as_ref()
            .is_some_and(|pending| !pending.fired.get())
    }

    /// Runs the full autoplay sequence. An interaction that arrived while it
    /// was running gets one more sequence if this one ends blocked.
    #[instrument(skip(self), fields(volume = self.volume))]
    pub async fn start(&self) -> AutoplayOutcome {
        if self.closed.get() {
            return AutoplayOutcome::Closed;
        }
        if self.in_flight.replace(true) {
            debug!("autoplay already in progress");
            return AutoplayOutcome::AlreadyRunning;
        }
        let _guard = InFlight(&self.in_flight);

        loop {
            let outcome = self.attempt().await;
            let retry = self.retry_queued.replace(false);
            if outcome == AutoplayOutcome::Blocked && retry && !self.closed.get() {
                debug!("retrying for an interaction that arrived mid-sequence");
                continue;
            }
            return outcome;
        }
    }

    async fn attempt(&self) -> AutoplayOutcome {
        self.cancel_pending_unmute();
        self.media.set_volume(self.volume);
        self.media.set_muted(false);

        let err = match self.media.play().await {
            Ok(()) => {
                info!("autoplay started unmuted");
                return AutoplayOutcome::Playing;
            }
            Err(err) => err,
        };

        warn!(%err, "unmuted autoplay rejected, retrying muted");
        self.media.set_muted(true);
        match self.media.play().await {
            Ok(()) if self.closed.get() => {
                debug!("muted autoplay resolved after teardown");
                AutoplayOutcome::Closed
            }
            Ok(()) => {
                info!(delay_ms = self.unmute_delay_ms, "autoplay started muted");
                self.schedule_unmute();
                AutoplayOutcome::PlayingMuted
            }
            Err(err) => {
                warn!(%err, "muted autoplay rejected, waiting for user interaction");
                AutoplayOutcome::Blocked
            }
        }
    }

    /// Handles the first user interaction on the page.
    ///
    /// Only the first call does anything; it retries the sequence when the
    /// audio is not already playing. If a sequence is still running the retry
    /// is queued onto it and `AlreadyRunning` is returned.
    pub async fn on_interaction(&self, is_playing: bool) -> Option<AutoplayOutcome> {
        if !self.gate.consume() {
            return None;
        }
        if is_playing {
            debug!("interaction after playback started, no retry needed");
            return None;
        }
        if self.in_flight.get() {
            debug!("interaction during autoplay, queueing a retry");
            self.retry_queued.set(true);
            return Some(AutoplayOutcome::AlreadyRunning);
        }
        Some(self.start().await)
    }

    /// Flips the muted flag and cancels any pending automatic unmute.
    pub fn toggle_mute(&self) -> bool {
        self.cancel_pending_unmute();
        let muted = !self.media.is_muted();
        self.media.set_muted(muted);
        muted
    }

    /// Releases the pending unmute and closes the interaction gate. Sequences
    /// still awaiting the element finish without scheduling anything.
    pub fn teardown(&self) {
        self.closed.set(true);
        self.retry_queued.set(false);
        self.cancel_pending_unmute();
        self.gate.consume();
    }

    fn schedule_unmute(&self) {
        let media = self.media.clone();
        let fired = Rc::new(Cell::new(false));
        let on_fire = fired.clone();
        let timer = self.scheduler.schedule(
            self.unmute_delay_ms,
            Box::new(move || {
                debug!("delayed unmute firing");
                on_fire.set(true);
                media.set_muted(false);
            }),
        );
        self.pending_unmute.replace(Some(PendingUnmute {
            _timer: timer,
            fired,
        }));
    }

    fn cancel_pending_unmute(&self) {
        self.pending_unmute.borrow_mut().take();
    }
}

/// What a paired toggle asked the elements to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairToggle {
    Paused,
    Resumed,
}

/// Pauses or resumes audio and video as one unit.
///
/// If either element is playing both are paused. Otherwise both are asked to
/// play; a rejection from either pauses both again.
pub async fn toggle_pair<A, V>(
    audio: &A,
    video: Option<&V>,
    audio_playing: bool,
    video_playing: bool,
) -> Result<PairToggle, MediaError>
where
    A: MediaHandle,
    V: MediaHandle,
{
    if audio_playing || video_playing {
        pause_pair(audio, video)?;
        return Ok(PairToggle::Paused);
    }

    let resumed = async {
        audio.play().await?;
        if let Some(video) = video {
            video.play().await?;
        }
        Ok::<_, MediaError>(())
    }
    .await;

    if let Err(err) = resumed {
        warn!(%err, "playback toggle failed, pausing audio and video");
        if let Err(pause_err) = pause_pair(audio, video) {
            warn!(%pause_err, "pause after failed toggle also failed");
        }
        return Err(err);
    }
    Ok(PairToggle::Resumed)
}

fn pause_pair<A: MediaHandle, V: MediaHandle>(audio: &A, video: Option<&V>) -> Result<(), MediaError> {
    let audio_result = audio.pause();
    let video_result = video.map_or(Ok(()), |video| video.pause());
    audio_result.and(video_result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{join, poll_fn};
    use std::collections::VecDeque;
    use std::future::Future;
    use std::task::Poll;

    #[derive(Default)]
    struct FakeElement {
        play_results: VecDeque<Result<(), MediaError>>,
        play_calls: usize,
        muted_when_played: Vec<bool>,
        pause_calls: usize,
        playing: bool,
        muted: bool,
        volume: f64,
        yield_on_play: bool,
    }

    #[derive(Clone, Default)]
    struct FakeMedia(Rc<RefCell<FakeElement>>);

    impl FakeMedia {
        fn with_results(results: Vec<Result<(), MediaError>>) -> Self {
            let media = FakeMedia::default();
            media.0.borrow_mut().play_results = results.into();
            media
        }

        fn slow(self) -> Self {
            self.0.borrow_mut().yield_on_play = true;
            self
        }

        fn playing(self) -> Self {
            self.0.borrow_mut().playing = true;
            self
        }

        fn state(&self) -> std::cell::Ref<'_, FakeElement> {
            self.0.borrow()
        }
    }

    impl MediaHandle for FakeMedia {
        fn set_volume(&self, volume: f64) {
            self.0.borrow_mut().volume = volume;
        }

        fn set_muted(&self, muted: bool) {
            self.0.borrow_mut().muted = muted;
        }

        fn is_muted(&self) -> bool {
            self.0.borrow().muted
        }

        fn play(&self) -> impl Future<Output = Result<(), MediaError>> {
            let slow = {
                let mut element = self.0.borrow_mut();
                element.play_calls += 1;
                let muted = element.muted;
                element.muted_when_played.push(muted);
                element.yield_on_play
            };
            let media = self.clone();
            async move {
                if slow {
                    yield_once().await;
                }
                let mut element = media.0.borrow_mut();
                let result = element.play_results.pop_front().unwrap_or(Ok(()));
                if result.is_ok() {
                    element.playing = true;
                }
                result
            }
        }

        fn pause(&self) -> Result<(), MediaError> {
            let mut element = self.0.borrow_mut();
            element.pause_calls += 1;
            element.playing = false;
            Ok(())
        }
    }

    type Slot = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

    #[derive(Clone, Default)]
    struct FakeScheduler {
        slots: Rc<RefCell<Vec<(u32, Slot)>>>,
    }

    struct FakeTimer(Slot);

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.0.borrow_mut().take();
        }
    }

    impl FakeScheduler {
        fn delays(&self) -> Vec<u32> {
            self.slots.borrow().iter().map(|(delay, _)| *delay).collect()
        }

        fn fire_all(&self) {
            let slots: Vec<Slot> = self.slots.borrow().iter().map(|(_, slot)| slot.clone()).collect();
            for slot in slots {
                let task = slot.borrow_mut().take();
                if let Some(task) = task {
                    task();
                }
            }
        }
    }

    impl Scheduler for FakeScheduler {
        type Handle = FakeTimer;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> FakeTimer {
            let slot: Slot = Rc::new(RefCell::new(Some(task)));
            self.slots.borrow_mut().push((delay_ms, slot.clone()));
            FakeTimer(slot)
        }
    }

    async fn yield_once() {
        let mut yielded = false;
        poll_fn(|cx| {
            if yielded {
                Poll::Ready(())
            } else {
                yielded = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        })
        .await
    }

    fn rejected() -> Result<(), MediaError> {
        Err(MediaError::PlayRejected("NotAllowedError".to_string()))
    }

    #[test]
    fn unmuted_success_needs_no_fallback() {
        let media = FakeMedia::default();
        let scheduler = FakeScheduler::default();
        let controller = AutoplayController::new(media.clone(), scheduler.clone(), 0.8, 1_000);

        let outcome = block_on(controller.start());

        assert_eq!(outcome, AutoplayOutcome::Playing);
        assert_eq!(media.state().play_calls, 1);
        assert_eq!(media.state().muted_when_played, vec![false]);
        assert_eq!(media.state().volume, 0.8);
        assert!(scheduler.delays().is_empty());
    }

    #[test]
    fn rejected_autoplay_retries_muted_once_then_unmutes() {
        let media = FakeMedia::with_results(vec![rejected(), Ok(())]);
        let scheduler = FakeScheduler::default();
        let controller = AutoplayController::new(media.clone(), scheduler.clone(), 0.8, 1_000);

        let outcome = block_on(controller.start());

        assert_eq!(outcome, AutoplayOutcome::PlayingMuted);
        assert_eq!(media.state().muted_when_played, vec![false, true]);
        assert!(media.state().muted);
        assert_eq!(scheduler.delays(), vec![1_000]);

        assert!(controller.has_pending_unmute());
        scheduler.fire_all();

        assert!(!media.state().muted);
        assert!(!controller.has_pending_unmute());
    }

    #[test]
    fn teardown_cancels_delayed_unmute() {
        let media = FakeMedia::with_results(vec![rejected(), Ok(())]);
        let scheduler = FakeScheduler::default();
        let controller = AutoplayController::new(media.clone(), scheduler.clone(), 0.8, 1_000);
        block_on(controller.start());
        assert!(controller.has_pending_unmute());

        controller.teardown();
        scheduler.fire_all();

        assert!(media.state().muted);
        assert!(!controller.has_pending_unmute());
    }

    #[test]
    fn dropping_controller_cancels_delayed_unmute() {
        let media = FakeMedia::with_results(vec![rejected(), Ok(())]);
        let scheduler = FakeScheduler::default();
        let controller = AutoplayController::new(media.clone(), scheduler.clone(), 0.8, 1_000);
        block_on(controller.start());

        drop(controller);
        scheduler.fire_all();

        assert!(media.state().muted);
    }

    #[test]
    fn both_rejections_leave_playback_to_the_user() {
        let media = FakeMedia::with_results(vec![rejected(), rejected()]);
        let scheduler = FakeScheduler::default();
        let controller = AutoplayController::new(media.clone(), scheduler.clone(), 0.8, 1_000);

        let outcome = block_on(controller.start());

        assert_eq!(outcome, AutoplayOutcome::Blocked);
        assert_eq!(media.state().play_calls, 2);
        assert!(!media.state().playing);
        assert!(scheduler.delays().is_empty());
    }

    #[test]
    fn interaction_retries_at_most_once() {
        let media = FakeMedia::with_results(vec![rejected(), rejected(), rejected(), rejected()]);
        let controller = AutoplayController::new(media.clone(), FakeScheduler::default(), 0.8, 1_000);

        let first = block_on(controller.on_interaction(false));
        let second = block_on(controller.on_interaction(false));
        let third = block_on(controller.on_interaction(false));

        assert_eq!(first, Some(AutoplayOutcome::Blocked));
        assert_eq!(second, None);
        assert_eq!(third, None);
        assert_eq!(media.state().play_calls, 2);
        assert!(!controller.gate().is_open());
    }

    #[test]
    fn interaction_during_blocked_autoplay_retries_afterwards() {
        let media = FakeMedia::with_results(vec![rejected(), rejected(), rejected(), Ok(())]).slow();
        let controller = AutoplayController::new(media.clone(), FakeScheduler::default(), 0.8, 1_000);

        let (started, gesture) = block_on(join(controller.start(), controller.on_interaction(false)));

        assert_eq!(gesture, Some(AutoplayOutcome::AlreadyRunning));
        assert_eq!(started, AutoplayOutcome::PlayingMuted);
        assert_eq!(media.state().play_calls, 4);
        assert!(!controller.gate().is_open());
        assert_eq!(block_on(controller.on_interaction(false)), None);
    }

    #[test]
    fn interaction_during_successful_autoplay_adds_nothing() {
        let media = FakeMedia::default().slow();
        let controller = AutoplayController::new(media.clone(), FakeScheduler::default(), 0.8, 1_000);

        let (started, gesture) = block_on(join(controller.start(), controller.on_interaction(false)));

        assert_eq!(gesture, Some(AutoplayOutcome::AlreadyRunning));
        assert_eq!(started, AutoplayOutcome::Playing);
        assert_eq!(media.state().play_calls, 1);

        // The queued retry was dropped with the successful sequence.
        media.0.borrow_mut().play_results = vec![rejected(), rejected()].into();
        assert_eq!(block_on(controller.start()), AutoplayOutcome::Blocked);
        assert_eq!(media.state().play_calls, 3);
    }

    #[test]
    fn interaction_while_playing_consumes_gate_without_retry() {
        let media = FakeMedia::default().playing();
        let controller = AutoplayController::new(media.clone(), FakeScheduler::default(), 0.8, 1_000);

        assert_eq!(block_on(controller.on_interaction(true)), None);
        assert_eq!(block_on(controller.on_interaction(false)), None);
        assert_eq!(media.state().play_calls, 0);
    }

    #[test]
    fn interaction_after_teardown_is_ignored() {
        let media = FakeMedia::default();
        let controller = AutoplayController::new(media.clone(), FakeScheduler::default(), 0.8, 1_000);

        controller.teardown();

        assert_eq!(block_on(controller.on_interaction(false)), None);
        assert_eq!(media.state().play_calls, 0);
    }

    #[test]
    fn start_after_teardown_does_nothing() {
        let media = FakeMedia::default();
        let controller = AutoplayController::new(media.clone(), FakeScheduler::default(), 0.8, 1_000);

        controller.teardown();

        assert_eq!(block_on(controller.start()), AutoplayOutcome::Closed);
        assert_eq!(media.state().play_calls, 0);
    }

    #[test]
    fn manual_mute_cancels_pending_unmute() {
        let media = FakeMedia::with_results(vec![rejected(), Ok(())]);
        let scheduler = FakeScheduler::default();
        let controller = AutoplayController::new(media.clone(), scheduler.clone(), 0.8, 1_000);
        block_on(controller.start());

        let muted = controller.toggle_mute();
        scheduler.fire_all();

        assert!(!muted);
        assert!(!media.state().muted);
        assert!(controller.toggle_mute());
        assert!(media.state().muted);
        assert_eq!(media.state().pause_calls, 0);
    }

    #[test]
    fn volume_is_clamped() {
        let media = FakeMedia::default();
        let controller = AutoplayController::new(media.clone(), FakeScheduler::default(), 3.0, 1_000);

        block_on(controller.start());

        assert_eq!(media.state().volume, 1.0);
    }

    #[test]
    fn gate_only_opens_once() {
        let gate = InteractionGate::default();

        assert!(gate.is_open());
        assert!(gate.consume());
        assert!(!gate.consume());
        assert!(!gate.is_open());
    }

    #[test]
    fn toggle_pauses_both_when_only_audio_is_playing() {
        let audio = FakeMedia::default().playing();
        let video = FakeMedia::default();

        let result = block_on(toggle_pair(&audio, Some(&video), true, false));

        assert_eq!(result, Ok(PairToggle::Paused));
        assert!(!audio.state().playing);
        assert!(!video.state().playing);
        assert_eq!(audio.state().pause_calls, 1);
        assert_eq!(video.state().pause_calls, 1);
    }

    #[test]
    fn toggle_resumes_both_when_neither_is_playing() {
        let audio = FakeMedia::default();
        let video = FakeMedia::default();

        let result = block_on(toggle_pair(&audio, Some(&video), false, false));

        assert_eq!(result, Ok(PairToggle::Resumed));
        assert!(audio.state().playing);
        assert!(video.state().playing);
    }

    #[test]
    fn failed_video_play_stops_both() {
        let audio = FakeMedia::default();
        let video = FakeMedia::with_results(vec![rejected()]);

        let result = block_on(toggle_pair(&audio, Some(&video), false, false));

        assert_eq!(result, Err(MediaError::PlayRejected("NotAllowedError".to_string())));
        assert!(!audio.state().playing);
        assert!(!video.state().playing);
    }

    #[test]
    fn failed_audio_play_never_touches_video_play() {
        let audio = FakeMedia::with_results(vec![rejected()]);
        let video = FakeMedia::default();

        let result = block_on(toggle_pair(&audio, Some(&video), false, false));

        assert!(result.is_err());
        assert_eq!(video.state().play_calls, 0);
        assert!(!video.state().playing);
    }

    #[test]
    fn toggle_without_video_controls_audio_alone() {
        let audio = FakeMedia::default();

        let result = block_on(toggle_pair::<_, FakeMedia>(&audio, None, false, false));

        assert_eq!(result, Ok(PairToggle::Resumed));
        assert!(audio.state().playing);
    }
}
