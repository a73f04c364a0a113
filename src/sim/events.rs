//! Outbound game events and the listener interface hosts implement

use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};

/// Something the host UI cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Score changed (paddle hit, or reset to 0 on restart)
    ScoreChanged(u32),
    /// Ball fell through; carries the final score
    GameOver(u32),
}

/// Listener for game events.
///
/// Called synchronously on whichever thread produced the event, usually the
/// loop thread. Implementations that touch UI state must hand the event over
/// to the UI thread themselves.
pub trait GameEventSink: Send + Sync {
    fn on_score_changed(&self, new_score: u32);
    fn on_game_over(&self, final_score: u32);

    /// Route an event to the matching callback
    fn notify(&self, event: GameEvent) {
        match event {
            GameEvent::ScoreChanged(score) => self.on_score_changed(score),
            GameEvent::GameOver(score) => self.on_game_over(score),
        }
    }
}

/// Forwards events into a channel, the usual way to marshal them onto a UI thread.
/// A disconnected receiver drops events.
impl GameEventSink for Sender<GameEvent> {
    fn on_score_changed(&self, new_score: u32) {
        let _ = self.send(GameEvent::ScoreChanged(new_score));
    }

    fn on_game_over(&self, final_score: u32) {
        let _ = self.send(GameEvent::GameOver(final_score));
    }
}

/// Deliver events in order to an optional sink
pub fn dispatch(sink: Option<&dyn GameEventSink>, events: &[GameEvent]) {
    if let Some(sink) = sink {
        for &event in events {
            sink.notify(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::mpsc::channel;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<String>>,
    }

    impl GameEventSink for Recorder {
        fn on_score_changed(&self, new_score: u32) {
            self.calls.lock().unwrap().push(format!("score {new_score}"));
        }

        fn on_game_over(&self, final_score: u32) {
            self.calls.lock().unwrap().push(format!("over {final_score}"));
        }
    }

    #[test]
    fn test_dispatch_routes_in_order() {
        let recorder = Recorder::default();
        dispatch(
            Some(&recorder),
            &[GameEvent::ScoreChanged(3), GameEvent::GameOver(3)],
        );
        assert_eq!(*recorder.calls.lock().unwrap(), vec!["score 3", "over 3"]);
    }

    #[test]
    fn test_dispatch_without_sink_is_noop() {
        dispatch(None, &[GameEvent::GameOver(1)]);
    }

    #[test]
    fn test_channel_sink() {
        let (tx, rx) = channel();
        tx.on_score_changed(1);
        tx.on_game_over(1);
        assert_eq!(
            rx.try_iter().collect::<Vec<_>>(),
            vec![GameEvent::ScoreChanged(1), GameEvent::GameOver(1)]
        );
    }

    #[test]
    fn test_channel_sink_ignores_closed_receiver() {
        let (tx, rx) = channel::<GameEvent>();
        drop(rx);
        tx.on_score_changed(5);
    }
}
