//! WebSocket connection to the backend's push channel.
//!
//! One [`Channel`] owns one connection attempt. The reader task is the
//! only producer on the event queue, so delivery order always matches
//! arrival order on the socket. Reconnect policy belongs to the
//! caller: a lost or failed channel is observed through the state
//! watch, and a fresh [`Channel::connect`] starts over.

use futures_util::{SinkExt, StreamExt};
use tokio::sync::{mpsc, watch};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, warn};

use scoop_models::{ClientCommand, Envelope, PushEvent};

use crate::config::ChannelConfig;
use crate::error::{ChannelError, ChannelResult};
use crate::state::ConnectionState;

/// Handle to a live push channel.
pub struct Channel {
    state_rx: watch::Receiver<ConnectionState>,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
}

impl Channel {
    /// Establish the channel.
    ///
    /// On handshake success the channel immediately emits `get_videos`:
    /// the resulting `videos_update` push is the sole mechanism by
    /// which the catalog is (re)populated after a (re)connect.
    ///
    /// Returns the channel handle and the ordered push event queue.
    pub async fn connect(
        config: ChannelConfig,
    ) -> ChannelResult<(Self, mpsc::UnboundedReceiver<PushEvent>)> {
        let url = config.connect_url()?;
        let (state_tx, state_rx) = watch::channel(ConnectionState::Connecting);

        let stream = match connect_async(url.as_str()).await {
            Ok((stream, _response)) => stream,
            Err(e) => {
                let _ = state_tx.send(ConnectionState::Failed);
                return Err(ChannelError::HandshakeFailed(e));
            }
        };
        let _ = state_tx.send(ConnectionState::Connected);
        debug!("Channel connected: {}", config.url);

        let (mut sink, mut source) = stream.split();
        let (command_tx, mut command_rx) = mpsc::unbounded_channel::<ClientCommand>();
        let (event_tx, event_rx) = mpsc::unbounded_channel::<PushEvent>();

        // Writer task: serialize commands onto the socket.
        tokio::spawn(async move {
            while let Some(command) = command_rx.recv().await {
                let frame = match serde_json::to_string(&command.to_envelope()) {
                    Ok(frame) => frame,
                    Err(e) => {
                        warn!("Failed to encode channel command: {}", e);
                        continue;
                    }
                };
                if sink.send(Message::Text(frame)).await.is_err() {
                    break;
                }
            }
        });

        // Reader task: decode frames in arrival order onto one queue.
        let reader_state = state_tx.clone();
        tokio::spawn(async move {
            while let Some(message) = source.next().await {
                match message {
                    Ok(Message::Text(text)) => {
                        if let Some(event) = decode_frame(&text) {
                            if event_tx.send(event).is_err() {
                                break;
                            }
                        }
                    }
                    Ok(Message::Close(_)) => break,
                    Ok(_) => {}
                    Err(e) => {
                        warn!("Channel read error: {}", e);
                        break;
                    }
                }
            }
            let _ = reader_state.send(ConnectionState::Disconnected);
        });

        let channel = Self {
            state_rx,
            command_tx,
        };

        // Initial catalog refresh; failure here means the channel
        // already went away, which the state watch will report.
        let _ = channel.send(ClientCommand::GetVideos);

        Ok((channel, event_rx))
    }

    /// Current connectivity state.
    pub fn state(&self) -> ConnectionState {
        *self.state_rx.borrow()
    }

    /// Watch connectivity transitions.
    pub fn state_watch(&self) -> watch::Receiver<ConnectionState> {
        self.state_rx.clone()
    }

    /// Emit a command on the channel.
    pub fn send(&self, command: ClientCommand) -> ChannelResult<()> {
        self.command_tx
            .send(command)
            .map_err(|_| ChannelError::Closed)
    }
}

/// Decode one text frame into a push event.
///
/// Frames that are not JSON envelopes, and envelopes for events the
/// client does not handle, are logged and dropped rather than treated
/// as fatal.
fn decode_frame(text: &str) -> Option<PushEvent> {
    let envelope: Envelope = match serde_json::from_str(text) {
        Ok(envelope) => envelope,
        Err(e) => {
            debug!("Ignoring non-envelope frame: {}", e);
            return None;
        }
    };
    let name = envelope.event.clone();
    match PushEvent::from_envelope(envelope) {
        Ok(Some(event)) => Some(event),
        Ok(None) => {
            debug!("Ignoring unhandled event: {}", name);
            None
        }
        Err(e) => {
            warn!("Bad payload for event {}: {}", name, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_frame_videos_update() {
        let event = decode_frame(r#"{"event":"videos_update","data":[{"title":"T1","path":"/x/T1.mp4"}]}"#);
        match event {
            Some(PushEvent::VideosUpdate(videos)) => assert_eq!(videos[0].title, "T1"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_decode_frame_tolerates_noise() {
        assert!(decode_frame("pong: hello").is_none());
        assert!(decode_frame(r#"{"event":"download_progress","data":{}}"#).is_none());
        // Known event with a broken payload is dropped, not fatal.
        assert!(decode_frame(r#"{"event":"job_update","data":{"bogus":1}}"#).is_none());
    }
}
