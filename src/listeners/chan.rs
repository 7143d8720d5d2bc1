//! # Channel send handles as listeners.
//!
//! [`Listener`] is implemented directly for tokio's mpsc send handles, so
//! a raw channel can be registered without naming an adapter type:
//! delivering an event means enqueueing a clone of it.
//!
//! ## Blocking contract
//! - [`mpsc::Sender`]: when the channel's buffer is full, delivery
//!   suspends the *sending* task until a receiver makes room. This is
//!   deliberate: the broadcast call waits, and every listener ordered
//!   after this one waits with it. Callers that need bounded broadcast
//!   latency should size the buffer accordingly or use an unbounded
//!   channel.
//! - [`mpsc::UnboundedSender`]: never blocks.
//!
//! An event sent to a channel whose receiver has been dropped is
//! discarded silently; the listener stays registered and keeps
//! discarding until removed.

use async_trait::async_trait;

use tokio::sync::mpsc;

use crate::listeners::listener::Listener;

#[async_trait]
impl<E> Listener<E> for mpsc::Sender<E>
where
    E: Clone + Send + Sync,
{
    /// Enqueues a clone of the event, waiting for buffer space if the
    /// channel is full.
    async fn on_event(&self, event: &E) {
        let _ = self.send(event.clone()).await;
    }
}

#[async_trait]
impl<E> Listener<E> for mpsc::UnboundedSender<E>
where
    E: Clone + Send + Sync,
{
    /// Enqueues a clone of the event. Never blocks.
    async fn on_event(&self, event: &E) {
        let _ = self.send(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use tokio::sync::mpsc;
    use tokio::time::timeout;

    use crate::listeners::adapt::as_listener;

    #[tokio::test]
    async fn test_bounded_channel_receives_event() {
        let (tx, mut rx) = mpsc::channel::<u32>(1);
        let l = as_listener(tx);

        l.on_event(&42).await;
        assert_eq!(rx.recv().await, Some(42));
    }

    #[tokio::test]
    async fn test_full_channel_suspends_delivery_until_drained() {
        let (tx, mut rx) = mpsc::channel::<u32>(1);
        let l = as_listener(tx);

        l.on_event(&1).await;

        // Buffer of one is full: the second delivery cannot complete.
        let blocked = timeout(Duration::from_millis(50), l.on_event(&2)).await;
        assert!(blocked.is_err());

        // The timed-out delivery never enqueued; drain and retry.
        assert_eq!(rx.recv().await, Some(1));
        timeout(Duration::from_millis(50), l.on_event(&2))
            .await
            .expect("delivery should complete once the buffer has room");
        assert_eq!(rx.recv().await, Some(2));
    }

    #[tokio::test]
    async fn test_in_flight_delivery_resumes_on_drain() {
        let (tx, mut rx) = mpsc::channel::<u32>(1);
        let l = as_listener(tx);

        l.on_event(&1).await;

        let pending = tokio::spawn({
            let l = Arc::clone(&l);
            async move { l.on_event(&2).await }
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!pending.is_finished());

        assert_eq!(rx.recv().await, Some(1));
        pending.await.unwrap();
        assert_eq!(rx.recv().await, Some(2));
    }

    #[tokio::test]
    async fn test_unbounded_channel_never_blocks() {
        let (tx, mut rx) = mpsc::unbounded_channel::<u32>();
        let l = as_listener(tx);

        for i in 0..64 {
            l.on_event(&i).await;
        }
        for i in 0..64 {
            assert_eq!(rx.recv().await, Some(i));
        }
    }

    #[tokio::test]
    async fn test_dropped_receiver_discards_events() {
        let (tx, rx) = mpsc::channel::<u32>(1);
        drop(rx);

        let l = as_listener(tx);
        l.on_event(&7).await;
    }
}
