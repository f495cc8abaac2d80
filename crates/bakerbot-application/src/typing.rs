//! Cosmetic "typing..." delay before assistant messages are revealed.
//!
//! The controller has already stored the messages; this only paces how the
//! host shows them. Closing the widget cancels pending reveals so nothing is
//! drawn into a closed view.

use std::time::Duration;

use rand::Rng;
use tokio_util::sync::CancellationToken;

use bakerbot_core::config::TypingConfig;
use bakerbot_core::session::Message;

/// Base delay plus random jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingDelay {
    pub base: Duration,
    pub jitter: Duration,
}

impl TypingDelay {
    pub const NONE: TypingDelay = TypingDelay {
        base: Duration::ZERO,
        jitter: Duration::ZERO,
    };

    pub fn from_config(config: &TypingConfig) -> Self {
        Self {
            base: Duration::from_millis(config.base_delay_ms),
            jitter: Duration::from_millis(config.jitter_ms),
        }
    }

    pub fn sample(&self) -> Duration {
        let jitter_ms = self.jitter.as_millis() as u64;
        if jitter_ms == 0 {
            return self.base;
        }
        self.base + Duration::from_millis(rand::thread_rng().gen_range(0..=jitter_ms))
    }
}

/// How a reveal run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Completed,
    /// Cancelled with this many messages still hidden.
    Cancelled { remaining: usize },
}

/// Paces assistant messages and supports cancellation on close.
#[derive(Debug)]
pub struct TypingScheduler {
    delay: TypingDelay,
    token: CancellationToken,
}

impl TypingScheduler {
    pub fn new(delay: TypingDelay) -> Self {
        Self {
            delay,
            token: CancellationToken::new(),
        }
    }

    /// Token that cancels the current and future reveals until [`Self::reopen`].
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancels pending reveals.
    pub fn close(&self) {
        self.token.cancel();
    }

    /// Arms a fresh token after a close.
    pub fn reopen(&mut self) {
        if self.token.is_cancelled() {
            self.token = CancellationToken::new();
        }
    }

    /// Reveals `messages` one at a time, each after a typing delay.
    ///
    /// `typing` is called with `true` before each wait and `false` after it.
    pub async fn deliver<T, R>(
        &self,
        messages: &[Message],
        mut typing: T,
        mut reveal: R,
    ) -> Delivery
    where
        T: FnMut(bool),
        R: FnMut(&Message),
    {
        for (index, message) in messages.iter().enumerate() {
            if self.token.is_cancelled() {
                return Delivery::Cancelled {
                    remaining: messages.len() - index,
                };
            }
            typing(true);
            let cancelled = tokio::select! {
                _ = self.token.cancelled() => true,
                _ = tokio::time::sleep(self.delay.sample()) => false,
            };
            typing(false);
            if cancelled {
                tracing::debug!(remaining = messages.len() - index, "Typing delay cancelled");
                return Delivery::Cancelled {
                    remaining: messages.len() - index,
                };
            }
            reveal(message);
        }
        Delivery::Completed
    }
}
