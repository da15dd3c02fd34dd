//! Lazy, cancellable network sequences.
//!
//! [`range`] and [`split`] are the two producers. Each returns a [`NetSeq`] holding an
//! explicit cursor; every pull computes exactly one network, so nothing is produced
//! ahead of the consumer and very long sequences (up to 2^128 items) cost constant
//! memory.
//!
//! A sequence is single-consumer. Pulls take a [`CancelToken`] which is checked before
//! each item; once it fires the sequence is cancelled for good.

mod cancel;
mod range;
mod split;

pub use cancel::CancelToken;
pub use range::range;
pub use split::split;

use crate::models::Network;
use futures::stream::{self, Stream};
use range::RangeCursor;
use split::SplitCursor;

/// Lifecycle of a [`NetSeq`]. `Finished` and `Cancelled` are terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SeqState {
    /// More items may follow.
    Active,
    /// The producer has emitted everything, or had nothing to emit.
    Finished,
    /// The consumer's token fired; no further items will be produced.
    Cancelled,
}

#[derive(Debug)]
pub(crate) enum Cursor {
    Range(RangeCursor),
    Split(SplitCursor),
}

impl Cursor {
    fn advance(&mut self) -> Option<Network> {
        match self {
            Cursor::Range(c) => c.advance(),
            Cursor::Split(c) => c.advance(),
        }
    }
}

/// Ordered, single-pass sequence of networks.
#[derive(Debug)]
pub struct NetSeq {
    state: SeqState,
    cursor: Option<Cursor>,
}

impl NetSeq {
    /// A sequence that is already finished.
    pub fn empty() -> NetSeq {
        NetSeq {
            state: SeqState::Finished,
            cursor: None,
        }
    }

    pub(crate) fn from_cursor(cursor: Cursor) -> NetSeq {
        NetSeq {
            state: SeqState::Active,
            cursor: Some(cursor),
        }
    }

    pub fn state(&self) -> SeqState {
        self.state
    }

    /// Returns the next network, or None once the sequence is finished or cancelled.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self, cancel: &CancelToken) -> Option<Network> {
        if self.state != SeqState::Active {
            return None;
        }
        if cancel.is_cancelled() {
            log::debug!("sequence cancelled");
            self.state = SeqState::Cancelled;
            self.cursor = None;
            return None;
        }

        match self.cursor.as_mut().and_then(Cursor::advance) {
            Some(nt) => {
                log::trace!("emit {nt}");
                Some(nt)
            }
            None => {
                self.state = SeqState::Finished;
                self.cursor = None;
                None
            }
        }
    }

    /// Returns up to `num` networks, fewer if the sequence ends or is cancelled.
    pub fn take(&mut self, cancel: &CancelToken, num: usize) -> Vec<Network> {
        self.iter(cancel).take(num).collect()
    }

    /// Drains the sequence until it ends or is cancelled.
    ///
    /// Sequences can be astronomically long; pass a token that will fire, or use
    /// [`NetSeq::take`], unless the size is known to be small.
    pub fn all(&mut self, cancel: &CancelToken) -> Vec<Network> {
        self.iter(cancel).collect()
    }

    /// Borrowing iterator that pulls with `cancel`.
    pub fn iter<'a>(&'a mut self, cancel: &'a CancelToken) -> Iter<'a> {
        Iter { seq: self, cancel }
    }

    /// Turn the sequence into an async [`Stream`] for consumers on an executor.
    pub fn into_stream(self, cancel: CancelToken) -> impl Stream<Item = Network> {
        stream::unfold((self, cancel), |(mut seq, cancel)| async move {
            let nt = seq.next(&cancel)?;
            Some((nt, (seq, cancel)))
        })
    }
}

/// Iterator returned by [`NetSeq::iter`].
pub struct Iter<'a> {
    seq: &'a mut NetSeq,
    cancel: &'a CancelToken,
}

impl Iterator for Iter<'_> {
    type Item = Network;

    fn next(&mut self) -> Option<Network> {
        self.seq.next(self.cancel)
    }
}
