//! State stores
//!
//! Each store keeps the last-fetched copy of its resources behind a
//! `watch` channel: callers read a snapshot with `state()` or follow
//! changes through `subscribe()`. Actions replace whole fields on success
//! and leave state untouched on failure.

mod guest;
mod meal;
mod staff;
mod user;

pub use guest::{GuestState, GuestStore};
pub use meal::{MealState, MealStore};
pub use staff::{StaffState, StaffStore};
pub use user::{LOGIN_OK, UserState, UserStore};

use tokio::sync::watch;

use crate::{ApiResponse, ClientError, ClientResult};

/// Observable state holder shared by all stores
#[derive(Debug)]
pub struct StateCell<S> {
    tx: watch::Sender<S>,
}

impl<S: Clone + Default> Default for StateCell<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: Clone> StateCell<S> {
    pub fn new(initial: S) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Snapshot of the current state
    pub fn get(&self) -> S {
        self.tx.borrow().clone()
    }

    /// Receiver notified on every change
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.tx.subscribe()
    }

    /// Apply a change and notify subscribers
    pub fn update(&self, f: impl FnOnce(&mut S)) {
        self.tx.send_modify(f);
    }
}

/// Reject envelopes whose code is not `expected`
pub(crate) fn expect_code<T>(resp: ApiResponse<T>, expected: u16) -> ClientResult<ApiResponse<T>> {
    if resp.is_code(expected) {
        Ok(resp)
    } else {
        Err(ClientError::Api {
            code: resp.code,
            message: resp.message,
        })
    }
}

/// Take `data` out of an envelope carrying `expected`
pub(crate) fn expect_data<T>(resp: ApiResponse<T>, expected: u16) -> ClientResult<T> {
    let resp = expect_code(resp, expected)?;
    resp.data
        .ok_or_else(|| ClientError::InvalidResponse("Missing response data".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_data() {
        assert_eq!(expect_data(ApiResponse::ok(5), 200).unwrap(), 5);

        let err = expect_data(ApiResponse::<i32>::error(400, "bad"), 200).unwrap_err();
        assert!(matches!(err, ClientError::Api { code: 400, ref message } if message == "bad"));

        let err = expect_data(ApiResponse::<i32>::empty(200, "OK"), 200).unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }

    #[test]
    fn test_created_is_not_success_for_reads() {
        let resp = ApiResponse::<i32>::empty(201, "Created");
        assert!(expect_code(resp, 200).is_err());
    }

    #[tokio::test]
    async fn test_state_cell_notifies() {
        let cell: StateCell<Vec<i32>> = StateCell::default();
        let mut rx = cell.subscribe();

        cell.update(|v| v.push(1));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), vec![1]);
        assert_eq!(cell.get(), vec![1]);
    }
}
