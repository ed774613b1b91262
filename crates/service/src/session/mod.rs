//! Session tracking: token, user id and expiry persisted through a
//! [`KeyValueStore`](crate::storage::KeyValueStore), judged against a [`Clock`].

pub mod clock;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use store::{SessionStore, EXPIRES_AT_KEY, TOKEN_KEY, USER_ID_KEY};
