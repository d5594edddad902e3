//! Store engine implementations

mod flatfile;
mod home;
mod lock;

pub use flatfile::{FlatfileStore, STORE_FILENAME};
