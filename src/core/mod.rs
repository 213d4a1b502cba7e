pub mod controller;
pub mod render;

pub use crate::domain::event::Event;
pub use crate::domain::model::{Article, Credentials, Fragment, PreferenceSelection, Region};
pub use crate::domain::ports::{Backend, Page};
pub use crate::utils::error::Result;
