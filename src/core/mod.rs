pub mod allstar;
pub mod curator;
pub mod feasibility;
pub mod franchise;
pub mod identity;
pub mod pipeline;
pub mod qualify;

pub use crate::domain::model::{CurationResult, PlayerRecord, TeamStint};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
