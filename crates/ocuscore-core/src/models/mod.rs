pub mod assessment;
pub mod extraction;
pub mod media;
pub mod recommendation;
pub mod risk;
pub mod temporal;
pub mod update;
