pub mod assessment;
pub mod demographics;
pub mod features;
pub mod prediction;
pub mod recommendation;
pub mod risk;
pub mod scale;
pub mod severity;
