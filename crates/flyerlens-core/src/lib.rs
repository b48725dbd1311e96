pub mod extraction;
pub mod recommendation;
pub mod upload;

pub use extraction::{Confidence, EventExtraction};
pub use recommendation::{TimingWindow, ZoneRecommendation};
pub use upload::{FlyerFile, UploadError};
