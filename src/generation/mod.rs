pub mod brief;
pub mod orchestrator;
pub mod outcome;
pub mod plan;

pub use brief::{ImageBrief, VideoBrief};
pub use orchestrator::{GenerationOrchestrator, VIDEO_POLL_INTERVAL};
pub use outcome::{
    Creative, GenerationOutcome, ImageCreative, JobFailure, OutcomeStatus, VideoCreative,
};
pub use plan::{plan, GenerationJob, PlanSummary};
