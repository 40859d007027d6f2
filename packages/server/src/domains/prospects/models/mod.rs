pub mod interaction;
pub mod prospect;
pub mod stats;

pub use interaction::{Interaction, InteractionInput};
pub use prospect::{Prospect, ProspectInput, ProspectSummary};
pub use stats::{EtapePipeline, PipelineStats};
