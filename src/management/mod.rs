mod document;
mod workflow;

pub use document::DocumentDefaults;
pub use document::DocumentHost;
pub use document::DocumentSync;
pub use document::DocumentWrite;
pub use document::MemoryDocument;
pub use document::MetadataOverride;
pub use document::TerminalDocument;
pub use workflow::SongWorkflow;
pub use workflow::WorkflowState;
