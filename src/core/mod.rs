//! Core scheduling types and the pipeline orchestration loop.

pub mod action;
pub mod admission;
pub mod error;
pub mod events;
pub mod passenger;
pub mod scheduler;
pub mod stage;
pub mod tokens;

pub use action::{DelayAction, InstantAction, ProcessingAction};
pub use admission::AdmissionQueue;
pub use error::{AppResult, FlowError};
pub use events::{EventRecord, EventSink, FlowEvent, InMemoryEventSink, TracingEventSink};
pub use passenger::{
    BoardingRank, Passenger, PassengerId, MAX_BASE_PRIORITY, MIN_BASE_PRIORITY,
};
pub use scheduler::{CyclePhase, RunReport, TerminalScheduler, TieBreak};
pub use stage::{Stage, StageName};
pub use tokens::{ResourceTokens, TokenPermit};
