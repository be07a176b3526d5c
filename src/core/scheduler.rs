//! Terminal scheduler: admission, stage advancement, cycle orchestration.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::core::{
    AdmissionQueue, EventSink, FlowError, FlowEvent, Passenger, ProcessingAction, Stage, StageName,
};

/// How rank-tied passengers are ordered into check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Ties are broken by arrival sequence inside the admission queue's
    /// ordering relation. Round-robin service order is a property of the
    /// queue itself. The default.
    #[default]
    Arrival,
    /// Procedural rotation through a transient holding run: a popped
    /// passenger joins the run when their effective priority matches its
    /// head, ignoring lateness, and the head is served in their place.
    /// The run starts empty and nothing seeds it, so in practice
    /// passengers come straight off the heap.
    Rotation,
    /// Like [`TieBreak::Rotation`], but a passenger only joins the holding
    /// run when the full `(late, effective priority)` rank matches.
    StrictRotation,
}

impl TieBreak {
    /// Whether `popped` belongs to the same holding run as `held`.
    fn same_run(self, held: &Passenger, popped: &Passenger) -> bool {
        match self {
            Self::Arrival => false,
            Self::Rotation => held.effective_priority() == popped.effective_priority(),
            Self::StrictRotation => held.rank() == popped.rank(),
        }
    }
}

/// Scheduler lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePhase {
    /// Constructed; the run loop has not started.
    Idle,
    /// Admitting passengers from the admission queue into check-in.
    CheckingIn,
    /// Processing the security queue.
    Securing,
    /// Processing the boarding queue.
    Boarding,
    /// Pausing between cycles.
    Draining,
    /// All queues empty; the run is over.
    Terminated,
}

/// Outcome of a full scheduler run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Number of full cycles executed.
    pub cycles: u32,
    /// Passengers that completed boarding, in completion order.
    pub boarded: Vec<Passenger>,
}

/// Owns the admission queue and the three pipeline stages and advances
/// passengers check-in → security → boarding until everything drains.
///
/// Processing is serial: each passenger holds one resource unit for the
/// duration of their service and returns it before the next passenger is
/// taken, so stage capacity gates "is a unit free" rather than enabling
/// overlap. No component outside the scheduler mutates its queues.
pub struct TerminalScheduler {
    admission: AdmissionQueue,
    check_in: Stage,
    security: Stage,
    boarding: Stage,
    tie_break: TieBreak,
    cycle_pause: Duration,
    phase: CyclePhase,
    cycles: u32,
    sink: Option<Arc<Mutex<Box<dyn EventSink>>>>,
}

impl TerminalScheduler {
    /// Create a scheduler with the given stage unit counts.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidCapacity`] if any stage would have zero
    /// units.
    pub fn new(
        check_in_units: u32,
        security_units: u32,
        boarding_units: u32,
    ) -> Result<Self, FlowError> {
        Ok(Self {
            admission: AdmissionQueue::new(),
            check_in: Stage::new(StageName::CheckIn, check_in_units)?,
            security: Stage::new(StageName::Security, security_units)?,
            boarding: Stage::new(StageName::Boarding, boarding_units)?,
            tie_break: TieBreak::default(),
            cycle_pause: Duration::ZERO,
            phase: CyclePhase::Idle,
            cycles: 0,
            sink: None,
        })
    }

    /// Select the tie-break mode.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Pause for `pause` between cycles. Zero (the default) disables pacing.
    #[must_use]
    pub fn with_cycle_pause(mut self, pause: Duration) -> Self {
        self.cycle_pause = pause;
        self
    }

    /// Attach an event sink.
    #[must_use]
    pub fn with_events(mut self, sink: Box<dyn EventSink>) -> Self {
        self.sink = Some(Arc::new(Mutex::new(sink)));
        self
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> CyclePhase {
        self.phase
    }

    /// Cycles completed so far.
    #[must_use]
    pub const fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Passengers waiting in the admission queue.
    #[must_use]
    pub fn admission_len(&self) -> usize {
        self.admission.len()
    }

    /// Read access to a stage, mainly for inspection in tests and displays.
    #[must_use]
    pub fn stage(&self, name: StageName) -> &Stage {
        match name {
            StageName::CheckIn => &self.check_in,
            StageName::Security => &self.security,
            StageName::Boarding => &self.boarding,
        }
    }

    /// Whether the admission queue and every stage queue are empty.
    #[must_use]
    pub fn is_drained(&self) -> bool {
        self.admission.is_empty()
            && self.check_in.is_queue_empty()
            && self.security.is_queue_empty()
            && self.boarding.is_queue_empty()
    }

    /// Add a passenger to the priority admission queue.
    pub fn admit(&mut self, passenger: Passenger) {
        tracing::info!(
            passenger = %passenger.name(),
            priority = passenger.effective_priority(),
            late = passenger.is_late(),
            "admitted to admission queue"
        );
        self.emit(FlowEvent::AdmittedToAdmission {
            passenger: passenger.id(),
            name: passenger.name().to_string(),
        });
        self.admission.push(passenger);
    }

    /// Pull passengers from the admission queue into check-in while a
    /// counter is free, process each, and hand them to security.
    pub fn process_check_in(&mut self, action: &dyn ProcessingAction) {
        // Transient holding run for the rotation tie-break modes.
        let mut holding: VecDeque<Passenger> = VecDeque::new();
        while self.check_in.tokens().available() > 0 && !self.admission.is_empty() {
            let Some(mut passenger) = self.admission.pop() else {
                break;
            };
            if holding
                .front()
                .is_some_and(|held| self.tie_break.same_run(held, &passenger))
            {
                holding.push_back(passenger);
                let Some(rotated) = holding.pop_front() else {
                    break;
                };
                passenger = rotated;
            }
            self.emit(FlowEvent::EnteredStage {
                passenger: passenger.id(),
                stage: StageName::CheckIn,
            });
            self.check_in.admit(passenger);
            for served in self.check_in.process(action) {
                self.emit(FlowEvent::FinishedStage {
                    passenger: served.id(),
                    stage: StageName::CheckIn,
                });
                self.emit(FlowEvent::EnteredStage {
                    passenger: served.id(),
                    stage: StageName::Security,
                });
                self.security.admit(served);
            }
        }
    }

    /// Process the security queue and move everyone who cleared it into the
    /// boarding queue, preserving order.
    pub fn process_security(&mut self, action: &dyn ProcessingAction) {
        for passenger in self.security.process(action) {
            self.emit(FlowEvent::FinishedStage {
                passenger: passenger.id(),
                stage: StageName::Security,
            });
            self.emit(FlowEvent::EnteredStage {
                passenger: passenger.id(),
                stage: StageName::Boarding,
            });
            self.boarding.admit(passenger);
        }
    }

    /// Process the boarding queue. Passengers that finish leave the system.
    pub fn process_boarding(&mut self, action: &dyn ProcessingAction) -> Vec<Passenger> {
        let served = self.boarding.process(action);
        for passenger in &served {
            self.emit(FlowEvent::FinishedStage {
                passenger: passenger.id(),
                stage: StageName::Boarding,
            });
        }
        served
    }

    /// Run cycles until the pipeline drains.
    ///
    /// Each cycle runs check-in admission, then security, then boarding,
    /// then re-evaluates the terminal condition. Returns the boarded
    /// passengers in completion order.
    pub fn run(&mut self, action: &dyn ProcessingAction) -> RunReport {
        let mut boarded = Vec::new();
        while !self.is_drained() {
            self.phase = CyclePhase::CheckingIn;
            tracing::info!(cycle = self.cycles, "starting check-in");
            self.process_check_in(action);

            self.phase = CyclePhase::Securing;
            tracing::info!(cycle = self.cycles, "starting security");
            self.process_security(action);

            self.phase = CyclePhase::Boarding;
            tracing::info!(cycle = self.cycles, "starting boarding");
            boarded.extend(self.process_boarding(action));

            self.emit(FlowEvent::CycleCompleted {
                cycle: self.cycles,
            });
            self.cycles += 1;

            if self.is_drained() {
                break;
            }
            self.phase = CyclePhase::Draining;
            if !self.cycle_pause.is_zero() {
                std::thread::sleep(self.cycle_pause);
            }
        }
        self.phase = CyclePhase::Terminated;
        tracing::info!(cycles = self.cycles, boarded = boarded.len(), "pipeline drained");
        RunReport {
            cycles: self.cycles,
            boarded,
        }
    }

    fn emit(&self, event: FlowEvent) {
        if let Some(sink) = &self.sink {
            sink.lock().record(event);
        }
    }
}
