//! Assemble scheduler components from validated configuration.

use std::time::Duration;

use crate::config::{Manifest, TerminalConfig};
use crate::core::{
    DelayAction, FlowError, InstantAction, ProcessingAction, TerminalScheduler,
};

/// Build a scheduler from configuration.
///
/// Validates the configuration first, then applies the tie-break mode and
/// cycle pacing.
///
/// # Errors
///
/// Returns the configuration's validation error, if any.
pub fn build_scheduler(cfg: &TerminalConfig) -> Result<TerminalScheduler, FlowError> {
    cfg.validate()?;
    Ok(
        TerminalScheduler::new(cfg.check_in_units, cfg.security_units, cfg.boarding_units)?
            .with_tie_break(cfg.tie_break)
            .with_cycle_pause(Duration::from_millis(cfg.cycle_pause_ms)),
    )
}

/// Build the per-passenger processing action selected by the configuration.
///
/// A zero service delay selects [`InstantAction`]; anything else simulates
/// that much service time per passenger.
#[must_use]
pub fn build_action(cfg: &TerminalConfig) -> Box<dyn ProcessingAction> {
    if cfg.service_delay_ms == 0 {
        Box::new(InstantAction)
    } else {
        Box::new(DelayAction::new(Duration::from_millis(cfg.service_delay_ms)))
    }
}

/// Admit every passenger on the manifest, applying the configured priority
/// policy.
///
/// # Errors
///
/// Returns [`FlowError::InvalidPriority`] for the first out-of-range
/// passenger under the reject policy; earlier passengers stay admitted.
pub fn load_manifest(
    scheduler: &mut TerminalScheduler,
    cfg: &TerminalConfig,
    manifest: &Manifest,
) -> Result<(), FlowError> {
    for spec in &manifest.passengers {
        scheduler.admit(spec.build(cfg.priority_policy)?);
    }
    Ok(())
}

/// Validate the configuration and assemble a loaded scheduler plus its
/// processing action in one step.
///
/// # Errors
///
/// Propagates configuration validation and passenger construction errors.
pub fn build_terminal(
    cfg: &TerminalConfig,
    manifest: &Manifest,
) -> Result<(TerminalScheduler, Box<dyn ProcessingAction>), FlowError> {
    let mut scheduler = build_scheduler(cfg)?;
    load_manifest(&mut scheduler, cfg, manifest)?;
    Ok((scheduler, build_action(cfg)))
}
