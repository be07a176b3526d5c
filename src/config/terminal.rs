//! Terminal configuration: stage capacities, pacing, and policies.

use serde::{Deserialize, Serialize};

use crate::core::{FlowError, StageName, TieBreak};

/// What to do with a manifest priority outside the accepted 1-5 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityPolicy {
    /// Refuse the passenger with [`FlowError::InvalidPriority`]. The default.
    #[default]
    Reject,
    /// Clamp the base priority into 1-5 before the frequent-flyer boost.
    Clamp,
}

/// Full configuration for one terminal run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Check-in counters.
    pub check_in_units: u32,
    /// Security lanes.
    pub security_units: u32,
    /// Boarding gates.
    pub boarding_units: u32,
    /// Pause between cycles, milliseconds. Zero disables pacing.
    #[serde(default)]
    pub cycle_pause_ms: u64,
    /// Simulated per-passenger service time, milliseconds. Zero means
    /// instantaneous processing.
    #[serde(default)]
    pub service_delay_ms: u64,
    /// Tie-break mode for rank-tied passengers.
    #[serde(default)]
    pub tie_break: TieBreak,
    /// Handling of out-of-range manifest priorities.
    #[serde(default)]
    pub priority_policy: PriorityPolicy,
}

impl TerminalConfig {
    /// Configuration with the given unit counts and all defaults otherwise.
    #[must_use]
    pub fn new(check_in_units: u32, security_units: u32, boarding_units: u32) -> Self {
        Self {
            check_in_units,
            security_units,
            boarding_units,
            cycle_pause_ms: 0,
            service_delay_ms: 0,
            tie_break: TieBreak::default(),
            priority_policy: PriorityPolicy::default(),
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidCapacity`] for the first stage configured
    /// with zero units.
    pub fn validate(&self) -> Result<(), FlowError> {
        for (name, units) in [
            (StageName::CheckIn, self.check_in_units),
            (StageName::Security, self.security_units),
            (StageName::Boarding, self.boarding_units),
        ] {
            if units == 0 {
                return Err(FlowError::InvalidCapacity {
                    stage: name.label().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Parse a configuration from a JSON string and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Config`] on malformed JSON, or the validation
    /// error for out-of-range values.
    pub fn from_json_str(input: &str) -> Result<Self, FlowError> {
        let cfg: Self =
            serde_json::from_str(input).map_err(|e| FlowError::Config(format!("parse error: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config_passes() {
        assert!(TerminalConfig::new(2, 3, 1).validate().is_ok());
    }

    #[test]
    fn zero_units_fail_with_the_offending_stage() {
        let err = TerminalConfig::new(2, 0, 1).validate().unwrap_err();
        assert!(matches!(err, FlowError::InvalidCapacity { stage } if stage == "Security"));

        let err = TerminalConfig::new(2, 3, 0).validate().unwrap_err();
        assert!(matches!(err, FlowError::InvalidCapacity { stage } if stage == "Boarding"));
    }

    #[test]
    fn json_round_trip_with_defaults() {
        let cfg = TerminalConfig::from_json_str(
            r#"{"check_in_units": 2, "security_units": 3, "boarding_units": 1}"#,
        )
        .unwrap();
        assert_eq!(cfg.check_in_units, 2);
        assert_eq!(cfg.cycle_pause_ms, 0);
        assert_eq!(cfg.tie_break, TieBreak::Arrival);
        assert_eq!(cfg.priority_policy, PriorityPolicy::Reject);
    }

    #[test]
    fn json_accepts_policy_overrides() {
        let cfg = TerminalConfig::from_json_str(
            r#"{
                "check_in_units": 1,
                "security_units": 1,
                "boarding_units": 1,
                "cycle_pause_ms": 250,
                "tie_break": "strict_rotation",
                "priority_policy": "clamp"
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.cycle_pause_ms, 250);
        assert_eq!(cfg.tie_break, TieBreak::StrictRotation);
        assert_eq!(cfg.priority_policy, PriorityPolicy::Clamp);
    }

    #[test]
    fn invalid_json_is_a_config_error() {
        let err = TerminalConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, FlowError::Config(_)));
    }

    #[test]
    fn zero_units_rejected_when_parsing() {
        let err = TerminalConfig::from_json_str(
            r#"{"check_in_units": 0, "security_units": 1, "boarding_units": 1}"#,
        )
        .unwrap_err();
        assert!(matches!(err, FlowError::InvalidCapacity { .. }));
    }
}
