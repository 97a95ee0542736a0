//! Widget configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::easing::Easing;
use crate::error::CoreError;
use crate::Result;

/// Duration and curve of one sub-animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    pub duration_ms: u64,
    #[serde(default)]
    pub easing: Easing,
}

impl Timing {
    pub fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    pub fn ease_out(duration_ms: u64) -> Self {
        Self::new(duration_ms, Easing::EaseOut)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidepickerConfig {
    /// Horizontal step of the open sequence
    pub open_width: Timing,
    /// Vertical step of the open sequence
    pub open_height: Timing,
    /// Vertical step of the close sequence
    pub close_height: Timing,
    /// Horizontal step of the close sequence
    pub close_width: Timing,
    /// Grace period past an animation's duration before a runtime gives up on
    /// its completion signal
    pub completion_timeout_ms: u64,
}

impl SidepickerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.completion_timeout_ms == 0 {
            return Err(CoreError::Config(
                "completion_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn completion_timeout(&self) -> Duration {
        Duration::from_millis(self.completion_timeout_ms)
    }
}

impl Default for SidepickerConfig {
    fn default() -> Self {
        Self {
            open_width: Timing::ease_out(1000),
            open_height: Timing::ease_out(1000),
            close_height: Timing::ease_out(500),
            close_width: Timing::ease_out(500),
            completion_timeout_ms: 5000,
        }
    }
}
