use serde::Serialize;

/// Extra reward kind attached to a successful check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusKind {
    /// Streak reward for consecutive daily check-ins.
    Continuity,
}

/// Final result of one check-in run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// The check-in was already performed today; nothing left to do.
    AlreadyCompleted {
        #[serde(skip_serializing_if = "Option::is_none")]
        beans: Option<u64>,
    },
    Succeeded {
        #[serde(skip_serializing_if = "Option::is_none")]
        beans: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        bonus: Option<BonusKind>,
    },
    Failed {
        reason: String,
    },
    /// The upstream answered but the response could not be interpreted either
    /// way. Carries the (truncated) raw body for manual inspection.
    Unconfirmed {
        raw: String,
    },
    NotAuthenticated,
}

impl ActionOutcome {
    /// True when the day's reward is confirmed granted (now or earlier).
    pub fn is_completed(&self) -> bool {
        matches!(
            self,
            ActionOutcome::Succeeded { .. } | ActionOutcome::AlreadyCompleted { .. }
        )
    }
}
