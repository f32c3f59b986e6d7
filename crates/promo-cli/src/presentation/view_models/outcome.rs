//! Envelope printed by every command: what happened to the draft or the
//! board, the command content, then the commands worth running next.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The bid passed or the board was written.
    Done,
    /// Nothing was written.
    Unchanged,
    /// Flat or per-day minimum not met; the draft would not be submitted.
    BelowMinimum,
    /// The link already has as many campaigns as it may.
    LimitReached,
    /// Predicted impressions fall short of what the bid buys.
    ShortInventory,
}

impl Outcome {
    /// Outcomes the page would flag next to the form.
    pub fn is_problem(self) -> bool {
        matches!(
            self,
            Outcome::BelowMinimum | Outcome::LimitReached | Outcome::ShortInventory
        )
    }

    pub fn marker(self) -> &'static str {
        match self {
            Outcome::Done => "✓",
            Outcome::Unchanged => "-",
            _ => "!",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Badge {
    pub outcome: Outcome,
    pub label: String,
}

impl Badge {
    pub fn done(label: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Done,
            label: label.into(),
        }
    }

    pub fn unchanged() -> Self {
        Self {
            outcome: Outcome::Unchanged,
            label: "Nothing to change".to_string(),
        }
    }

    pub fn below_minimum() -> Self {
        Self {
            outcome: Outcome::BelowMinimum,
            label: "Bid below minimum".to_string(),
        }
    }

    pub fn limit_reached(max: usize) -> Self {
        Self {
            outcome: Outcome::LimitReached,
            label: format!("Campaign limit reached ({})", max),
        }
    }

    pub fn short_inventory() -> Self {
        Self {
            outcome: Outcome::ShortInventory,
            label: "Not enough inventory".to_string(),
        }
    }
}

/// Follow-up shown under the content, optionally with the exact command.
#[derive(Debug, Clone, Serialize)]
pub struct NextStep {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl NextStep {
    pub fn hint(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: None,
        }
    }

    pub fn run(description: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: Some(command.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommandOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    pub content: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub next_steps: Vec<NextStep>,
}

impl<T: Serialize> CommandOutput<T> {
    pub fn new(content: T) -> Self {
        Self {
            badge: None,
            content,
            next_steps: Vec::new(),
        }
    }

    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn then(mut self, step: NextStep) -> Self {
        self.next_steps.push(step);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_json_shape() {
        let output = CommandOutput::new("quote")
            .with_badge(Badge::limit_reached(5))
            .then(NextStep::run("Remove one", "promo campaign delete <id>"));
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["badge"]["outcome"], "limit_reached");
        assert_eq!(json["badge"]["label"], "Campaign limit reached (5)");
        assert_eq!(json["next_steps"][0]["command"], "promo campaign delete <id>");
    }

    #[test]
    fn test_empty_next_steps_are_omitted() {
        let json = serde_json::to_value(CommandOutput::new(1).with_badge(Badge::unchanged())).unwrap();
        assert!(json.get("next_steps").is_none());
        assert!(!Outcome::Unchanged.is_problem());
        assert!(Outcome::BelowMinimum.is_problem());
    }
}
