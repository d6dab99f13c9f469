// Counter-argument prediction from argument-family templates
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extract::{classify_argument, ArgumentFamily};

/// Score given to every template counter-argument
pub const TEMPLATE_STRENGTH: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterArgument {
    pub text: String,
    pub strength: f64,
    #[serde(rename = "type")]
    pub family: ArgumentFamily,
}

/// Counter-argument openers for each argument family
pub fn counter_templates(family: ArgumentFamily) -> &'static [&'static str] {
    match family {
        ArgumentFamily::Statutory => &[
            "The statute should be interpreted differently considering...",
            "Legislative history suggests a different interpretation...",
            "The plain meaning rule leads to a different conclusion...",
        ],
        ArgumentFamily::Precedential => &[
            "This case is distinguishable from the cited precedent...",
            "Subsequent cases have limited this precedent's scope...",
            "The precedent's reasoning doesn't apply here because...",
        ],
        ArgumentFamily::Factual => &[
            "The evidence is insufficient to support this conclusion...",
            "Alternative interpretations of these facts suggest...",
            "Key contextual factors have been overlooked...",
        ],
        ArgumentFamily::Policy => &[
            "This policy interpretation leads to unintended consequences...",
            "Competing policy considerations suggest...",
            "The proposed interpretation undermines the law's purpose...",
        ],
        ArgumentFamily::General => &[
            "The argument fails to consider important factors...",
            "Alternative approaches would better serve the interests of justice...",
            "The reasoning is flawed because...",
        ],
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CounterArgumentPredictor;

impl CounterArgumentPredictor {
    pub fn new() -> Self {
        Self
    }

    /// Likely rebuttals to `argument`, strongest first
    pub fn predict(&self, argument: &str) -> Vec<CounterArgument> {
        let family = classify_argument(argument);
        let mut counters: Vec<CounterArgument> = counter_templates(family)
            .iter()
            .map(|text| CounterArgument {
                text: text.to_string(),
                strength: TEMPLATE_STRENGTH,
                family: classify_argument(text),
            })
            .collect();

        counters.sort_by(|a, b| b.strength.total_cmp(&a.strength));
        debug!(family = %family, counters = counters.len(), "counter-arguments predicted");
        counters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_statutory_argument_gets_statutory_counters() {
        let counters =
            CounterArgumentPredictor::new().predict("The statute requires written notice.");
        assert_eq!(counters.len(), 3);
        assert_eq!(
            counters[0].text,
            "The statute should be interpreted differently considering..."
        );
        assert!(counters.iter().all(|c| c.strength == TEMPLATE_STRENGTH));
    }

    #[test]
    fn test_unclassified_argument_gets_general_counters() {
        let counters = CounterArgumentPredictor::new().predict("Fairness demands relief.");
        assert_eq!(counters[2].text, "The reasoning is flawed because...");
    }

    #[test]
    fn test_counters_carry_their_own_family() {
        let counters =
            CounterArgumentPredictor::new().predict("Public policy favors enforcement.");
        assert_eq!(counters[0].family, ArgumentFamily::General);
    }
}
