//! ANALYTICS 2: RECOMMENDATION RULE ENGINE
//!
//! Ordered, additive rules: every rule that matches appends its tip and no
//! rule suppresses another. The footprint-tier rule always yields exactly one
//! tip, so the generic fallback is unreachable with the default rule set; it
//! still guards any rule set that can come back empty.

use crate::input::PredictionInput;

/// Estimates above this are "high footprint"
pub const HIGH_FOOTPRINT_THRESHOLD: f64 = 3000.0;

/// Estimates above this (and not high) are "medium footprint"
pub const MEDIUM_FOOTPRINT_THRESHOLD: f64 = 1500.0;

pub const HIGH_FOOTPRINT_TIP: &str =
    "Your footprint is quite high. Focus on reducing private vehicle usage and optimizing home heating.";
pub const MEDIUM_FOOTPRINT_TIP: &str =
    "You're doing well! Transitioning to energy-efficient appliances could further lower your score.";
pub const LOW_FOOTPRINT_TIP: &str =
    "Outstanding! Your lifestyle is highly sustainable. Share your habits with others!";
pub const PRIVATE_TRANSPORT_TIP: &str =
    "Consider carpooling or switching to public transport to save CO2.";
pub const OMNIVORE_DIET_TIP: &str =
    "Switching to plant-based meals just 3 times a week can reduce your food emissions by 25%.";
pub const RECYCLING_TIP: &str =
    "Improving your recycling consistency for paper and plastic can significantly reduce landfill waste.";
pub const FALLBACK_TIP: &str =
    "Continue monitoring your daily energy consumption to find more savings.";

/// A rule yields its tip when it applies to the estimate and input
pub type RecommendationRule = fn(f64, &PredictionInput) -> Option<&'static str>;

/// Production rules in evaluation order
pub const DEFAULT_RULES: [RecommendationRule; 4] = [
    footprint_tier_rule,
    private_transport_rule,
    omnivore_diet_rule,
    recycling_rule,
];

/// Tips for an estimate using [`DEFAULT_RULES`]
pub fn recommend(raw_estimate: f64, input: &PredictionInput) -> Vec<String> {
    apply_rules(&DEFAULT_RULES, raw_estimate, input)
}

/// Evaluate `rules` in order; never returns an empty list
pub fn apply_rules(
    rules: &[RecommendationRule],
    raw_estimate: f64,
    input: &PredictionInput,
) -> Vec<String> {
    let tips: Vec<String> = rules
        .iter()
        .filter_map(|rule| rule(raw_estimate, input))
        .map(str::to_string)
        .collect();

    if tips.is_empty() {
        vec![FALLBACK_TIP.to_string()]
    } else {
        tips
    }
}

/// Exactly one of three mutually exclusive tiers
pub fn footprint_tier_rule(raw_estimate: f64, _input: &PredictionInput) -> Option<&'static str> {
    Some(if raw_estimate > HIGH_FOOTPRINT_THRESHOLD {
        HIGH_FOOTPRINT_TIP
    } else if raw_estimate > MEDIUM_FOOTPRINT_THRESHOLD {
        MEDIUM_FOOTPRINT_TIP
    } else {
        LOW_FOOTPRINT_TIP
    })
}

pub fn private_transport_rule(_raw_estimate: f64, input: &PredictionInput) -> Option<&'static str> {
    input
        .transport
        .eq_ignore_ascii_case("private")
        .then_some(PRIVATE_TRANSPORT_TIP)
}

pub fn omnivore_diet_rule(_raw_estimate: f64, input: &PredictionInput) -> Option<&'static str> {
    input
        .diet
        .eq_ignore_ascii_case("omnivore")
        .then_some(OMNIVORE_DIET_TIP)
}

/// Fires for every recycling habit other than an explicit "yes"
pub fn recycling_rule(_raw_estimate: f64, input: &PredictionInput) -> Option<&'static str> {
    (!input.recycling.eq_ignore_ascii_case("yes")).then_some(RECYCLING_TIP)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(transport: &str, diet: &str, recycling: &str) -> PredictionInput {
        PredictionInput {
            transport: transport.to_string(),
            diet: diet.to_string(),
            recycling: recycling.to_string(),
            ..PredictionInput::default()
        }
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        let tips = recommend(3500.0, &input("private", "omnivore", "no"));
        assert_eq!(
            tips,
            vec![HIGH_FOOTPRINT_TIP, PRIVATE_TRANSPORT_TIP, OMNIVORE_DIET_TIP, RECYCLING_TIP]
        );
    }

    #[test]
    fn test_tier_thresholds_are_strict() {
        let quiet = input("public", "vegan", "yes");
        assert_eq!(recommend(3000.0, &quiet), vec![MEDIUM_FOOTPRINT_TIP]);
        assert_eq!(recommend(3000.01, &quiet), vec![HIGH_FOOTPRINT_TIP]);
        assert_eq!(recommend(1500.0, &quiet), vec![LOW_FOOTPRINT_TIP]);
        assert_eq!(recommend(1500.01, &quiet), vec![MEDIUM_FOOTPRINT_TIP]);
        assert_eq!(recommend(0.0, &quiet), vec![LOW_FOOTPRINT_TIP]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let tips = recommend(1000.0, &input("PRIVATE", "OmniVore", "YES"));
        assert_eq!(tips, vec![LOW_FOOTPRINT_TIP, PRIVATE_TRANSPORT_TIP, OMNIVORE_DIET_TIP]);
    }

    #[test]
    fn test_recycling_rule_needs_exact_yes() {
        for habit in ["no", "sometimes", "plastic", "yes please", "y"] {
            let tips = recommend(1000.0, &input("public", "vegan", habit));
            assert!(tips.contains(&RECYCLING_TIP.to_string()), "habit {:?}", habit);
        }
    }

    #[test]
    fn test_fallback_only_when_nothing_fires() {
        let quiet = input("public", "vegan", "yes");
        let non_tier: [RecommendationRule; 3] =
            [private_transport_rule, omnivore_diet_rule, recycling_rule];

        assert_eq!(apply_rules(&non_tier, 2000.0, &quiet), vec![FALLBACK_TIP]);
        assert_eq!(apply_rules(&[], 2000.0, &quiet), vec![FALLBACK_TIP]);

        // The default set always includes a tier tip, never the fallback
        let tips = recommend(2000.0, &quiet);
        assert!(!tips.contains(&FALLBACK_TIP.to_string()));
    }
}
