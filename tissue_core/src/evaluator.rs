//! Tissue response evaluator.
//!
//! Maps one set of training-load parameters onto the likely net effect for
//! muscle, tendon and bone:
//! - Sedentary short-circuits to decrease everywhere
//! - Each tissue is then judged independently from the same derived levels
//! - Infrequent training (frequency level 1) caps any increase at maintain

use crate::{EvaluationInput, EvaluationResult, ExerciseCategory, TissueEffect, TissueResponse};

/// Levels as plain integers, with reps/effort masked for non-resistance work
#[derive(Clone, Copy, Debug)]
struct Levels {
    intensity: u8,
    reps: u8,
    volume: u8,
    frequency: u8,
    effort: u8,
}

impl Levels {
    fn derive(input: &EvaluationInput) -> Self {
        let resistance = input.category.is_resistance();
        let resistance_only = |level: crate::Level| if resistance { level.get() } else { 0 };

        Self {
            intensity: input.intensity.get(),
            reps: resistance_only(input.reps),
            volume: input.volume.get(),
            frequency: input.frequency.get(),
            effort: resistance_only(input.effort),
        }
    }
}

/// Append-only list of rationale fragments
#[derive(Debug)]
struct Rationale(Vec<&'static str>);

impl Rationale {
    fn new(opening: &'static str) -> Self {
        Rationale(vec![opening])
    }

    fn push(&mut self, fragment: &'static str) {
        self.0.push(fragment);
    }

    fn conclude(self, effect: TissueEffect) -> TissueResponse {
        TissueResponse {
            effect,
            explanation: self.0.join(" "),
        }
    }
}

/// Evaluate the likely effect of a training input on each tissue
///
/// Never fails: unspecified levels simply fall below every threshold.
pub fn evaluate(input: &EvaluationInput) -> EvaluationResult {
    let category = input.category;

    if category.is_sedentary() {
        tracing::debug!("Sedentary input, all tissues decrease");
        return sedentary_result();
    }

    let lv = Levels::derive(input);
    tracing::debug!("Evaluating {:?} with levels {:?}", category, lv);

    let result = EvaluationResult {
        muscle: muscle_response(category, lv),
        tendon: tendon_response(category, lv),
        bone: bone_response(category, lv),
    };

    if lv.frequency == 1 {
        cap_infrequent(result)
    } else {
        result
    }
}

fn sedentary_result() -> EvaluationResult {
    let decrease = |explanation: &str| TissueResponse {
        effect: TissueEffect::Decrease,
        explanation: explanation.to_string(),
    };

    EvaluationResult {
        muscle: decrease("Disuse leads to muscle atrophy, especially Type II fibers."),
        tendon: decrease("Lack of mechanical load reduces collagen synthesis and strength."),
        bone: decrease("Lack of dynamic loading leads to bone loss."),
    }
}

// ============================================================================
// Muscle
// ============================================================================

fn muscle_response(category: ExerciseCategory, lv: Levels) -> TissueResponse {
    if category.is_resistance() {
        resistance_muscle(lv)
    } else if category.is_high_impact() || category.is_moderate_impact() || category.is_low_impact()
    {
        impact_muscle(lv)
    } else {
        cardio_muscle(lv)
    }
}

fn resistance_muscle(lv: Levels) -> TissueResponse {
    let mut why = Rationale::new("Resistance training stimulates muscle.");

    let drives_adaptation =
        lv.effort >= 3 && lv.frequency >= 2 && lv.volume >= 2 && lv.intensity >= 2;

    let effect = if drives_adaptation {
        why.push(if lv.intensity >= 4 && lv.reps <= 1 && lv.effort >= 3 {
            "High load, high effort promotes maximal strength gains."
        } else if lv.intensity >= 2 && lv.effort >= 4 {
            "Training to failure, even with lighter loads, promotes hypertrophy/strength."
        } else if lv.intensity >= 3 && lv.reps == 2 && lv.effort >= 3 {
            "Moderate load/reps with high effort promotes hypertrophy/strength."
        } else {
            "Sufficient intensity, volume, frequency and effort drive adaptation."
        });
        TissueEffect::Increase
    } else {
        if lv.frequency <= 1 || lv.volume <= 1 || lv.effort <= 1 {
            why.push("Low volume, frequency, or effort may only maintain current levels.");
        }
        TissueEffect::Maintain
    };

    if lv.volume >= 5 && lv.frequency >= 5 && lv.intensity >= 4 {
        why.push("Very high intensity, volume & frequency increase overtraining risk.");
        return why.conclude(TissueEffect::PotentialRisk);
    }

    why.conclude(effect)
}

fn impact_muscle(lv: Levels) -> TissueResponse {
    let mut why = Rationale::new("Activity engages muscles, helping maintain function.");

    if lv.volume >= 3 && lv.frequency >= 3 {
        why.push("Consistent activity helps maintain muscle mass involved.");
    }

    if lv.volume >= 4 && lv.frequency >= 4 {
        why.push(
            "High volume/frequency can increase endurance & potentially size of involved muscles.",
        );
        return why.conclude(TissueEffect::Increase);
    }

    why.conclude(TissueEffect::Maintain)
}

fn cardio_muscle(lv: Levels) -> TissueResponse {
    let mut why = Rationale::new("Cardio engages some muscles, helping maintain them.");

    if lv.volume <= 1 && lv.frequency <= 1 {
        why.push("Very low volume/frequency may not be enough stimulus.");
        return why.conclude(TissueEffect::Decrease);
    }

    why.conclude(TissueEffect::Maintain)
}

// ============================================================================
// Tendon
// ============================================================================

fn tendon_response(category: ExerciseCategory, lv: Levels) -> TissueResponse {
    if category.is_resistance() || category.is_high_impact() || category.is_moderate_impact() {
        loaded_tendon(category, lv)
    } else if category.is_low_impact() {
        let mut why = Rationale::new("Tendons require mechanical load.");
        why.push("Low impact provides some loading.");
        why.push(if lv.frequency >= 3 {
            "Regular low impact loading helps maintain tendon properties."
        } else {
            "Infrequent low impact provides minimal stimulus."
        });
        why.conclude(TissueEffect::Maintain)
    } else {
        Rationale::new("Non-weightbearing exercise provides minimal tensile load to many tendons.")
            .conclude(TissueEffect::Decrease)
    }
}

fn loaded_tendon(category: ExerciseCategory, lv: Levels) -> TissueResponse {
    let mut why = Rationale::new("Tendons require mechanical load.");
    why.push("Exercise provides mechanical loading.");

    let mut effect = TissueEffect::Maintain;
    if lv.intensity >= 3 && lv.frequency >= 2 && lv.volume >= 2 {
        why.push(if category.is_high_impact() {
            "High impact loading provides strong stimulus for adaptation."
        } else if lv.intensity >= 4 {
            "High intensity resistance training increases stiffness/CSA."
        } else if category.is_moderate_impact() && lv.volume >= 3 {
            "Consistent moderate impact (e.g., running) increases stiffness/CSA."
        } else {
            "Sufficient load, volume, and frequency drive adaptation."
        });
        effect = TissueEffect::Increase;
    }

    let heavy = category.is_high_impact() || lv.intensity >= 4;
    if heavy && (lv.volume >= 5 || lv.frequency >= 5) {
        why.push(
            "Very high volume/frequency of high load/impact increases overload/tendinopathy risk.",
        );
        effect = TissueEffect::PotentialRisk;
    } else if lv.volume <= 1 || lv.frequency <= 1 {
        why.push("Low volume or frequency limits adaptation stimulus.");
        effect = TissueEffect::Maintain;
    }

    why.conclude(effect)
}

// ============================================================================
// Bone
// ============================================================================

fn bone_response(category: ExerciseCategory, lv: Levels) -> TissueResponse {
    if !category.is_weightbearing() {
        return Rationale::new(
            "Non-weightbearing activity provides minimal osteogenic stimulus. \
             May lead to loss if primary activity.",
        )
        .conclude(TissueEffect::Decrease);
    }

    let mut why = Rationale::new("Bone requires dynamic, weightbearing load.");
    why.push("Weightbearing exercise provides loading stimulus.");

    let high_impact = category.is_high_impact() && lv.frequency >= 3;
    let heavy_resistance =
        category.is_resistance() && lv.intensity >= 3 && lv.frequency >= 3 && lv.volume >= 2;
    let steady_impact = category.is_moderate_impact() && lv.frequency >= 3 && lv.volume >= 3;

    let effect = if high_impact || heavy_resistance || steady_impact {
        why.push(if category.is_high_impact() {
            "High impact (high strain rate) is highly osteogenic."
        } else if category.is_resistance() && lv.intensity >= 3 {
            "Moderate-to-high load resistance training stimulates bone formation."
        } else if category.is_moderate_impact() {
            "Consistent moderate impact (running) stimulates bone formation."
        } else {
            "Sufficient dynamic, weightbearing load exceeding habitual levels drives adaptation."
        });
        TissueEffect::Increase
    } else if category.is_low_impact() && lv.frequency >= 3 {
        why.push("Regular low-impact weightbearing helps maintain bone density.");
        TissueEffect::Maintain
    } else {
        if lv.frequency <= 2 || lv.volume <= 1 {
            why.push("Low frequency or volume provides minimal osteogenic stimulus.");
        }
        TissueEffect::Maintain
    };

    // Stress-fracture risk is reported, not scored
    if category.is_high_impact() && (lv.volume >= 5 || lv.frequency >= 5) {
        why.push(
            "Very high volume/frequency of impact may increase stress fracture risk if not managed.",
        );
    }

    why.conclude(effect)
}

// ============================================================================
// Post-processing
// ============================================================================

/// Infrequent training cannot drive an increase; decrease and risk stay put
fn cap_infrequent(result: EvaluationResult) -> EvaluationResult {
    let cap = |response: TissueResponse| match response.effect {
        TissueEffect::Increase => TissueResponse {
            effect: TissueEffect::Maintain,
            ..response
        },
        TissueEffect::Maintain | TissueEffect::Decrease | TissueEffect::PotentialRisk => response,
    };

    tracing::debug!("Infrequent training, capping increases at maintain");

    EvaluationResult {
        muscle: cap(result.muscle),
        tendon: cap(result.tendon),
        bone: cap(result.bone),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Level, Scale, Tissue};

    fn input(
        category: ExerciseCategory,
        intensity: &str,
        reps: &str,
        volume: &str,
        frequency: &str,
        effort: &str,
    ) -> EvaluationInput {
        EvaluationInput::from_labels(category, intensity, reps, volume, frequency, effort)
    }

    fn levels(category: ExerciseCategory, i: u8, r: u8, v: u8, f: u8, e: u8) -> EvaluationInput {
        EvaluationInput {
            category,
            intensity: Level::new(i),
            reps: Level::new(r),
            volume: Level::new(v),
            frequency: Level::new(f),
            effort: Level::new(e),
        }
    }

    /// Every combination of levels (including the sentinel) for a category
    fn all_inputs(category: ExerciseCategory) -> Vec<EvaluationInput> {
        let mut out = Vec::new();
        for i in 0..=5 {
            for r in 0..=4 {
                for v in 0..=5 {
                    for f in 0..=5 {
                        for e in 0..=4 {
                            out.push(levels(category, i, r, v, f, e));
                        }
                    }
                }
            }
        }
        out
    }

    #[test]
    fn test_scenario_heavy_standing_strength() {
        crate::logging::init_test();

        let result = evaluate(&input(
            ExerciseCategory::ResistanceStanding,
            "High (80-95% 1RM / RPE 8-9)",
            "Low (1-5 reps)",
            "Moderate (20-45 min / 6-12 sets)",
            "Moderate (3-4x / week)",
            "To Failure",
        ));

        assert_eq!(result.muscle.effect, TissueEffect::Increase);
        assert!(result.muscle.explanation.contains("maximal strength"));
        assert_eq!(result.tendon.effect, TissueEffect::Increase);
        assert!(result
            .tendon
            .explanation
            .contains("High intensity resistance training increases stiffness/CSA."));
        assert_eq!(result.bone.effect, TissueEffect::Increase);
        assert!(result
            .bone
            .explanation
            .contains("Moderate-to-high load resistance training"));
    }

    #[test]
    fn test_scenario_sedentary() {
        let result = evaluate(&input(
            ExerciseCategory::Sedentary,
            "VeryHigh",
            "Moderate",
            "VeryHigh",
            "VeryHigh",
            "ToFailure",
        ));

        for (_, response) in result.iter() {
            assert_eq!(response.effect, TissueEffect::Decrease);
        }
        assert_eq!(
            result.muscle.explanation,
            "Disuse leads to muscle atrophy, especially Type II fibers."
        );
    }

    #[test]
    fn test_sedentary_ignores_every_level() {
        for input in all_inputs(ExerciseCategory::Sedentary) {
            let result = evaluate(&input);
            assert!(result
                .iter()
                .all(|(_, r)| r.effect == TissueEffect::Decrease));
        }
    }

    #[test]
    fn test_scenario_minimal_cycling() {
        let result = evaluate(&input(
            ExerciseCategory::CyclingSwimming,
            "Moderate",
            "N/A",
            "VeryLow",
            "Infrequent",
            "N/A",
        ));

        assert_eq!(result.muscle.effect, TissueEffect::Decrease);
        assert!(result.muscle.explanation.contains("may not be enough stimulus"));
        assert_eq!(result.tendon.effect, TissueEffect::Decrease);
        assert_eq!(result.bone.effect, TissueEffect::Decrease);
    }

    #[test]
    fn test_scenario_high_volume_jumping() {
        let result = evaluate(&input(
            ExerciseCategory::Jumping,
            "High",
            "",
            "VeryHigh",
            "VeryHigh",
            "",
        ));

        assert_eq!(result.tendon.effect, TissueEffect::PotentialRisk);
        assert!(result
            .tendon
            .explanation
            .contains("High impact loading provides strong stimulus"));
        assert!(result.tendon.explanation.ends_with("tendinopathy risk."));

        assert_eq!(result.bone.effect, TissueEffect::Increase);
        assert!(result.bone.explanation.contains("highly osteogenic"));
        assert!(result.bone.explanation.ends_with("stress fracture risk if not managed."));

        assert_eq!(result.muscle.effect, TissueEffect::Increase);
    }

    #[test]
    fn test_failure_training_message() {
        // Light load to failure, moderate reps: (a) fails on intensity, (b) matches
        let result = evaluate(&levels(ExerciseCategory::ResistanceSeated, 2, 2, 3, 3, 4));
        assert_eq!(result.muscle.effect, TissueEffect::Increase);
        assert!(result.muscle.explanation.contains("Training to failure"));
    }

    #[test]
    fn test_hypertrophy_message() {
        let result = evaluate(&levels(ExerciseCategory::ResistanceStanding, 3, 2, 3, 3, 3));
        assert_eq!(result.muscle.effect, TissueEffect::Increase);
        assert!(result
            .muscle
            .explanation
            .contains("Moderate load/reps with high effort"));
    }

    #[test]
    fn test_generic_resistance_message() {
        // High reps, high effort: none of the specific sub-conditions apply
        let result = evaluate(&levels(ExerciseCategory::ResistanceStanding, 3, 3, 3, 3, 3));
        assert_eq!(result.muscle.effect, TissueEffect::Increase);
        assert_eq!(
            result.muscle.explanation,
            "Resistance training stimulates muscle. \
             Sufficient intensity, volume, frequency and effort drive adaptation."
        );
    }

    #[test]
    fn test_low_effort_resistance_maintains() {
        let result = evaluate(&levels(ExerciseCategory::ResistanceStanding, 3, 2, 3, 3, 1));
        assert_eq!(result.muscle.effect, TissueEffect::Maintain);
        assert!(result.muscle.explanation.contains("may only maintain"));
    }

    #[test]
    fn test_moderate_effort_without_caveat() {
        // Increase fails on effort, but nothing is at the floor
        let result = evaluate(&levels(ExerciseCategory::ResistanceStanding, 3, 2, 3, 3, 2));
        assert_eq!(result.muscle.effect, TissueEffect::Maintain);
        assert_eq!(result.muscle.explanation, "Resistance training stimulates muscle.");
    }

    #[test]
    fn test_overtraining_overrides_increase() {
        let result = evaluate(&levels(ExerciseCategory::ResistanceStanding, 4, 1, 5, 5, 4));
        assert_eq!(result.muscle.effect, TissueEffect::PotentialRisk);
        let exp = &result.muscle.explanation;
        let strength = exp.find("maximal strength").unwrap();
        let risk = exp.find("overtraining risk").unwrap();
        assert!(strength < risk);
    }

    #[test]
    fn test_overtraining_applies_without_increase() {
        // Low effort blocks the increase; the override still fires
        let result = evaluate(&levels(ExerciseCategory::ResistanceSeated, 5, 3, 5, 5, 1));
        assert_eq!(result.muscle.effect, TissueEffect::PotentialRisk);
        assert!(result.muscle.explanation.contains("may only maintain"));
    }

    #[test]
    fn test_reps_and_effort_ignored_for_cardio() {
        let with = evaluate(&levels(ExerciseCategory::Running, 3, 4, 3, 3, 4));
        let without = evaluate(&levels(ExerciseCategory::Running, 3, 0, 3, 3, 0));
        assert_eq!(with, without);
    }

    #[test]
    fn test_impact_muscle_thresholds() {
        let steady = evaluate(&levels(ExerciseCategory::Walking, 2, 0, 3, 3, 0));
        assert_eq!(steady.muscle.effect, TissueEffect::Maintain);
        assert!(steady.muscle.explanation.contains("Consistent activity"));

        let big = evaluate(&levels(ExerciseCategory::Walking, 2, 0, 4, 4, 0));
        assert_eq!(big.muscle.effect, TissueEffect::Increase);

        let uneven = evaluate(&levels(ExerciseCategory::Running, 2, 0, 5, 3, 0));
        assert_eq!(uneven.muscle.effect, TissueEffect::Maintain);
    }

    #[test]
    fn test_cardio_muscle_needs_both_floors() {
        let result = evaluate(&levels(ExerciseCategory::CyclingSwimming, 3, 0, 1, 2, 0));
        assert_eq!(result.muscle.effect, TissueEffect::Maintain);
    }

    #[test]
    fn test_tendon_low_volume_caveat() {
        let result = evaluate(&levels(ExerciseCategory::Running, 3, 0, 1, 3, 0));
        assert_eq!(result.tendon.effect, TissueEffect::Maintain);
        assert!(result.tendon.explanation.contains("limits adaptation stimulus"));
    }

    #[test]
    fn test_tendon_moderate_impact_message() {
        let result = evaluate(&levels(ExerciseCategory::Running, 3, 0, 3, 3, 0));
        assert_eq!(result.tendon.effect, TissueEffect::Increase);
        assert!(result.tendon.explanation.contains("Consistent moderate impact"));

        let short = evaluate(&levels(ExerciseCategory::Running, 3, 0, 2, 3, 0));
        assert_eq!(short.tendon.effect, TissueEffect::Increase);
        assert!(short.tendon.explanation.contains("Sufficient load, volume, and frequency"));
    }

    #[test]
    fn test_tendon_risk_with_heavy_load() {
        let result = evaluate(&levels(ExerciseCategory::ResistanceSeated, 4, 2, 2, 5, 3));
        assert_eq!(result.tendon.effect, TissueEffect::PotentialRisk);

        // Moderate load at high volume is not a tendon risk
        let moderate = evaluate(&levels(ExerciseCategory::ResistanceSeated, 3, 2, 5, 5, 3));
        assert_eq!(moderate.tendon.effect, TissueEffect::Increase);
    }

    #[test]
    fn test_walking_tendon_always_maintains() {
        for input in all_inputs(ExerciseCategory::Walking) {
            let result = evaluate(&input);
            assert_eq!(result.tendon.effect, TissueEffect::Maintain);
        }

        let regular = evaluate(&levels(ExerciseCategory::Walking, 2, 0, 3, 3, 0));
        assert!(regular.tendon.explanation.contains("Regular low impact loading"));
        let rare = evaluate(&levels(ExerciseCategory::Walking, 2, 0, 3, 2, 0));
        assert!(rare.tendon.explanation.contains("Infrequent low impact"));
    }

    #[test]
    fn test_non_weightbearing_bone_decreases() {
        for category in [ExerciseCategory::ResistanceSeated, ExerciseCategory::CyclingSwimming] {
            for input in all_inputs(category) {
                assert_eq!(evaluate(&input).bone.effect, TissueEffect::Decrease);
            }
        }
    }

    #[test]
    fn test_bone_walking_maintenance() {
        let result = evaluate(&levels(ExerciseCategory::Walking, 2, 0, 4, 3, 0));
        assert_eq!(result.bone.effect, TissueEffect::Maintain);
        assert!(result.bone.explanation.contains("helps maintain bone density"));

        let rare = evaluate(&levels(ExerciseCategory::Walking, 2, 0, 4, 2, 0));
        assert!(rare.bone.explanation.contains("minimal osteogenic stimulus"));
    }

    #[test]
    fn test_bone_running_needs_volume() {
        let result = evaluate(&levels(ExerciseCategory::Running, 2, 0, 3, 3, 0));
        assert_eq!(result.bone.effect, TissueEffect::Increase);
        assert!(result.bone.explanation.contains("Consistent moderate impact (running)"));

        let short = evaluate(&levels(ExerciseCategory::Running, 2, 0, 2, 3, 0));
        assert_eq!(short.bone.effect, TissueEffect::Maintain);
        // Neither low-stimulus floor applies here
        assert_eq!(
            short.bone.explanation,
            "Bone requires dynamic, weightbearing load. \
             Weightbearing exercise provides loading stimulus."
        );
    }

    #[test]
    fn test_bone_stress_fracture_caveat_keeps_effect() {
        // Jumping twice a week: no increase, but very high volume adds the caveat
        let result = evaluate(&levels(ExerciseCategory::Jumping, 3, 0, 5, 2, 0));
        assert_eq!(result.bone.effect, TissueEffect::Maintain);
        assert!(result.bone.explanation.contains("minimal osteogenic stimulus"));
        assert!(result.bone.explanation.contains("stress fracture risk"));
    }

    #[test]
    fn test_cap_infrequent_only_touches_increase() {
        let response = |effect| TissueResponse {
            effect,
            explanation: "unchanged".into(),
        };
        let capped = cap_infrequent(EvaluationResult {
            muscle: response(TissueEffect::Increase),
            tendon: response(TissueEffect::PotentialRisk),
            bone: response(TissueEffect::Decrease),
        });

        assert_eq!(capped.muscle.effect, TissueEffect::Maintain);
        assert_eq!(capped.muscle.explanation, "unchanged");
        assert_eq!(capped.tendon.effect, TissueEffect::PotentialRisk);
        assert_eq!(capped.bone.effect, TissueEffect::Decrease);
    }

    #[test]
    fn test_infrequent_jumping_keeps_tendon_risk() {
        let result = evaluate(&levels(ExerciseCategory::Jumping, 5, 0, 5, 1, 0));
        assert_eq!(result.tendon.effect, TissueEffect::PotentialRisk);
        assert_eq!(result.bone.effect, TissueEffect::Maintain);
    }

    #[test]
    fn test_infrequent_never_increases() {
        for category in ExerciseCategory::ALL {
            for input in all_inputs(category) {
                if input.frequency != Level::new(1) {
                    continue;
                }
                let result = evaluate(&input);
                assert!(
                    result.iter().all(|(_, r)| r.effect != TissueEffect::Increase),
                    "{:?} produced an increase",
                    input
                );
            }
        }
    }

    #[test]
    fn test_every_result_is_complete_and_deterministic() {
        for category in ExerciseCategory::ALL {
            for input in all_inputs(category) {
                let first = evaluate(&input);
                let second = evaluate(&input);
                assert_eq!(first, second);

                let tissues: Vec<_> = first.iter().map(|(t, _)| t).collect();
                assert_eq!(tissues, Tissue::ALL.to_vec());
                assert!(first.iter().all(|(_, r)| !r.explanation.is_empty()));
            }
        }
    }

    #[test]
    fn test_unspecified_levels_lean_to_maintenance() {
        let result = evaluate(&EvaluationInput::from_labels(
            ExerciseCategory::ResistanceStanding,
            "???",
            "???",
            "???",
            "???",
            "???",
        ));
        assert_eq!(Scale::Intensity.level_of("???"), Level::UNSPECIFIED);
        assert_eq!(result.muscle.effect, TissueEffect::Maintain);
        assert_eq!(result.tendon.effect, TissueEffect::Maintain);
        assert_eq!(result.bone.effect, TissueEffect::Maintain);
    }
}
