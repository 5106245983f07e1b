//! Built-in value card set: twenty positive/shadow pairs, four per category.
//!
//! Positive cards use ids 1–20, their shadows `id + SHADOW_ID_OFFSET`. Each
//! pair is driven by one diagnosis question sharing the positive card's id.

use crate::models::value::{DiagnosisQuestion, Polarity, ValueCard, ValueCategory};

pub const SHADOW_ID_OFFSET: u32 = 100;

struct PairSpec {
    id: u32,
    category: ValueCategory,
    positive: (&'static str, &'static str),
    negative: (&'static str, &'static str),
    question: &'static str,
}

const PAIRS: &[PairSpec] = &[
    PairSpec {
        id: 1,
        category: ValueCategory::Thinking,
        positive: ("Curiosity", "Keeps asking why and enjoys exploring the unknown."),
        negative: ("Distraction", "Interest jumps to the next thing before the first is done."),
        question: "I enjoy exploring ideas even when they have no immediate use.",
    },
    PairSpec {
        id: 2,
        category: ValueCategory::Thinking,
        positive: ("Creativity", "Finds original approaches instead of copying templates."),
        negative: ("Impracticality", "Ideas can drift away from what is feasible."),
        question: "I prefer inventing my own approach over following a template.",
    },
    PairSpec {
        id: 3,
        category: ValueCategory::Thinking,
        positive: ("Logical Thinking", "Reasons from evidence to a clear conclusion."),
        negative: ("Coldness", "Can come across as dismissive of feelings."),
        question: "I decide by reasoning through evidence rather than gut feeling.",
    },
    PairSpec {
        id: 4,
        category: ValueCategory::Thinking,
        positive: ("Strategic Vision", "Sees several moves ahead and plans for them."),
        negative: ("Overthinking", "Analysis can stall the first step."),
        question: "I naturally think several steps ahead.",
    },
    PairSpec {
        id: 5,
        category: ValueCategory::Action,
        positive: ("Drive", "Starts moving before every detail is settled."),
        negative: ("Impatience", "Finds waiting on others frustrating."),
        question: "I start moving before every detail is settled.",
    },
    PairSpec {
        id: 6,
        category: ValueCategory::Action,
        positive: ("Passion", "Commits fully to what matters to them."),
        negative: ("Volatility", "Energy swings with mood."),
        question: "I throw myself fully into things I care about.",
    },
    PairSpec {
        id: 7,
        category: ValueCategory::Action,
        positive: ("Leadership", "Steps up to steer a group toward a goal."),
        negative: ("Domineering", "May override quieter voices."),
        question: "I step up to steer a group when no one else does.",
    },
    PairSpec {
        id: 8,
        category: ValueCategory::Action,
        positive: ("Challenge Seeking", "Chooses the harder path when it promises growth."),
        negative: ("Recklessness", "Underestimates the downside of a bold move."),
        question: "I pick the harder option when it promises growth.",
    },
    PairSpec {
        id: 9,
        category: ValueCategory::Integrity,
        positive: ("Sincerity", "Keeps promises even when it is costly."),
        negative: ("Rigidity", "Struggles when rules need to bend."),
        question: "I keep promises even when it costs me.",
    },
    PairSpec {
        id: 10,
        category: ValueCategory::Integrity,
        positive: ("Perseverance", "Sees commitments through to the end."),
        negative: ("Stubbornness", "Holds on after a change of course is due."),
        question: "I see tasks through to the end once I commit.",
    },
    PairSpec {
        id: 11,
        category: ValueCategory::Integrity,
        positive: ("Diligence", "Checks work carefully before handing it over."),
        negative: ("Perfectionism", "Polishing can delay delivery."),
        question: "I check my work carefully before handing it over.",
    },
    PairSpec {
        id: 12,
        category: ValueCategory::Integrity,
        positive: ("Responsibility", "Owns outcomes, good or bad."),
        negative: ("Overburden", "Takes on more than is sustainable."),
        question: "I take ownership of outcomes, good or bad.",
    },
    PairSpec {
        id: 13,
        category: ValueCategory::Empathy,
        positive: ("Empathy", "Notices how others feel without being told."),
        negative: ("People Pleasing", "Finds it hard to say no."),
        question: "I notice how others feel without being told.",
    },
    PairSpec {
        id: 14,
        category: ValueCategory::Empathy,
        positive: ("Cooperation", "Does their best work as part of a team."),
        negative: ("Dependence", "Hesitates to act without consensus."),
        question: "I do my best work as part of a team.",
    },
    PairSpec {
        id: 15,
        category: ValueCategory::Empathy,
        positive: ("Supportiveness", "Is motivated by helping others succeed."),
        negative: ("Self Neglect", "Puts own needs last for too long."),
        question: "Helping others succeed motivates me.",
    },
    PairSpec {
        id: 16,
        category: ValueCategory::Empathy,
        positive: ("Communication", "Explains ideas until everyone is aligned."),
        negative: ("Talkativeness", "Can fill silence others needed."),
        question: "I enjoy explaining ideas until everyone is on the same page.",
    },
    PairSpec {
        id: 17,
        category: ValueCategory::Stability,
        positive: ("Prudence", "Weighs risks before acting."),
        negative: ("Hesitancy", "Waits too long for certainty."),
        question: "I think through risks before acting.",
    },
    PairSpec {
        id: 18,
        category: ValueCategory::Stability,
        positive: ("Consistency", "Delivers steadily through routine."),
        negative: ("Inflexibility", "Resists changes to familiar ways."),
        question: "I prefer steady routines to constant change.",
    },
    PairSpec {
        id: 19,
        category: ValueCategory::Stability,
        positive: ("Composure", "Stays calm under pressure."),
        negative: ("Detachment", "Calm can read as indifference."),
        question: "I stay calm under pressure.",
    },
    PairSpec {
        id: 20,
        category: ValueCategory::Stability,
        positive: ("Planning", "Lays out a plan before starting."),
        negative: ("Over Caution", "Plans can crowd out opportunities."),
        question: "I like to have a plan before starting anything.",
    },
];

/// Positive cards in id order, followed by their shadows in the same order.
pub fn builtin_cards() -> Vec<ValueCard> {
    let positives = PAIRS.iter().map(|p| ValueCard {
        id: p.id,
        name: p.positive.0.to_string(),
        polarity: Polarity::Positive,
        categories: vec![p.category],
        description: p.positive.1.to_string(),
        pair_id: Some(p.id + SHADOW_ID_OFFSET),
    });
    let shadows = PAIRS.iter().map(|p| ValueCard {
        id: p.id + SHADOW_ID_OFFSET,
        name: p.negative.0.to_string(),
        polarity: Polarity::Negative,
        categories: vec![p.category],
        description: p.negative.1.to_string(),
        pair_id: Some(p.id),
    });
    positives.chain(shadows).collect()
}

pub fn builtin_questions() -> Vec<DiagnosisQuestion> {
    PAIRS
        .iter()
        .map(|p| DiagnosisQuestion {
            id: p.id,
            category: p.category,
            text: p.question.to_string(),
            positive_value_id: p.id,
            negative_value_id: p.id + SHADOW_ID_OFFSET,
        })
        .collect()
}
