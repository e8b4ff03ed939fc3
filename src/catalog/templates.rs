//! Flashcard template tables
//!
//! Each seeded subject has a fixed table of card templates. Bulk generation
//! cycles through the table; once a table is exhausted the question text gains
//! a " (Variation N)" suffix so repeated cards stay distinguishable. Subjects
//! without a table of their own fall back to the mathematics set.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::model::{CardKind, Flashcard, ItemDifficulty};

/// A static flashcard blueprint
#[derive(Debug, Clone, Copy)]
pub struct CardTemplate {
    pub question: &'static str,
    pub answer: &'static str,
    pub kind: CardKind,
    pub options: &'static [&'static str],
    pub correct_option: Option<usize>,
    pub explanation: &'static str,
    pub difficulty: ItemDifficulty,
}

impl CardTemplate {
    /// Build a card from this template
    ///
    /// `variation` is 1-based; variations beyond the first get a suffix on the
    /// question text.
    pub fn instantiate(
        &self,
        id: impl Into<String>,
        subject_id: impl Into<String>,
        variation: u32,
    ) -> Flashcard {
        let question = if variation > 1 {
            format!("{} (Variation {variation})", self.question)
        } else {
            self.question.to_string()
        };

        let mut card = Flashcard::new(id, subject_id, question, self.answer);
        card.kind = self.kind;
        card.options = self.options.iter().map(|s| s.to_string()).collect();
        card.correct_option = self.correct_option;
        card.explanation = Some(self.explanation.to_string());
        card.difficulty = self.difficulty;
        card
    }
}

const MATHEMATICS: &[CardTemplate] = &[
    CardTemplate {
        question: "What is the derivative of sin(x)?",
        answer: "cos(x)",
        kind: CardKind::ShortAnswer,
        options: &[],
        correct_option: None,
        explanation: "The derivative of sine is cosine",
        difficulty: ItemDifficulty::Medium,
    },
    CardTemplate {
        question: "The integral of 1/x is:",
        answer: "ln|x| + C",
        kind: CardKind::MultipleChoice,
        options: &["ln|x| + C", "x²/2 + C", "1/x² + C", "e^x + C"],
        correct_option: Some(0),
        explanation: "The antiderivative of 1/x is the natural logarithm",
        difficulty: ItemDifficulty::Medium,
    },
    CardTemplate {
        question: "A matrix is invertible if its determinant is non-zero",
        answer: "true",
        kind: CardKind::TrueFalse,
        options: &[],
        correct_option: None,
        explanation: "Non-zero determinant is required for matrix invertibility",
        difficulty: ItemDifficulty::Hard,
    },
    CardTemplate {
        question: "The limit of (sin x)/x as x approaches 0 is ____",
        answer: "1",
        kind: CardKind::FillBlank,
        options: &[],
        correct_option: None,
        explanation: "This is a fundamental limit in calculus",
        difficulty: ItemDifficulty::Hard,
    },
];

const PHYSICS: &[CardTemplate] = &[
    CardTemplate {
        question: "What is the uncertainty principle?",
        answer: "You cannot simultaneously know both position and momentum of a particle with perfect accuracy",
        kind: CardKind::ShortAnswer,
        options: &[],
        correct_option: None,
        explanation: "Heisenberg uncertainty principle is fundamental to quantum mechanics",
        difficulty: ItemDifficulty::Hard,
    },
    CardTemplate {
        question: "Schrödinger's equation describes:",
        answer: "Wave function evolution",
        kind: CardKind::MultipleChoice,
        options: &["Wave function evolution", "Particle decay", "Energy conservation", "Force interactions"],
        correct_option: Some(0),
        explanation: "Schrödinger equation governs quantum wave function dynamics",
        difficulty: ItemDifficulty::Hard,
    },
    CardTemplate {
        question: "Quantum entanglement allows faster-than-light communication",
        answer: "false",
        kind: CardKind::TrueFalse,
        options: &[],
        correct_option: None,
        explanation: "Entanglement does not allow information transfer",
        difficulty: ItemDifficulty::Hard,
    },
    CardTemplate {
        question: "The wave-particle duality means light behaves as both ____ and ____",
        answer: "wave and particle",
        kind: CardKind::FillBlank,
        options: &[],
        correct_option: None,
        explanation: "Light exhibits both wave and particle properties",
        difficulty: ItemDifficulty::Medium,
    },
];

const CHEMISTRY: &[CardTemplate] = &[
    CardTemplate {
        question: "What functional group characterizes alcohols?",
        answer: "Hydroxyl group (-OH)",
        kind: CardKind::ShortAnswer,
        options: &[],
        correct_option: None,
        explanation: "The -OH group defines alcohols",
        difficulty: ItemDifficulty::Easy,
    },
    CardTemplate {
        question: "Benzene has how many carbon atoms?",
        answer: "6",
        kind: CardKind::MultipleChoice,
        options: &["4", "5", "6", "7"],
        correct_option: Some(2),
        explanation: "Benzene is a 6-carbon aromatic ring",
        difficulty: ItemDifficulty::Easy,
    },
    CardTemplate {
        question: "Alkenes contain double bonds between carbon atoms",
        answer: "true",
        kind: CardKind::TrueFalse,
        options: &[],
        correct_option: None,
        explanation: "Alkenes are defined by C=C double bonds",
        difficulty: ItemDifficulty::Easy,
    },
    CardTemplate {
        question: "The process of adding hydrogen to alkenes is called ____",
        answer: "hydrogenation",
        kind: CardKind::FillBlank,
        options: &[],
        correct_option: None,
        explanation: "Hydrogenation converts alkenes to alkanes",
        difficulty: ItemDifficulty::Medium,
    },
];

const BIOLOGY: &[CardTemplate] = &[
    CardTemplate {
        question: "What is the central dogma of molecular biology?",
        answer: "DNA → RNA → Protein",
        kind: CardKind::ShortAnswer,
        options: &[],
        correct_option: None,
        explanation: "Information flows from DNA to RNA to proteins",
        difficulty: ItemDifficulty::Medium,
    },
    CardTemplate {
        question: "Which enzyme synthesizes RNA from DNA?",
        answer: "RNA polymerase",
        kind: CardKind::MultipleChoice,
        options: &["DNA polymerase", "RNA polymerase", "Ligase", "Helicase"],
        correct_option: Some(1),
        explanation: "RNA polymerase transcribes DNA to RNA",
        difficulty: ItemDifficulty::Medium,
    },
    CardTemplate {
        question: "mRNA carries genetic information from nucleus to ribosomes",
        answer: "true",
        kind: CardKind::TrueFalse,
        options: &[],
        correct_option: None,
        explanation: "mRNA is the messenger between DNA and protein synthesis",
        difficulty: ItemDifficulty::Easy,
    },
    CardTemplate {
        question: "The genetic code is read in groups of ____ nucleotides called codons",
        answer: "three",
        kind: CardKind::FillBlank,
        options: &[],
        correct_option: None,
        explanation: "Codons are triplets of nucleotides",
        difficulty: ItemDifficulty::Easy,
    },
];

const COMPUTER_SCIENCE: &[CardTemplate] = &[
    CardTemplate {
        question: "What is the time complexity of binary search?",
        answer: "O(log n)",
        kind: CardKind::ShortAnswer,
        options: &[],
        correct_option: None,
        explanation: "Binary search halves the search space each iteration",
        difficulty: ItemDifficulty::Medium,
    },
    CardTemplate {
        question: "Which data structure uses LIFO principle?",
        answer: "Stack",
        kind: CardKind::MultipleChoice,
        options: &["Queue", "Stack", "Array", "Tree"],
        correct_option: Some(1),
        explanation: "Stack follows Last In, First Out principle",
        difficulty: ItemDifficulty::Easy,
    },
    CardTemplate {
        question: "A balanced binary tree has O(log n) search time",
        answer: "true",
        kind: CardKind::TrueFalse,
        options: &[],
        correct_option: None,
        explanation: "Balanced trees maintain logarithmic height",
        difficulty: ItemDifficulty::Medium,
    },
    CardTemplate {
        question: "A hash table provides ____ average case lookup time",
        answer: "O(1)",
        kind: CardKind::FillBlank,
        options: &[],
        correct_option: None,
        explanation: "Hash tables offer constant time average lookup",
        difficulty: ItemDifficulty::Medium,
    },
];

const HISTORY: &[CardTemplate] = &[
    CardTemplate {
        question: "When did World War II end?",
        answer: "1945",
        kind: CardKind::ShortAnswer,
        options: &[],
        correct_option: None,
        explanation: "WWII ended in 1945 with Japan's surrender",
        difficulty: ItemDifficulty::Easy,
    },
    CardTemplate {
        question: "The Renaissance began in which country?",
        answer: "Italy",
        kind: CardKind::MultipleChoice,
        options: &["France", "Germany", "Italy", "England"],
        correct_option: Some(2),
        explanation: "The Renaissance started in Italy in the 14th century",
        difficulty: ItemDifficulty::Easy,
    },
    CardTemplate {
        question: "The Industrial Revolution began in the 18th century",
        answer: "true",
        kind: CardKind::TrueFalse,
        options: &[],
        correct_option: None,
        explanation: "The Industrial Revolution started around 1760",
        difficulty: ItemDifficulty::Easy,
    },
    CardTemplate {
        question: "The ____ Empire was known as the \"Empire on which the sun never sets\"",
        answer: "British",
        kind: CardKind::FillBlank,
        options: &[],
        correct_option: None,
        explanation: "The British Empire spanned the globe",
        difficulty: ItemDifficulty::Medium,
    },
];

static TEMPLATES: Lazy<HashMap<&'static str, &'static [CardTemplate]>> = Lazy::new(|| {
    HashMap::from([
        ("Advanced Mathematics", MATHEMATICS),
        ("Quantum Physics", PHYSICS),
        ("Organic Chemistry", CHEMISTRY),
        ("Molecular Biology", BIOLOGY),
        ("Data Structures", COMPUTER_SCIENCE),
        ("World History", HISTORY),
    ])
});

/// The template table for a subject name, falling back to the mathematics set
pub fn templates_for(subject_name: &str) -> &'static [CardTemplate] {
    TEMPLATES.get(subject_name).copied().unwrap_or(MATHEMATICS)
}
