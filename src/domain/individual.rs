use crate::domain::assessment::{AssessmentDefinition, AssessmentKind};
use crate::domain::bank::{BankError, Category, QuestionBank};
use crate::domain::classification::{BracketContent, BracketTable, ColorTier};

const SELF_AWARENESS: &[(u32, &str)] = &[
    (1, "I can name what I am feeling when a relationship gets difficult."),
    (2, "I notice the patterns I repeat from past relationships."),
    (3, "I understand what I need from a partner to feel secure."),
    (4, "I can take responsibility for my part in a disagreement."),
];

const COMMUNICATION: &[(u32, &str)] = &[
    (5, "I express my needs clearly instead of hoping they will be guessed."),
    (6, "I listen to understand rather than to respond."),
    (7, "I can bring up uncomfortable topics without blaming."),
    (8, "I ask questions when I am unsure what my partner means."),
];

const TRUST_HONESTY: &[(u32, &str)] = &[
    (9, "I am honest even when the truth is uncomfortable."),
    (10, "I follow through on what I promise."),
    (11, "I give people the benefit of the doubt until I have a reason not to."),
    (12, "I feel safe being vulnerable with the people close to me."),
];

const BOUNDARIES: &[(u32, &str)] = &[
    (13, "I can say no without feeling guilty for days."),
    (14, "I keep time for myself, my friends and my interests."),
    (15, "I notice when someone crosses a line and I tell them."),
    (16, "I respect a partner's boundaries even when I disagree with them."),
];

const CONFLICT_RESOLUTION: &[(u32, &str)] = &[
    (17, "I stay calm enough in an argument to hear the other side."),
    (18, "I take a break when I am too upset to talk productively."),
    (19, "I look for solutions instead of trying to win."),
    (20, "I can apologise and forgive without keeping score."),
];

pub(crate) fn bank() -> Result<QuestionBank, BankError> {
    QuestionBank::from_sections(&[
        (Category::SelfAwareness, SELF_AWARENESS),
        (Category::Communication, COMMUNICATION),
        (Category::TrustHonesty, TRUST_HONESTY),
        (Category::Boundaries, BOUNDARIES),
        (Category::ConflictResolution, CONFLICT_RESOLUTION),
    ])
}

fn brackets() -> BracketTable {
    BracketTable::new(
        BracketContent {
            label: "Critical",
            color_tier: ColorTier::Red,
            summary: "Your answers point to relationship habits that are causing you real strain. \
                This is not a verdict on who you are; it is a sign that you deserve more support \
                than you are getting right now.",
            insights: &[
                "Difficult emotions may be driving your reactions before you can name them.",
                "Saying what you need may feel unsafe, so needs go unspoken and resentment builds.",
                "Boundaries are likely thin, leaving little room for your own recovery.",
            ],
            actions: &[
                "Talk to a licensed therapist or counsellor about what you are carrying.",
                "Write down one need you have not voiced and practise saying it out loud.",
                "Reach out to one trusted friend this week and tell them how you are really doing.",
            ],
        },
        BracketContent {
            label: "Needs Work",
            color_tier: ColorTier::Orange,
            summary: "You have some solid foundations, but several habits are holding your \
                relationships back. Focused practice in your lowest areas will make a \
                noticeable difference.",
            insights: &[
                "You may understand your patterns but still fall back on them under stress.",
                "Conversations about hard topics probably end before they are resolved.",
                "Trust may depend heavily on how the other person behaves on a given day.",
            ],
            actions: &[
                "Pick your lowest category and choose one habit from it to practise for two weeks.",
                "Use \"I feel... when... because...\" statements in your next difficult conversation.",
                "Schedule a weekly check-in with yourself to review how you showed up.",
            ],
        },
        BracketContent {
            label: "Moderate",
            color_tier: ColorTier::Yellow,
            summary: "You bring a good deal of self-awareness and care to your relationships. \
                A few areas still need attention, especially when pressure is high.",
            insights: &[
                "Your habits are healthy most of the time but can slip during conflict.",
                "You are open with people you trust and more guarded with everyone else.",
                "Small adjustments in your weaker categories will compound quickly.",
            ],
            actions: &[
                "Notice what happens in your body before an argument escalates and pause there.",
                "Ask someone close to you which habit of yours they would most like to see more of.",
                "Revisit this assessment in a month to track what has shifted.",
            ],
        },
        BracketContent {
            label: "Strong",
            color_tier: ColorTier::Green,
            summary: "You show strong, healthy relationship habits. You communicate openly, \
                hold clear boundaries and handle conflict with maturity. Keep investing in \
                what already works.",
            insights: &[
                "You can stay connected to others without losing yourself.",
                "Disagreements are more likely to bring you closer than push you apart.",
                "Your honesty and follow-through give people a reason to trust you.",
            ],
            actions: &[
                "Keep the practices that got you here part of your routine.",
                "Share what works for you with a friend who is struggling.",
                "Stretch yourself in your lowest category, even if it is already healthy.",
            ],
        },
    )
}

pub(crate) fn definition(bank: QuestionBank) -> AssessmentDefinition {
    AssessmentDefinition {
        kind: AssessmentKind::Individual,
        title: "Individual Relationship Assessment",
        description: "Reflect on the habits you bring into your relationships.",
        bank,
        brackets: brackets(),
    }
}
