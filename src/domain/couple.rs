use crate::domain::assessment::{AssessmentDefinition, AssessmentKind};
use crate::domain::bank::{BankError, Category, QuestionBank};
use crate::domain::classification::{BracketContent, BracketTable, ColorTier};

const COMMUNICATION: &[(u32, &str)] = &[
    (101, "We talk openly about what is going on in our lives."),
    (102, "My partner listens without interrupting or judging."),
    (103, "We can discuss difficult topics without it turning into a fight."),
    (104, "I feel understood when I share something important."),
];

const TRUST_HONESTY: &[(u32, &str)] = &[
    (105, "I trust my partner to be honest with me."),
    (106, "We keep the promises we make to each other."),
    (107, "I do not feel the need to check up on my partner."),
    (108, "We are transparent about money, plans and friendships."),
];

const EMOTIONAL_INTIMACY: &[(u32, &str)] = &[
    (109, "I feel emotionally close to my partner."),
    (110, "I can be vulnerable with my partner without fear of ridicule."),
    (111, "We show affection to each other regularly."),
    (112, "My partner knows what is really worrying me."),
];

const CONFLICT_RESOLUTION: &[(u32, &str)] = &[
    (113, "We resolve disagreements instead of letting them pile up."),
    (114, "Neither of us uses insults or the silent treatment."),
    (115, "We can take a break and come back to a hard conversation."),
    (116, "After an argument we reconnect within a reasonable time."),
];

const SHARED_VALUES: &[(u32, &str)] = &[
    (117, "We agree on what matters most in life."),
    (118, "We have compatible ideas about our future together."),
    (119, "We make big decisions as a team."),
    (120, "We respect each other's beliefs where they differ."),
];

const QUALITY_TIME: &[(u32, &str)] = &[
    (121, "We set aside time for each other without distractions."),
    (122, "We still enjoy doing things together."),
    (123, "We laugh together often."),
    (124, "We make plans to look forward to as a couple."),
];

const SUPPORT_RESPECT: &[(u32, &str)] = &[
    (125, "My partner supports my goals and ambitions."),
    (126, "I feel respected even when we disagree."),
    (127, "We share responsibilities at home fairly."),
    (128, "My partner is there for me when things are hard."),
];

pub(crate) fn bank() -> Result<QuestionBank, BankError> {
    QuestionBank::from_sections(&[
        (Category::Communication, COMMUNICATION),
        (Category::TrustHonesty, TRUST_HONESTY),
        (Category::EmotionalIntimacy, EMOTIONAL_INTIMACY),
        (Category::ConflictResolution, CONFLICT_RESOLUTION),
        (Category::SharedValues, SHARED_VALUES),
        (Category::QualityTime, QUALITY_TIME),
        (Category::SupportRespect, SUPPORT_RESPECT),
    ])
}

fn brackets() -> BracketTable {
    BracketTable::new(
        BracketContent {
            label: "Critical",
            color_tier: ColorTier::Red,
            summary: "Your relationship is under serious strain. Patterns of disconnection, \
                mistrust or unresolved conflict are affecting you both. Professional support \
                can help you find a way forward together or apart.",
            insights: &[
                "Conflicts are likely escalating or being avoided entirely.",
                "One or both of you may feel unheard, unsafe or alone in the relationship.",
                "Trust has been damaged and everyday interactions carry that weight.",
            ],
            actions: &[
                "Consider couples therapy with a licensed professional.",
                "Agree on a pause signal either of you can use when an argument gets heated.",
                "If you ever feel unsafe, contact a support line or someone you trust immediately.",
            ],
        },
        BracketContent {
            label: "Needs Attention",
            color_tier: ColorTier::Orange,
            summary: "There is real care between you, but important areas of your relationship \
                are being neglected. Addressing them now will prevent distance from growing.",
            insights: &[
                "You may be functioning well as a team while drifting apart emotionally.",
                "Some disagreements keep coming back because they were never resolved.",
                "One partner may be carrying more of the emotional or practical load.",
            ],
            actions: &[
                "Hold a 20-minute weekly check-in about how each of you is feeling.",
                "Choose the lowest-scoring category and talk about it without assigning blame.",
                "Plan one distraction-free evening together this week.",
            ],
        },
        BracketContent {
            label: "Moderate",
            color_tier: ColorTier::Yellow,
            summary: "Your relationship has a solid base with a few areas that could use more \
                care. Most couples sit here; intentional effort will move you forward.",
            insights: &[
                "You generally feel connected, though busy periods put that to the test.",
                "You handle most conflicts well but some topics remain sensitive.",
                "Small rituals of connection would make a noticeable difference.",
            ],
            actions: &[
                "Ask each other what one thing would make you feel more loved this month.",
                "Revisit shared goals and update them together.",
                "Celebrate what is already working between you.",
            ],
        },
        BracketContent {
            label: "Healthy",
            color_tier: ColorTier::Green,
            summary: "Your relationship shows strong foundations of trust, communication and \
                mutual respect. You are working as a team; keep nurturing the habits that \
                brought you here.",
            insights: &[
                "You feel safe being yourselves with each other.",
                "Conflict is handled in a way that strengthens rather than erodes trust.",
                "You share values and invest time in each other.",
            ],
            actions: &[
                "Keep your connection rituals going, especially during stressful seasons.",
                "Try something new together to keep growing as a couple.",
                "Retake this assessment every few months to stay ahead of any drift.",
            ],
        },
    )
}

pub(crate) fn definition(bank: QuestionBank) -> AssessmentDefinition {
    AssessmentDefinition {
        kind: AssessmentKind::Couple,
        title: "Couple Relationship Assessment",
        description: "Check in on the health of your relationship as a couple.",
        bank,
        brackets: brackets(),
    }
}
