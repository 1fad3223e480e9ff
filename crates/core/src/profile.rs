//! Static descriptions for the sixteen type codes.

use crate::model::{Dimension, TypeCode};

/// Text shown on the results page for one type.
///
/// `summary` is always visible; the remaining fields belong to the
/// unlockable detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeProfile {
    pub code: &'static str,
    pub nickname: &'static str,
    pub summary: &'static str,
    pub strengths: &'static str,
    pub growth: &'static str,
    pub work_style: &'static str,
}

// Same order as `TypeCode::all()`: bit 3 = I, bit 2 = N, bit 1 = F, bit 0 = P.
static PROFILES: [TypeProfile; 16] = [
    TypeProfile {
        code: "ESTJ",
        nickname: "The Supervisor",
        summary: "Organised and decisive, you turn plans into routines that work.",
        strengths: "Dependable, direct, good at setting up structure others can follow.",
        growth: "Leave room for approaches that do not fit the usual procedure.",
        work_style: "Clear roles, measurable goals and firm deadlines.",
    },
    TypeProfile {
        code: "ESTP",
        nickname: "The Dynamo",
        summary: "Energetic and practical, you learn by jumping straight in.",
        strengths: "Quick reactions, comfortable with risk, persuasive in the moment.",
        growth: "Think one step past the immediate win before committing.",
        work_style: "Hands-on problems with visible results and little paperwork.",
    },
    TypeProfile {
        code: "ESFJ",
        nickname: "The Host",
        summary: "Warm and attentive, you keep the people around you looked after.",
        strengths: "Cooperative, loyal, notices what others need before they ask.",
        growth: "Criticism of an idea is not criticism of you.",
        work_style: "Team settings with shared traditions and appreciation for effort.",
    },
    TypeProfile {
        code: "ESFP",
        nickname: "The Performer",
        summary: "Spontaneous and fun, you bring a room to life.",
        strengths: "Observant of people, generous, adapts fast to what is happening.",
        growth: "Long-term plans deserve the same attention as the present moment.",
        work_style: "Varied, social work where enthusiasm is an asset.",
    },
    TypeProfile {
        code: "ENTJ",
        nickname: "The Commander",
        summary: "Strategic and assertive, you see the goal and organise the path to it.",
        strengths: "Confident decision making, long-range planning, leadership.",
        growth: "Slow down enough to bring people along with you.",
        work_style: "Ambitious projects where you can set direction.",
    },
    TypeProfile {
        code: "ENTP",
        nickname: "The Debater",
        summary: "Curious and quick-witted, you enjoy testing ideas against each other.",
        strengths: "Inventive, good at spotting flaws and new angles.",
        growth: "Finishing one idea is worth more than starting three.",
        work_style: "Open problems, brainstorming and freedom to experiment.",
    },
    TypeProfile {
        code: "ENFJ",
        nickname: "The Mentor",
        summary: "Charismatic and caring, you help others grow toward their potential.",
        strengths: "Encouraging, articulate, builds consensus easily.",
        growth: "Your own needs count too; say no when you have to.",
        work_style: "Roles where guiding and developing people is the point.",
    },
    TypeProfile {
        code: "ENFP",
        nickname: "The Campaigner",
        summary: "Enthusiastic and imaginative, you see possibilities everywhere.",
        strengths: "Creative, warm, great at rallying people around an idea.",
        growth: "Routine tasks still need doing; build small habits for them.",
        work_style: "Creative collaboration with room for new directions.",
    },
    TypeProfile {
        code: "ISTJ",
        nickname: "The Inspector",
        summary: "Responsible and thorough, you do what you said you would.",
        strengths: "Reliable, detail oriented, steady under pressure.",
        growth: "New methods can be worth trying even when the old one works.",
        work_style: "Well-defined tasks, quiet focus and accurate records.",
    },
    TypeProfile {
        code: "ISTP",
        nickname: "The Craftsperson",
        summary: "Calm and analytical, you like to understand how things work.",
        strengths: "Practical troubleshooting, composure in a crisis, independence.",
        growth: "Share your reasoning; others cannot see it otherwise.",
        work_style: "Tools, systems and problems you can take apart.",
    },
    TypeProfile {
        code: "ISFJ",
        nickname: "The Protector",
        summary: "Kind and conscientious, you quietly keep things running.",
        strengths: "Patient, supportive, remembers details about people.",
        growth: "Ask for recognition and help instead of waiting for it.",
        work_style: "Stable environments where care and diligence matter.",
    },
    TypeProfile {
        code: "ISFP",
        nickname: "The Artist",
        summary: "Gentle and sensitive, you live by your own values.",
        strengths: "Aesthetic sense, empathy, flexibility.",
        growth: "Conflict handled early stays small.",
        work_style: "Independent, hands-on work with personal meaning.",
    },
    TypeProfile {
        code: "INTJ",
        nickname: "The Architect",
        summary: "Independent and strategic, you build systems to reach long-term goals.",
        strengths: "Analytical depth, vision, determination.",
        growth: "Other people's feelings are data worth including.",
        work_style: "Complex problems with autonomy and high standards.",
    },
    TypeProfile {
        code: "INTP",
        nickname: "The Thinker",
        summary: "Inventive and logical, you chase ideas for their own sake.",
        strengths: "Precise reasoning, originality, open-mindedness.",
        growth: "Good enough and shipped beats perfect and theoretical.",
        work_style: "Research and design with time to think things through.",
    },
    TypeProfile {
        code: "INFJ",
        nickname: "The Advocate",
        summary: "Insightful and principled, you work quietly toward a better world.",
        strengths: "Deep understanding of people, long-term vision, integrity.",
        growth: "Perfectionism can wait; rest is part of the work.",
        work_style: "Purpose-driven roles with space for reflection.",
    },
    TypeProfile {
        code: "INFP",
        nickname: "The Mediator",
        summary: "Idealistic and empathetic, you look for meaning in everything.",
        strengths: "Authenticity, creativity, strong personal values.",
        growth: "Practical steps turn ideals into something real.",
        work_style: "Creative or helping work aligned with your values.",
    },
];

/// Description for a type code. Total over all sixteen codes.
#[must_use]
pub fn profile_for(code: TypeCode) -> &'static TypeProfile {
    let index = Dimension::ALL.iter().fold(0_usize, |acc, dimension| {
        let (first, _) = dimension.poles();
        let bit = usize::from(code.letter(*dimension) != first);
        (acc << 1) | bit
    });
    &PROFILES[index]
}
