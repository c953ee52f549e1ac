//! Option lists rendered by the clinic forms.
//!
//! Checkbox groups store the label itself; selects store the value of a
//! `(value, label)` pair.

/// Primary diagnoses offered at intake.
pub const DIAGNOSES: &[&str] = &[
    "Autism Spectrum Disorder (ASD)",
    "Speech Sound Disorder",
    "Expressive Language Delay",
    "Receptive Language Delay",
    "Mixed Expressive-Receptive Language Disorder",
    "Apraxia of Speech",
    "Stuttering",
    "Social Communication Disorder",
    "Down Syndrome",
    "ADHD",
    "Global Developmental Delay",
    "Hearing Impairment",
    "Cerebral Palsy",
    "Selective Mutism",
    "Intellectual Disability",
];

pub const SEVERITY_LEVELS: &[(&str, &str)] = &[
    ("mild", "Mild"),
    ("moderate", "Moderate"),
    ("severe", "Severe"),
];

pub const GENDERS: &[(&str, &str)] = &[
    ("male", "Male"),
    ("female", "Female"),
    ("nonBinary", "Non-binary"),
    ("preferNotToSay", "Prefer not to say"),
];

pub const COMMUNICATION_MODES: &[(&str, &str)] = &[
    ("verbalSentences", "Verbal (speaks in full sentences)"),
    ("verbalPhrases", "Verbal (uses words/phrases)"),
    ("nonverbal", "Non-verbal"),
    ("gestures", "Gestures only"),
    ("signLanguage", "Sign Language"),
    ("aac", "AAC"),
    ("pecs", "Uses PECS"),
    ("mixed", "Mixed"),
];

pub const HOME_LANGUAGES: &[&str] = &[
    "English",
    "Hindi",
    "Bengali",
    "Tamil",
    "Telugu",
    "Marathi",
    "Gujarati",
    "Kannada",
    "Urdu",
    "Malayalam",
    "Punjabi",
];

pub const BEHAVIORAL_CONSIDERATIONS: &[&str] = &[
    "Easily Distracted",
    "Needs Movement Breaks",
    "May Exhibit Tantrums",
    "Needs Visual Schedules",
    "Works Better with Rewards",
    "Avoids Eye Contact",
    "Sensory Avoider",
    "Sensory Seeker",
];

/// Sensory channels, as `(field name, label)`.
pub const SENSES: &[(&str, &str)] = &[
    ("visual", "Visual"),
    ("auditory", "Auditory"),
    ("tactile", "Tactile (Touch)"),
    ("movement", "Movement (Vestibular)"),
    ("tasteSmell", "Taste/Smell"),
];

pub const SENSORY_RESPONSES: &[(&str, &str)] = &[
    ("seeker", "Seeker"),
    ("avoider", "Avoider"),
    ("neutral", "Neutral"),
];

pub const FAVORITE_TOPICS: &[&str] = &[
    "Animals",
    "Food",
    "Vehicles",
    "Cartoons",
    "Colors",
    "Shapes",
    "Numbers",
    "School-related",
    "Family",
    "Festivals",
    "Emotions",
    "Nature",
    "Sports",
    "Music",
    "Role Play",
    "Superheroes",
];

pub const LEARNING_STYLES: &[&str] = &[
    "Visual (pictures/icons)",
    "Auditory (sound/music)",
    "Kinesthetic (touch/interaction)",
    "Gamified (levels, points)",
    "Real-world Context",
    "Story-based",
    "Minimal Distractions",
];

pub const THERAPY_GOALS: &[&str] = &[
    "WH Questions",
    "Vocabulary Building",
    "Categorization",
    "Turn-taking",
    "Greetings / Social Skills",
    "Following Instructions",
    "Yes/No Questions",
    "Sequencing / Story Retell",
    "Prepositions",
    "Pronouns",
    "Sentence Building",
    "Picture Description",
    "Articulation / Sound Production",
    "AAC Skill Building",
    "Answering Questions from Visuals",
    "Listening Comprehension",
];

pub const THERAPY_GOAL_TYPES: &[(&str, &str)] = &[
    ("expressiveLanguage", "Expressive Language"),
    ("receptiveLanguage", "Receptive Language"),
    ("articulation", "Articulation"),
    ("socialCommunication", "Social Communication"),
    ("pragmatics", "Pragmatics"),
    ("imitation", "Imitation"),
    ("attentionSpan", "Attention Span"),
];

pub const THERAPY_PHASES: &[(&str, &str)] = &[
    ("baseline", "Baseline"),
    ("acquisition", "Acquisition"),
    ("generalization", "Generalization"),
    ("maintenance", "Maintenance"),
];

pub const ACTIVITY_TYPES: &[(&str, &str)] = &[
    ("storyBased", "Story-based"),
    ("visual", "Visual"),
    ("musicBased", "Music-based"),
    ("gameBased", "Game-based"),
    ("rolePlay", "Role Play"),
    ("physicalTask", "Physical Task"),
    ("puzzle", "Puzzle"),
];

pub const ENGAGEMENT_RESPONSES: &[(&str, &str)] = &[
    ("highlyEngaged", "Highly Engaged"),
    ("neutral", "Neutral"),
    ("disengaged", "Disengaged"),
];

pub const CHALLENGING_BEHAVIORS: &[(&str, &str)] = &[
    ("meltdowns", "Meltdowns"),
    ("avoidance", "Avoidance"),
    ("nonResponsiveness", "Non-responsiveness"),
    ("hyperactivity", "Hyperactivity"),
    ("none", "None"),
];

pub const COMMUNICATION_STYLES: &[(&str, &str)] = &[
    ("verbal", "Verbal"),
    ("nonverbal", "Non-verbal"),
    ("limitedWords", "Limited Words"),
    ("gestures", "Uses Gestures"),
    ("aac", "Uses AAC / PECS"),
];

/// Communication concerns raised during IEP creation.
pub const IEP_CONCERNS: &[(&str, &str)] = &[
    ("speechClarity", "Speech clarity"),
    ("echolalia", "Echolalia"),
    ("monotoneVoice", "Monotone or unusual voice"),
    ("pragmatics", "Social use of language (pragmatics)"),
];

pub const IEP_DURATIONS: &[(&str, &str)] = &[
    ("3months", "3 months"),
    ("6months", "6 months"),
    ("9months", "9 months"),
    ("12months", "12 months"),
];

pub const IEP_SESSION_LENGTHS: &[(&str, &str)] = &[
    ("15min", "15 minutes"),
    ("30min", "30 minutes"),
    ("45min", "45 minutes"),
    ("60min", "60 minutes"),
];

pub const SESSION_SETTINGS: &[(&str, &str)] = &[
    ("clinic", "Clinic"),
    ("home", "Home"),
    ("school", "School"),
    ("telepractice", "Telepractice"),
];

pub const GOAL_DOMAINS: &[(&str, &str)] = &[
    ("communication", "Communication"),
    ("social", "Social"),
    ("behavior", "Behavior"),
    ("sensory", "Sensory"),
    ("fineMotor", "Fine Motor"),
    ("grossMotor", "Gross Motor"),
    ("adls", "ADLs"),
    ("academics", "Academics"),
];

pub const AVAILABLE_MATERIALS: &[(&str, &str)] = &[
    ("flashcards", "Flashcards"),
    ("sensoryBin", "Sensory bin"),
    ("artSupplies", "Art supplies"),
    ("blocks", "Blocks"),
    ("pecsCards", "PECS cards"),
    ("tablet", "Tablet"),
];

pub const PREFERRED_ACTIVITY_TYPES: &[(&str, &str)] = &[
    ("playBased", "Play-based"),
    ("structuredDrills", "Structured drills"),
    ("visualSchedules", "Visual schedules"),
    ("sensory", "Sensory"),
    ("socialStories", "Social stories"),
    ("academicTasks", "Academic tasks"),
];

/// Label for a select value, if the value is in the list.
pub fn label_for<'a>(options: &'a [(&'a str, &'a str)], value: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
}
