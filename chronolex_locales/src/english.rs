//! English (`en-us`).

use chronolex_core::{
    Culture, CueRules, DateUnit, DayFallback, DayRule, DayRules, LexiconDef, LocaleModule, Marker,
    Normalizer, PatternDef, PatternKey, PeriodShapeRules, Precedence, Season, SwiftRules,
};

pub struct English;

const PATTERNS: &[(PatternKey, &str)] = &[
    (PatternKey::NextPrefix, r"\b(following|next|upcoming|coming)\b"),
    (PatternKey::PastPrefix, r"\b(last|past|previous|prior)\b"),
    (PatternKey::ThisPrefix, r"\b(this|current)\b"),
    (
        PatternKey::RelativeDay,
        r"\b(the\s+)?(next|last|following|previous|this|same)\s+day\b",
    ),
    (
        PatternKey::Relative,
        r"\b(next|last|this|past|previous|following|upcoming|coming|current)\b",
    ),
    (
        PatternKey::SpecialDay,
        r"\b((the\s+)?day\s+before\s+yesterday|(the\s+)?day\s+after\s+(tomorrow|tmr)|the\s+(previous|next)\s+day|(the\s+)?last\s+day|today|tomorrow|tmr|yesterday)\b",
    ),
    (
        PatternKey::WeekDay,
        r"\b(?P<weekday>sunday|monday|tuesday|wednesday|thursday|friday|saturday|mon|tues?|wedn?|thur?s?|fri|sat|sun)s?\b",
    ),
    (
        PatternKey::Month,
        r"\b(?P<month>january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept?|oct|nov|dec)\b",
    ),
    (
        PatternKey::DateUnit,
        r"\b(?P<unit>decades?|years?|months?|weeks?|(?P<business>business\s+)?days?)\b",
    ),
    (
        PatternKey::RelativeMonth,
        r"\b(?P<relmonth>(of\s+)?(this|next|last|following|previous)\s+month)\b",
    ),
    (
        PatternKey::On,
        r"\bon\s+(the\s+)?(?P<day>(3[01]|[12]\d|0?[1-9])(st|nd|rd|th)?)\b",
    ),
    (PatternKey::Preposition, r"^(at|on|of)(\s+the)?$"),
    (PatternKey::Connector, r"^(-|,|for|t|around|@)$"),
    (
        PatternKey::Ago,
        r"\b(ago|before\s+(?P<day>yesterday|today))\b",
    ),
    (
        PatternKey::Later,
        r"\b(later|from\s+now|(from|after)\s+(?P<day>tomorrow|tmr|today))\b",
    ),
    (
        PatternKey::Now,
        r"\b(?P<now>(right\s+)?now|as\s+soon\s+as\s+possible|asap|recently|previously)\b",
    ),
    (
        PatternKey::FutureSuffix,
        r"\b(in\s+the\s+)?(future|hence)\b",
    ),
    (PatternKey::Or, r"\bor\b"),
    (PatternKey::Am, r"\b(am|a\.m)\b\.?"),
    (PatternKey::Pm, r"\b(pm|p\.m)\b\.?"),
];

const fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

static LEXICON: LexiconDef = LexiconDef {
    day_of_week: &[
        ("sunday", 0),
        ("monday", 1),
        ("tuesday", 2),
        ("wednesday", 3),
        ("thursday", 4),
        ("friday", 5),
        ("saturday", 6),
        ("sun", 0),
        ("mon", 1),
        ("tue", 2),
        ("tues", 2),
        ("wed", 3),
        ("wedn", 3),
        ("thu", 4),
        ("thur", 4),
        ("thurs", 4),
        ("fri", 5),
        ("sat", 6),
    ],
    month_of_year: &[
        ("january", 1),
        ("february", 2),
        ("march", 3),
        ("april", 4),
        ("may", 5),
        ("june", 6),
        ("july", 7),
        ("august", 8),
        ("september", 9),
        ("october", 10),
        ("november", 11),
        ("december", 12),
        ("jan", 1),
        ("feb", 2),
        ("mar", 3),
        ("apr", 4),
        ("jun", 6),
        ("jul", 7),
        ("aug", 8),
        ("sep", 9),
        ("sept", 9),
        ("oct", 10),
        ("nov", 11),
        ("dec", 12),
    ],
    cardinal: &[
        ("first", 1),
        ("second", 2),
        ("third", 3),
        ("fourth", 4),
        ("fifth", 5),
        ("1st", 1),
        ("2nd", 2),
        ("3rd", 3),
        ("4th", 4),
        ("5th", 5),
    ],
    day_of_month_words: &[],
    ordinal_suffix,
    unit: &[
        ("decade", DateUnit::Decade),
        ("decades", DateUnit::Decade),
        ("year", DateUnit::Year),
        ("years", DateUnit::Year),
        ("month", DateUnit::Month),
        ("months", DateUnit::Month),
        ("week", DateUnit::Week),
        ("weeks", DateUnit::Week),
        ("day", DateUnit::Day),
        ("days", DateUnit::Day),
        ("business day", DateUnit::Day),
        ("business days", DateUnit::Day),
    ],
    season: &[
        ("spring", Season::Spring),
        ("summer", Season::Summer),
        ("fall", Season::Fall),
        ("autumn", Season::Fall),
        ("winter", Season::Winter),
    ],
};

const PREFIX_CUES: CueRules = CueRules {
    next: &[Marker::Pattern(PatternKey::NextPrefix)],
    past: &[Marker::Pattern(PatternKey::PastPrefix)],
    this: &[Marker::Pattern(PatternKey::ThisPrefix)],
    precedence: Precedence::NextWins,
};

static RULES: SwiftRules = SwiftRules {
    day: DayRules {
        literals: &[
            DayRule::exact("today", 0),
            DayRule::exact("tomorrow", 1),
            DayRule::exact("tmr", 1),
            DayRule::exact("yesterday", -1),
            DayRule::suffix("day after tomorrow", 2),
            DayRule::suffix("day after tmr", 2),
            DayRule::suffix("day before yesterday", -2),
        ],
        fallback: Some(DayFallback {
            gate: PatternKey::RelativeDay,
            cues: CueRules {
                this: &[],
                ..PREFIX_CUES
            },
        }),
    },
    month: PREFIX_CUES,
    year: PREFIX_CUES,
    day_or_month: PREFIX_CUES,
    shapes: PeriodShapeRules {
        cardinal_last: &[Marker::Exact("last")],
        week: &[Marker::Suffix("week")],
        weekend: &[Marker::Suffix("weekend"), Marker::Suffix("week-end")],
        month: &[Marker::Suffix("month")],
        year: &[Marker::Suffix("year")],
        week_to_date: &[Marker::Exact("week to date")],
        month_to_date: &[Marker::Exact("month to date")],
        year_to_date: &[Marker::Exact("year to date"), Marker::Exact("ytd")],
        future: &[
            Marker::Prefix("this"),
            Marker::Prefix("next"),
            Marker::Prefix("upcoming"),
            Marker::Prefix("coming"),
        ],
    },
};

impl LocaleModule for English {
    const CULTURE: Culture = Culture::English;

    fn normalizer() -> Normalizer {
        Normalizer::case_only()
    }

    fn patterns() -> Vec<PatternDef> {
        PatternDef::from_table(PATTERNS)
    }

    fn required_patterns() -> &'static [PatternKey] {
        &[PatternKey::RelativeDay]
    }

    fn lexicon() -> &'static LexiconDef {
        &LEXICON
    }

    fn swift_rules() -> &'static SwiftRules {
        &RULES
    }
}
