//! German (`de-de`).

use chronolex_core::{
    Culture, CueRules, DateUnit, DayRule, DayRules, LexiconDef, LocaleModule, Marker, Normalizer,
    PatternDef, PatternKey, PeriodShapeRules, Precedence, Season, SwiftRules,
};

pub struct German;

const PATTERNS: &[(PatternKey, &str)] = &[
    (
        PatternKey::NextPrefix,
        r"\b(n[äa]chste[nrms]?|kommende[nrms]?|folgende[nrms]?)\b",
    ),
    (
        PatternKey::PastPrefix,
        r"\b(letzte[nrms]?|vorige[nrms]?|vergangene[nrms]?|vorherige[nrms]?)\b",
    ),
    (
        PatternKey::ThisPrefix,
        r"\b(diese[nrms]?|heutige[nrms]?|aktuelle[nrms]?)\b",
    ),
    (
        PatternKey::SpecialDay,
        r"\b(heute|morgen|gestern|[üu]bermorgen|uebermorgen|vorgestern)\b",
    ),
    (
        PatternKey::WeekDay,
        r"\b(?P<weekday>montag|dienstag|mittwoch|donnerstag|freitag|samstag|sonnabend|sonntag|mo|di|mi|do|fr|sa|so)s?\b",
    ),
    (
        PatternKey::Month,
        r"\b(?P<month>januar|j[äa]nner|februar|m[äa]rz|maerz|april|mai|juni|juli|august|september|oktober|november|dezember|jan|feb|mär|apr|jun|jul|aug|sept?|okt|nov|dez)\b",
    ),
    (
        PatternKey::DateUnit,
        r"\b(?P<unit>jahrzehnte?|jahren|jahre?s?|monaten|monate?s?|wochen?|tagen|tage?s?)\b",
    ),
    (
        PatternKey::RelativeMonth,
        r"\b(?P<relmonth>(des\s+)?(n[äa]chsten|letzten|diesen|kommenden|vorigen)\s+monats?|(n[äa]chster|letzter|dieser)\s+monat)\b",
    ),
    (
        PatternKey::On,
        r"\b(am|an\s+dem)\s+(?P<day>3[01]|[12]\d|0?[1-9])\.",
    ),
    (PatternKey::Preposition, r"^(am|um|an|gegen)$"),
    (PatternKey::Connector, r"^(-|,|für|t|gegen)$"),
    (PatternKey::Ago, r"\b(vor|zuvor|davor)\b"),
    (
        PatternKey::Later,
        r"\b(sp[äa]ter|danach|ab\s+jetzt|von\s+jetzt\s+an)\b",
    ),
    (
        PatternKey::Now,
        r"\b(jetzt|sofort|gerade|momentan|zurzeit|k[üu]rzlich)\b",
    ),
    (PatternKey::Or, r"\b(oder)\b"),
    (PatternKey::Am, r"\b(vormittags?|morgens|fr[üu]h)\b"),
    (PatternKey::Pm, r"\b(nachmittags?|abends|nachts)\b"),
];

const fn ordinal_suffix(_day: u32) -> &'static str {
    "."
}

static LEXICON: LexiconDef = LexiconDef {
    day_of_week: &[
        ("sonntag", 0),
        ("montag", 1),
        ("dienstag", 2),
        ("mittwoch", 3),
        ("donnerstag", 4),
        ("freitag", 5),
        ("samstag", 6),
        ("sonnabend", 6),
        ("so", 0),
        ("mo", 1),
        ("di", 2),
        ("mi", 3),
        ("do", 4),
        ("fr", 5),
        ("sa", 6),
    ],
    month_of_year: &[
        ("januar", 1),
        ("jänner", 1),
        ("februar", 2),
        ("märz", 3),
        ("maerz", 3),
        ("april", 4),
        ("mai", 5),
        ("juni", 6),
        ("juli", 7),
        ("august", 8),
        ("september", 9),
        ("oktober", 10),
        ("november", 11),
        ("dezember", 12),
        ("jan", 1),
        ("feb", 2),
        ("mär", 3),
        ("apr", 4),
        ("jun", 6),
        ("jul", 7),
        ("aug", 8),
        ("sep", 9),
        ("sept", 9),
        ("okt", 10),
        ("nov", 11),
        ("dez", 12),
    ],
    cardinal: &[
        ("erste", 1),
        ("erster", 1),
        ("ersten", 1),
        ("zweite", 2),
        ("zweiter", 2),
        ("zweiten", 2),
        ("dritte", 3),
        ("dritter", 3),
        ("dritten", 3),
        ("vierte", 4),
        ("vierter", 4),
        ("vierten", 4),
        ("fünfte", 5),
        ("fünfter", 5),
        ("fünften", 5),
    ],
    day_of_month_words: &[],
    ordinal_suffix,
    unit: &[
        ("jahrzehnt", DateUnit::Decade),
        ("jahrzehnte", DateUnit::Decade),
        ("jahr", DateUnit::Year),
        ("jahre", DateUnit::Year),
        ("jahren", DateUnit::Year),
        ("monat", DateUnit::Month),
        ("monate", DateUnit::Month),
        ("monaten", DateUnit::Month),
        ("woche", DateUnit::Week),
        ("wochen", DateUnit::Week),
        ("tag", DateUnit::Day),
        ("tage", DateUnit::Day),
        ("tagen", DateUnit::Day),
    ],
    season: &[
        ("frühling", Season::Spring),
        ("frühjahr", Season::Spring),
        ("sommer", Season::Summer),
        ("herbst", Season::Fall),
        ("winter", Season::Winter),
    ],
};

const PREFIX_CUES: CueRules = CueRules {
    next: &[Marker::Pattern(PatternKey::NextPrefix)],
    past: &[Marker::Pattern(PatternKey::PastPrefix)],
    this: &[Marker::Pattern(PatternKey::ThisPrefix)],
    precedence: Precedence::PastWins,
};

static RULES: SwiftRules = SwiftRules {
    day: DayRules {
        literals: &[
            DayRule::exact("heute", 0),
            DayRule::exact("morgen", 1),
            DayRule::exact("gestern", -1),
            DayRule::suffix("übermorgen", 2),
            DayRule::suffix("uebermorgen", 2),
            DayRule::suffix("vorgestern", -2),
        ],
        fallback: None,
    },
    month: PREFIX_CUES,
    year: PREFIX_CUES,
    day_or_month: PREFIX_CUES,
    shapes: PeriodShapeRules {
        cardinal_last: &[
            Marker::Exact("letzte"),
            Marker::Exact("letzten"),
            Marker::Exact("letzter"),
            Marker::Exact("letztes"),
        ],
        week: &[Marker::Suffix("woche")],
        weekend: &[Marker::Suffix("wochenende")],
        month: &[Marker::Suffix("monat")],
        year: &[Marker::Suffix("jahr")],
        week_to_date: &[Marker::Exact("woche bis heute")],
        month_to_date: &[Marker::Exact("monat bis heute")],
        year_to_date: &[Marker::Exact("jahr bis heute")],
        future: &[Marker::Pattern(PatternKey::NextPrefix)],
    },
};

impl LocaleModule for German {
    const CULTURE: Culture = Culture::German;

    fn normalizer() -> Normalizer {
        Normalizer::case_only()
    }

    fn patterns() -> Vec<PatternDef> {
        PatternDef::from_table(PATTERNS)
    }

    fn required_patterns() -> &'static [PatternKey] {
        &[
            PatternKey::ThisPrefix,
            PatternKey::Or,
            PatternKey::Am,
            PatternKey::Pm,
        ]
    }

    fn lexicon() -> &'static LexiconDef {
        &LEXICON
    }

    fn swift_rules() -> &'static SwiftRules {
        &RULES
    }
}
