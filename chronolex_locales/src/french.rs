//! French (`fr-fr`).
//!
//! Accents are significant after normalization, so rule literals list the
//! accented and unaccented spellings side by side. Relative tense sits at the
//! end of the phrase ("la semaine prochaine"), so the date-period families
//! are keyed on suffixes, and a past marker beats a next marker.

use chronolex_core::{
    Culture, CueRules, DateUnit, DayRule, DayRules, LexiconDef, LocaleModule, Marker, Normalizer,
    PatternDef, PatternKey, PeriodShapeRules, Precedence, Season, SwiftRules,
};

pub struct French;

const PATTERNS: &[(PatternKey, &str)] = &[
    (
        PatternKey::NextPrefix,
        r"\b(prochaine?s?|suivante?s?|[àa]\s+venir)\b",
    ),
    (
        PatternKey::PastPrefix,
        r"\b(derni[eè]re?s?|pr[eé]c[eé]dente?s?|pass[eé]e?s?)\b",
    ),
    (PatternKey::ThisPrefix, r"\b(ce|cet|cette|ces)\b"),
    (
        PatternKey::Relative,
        r"\b(prochaine?s?|suivante?s?|derni[eè]re?s?|pass[eé]e?s?|ce|cet|cette|ces)\b",
    ),
    (
        PatternKey::SpecialDay,
        r"\b(aujourd'hui|auj|demain|hier|apr[eè]s[\s-]demain|avant[\s-]hier|lendemain|veille)\b",
    ),
    (
        PatternKey::WeekDay,
        r"\b(?P<weekday>lundi|mardi|mercredi|jeudi|vendredi|samedi|dimanche|lun|mar|mer|jeu|ven|sam|dim)\b",
    ),
    (
        PatternKey::Month,
        r"\b(?P<month>janvier|f[eé]vrier|mars|avril|mai|juin|juillet|ao[uû]t|septembre|octobre|novembre|d[eé]cembre|janv|f[eé]vr|avr|juil|sept|oct|nov|d[eé]c)\b",
    ),
    (
        PatternKey::DateUnit,
        r"\b(?P<unit>d[eé]cennies?|ann[eé]es?|ans?|mois|semaines?|jours?|journ[eé]es?)\b",
    ),
    (
        PatternKey::RelativeMonth,
        r"\b(?P<relmonth>(le\s+)?mois\s+(prochain|dernier|suivant|pr[eé]c[eé]dent)|ce\s+mois(-ci)?)\b",
    ),
    (
        PatternKey::On,
        r"\ble\s+(?P<day>(3[01]|[12]\d|0?[1-9])(er|e)?)\b",
    ),
    (PatternKey::Preposition, r"^(à|a|de|du|le|la)$"),
    (PatternKey::Connector, r"^(-|,|pour|t|vers)$"),
    (PatternKey::Ago, r"\b(il\s+y\s+a|depuis)\b"),
    (
        PatternKey::Later,
        r"\b(plus\s+tard|[àa]\s+partir\s+de\s+maintenant|dans)\b",
    ),
    (
        PatternKey::Now,
        r"\b(maintenant|tout\s+de\s+suite|actuellement|aussit[oô]t\s+que\s+possible|r[eé]cemment|auparavant)\b",
    ),
    (
        PatternKey::FutureSuffix,
        r"\b(dans\s+le\s+futur|[àa]\s+venir|prochainement)\b",
    ),
];

const fn ordinal_suffix(day: u32) -> &'static str {
    if day == 1 { "er" } else { "e" }
}

static LEXICON: LexiconDef = LexiconDef {
    day_of_week: &[
        ("dimanche", 0),
        ("lundi", 1),
        ("mardi", 2),
        ("mercredi", 3),
        ("jeudi", 4),
        ("vendredi", 5),
        ("samedi", 6),
        ("dim", 0),
        ("lun", 1),
        ("mar", 2),
        ("mer", 3),
        ("jeu", 4),
        ("ven", 5),
        ("sam", 6),
    ],
    month_of_year: &[
        ("janvier", 1),
        ("février", 2),
        ("fevrier", 2),
        ("mars", 3),
        ("avril", 4),
        ("mai", 5),
        ("juin", 6),
        ("juillet", 7),
        ("août", 8),
        ("aout", 8),
        ("septembre", 9),
        ("octobre", 10),
        ("novembre", 11),
        ("décembre", 12),
        ("decembre", 12),
        ("janv", 1),
        ("févr", 2),
        ("fevr", 2),
        ("avr", 4),
        ("juil", 7),
        ("sept", 9),
        ("oct", 10),
        ("nov", 11),
        ("déc", 12),
        ("dec", 12),
    ],
    cardinal: &[
        ("premier", 1),
        ("première", 1),
        ("premiere", 1),
        ("deuxième", 2),
        ("deuxieme", 2),
        ("second", 2),
        ("seconde", 2),
        ("troisième", 3),
        ("troisieme", 3),
        ("quatrième", 4),
        ("quatrieme", 4),
        ("cinquième", 5),
        ("cinquieme", 5),
    ],
    day_of_month_words: &[("premier", 1)],
    ordinal_suffix,
    unit: &[
        ("décennie", DateUnit::Decade),
        ("décennies", DateUnit::Decade),
        ("decennie", DateUnit::Decade),
        ("decennies", DateUnit::Decade),
        ("année", DateUnit::Year),
        ("années", DateUnit::Year),
        ("annee", DateUnit::Year),
        ("annees", DateUnit::Year),
        ("an", DateUnit::Year),
        ("ans", DateUnit::Year),
        ("mois", DateUnit::Month),
        ("semaine", DateUnit::Week),
        ("semaines", DateUnit::Week),
        ("jour", DateUnit::Day),
        ("jours", DateUnit::Day),
        ("journée", DateUnit::Day),
        ("journee", DateUnit::Day),
    ],
    season: &[
        ("printemps", Season::Spring),
        ("été", Season::Summer),
        ("ete", Season::Summer),
        ("automne", Season::Fall),
        ("hiver", Season::Winter),
    ],
};

const NEXT_SUFFIXES: &[Marker] = &[Marker::Suffix("prochain"), Marker::Suffix("prochaine")];

const PAST_SUFFIXES: &[Marker] = &[
    Marker::Suffix("dernière"),
    Marker::Suffix("dernières"),
    Marker::Suffix("derniere"),
    Marker::Suffix("dernieres"),
];

static RULES: SwiftRules = SwiftRules {
    day: DayRules {
        literals: &[
            DayRule::exact("aujourd'hui", 0),
            DayRule::exact("auj", 0),
            DayRule::exact("ce jour", 0),
            DayRule::exact("demain", 1),
            DayRule::exact("lendemain", 1),
            DayRule::exact("le lendemain", 1),
            DayRule::exact("hier", -1),
            DayRule::exact("la veille", -1),
            DayRule::suffix("après-demain", 2),
            DayRule::suffix("après demain", 2),
            DayRule::suffix("apres-demain", 2),
            DayRule::suffix("apres demain", 2),
            DayRule::suffix("avant-hier", -2),
            DayRule::suffix("avant hier", -2),
            DayRule::suffix("jour suivant", 1),
            DayRule::suffix("jour précédent", -1),
            DayRule::suffix("jour precedent", -1),
        ],
        fallback: None,
    },
    month: CueRules {
        next: &[Marker::Pattern(PatternKey::NextPrefix)],
        past: &[Marker::Pattern(PatternKey::PastPrefix)],
        this: &[Marker::Pattern(PatternKey::ThisPrefix)],
        precedence: Precedence::PastWins,
    },
    year: CueRules {
        next: NEXT_SUFFIXES,
        past: &[
            Marker::Suffix("dernières"),
            Marker::Suffix("dernière"),
            Marker::Suffix("dernieres"),
            Marker::Suffix("derniere"),
            Marker::Suffix("dernier"),
        ],
        this: &[Marker::Prefix("cette")],
        precedence: Precedence::PastThenThis,
    },
    day_or_month: CueRules {
        next: NEXT_SUFFIXES,
        past: PAST_SUFFIXES,
        this: &[],
        precedence: Precedence::PastWins,
    },
    shapes: PeriodShapeRules {
        cardinal_last: &[
            Marker::Exact("dernières"),
            Marker::Exact("dernière"),
            Marker::Exact("dernieres"),
            Marker::Exact("derniere"),
            Marker::Exact("dernier"),
        ],
        week: &[Marker::Suffix("semaine")],
        weekend: &[
            Marker::Suffix("fin de semaine"),
            Marker::Suffix("le weekend"),
            Marker::Suffix("le week-end"),
        ],
        month: &[Marker::Suffix("mois")],
        year: &[
            Marker::Suffix("années"),
            Marker::Suffix("ans"),
            Marker::Suffix("l'annees"),
            Marker::Suffix("l'annee"),
            Marker::Suffix("l'année"),
        ],
        week_to_date: &[Marker::Exact("semaine à ce jour")],
        month_to_date: &[Marker::Exact("mois à ce jour")],
        year_to_date: &[
            Marker::Exact("année à ce jour"),
            Marker::Exact("an à ce jour"),
        ],
        future: &[
            Marker::Prefix("cette"),
            Marker::Suffix("prochaine"),
            Marker::Suffix("prochain"),
        ],
    },
};

impl LocaleModule for French {
    const CULTURE: Culture = Culture::French;

    fn normalizer() -> Normalizer {
        Normalizer::case_only()
    }

    fn patterns() -> Vec<PatternDef> {
        PatternDef::from_table(PATTERNS)
    }

    fn required_patterns() -> &'static [PatternKey] {
        &[
            PatternKey::ThisPrefix,
            PatternKey::Relative,
            PatternKey::FutureSuffix,
        ]
    }

    fn lexicon() -> &'static LexiconDef {
        &LEXICON
    }

    fn swift_rules() -> &'static SwiftRules {
        &RULES
    }
}
