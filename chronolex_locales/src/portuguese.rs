//! Portuguese (`pt-br`).
//!
//! Input is folded to unaccented form before matching, so every pattern and
//! literal here is written without diacritics.

use chronolex_core::{
    Culture, CueRules, DateUnit, DayRule, DayRules, LexiconDef, LocaleModule, Marker, Normalizer,
    PatternDef, PatternKey, PeriodShapeRules, Precedence, Season, SwiftRules,
};

pub struct Portuguese;

const PATTERNS: &[(PatternKey, &str)] = &[
    (
        PatternKey::NextPrefix,
        r"\b(proxim[oa]s?|seguintes?|vindour[oa]s?|que\s+vem)\b",
    ),
    (
        PatternKey::PastPrefix,
        r"\b(ultim[oa]s?|passad[oa]s?|anterior(es)?)\b",
    ),
    (PatternKey::ThisPrefix, r"\b(d?est[ea]s?|d?ess[ea]s?|atual)\b"),
    (
        PatternKey::SpecialDay,
        r"\b((o\s+)?dia\s+(seguinte|anterior)|(depois\s+de\s+)?amanha|anteontem|ontem|hoje|(o\s+)?(ultimo|proximo)\s+dia)\b",
    ),
    (
        PatternKey::WeekDay,
        r"\b(?P<weekday>domingo|sabado|(segunda|terca|quarta|quinta|sexta)(-feira)?|seg|ter|qua|qui|sex|sab|dom)s?\b",
    ),
    (
        PatternKey::Month,
        r"\b(?P<month>janeiro|fevereiro|marco|abril|maio|junho|julho|agosto|setembro|outubro|novembro|dezembro|jan|fev|mar|abr|mai|jun|jul|ago|set|out|nov|dez)\b",
    ),
    (
        PatternKey::DateUnit,
        r"\b(?P<unit>decadas?|anos?|mes(es)?|semanas?|dias?)\b",
    ),
    (
        PatternKey::RelativeMonth,
        r"\b(?P<relmonth>(d?[oe]ste\s+)?mes\s+(que\s+vem|passado|seguinte|anterior)|(d?[oe]ste|d?esse)\s+mes|(proximo|ultimo)\s+mes)\b",
    ),
    (
        PatternKey::On,
        r"\b(n?o\s+)?dia\s+(?P<day>3[01]|[12]\d|0?[1-9])\b",
    ),
    (PatternKey::Preposition, r"^(as|a|ao|em|no|na|de|do|da)$"),
    (PatternKey::Connector, r"^(-|,|para|t|por\s+volta)$"),
    (PatternKey::Ago, r"\b(atras|ha)\b"),
    (
        PatternKey::Later,
        r"\b(depois|mais\s+tarde|a\s+partir\s+de\s+agora|daqui\s+a)\b",
    ),
    (
        PatternKey::Now,
        r"\b(agora|neste\s+momento|imediatamente|recentemente|anteriormente|o\s+mais\s+rapido\s+possivel)\b",
    ),
];

const fn ordinal_suffix(_day: u32) -> &'static str {
    "º"
}

static LEXICON: LexiconDef = LexiconDef {
    day_of_week: &[
        ("domingo", 0),
        ("segunda", 1),
        ("segunda-feira", 1),
        ("terca", 2),
        ("terca-feira", 2),
        ("quarta", 3),
        ("quarta-feira", 3),
        ("quinta", 4),
        ("quinta-feira", 4),
        ("sexta", 5),
        ("sexta-feira", 5),
        ("sabado", 6),
        ("dom", 0),
        ("seg", 1),
        ("ter", 2),
        ("qua", 3),
        ("qui", 4),
        ("sex", 5),
        ("sab", 6),
    ],
    month_of_year: &[
        ("janeiro", 1),
        ("fevereiro", 2),
        ("marco", 3),
        ("abril", 4),
        ("maio", 5),
        ("junho", 6),
        ("julho", 7),
        ("agosto", 8),
        ("setembro", 9),
        ("outubro", 10),
        ("novembro", 11),
        ("dezembro", 12),
        ("jan", 1),
        ("fev", 2),
        ("mar", 3),
        ("abr", 4),
        ("mai", 5),
        ("jun", 6),
        ("jul", 7),
        ("ago", 8),
        ("set", 9),
        ("out", 10),
        ("nov", 11),
        ("dez", 12),
    ],
    cardinal: &[
        ("primeiro", 1),
        ("primeira", 1),
        ("segundo", 2),
        ("segunda", 2),
        ("terceiro", 3),
        ("terceira", 3),
        ("quarto", 4),
        ("quarta", 4),
        ("quinto", 5),
        ("quinta", 5),
    ],
    day_of_month_words: &[("primeiro", 1)],
    ordinal_suffix,
    unit: &[
        ("decada", DateUnit::Decade),
        ("decadas", DateUnit::Decade),
        ("ano", DateUnit::Year),
        ("anos", DateUnit::Year),
        ("mes", DateUnit::Month),
        ("meses", DateUnit::Month),
        ("semana", DateUnit::Week),
        ("semanas", DateUnit::Week),
        ("dia", DateUnit::Day),
        ("dias", DateUnit::Day),
    ],
    season: &[
        ("primavera", Season::Spring),
        ("verao", Season::Summer),
        ("outono", Season::Fall),
        ("inverno", Season::Winter),
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
            DayRule::exact("hoje", 0),
            DayRule::exact("este dia", 0),
            DayRule::exact("esse dia", 0),
            DayRule::exact("o dia", 0),
            DayRule::exact("amanha", 1),
            DayRule::exact("de amanha", 1),
            DayRule::suffix("dia seguinte", 1),
            DayRule::suffix("o dia de amanha", 1),
            DayRule::suffix("proximo dia", 1),
            DayRule::exact("ontem", -1),
            DayRule::suffix("depois de amanha", 2),
            DayRule::suffix("anteontem", -2),
            DayRule::suffix("dia antes de ontem", -2),
            DayRule::suffix("ultimo dia", -1),
        ],
        fallback: None,
    },
    month: PREFIX_CUES,
    year: PREFIX_CUES,
    day_or_month: PREFIX_CUES,
    shapes: PeriodShapeRules {
        cardinal_last: &[Marker::Pattern(PatternKey::PastPrefix)],
        week: &[Marker::Suffix("semana")],
        weekend: &[
            Marker::Suffix("fim de semana"),
            Marker::Suffix("final de semana"),
        ],
        month: &[Marker::Suffix("mes")],
        year: &[Marker::Suffix("ano")],
        week_to_date: &[Marker::Exact("semana ate a data")],
        month_to_date: &[Marker::Exact("mes ate a data")],
        year_to_date: &[Marker::Exact("ano ate a data")],
        future: &[Marker::Pattern(PatternKey::NextPrefix)],
    },
};

impl LocaleModule for Portuguese {
    const CULTURE: Culture = Culture::Portuguese;

    fn normalizer() -> Normalizer {
        Normalizer::folding_diacritics()
    }

    fn patterns() -> Vec<PatternDef> {
        PatternDef::from_table(PATTERNS)
    }

    fn lexicon() -> &'static LexiconDef {
        &LEXICON
    }

    fn swift_rules() -> &'static SwiftRules {
        &RULES
    }
}
