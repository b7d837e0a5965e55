//! Built-in rule data.
//!
//! Groups are loaded irregulars first, then plural rules, singular rules and
//! uncountables. Within each rule list, entries run from general to specific:
//! the engine scans them back to front, so later entries win.

use crate::engine::Pluralizer;
use crate::rule::RuleError;

const IRREGULAR: &[(&str, &str)] = &[
    // Pronouns, determiners and a few verbs.
    ("I", "we"),
    ("me", "us"),
    ("he", "they"),
    ("she", "they"),
    ("them", "them"),
    ("myself", "ourselves"),
    ("yourself", "yourselves"),
    ("itself", "themselves"),
    ("herself", "themselves"),
    ("himself", "themselves"),
    ("themself", "themselves"),
    ("is", "are"),
    ("was", "were"),
    ("has", "have"),
    ("this", "these"),
    ("that", "those"),
    // Consonant + "o" taking "-oes".
    ("echo", "echoes"),
    ("dingo", "dingoes"),
    ("volcano", "volcanoes"),
    ("tornado", "tornadoes"),
    ("torpedo", "torpedoes"),
    // Latin "-us".
    ("genus", "genera"),
    ("viscus", "viscera"),
    // Greek "-ma".
    ("stigma", "stigmata"),
    ("stoma", "stomata"),
    ("dogma", "dogmata"),
    ("lemma", "lemmata"),
    ("schema", "schemata"),
    ("anathema", "anathemata"),
    // Misc.
    ("ox", "oxen"),
    ("axe", "axes"),
    ("die", "dice"),
    ("yes", "yeses"),
    ("foot", "feet"),
    ("eave", "eaves"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("quiz", "quizzes"),
    ("human", "humans"),
    ("proof", "proofs"),
    ("carve", "carves"),
    ("valve", "valves"),
    ("looey", "looies"),
    ("thief", "thieves"),
    ("groove", "grooves"),
    ("pickaxe", "pickaxes"),
    ("whiskey", "whiskies"),
    ("passerby", "passersby"),
];

const PLURAL: &[(&str, &str)] = &[
    ("(?i)s?$", "s"),
    ("(?i)[^[:ascii:]]$", "$0"),
    ("(?i)([^aeiou]ese)$", "$1"),
    ("(?i)(ax|test)is$", "$1es"),
    ("(?i)(alias|[^aou]us|t[lm]as|gas|ris)$", "$1es"),
    ("(?i)(e[mn]u)s?$", "$1s"),
    ("(?i)([^l]ias|[aeiou]las|[ejzr]as|[iu]am)$", "$1"),
    ("(?i)(alumn|syllab|vir|radi|nucle|fung|cact|stimul|termin|bacill|foc|uter|loc|strat)(?:us|i)$", "$1i"),
    ("(?i)(alumn|alg|vertebr)(?:a|ae)$", "$1ae"),
    ("(?i)(seraph|cherub)(?:im)?$", "$1im"),
    ("(?i)(her|at|gr)o$", "$1oes"),
    ("(?i)(agend|addend|millenni|dat|extrem|bacteri|desiderat|strat|candelabr|errat|ov|symposi|curricul|automat|quor)(?:a|um)$", "$1a"),
    ("(?i)(apheli|hyperbat|periheli|asyndet|noumen|phenomen|criteri|organ|prolegomen|hedr|automat)(?:a|on)$", "$1a"),
    ("(?i)sis$", "ses"),
    ("(?i)(?:(kni|wi|li)fe|(ar|l|ea|eo|oa|hoo)f)$", "$1$2ves"),
    ("(?i)([^aeiouy]|qu)y$", "$1ies"),
    ("(?i)([^ch][ieo][ln])ey$", "$1ies"),
    ("(?i)(x|ch|ss|sh|zz)$", "$1es"),
    ("(?i)(matr|cod|mur|sil|vert|ind|append)(?:ix|ex)$", "$1ices"),
    (r"(?i)\b((?:tit)?m|l)(?:ice|ouse)$", "$1ice"),
    ("(?i)(pe)(?:rson|ople)$", "$1ople"),
    ("(?i)(child)(?:ren)?$", "$1ren"),
    ("(?i)eaux$", "$0"),
    ("(?i)m[ae]n$", "men"),
    ("thou", "you"),
];

const SINGULAR: &[(&str, &str)] = &[
    ("(?i)s$", ""),
    ("(?i)(ss)$", "$1"),
    (r"(?i)(wi|kni|(?:after|half|high|low|mid|non|night|[^\w]|^)li)ves$", "$1fe"),
    ("(?i)(ar|(?:wo|[ae])l|[eo][ao])ves$", "$1f"),
    ("(?i)ies$", "y"),
    (r"(?i)\b([pl]|zomb|(?:neck|cross)?t|coll|faer|food|gen|goon|group|lass|talk|goal|cut)ies$", "$1ie"),
    (r"(?i)\b(mon|smil)ies$", "$1ey"),
    (r"(?i)\b((?:tit)?m|l)ice$", "$1ouse"),
    ("(?i)(seraph|cherub)im$", "$1"),
    ("(?i)(x|ch|ss|sh|zz|tto|go|cho|alias|[^aou]us|t[lm]as|gas|(?:her|at|gr)o|[aeiou]ris)(?:es)?$", "$1"),
    ("(?i)(analy|ba|diagno|parenthe|progno|synop|the|empha|cri|ne)(?:sis|ses)$", "$1sis"),
    ("(?i)(movie|twelve|abuse|e[mn]u)s$", "$1"),
    ("(?i)(test)(?:is|es)$", "$1is"),
    ("(?i)(alumn|syllab|vir|radi|nucle|fung|cact|stimul|termin|bacill|foc|uter|loc|strat)(?:us|i)$", "$1us"),
    ("(?i)(agend|addend|millenni|dat|extrem|bacteri|desiderat|strat|candelabr|errat|ov|symposi|curricul|quor)a$", "$1um"),
    ("(?i)(apheli|hyperbat|periheli|asyndet|noumen|phenomen|criteri|organ|prolegomen|hedr|automat)a$", "$1on"),
    ("(?i)(alumn|alg|vertebr)ae$", "$1a"),
    ("(?i)(cod|mur|sil|vert|ind)ices$", "$1ex"),
    ("(?i)(matr|append)ices$", "$1ix"),
    ("(?i)(pe)(rson|ople)$", "$1rson"),
    ("(?i)(child)ren$", "$1"),
    ("(?i)(eau)x?$", "$1"),
    ("(?i)men$", "man"),
];

const UNCOUNTABLE: &[&str] = &[
    "adulthood",
    "advice",
    "agenda",
    "aid",
    "aircraft",
    "alcohol",
    "ammo",
    "analytics",
    "anime",
    "athletics",
    "audio",
    "bison",
    "blood",
    "bream",
    "buffalo",
    "butter",
    "carp",
    "cash",
    "chassis",
    "chess",
    "clothing",
    "cod",
    "commerce",
    "cooperation",
    "corps",
    "debris",
    "diabetes",
    "digestion",
    "elk",
    "energy",
    "equipment",
    "excretion",
    "expertise",
    "firmware",
    "flounder",
    "fun",
    "gallows",
    "garbage",
    "graffiti",
    "hardware",
    "headquarters",
    "health",
    "herpes",
    "highjinks",
    "homework",
    "housework",
    "information",
    "jeans",
    "justice",
    "kudos",
    "labour",
    "literature",
    "machinery",
    "mackerel",
    "mail",
    "media",
    "mews",
    "moose",
    "music",
    "mud",
    "manga",
    "news",
    "only",
    "pike",
    "plankton",
    "pliers",
    "police",
    "pollution",
    "premises",
    "rain",
    "research",
    "rice",
    "salmon",
    "scissors",
    "series",
    "sewage",
    "shambles",
    "shrimp",
    "software",
    "species",
    "staff",
    "swine",
    "tennis",
    "traffic",
    "transportation",
    "trout",
    "tuna",
    "wealth",
    "welfare",
    "whiting",
    "wildebeest",
    "wildlife",
    "you",
    // Expressions: compound and suffix families ("reindeer", "blowfish", "smallpox").
    "(?i)[^aeiou]ese$",
    "(?i)deer$",
    "(?i)(fish)$",
    "(?i)measles$",
    "(?i)o[iu]s$",
    "(?i)pox$",
    "(?i)sheep$",
];

/// Register every built-in group on `pluralizer`.
pub(crate) fn load(pluralizer: &mut Pluralizer) -> Result<(), RuleError> {
    for (singular, plural) in IRREGULAR {
        pluralizer.add_irregular_rule(singular, plural);
    }
    for (pattern, replacement) in PLURAL {
        pluralizer.add_plural_rule(pattern, replacement)?;
    }
    for (pattern, replacement) in SINGULAR {
        pluralizer.add_singular_rule(pattern, replacement)?;
    }
    for word in UNCOUNTABLE {
        pluralizer.add_uncountable_rule(word)?;
    }
    Ok(())
}
