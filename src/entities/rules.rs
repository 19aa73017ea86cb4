// Recognition rules for the entity extractor.
//
// Two kinds of rules live here: regex patterns for entities with rigid
// surface forms (dates, times, money, percentages), and word lists used to
// classify capitalized spans (organization suffixes, honorifics, a small
// place-name gazetteer, and determiners/pronouns that start sentences but
// never start an entity).

use regex_lite::Regex;

/// Compiled regex patterns, built once at startup.
pub struct PatternRules {
    pub money: Regex,
    pub percent: Regex,
    pub date: Regex,
    pub date_iso: Regex,
    pub time: Regex,
    pub year: Regex,
    pub capitalized: Regex,
}

const MONTHS: &str = "January|February|March|April|May|June|July|August|September|October|November|December";

impl PatternRules {
    pub fn compile() -> Result<Self, regex_lite::Error> {
        Ok(Self {
            money: Regex::new(
                r"\$[0-9][0-9,]*(?:\.[0-9]+)?(?: (?:thousand|million|billion|trillion))?",
            )?,
            percent: Regex::new(r"[0-9]+(?:\.[0-9]+)?(?: ?%| percent)")?,
            date: Regex::new(&format!(
                r"(?:{MONTHS}) [0-9]{{1,2}}(?:st|nd|rd|th)?,? [0-9]{{4}}|[0-9]{{1,2}} (?:{MONTHS}) [0-9]{{4}}"
            ))?,
            date_iso: Regex::new(r"\b[0-9]{4}-[0-9]{2}-[0-9]{2}\b")?,
            time: Regex::new(r"\b[0-9]{1,2}:[0-9]{2}(?: ?(?:am|pm|AM|PM))?\b")?,
            year: Regex::new(r"\b(?:19|20)[0-9]{2}\b")?,
            // Candidate span: a run of capitalized words. Apostrophes are
            // allowed inside a word, trailing periods after one ("Dr.",
            // "Inc.", sentence enders) keep the run going — segmentation
            // sorts out which periods actually end a sentence.
            capitalized: Regex::new(
                r"[A-Z][A-Za-z]*(?:'[A-Za-z]+)?\.?(?: [A-Z][A-Za-z]*(?:'[A-Za-z]+)?\.?)*",
            )?,
        })
    }
}

/// Words that open sentences or clauses in capitalized form without ever
/// being part of an entity. Stripped from the front of candidate spans.
const SKIP_WORDS: &[&str] = &[
    "A", "An", "The", "This", "That", "These", "Those", "It", "I", "We", "You", "He", "She",
    "They", "My", "Our", "Your", "His", "Her", "Their", "In", "On", "At", "If", "But", "And",
    "Or", "As", "By", "For", "To", "From", "With", "When", "While", "After", "Before", "Since",
    "However", "Although", "Because", "So", "Then", "There", "Here", "What", "Who", "Why",
    "How", "Yes", "No", "Not", "Is", "Are", "Was", "Were", "Be", "Do", "Does", "Did",
    "Later", "Earlier", "Today", "Yesterday", "Tomorrow", "Now", "Finally", "Meanwhile",
    "Once", "First", "Next", "Last", "Also", "Still", "Even", "Just", "Everyone", "Everything",
    "Nobody", "Someone", "Something",
];

const MONTH_WORDS: &[&str] = &[
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Corporate/institutional suffixes marking an ORG span.
const ORG_SUFFIXES: &[&str] = &[
    "Inc", "Corp", "Corporation", "Ltd", "LLC", "Co", "Company", "Group", "Bank", "University",
    "Institute", "College", "Foundation", "Association", "Agency", "Laboratories", "Labs",
    "Systems", "Technologies", "Software", "Industries", "Partners", "Holdings", "Ventures",
];

/// Titles that mark the following capitalized span as a PERSON.
const HONORIFICS: &[&str] = &[
    "Mr", "Mrs", "Ms", "Dr", "Prof", "Professor", "President", "Senator", "Governor", "Judge",
    "Captain", "General", "Sir", "Dame", "Lord", "Lady",
];

/// Small place-name gazetteer for GPE classification. Lowercased forms.
const GPE_GAZETTEER: &[&str] = &[
    // Countries
    "afghanistan", "argentina", "australia", "austria", "belgium", "brazil", "canada", "chile",
    "china", "colombia", "cuba", "denmark", "egypt", "england", "finland", "france", "germany",
    "greece", "india", "indonesia", "iran", "iraq", "ireland", "israel", "italy", "japan",
    "kenya", "mexico", "netherlands", "nigeria", "norway", "pakistan", "poland", "portugal",
    "russia", "scotland", "spain", "sweden", "switzerland", "thailand", "turkey", "ukraine",
    "vietnam", "wales", "united states", "united kingdom", "new zealand", "south korea",
    "north korea", "saudi arabia", "south africa", "sri lanka", "costa rica", "hong kong",
    // Cities
    "amsterdam", "athens", "bangkok", "barcelona", "beijing", "berlin", "boston", "cairo",
    "chicago", "dubai", "dublin", "geneva", "istanbul", "lagos", "lisbon", "london", "madrid",
    "melbourne", "miami", "moscow", "mumbai", "munich", "nairobi", "oslo", "paris", "prague",
    "rome", "seattle", "seoul", "shanghai", "singapore", "stockholm", "sydney", "tokyo",
    "toronto", "vienna", "warsaw", "zurich", "new york", "los angeles", "san francisco",
    "las vegas", "new delhi", "mexico city", "buenos aires", "cape town", "tel aviv",
    "washington",
];

pub fn is_skip_word(token: &str) -> bool {
    SKIP_WORDS.contains(&token) || MONTH_WORDS.contains(&token)
}

pub fn is_org_suffix(token: &str) -> bool {
    ORG_SUFFIXES.contains(&token)
}

pub fn is_honorific(token: &str) -> bool {
    let stripped = token.strip_suffix('.').unwrap_or(token);
    HONORIFICS.contains(&stripped)
}

pub fn is_gpe(span: &str) -> bool {
    GPE_GAZETTEER.contains(&span.to_lowercase().as_str())
}

/// All-caps tokens of modest length read as acronyms (NASA, IBM, UN).
pub fn is_acronym(token: &str) -> bool {
    (2..=6).contains(&token.len()) && token.chars().all(|c| c.is_ascii_uppercase())
}
