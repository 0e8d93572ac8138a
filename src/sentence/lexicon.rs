/*!
 * Built-in English lexicon for the part-of-speech tagger.
 *
 * Closed word classes are listed exhaustively. Open classes hold the
 * vocabulary that dominates TV dialogue; everything else falls through to
 * the suffix rules in the analyzer. Inflected forms are recognized by
 * stripping regular endings back to a listed base form.
 */

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use super::analyzer::PartOfSpeech;

/// Result of a lexicon lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme {
    /// The word has a single class
    Fixed(PartOfSpeech),
    /// The word is listed both as a noun and as a verb ("call", "love", "work")
    NounOrVerb,
}

static CLOSED_CLASSES: Lazy<HashMap<&'static str, PartOfSpeech>> = Lazy::new(|| {
    let mut map = HashMap::new();
    let groups: [(&[&str], PartOfSpeech); 8] = [
        (PRONOUNS, PartOfSpeech::Pronoun),
        (DETERMINERS, PartOfSpeech::Determiner),
        (PREPOSITIONS, PartOfSpeech::Preposition),
        (CONJUNCTIONS, PartOfSpeech::Conjunction),
        (AUXILIARIES, PartOfSpeech::Verb),
        (QUESTION_WORDS, PartOfSpeech::QuestionWord),
        (INTERJECTIONS, PartOfSpeech::Interjection),
        (NUMBER_WORDS, PartOfSpeech::Number),
    ];
    for (words, tag) in groups {
        for word in words {
            map.insert(*word, tag);
        }
    }
    map
});

static NOUN_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| NOUNS.iter().copied().collect());
static VERB_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| VERBS.iter().copied().collect());
static IRREGULAR_VERB_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| IRREGULAR_VERB_FORMS.iter().copied().collect());
static ADJECTIVE_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| ADJECTIVES.iter().copied().collect());
static ADVERB_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| ADVERBS.iter().copied().collect());
static MODAL_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| MODALS.iter().copied().collect());

/// Look up a lowercase word
pub fn lookup(word: &str) -> Option<Lexeme> {
    if let Some(tag) = CLOSED_CLASSES.get(word) {
        return Some(Lexeme::Fixed(*tag));
    }
    if ADVERB_SET.contains(word) {
        return Some(Lexeme::Fixed(PartOfSpeech::Adverb));
    }
    if ADJECTIVE_SET.contains(word) || is_inflected_adjective(word) {
        return Some(Lexeme::Fixed(PartOfSpeech::Adjective));
    }

    let noun = is_noun_form(word);
    let verb = is_verb_form(word);
    match (noun, verb) {
        (true, true) => Some(Lexeme::NounOrVerb),
        (true, false) => Some(Lexeme::Fixed(PartOfSpeech::Noun)),
        (false, true) => Some(Lexeme::Fixed(PartOfSpeech::Verb)),
        (false, false) => None,
    }
}

/// Whether the word forces a following verb ("can go", "to go", "don't go")
pub fn is_verb_trigger(word: &str) -> bool {
    MODAL_SET.contains(word) || matches!(word, "to" | "do" | "does" | "did" | "not" | "n't" | "let")
}

fn is_noun_form(word: &str) -> bool {
    if NOUN_SET.contains(word) {
        return true;
    }
    plural_stems(word).iter().any(|stem| NOUN_SET.contains(stem.as_str()))
}

fn is_verb_form(word: &str) -> bool {
    if VERB_SET.contains(word) || IRREGULAR_VERB_SET.contains(word) {
        return true;
    }
    verb_stems(word).iter().any(|stem| VERB_SET.contains(stem.as_str()))
}

fn is_inflected_adjective(word: &str) -> bool {
    comparative_stems(word).iter().any(|stem| ADJECTIVE_SET.contains(stem.as_str()))
}

fn plural_stems(word: &str) -> Vec<String> {
    let mut stems = Vec::new();
    if let Some(stem) = word.strip_suffix("ies") {
        stems.push(format!("{}y", stem));
    }
    if let Some(stem) = word.strip_suffix("es") {
        stems.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('s') {
        if !stem.ends_with('s') {
            stems.push(stem.to_string());
        }
    }
    stems
}

fn verb_stems(word: &str) -> Vec<String> {
    let mut stems = plural_stems(word);
    if let Some(stem) = word.strip_suffix("ied") {
        stems.push(format!("{}y", stem));
    }
    for suffix in ["ed", "ing"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.len() < 2 {
                continue;
            }
            stems.push(stem.to_string());
            stems.push(format!("{}e", stem));
            if let Some(undoubled) = undouble(stem) {
                stems.push(undoubled);
            }
        }
    }
    stems
}

fn comparative_stems(word: &str) -> Vec<String> {
    let mut stems = Vec::new();
    for suffix in ["er", "est"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.len() < 2 {
                continue;
            }
            stems.push(stem.to_string());
            stems.push(format!("{}e", stem));
            if let Some(base) = stem.strip_suffix('i') {
                stems.push(format!("{}y", base));
            }
            if let Some(undoubled) = undouble(stem) {
                stems.push(undoubled);
            }
        }
    }
    stems
}

/// "stopp" -> "stop", "bigg" -> "big"
fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    (last == before && !matches!(last, 'l' | 's' | 'e' | 'o')).then(|| stem[..stem.len() - last.len_utf8()].to_string())
}

const PRONOUNS: &[&str] = &[
    "i", "me", "myself", "you", "yourself", "yourselves", "he", "him", "himself", "she", "her",
    "herself", "it", "itself", "we", "us", "ourselves", "they", "them", "themselves", "mine",
    "yours", "hers", "ours", "theirs", "someone", "somebody", "something", "anyone", "anybody",
    "anything", "everyone", "everybody", "everything", "nobody", "nothing", "one", "y'all",
    "ya",
];

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "my", "your", "his", "its", "our",
    "their", "some", "any", "no", "every", "each", "another", "either", "neither", "such",
    "both", "all", "many", "much", "few", "several", "most", "more", "less", "whose",
];

const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "among", "around", "at", "before",
    "behind", "below", "beneath", "beside", "between", "beyond", "by", "despite", "during",
    "except", "for", "from", "in", "inside", "into", "near", "of", "off", "on", "onto", "out",
    "outside", "over", "past", "through", "throughout", "to", "toward", "towards", "under",
    "underneath", "upon", "with", "within", "without", "than", "via",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "but", "or", "nor", "yet", "because", "although", "though", "unless", "whereas",
    "whether", "if", "while", "until", "till", "cause", "'cause", "plus",
];

const MODALS: &[&str] = &[
    "can", "could", "will", "would", "shall", "should", "may", "might", "must", "ca", "wo",
    "'ll", "'d", "gotta", "gonna", "wanna",
];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "'m", "'re", "'s", "have", "has",
    "had", "having", "'ve", "do", "does", "did", "done", "doing", "can", "could", "will",
    "would", "shall", "should", "may", "might", "must", "ca", "wo", "'ll", "'d", "gotta",
    "gonna", "wanna", "ai",
];

const QUESTION_WORDS: &[&str] = &["what", "who", "whom", "where", "when", "why", "how", "which"];

const INTERJECTIONS: &[&str] = &[
    "oh", "hey", "hi", "hello", "yes", "yeah", "yep", "nope", "okay", "ok", "wow", "uh", "um",
    "huh", "hmm", "ah", "aw", "whoa", "bye", "goodbye", "thanks", "damn", "ugh", "oops", "ow",
    "shh", "mm",
];

const NUMBER_WORDS: &[&str] = &[
    "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven", "twelve",
    "twenty", "thirty", "forty", "fifty", "hundred", "thousand", "million", "billion",
];

const ADVERBS: &[&str] = &[
    "not", "n't", "never", "always", "very", "really", "just", "so", "too", "also", "here",
    "there", "now", "then", "again", "already", "still", "even", "ever", "maybe", "perhaps",
    "probably", "actually", "almost", "only", "quite", "rather", "soon", "later", "together",
    "away", "back", "up", "down", "well", "please", "exactly", "definitely", "anymore",
    "enough", "once", "twice", "sometimes", "often", "usually", "else", "ago", "instead",
    "anyway", "somewhere", "anywhere", "everywhere", "nowhere", "forever", "right", "fast",
    "hard", "straight", "alone", "upstairs", "downstairs", "ahead", "far", "abroad", "indeed",
    "sure", "sorta", "kinda",
];

const ADJECTIVES: &[&str] = &[
    "good", "bad", "great", "new", "old", "big", "small", "little", "long", "short", "high",
    "low", "young", "wrong", "happy", "sad", "nice", "fine", "beautiful", "pretty", "hot",
    "cold", "easy", "ready", "real", "true", "free", "safe", "dead", "alive", "sorry", "scared",
    "afraid", "tired", "hungry", "busy", "late", "early", "important", "different", "best",
    "better", "worse", "worst", "last", "next", "first", "whole", "crazy", "funny", "strange",
    "weird", "perfect", "amazing", "awesome", "serious", "quiet", "careful", "stupid", "smart",
    "strong", "weak", "sick", "full", "empty", "clear", "dark", "bright", "warm", "cool",
    "lucky", "proud", "angry", "mad", "glad", "calm", "brave", "kind", "wonderful", "terrible",
    "horrible", "awful", "favorite", "own", "other", "same", "special", "normal", "simple",
    "fun", "nervous", "honest", "fair", "rich", "poor", "heavy", "light", "deep", "huge",
    "tiny", "quick", "slow", "loud", "sweet", "cute", "lovely", "friendly", "lonely", "silly",
    "ugly", "likely", "deadly", "daily", "possible", "impossible", "worried", "upset", "fresh",
    "clean", "dirty", "wet", "dry", "sharp", "soft", "single", "entire", "main", "final",
    "dangerous", "bloody", "stuck", "famous",
];

const NOUNS: &[&str] = &[
    "time", "man", "men", "woman", "women", "person", "people", "thing", "life", "lives", "day",
    "way", "house", "home", "car", "dog", "cat", "baby", "kid", "child", "children", "family",
    "friend", "mom", "dad", "mother", "father", "brother", "sister", "wife", "husband", "boy",
    "girl", "guy", "job", "fire", "station", "truck", "hospital", "doctor", "nurse", "patient",
    "captain", "chief", "team", "night", "morning", "evening", "afternoon", "year", "week",
    "hour", "minute", "second", "money", "water", "door", "room", "phone", "name", "word",
    "story", "problem", "idea", "world", "city", "street", "school", "body", "head", "hand",
    "eye", "face", "heart", "blood", "place", "game", "book", "food", "party", "bed", "lunch",
    "dinner", "breakfast", "coffee", "news", "today", "tomorrow", "tonight", "yesterday", "god",
    "sir", "ma'am", "guys", "lady", "gentleman", "feet", "foot", "teeth", "tooth", "mind",
    "question", "answer", "point", "part", "case", "fact", "side", "lot", "bit", "end",
    "number", "office", "boss", "police", "cop", "officer", "gun", "town", "country", "war",
    "moment", "chance", "reason", "truth", "trouble", "road", "building", "floor", "window",
    "wall", "key", "bag", "box", "table", "chair", "shirt", "dress", "gift", "ring", "wedding",
    "meeting", "plan", "rest", "help", "call", "work", "love", "need", "look", "talk", "run",
    "play", "watch", "kill", "move", "change", "care", "hope", "fight", "kiss", "smile",
    "laugh", "walk", "turn", "drink", "dream", "fear", "rescue", "shift", "check", "promise",
    "lie", "cry", "sleep", "drive", "ride", "visit", "break", "start", "stop", "guess", "deal",
    "joke", "order", "trust", "doubt", "matter", "date", "paper", "letter", "hair", "air",
    "sky", "sun", "rain", "snow", "smoke", "engine", "ambulance", "medic", "partner", "crew",
    "unit", "victim", "scene", "accident", "emergency", "surgery", "son", "daughter", "uncle",
    "aunt", "cousin", "grandma", "grandpa", "boyfriend", "girlfriend", "neighbor", "stuff",
    "music", "song", "movie", "show", "picture", "camera", "computer", "email", "message",
    "bus", "train", "plane", "ship", "boat", "horse", "bird", "fish", "tree", "flower",
    "garden", "kitchen", "bathroom", "bedroom", "apartment", "hotel", "restaurant", "bar",
    "store", "shop", "market", "bank", "church", "court", "jail", "prison", "lawyer", "judge",
    "teacher", "student", "class", "lesson", "test", "exam", "season", "episode",
];

const VERBS: &[&str] = &[
    "go", "get", "know", "think", "come", "see", "want", "need", "tell", "say", "make", "take",
    "give", "find", "feel", "leave", "keep", "let", "put", "mean", "bring", "begin", "run",
    "hear", "hold", "stand", "understand", "lose", "pay", "meet", "sit", "speak", "eat",
    "drink", "drive", "write", "break", "buy", "send", "build", "fall", "forget", "sleep",
    "win", "wear", "hurt", "fight", "catch", "teach", "sing", "swim", "choose", "hide", "ride",
    "throw", "grow", "fly", "die", "live", "love", "like", "hate", "help", "call", "try", "ask",
    "work", "look", "wait", "stop", "start", "save", "kill", "believe", "remember", "happen",
    "change", "move", "open", "close", "listen", "talk", "play", "watch", "walk", "turn",
    "show", "hope", "trust", "worry", "promise", "stay", "seem", "become", "care", "miss",
    "marry", "cry", "laugh", "smile", "agree", "breathe", "push", "pull", "carry", "check",
    "answer", "kiss", "touch", "follow", "lie", "clean", "cook", "read", "learn", "study",
    "finish", "hurry", "wake", "rescue", "protect", "handle", "guess", "deal", "order", "doubt",
    "matter", "visit", "dream", "fear", "shift", "joke", "date", "face", "head", "hand", "end",
    "point", "test", "rest", "plan", "use", "wish", "thank", "sound", "smell", "taste",
    "decide", "explain", "imagine", "apologize", "forgive", "jump", "climb", "shoot", "fix",
    "lead", "sell", "steal", "suppose", "figure", "notice", "pick", "drop", "lift", "hug",
    "share", "return", "arrive", "enjoy", "fill", "cover", "treat",
];

const IRREGULAR_VERB_FORMS: &[&str] = &[
    "went", "gone", "got", "gotten", "knew", "known", "thought", "came", "saw", "seen", "told",
    "said", "made", "took", "taken", "gave", "given", "found", "felt", "left", "kept", "meant",
    "brought", "began", "begun", "ran", "heard", "held", "stood", "understood", "lost", "paid",
    "met", "sat", "spoke", "spoken", "ate", "eaten", "drank", "drunk", "drove", "driven",
    "wrote", "written", "broke", "broken", "bought", "sent", "built", "fell", "fallen",
    "forgot", "forgotten", "slept", "won", "wore", "worn", "fought", "caught", "taught", "sang",
    "sung", "swam", "chose", "chosen", "hid", "hidden", "rode", "ridden", "threw", "thrown",
    "grew", "grown", "flew", "flown", "became", "woke", "woken", "led", "sold", "stole",
    "stolen", "shot", "lay", "lain", "read",
];
