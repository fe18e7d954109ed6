//! English word tables shared by the tagger and the lemmatizer.
//!
//! The open-class lists favour everyday narrative vocabulary (household scenes,
//! family, news reporting) which is what transcripts and the reference corpus
//! are made of.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use super::pos::PosTag;

/// Function words with a fixed tag. Context-dependent words ("her", "that",
/// "there", particles) are resolved by the tagger.
const CLOSED_CLASS_WORDS: &[(&str, PosTag)] = &[
    // Determiners
    ("the", PosTag::DT),
    ("a", PosTag::DT),
    ("an", PosTag::DT),
    ("this", PosTag::DT),
    ("that", PosTag::DT),
    ("these", PosTag::DT),
    ("those", PosTag::DT),
    ("every", PosTag::DT),
    ("each", PosTag::DT),
    ("some", PosTag::DT),
    ("any", PosTag::DT),
    ("no", PosTag::DT),
    ("another", PosTag::DT),
    ("all", PosTag::DT),
    ("both", PosTag::DT),
    ("either", PosTag::DT),
    ("neither", PosTag::DT),
    ("such", PosTag::PDT),
    // Personal pronouns
    ("i", PosTag::PRP),
    ("you", PosTag::PRP),
    ("he", PosTag::PRP),
    ("she", PosTag::PRP),
    ("it", PosTag::PRP),
    ("we", PosTag::PRP),
    ("they", PosTag::PRP),
    ("me", PosTag::PRP),
    ("him", PosTag::PRP),
    ("us", PosTag::PRP),
    ("them", PosTag::PRP),
    ("myself", PosTag::PRP),
    ("yourself", PosTag::PRP),
    ("himself", PosTag::PRP),
    ("herself", PosTag::PRP),
    ("itself", PosTag::PRP),
    ("ourselves", PosTag::PRP),
    ("themselves", PosTag::PRP),
    // Possessive pronouns
    ("my", PosTag::PRPS),
    ("your", PosTag::PRPS),
    ("his", PosTag::PRPS),
    ("its", PosTag::PRPS),
    ("our", PosTag::PRPS),
    ("their", PosTag::PRPS),
    // Indefinite pronouns behave as nouns in Treebank output
    ("something", PosTag::NN),
    ("nothing", PosTag::NN),
    ("anything", PosTag::NN),
    ("everything", PosTag::NN),
    ("someone", PosTag::NN),
    ("somebody", PosTag::NN),
    ("anyone", PosTag::NN),
    ("anybody", PosTag::NN),
    ("everyone", PosTag::NN),
    ("everybody", PosTag::NN),
    ("nobody", PosTag::NN),
    // Wh-words
    ("who", PosTag::WP),
    ("whom", PosTag::WP),
    ("what", PosTag::WP),
    ("whose", PosTag::WPS),
    ("which", PosTag::WDT),
    ("whatever", PosTag::WDT),
    ("where", PosTag::WRB),
    ("when", PosTag::WRB),
    ("why", PosTag::WRB),
    ("how", PosTag::WRB),
    // Prepositions and subordinating conjunctions
    ("of", PosTag::IN),
    ("in", PosTag::IN),
    ("on", PosTag::IN),
    ("at", PosTag::IN),
    ("by", PosTag::IN),
    ("for", PosTag::IN),
    ("with", PosTag::IN),
    ("from", PosTag::IN),
    ("into", PosTag::IN),
    ("onto", PosTag::IN),
    ("over", PosTag::IN),
    ("under", PosTag::IN),
    ("about", PosTag::IN),
    ("above", PosTag::IN),
    ("below", PosTag::IN),
    ("behind", PosTag::IN),
    ("beside", PosTag::IN),
    ("between", PosTag::IN),
    ("through", PosTag::IN),
    ("during", PosTag::IN),
    ("after", PosTag::IN),
    ("before", PosTag::IN),
    ("against", PosTag::IN),
    ("near", PosTag::IN),
    ("because", PosTag::IN),
    ("since", PosTag::IN),
    ("while", PosTag::IN),
    ("if", PosTag::IN),
    ("as", PosTag::IN),
    ("than", PosTag::IN),
    ("like", PosTag::IN),
    ("toward", PosTag::IN),
    ("towards", PosTag::IN),
    ("upon", PosTag::IN),
    ("within", PosTag::IN),
    ("without", PosTag::IN),
    ("across", PosTag::IN),
    ("along", PosTag::IN),
    ("around", PosTag::IN),
    ("inside", PosTag::IN),
    ("outside", PosTag::IN),
    ("until", PosTag::IN),
    ("although", PosTag::IN),
    ("though", PosTag::IN),
    ("whether", PosTag::IN),
    ("unless", PosTag::IN),
    ("among", PosTag::IN),
    ("despite", PosTag::IN),
    ("per", PosTag::IN),
    // Coordinating conjunctions
    ("and", PosTag::CC),
    ("or", PosTag::CC),
    ("but", PosTag::CC),
    ("nor", PosTag::CC),
    ("&", PosTag::CC),
    // Modals
    ("can", PosTag::MD),
    ("could", PosTag::MD),
    ("will", PosTag::MD),
    ("would", PosTag::MD),
    ("shall", PosTag::MD),
    ("should", PosTag::MD),
    ("may", PosTag::MD),
    ("might", PosTag::MD),
    ("must", PosTag::MD),
    ("ca", PosTag::MD),
    ("wo", PosTag::MD),
    ("'ll", PosTag::MD),
    ("'d", PosTag::MD),
    ("to", PosTag::TO),
    // Number words
    ("one", PosTag::CD),
    ("two", PosTag::CD),
    ("three", PosTag::CD),
    ("four", PosTag::CD),
    ("five", PosTag::CD),
    ("six", PosTag::CD),
    ("seven", PosTag::CD),
    ("eight", PosTag::CD),
    ("nine", PosTag::CD),
    ("ten", PosTag::CD),
    ("hundred", PosTag::CD),
    ("thousand", PosTag::CD),
    ("million", PosTag::CD),
    // Interjections and fillers
    ("uh", PosTag::UH),
    ("um", PosTag::UH),
    ("oh", PosTag::UH),
    ("yeah", PosTag::UH),
    ("yes", PosTag::UH),
    ("okay", PosTag::UH),
    ("ok", PosTag::UH),
    ("hmm", PosTag::UH),
    ("er", PosTag::UH),
    ("ah", PosTag::UH),
    ("mm", PosTag::UH),
    ("huh", PosTag::UH),
    ("wow", PosTag::UH),
    // Negation and frequent adverbs
    ("not", PosTag::RB),
    ("n't", PosTag::RB),
];

/// Auxiliary verb forms: (form, base, tag)
const AUX_FORMS: &[(&str, &str, PosTag)] = &[
    ("be", "be", PosTag::VB),
    ("am", "be", PosTag::VBP),
    ("are", "be", PosTag::VBP),
    ("is", "be", PosTag::VBZ),
    ("was", "be", PosTag::VBD),
    ("were", "be", PosTag::VBD),
    ("been", "be", PosTag::VBN),
    ("being", "be", PosTag::VBG),
    ("'m", "be", PosTag::VBP),
    ("'re", "be", PosTag::VBP),
    ("have", "have", PosTag::VBP),
    ("has", "have", PosTag::VBZ),
    ("had", "have", PosTag::VBD),
    ("having", "have", PosTag::VBG),
    ("'ve", "have", PosTag::VBP),
    ("do", "do", PosTag::VBP),
    ("does", "do", PosTag::VBZ),
    ("did", "do", PosTag::VBD),
    ("done", "do", PosTag::VBN),
    ("doing", "do", PosTag::VBG),
];

/// Irregular verbs: (base, past, past participle)
const IRREGULAR_VERBS: &[(&str, &str, &str)] = &[
    ("become", "became", "become"),
    ("begin", "began", "begun"),
    ("break", "broke", "broken"),
    ("bring", "brought", "brought"),
    ("build", "built", "built"),
    ("buy", "bought", "bought"),
    ("catch", "caught", "caught"),
    ("choose", "chose", "chosen"),
    ("come", "came", "come"),
    ("draw", "drew", "drawn"),
    ("drink", "drank", "drunk"),
    ("drive", "drove", "driven"),
    ("eat", "ate", "eaten"),
    ("fall", "fell", "fallen"),
    ("feel", "felt", "felt"),
    ("fight", "fought", "fought"),
    ("find", "found", "found"),
    ("fly", "flew", "flown"),
    ("forget", "forgot", "forgotten"),
    ("get", "got", "gotten"),
    ("give", "gave", "given"),
    ("go", "went", "gone"),
    ("grow", "grew", "grown"),
    ("hang", "hung", "hung"),
    ("hear", "heard", "heard"),
    ("hit", "hit", "hit"),
    ("hold", "held", "held"),
    ("keep", "kept", "kept"),
    ("know", "knew", "known"),
    ("lead", "led", "led"),
    ("leave", "left", "left"),
    ("let", "let", "let"),
    ("lose", "lost", "lost"),
    ("make", "made", "made"),
    ("mean", "meant", "meant"),
    ("meet", "met", "met"),
    ("pay", "paid", "paid"),
    ("put", "put", "put"),
    ("read", "read", "read"),
    ("rise", "rose", "risen"),
    ("run", "ran", "run"),
    ("say", "said", "said"),
    ("see", "saw", "seen"),
    ("sell", "sold", "sold"),
    ("send", "sent", "sent"),
    ("set", "set", "set"),
    ("shake", "shook", "shaken"),
    ("show", "showed", "shown"),
    ("sit", "sat", "sat"),
    ("speak", "spoke", "spoken"),
    ("spend", "spent", "spent"),
    ("spill", "spilt", "spilt"),
    ("stand", "stood", "stood"),
    ("steal", "stole", "stolen"),
    ("take", "took", "taken"),
    ("teach", "taught", "taught"),
    ("tell", "told", "told"),
    ("think", "thought", "thought"),
    ("throw", "threw", "thrown"),
    ("understand", "understood", "understood"),
    ("wear", "wore", "worn"),
    ("win", "won", "won"),
    ("write", "wrote", "written"),
];

/// Irregular plurals: (plural, singular)
const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "person"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("lives", "life"),
    ("leaves", "leaf"),
    ("shelves", "shelf"),
    ("halves", "half"),
    ("loaves", "loaf"),
    ("thieves", "thief"),
];

const NOUN_WORDS: &[&str] = &[
    // Picture-description scene
    "cookie", "jar", "stool", "sink", "kitchen", "window", "curtain", "mother", "woman", "lady",
    "girl", "daughter", "sister", "boy", "son", "child", "kid", "brother", "dish", "plate", "cup",
    "water", "faucet", "counter", "cabinet", "floor", "picture", "lid", "shelf", "cupboard",
    "door", "apron", "shoe", "dress", "hand", "arm", "foot", "leg", "head", "face", "garden",
    "yard", "tree", "bush", "grass", "path", "house", "wall", "towel", "cloth", "bowl", "top",
    "side", "drape", "mess", "puddle", "tap", "dishcloth", "family", "lawn", "outside", "corner",
    "man", "person", "thing", "anybody", "tile", "sill", "drawer", "knob", "handle",
    // General vocabulary
    "time", "day", "year", "week", "month", "hour", "minute", "moment", "night", "morning",
    "evening", "afternoon", "way", "world", "life", "part", "place", "case", "point", "home",
    "room", "area", "money", "story", "fact", "lot", "right", "study", "book", "eye", "job",
    "word", "business", "issue", "kind", "service", "friend", "father", "power", "game", "line",
    "end", "member", "law", "car", "city", "community", "name", "team", "idea", "body",
    "information", "back", "parent", "level", "office", "health", "art", "war", "history",
    "party", "result", "change", "reason", "research", "air", "teacher", "force", "education",
    "state", "county", "court", "jury", "election", "official", "police", "report", "school",
    "bill", "tax", "plan", "council", "meeting", "board", "policy", "vote", "campaign", "budget",
    "department", "mayor", "governor", "senator", "legislature", "dog", "cat", "food", "problem",
    "question", "government", "number", "company", "system", "program", "group", "country",
    "hospital", "doctor", "patient", "nurse", "church", "street", "road", "town", "village",
    "university", "student", "class", "season", "player", "coach", "fan", "stadium", "crowd",
    "statement", "decision", "proposal", "committee", "investigation", "charge", "trial",
    "attorney", "judge", "witness", "session", "action", "week", "weekend", "club", "dinner",
    "music", "show", "audience", "stage", "ball", "field", "price", "cost", "market", "store",
    "bank", "loan", "fund", "plant", "worker", "union", "strike", "contract", "industry", "farm",
    "farmer", "land", "property", "building", "project", "bridge", "highway", "traffic",
    "accident", "fire", "rain", "weather", "sun", "sky", "light", "table", "chair", "bed",
    "clock", "phone", "letter", "paper", "newspaper", "television", "radio", "voice", "sound",
    "noise", "baby", "husband", "wife", "boyfriend", "girlfriend", "neighbor", "guest", "visitor",
    "cookie", "cake", "bread", "milk", "coffee", "tea", "sugar", "spoon", "fork", "knife", "pan",
    "pot", "stove", "oven", "refrigerator", "box", "bag", "basket", "bottle", "glass", "step",
    "ladder", "chance", "trouble", "attention", "danger", "accident", "fall", "spill", "wash",
    "run", "stand", "hold", "look", "turn", "start", "stop", "walk", "talk", "drop", "tip",
    "help", "work", "play", "cook", "support", "increase", "need", "use", "call", "rate", "test",
    "leader", "president", "secretary", "chairman", "director", "manager", "member", "citizen",
    "voter", "resident", "owner", "driver", "officer", "soldier", "army", "nation", "peace",
    "treaty", "agreement", "relation", "conference", "speech", "interview", "comment", "debate",
];

const VERB_WORDS: &[&str] = &[
    // Picture-description scene
    "look", "wash", "dry", "fall", "take", "steal", "reach", "spill", "overflow", "run", "stand",
    "hold", "ask", "want", "try", "get", "climb", "tip", "drop", "watch", "notice", "happen",
    "help", "work", "play", "laugh", "point", "hand", "give", "put", "open", "close", "turn",
    "stop", "start", "walk", "talk", "say", "tell", "think", "know", "like", "seem", "go", "come",
    "make", "use", "call", "need", "feel", "become", "leave", "keep", "let", "begin", "show",
    "hear", "move", "live", "believe", "bring", "write", "sit", "lose", "include", "continue",
    "set", "learn", "change", "lead", "understand", "follow", "create", "speak", "read", "allow",
    "add", "spend", "grow", "offer", "remember", "love", "consider", "appear", "buy", "wait",
    "serve", "die", "send", "expect", "build", "stay", "cut", "kill", "remain", "suggest",
    "raise", "pass", "sell", "require", "report", "decide", "pull", "eat", "drink", "cook",
    "clean", "wipe", "splash", "drip", "flood", "slip", "tumble", "grab", "catch", "shout",
    "whisper", "sink", "mention", "describe", "guess", "mean", "wonder", "fill", "pour", "lean",
    "wobble", "tilt", "sneak", "win", "meet", "pay", "plan", "vote", "announce", "approve",
    "claim", "admit", "deny", "agree", "receive", "return", "see", "break", "choose", "draw",
    "drive", "fight", "find", "fly", "forget", "hang", "hit", "rise", "shake", "teach", "throw",
    "wear", "smile", "cry", "yell", "jump", "hurt", "worry", "care", "ignore", "stare",
    "daydream", "dream", "support", "increase", "test", "rate", "elect", "charge", "oppose",
    "propose", "discuss", "explain", "state", "order", "visit", "attend", "join", "prepare",
    "finish", "complete", "provide", "produce", "protect", "save", "spill", "empty",
];

const ADJECTIVE_WORDS: &[&str] = &[
    "happy", "sad", "big", "small", "little", "large", "tall", "short", "long", "old", "young",
    "new", "good", "bad", "great", "high", "low", "full", "empty", "wet", "dry", "clean", "dirty",
    "open", "closed", "hot", "cold", "warm", "nice", "pretty", "busy", "quiet", "loud", "careful",
    "careless", "unaware", "oblivious", "unconcerned", "indifferent", "dangerous", "safe",
    "funny", "silly", "naughty", "upset", "afraid", "sure", "certain", "able", "ready", "same",
    "different", "other", "whole", "own", "next", "last", "first", "second", "third", "only",
    "main", "real", "true", "false", "free", "easy", "hard", "difficult", "important", "public",
    "private", "local", "national", "federal", "political", "economic", "social", "special",
    "major", "minor", "general", "recent", "former", "present", "possible", "likely", "final",
    "early", "late", "available", "strong", "weak", "poor", "rich", "fine", "black", "white",
    "red", "blue", "green", "yellow", "brown", "dark", "bright", "heavy", "light", "wide",
    "narrow", "deep", "shallow", "slippery", "tired", "worried", "surprised", "interested",
    "excited", "scared", "broken", "missing", "top", "slow", "wooden", "several",
    "many", "much", "few", "more", "most", "less", "least", "enough", "various", "certain",
    "official", "annual", "democratic", "republican", "legal", "criminal", "foreign", "domestic",
];

const COMPARATIVE_ADJECTIVES: &[(&str, PosTag)] = &[
    ("better", PosTag::JJR),
    ("worse", PosTag::JJR),
    ("bigger", PosTag::JJR),
    ("smaller", PosTag::JJR),
    ("taller", PosTag::JJR),
    ("older", PosTag::JJR),
    ("younger", PosTag::JJR),
    ("larger", PosTag::JJR),
    ("higher", PosTag::JJR),
    ("lower", PosTag::JJR),
    ("greater", PosTag::JJR),
    ("best", PosTag::JJS),
    ("worst", PosTag::JJS),
    ("biggest", PosTag::JJS),
    ("largest", PosTag::JJS),
    ("oldest", PosTag::JJS),
    ("youngest", PosTag::JJS),
    ("highest", PosTag::JJS),
    ("greatest", PosTag::JJS),
];

const ADVERB_WORDS: &[&str] = &[
    "very", "too", "also", "just", "now", "then", "here", "so", "still", "even", "never",
    "always", "really", "quite", "again", "almost", "already", "maybe", "perhaps", "away",
    "back", "together", "soon", "once", "twice", "often", "sometimes", "ever", "yet", "else",
    "instead", "anyway", "however", "rather", "fast", "well", "far", "later", "today",
    "tomorrow", "yesterday", "tonight", "ago", "everywhere", "somewhere", "anywhere", "nowhere",
    "apparently", "probably", "certainly", "actually", "meanwhile", "otherwise",
];

/// Particles that follow verbs ("pick up", "fall down")
const PARTICLES: &[&str] = &["up", "down", "out", "off", "over"];

static CLOSED_CLASS: LazyLock<HashMap<&'static str, PosTag>> =
    LazyLock::new(|| CLOSED_CLASS_WORDS.iter().copied().collect());

static AUX: LazyLock<HashMap<&'static str, (&'static str, PosTag)>> = LazyLock::new(|| {
    AUX_FORMS
        .iter()
        .map(|&(form, base, tag)| (form, (base, tag)))
        .collect()
});

static NOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    NOUN_WORDS
        .iter()
        .copied()
        .chain(IRREGULAR_NOUNS.iter().map(|&(_, singular)| singular))
        .collect()
});

static VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    VERB_WORDS
        .iter()
        .copied()
        .chain(IRREGULAR_VERBS.iter().map(|&(base, _, _)| base))
        .chain(["be", "have", "do"])
        .collect()
});

static ADJECTIVES: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ADJECTIVE_WORDS.iter().copied().collect());

static GRADED_ADJECTIVES: LazyLock<HashMap<&'static str, PosTag>> =
    LazyLock::new(|| COMPARATIVE_ADJECTIVES.iter().copied().collect());

static ADVERBS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ADVERB_WORDS.iter().copied().collect());

/// Inflected form of an irregular verb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IrregularForm {
    pub base: &'static str,
    pub is_past: bool,
    pub is_participle: bool,
}

/// Fixed tag of a function word (input must be lowercase)
pub fn closed_class(word: &str) -> Option<PosTag> {
    CLOSED_CLASS.get(word).copied()
}

/// Base form and tag of a be/have/do form
pub fn auxiliary(word: &str) -> Option<(&'static str, PosTag)> {
    AUX.get(word).copied()
}

/// Past or participle form of an irregular verb; base forms return `None`.
pub fn irregular_verb(word: &str) -> Option<IrregularForm> {
    IRREGULAR_VERBS
        .iter()
        .find(|&&(base, past, participle)| word != base && (word == past || word == participle))
        .map(|&(base, past, participle)| IrregularForm {
            base,
            is_past: word == past,
            is_participle: word == participle,
        })
}

/// Singular of an irregular plural
pub fn irregular_plural(word: &str) -> Option<&'static str> {
    IRREGULAR_NOUNS
        .iter()
        .find(|&&(plural, _)| plural == word)
        .map(|&(_, singular)| singular)
}

pub fn is_noun(word: &str) -> bool {
    NOUNS.contains(word)
}

pub fn is_verb(word: &str) -> bool {
    VERBS.contains(word)
}

pub fn is_adjective(word: &str) -> bool {
    ADJECTIVES.contains(word)
}

/// JJR / JJS for listed comparatives and superlatives
pub fn graded_adjective(word: &str) -> Option<PosTag> {
    GRADED_ADJECTIVES.get(word).copied()
}

pub fn is_adverb(word: &str) -> bool {
    ADVERBS.contains(word)
}

pub fn is_particle(word: &str) -> bool {
    PARTICLES.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irregular_verb_forms() {
        let took = irregular_verb("took").unwrap();
        assert_eq!(took.base, "take");
        assert!(took.is_past && !took.is_participle);

        let made = irregular_verb("made").unwrap();
        assert!(made.is_past && made.is_participle);

        // Base forms are not inflections.
        assert!(irregular_verb("run").is_none());
        assert!(irregular_verb("put").is_none());
    }

    #[test]
    fn test_irregular_plural_singulars_are_nouns() {
        assert_eq!(irregular_plural("children"), Some("child"));
        assert!(is_noun("child"));
        assert!(is_noun("person"));
    }

    #[test]
    fn test_closed_class_lookup() {
        assert_eq!(closed_class("the"), Some(PosTag::DT));
        assert_eq!(closed_class("their"), Some(PosTag::PRPS));
        assert_eq!(closed_class("cookie"), None);
    }

    #[test]
    fn test_auxiliaries() {
        assert_eq!(auxiliary("was"), Some(("be", PosTag::VBD)));
        assert_eq!(auxiliary("has"), Some(("have", PosTag::VBZ)));
    }
}
