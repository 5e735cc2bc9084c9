// --- File: src/core/tables.rs
//! Static romanization tables: vowels, consonants, matras and the
//! digit/punctuation specials.

/// Explicit vowel suppression mark (्).
pub const HALANTA: &str = "\u{094d}";

/// Longest romanized key in any table, in characters.
pub const MAX_KEY_LEN: usize = 3;

/// Standalone vowel glyph for a romanized vowel.
pub fn vowel(s: &str) -> Option<&'static str> {
    match s {
        "a" => Some("अ"), "aa" => Some("आ"), "i" => Some("इ"),
        "ii" => Some("ई"), "u" => Some("उ"), "uu" => Some("ऊ"),
        "e" => Some("ए"), "ai" => Some("ऐ"), "o" => Some("ओ"),
        "au" => Some("औ"), "ri" => Some("ऋ"), "rri" => Some("ॠ"),
        _ => None,
    }
}

/// Combining mark written after a consonant. The inherent `a` has no mark.
pub fn vowel_modifier(s: &str) -> Option<&'static str> {
    match s {
        "a" => Some(""), "aa" => Some("ा"), "i" => Some("ि"),
        "ii" => Some("ी"), "u" => Some("ु"), "uu" => Some("ू"),
        "e" => Some("े"), "ai" => Some("ै"), "o" => Some("ो"),
        "au" => Some("ौ"), "ri" => Some("ृ"), "rri" => Some("ॄ"),
        _ => None,
    }
}

/// Base consonant glyph, carrying the inherent `a` until modified.
pub fn consonant(s: &str) -> Option<&'static str> {
    match s {
        "k" => Some("क"), "kh" => Some("ख"), "g" => Some("ग"),
        "gh" => Some("घ"), "ng" => Some("ङ"),
        "ch" => Some("च"), "chh" => Some("छ"), "j" => Some("ज"),
        "jh" => Some("झ"), "ny" => Some("ञ"),
        "t" => Some("त"), "th" => Some("थ"), "d" => Some("द"),
        "dh" => Some("ध"), "n" => Some("न"),
        "p" => Some("प"), "ph" => Some("फ"), "b" => Some("ब"),
        "bh" => Some("भ"), "m" => Some("म"),
        "y" => Some("य"), "r" => Some("र"), "l" => Some("ल"),
        "w" => Some("व"), "v" => Some("व"),
        "sh" => Some("श"), "s" => Some("स"), "h" => Some("ह"),
        "ksh" => Some("क्ष"), "tr" => Some("त्र"), "gy" => Some("ज्ञ"),
        _ => None,
    }
}

/// Devanagari digits, danda punctuation and the typed halant.
pub fn special(s: &str) -> Option<&'static str> {
    match s {
        "0" => Some("०"), "1" => Some("१"), "2" => Some("२"),
        "3" => Some("३"), "4" => Some("४"), "5" => Some("५"),
        "6" => Some("६"), "7" => Some("७"), "8" => Some("८"),
        "9" => Some("९"),
        "." => Some("।"), ".." => Some("॥"),
        "~" => Some(HALANTA),
        _ => None,
    }
}

/// Letter pairs typical of romanized Nepali, used by the classifier.
pub const NEPALI_DIGRAPHS: [&str; 9] = ["kh", "gh", "ch", "th", "dh", "ph", "bh", "ny", "sh"];

/// Built-in shop vocabulary, in definition order. Suggestions surface
/// entries in this order.
pub const COMMON_WORDS: &[(&str, &str)] = &[
    // Utensils
    ("plate", "प्लेट"),
    ("thali", "थाली"),
    ("spoon", "चम्चा"),
    ("chamcha", "चम्चा"),
    ("glass", "गिलास"),
    ("gilas", "गिलास"),
    ("bowl", "कटोरी"),
    ("katori", "कटोरी"),
    ("cup", "कप"),
    ("pan", "प्यान"),
    ("cooker", "कुकर"),
    ("kettle", "केतली"),
    ("jug", "जग"),
    ("bottle", "बोतल"),
    ("thermos", "थर्मस"),
    ("flask", "फ्लास्क"),
    // Materials
    ("steel", "स्टिल"),
    ("brass", "पीतल"),
    ("pital", "पीतल"),
    ("plastic", "प्लास्टिक"),
    ("aluminum", "एल्युमिनियम"),
    ("copper", "तामा"),
    ("tama", "तामा"),
    ("iron", "फलाम"),
    ("phalam", "फलाम"),
    // Sizes
    ("large", "ठूलो"),
    ("thulo", "ठूलो"),
    ("small", "सानो"),
    ("sano", "सानो"),
    ("medium", "मध्यम"),
    ("madhyam", "मध्यम"),
    ("big", "ठूलो"),
    ("choto", "सानो"),
    // Religious items
    ("diya", "दियो"),
    ("diyo", "दियो"),
    ("kalash", "कलश"),
    ("agarbatti", "अगरबत्ती"),
    ("dhup", "धूप"),
    ("thali", "थाली"),
    // Kitchen
    ("knife", "चक्कु"),
    ("chakku", "चक्कु"),
    ("fork", "काँटा"),
    ("kanta", "काँटा"),
    ("ladle", "खोर"),
    ("khor", "खोर"),
    ("tawa", "तवा"),
    ("kadhai", "कढाई"),
    ("kadai", "कढाई"),
    ("belan", "बेलन"),
    ("chakla", "चकला"),
    // Cleaning
    ("bucket", "बाल्टिन"),
    ("baltin", "बाल्टिन"),
    ("mug", "मग"),
    ("brush", "ब्रस"),
    ("broom", "कुचो"),
    ("kucho", "कुचो"),
    ("jhadu", "झाडू"),
    ("soap", "साबुन"),
    ("sabun", "साबुन"),
    // Misc
    ("set", "सेट"),
    ("piece", "थान"),
    ("than", "थान"),
    ("dozen", "दर्जन"),
    ("darjan", "दर्जन"),
    ("pack", "प्याक"),
    ("box", "बक्स"),
    ("new", "नयाँ"),
    ("naya", "नयाँ"),
    ("purano", "पुरानो"),
    ("old", "पुरानो"),
];
