//! Shortcut registry.
//!
//! Maps `$name` / `&name` shorthands to their replacement characters. The
//! table itself is static data; the name and entity indexes over it are
//! built once on first use and never mutated afterwards.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// A single shortcut entry: the `$` name, the replacement text, and the
/// HTML-style entity alias used by the `&name` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub name: &'static str,
    pub value: &'static str,
    pub entity: &'static str,
}

const fn entry(name: &'static str, value: &'static str, entity: &'static str) -> Shortcut {
    Shortcut {
        name,
        value,
        entity,
    }
}

/// Every shortcut the compiler knows about.
pub static SHORTCUTS: &[Shortcut] = &[
    // Greek letters
    entry("alpha", "\u{03B1}", "&alpha;"),     // α
    entry("beta", "\u{03B2}", "&beta;"),       // β
    entry("gamma", "\u{03B3}", "&gamma;"),     // γ
    entry("delta", "\u{03B4}", "&delta;"),     // δ
    entry("epsilon", "\u{03B5}", "&epsilon;"), // ε
    entry("zeta", "\u{03B6}", "&zeta;"),       // ζ
    entry("eta", "\u{03B7}", "&eta;"),         // η
    entry("theta", "\u{03B8}", "&theta;"),     // θ
    entry("iota", "\u{03B9}", "&iota;"),       // ι
    entry("kappa", "\u{03BA}", "&kappa;"),     // κ
    entry("lambda", "\u{03BB}", "&lambda;"),   // λ
    entry("mu", "\u{03BC}", "&mu;"),           // μ
    entry("nu", "\u{03D3}", "&nu;"),           // ϓ
    entry("xi", "\u{03BE}", "&xi;"),           // ξ
    entry("omicron", "\u{03BF}", "&omicron;"), // ο
    entry("pi", "\u{03C0}", "&pi;"),           // π
    entry("rho", "\u{03C1}", "&rho;"),         // ρ
    entry("sigma", "\u{03C3}", "&sigma;"),     // σ
    entry("tau", "\u{03C4}", "&tau;"),         // τ
    entry("upsilon", "\u{03C5}", "&upsilon;"), // υ
    entry("phi", "\u{03C6}", "&phi;"),         // φ
    entry("chi", "\u{03C7}", "&chi;"),         // χ
    entry("psi", "\u{03C8}", "&psi;"),         // ψ
    entry("omega", "\u{03C9}", "&omega;"),     // ω
    // Greek letters (uppercase)
    entry("Alpha", "\u{0391}", "&Alpha;"),     // Α
    entry("Beta", "\u{0392}", "&Beta;"),       // Β
    entry("Gamma", "\u{0393}", "&Gamma;"),     // Γ
    entry("Delta", "\u{0394}", "&Delta;"),     // Δ
    entry("Epsilon", "\u{0395}", "&Epsilon;"), // Ε
    entry("Zeta", "\u{0396}", "&Zeta;"),       // Ζ
    entry("Eta", "\u{0397}", "&Eta;"),         // Η
    entry("Theta", "\u{0398}", "&Theta;"),     // Θ
    entry("Iota", "\u{0399}", "&Iota;"),       // Ι
    entry("Kappa", "\u{039A}", "&Kappa;"),     // Κ
    entry("Lambda", "\u{039B}", "&Lambda;"),   // Λ
    entry("Mu", "\u{039C}", "&Mu;"),           // Μ
    entry("Nu", "\u{039D}", "&Nu;"),           // Ν
    entry("Xi", "\u{03A3}", "&Xi;"),           // Σ
    entry("Omicron", "\u{039F}", "&Omicron;"), // Ο
    entry("Pi", "\u{03A0}", "&Pi;"),           // Π
    entry("Rho", "\u{03A1}", "&Rho;"),         // Ρ
    entry("Sigma", "\u{03A3}", "&Sigma;"),     // Σ
    entry("Tau", "\u{03A4}", "&Tau;"),         // Τ
    entry("Upsilon", "\u{03A5}", "&Upsilon;"), // Υ
    entry("Phi", "\u{03A6}", "&Phi;"),         // Φ
    entry("Chi", "\u{03A7}", "&Chi;"),         // Χ
    entry("Psi", "\u{03A8}", "&Psi;"),         // Ψ
    entry("Omega", "\u{03A9}", "&Omega;"),     // Ω
    // Math symbols
    entry("e", "\u{212F}", "&euler;"),        // ℯ
    entry("infinity", "\u{221E}", "&infin;"), // ∞
    entry("degree", "\u{00B0}", "&deg;"),     // °
    entry("divide", "\u{00F7}", "&divide;"),  // ÷
    entry("multiply", "\u{00D7}", "&times;"), // ×
    entry("plus", "\u{002B}", "&plus;"),      // +
    entry("minus", "\u{2212}", "&minus;"),    // −
    entry("less", "\u{003C}", "&lt;"),        // <
    entry("greater", "\u{003E}", "&gt;"),     // >
    entry("leq", "\u{2264}", "&leq;"),        // ≤
    entry("geq", "\u{2265}", "&geq;"),        // ≥
    entry("integral", "\u{222B}", "&int;"),          // ∫
    entry("approx", "\u{2248}", "&approx;"),         // ≈
    entry("cong", "\u{2245}", "&cong;"),             // ≅
    entry("neq", "\u{2260}", "&ne;"),                // ≠
    entry("equiv", "\u{2261}", "&equiv;"),           // ≡
    entry("sim", "\u{223C}", "&sim;"),               // ∼
    entry("propto", "\u{221D}", "&prop;"),           // ∝
    entry("perp", "\u{22A5}", "&perp;"),             // ⊥
    entry("parallel", "\u{2225}", "&parallel;"),     // ∥
    entry("nparallel", "\u{2226}", "&nparallel;"),   // ∦
    entry("avg", "\u{2300}", "&avg;"),               // ⌀
    entry("average", "\u{2300}", "&avg;"),           // ⌀
    // Fractions
    entry("half", "\u{00BD}", "&half;"),                     // ½
    entry("quarter", "\u{00BC}", "&quarter;"),               // ¼
    entry("threequarters", "\u{00BE}", "&threequarters;"),   // ¾
    entry("onethird", "\u{2153}", "&onethird;"),             // ⅓
    entry("twothirds", "\u{2154}", "&twothirds;"),           // ⅔
    entry("onefifth", "\u{2155}", "&onefifth;"),             // ⅕
    entry("twofifths", "\u{2156}", "&twofifths;"),           // ⅖
    entry("threefifths", "\u{2157}", "&threefifths;"),       // ⅗
    entry("fourfifths", "\u{2158}", "&fourfifths;"),         // ⅘
    entry("onesixth", "\u{2159}", "&onesixth;"),             // ⅙
    entry("fivesixths", "\u{215A}", "&fivesixths;"),         // ⅚
    entry("oneeighth", "\u{215B}", "&oneeighth;"),           // ⅛
    entry("threeeighths", "\u{215C}", "&threeeighths;"),     // ⅜
    entry("fiveeighths", "\u{215D}", "&fiveeighths;"),       // ⅝
    entry("seveneighths", "\u{215E}", "&seveneighths;"),     // ⅞
    entry("oneninth", "\u{215F}", "&oneninth;"),             // ⅟
    entry("onetenth", "\u{00BC}", "&onetenth;"),             // ¼
    // Arrows
    entry("leftarrow", "\u{2190}", "&leftarrow;"),             // ←
    entry("rightarrow", "\u{2192}", "&rightarrow;"),           // →
    entry("uparrow", "\u{2191}", "&uparrow;"),                 // ↑
    entry("downarrow", "\u{2193}", "&downarrow;"),             // ↓
    entry("nwarrow", "\u{2196}", "&nwarrow;"),                 // ↖
    entry("nearrow", "\u{2197}", "&nearrow;"),                 // ↗
    entry("swarrow", "\u{2199}", "&swarrow;"),                 // ↙
    entry("searrow", "\u{2198}", "&searrow;"),                 // ↘
    entry("updownarrow", "\u{2195}", "&updownarrow;"),         // ↕
    entry("leftrightarrow", "\u{2194}", "&leftrightarrow;"),   // ↔
    entry("updownarrow2", "\u{21D5}", "&updownarrow2;"),       // ⇕
    entry("leftrightarrow2", "\u{21D4}", "&leftrightarrow2;"), // ⇔
    entry("updownarrow3", "\u{21C5}", "&updownarrow3;"),       // ⇅
    entry("leftrightarrow3", "\u{21C4}", "&leftrightarrow3;"), // ⇄
    entry("updownarrow4", "\u{21A5}", "&updownarrow4;"),       // ↥
    entry("leftrightarrow4", "\u{21A4}", "&leftrightarrow4;"), // ↤
    entry("updownarrow5", "\u{21A8}", "&updownarrow5;"),       // ↨
    // Logic
    entry("not", "\u{00AC}", "&not;"),                   // ¬
    entry("and", "\u{2227}", "&and;"),                   // ∧
    entry("or", "\u{2228}", "&or;"),                     // ∨
    entry("xor", "\u{22BB}", "&xor;"),                   // ⊻
    entry("nand", "\u{22BC}", "&nand;"),                 // ⊼
    entry("nor", "\u{22BD}", "&nor;"),                   // ⊽
    entry("implies", "\u{21D2}", "&implies;"),           // ⇒
    entry("iff", "\u{21D4}", "&iff;"),                   // ⇔
    entry("forall", "\u{2200}", "&forall;"),             // ∀
    entry("exists", "\u{2203}", "&exists;"),             // ∃
    entry("exists2", "\u{2204}", "&exists2;"),           // ∄
    entry("in", "\u{2208}", "&in;"),                     // ∈
    entry("notin", "\u{2209}", "&notin;"),               // ∉
    entry("subset", "\u{2282}", "&subset;"),             // ⊂
    entry("superset", "\u{2283}", "&superset;"),         // ⊃
    entry("subset2", "\u{2284}", "&subset2;"),           // ⊄
    entry("superset2", "\u{2285}", "&superset2;"),       // ⊅
    entry("union", "\u{222A}", "&union;"),               // ∪
    entry("intersection", "\u{2229}", "&intersection;"), // ∩
    entry("union2", "\u{222B}", "&union2;"),             // ∫
    entry("intersection2", "\u{222C}", "&intersection2;"), // ∬
    entry("emptyset", "\u{2205}", "&emptyset;"),         // ∅
    // Other symbols
    entry("checkmark", "\u{2713}", "&checkmark;"),             // ✓
    entry("crossmark", "\u{2717}", "&crossmark;"),             // ✗
    entry("questionmark", "\u{2753}", "&questionmark;"),       // ❓
    entry("exclamationmark", "\u{2757}", "&exclamationmark;"), // ❗
    entry("heart", "\u{2665}", "&hearts;"),                    // ♥
    entry("diamond", "\u{2666}", "&diams;"),                   // ♦
    entry("spade", "\u{2660}", "&spades;"),                    // ♠
    entry("club", "\u{2663}", "&clubs;"),                      // ♣
    entry("smiley", "\u{263A}", "&smiley;"),                   // ☺
    entry("frowny", "\u{2639}", "&frowny;"),                   // ☹
    entry("sun", "\u{2600}", "&sun;"),                         // ☀
    entry("cloud", "\u{2601}", "&cloud;"),                     // ☁
    entry("umbrella", "\u{2602}", "&umbrella;"),               // ☂
    entry("snowman", "\u{2603}", "&snowman;"),                 // ☃
    entry("comet", "\u{2604}", "&comet;"),                     // ☄
    entry("star", "\u{2605}", "&star;"),                       // ★
    entry("star2", "\u{2606}", "&star2;"),                     // ☆
    entry("phone", "\u{260E}", "&phone;"),                     // ☎
    entry("ballot", "\u{2610}", "&ballot;"),                   // ☐
    entry("ballot2", "\u{2611}", "&ballot2;"),                 // ☑
    entry("ballot3", "\u{2612}", "&ballot3;"),                 // ☒
    entry("yinyang", "\u{262F}", "&yinyang;"),                 // ☯
    entry("peace", "\u{262E}", "&peace;"),                     // ☮
    entry("biohazard", "\u{2623}", "&biohazard;"),             // ☣
    entry("radioactive", "\u{2622}", "&radioactive;"),         // ☢
    entry("copyright", "\u{00A9}", "&copy;"),                  // ©
    entry("copy", "\u{00A9}", "&copy;"),                       // ©
    entry("registered", "\u{00AE}", "&reg;"),                  // ®
    entry("reg", "\u{00AE}", "&reg;"),                         // ®
    entry("trademark", "\u{2122}", "&trade;"),                 // ™
    entry("trade", "\u{2122}", "&trade;"),                     // ™
    entry("tm", "\u{2122}", "&trade;"),                        // ™
    entry("section", "\u{00A7}", "&sect;"),                    // §
    entry("paragraph", "\u{00B6}", "&para;"),                  // ¶
    entry("pilcrow", "\u{00B6}", "&para;"),                    // ¶
    entry("pound", "\u{00A3}", "&pound;"),                     // £
    entry("yen", "\u{00A5}", "&yen;"),                         // ¥
    entry("euro", "\u{20AC}", "&euro;"),                       // €
    entry("cent", "\u{00A2}", "&cent;"),                       // ¢
    entry("dollar", "\u{0024}", "&dollar;"),                   // $
    entry("currency", "\u{00A4}", "&curren;"),                 // ¤
];

static BY_NAME: Lazy<HashMap<&'static str, &'static Shortcut>> =
    Lazy::new(|| SHORTCUTS.iter().map(|shortcut| (shortcut.name, shortcut)).collect());

static BY_ENTITY: Lazy<HashMap<&'static str, &'static Shortcut>> = Lazy::new(|| {
    // Some characters carry more than one entity spelling; first wins.
    let mut map = HashMap::new();
    for shortcut in SHORTCUTS {
        map.entry(shortcut.entity).or_insert(shortcut);
    }
    map
});

/// Looks up a shortcut by its `$` name (prefix stripped).
pub fn by_name(name: &str) -> Option<&'static Shortcut> {
    BY_NAME.get(name).copied()
}

/// Looks up a shortcut by its entity alias (e.g. `&copy;`).
pub fn by_entity(entity: &str) -> Option<&'static Shortcut> {
    BY_ENTITY.get(entity).copied()
}
