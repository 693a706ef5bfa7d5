//! Phrase banks — pure data, no control flow.
//!
//! Every bank carries its own seed multiplier so different tiers don't
//! land on the same bank index for the same seed. Multipliers are odd, so
//! they stay coprime with the power-of-two structure of the seed space
//! and small bank sizes don't collapse to a single index.

/// A fixed bank of candidate phrases with deterministic selection.
#[derive(Debug, Clone, Copy)]
pub struct PhraseBank {
    /// Tier-specific multiplier applied to the seed before indexing.
    pub multiplier: u64,
    pub phrases: &'static [&'static str],
}

impl PhraseBank {
    /// Pick a phrase by `(seed * multiplier) % len`. Total: an empty bank
    /// yields an empty string rather than panicking, though no shipped
    /// bank is empty.
    pub fn pick(&self, seed: u64) -> &'static str {
        if self.phrases.is_empty() {
            return "";
        }
        let index = (seed.wrapping_mul(self.multiplier) % self.phrases.len() as u64) as usize;
        self.phrases[index]
    }
}

// ── Tier 1: combination banks ─────────────────────────────────────────────

pub const VELVET_EVENING: PhraseBank = PhraseBank {
    multiplier: 3,
    phrases: &[
        "Lean into velvet and low light: rich textures, nothing rushed, everything deliberate.",
        "A night-blooming kind of day — sumptuous fabrics, deep tones, slow movements.",
        "Dress like candlelight: soft luster, warm depth, a hem that catches when you turn.",
    ],
};

pub const FULL_MOON_DRAMA: PhraseBank = PhraseBank {
    multiplier: 5,
    phrases: &[
        "The moon is full and so is the silhouette — go big on one element and let it carry the room.",
        "High drama is earned today: a sweeping line, a saturated accent, no apologies.",
        "Tonight wants a statement. One bold piece, everything else in supporting roles.",
        "Peak-light energy: wear the thing you usually save for later.",
    ],
};

pub const SHARP_UTILITY: PhraseBank = PhraseBank {
    multiplier: 7,
    phrases: &[
        "Crisp lines and honest fabric — dress for the work and the work goes easier.",
        "A pressed-collar day: structure first, ornament only where it serves.",
        "Keep it exact: clean seams, sharp folds, pockets you actually use.",
    ],
};

pub const ROMANTIC_DRIFT: PhraseBank = PhraseBank {
    multiplier: 9,
    phrases: &[
        "Let everything drift a little: soft layers, blurred edges, fabric that moves before you do.",
        "A watercolor day — silk or something like it, in tones that melt into each other.",
        "Dress for the dream you woke from: loose, luminous, unhurried.",
    ],
};

pub const LIVE_WIRE: PhraseBank = PhraseBank {
    multiplier: 11,
    phrases: &[
        "Today runs on current — mix the unexpected pieces and trust the spark.",
        "An experimental charge in the air: break one rule on purpose.",
        "Wear the combination you haven't dared yet; the day will keep up.",
    ],
};

pub const QUIET_AUTHORITY: PhraseBank = PhraseBank {
    multiplier: 13,
    phrases: &[
        "Saturn's day rewards restraint: matte surfaces, grounded tones, quiet conviction.",
        "Authority without volume — structured shoulders, muted palette, steady presence.",
    ],
};

pub const COLOR_POP: PhraseBank = PhraseBank {
    multiplier: 15,
    phrases: &[
        "Saturation is the point today: one loud color, worn like you mean it.",
        "A playful brief: bright accents, light fabrics, nothing precious.",
        "Let color do the talking — keep the shapes simple and the hues electric.",
    ],
};

pub const GOLDEN_HOUR: PhraseBank = PhraseBank {
    multiplier: 73,
    phrases: &[
        "A Leo sun with gold in the chart: warm metallics, proud lines, and a little shine worn without apology.",
        "The sun is at home today — let gold carry the palette and stand where the light falls.",
    ],
};

pub const VENUS_TOUCH: PhraseBank = PhraseBank {
    multiplier: 17,
    phrases: &[
        "Venus rules the day: plush textures, skin-warm tones, details meant to be noticed up close.",
        "Dress for touch as much as sight — soft pile, smooth drape, a scent to match.",
    ],
};

// ── Tier 2: dominant-token banks ──────────────────────────────────────────

pub const DOMINANT_BOLD: PhraseBank = PhraseBank {
    multiplier: 19,
    phrases: &[
        "One signal drowns out the rest today: boldness. Choose the stronger option at every fork.",
        "The chart is shouting — answer with a decisive silhouette and a straight spine.",
    ],
};

pub const DOMINANT_DRAMATIC: PhraseBank = PhraseBank {
    multiplier: 21,
    phrases: &[
        "Drama leads: exaggerate one proportion and keep the rest disciplined.",
        "A theatrical day — dress for the third act, not the rehearsal.",
    ],
};

pub const DOMINANT_SILKY: PhraseBank = PhraseBank {
    multiplier: 23,
    phrases: &[
        "Silk-weight everything: surfaces that slide, colors that pour.",
        "Today reads smooth — minimize friction in fabric and in plans.",
    ],
};

pub const DOMINANT_CRISP: PhraseBank = PhraseBank {
    multiplier: 25,
    phrases: &[
        "Crispness dominates: pressed cotton, clean edges, decisions made early.",
        "A fresh-air brief — starched, bright, and done before noon.",
    ],
};

pub const DOMINANT_RESTLESS: PhraseBank = PhraseBank {
    multiplier: 27,
    phrases: &[
        "Restless energy runs the day: layers you can shed, shoes you can move in.",
        "Friction is fuel today — dress to pivot, not to pose.",
    ],
};

pub const DOMINANT_SENSUAL: PhraseBank = PhraseBank {
    multiplier: 29,
    phrases: &[
        "The dominant note is sensual: fabric first, everything else after.",
        "Dress close to the skin today — texture is the whole story.",
    ],
};

pub const DOMINANT_DREAMY: PhraseBank = PhraseBank {
    multiplier: 31,
    phrases: &[
        "A dream-logic day: soft focus, long lines, colors borrowed from dusk.",
        "Let the outfit be slightly unreal — gauze, haze, a silhouette that floats.",
    ],
};

pub const DOMINANT_GROUNDED: PhraseBank = PhraseBank {
    multiplier: 33,
    phrases: &[
        "Grounded wins today: earth tones, solid soles, nothing that flutters.",
        "Build from the feet up — sturdy, warm, and certain.",
    ],
};

// ── Tier 3: primary-characteristic templates ──────────────────────────────
//
// Templates use `{texture}`, `{color}`, and `{mood}` slots, filled by the
// selector from the dominant token per category.

pub const PRIMARY_FULL: PhraseBank = PhraseBank {
    multiplier: 35,
    phrases: &[
        "Lead with {texture} textures in {color} tones — the mood underneath is {mood}.",
        "A {mood} day, best worn as {texture} fabric with {color} accents.",
        "Build around {color}: keep surfaces {texture} and let the {mood} undertone show.",
    ],
};

pub const PRIMARY_TEXTURE: PhraseBank = PhraseBank {
    multiplier: 37,
    phrases: &[
        "Texture carries the day — make it {texture} and keep the palette quiet.",
        "One instruction: {texture}. Everything else is negotiable.",
    ],
};

pub const PRIMARY_COLOR: PhraseBank = PhraseBank {
    multiplier: 39,
    phrases: &[
        "Color leads: {color}, worn generously.",
        "Anchor the day in {color} and keep the shapes familiar.",
    ],
};

pub const PRIMARY_MOOD: PhraseBank = PhraseBank {
    multiplier: 41,
    phrases: &[
        "The day reads {mood} — dress to match rather than to fight it.",
        "A {mood} undertone runs through everything; let the outfit agree.",
    ],
};

// ── Tier 4: energy-direction banks ────────────────────────────────────────

pub const DIRECTION_FLOWING: PhraseBank = PhraseBank {
    multiplier: 43,
    phrases: &[
        "The current is flowing — choose pieces that move, and move with them.",
        "Nothing rigid today: drape over structure, curve over corner.",
    ],
};

pub const DIRECTION_GROUNDED: PhraseBank = PhraseBank {
    multiplier: 45,
    phrases: &[
        "The energy is grounded: dependable fabrics, low centers of gravity, no experiments.",
        "Stay planted — classic shapes, earth palette, good boots.",
    ],
};

pub const DIRECTION_INNOVATIVE: PhraseBank = PhraseBank {
    multiplier: 47,
    phrases: &[
        "Innovation is the through-line: one piece worn wrong on purpose.",
        "The day bends toward the new — prototype an outfit, see what holds.",
    ],
};

pub const DIRECTION_NURTURING: PhraseBank = PhraseBank {
    multiplier: 49,
    phrases: &[
        "A nurturing current: soft layers, warm tones, clothes that take care of you.",
        "Comfort is the brief — wear what a good day off would wear.",
    ],
};

pub const DIRECTION_INTENSE: PhraseBank = PhraseBank {
    multiplier: 51,
    phrases: &[
        "Intensity underneath everything: sharpen the palette and commit.",
        "The day burns hot — dark saturation, strong lines, no half measures.",
    ],
};

pub const DIRECTION_BALANCED: PhraseBank = PhraseBank {
    multiplier: 53,
    phrases: &[
        "Balanced energy: mix one soft element with one structured one and stop there.",
        "An even-keeled day — proportion over statement, harmony over contrast.",
    ],
};

// ── Tier 5: absolute fallback ─────────────────────────────────────────────

pub const FALLBACK: PhraseBank = PhraseBank {
    multiplier: 55,
    phrases: &[
        "A quiet chart today — dress for yourself, in whatever feels most like you.",
        "No loud signals: pick the outfit that needs no occasion.",
    ],
};

// ── Confidence qualifiers ─────────────────────────────────────────────────

pub const SOFTENER_MODERATE: PhraseBank = PhraseBank {
    multiplier: 57,
    phrases: &[
        "The signals are scattered, but if one thread runs through them: ",
        "Today's energies pull several ways; the gentlest reading: ",
    ],
};

pub const SOFTENER_MEDIUM: PhraseBank = PhraseBank {
    multiplier: 59,
    phrases: &["The leading current today: ", "Most of the chart agrees: "],
};

// ── Takeaway closers, keyed by dominant energy category ───────────────────

pub const TAKEAWAY_CLASSIC: PhraseBank = PhraseBank {
    multiplier: 61,
    phrases: &[
        "When in doubt, choose the timeless option.",
        "The classics are classics for a reason — today proves it.",
    ],
};

pub const TAKEAWAY_PLAYFUL: PhraseBank = PhraseBank {
    multiplier: 63,
    phrases: &[
        "Take the outfit less seriously than the day.",
        "If it makes you grin in the mirror, it's correct.",
    ],
};

pub const TAKEAWAY_ROMANTIC: PhraseBank = PhraseBank {
    multiplier: 65,
    phrases: &[
        "Dress like someone is going to remember you today.",
        "Softness is not a compromise — it's the point.",
    ],
};

pub const TAKEAWAY_UTILITY: PhraseBank = PhraseBank {
    multiplier: 67,
    phrases: &[
        "Every piece should earn its place today.",
        "Function first; the style follows on its own.",
    ],
};

pub const TAKEAWAY_DRAMA: PhraseBank = PhraseBank {
    multiplier: 69,
    phrases: &[
        "Underdressing is the only mistake available today.",
        "Make the entrance — the room will adjust.",
    ],
};

pub const TAKEAWAY_EDGE: PhraseBank = PhraseBank {
    multiplier: 71,
    phrases: &[
        "The odd choice is the right choice today.",
        "Comfort zones are for other days.",
    ],
};
