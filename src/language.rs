//! Language codes and script (alphabet) metadata.
//!
//! Dictionaries are partitioned by language code. The tokenizer tags tokens
//! with the [`Alphabet`] of the pattern that produced them.

use std::fmt;

use ahash::AHashMap;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Language used when none is configured.
pub const DEFAULT_LANGUAGE: &str = ENGLISH;

pub const AFRIKAANS: &str = "af";
pub const ALBANIAN: &str = "sq";
pub const ARABIC: &str = "ar";
pub const ARABIC_ALGERIA: &str = "ar-dz";
pub const ARABIC_BAHRAIN: &str = "ar-bh";
pub const ARABIC_EGYPT: &str = "ar-eg";
pub const ARABIC_IRAQ: &str = "ar-iq";
pub const ARABIC_JORDAN: &str = "ar-jo";
pub const ARABIC_KUWAIT: &str = "ar-kw";
pub const ARABIC_LEBANON: &str = "ar-lb";
pub const ARABIC_LIBYA: &str = "ar-ly";
pub const ARABIC_MOROCCO: &str = "ar-ma";
pub const ARABIC_OMAN: &str = "ar-om";
pub const ARABIC_QATAR: &str = "ar-qa";
pub const ARABIC_SAUDI_ARABIA: &str = "ar-sa";
pub const ARABIC_SYRIA: &str = "ar-sy";
pub const ARABIC_TUNISIA: &str = "ar-tn";
pub const ARABIC_UAE: &str = "ar-ae";
pub const ARABIC_YEMEN: &str = "ar-ye";
pub const BASQUE: &str = "eu";
pub const BRETON: &str = "br";
pub const DUTCH: &str = "nl";
pub const ENGLISH: &str = "en";
pub const ENGLISH_AUSTRALIA: &str = "en-au";
pub const ENGLISH_CANADA: &str = "en-ca";
pub const ENGLISH_IRELAND: &str = "en-ie";
pub const ENGLISH_NEW_ZEALAND: &str = "en-nz";
pub const ENGLISH_SOUTH_AFRICA: &str = "en-za";
pub const ENGLISH_UK: &str = "en-gb";
pub const ENGLISH_US: &str = "en-us";
pub const FARSI: &str = "fa";
pub const FRENCH: &str = "fr";
pub const GERMAN: &str = "de";
pub const ITALIAN: &str = "it";
pub const LATIN: &str = "la";
pub const PORTUGUESE: &str = "pt";
pub const SPANISH: &str = "es";
pub const SPANISH_ARGENTINA: &str = "es-ar";
pub const SPANISH_MEXICO: &str = "es-mx";
pub const SPANISH_SPAIN: &str = "es-es";
pub const URDU: &str = "ur";
pub const XHOSA: &str = "xh";
pub const ZULU: &str = "zu";

/// Script classification used by the tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    Latin,
    Arabic,
}

impl Alphabet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alphabet::Latin => "latin",
            Alphabet::Arabic => "arabic",
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

lazy_static! {
    static ref LANGUAGE_ALPHABETS: AHashMap<&'static str, Alphabet> = {
        let mut table = AHashMap::new();
        for code in [
            ARABIC,
            ARABIC_ALGERIA,
            ARABIC_BAHRAIN,
            ARABIC_EGYPT,
            ARABIC_IRAQ,
            ARABIC_JORDAN,
            ARABIC_KUWAIT,
            ARABIC_LEBANON,
            ARABIC_LIBYA,
            ARABIC_MOROCCO,
            ARABIC_OMAN,
            ARABIC_QATAR,
            ARABIC_SAUDI_ARABIA,
            ARABIC_SYRIA,
            ARABIC_TUNISIA,
            ARABIC_UAE,
            ARABIC_YEMEN,
            FARSI,
            URDU,
        ] {
            table.insert(code, Alphabet::Arabic);
        }
        for code in [
            LATIN,
            AFRIKAANS,
            ALBANIAN,
            BASQUE,
            BRETON,
            ENGLISH,
            ENGLISH_AUSTRALIA,
            ENGLISH_CANADA,
            ENGLISH_IRELAND,
            ENGLISH_NEW_ZEALAND,
            ENGLISH_SOUTH_AFRICA,
            ENGLISH_UK,
            ENGLISH_US,
            SPANISH,
            SPANISH_ARGENTINA,
            SPANISH_MEXICO,
            SPANISH_SPAIN,
            XHOSA,
            ZULU,
        ] {
            table.insert(code, Alphabet::Latin);
        }
        table
    };
}

/// Look up the alphabet a language is written in.
///
/// Codes are matched case-insensitively. Languages without an entry in the
/// table return `None`.
pub fn alphabet_for(language: &str) -> Option<Alphabet> {
    let code = language.trim().to_lowercase();
    LANGUAGE_ALPHABETS.get(code.as_str()).copied()
}
