//! Key vault
//!
//! Seed phrase generation and validation, deterministic view/spend key
//! derivation and key bundle export/import. The real scalar arithmetic lives
//! in the external CryptoNote library; this module owns the key material
//! state and the phrase format (12, 18 or 24 words).

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{WalletError, WalletResult};
use crate::network::{ADDRESS_BODY_LEN, ADDRESS_PREFIX};

/// Number of words in a freshly generated seed phrase.
pub const GENERATED_PHRASE_WORDS: usize = 24;

/// Word counts accepted by `validate_seed_phrase`.
const VALID_WORD_COUNTS: &[usize] = &[12, 18, 24];

/// Wordlist for seed phrase generation.
const WORDLIST: &[&str] = &[
    "abandon", "ability", "absorb", "acid", "acoustic", "across", "actor", "adapt", "afford",
    "agent", "alarm", "alcohol", "alien", "alpha", "amber", "anchor", "ancient", "animal",
    "antenna", "apology", "arctic", "arena", "armor", "arrow", "asset", "atom", "auction",
    "autumn", "avocado", "axis", "bacon", "badge", "balance", "bamboo", "banner", "barrel",
    "basket", "battle", "beacon", "benefit", "bicycle", "biology", "blanket", "blossom",
    "border", "bounce", "bracket", "bridge", "bronze", "bubble", "bucket", "burden", "cabin",
    "cactus", "camera", "canal", "candle", "canyon", "carbon", "cargo", "carpet", "castle",
    "catalog", "cattle", "celery", "cement", "census", "channel", "chapter", "cherry",
    "chimney", "cinnamon", "circle", "citizen", "civil", "clarify", "clay", "clever", "cliff",
    "clinic", "cluster", "coconut", "coffee", "column", "comet", "copper", "coral", "cotton",
    "course", "coyote", "cradle", "crane", "crater", "cricket", "crimson", "crystal",
    "culture", "cushion", "cycle", "damage", "dawn", "decade", "declare", "decorate", "deer",
    "degree", "delta", "dentist", "deposit", "desert", "detail", "device", "diagram",
    "diamond", "diesel", "dignity", "dinner", "dolphin", "domain", "donkey", "dragon",
    "drastic", "drift", "drum", "dune", "eagle", "echo", "ecology", "edge", "effort", "elbow",
    "elder", "element", "embark", "ember", "emerald", "empower", "energy", "engine", "enrich",
    "entry", "envelope", "episode", "equal", "erosion", "essay", "estate", "evidence",
    "exact", "exhibit", "exile", "exotic", "fabric", "falcon", "family", "fancy", "farm",
    "feather", "fence", "festival", "fiber", "field", "film", "filter", "final", "fiscal",
    "flame", "flavor", "fleet", "florist", "fluid", "foam", "forest", "fossil", "fragile",
    "frost", "fuel", "furnace", "galaxy", "garden", "garlic", "gather", "gentle", "geyser",
    "giraffe", "glacier", "globe", "glory", "goose", "gorilla", "gravity", "grid", "grove",
    "guitar", "habit", "hammer", "harbor", "harvest", "hazard", "hedgehog", "helmet",
    "hockey", "horizon", "hurdle", "hybrid",
];

/// View/spend key material plus the seed phrase that produced it.
#[derive(Debug, Default, Clone)]
pub struct KeyVault {
    seed_phrase: Option<String>,
    view_key: Option<String>,
    spend_key: Option<String>,
}

/// Exported key bundle, consumed by `import_keys` as a whole.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBundle {
    pub address: String,
    pub view_key: String,
    pub spend_key: String,
    pub seed_phrase: String,
}

impl KeyVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fresh 24-word seed phrase from the wordlist
    pub fn generate_seed_phrase() -> String {
        let mut rng = rand::thread_rng();
        let words: Vec<&str> = (0..GENERATED_PHRASE_WORDS)
            .map(|_| *WORDLIST.choose(&mut rng).unwrap_or(&WORDLIST[0]))
            .collect();
        words.join(" ")
    }

    /// Validate a seed phrase: exactly 12, 18 or 24 whitespace-delimited words
    pub fn validate_seed_phrase(phrase: &str) -> WalletResult<()> {
        let count = phrase.split_whitespace().count();
        if VALID_WORD_COUNTS.contains(&count) {
            Ok(())
        } else {
            Err(WalletError::InvalidSeedLength(count))
        }
    }

    /// Derive view/spend key material from a seed phrase and password.
    ///
    /// Fails fast on an invalid phrase; otherwise the derivation is
    /// deterministic, so the same phrase and password always reproduce the
    /// same keys and address.
    pub fn derive_keys_from_seed(&mut self, phrase: &str, password: &str) -> WalletResult<()> {
        Self::validate_seed_phrase(phrase)?;

        let normalized = phrase.split_whitespace().collect::<Vec<_>>().join(" ");
        self.view_key = Some(derive_key("view", &normalized, password));
        self.spend_key = Some(derive_key("spend", &normalized, password));
        self.seed_phrase = Some(normalized);

        log::debug!("Key material derived from seed phrase");
        Ok(())
    }

    pub fn has_keys(&self) -> bool {
        self.view_key.is_some() && self.spend_key.is_some()
    }

    pub fn seed_phrase(&self) -> Option<&str> {
        self.seed_phrase.as_deref()
    }

    pub fn view_key(&self) -> Option<&str> {
        self.view_key.as_deref()
    }

    pub fn spend_key(&self) -> Option<&str> {
        self.spend_key.as_deref()
    }

    /// The public address for the current key material
    pub fn address(&self) -> Option<String> {
        match (&self.spend_key, &self.view_key) {
            (Some(spend), Some(view)) => Some(address_from_keys(spend, view)),
            _ => None,
        }
    }

    /// Export address + keys + seed phrase as a single bundle
    pub fn export_keys(&self) -> Option<KeyBundle> {
        Some(KeyBundle {
            address: self.address()?,
            view_key: self.view_key.clone()?,
            spend_key: self.spend_key.clone()?,
            seed_phrase: self.seed_phrase.clone()?,
        })
    }

    /// Import a key bundle, overwriting any existing material
    pub fn import_keys(&mut self, bundle: KeyBundle) {
        self.view_key = Some(bundle.view_key);
        self.spend_key = Some(bundle.spend_key);
        self.seed_phrase = Some(bundle.seed_phrase);
    }
}

fn derive_key(label: &str, phrase: &str, password: &str) -> String {
    let digest = Sha256::digest(format!("{label}:{phrase}:{password}").as_bytes());
    hex::encode(digest)
}

/// Build a Fuego address from spend/view key material: "fire" followed by 95
/// hex characters.
pub fn address_from_keys(spend_key: &str, view_key: &str) -> String {
    let mut body = String::with_capacity(ADDRESS_BODY_LEN + 64);
    let mut counter = 0u8;
    while body.len() < ADDRESS_BODY_LEN {
        let digest = Sha256::digest(format!("{spend_key}:{view_key}:{counter}").as_bytes());
        body.push_str(&hex::encode(digest));
        counter = counter.wrapping_add(1);
    }
    body.truncate(ADDRESS_BODY_LEN);
    format!("{ADDRESS_PREFIX}{body}")
}

/// Hash a wallet password for at-rest comparison.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_phrase_has_24_words_and_validates() {
        let phrase = KeyVault::generate_seed_phrase();
        assert_eq!(phrase.split_whitespace().count(), 24);
        assert!(KeyVault::validate_seed_phrase(&phrase).is_ok());
    }

    #[test]
    fn accepts_only_12_18_24_word_phrases() {
        for count in [12, 18, 24] {
            let phrase = vec!["ember"; count].join(" ");
            assert!(KeyVault::validate_seed_phrase(&phrase).is_ok());
        }
        for count in [0, 1, 10, 13, 23, 25] {
            let phrase = vec!["ember"; count].join(" ");
            assert!(matches!(
                KeyVault::validate_seed_phrase(&phrase),
                Err(WalletError::InvalidSeedLength(c)) if c == count
            ));
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        let phrase = vec!["crystal"; 12].join(" ");

        let mut a = KeyVault::new();
        a.derive_keys_from_seed(&phrase, "pw").unwrap();
        let mut b = KeyVault::new();
        b.derive_keys_from_seed(&phrase, "pw").unwrap();

        assert_eq!(a.view_key(), b.view_key());
        assert_eq!(a.spend_key(), b.spend_key());
        assert_eq!(a.address(), b.address());

        let mut c = KeyVault::new();
        c.derive_keys_from_seed(&phrase, "other").unwrap();
        assert_ne!(a.spend_key(), c.spend_key());
    }

    #[test]
    fn derive_rejects_bad_phrase() {
        let mut vault = KeyVault::new();
        let err = vault.derive_keys_from_seed("too short", "pw").unwrap_err();
        assert!(matches!(err, WalletError::InvalidSeedLength(2)));
        assert!(!vault.has_keys());
    }

    #[test]
    fn address_shape() {
        let addr = address_from_keys("aa", "bb");
        assert!(addr.starts_with(ADDRESS_PREFIX));
        assert_eq!(addr.len(), ADDRESS_PREFIX.len() + ADDRESS_BODY_LEN);
    }

    #[test]
    fn export_import_round_trip() {
        let phrase = vec!["harbor"; 24].join(" ");
        let mut vault = KeyVault::new();
        vault.derive_keys_from_seed(&phrase, "pw").unwrap();
        let bundle = vault.export_keys().unwrap();

        let mut other = KeyVault::new();
        assert!(other.export_keys().is_none());
        other.import_keys(bundle.clone());

        assert!(other.has_keys());
        assert_eq!(other.address().unwrap(), bundle.address);
        assert_eq!(other.seed_phrase().unwrap(), vault.seed_phrase().unwrap());
    }
}
