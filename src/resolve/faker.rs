use chrono::{Local, NaiveDateTime};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

use crate::resolve::locale::*;

const ALPHA: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const HEX_LOWER: &[u8] = b"0123456789abcdef";
const VIN_CHARS: &[u8] = b"ABCDEFGHJKLMNPRSTUVWXYZ0123456789";
const VIN_WEIGHTS: [u32; 17] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// Random-data generator over an injected random source and a fixed "now".
///
/// Production code uses [`Faker::from_entropy`]; tests use [`Faker::seeded`]
/// together with [`Faker::with_now`] so that every generated value is reproducible.
pub struct Faker<R> {
    pub(super) rng: R,
    pub(super) now: NaiveDateTime,
}

impl Faker<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy(), Local::now().naive_local())
    }
}

impl Faker<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed), Local::now().naive_local())
    }
}

impl<R: Rng> Faker<R> {
    pub fn new(rng: R, now: NaiveDateTime) -> Self {
        Self { rng, now }
    }

    /// Pin the clock used by every date generator.
    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = now;
        self
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    // ------------------------------------------------------------------
    // Primitives
    // ------------------------------------------------------------------

    /// Uniform integer in `[min, max]`.
    pub fn int(&mut self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    pub fn float(&mut self, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    pub fn pick(&mut self, items: &[&'static str]) -> &'static str {
        items.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn chars_from(&mut self, alphabet: &[u8], len: usize) -> String {
        (0..len)
            .map(|_| alphabet[self.rng.gen_range(0..alphabet.len())] as char)
            .collect()
    }

    pub fn numeric(&mut self, len: usize) -> String {
        self.chars_from(b"0123456789", len)
    }

    pub fn alpha(&mut self, len: usize) -> String {
        self.chars_from(ALPHA, len)
    }

    pub fn alphanumeric(&mut self, len: usize) -> String {
        self.chars_from(ALPHANUMERIC, len)
    }

    pub fn hex_lower(&mut self, len: usize) -> String {
        self.chars_from(HEX_LOWER, len)
    }

    fn digits(&mut self, len: usize) -> Vec<u32> {
        (0..len).map(|_| self.rng.gen_range(0..10)).collect()
    }

    // ------------------------------------------------------------------
    // Person
    // ------------------------------------------------------------------

    pub fn first_name(&mut self) -> String {
        self.pick(FIRST_NAMES).to_string()
    }

    pub fn last_name(&mut self) -> String {
        self.pick(LAST_NAMES).to_string()
    }

    pub fn middle_name(&mut self) -> String {
        self.pick(MIDDLE_NAMES).to_string()
    }

    pub fn full_name(&mut self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
    }

    pub fn name_prefix(&mut self) -> String {
        self.pick(NAME_PREFIXES).to_string()
    }

    pub fn name_suffix(&mut self) -> String {
        self.pick(NAME_SUFFIXES).to_string()
    }

    pub fn job_title(&mut self) -> String {
        format!(
            "{} {} {}",
            self.pick(JOB_DESCRIPTORS),
            self.pick(JOB_AREAS),
            self.pick(JOB_TYPES)
        )
    }

    pub fn bio(&mut self) -> String {
        match self.int(0, 2) {
            0 => format!("{}, {}", self.pick(BIO_NOUNS), self.job_title().to_lowercase()),
            1 => format!(
                "{}, {} {}",
                self.pick(BIO_NOUNS),
                self.pick(BIO_NOUNS),
                self.pick(BIO_SUFFIXES)
            ),
            _ => format!(
                "{} and {} based in {}",
                self.pick(BIO_NOUNS),
                self.pick(BIO_NOUNS),
                self.city()
            ),
        }
    }

    // ------------------------------------------------------------------
    // Internet
    // ------------------------------------------------------------------

    pub fn username(&mut self) -> String {
        let first = self.first_name();
        let last = self.last_name();
        let raw = match self.int(0, 2) {
            0 => format!("{}{}", first, self.int(1, 99)),
            1 => format!("{}{}{}", first, self.pick(&[".", "_"]), last),
            _ => format!("{}{}{}{}", first, self.pick(&[".", "_"]), last, self.int(1, 99)),
        };
        sanitize_handle(&raw)
    }

    pub fn email(&mut self) -> String {
        let local = sanitize_handle(&format!(
            "{}.{}{}",
            self.first_name(),
            self.last_name(),
            self.int(1, 99)
        ));
        format!("{}@{}", local, self.pick(FREE_EMAIL_DOMAINS))
    }

    pub fn domain_name(&mut self) -> String {
        let word = self.pick(DOMAIN_WORDS);
        let suffix = self.pick(DOMAIN_SUFFIXES);
        if self.rng.gen_bool(0.5) {
            format!("{}-{}.{}", word, self.pick(DOMAIN_WORDS), suffix)
        } else {
            format!("{}.{}", word, suffix)
        }
    }

    pub fn url(&mut self) -> String {
        format!("https://{}/", self.domain_name())
    }

    pub fn ipv4(&mut self) -> String {
        format!(
            "{}.{}.{}.{}",
            self.int(1, 254),
            self.int(0, 255),
            self.int(0, 255),
            self.int(1, 254)
        )
    }

    pub fn ipv6(&mut self) -> String {
        (0..8)
            .map(|_| self.hex_lower(4))
            .collect::<Vec<_>>()
            .join(":")
    }

    pub fn mac_address(&mut self) -> String {
        (0..6)
            .map(|_| self.hex_lower(2))
            .collect::<Vec<_>>()
            .join(":")
    }

    pub fn port(&mut self) -> u16 {
        self.rng.gen_range(1..=65535)
    }

    pub fn uuid(&mut self) -> String {
        let mut bytes = [0u8; 16];
        self.rng.fill(&mut bytes[..]);
        uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .hyphenated()
            .to_string()
    }

    // ------------------------------------------------------------------
    // Phone & location
    // ------------------------------------------------------------------

    /// North American national format: `(NXX) NXX-XXXX`.
    pub fn phone_national(&mut self) -> String {
        format!(
            "({}{}) {}{}-{}",
            self.int(2, 9),
            self.numeric(2),
            self.int(2, 9),
            self.numeric(2),
            self.numeric(4)
        )
    }

    pub fn street_address(&mut self, full: bool) -> String {
        let line = format!(
            "{} {} {}",
            self.int(1, 9999),
            self.pick(STREET_NAMES),
            self.pick(STREET_SUFFIXES)
        );
        if full {
            format!("{} {}", line, self.secondary_address())
        } else {
            line
        }
    }

    pub fn secondary_address(&mut self) -> String {
        if self.rng.gen_bool(0.5) {
            format!("Apt. {}", self.int(100, 999))
        } else {
            format!("Suite {}", self.int(100, 999))
        }
    }

    pub fn city(&mut self) -> String {
        self.pick(CITIES).to_string()
    }

    pub fn state(&mut self) -> String {
        self.pick(STATES).to_string()
    }

    /// Five-digit US zip code.
    pub fn zip_code(&mut self) -> String {
        format!("{:05}", self.int(501, 99950))
    }

    pub fn country(&mut self) -> String {
        let idx = self.rng.gen_range(0..COUNTRIES.len());
        COUNTRIES[idx].0.to_string()
    }

    pub fn country_code(&mut self) -> String {
        let idx = self.rng.gen_range(0..COUNTRIES.len());
        COUNTRIES[idx].1.to_string()
    }

    pub fn latitude(&mut self) -> f64 {
        round4(self.float(-90.0, 90.0))
    }

    pub fn longitude(&mut self) -> f64 {
        round4(self.float(-180.0, 180.0))
    }

    pub fn time_zone(&mut self) -> String {
        self.pick(TIME_ZONES).to_string()
    }

    // ------------------------------------------------------------------
    // Company & commerce
    // ------------------------------------------------------------------

    pub fn company_name(&mut self) -> String {
        match self.int(0, 2) {
            0 => format!("{} {}", self.last_name(), self.pick(COMPANY_SUFFIXES)),
            1 => format!("{}-{}", self.last_name(), self.last_name()),
            _ => format!(
                "{}, {} and {}",
                self.last_name(),
                self.last_name(),
                self.last_name()
            ),
        }
    }

    pub fn product_name(&mut self) -> String {
        format!(
            "{} {} {}",
            self.pick(PRODUCT_ADJECTIVES),
            self.pick(PRODUCT_MATERIALS),
            self.pick(PRODUCTS)
        )
    }

    pub fn department(&mut self) -> String {
        self.pick(DEPARTMENTS).to_string()
    }

    /// Price with two decimals in `[min, max]`.
    pub fn price(&mut self, min: i64, max: i64) -> String {
        let cents = self.int(min * 100, max * 100);
        format!("{}.{:02}", cents / 100, cents % 100)
    }

    // ------------------------------------------------------------------
    // Finance
    // ------------------------------------------------------------------

    /// Luhn-valid card number (Visa, Mastercard or Amex shaped).
    pub fn credit_card_number(&mut self) -> String {
        let (prefix, len): (Vec<u32>, usize) = match self.int(0, 2) {
            0 => (vec![4], 16),
            1 => (vec![5, self.int(1, 5) as u32], 16),
            _ => (vec![3, if self.rng.gen_bool(0.5) { 4 } else { 7 }], 15),
        };
        let mut payload = prefix;
        let rest = self.digits(len - 1 - payload.len());
        payload.extend(rest);
        payload.push(luhn_check_digit(&payload));
        payload.iter().map(|d| char::from_digit(*d, 10).unwrap_or('0')).collect()
    }

    pub fn credit_card_cvv(&mut self, len: usize) -> String {
        self.numeric(len)
    }

    pub fn account_number(&mut self, len: usize) -> String {
        self.numeric(len)
    }

    /// Nine-digit ABA routing number with a valid check digit.
    pub fn routing_number(&mut self) -> String {
        let mut d = vec![0u32, self.int(1, 9) as u32];
        if self.rng.gen_bool(0.5) {
            d = vec![self.int(0, 1) as u32, self.int(0, 2) as u32];
            if d == [0, 0] {
                d[1] = 1;
            }
        }
        d.extend(self.digits(6));
        d.push(aba_check_digit(&d));
        d.iter().map(|x| char::from_digit(*x, 10).unwrap_or('0')).collect()
    }

    /// IBAN with ISO 13616 mod-97 check digits.
    pub fn iban(&mut self) -> String {
        let (country, bban) = match self.int(0, 5) {
            0 => ("DE", self.numeric(18)),
            1 => ("GB", format!("{}{}", self.alpha(4).to_uppercase(), self.numeric(14))),
            2 => ("FR", self.numeric(23)),
            3 => ("NL", format!("{}{}", self.alpha(4).to_uppercase(), self.numeric(10))),
            4 => ("ES", self.numeric(20)),
            _ => ("IT", format!("{}{}", self.alpha(1).to_uppercase(), self.numeric(22))),
        };
        let check = iban_check_digits(country, &bban);
        format!("{}{:02}{}", country, check, bban)
    }

    pub fn currency_code(&mut self) -> String {
        self.pick(CURRENCY_CODES).to_string()
    }

    // ------------------------------------------------------------------
    // Vehicle & color
    // ------------------------------------------------------------------

    /// 17-character VIN with a valid position-9 check digit.
    pub fn vin(&mut self) -> String {
        let mut chars: Vec<char> = self.chars_from(VIN_CHARS, 17).chars().collect();
        chars[8] = vin_check_char(&chars);
        chars.into_iter().collect()
    }

    pub fn vehicle_manufacturer(&mut self) -> String {
        self.pick(VEHICLE_MANUFACTURERS).to_string()
    }

    pub fn vehicle_model(&mut self) -> String {
        self.pick(VEHICLE_MODELS).to_string()
    }

    pub fn vehicle_type(&mut self) -> String {
        self.pick(VEHICLE_TYPES).to_string()
    }

    pub fn color_name(&mut self) -> String {
        self.pick(COLOR_NAMES).to_string()
    }

    pub fn fuel_type(&mut self) -> String {
        self.pick(FUEL_TYPES).to_string()
    }

    /// `#rrggbb`, lowercase.
    pub fn hex_color(&mut self) -> String {
        format!("#{}", self.hex_lower(6))
    }

    // ------------------------------------------------------------------
    // Lorem
    // ------------------------------------------------------------------

    pub fn word(&mut self) -> String {
        self.pick(LOREM_WORDS).to_string()
    }

    pub fn words(&mut self, count: usize) -> String {
        (0..count).map(|_| self.word()).collect::<Vec<_>>().join(" ")
    }

    pub fn sentence(&mut self) -> String {
        let count = self.int(3, 10) as usize;
        let words = self.words(count);
        let mut chars = words.chars();
        match chars.next() {
            Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
            None => String::new(),
        }
    }

    pub fn paragraph(&mut self) -> String {
        let count = self.int(3, 6);
        (0..count).map(|_| self.sentence()).collect::<Vec<_>>().join(" ")
    }

    pub fn paragraphs(&mut self, count: usize) -> String {
        (0..count).map(|_| self.paragraph()).collect::<Vec<_>>().join("\n")
    }

    pub fn slug(&mut self, count: usize) -> String {
        slugify(&self.words(count))
    }
}

// ----------------------------------------------------------------------
// Checksums and formatting helpers
// ----------------------------------------------------------------------

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

fn sanitize_handle(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.' || *c == '_')
        .collect::<String>()
        .to_lowercase()
}

/// Lowercase, whitespace to `-`, everything else outside `[a-z0-9-]` dropped.
pub fn slugify(text: &str) -> String {
    text.split_whitespace()
        .map(|w| {
            w.chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Check digit that makes `payload ++ [digit]` pass the Luhn test.
pub fn luhn_check_digit(payload: &[u32]) -> u32 {
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                *d
            }
        })
        .sum();
    (10 - sum % 10) % 10
}

pub fn luhn_valid(number: &str) -> bool {
    let digits: Option<Vec<u32>> = number.chars().map(|c| c.to_digit(10)).collect();
    match digits {
        Some(d) if d.len() > 1 => {
            let (payload, check) = d.split_at(d.len() - 1);
            luhn_check_digit(payload) == check[0]
        }
        _ => false,
    }
}

fn aba_check_digit(first_eight: &[u32]) -> u32 {
    let d = first_eight;
    let sum = 3 * (d[0] + d[3] + d[6]) + 7 * (d[1] + d[4] + d[7]) + (d[2] + d[5]);
    (10 - sum % 10) % 10
}

pub fn aba_valid(number: &str) -> bool {
    let digits: Option<Vec<u32>> = number.chars().map(|c| c.to_digit(10)).collect();
    match digits {
        Some(d) if d.len() == 9 => {
            (3 * (d[0] + d[3] + d[6]) + 7 * (d[1] + d[4] + d[7]) + (d[2] + d[5] + d[8])) % 10 == 0
        }
        _ => false,
    }
}

/// Remainder of the ISO 7064 mod-97 reduction, letters mapped A=10..Z=35.
pub fn mod97(text: &str) -> u32 {
    let mut rem: u32 = 0;
    for c in text.chars() {
        let value = match c {
            '0'..='9' => c as u32 - '0' as u32,
            'A'..='Z' => c as u32 - 'A' as u32 + 10,
            'a'..='z' => c as u32 - 'a' as u32 + 10,
            _ => continue,
        };
        if value >= 10 {
            rem = (rem * 100 + value) % 97;
        } else {
            rem = (rem * 10 + value) % 97;
        }
    }
    rem
}

fn iban_check_digits(country: &str, bban: &str) -> u32 {
    98 - mod97(&format!("{}{}00", bban, country))
}

pub fn iban_valid(iban: &str) -> bool {
    if iban.len() < 5 {
        return false;
    }
    let (head, tail) = iban.split_at(4);
    mod97(&format!("{}{}", tail, head)) == 1
}

fn vin_value(c: char) -> u32 {
    match c {
        '0'..='9' => c as u32 - '0' as u32,
        'A' | 'J' => 1,
        'B' | 'K' | 'S' => 2,
        'C' | 'L' | 'T' => 3,
        'D' | 'M' | 'U' => 4,
        'E' | 'N' | 'V' => 5,
        'F' | 'W' => 6,
        'G' | 'P' | 'X' => 7,
        'H' | 'Y' => 8,
        'R' | 'Z' => 9,
        _ => 0,
    }
}

fn vin_check_char(chars: &[char]) -> char {
    let sum: u32 = chars
        .iter()
        .zip(VIN_WEIGHTS.iter())
        .map(|(c, w)| vin_value(*c) * w)
        .sum();
    match sum % 11 {
        10 => 'X',
        n => char::from_digit(n, 10).unwrap_or('0'),
    }
}

pub fn vin_valid(vin: &str) -> bool {
    let chars: Vec<char> = vin.chars().collect();
    chars.len() == 17
        && !chars.iter().any(|c| matches!(c, 'I' | 'O' | 'Q'))
        && chars[8] == vin_check_char(&chars)
}
