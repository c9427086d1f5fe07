/// Target used when none is given: the whole IPv4 space.
pub const DEFAULT_TARGET: &str = "0.0.0.0/0";

/// RFC 1918 private-use blocks, excluded unless told otherwise.
pub const DEFAULT_EXCLUDES: [&str; 3] = ["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16"];

/// Width of the Feistel network used to shuffle each range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CipherWidth {
    /// Halves sized to the range, with cycle walking. Every range is a true permutation.
    #[default]
    Adaptive,
    /// Fixed 8-bit halves reduced modulo the range size.
    ///
    /// Reproduces the historical ordering. Ranges larger than 65536 addresses
    /// are not guaranteed to be collision free.
    Legacy16,
}

/// Construction parameters for an address iterator.
#[derive(Clone, Debug)]
pub struct Config {
    /// Network to enumerate, in CIDR notation.
    pub target: String,
    /// Networks to leave out, in CIDR notation.
    pub excludes: Vec<String>,
    /// Fixes the shuffle for reproducible runs.
    pub seed: Option<u64>,
    /// Logs range counts at info level instead of debug.
    ///
    /// The diagnostic is a `tracing` event, never a write to stdout. Nothing is
    /// shown unless the caller has installed a subscriber that accepts it.
    pub verbose: bool,
    pub cipher: CipherWidth,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            excludes: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            seed: None,
            verbose: false,
            cipher: CipherWidth::default(),
        }
    }
}

impl Config {
    /// A config for `target` with no excludes.
    pub fn for_target(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            excludes: Vec::new(),
            ..Self::default()
        }
    }

    pub fn with_excludes<S: AsRef<str>>(mut self, excludes: &[S]) -> Self {
        self.excludes = excludes.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_cipher(mut self, cipher: CipherWidth) -> Self {
        self.cipher = cipher;
        self
    }
}
