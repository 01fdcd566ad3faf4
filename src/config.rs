/// Runtime configuration for a single conversion.
#[derive(Debug, Clone)]
pub struct Config {
    /// Compression level handed to the codec.
    pub level: u32,
    /// Name of the emitted byte array. The size symbol is `<symbol>_SIZE`.
    pub symbol: String,
    /// Number of array elements per emitted line.
    pub values_per_line: usize,
}

/// Symbol name the RAM-disk driver links against.
pub const DEFAULT_SYMBOL: &str = "RAMDISK_IMAGE";
pub const DEFAULT_VALUES_PER_LINE: usize = 15;

impl Default for Config {
    fn default() -> Self {
        Self {
            level: 0,
            symbol: DEFAULT_SYMBOL.to_string(),
            values_per_line: DEFAULT_VALUES_PER_LINE,
        }
    }
}

impl Config {
    /// Name of the size symbol emitted after the array.
    pub fn size_symbol(&self) -> String {
        format!("{}_SIZE", self.symbol)
    }
}
