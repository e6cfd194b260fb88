//! Storage configuration for sparse vectors

/// How backing storage grows when a write needs a new slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GrowthPolicy {
    /// Geometric growth, amortized O(1) per insertion
    #[default]
    Amortized,
    /// Reserve a fixed number of additional slots at a time
    Chunked(usize),
    /// Grow by exactly one slot
    Exact,
}

impl GrowthPolicy {
    /// Number of additional slots to reserve when `current` slots are full
    pub fn additional(self, current: usize) -> usize {
        match self {
            GrowthPolicy::Amortized => current.max(4),
            GrowthPolicy::Chunked(chunk) => chunk.max(1),
            GrowthPolicy::Exact => 1,
        }
    }
}

/// Strategy used to resolve a value reference back to its index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PositionStrategy {
    /// O(1) address arithmetic against the value array
    #[default]
    Address,
    /// O(n) identity scan over stored values
    Scan,
}

/// Configuration for sparse vector storage
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VectorConfig {
    /// Growth policy for the index and value arrays
    pub growth: GrowthPolicy,
    /// Strategy for `position` lookups
    pub position_strategy: PositionStrategy,
    /// Release spare capacity after `compact`
    pub shrink_on_compact: bool,
}

impl VectorConfig {
    /// Set the growth policy
    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Set the position lookup strategy
    pub fn with_position_strategy(mut self, strategy: PositionStrategy) -> Self {
        self.position_strategy = strategy;
        self
    }

    /// Keep or release spare capacity after compaction
    pub fn with_shrink_on_compact(mut self, shrink: bool) -> Self {
        self.shrink_on_compact = shrink;
        self
    }

    /// Load a configuration from JSON; missing fields take their defaults
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            growth: GrowthPolicy::Amortized,
            position_strategy: PositionStrategy::Address,
            shrink_on_compact: true,
        }
    }
}
