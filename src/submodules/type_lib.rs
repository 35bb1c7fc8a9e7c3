pub type NumericData = f64;

pub const NUM_FLUID_LAYERS: usize = 4;

pub type LayerRow = [NumericData; NUM_FLUID_LAYERS];

/// Axial centroids of the four fluid layers (cm).
pub const LAYER_CENTROIDS: LayerRow = [0.125, 0.375, 0.625, 0.875];

/// Conversion from an absolute k_eff change to pcm.
pub const PCM: NumericData = 100000.0;
