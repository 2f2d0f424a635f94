/// Looping animation descriptors and batches.
pub mod descriptor;
/// Easing curves.
pub mod ease;
/// Descriptor generation for particle layers and fixed decorations.
pub mod generate;
/// Channel keyframes and sampled poses.
pub mod path;
