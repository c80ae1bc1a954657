/// UI helpers
///
/// This module handles:
/// - Decoding dropped files into preview textures (preview.rs)

pub mod preview;
