//! Screenshot gallery: the slide sequencer plus its loaded text art.
//!
//! The sequencer decides which assets to load and when panels may
//! change; this slice owns the loaded art and the generation tag that
//! lets the reducer discard results from a superseded gallery.

use std::collections::HashMap;

use synthtour_core::slideshow::Slideshow;

#[derive(Debug)]
pub struct GalleryState {
    pub slideshow: Slideshow,
    art: HashMap<usize, String>,
    generation: u64,
}

impl GalleryState {
    pub fn new(panel_count: usize) -> Self {
        Self {
            slideshow: Slideshow::new(panel_count),
            art: HashMap::new(),
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stores art for a panel. Returns false (and ignores the art) when
    /// the result belongs to a superseded gallery.
    pub fn store_art(&mut self, generation: u64, index: usize, art: String) -> bool {
        if generation != self.generation {
            return false;
        }
        self.art.insert(index, art);
        true
    }

    pub fn art_for(&self, index: usize) -> Option<&str> {
        self.art.get(&index).map(String::as_str)
    }
}

/// Fallback art bundled with the tour, used when the art directory has
/// no file for a panel.
pub fn builtin_art(id: &str) -> Option<&'static str> {
    match id {
        "creator" => Some(include_str!("../../art/creator.txt")),
        "verifier-edit" => Some(include_str!("../../art/verifier-edit.txt")),
        "verifier-assistant" => Some(include_str!("../../art/verifier-assistant.txt")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_generation_art_is_discarded() {
        let mut gallery = GalleryState::new(3);
        assert!(!gallery.store_art(99, 0, "stale".to_string()));
        assert!(gallery.art_for(0).is_none());

        let generation = gallery.generation();
        assert!(gallery.store_art(generation, 0, "fresh".to_string()));
        assert_eq!(gallery.art_for(0), Some("fresh"));
    }

    #[test]
    fn test_builtin_art_covers_builtin_panels() {
        for shot in synthtour_core::content::Content::builtin().screenshots {
            assert!(builtin_art(shot.id).is_some(), "missing art for {}", shot.id);
        }
        assert!(builtin_art("unknown").is_none());
    }
}
