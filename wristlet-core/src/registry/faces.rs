//! Watch face identifiers and the face registry
//!
//! Faces are hosted by the Clock app. They share the app contract but are
//! keyed by their own identifier, so the face picker can enumerate and
//! filter them without going through the app registry.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{screen_registry, IdSet, Registry};
use crate::screens::faces::{CasioStyle, Digital, Infineat, Terminal};

/// Selectable watch faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WatchFace {
    #[default]
    Digital,
    Terminal,
    CasioStyle,
    Infineat,
}

/// Faces offered by the picker, in menu order
pub const WATCH_FACES: IdSet<WatchFace> = IdSet::new(&[
    WatchFace::Digital,
    WatchFace::Terminal,
    WatchFace::CasioStyle,
    WatchFace::Infineat,
]);

impl WatchFace {
    /// Human-readable name
    pub fn name(self) -> &'static str {
        FaceScreen::name_of(self)
    }
}

screen_registry! {
    /// The face hosted by the Clock app
    pub enum FaceScreen for WatchFace {
        Digital => Digital,
        Terminal => Terminal,
        CasioStyle => CasioStyle,
        Infineat => Infineat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wristlet_hal::storage::paths;
    use wristlet_hal::ResourceList;

    #[test]
    fn test_font_faces_need_resources() {
        let empty = ResourceList::empty();
        assert!(FaceScreen::is_available(WatchFace::Digital, &empty));
        assert!(FaceScreen::is_available(WatchFace::Terminal, &empty));
        assert!(!FaceScreen::is_available(WatchFace::CasioStyle, &empty));
        assert!(!FaceScreen::is_available(WatchFace::Infineat, &empty));
    }

    #[test]
    fn test_partial_resources_are_not_enough() {
        let files = [paths::FONT_TEKO];
        let store = ResourceList::new(&files);
        assert!(!FaceScreen::is_available(WatchFace::Infineat, &store));

        let files = [paths::FONT_TEKO, paths::FONT_BEBAS];
        let store = ResourceList::new(&files);
        assert!(FaceScreen::is_available(WatchFace::Infineat, &store));
    }

    #[test]
    fn test_available_faces_keep_order() {
        let files = [
            paths::FONT_DOTS_40,
            paths::FONT_7SEGMENT_40,
            paths::FONT_7SEGMENT_115,
        ];
        let store = ResourceList::new(&files);
        let mut faces = WATCH_FACES.available::<FaceScreen>(&store);
        assert_eq!(faces.next(), Some(WatchFace::Digital));
        assert_eq!(faces.next(), Some(WatchFace::Terminal));
        assert_eq!(faces.next(), Some(WatchFace::CasioStyle));
        assert_eq!(faces.next(), None);
    }
}
