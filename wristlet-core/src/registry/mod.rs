//! Compile-time screen registries
//!
//! Each selectable unit (an app, a watch face) is a distinct concrete type
//! with its own subset of controller needs. A registry maps the closed
//! identifier enum onto those types without trait objects or heap
//! allocation:
//!
//! - every screen type implements [`ScreenTraits`] once, for its identifier
//! - [`screen_registry!`] generates a handle enum with one variant per
//!   identifier, plus exhaustive `match` dispatch for construction,
//!   availability, naming and the [`Screen`] entry points
//!
//! Leaving an identifier out of a registry is a build error (non-exhaustive
//! match), as is a row whose screen type is registered under a different
//! identifier.

pub mod apps;
pub mod faces;

pub use apps::{AppScreen, Apps, ALL_APPS, SETTING_APPS, USER_APPS};
pub use faces::{FaceScreen, WatchFace, WATCH_FACES};

use wristlet_hal::{ResourceStore, Surface};

use crate::controllers::Controllers;
use crate::screens::Screen;

/// Per-identifier screen contract
pub trait ScreenTraits<Id: Copy + 'static>: Screen + Sized {
    /// Identifier this screen is registered under
    const ID: Id;

    /// Human-readable label
    const NAME: &'static str;

    /// Resources that must be present in storage
    const RESOURCES: &'static [&'static str] = &[];

    /// Construct the screen, creating its widgets on the surface
    ///
    /// Called only after [`is_available`](ScreenTraits::is_available)
    /// returned true.
    fn create(deps: &mut Controllers<'_>, surface: &mut dyn Surface) -> Self;

    /// Check if the screen can be constructed on this device
    fn is_available(storage: &dyn ResourceStore) -> bool {
        storage.contains_all(Self::RESOURCES)
    }
}

/// Dispatch over a closed set of screens
///
/// Implemented by the handle enums generated with [`screen_registry!`].
pub trait Registry: Screen + Sized {
    type Id: Copy + PartialEq + 'static;

    /// Construct the screen registered for an identifier
    fn construct(id: Self::Id, deps: &mut Controllers<'_>, surface: &mut dyn Surface) -> Self;

    /// Check if the screen for an identifier can be constructed
    fn is_available(id: Self::Id, storage: &dyn ResourceStore) -> bool;

    /// Name of the screen registered for an identifier
    fn name_of(id: Self::Id) -> &'static str;

    /// Identifier of this screen
    fn id(&self) -> Self::Id;

    /// Name of this screen
    fn name(&self) -> &'static str {
        Self::name_of(self.id())
    }
}

/// Fixed, ordered list of identifiers
///
/// Used to build menus in a declared order without materializing any
/// screens. Iteration is lazy and can be restarted at will.
#[derive(Debug, Clone, Copy)]
pub struct IdSet<Id: 'static> {
    ids: &'static [Id],
}

impl<Id: Copy + PartialEq + 'static> IdSet<Id> {
    /// Create a set from a static list
    pub const fn new(ids: &'static [Id]) -> Self {
        Self { ids }
    }

    /// Iterate in declared order
    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'static, Id>> {
        self.ids.iter().copied()
    }

    /// Number of identifiers
    pub const fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the set is empty
    pub const fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Identifier at a position
    pub fn get(&self, index: usize) -> Option<Id> {
        self.ids.get(index).copied()
    }

    /// Check if an identifier is in the set
    pub fn contains(&self, id: Id) -> bool {
        self.ids.contains(&id)
    }

    /// Position of an identifier in the set
    pub fn position(&self, id: Id) -> Option<usize> {
        self.ids.iter().position(|candidate| *candidate == id)
    }

    /// Iterate over the identifiers whose screens are available
    pub fn available<'s, R>(&self, storage: &'s dyn ResourceStore) -> impl Iterator<Item = Id> + 's
    where
        R: Registry<Id = Id>,
    {
        self.iter().filter(move |id| R::is_available(*id, storage))
    }
}

impl<Id: Copy + PartialEq + 'static> IntoIterator for IdSet<Id> {
    type Item = Id;
    type IntoIter = core::iter::Copied<core::slice::Iter<'static, Id>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter().copied()
    }
}

/// Generate a handle enum and its [`Registry`] / [`Screen`] dispatch
///
/// ```ignore
/// screen_registry! {
///     #[derive(Debug)]
///     pub enum AppScreen for Apps {
///         Launcher => Launcher,
///         Clock => Clock,
///     }
/// }
/// ```
macro_rules! screen_registry {
    (
        $(#[$meta:meta])*
        $vis:vis enum $handle:ident for $id:ident {
            $($variant:ident => $screen:ty),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $handle {
            $(
                #[doc = concat!("Active `", stringify!($variant), "` screen")]
                $variant($screen),
            )+
        }

        $(
            const _: () = assert!(
                matches!(
                    <$screen as $crate::registry::ScreenTraits<$id>>::ID,
                    $id::$variant
                ),
                "registry row names a screen registered under another identifier"
            );
        )+

        impl $crate::registry::Registry for $handle {
            type Id = $id;

            fn construct(
                id: $id,
                deps: &mut $crate::controllers::Controllers<'_>,
                surface: &mut dyn ::wristlet_hal::Surface,
            ) -> Self {
                match id {
                    $(
                        $id::$variant => $handle::$variant(
                            <$screen as $crate::registry::ScreenTraits<$id>>::create(deps, surface),
                        ),
                    )+
                }
            }

            fn is_available(id: $id, storage: &dyn ::wristlet_hal::ResourceStore) -> bool {
                match id {
                    $(
                        $id::$variant => {
                            <$screen as $crate::registry::ScreenTraits<$id>>::is_available(storage)
                        }
                    )+
                }
            }

            fn name_of(id: $id) -> &'static str {
                match id {
                    $($id::$variant => <$screen as $crate::registry::ScreenTraits<$id>>::NAME,)+
                }
            }

            fn id(&self) -> $id {
                match self {
                    $($handle::$variant(_) => $id::$variant,)+
                }
            }
        }

        impl $crate::screens::Screen for $handle {
            fn refresh(
                &mut self,
                deps: &mut $crate::controllers::Controllers<'_>,
                surface: &mut dyn ::wristlet_hal::Surface,
            ) {
                match self {
                    $($handle::$variant(screen) => $crate::screens::Screen::refresh(screen, deps, surface),)+
                }
            }

            fn on_input(
                &mut self,
                input: ::wristlet_hal::Input,
                deps: &mut $crate::controllers::Controllers<'_>,
                surface: &mut dyn ::wristlet_hal::Surface,
            ) -> $crate::screens::Navigation {
                match self {
                    $(
                        $handle::$variant(screen) => {
                            $crate::screens::Screen::on_input(screen, input, deps, surface)
                        }
                    )+
                }
            }

            fn release(
                &mut self,
                deps: &mut $crate::controllers::Controllers<'_>,
                surface: &mut dyn ::wristlet_hal::Surface,
            ) {
                match self {
                    $($handle::$variant(screen) => $crate::screens::Screen::release(screen, deps, surface),)+
                }
            }
        }
    };
}

pub(crate) use screen_registry;
