use crate::types::TrackEntry;
use heapless::Vec;

/// Track catalog validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CatalogError {
    /// No tracks provided.
    EmptyCatalog,

    /// Catalog capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CatalogError::EmptyCatalog => {
                write!(f, "catalog must have at least one track")
            }
            CatalogError::CapacityExceeded => {
                write!(f, "catalog capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CatalogError {}

/// An ordered, fixed-capacity list of selectable tracks.
///
/// The catalog is resolved once at startup and read-only afterwards. Indices
/// handed out by the player are always within `0..len()`.
///
/// # Type Parameters
/// * `N` - Maximum number of tracks this catalog can hold
#[derive(Debug, Clone)]
pub struct TrackCatalog<const N: usize> {
    tracks: Vec<TrackEntry, N>,
}

impl<const N: usize> TrackCatalog<N> {
    /// Creates a new catalog builder.
    pub fn builder() -> CatalogBuilder<N> {
        CatalogBuilder::new()
    }

    /// Builds a catalog from a slice of entries.
    ///
    /// # Errors
    /// * `EmptyCatalog` - The slice is empty
    /// * `CapacityExceeded` - The slice holds more than `N` entries
    pub fn from_entries(entries: &[TrackEntry]) -> Result<Self, CatalogError> {
        let mut builder = CatalogBuilder::new();
        for entry in entries {
            builder = builder.entry(*entry)?;
        }
        builder.build()
    }

    /// Returns the track at `index`.
    pub fn get(&self, index: usize) -> Option<&TrackEntry> {
        self.tracks.get(index)
    }

    /// Number of tracks in the catalog. Never zero.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always false; an empty catalog cannot be built.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Index of the last track.
    pub fn last_index(&self) -> usize {
        self.tracks.len() - 1
    }

    /// Iterates over the tracks in display order.
    pub fn iter(&self) -> impl Iterator<Item = &TrackEntry> {
        self.tracks.iter()
    }
}

/// Builder for constructing validated track catalogs.
#[derive(Debug)]
pub struct CatalogBuilder<const N: usize> {
    tracks: Vec<TrackEntry, N>,
}

impl<const N: usize> CatalogBuilder<N> {
    /// Creates a new empty catalog builder.
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Appends a track.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if the catalog already holds `N` tracks.
    pub fn track(
        self,
        display_name: &'static str,
        asset_id: &'static str,
    ) -> Result<Self, CatalogError> {
        self.entry(TrackEntry::new(display_name, asset_id))
    }

    /// Appends an existing entry.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if the catalog already holds `N` tracks.
    pub fn entry(mut self, entry: TrackEntry) -> Result<Self, CatalogError> {
        self.tracks
            .push(entry)
            .map_err(|_| CatalogError::CapacityExceeded)?;
        Ok(self)
    }

    /// Builds and validates the catalog.
    ///
    /// # Errors
    /// * `EmptyCatalog` - No tracks were added
    pub fn build(self) -> Result<TrackCatalog<N>, CatalogError> {
        if self.tracks.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        Ok(TrackCatalog {
            tracks: self.tracks,
        })
    }
}

impl<const N: usize> Default for CatalogBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_insertion_order() {
        let catalog = TrackCatalog::<4>::builder()
            .track("409 REV", "409_22.wav")
            .unwrap()
            .track("Jet START", "jet_start_22.wav")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.last_index(), 1);
        assert_eq!(catalog.get(0).unwrap().display_name, "409 REV");
        assert_eq!(catalog.get(1).unwrap().asset_id, "jet_start_22.wav");
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let result = TrackCatalog::<4>::builder().build();
        assert_eq!(result.unwrap_err(), CatalogError::EmptyCatalog);
    }

    #[test]
    fn overfull_catalog_is_rejected() {
        let result = TrackCatalog::<1>::builder()
            .track("A", "a.wav")
            .unwrap()
            .track("B", "b.wav");
        assert_eq!(result.unwrap_err(), CatalogError::CapacityExceeded);
    }

    #[test]
    fn from_entries_matches_builder() {
        let entries = [TrackEntry::new("A", "a.wav"), TrackEntry::new("B", "b.wav")];
        let catalog = TrackCatalog::<2>::from_entries(&entries).unwrap();
        assert!(catalog.iter().copied().eq(entries.iter().copied()));

        assert_eq!(
            TrackCatalog::<1>::from_entries(&entries).unwrap_err(),
            CatalogError::CapacityExceeded
        );
        assert_eq!(
            TrackCatalog::<1>::from_entries(&[]).unwrap_err(),
            CatalogError::EmptyCatalog
        );
    }
}
